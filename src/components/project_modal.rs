//! The project detail modal and the full-screen lightbox nested in it.
//!
//! The component is mounted only while the gallery state is open, so the
//! window keydown listener lives exactly as long as the modal: installed on
//! mount, removed by the effect destructor on unmount. The effect depends on
//! the gallery state itself and therefore re-registers on every transition,
//! so the handler always closes over the current state rather than the one
//! captured when the modal first opened.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{KeyboardEvent, MouseEvent};
use yew::prelude::*;

use crate::gallery::GalleryView;

#[derive(Properties, PartialEq)]
pub struct ProjectModalProps {
    pub view: GalleryView,
    /// Receives every state transition triggered from inside the modal.
    pub on_change: Callback<GalleryView>,
}

#[function_component(ProjectModal)]
pub fn project_modal(props: &ProjectModalProps) -> Html {
    {
        let on_change = props.on_change.clone();
        use_effect_with_deps(
            move |view: &GalleryView| {
                let view = view.clone();
                let handler = Closure::wrap(Box::new(move |e: KeyboardEvent| {
                    if let Some(next) = view.on_key(&e.key()) {
                        on_change.emit(next);
                    }
                }) as Box<dyn FnMut(KeyboardEvent)>);

                let window = web_sys::window().unwrap();
                window
                    .add_event_listener_with_callback("keydown", handler.as_ref().unchecked_ref())
                    .unwrap();

                move || {
                    window
                        .remove_event_listener_with_callback(
                            "keydown",
                            handler.as_ref().unchecked_ref(),
                        )
                        .unwrap();
                }
            },
            props.view.clone(),
        );
    }

    let Some(project) = props.view.project().cloned() else {
        return html! {};
    };

    let emit = |next: GalleryView| {
        let on_change = props.on_change.clone();
        Callback::from(move |_: MouseEvent| on_change.emit(next.clone()))
    };

    let close_modal = emit(props.view.close());

    html! {
        <div class="modal-layer">
            <div class="modal-backdrop" onclick={close_modal.clone()}></div>
            <div class="modal-panel">
                <div class="modal-header">
                    <div>
                        <h3>{&project.title}</h3>
                        <p class="modal-tag">{&project.tag}</p>
                    </div>
                    <button class="modal-close" onclick={close_modal}>{"Fechar"}</button>
                </div>
                <div class="modal-specs">
                    <div><span>{"Metragem"}</span>{&project.specs.area}</div>
                    <div><span>{"Ano"}</span>{&project.specs.year}</div>
                    <div><span>{"Localização"}</span>{&project.specs.location}</div>
                    <div><span>{"Escopo"}</span>{&project.specs.scope}</div>
                </div>
                <div class="modal-thumbs">
                    {
                        project.images.iter().enumerate().map(|(idx, src)| html! {
                            <button
                                class="modal-thumb"
                                key={src.clone() + &idx.to_string()}
                                onclick={emit(props.view.open_image(idx))}
                            >
                                <img src={src.clone()} alt={format!("{} {}", project.title, idx + 1)} />
                            </button>
                        }).collect::<Html>()
                    }
                </div>
            </div>

            {
                if let Some(index) = props.view.lightbox_index() {
                    html! {
                        <div class="lightbox">
                            <button class="lightbox-close" onclick={emit(props.view.close_image())}>
                                {"Fechar"}
                            </button>
                            <button
                                class="lightbox-nav lightbox-prev"
                                onclick={emit(props.view.previous_image())}
                                aria-label="Imagem anterior"
                            >
                                {"◀"}
                            </button>
                            <img
                                src={project.images[index].clone()}
                                alt={format!("{} imagem {}", project.title, index + 1)}
                            />
                            <button
                                class="lightbox-nav lightbox-next"
                                onclick={emit(props.view.next_image())}
                                aria-label="Próxima imagem"
                            >
                                {"▶"}
                            </button>
                        </div>
                    }
                } else {
                    html! {}
                }
            }
        </div>
    }
}
