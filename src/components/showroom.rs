//! 3D/AR showroom embed. Renders the `<model-viewer>` custom element
//! (script loaded from index.html); the element handles camera, AR session
//! and rendering itself, so this stays purely declarative.

use yew::prelude::*;

use crate::components::sections::SectionHeading;

#[derive(Properties, PartialEq)]
pub struct ModelViewerProps {
    pub src: AttrValue,
    pub ios_src: AttrValue,
    pub alt: AttrValue,
    #[prop_or_default]
    pub environment_image: Option<AttrValue>,
}

#[function_component(ModelViewer)]
pub fn model_viewer(props: &ModelViewerProps) -> Html {
    html! {
        <model-viewer
            class="model-viewer"
            src={props.src.clone()}
            ios-src={props.ios_src.clone()}
            alt={props.alt.clone()}
            ar=""
            ar-modes="webxr scene-viewer quick-look"
            ar-scale="auto"
            camera-controls=""
            environment-image={props.environment_image.clone()}
            shadow-intensity="1"
        ></model-viewer>
    }
}

#[function_component(Showroom)]
pub fn showroom() -> Html {
    html! {
        <section id="showroom" class="section">
            <div class="section-inner">
                <SectionHeading
                    kicker="imersão"
                    title="Visite o projeto em 3D e AR"
                    subtitle="Explore um ambiente assinado pelo estúdio no navegador ou projete-o na sua própria sala."
                />
                <div class="showroom-frame">
                    <ModelViewer
                        src="/models/sala-jardim.glb"
                        ios_src="/models/sala-jardim.usdz"
                        alt="Modelo 3D da sala do Apartamento Jardim"
                    />
                </div>
            </div>
        </section>
    }
}
