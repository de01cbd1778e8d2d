use log::{info, Level};
use yew::prelude::*;

mod config;
mod content;
mod gallery;
mod style;
mod theme;
mod components {
    pub mod contact;
    pub mod footer;
    pub mod hero;
    pub mod navbar;
    pub mod portfolio;
    pub mod project_modal;
    pub mod sections;
    pub mod showroom;
}

use components::{
    contact::Contact,
    footer::Footer,
    hero::Hero,
    navbar::Navbar,
    portfolio::Portfolio,
    project_modal::ProjectModal,
    sections::{About, CtaBand, Services, Testimonials},
    showroom::Showroom,
};
use content::Project;
use gallery::GalleryView;
use style::GlobalStyle;

#[function_component]
fn App() -> Html {
    let theme = use_state(theme::load);
    let gallery = use_state(|| GalleryView::Closed);

    // Re-applied and persisted on every toggle.
    {
        let current = *theme;
        use_effect_with_deps(
            move |_| {
                theme::apply(current);
                theme::store(current);
                || ()
            },
            current,
        );
    }

    let on_toggle_theme = {
        let theme = theme.clone();
        Callback::from(move |_| theme.set(theme.toggled()))
    };

    let on_open_project = {
        let gallery = gallery.clone();
        Callback::from(move |project: Project| gallery.set(GalleryView::open(project)))
    };

    let on_gallery_change = {
        let gallery = gallery.clone();
        Callback::from(move |next: GalleryView| gallery.set(next))
    };

    html! {
        <>
            <GlobalStyle />
            <Navbar theme={*theme} on_toggle_theme={on_toggle_theme} />
            <main>
                <Hero />
                <About />
                <Services />
                <Portfolio projects={content::projects()} on_open={on_open_project} />
                <Testimonials />
                <CtaBand />
                <Showroom />
                <Contact />
            </main>
            <Footer />
            {
                if gallery.is_open() {
                    html! { <ProjectModal view={(*gallery).clone()} on_change={on_gallery_change} /> }
                } else {
                    html! {}
                }
            }
        </>
    }
}

fn main() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
