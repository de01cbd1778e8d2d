use yew::prelude::*;

use crate::components::sections::SectionHeading;
use crate::content::Project;

#[derive(Properties, PartialEq)]
pub struct PortfolioProps {
    pub projects: Vec<Project>,
    /// Invoked with the selected project when a card is activated.
    pub on_open: Callback<Project>,
}

#[function_component(Portfolio)]
pub fn portfolio(props: &PortfolioProps) -> Html {
    html! {
        <section id="portfolio" class="section">
            <div class="section-inner">
                <SectionHeading
                    kicker="portfólio"
                    title="Seleção de projetos"
                    subtitle="Breve curadoria de trabalhos recentes."
                />
                <div class="portfolio-grid">
                    {
                        props.projects.iter().map(|project| {
                            let onclick = {
                                let on_open = props.on_open.clone();
                                let project = project.clone();
                                Callback::from(move |_| on_open.emit(project.clone()))
                            };
                            html! {
                                <button class="portfolio-card" key={project.id} {onclick}>
                                    <img src={project.cover.clone()} alt={project.title.clone()} />
                                    <div class="portfolio-card-caption">
                                        <span>{&project.title}</span>
                                        <span class="portfolio-card-tag">{&project.tag}</span>
                                    </div>
                                </button>
                            }
                        }).collect::<Html>()
                    }
                </div>
            </div>
        </section>
    }
}
