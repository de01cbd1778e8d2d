//! The static marketing sections: sobre, serviços, depoimentos and the
//! closing CTA band.

use yew::prelude::*;

use crate::content::{SERVICES, TESTIMONIALS};

#[derive(Properties, PartialEq)]
pub struct SectionHeadingProps {
    #[prop_or_default]
    pub kicker: Option<&'static str>,
    pub title: &'static str,
    #[prop_or_default]
    pub subtitle: Option<&'static str>,
}

#[function_component(SectionHeading)]
pub fn section_heading(props: &SectionHeadingProps) -> Html {
    html! {
        <div class="section-heading">
            {
                props.kicker.map(|kicker| html! {
                    <p class="section-kicker">{kicker}</p>
                }).unwrap_or_default()
            }
            <h2>{props.title}</h2>
            {
                props.subtitle.map(|subtitle| html! {
                    <p class="section-subtitle">{subtitle}</p>
                }).unwrap_or_default()
            }
        </div>
    }
}

#[function_component(About)]
pub fn about() -> Html {
    html! {
        <section id="sobre" class="section">
            <div class="section-inner">
                <SectionHeading
                    kicker="sobre"
                    title="Arquitetura centrada em pessoas"
                    subtitle="Cada projeto é um diálogo entre estética, técnica e propósito."
                />
                <div class="about-grid">
                    <p class="about-text">
                        {"Atuo do estudo preliminar ao executivo, coordenando disciplinas, detalhamento e acompanhamento de obra. Minha abordagem combina processos claros, uso inteligente do orçamento e seleção criteriosa de fornecedores."}
                    </p>
                    <ul class="about-list">
                        <li>{"Projetos residenciais, comerciais e institucionais"}</li>
                        <li>{"Interiores, reformas e retrofit"}</li>
                        <li>{"Arquitetura sustentável e eficiência energética"}</li>
                        <li>{"Consultoria de layout e iluminação"}</li>
                    </ul>
                </div>
            </div>
        </section>
    }
}

#[function_component(Services)]
pub fn services() -> Html {
    html! {
        <section id="servicos" class="section">
            <div class="section-inner">
                <SectionHeading
                    kicker="serviços"
                    title="Do esboço à entrega"
                    subtitle="Pacotes sob medida para a necessidade de cada cliente."
                />
                <div class="services-grid">
                    {
                        SERVICES.iter().map(|service| html! {
                            <div class="service-card" key={service.title}>
                                <h3>{service.title}</h3>
                                <p>{service.description}</p>
                            </div>
                        }).collect::<Html>()
                    }
                </div>
            </div>
        </section>
    }
}

#[function_component(Testimonials)]
pub fn testimonials() -> Html {
    html! {
        <section id="depoimentos" class="section">
            <div class="section-inner">
                <SectionHeading kicker="depoimentos" title="O que clientes dizem" />
                <div class="testimonials-grid">
                    {
                        TESTIMONIALS.iter().map(|t| html! {
                            <blockquote class="testimonial-card" key={t.author}>
                                <p>{format!("“{}”", t.quote)}</p>
                                <footer>{t.author}</footer>
                            </blockquote>
                        }).collect::<Html>()
                    }
                </div>
            </div>
        </section>
    }
}

#[function_component(CtaBand)]
pub fn cta_band() -> Html {
    html! {
        <section class="section cta-section">
            <div class="section-inner">
                <div class="cta-band">
                    <div>
                        <h3>{"Vamos conversar sobre o seu projeto?"}</h3>
                        <p>{"Orçamento sem compromisso. Resposta em até 24h úteis."}</p>
                    </div>
                    <a href="#contato" class="button-primary">{"Solicitar Proposta"}</a>
                </div>
            </div>
        </section>
    }
}
