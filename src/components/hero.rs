use yew::prelude::*;

#[function_component(Hero)]
pub fn hero() -> Html {
    html! {
        <section id="hero" class="hero">
            <div class="hero-inner">
                <div class="hero-copy">
                    <h1>{"Arquitetura autoral, funcional e atemporal"}</h1>
                    <p class="hero-subtitle">
                        {"Projetos residenciais e comerciais com curadoria de materiais, iluminação e ergonomia. Do conceito à execução."}
                    </p>
                    <div class="hero-actions">
                        <a href="#contato" class="button-primary">{"Agendar Conversa"}</a>
                        <a href="#portfolio" class="button-outline">{"Ver Portfólio"}</a>
                    </div>
                    <div class="hero-stats">
                        <span>{"+7 anos de experiência"}</span>
                        <span>{"+120 projetos entregues"}</span>
                        <span>{"Atendimento em todo o Brasil"}</span>
                    </div>
                </div>
                <div class="hero-figure">
                    <img
                        src="https://images.unsplash.com/photo-1505693416388-ac5ce068fe85?q=80&w=1600&auto=format&fit=crop"
                        alt="Sala de estar contemporânea com marcenaria e iluminação cênica"
                    />
                </div>
            </div>
        </section>
    }
}
