use web_sys::{window, Event, MouseEvent};
use yew::prelude::*;
use yew_hooks::use_event_with_window;

use crate::theme::Theme;

#[derive(Properties, PartialEq)]
pub struct ThemeToggleProps {
    pub theme: Theme,
    pub on_toggle: Callback<()>,
}

#[function_component(ThemeToggle)]
pub fn theme_toggle(props: &ThemeToggleProps) -> Html {
    let is_dark = props.theme == Theme::Dark;
    let onclick = {
        let on_toggle = props.on_toggle.clone();
        Callback::from(move |_: MouseEvent| on_toggle.emit(()))
    };
    let label = if is_dark {
        "Ativar modo claro"
    } else {
        "Ativar modo escuro"
    };

    html! {
        <button class="theme-toggle" type="button" {onclick} aria-label={label} title={label}>
            {
                if is_dark {
                    // Sol
                    html! {
                        <svg width="18" height="18" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" aria-hidden="true">
                            <circle cx="12" cy="12" r="4"></circle>
                            <path d="M12 2v2m0 16v2M4.93 4.93l1.41 1.41M17.66 17.66l1.41 1.41M2 12h2m16 0h2M4.93 19.07l1.41-1.41M17.66 6.34l1.41-1.41" />
                        </svg>
                    }
                } else {
                    // Lua
                    html! {
                        <svg width="18" height="18" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" aria-hidden="true">
                            <path d="M21 12.79A9 9 0 1 1 11.21 3 7 7 0 0 0 21 12.79z"></path>
                        </svg>
                    }
                }
            }
        </button>
    }
}

#[derive(Properties, PartialEq)]
pub struct NavbarProps {
    pub theme: Theme,
    pub on_toggle_theme: Callback<()>,
}

const SECTION_LINKS: &[(&str, &str)] = &[
    ("#sobre", "Sobre"),
    ("#servicos", "Serviços"),
    ("#portfolio", "Portfólio"),
    ("#depoimentos", "Depoimentos"),
    ("#contato", "Contato"),
];

#[function_component(Navbar)]
pub fn navbar(props: &NavbarProps) -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_event_with_window("scroll", move |_: Event| {
            let offset = window()
                .and_then(|w| w.scroll_y().ok())
                .unwrap_or_default();
            is_scrolled.set(offset > 24.0);
        });
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(false))
    };

    let menu_class = if *menu_open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    html! {
        <header class={classes!("top-nav", (*is_scrolled).then_some("scrolled"))}>
            <div class="nav-content">
                <a href="#hero" class="nav-logo">{"Luana Palheta • Arquitetura"}</a>
                <button class="burger-menu" onclick={toggle_menu} aria-label="Abrir menu">
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    <nav class="nav-links" onclick={close_menu}>
                        {
                            SECTION_LINKS.iter().map(|&(href, label)| html! {
                                <a href={href} class="nav-link">{label}</a>
                            }).collect::<Html>()
                        }
                    </nav>
                    <ThemeToggle theme={props.theme} on_toggle={props.on_toggle_theme.clone()} />
                    <a href="#contato" class="nav-cta">{"Solicitar Orçamento"}</a>
                </div>
            </div>
        </header>
    }
}
