use chrono::{Datelike, Local};
use yew::prelude::*;

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = Local::now().year();

    html! {
        <footer class="site-footer">
            <div class="footer-inner">
                <p>{format!("© {year} Estúdio Luana Palheta — Arq. & Interiores · São Paulo/SP")}</p>
                <div class="footer-links">
                    <a href="https://instagram.com" target="_blank" rel="noreferrer">
                        <svg width="16" height="16" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" aria-hidden="true">
                            <rect x="2" y="2" width="20" height="20" rx="5" ry="5"></rect>
                            <path d="M16 11.37A4 4 0 1 1 12.63 8 4 4 0 0 1 16 11.37z"></path>
                            <line x1="17.5" y1="6.5" x2="17.5" y2="6.5"></line>
                        </svg>
                        {"Instagram"}
                    </a>
                    <a href="https://linkedin.com" target="_blank" rel="noreferrer">
                        <svg width="16" height="16" viewBox="0 0 24 24" fill="currentColor" aria-hidden="true">
                            <path d="M4.98 3.5C4.98 4.88 3.86 6 2.5 6S0 4.88 0 3.5 1.12 1 2.5 1s2.48 1.12 2.48 2.5zM.5 8.5h4V24h-4V8.5zM8.5 8.5h3.8v2.1h.1c.5-1 1.8-2.1 3.7-2.1 4 0 4.8 2.6 4.8 6V24h-4v-6.6c0-1.6 0-3.6-2.2-3.6s-2.5 1.7-2.5 3.5V24h-4V8.5z"/>
                        </svg>
                        {"LinkedIn"}
                    </a>
                    <a href="https://behance.net" target="_blank" rel="noreferrer">
                        <svg width="16" height="16" viewBox="0 0 24 24" fill="currentColor" aria-hidden="true">
                            <path d="M7.2 10.5c.9 0 1.6.2 2 .5V9.6c-.4-.2-1.1-.3-2-.3-2.6 0-4.2 1.5-4.2 4s1.6 4 4 4c1 0 1.7-.1 2.2-.3v-1.5c-.5.3-1.2.4-2 .4-1.2 0-2.2-.5-2.3-1.8h4.4c.1-.3.1-.6.1-.8 0-1.7-1-3.2-3.2-3.2zm-2 2.6c.1-1 .9-1.6 2-1.6s1.7.6 1.8 1.6H5.2zM17.3 9.2c-2.4 0-4 1.6-4 4s1.6 4 4 4c1.9 0 3.3-1.1 3.6-2.8h-1.8c-.2.8-.9 1.2-1.8 1.2-1.2 0-1.9-.7-2-2h5.6c.1-.3.1-.5.1-.8 0-2.1-1.4-3.6-3.7-3.6zm-1.9 3.1c.1-1 .8-1.6 1.9-1.6s1.7.6 1.8 1.6h-3.7zM14.5 7h4V8.2h-4V7z"/>
                        </svg>
                        {"Behance"}
                    </a>
                </div>
            </div>
        </footer>
    }
}
