//! Site stylesheet, emitted once from the root component. The light and
//! dark variable sets are switched by the `dark` class that `theme::apply`
//! toggles on the document root.

use yew::prelude::*;

#[function_component(GlobalStyle)]
pub fn global_style() -> Html {
    html! {
        <style>
            {r#"
:root {
    --background: #fbfaf8;
    --foreground: #1d1c1a;
    --muted: #efede8;
    --muted-foreground: #6e6a63;
    --card: #ffffff;
    --border: #e4e1da;
    --primary: #8a6d4a;
    --primary-foreground: #fbfaf8;
    --ring: rgba(138, 109, 74, 0.45);
    --backdrop: rgba(20, 18, 15, 0.6);
    --lightbox-backdrop: rgba(10, 9, 8, 0.85);
}

html.dark {
    --background: #16150f;
    --foreground: #ece9e2;
    --muted: #23211a;
    --muted-foreground: #a39d92;
    --card: #1c1a14;
    --border: #2e2b22;
    --primary: #c9a573;
    --primary-foreground: #16150f;
    --ring: rgba(201, 165, 115, 0.5);
    --backdrop: rgba(0, 0, 0, 0.65);
    --lightbox-backdrop: rgba(0, 0, 0, 0.88);
}

* {
    box-sizing: border-box;
}

html {
    scroll-behavior: smooth;
}

body {
    margin: 0;
    font-family: 'Inter', 'Segoe UI', system-ui, sans-serif;
    background: var(--background);
    color: var(--foreground);
    line-height: 1.6;
    transition: background 0.3s ease, color 0.3s ease;
}

h1, h2, h3 {
    letter-spacing: -0.02em;
    line-height: 1.2;
    margin: 0;
}

img {
    display: block;
    max-width: 100%;
}

/* Navigation */

.top-nav {
    position: sticky;
    top: 0;
    z-index: 50;
    background: color-mix(in srgb, var(--background) 82%, transparent);
    backdrop-filter: blur(10px);
    border-bottom: 1px solid var(--border);
    transition: box-shadow 0.3s ease;
}

.top-nav.scrolled {
    box-shadow: 0 6px 24px rgba(0, 0, 0, 0.08);
}

.nav-content {
    max-width: 80rem;
    margin: 0 auto;
    padding: 1rem 1.5rem;
    display: flex;
    align-items: center;
    justify-content: space-between;
    gap: 1rem;
}

.nav-logo {
    font-weight: 600;
    font-size: 1.05rem;
    color: var(--foreground);
    text-decoration: none;
}

.nav-right {
    display: flex;
    align-items: center;
    gap: 1rem;
}

.nav-links {
    display: flex;
    gap: 1rem;
}

.nav-link {
    font-size: 0.9rem;
    color: var(--foreground);
    text-decoration: none;
}

.nav-link:hover {
    color: var(--primary);
    text-decoration: underline;
    text-underline-offset: 4px;
}

.nav-cta {
    background: var(--primary);
    color: var(--primary-foreground);
    padding: 0.5rem 1rem;
    border-radius: 0.5rem;
    font-size: 0.9rem;
    font-weight: 500;
    text-decoration: none;
}

.nav-cta:hover {
    opacity: 0.9;
}

.theme-toggle {
    display: inline-flex;
    align-items: center;
    justify-content: center;
    width: 2.25rem;
    height: 2.25rem;
    border: 1px solid var(--border);
    border-radius: 0.5rem;
    background: var(--background);
    color: var(--foreground);
    cursor: pointer;
}

.theme-toggle:hover {
    background: var(--muted);
}

.theme-toggle:focus-visible,
.nav-cta:focus-visible,
.button-primary:focus-visible,
.portfolio-card:focus-visible,
.modal-thumb:focus-visible {
    outline: 2px solid var(--ring);
    outline-offset: 2px;
}

.burger-menu {
    display: none;
    flex-direction: column;
    gap: 4px;
    background: none;
    border: none;
    cursor: pointer;
    padding: 0.5rem;
}

.burger-menu span {
    width: 22px;
    height: 2px;
    background: var(--foreground);
}

/* Hero */

.hero {
    position: relative;
    overflow: hidden;
}

.hero-inner {
    max-width: 80rem;
    margin: 0 auto;
    padding: 5rem 1.5rem;
    display: grid;
    gap: 2.5rem;
    align-items: center;
}

.hero-copy h1 {
    font-size: clamp(2.25rem, 5vw, 3rem);
    font-weight: 600;
}

.hero-subtitle {
    margin-top: 1rem;
    max-width: 40rem;
    color: var(--muted-foreground);
}

.hero-actions {
    margin-top: 2rem;
    display: flex;
    flex-wrap: wrap;
    gap: 1rem;
}

.hero-stats {
    margin-top: 2rem;
    display: flex;
    flex-wrap: wrap;
    gap: 1.5rem;
    font-size: 0.75rem;
    color: var(--muted-foreground);
}

.hero-figure img {
    width: 100%;
    aspect-ratio: 4 / 3;
    object-fit: cover;
    border-radius: 0.75rem;
    border: 1px solid var(--border);
}

.button-primary {
    display: inline-flex;
    align-items: center;
    justify-content: center;
    background: var(--primary);
    color: var(--primary-foreground);
    border: none;
    border-radius: 0.5rem;
    padding: 0.75rem 1.25rem;
    font-size: 0.9rem;
    font-weight: 500;
    text-decoration: none;
    cursor: pointer;
}

.button-primary:hover {
    opacity: 0.9;
}

.button-primary:disabled {
    opacity: 0.7;
    cursor: not-allowed;
}

.button-outline {
    display: inline-flex;
    align-items: center;
    justify-content: center;
    border: 1px solid var(--border);
    border-radius: 0.5rem;
    padding: 0.75rem 1.25rem;
    font-size: 0.9rem;
    font-weight: 500;
    color: var(--foreground);
    text-decoration: none;
}

.button-outline:hover {
    background: var(--muted);
}

/* Sections */

.section {
    border-top: 1px solid var(--border);
    padding: 4rem 0;
    animation: rise-in 0.7s ease both;
}

.section-inner {
    max-width: 80rem;
    margin: 0 auto;
    padding: 0 1.5rem;
}

.section-heading {
    max-width: 42rem;
    margin: 0 auto;
    text-align: center;
}

.section-kicker {
    text-transform: uppercase;
    letter-spacing: 0.2em;
    font-size: 0.75rem;
    color: var(--primary);
    margin: 0;
}

.section-heading h2 {
    margin-top: 0.5rem;
    font-size: clamp(1.5rem, 3vw, 1.9rem);
    font-weight: 600;
}

.section-subtitle {
    margin-top: 0.75rem;
    color: var(--muted-foreground);
}

.about-grid {
    margin-top: 2.5rem;
    display: grid;
    gap: 2.5rem;
}

.about-text {
    color: var(--muted-foreground);
    margin: 0;
}

.about-list {
    display: grid;
    gap: 1rem;
    list-style: none;
    margin: 0;
    padding: 0;
    font-size: 0.9rem;
}

.about-list li {
    border: 1px solid var(--border);
    border-radius: 0.625rem;
    padding: 1rem;
}

.services-grid {
    margin-top: 2.5rem;
    display: grid;
    gap: 1.5rem;
}

.service-card {
    border: 1px solid var(--border);
    border-radius: 0.75rem;
    padding: 1.5rem;
    background: var(--card);
    transition: box-shadow 0.2s ease;
}

.service-card:hover {
    box-shadow: 0 8px 24px rgba(0, 0, 0, 0.08);
}

.service-card h3 {
    font-weight: 500;
}

.service-card p {
    margin: 0.5rem 0 0;
    font-size: 0.9rem;
    color: var(--muted-foreground);
}

/* Portfolio */

.portfolio-grid {
    margin-top: 2.5rem;
    display: grid;
    gap: 1.5rem;
}

.portfolio-card {
    border: 1px solid var(--border);
    border-radius: 0.75rem;
    overflow: hidden;
    background: var(--card);
    color: var(--foreground);
    padding: 0;
    text-align: left;
    cursor: pointer;
    transition: box-shadow 0.2s ease;
}

.portfolio-card:hover {
    box-shadow: 0 8px 24px rgba(0, 0, 0, 0.1);
}

.portfolio-card img {
    width: 100%;
    aspect-ratio: 4 / 3;
    object-fit: cover;
    transition: transform 0.3s ease;
}

.portfolio-card:hover img {
    transform: scale(1.02);
}

.portfolio-card-caption {
    display: flex;
    align-items: center;
    justify-content: space-between;
    padding: 1rem;
    font-size: 0.9rem;
}

.portfolio-card-tag {
    color: var(--muted-foreground);
}

/* Testimonials and CTA */

.testimonials-grid {
    margin-top: 2.5rem;
    display: grid;
    gap: 1.5rem;
}

.testimonial-card {
    margin: 0;
    border: 1px solid var(--border);
    border-radius: 0.75rem;
    padding: 1.5rem;
    background: var(--card);
}

.testimonial-card footer {
    margin-top: 1rem;
    font-size: 0.9rem;
    color: var(--muted-foreground);
}

.cta-section {
    padding: 3rem 0;
}

.cta-band {
    display: grid;
    gap: 1.5rem;
    align-items: center;
    border: 1px solid var(--border);
    border-radius: 1rem;
    background: var(--card);
    padding: 2rem;
}

.cta-band p {
    margin: 0.5rem 0 0;
    font-size: 0.9rem;
    color: var(--muted-foreground);
}

/* Showroom */

.showroom-frame {
    margin-top: 2.5rem;
    border: 1px solid var(--border);
    border-radius: 1rem;
    overflow: hidden;
    background: var(--card);
}

.model-viewer {
    width: 100%;
    height: 28rem;
    display: block;
}

/* Modal and lightbox */

.modal-layer {
    position: fixed;
    inset: 0;
    z-index: 60;
}

.modal-backdrop {
    position: absolute;
    inset: 0;
    background: var(--backdrop);
}

.modal-panel {
    position: relative;
    max-width: 64rem;
    margin: 2.5rem auto;
    max-height: calc(100vh - 5rem);
    overflow-y: auto;
    border: 1px solid var(--border);
    border-radius: 1rem;
    background: var(--background);
    padding: 1.5rem;
    box-shadow: 0 24px 48px rgba(0, 0, 0, 0.25);
}

.modal-header {
    display: flex;
    align-items: center;
    justify-content: space-between;
    margin-bottom: 1rem;
}

.modal-header h3 {
    font-size: 1.1rem;
    font-weight: 600;
}

.modal-tag {
    margin: 0.25rem 0 0;
    font-size: 0.75rem;
    color: var(--muted-foreground);
}

.modal-close {
    border: 1px solid var(--border);
    border-radius: 0.5rem;
    background: var(--background);
    color: var(--foreground);
    padding: 0.25rem 0.75rem;
    font-size: 0.9rem;
    cursor: pointer;
}

.modal-close:hover {
    background: var(--muted);
}

.modal-specs {
    display: grid;
    gap: 0.75rem;
    border: 1px solid var(--border);
    border-radius: 0.75rem;
    background: var(--card);
    padding: 1rem;
    margin-bottom: 1.5rem;
    font-size: 0.9rem;
    color: var(--muted-foreground);
}

.modal-specs span {
    display: block;
    text-transform: uppercase;
    letter-spacing: 0.15em;
    font-size: 0.7rem;
    color: var(--foreground);
    opacity: 0.7;
}

.modal-thumbs {
    display: grid;
    gap: 0.75rem;
}

.modal-thumb {
    border: 1px solid var(--border);
    border-radius: 0.5rem;
    overflow: hidden;
    padding: 0;
    cursor: pointer;
    background: none;
}

.modal-thumb img {
    width: 100%;
    aspect-ratio: 4 / 3;
    object-fit: cover;
}

.lightbox {
    position: fixed;
    inset: 0;
    z-index: 70;
    display: flex;
    align-items: center;
    justify-content: center;
    background: var(--lightbox-backdrop);
}

.lightbox img {
    max-height: 80vh;
    max-width: 92vw;
    object-fit: contain;
    border: 1px solid var(--border);
    border-radius: 0.5rem;
    box-shadow: 0 32px 64px rgba(0, 0, 0, 0.5);
}

.lightbox-close {
    position: absolute;
    top: 1.5rem;
    right: 1.5rem;
    border: 1px solid var(--border);
    border-radius: 0.5rem;
    background: color-mix(in srgb, var(--background) 70%, transparent);
    color: var(--foreground);
    backdrop-filter: blur(6px);
    padding: 0.25rem 0.75rem;
    font-size: 0.9rem;
    cursor: pointer;
}

.lightbox-nav {
    position: absolute;
    top: 50%;
    transform: translateY(-50%);
    border: 1px solid var(--border);
    border-radius: 9999px;
    background: color-mix(in srgb, var(--background) 70%, transparent);
    color: var(--foreground);
    backdrop-filter: blur(6px);
    padding: 0.5rem 0.75rem;
    cursor: pointer;
}

.lightbox-prev {
    left: 1.5rem;
}

.lightbox-next {
    right: 1.5rem;
}

/* Contact */

.contact-form {
    max-width: 36rem;
    margin: 2.5rem auto 0;
    display: grid;
    gap: 1rem;
}

.form-row {
    display: grid;
    gap: 1rem;
}

.contact-form label {
    display: block;
    font-size: 0.9rem;
}

.contact-form label span {
    display: inline-block;
    margin-bottom: 0.25rem;
    color: var(--muted-foreground);
}

.contact-form input,
.contact-form textarea {
    width: 100%;
    border: 1px solid var(--border);
    border-radius: 0.5rem;
    background: var(--background);
    color: var(--foreground);
    padding: 0.75rem 1rem;
    font-size: 0.9rem;
    font-family: inherit;
}

.contact-form textarea {
    min-height: 8rem;
    resize: vertical;
}

.honeypot {
    display: none;
}

.form-success {
    margin: 0;
    font-size: 0.9rem;
    color: #2f9e6e;
}

.form-error {
    margin: 0;
    font-size: 0.9rem;
    color: #d64545;
}

/* Footer */

.site-footer {
    border-top: 1px solid var(--border);
    padding: 2.5rem 0;
    font-size: 0.9rem;
}

.footer-inner {
    max-width: 80rem;
    margin: 0 auto;
    padding: 0 1.5rem;
    display: flex;
    flex-direction: column;
    align-items: center;
    gap: 1rem;
}

.footer-inner p {
    margin: 0;
    color: var(--muted-foreground);
}

.footer-links {
    display: flex;
    gap: 1.5rem;
}

.footer-links a {
    display: inline-flex;
    align-items: center;
    gap: 0.5rem;
    color: var(--foreground);
    text-decoration: none;
}

.footer-links a:hover {
    color: var(--primary);
    text-decoration: underline;
    text-underline-offset: 4px;
}

@keyframes rise-in {
    from {
        opacity: 0;
        transform: translateY(12px);
    }
    to {
        opacity: 1;
        transform: translateY(0);
    }
}

/* Layout at width */

@media (min-width: 768px) {
    .hero-inner {
        grid-template-columns: 1fr 1fr;
        gap: 4rem;
        padding: 7rem 1.5rem;
    }

    .about-grid {
        grid-template-columns: 1fr 1fr;
        gap: 4rem;
    }

    .services-grid {
        grid-template-columns: repeat(4, 1fr);
    }

    .portfolio-grid {
        grid-template-columns: repeat(3, 1fr);
    }

    .testimonials-grid {
        grid-template-columns: repeat(3, 1fr);
    }

    .cta-band {
        grid-template-columns: 1fr auto;
    }

    .modal-specs {
        grid-template-columns: repeat(4, 1fr);
    }

    .modal-thumbs {
        grid-template-columns: repeat(3, 1fr);
    }

    .form-row {
        grid-template-columns: 1fr 1fr;
    }

    .footer-inner {
        flex-direction: row;
        justify-content: space-between;
    }
}

@media (max-width: 767px) {
    .burger-menu {
        display: flex;
    }

    .nav-right {
        position: absolute;
        top: 100%;
        left: 0;
        right: 0;
        flex-direction: column;
        align-items: stretch;
        background: var(--background);
        border-bottom: 1px solid var(--border);
        padding: 1rem 1.5rem;
        display: none;
    }

    .nav-right.mobile-menu-open {
        display: flex;
    }

    .nav-links {
        flex-direction: column;
    }

    .portfolio-grid,
    .modal-thumbs {
        grid-template-columns: 1fr;
    }
}
"#}
        </style>
    }
}
