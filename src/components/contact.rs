//! Contact form. Submits one form-encoded POST to the configured relay
//! endpoint; a non-2xx response or network failure surfaces a single
//! user-visible message and is never retried.

use gloo_net::http::Request;
use serde::Deserialize;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlTextAreaElement, InputEvent, SubmitEvent};
use yew::prelude::*;

use crate::components::sections::SectionHeading;
use crate::config;

#[derive(Clone, PartialEq)]
enum SubmitStatus {
    Idle,
    Sending,
    Success,
    Failure(String),
}

/// Error payload the relay returns alongside non-2xx statuses.
#[derive(Deserialize)]
struct RelayError {
    error: String,
}

const FALLBACK_ERROR: &str =
    "Não foi possível enviar a mensagem agora. Tente novamente em instantes.";

fn encode_form(fields: &[(&str, &str)]) -> String {
    fields
        .iter()
        .map(|&(name, value)| {
            format!("{}={}", urlencoding::encode(name), urlencoding::encode(value))
        })
        .collect::<Vec<_>>()
        .join("&")
}

#[function_component(Contact)]
pub fn contact() -> Html {
    let name = use_state(String::new);
    let email = use_state(String::new);
    let phone = use_state(String::new);
    let message = use_state(String::new);
    let gotcha = use_state(String::new);
    let status = use_state(|| SubmitStatus::Idle);

    let bind_input = |field: UseStateHandle<String>| {
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            field.set(input.value());
        })
    };

    let bind_textarea = {
        let message = message.clone();
        Callback::from(move |e: InputEvent| {
            let area: HtmlTextAreaElement = e.target_unchecked_into();
            message.set(area.value());
        })
    };

    let onsubmit = {
        let name = name.clone();
        let email = email.clone();
        let phone = phone.clone();
        let message = message.clone();
        let gotcha = gotcha.clone();
        let status = status.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *status == SubmitStatus::Sending {
                return;
            }
            status.set(SubmitStatus::Sending);

            let body = encode_form(&[
                ("name", name.as_str()),
                ("email", email.as_str()),
                ("phone", phone.as_str()),
                ("message", message.as_str()),
                ("_gotcha", gotcha.as_str()),
            ]);

            let name = name.clone();
            let email = email.clone();
            let phone = phone.clone();
            let message = message.clone();
            let status = status.clone();
            spawn_local(async move {
                let response = Request::post(config::form_endpoint())
                    .header("Accept", "application/json")
                    .header("Content-Type", "application/x-www-form-urlencoded")
                    .body(body)
                    .send()
                    .await;

                match response {
                    Ok(response) if response.ok() => {
                        status.set(SubmitStatus::Success);
                        name.set(String::new());
                        email.set(String::new());
                        phone.set(String::new());
                        message.set(String::new());
                    }
                    Ok(response) => {
                        log::warn!("form relay answered {}", response.status());
                        let detail = response
                            .json::<RelayError>()
                            .await
                            .map(|payload| payload.error)
                            .unwrap_or_else(|_| FALLBACK_ERROR.to_string());
                        status.set(SubmitStatus::Failure(detail));
                    }
                    Err(err) => {
                        log::error!("form submission failed: {err}");
                        status.set(SubmitStatus::Failure(FALLBACK_ERROR.to_string()));
                    }
                }
            });
        })
    };

    let sending = *status == SubmitStatus::Sending;

    html! {
        <section id="contato" class="section">
            <div class="section-inner">
                <SectionHeading
                    kicker="contato"
                    title="Conte sobre sua ideia"
                    subtitle="Preencha os dados e retornarei rapidamente."
                />
                <form class="contact-form" novalidate=true {onsubmit}>
                    <input
                        type="text"
                        name="_gotcha"
                        class="honeypot"
                        aria-hidden="true"
                        tabindex="-1"
                        value={(*gotcha).clone()}
                        oninput={bind_input(gotcha.clone())}
                    />
                    <div class="form-row">
                        <label>
                            <span>{"Seu nome"}</span>
                            <input
                                name="name"
                                placeholder="Maria Silva"
                                required=true
                                autocomplete="name"
                                value={(*name).clone()}
                                oninput={bind_input(name.clone())}
                            />
                        </label>
                        <label>
                            <span>{"E-mail"}</span>
                            <input
                                name="email"
                                type="email"
                                placeholder="maria@email.com"
                                required=true
                                autocomplete="email"
                                value={(*email).clone()}
                                oninput={bind_input(email.clone())}
                            />
                        </label>
                    </div>
                    <label>
                        <span>{"Telefone (opcional)"}</span>
                        <input
                            name="phone"
                            placeholder="(11) 90000-0000"
                            autocomplete="tel"
                            value={(*phone).clone()}
                            oninput={bind_input(phone.clone())}
                        />
                    </label>
                    <label>
                        <span>{"Mensagem"}</span>
                        <textarea
                            name="message"
                            placeholder="Fale sobre o projeto, prazos e objetivos"
                            required=true
                            value={(*message).clone()}
                            oninput={bind_textarea}
                        />
                    </label>
                    <button type="submit" class="button-primary" disabled={sending}>
                        { if sending { "Enviando…" } else { "Enviar mensagem" } }
                    </button>
                    {
                        match &*status {
                            SubmitStatus::Success => html! {
                                <p class="form-success">{"Mensagem enviada com sucesso. Obrigado!"}</p>
                            },
                            SubmitStatus::Failure(message) => html! {
                                <p class="form-error">{message.clone()}</p>
                            },
                            SubmitStatus::Idle | SubmitStatus::Sending => html! {},
                        }
                    }
                </form>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::{encode_form, RelayError};

    #[test]
    fn fields_are_joined_with_ampersands() {
        let body = encode_form(&[("name", "Maria"), ("email", "maria@email.com")]);
        assert_eq!(body, "name=Maria&email=maria%40email.com");
    }

    #[test]
    fn reserved_characters_are_percent_encoded() {
        let body = encode_form(&[("message", "obra & reforma = prazo?")]);
        assert_eq!(body, "message=obra%20%26%20reforma%20%3D%20prazo%3F");
    }

    #[test]
    fn accented_text_survives_encoding() {
        let body = encode_form(&[("name", "João")]);
        assert_eq!(body, "name=Jo%C3%A3o");
    }

    #[test]
    fn empty_honeypot_is_still_present() {
        let body = encode_form(&[("name", "Maria"), ("_gotcha", "")]);
        assert_eq!(body, "name=Maria&_gotcha=");
    }

    #[test]
    fn relay_error_payload_decodes() {
        let payload: RelayError =
            serde_json::from_str(r#"{"error": "Form not found", "code": 404}"#)
                .expect("payload should decode");
        assert_eq!(payload.error, "Form not found");
    }
}
