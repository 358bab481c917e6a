use api::contact::membership_request_url;
use dioxus::prelude::*;
use ui::{push_toast, use_toasts, ToastLevel};

/// Membership request form. There is no backend endpoint for this: the
/// filled form is handed to the secretariat as a pre-written WhatsApp
/// conversation in a new tab.
#[component]
pub fn Join() -> Element {
    let mut name = use_signal(String::new);
    let mut crm = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut phone = use_signal(String::new);
    let mut message = use_signal(String::new);
    let mut toasts = use_toasts();

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let url = membership_request_url(&name(), &crm(), &email(), &phone(), &message());
        open_in_new_tab(&url);
        push_toast(
            &mut toasts,
            ToastLevel::Success,
            "Redirecionando para o WhatsApp...",
        );
    };

    rsx! {
        div {
            class: "page",
            div {
                class: "page-intro",
                span { class: "eyebrow", "Filiação" }
                h1 { "Associe-se à S.P.O." }
                p {
                    "Preencha seus dados e envie a solicitação diretamente à "
                    "secretaria pelo WhatsApp."
                }
            }

            div {
                class: "panel panel-narrow",
                form {
                    onsubmit: handle_submit,
                    div {
                        class: "form-field",
                        label { "Nome Completo" }
                        input {
                            r#type: "text",
                            required: true,
                            value: "{name}",
                            oninput: move |evt: FormEvent| name.set(evt.value()),
                        }
                    }
                    div {
                        class: "form-row",
                        div {
                            class: "form-field",
                            label { "CRM" }
                            input {
                                r#type: "text",
                                required: true,
                                placeholder: "0000 PA",
                                value: "{crm}",
                                oninput: move |evt: FormEvent| crm.set(evt.value()),
                            }
                        }
                        div {
                            class: "form-field",
                            label { "Telefone" }
                            input {
                                r#type: "tel",
                                required: true,
                                value: "{phone}",
                                oninput: move |evt: FormEvent| phone.set(evt.value()),
                            }
                        }
                    }
                    div {
                        class: "form-field",
                        label { "Email" }
                        input {
                            r#type: "email",
                            required: true,
                            value: "{email}",
                            oninput: move |evt: FormEvent| email.set(evt.value()),
                        }
                    }
                    div {
                        class: "form-field",
                        label { "Mensagem" }
                        textarea {
                            placeholder: "Conte-nos um pouco sobre você...",
                            value: "{message}",
                            oninput: move |evt: FormEvent| message.set(evt.value()),
                        }
                    }
                    button {
                        r#type: "submit",
                        class: "whatsapp-submit",
                        "Enviar pelo WhatsApp"
                    }
                }
            }
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn open_in_new_tab(url: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.open_with_url_and_target(url, "_blank");
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn open_in_new_tab(url: &str) {
    tracing::info!("would open {url}");
}
