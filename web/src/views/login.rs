use api::RestClient;
use dioxus::prelude::*;
use ui::{push_toast, store_token, use_session, use_toasts, ToastLevel};

use crate::Route;

/// Admin login. On success the token goes to the session store and the
/// browser moves to the admin panel.
#[component]
pub fn Login() -> Element {
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut loading = use_signal(|| false);
    let mut session = use_session();
    let mut toasts = use_toasts();
    let nav = use_navigator();

    if session().is_authenticated() {
        nav.replace(Route::Admin {});
        return rsx! {};
    }

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        if loading() {
            return;
        }
        loading.set(true);
        spawn(async move {
            let client = RestClient::default();
            match client.login(&email(), &password()).await {
                Ok(token) => {
                    store_token(&mut session, &token);
                    push_toast(&mut toasts, ToastLevel::Success, "Bem-vindo de volta");
                    nav.push(Route::Admin {});
                }
                Err(err) => {
                    tracing::error!("login failed: {err}");
                    push_toast(&mut toasts, ToastLevel::Error, "Credenciais inválidas");
                }
            }
            loading.set(false);
        });
    };

    rsx! {
        div {
            class: "page",
            div {
                class: "panel panel-narrow",
                h1 { "Área Administrativa" }
                p { "Acesso restrito à diretoria da S.P.O." }
                form {
                    onsubmit: handle_submit,
                    div {
                        class: "form-field",
                        label { "Email" }
                        input {
                            r#type: "email",
                            required: true,
                            placeholder: "admin@spo.com",
                            value: "{email}",
                            oninput: move |evt: FormEvent| email.set(evt.value()),
                        }
                    }
                    div {
                        class: "form-field",
                        label { "Senha" }
                        input {
                            r#type: "password",
                            required: true,
                            value: "{password}",
                            oninput: move |evt: FormEvent| password.set(evt.value()),
                        }
                    }
                    div {
                        class: "form-actions",
                        button {
                            r#type: "submit",
                            class: "primary",
                            disabled: loading(),
                            if loading() { "Entrando..." } else { "Entrar" }
                        }
                    }
                }
            }
        }
    }
}
