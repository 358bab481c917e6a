use api::models::Doctor;
use api::RestClient;
use dioxus::prelude::*;
use ui::{push_toast, use_toasts, DoctorCard, SkeletonGrid, ToastLevel};

/// Public member directory with the city search.
#[component]
pub fn Directory() -> Element {
    let mut city_filter = use_signal(String::new);
    let mut doctors = use_signal(Vec::<Doctor>::new);
    let mut loading = use_signal(|| true);
    let mut toasts = use_toasts();

    let mut load = move |city: Option<String>| {
        loading.set(true);
        spawn(async move {
            let client = RestClient::default();
            match client.list_doctors(city.as_deref()).await {
                Ok(list) => doctors.set(list),
                Err(err) => {
                    tracing::error!("listing doctors failed: {err}");
                    push_toast(&mut toasts, ToastLevel::Error, "Falha ao buscar médicos");
                }
            }
            loading.set(false);
        });
    };

    use_effect(move || load(None));

    let results = if loading() {
        rsx! {
            SkeletonGrid {}
        }
    } else if doctors().is_empty() {
        rsx! {
            div {
                class: "empty-state",
                p { "Nenhum item encontrado." }
                button {
                    onclick: move |_| {
                        city_filter.set(String::new());
                        load(None);
                    },
                    "Limpar filtros"
                }
            }
        }
    } else {
        rsx! {
            div {
                class: "card-grid",
                for doctor in doctors() {
                    DoctorCard { key: "{doctor.id}", doctor: doctor.clone() }
                }
            }
        }
    };

    rsx! {
        div {
            class: "page",
            div {
                class: "page-intro",
                span { class: "eyebrow", "Diretório de membros" }
                h1 { "Encontre um Médico" }
                p { "Oftalmologistas associados à S.P.O. em todo o estado do Pará." }
            }

            form {
                class: "search-bar",
                onsubmit: move |evt: FormEvent| {
                    evt.prevent_default();
                    load(Some(city_filter()));
                },
                input {
                    r#type: "text",
                    placeholder: "Buscar por cidade...",
                    value: "{city_filter}",
                    oninput: move |evt: FormEvent| city_filter.set(evt.value()),
                }
                button { r#type: "submit", "Buscar" }
            }

            {results}
        }
    }
}
