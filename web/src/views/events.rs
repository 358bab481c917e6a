use api::models::Event;
use api::RestClient;
use dioxus::prelude::*;
use ui::{push_toast, use_toasts, EventCard, SkeletonGrid, ToastLevel};

/// Public agenda of congresses, journeys and courses.
#[component]
pub fn Events() -> Element {
    let mut events = use_signal(Vec::<Event>::new);
    let mut loading = use_signal(|| true);
    let mut toasts = use_toasts();

    use_effect(move || {
        spawn(async move {
            let client = RestClient::default();
            match client.list_events().await {
                Ok(list) => events.set(list),
                Err(err) => {
                    tracing::error!("listing events failed: {err}");
                    push_toast(&mut toasts, ToastLevel::Error, "Falha ao buscar eventos");
                }
            }
            loading.set(false);
        });
    });

    let agenda = if loading() {
        rsx! {
            SkeletonGrid { count: 3, class: "rows" }
        }
    } else if events().is_empty() {
        rsx! {
            div {
                class: "empty-state",
                p { "Nenhum evento agendado no momento." }
            }
        }
    } else {
        rsx! {
            div {
                class: "event-list",
                for event in events() {
                    EventCard { key: "{event.id}", event: event.clone() }
                }
            }
        }
    };

    rsx! {
        div {
            class: "page",
            div {
                class: "page-intro",
                span { class: "eyebrow", "Agenda" }
                h1 { "Eventos e Jornadas" }
                p { "Acompanhe os próximos encontros da oftalmologia paraense." }
            }

            {agenda}
        }
    }
}
