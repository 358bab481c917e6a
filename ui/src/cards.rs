//! Cards rendered by the public directory and events pages.

use api::contact::whatsapp_link;
use api::models::{Doctor, Event};
use dioxus::prelude::*;

/// Directory card for one association member.
///
/// The WhatsApp action only appears when the free-text contact holds at
/// least ten digits after stripping everything that is not a digit.
#[component]
pub fn DoctorCard(doctor: Doctor) -> Element {
    let fields = &doctor.fields;

    let image = if fields.image_url.is_empty() {
        rsx! {
            div { class: "card-image-placeholder", span { "S.P.O." } }
        }
    } else {
        rsx! {
            img { src: "{fields.image_url}", alt: "{fields.name}" }
        }
    };

    let whatsapp = match whatsapp_link(&fields.contact_info) {
        Some(link) => rsx! {
            a {
                class: "whatsapp-action",
                href: "{link}",
                target: "_blank",
                rel: "noopener noreferrer",
                title: "Conversar no WhatsApp",
                "WhatsApp"
            }
        },
        None => rsx! {},
    };

    rsx! {
        div {
            class: "doctor-card",
            div {
                class: "doctor-card-image",
                {image}
                span { class: "doctor-card-badge", "S.P.O. Membro" }
            }
            div {
                class: "doctor-card-body",
                h3 { "{fields.name}" }
                p { class: "doctor-card-specialty", "{fields.specialty}" }
                p { class: "doctor-card-city", "{fields.city}" }
                div {
                    class: "doctor-card-contact",
                    span { class: "doctor-card-phone", "{fields.contact_info}" }
                    {whatsapp}
                }
            }
        }
    }
}

/// Agenda card for one event, tagged with its registration status.
#[component]
pub fn EventCard(event: Event) -> Element {
    let fields = &event.fields;

    let image = if fields.image_url.is_empty() {
        rsx! {}
    } else {
        rsx! {
            img { src: "{fields.image_url}", alt: "{fields.title}" }
        }
    };

    let more_info = if fields.external_link.is_empty() {
        rsx! {
            span { class: "event-card-soon", "Mais detalhes em breve" }
        }
    } else {
        rsx! {
            a {
                class: "event-card-link",
                href: "{fields.external_link}",
                target: "_blank",
                rel: "noopener noreferrer",
                "Saiba Mais →"
            }
        }
    };

    rsx! {
        div {
            class: "event-card",
            div {
                class: "event-card-image",
                {image}
                span { class: "event-card-date", "{fields.date}" }
            }
            div {
                class: "event-card-body",
                div {
                    class: "event-card-meta",
                    span { class: "event-card-status", "{fields.status.label()}" }
                    span { class: "event-card-time", "{fields.time}" }
                }
                h3 { "{fields.title}" }
                p { class: "event-card-description", "{fields.description}" }
                div {
                    class: "event-card-footer",
                    span { class: "event-card-location", "{fields.location}" }
                    {more_info}
                }
            }
        }
    }
}
