//! Backend-owned record shapes.
//!
//! The backend is the sole source of truth for both entities; the client
//! only holds a transient in-memory copy per page load.

use serde::{Deserialize, Serialize};

/// Discriminant for the two managed record kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Doctors,
    Events,
}

impl EntityKind {
    /// Collection endpoint for this kind.
    pub fn api_path(&self) -> &'static str {
        match self {
            EntityKind::Doctors => "/api/doctors",
            EntityKind::Events => "/api/events",
        }
    }

    /// Plural Portuguese label used in user-facing messages.
    pub fn label(&self) -> &'static str {
        match self {
            EntityKind::Doctors => "médicos",
            EntityKind::Events => "eventos",
        }
    }

    /// Singular Portuguese label used in dialog titles.
    pub fn singular(&self) -> &'static str {
        match self {
            EntityKind::Doctors => "Médico",
            EntityKind::Events => "Evento",
        }
    }
}

/// Persisted provenance of a record's image.
///
/// Tracked explicitly instead of being inferred from the URL shape, so that
/// re-opening a record for editing selects the right acquisition mode.
/// Records written before this attribute existed default to `Url`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageSource {
    #[default]
    Url,
    Upload,
}

/// Admin-editable fields of a doctor record. Doubles as the create/update
/// payload; everything except the image provenance is free text.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DoctorFields {
    pub name: String,
    pub specialty: String,
    pub city: String,
    /// Free-text phone/contact string; see [`crate::contact`] for the
    /// WhatsApp eligibility check applied on the public directory.
    pub contact_info: String,
    pub image_url: String,
    #[serde(default)]
    pub image_source: ImageSource,
}

/// A doctor record as returned by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Doctor {
    pub id: String,
    #[serde(flatten)]
    pub fields: DoctorFields,
}

/// Fixed label set for an event's registration status. Serialized as the
/// exact Portuguese labels the backend stores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum EventStatus {
    #[default]
    #[serde(rename = "Inscrições Abertas")]
    InscricoesAbertas,
    #[serde(rename = "Poucas Vagas")]
    PoucasVagas,
    #[serde(rename = "Esgotado")]
    Esgotado,
    #[serde(rename = "Gratuito")]
    Gratuito,
    #[serde(rename = "Em Breve")]
    EmBreve,
}

impl EventStatus {
    pub const ALL: [EventStatus; 5] = [
        EventStatus::InscricoesAbertas,
        EventStatus::PoucasVagas,
        EventStatus::Esgotado,
        EventStatus::Gratuito,
        EventStatus::EmBreve,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            EventStatus::InscricoesAbertas => "Inscrições Abertas",
            EventStatus::PoucasVagas => "Poucas Vagas",
            EventStatus::Esgotado => "Esgotado",
            EventStatus::Gratuito => "Gratuito",
            EventStatus::EmBreve => "Em Breve",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|s| s.label() == label)
    }
}

/// Admin-editable fields of an event record. Dates and times are free text,
/// not parsed calendar values.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct EventFields {
    pub title: String,
    pub date: String,
    pub time: String,
    pub location: String,
    pub description: String,
    #[serde(default)]
    pub status: EventStatus,
    pub image_url: String,
    /// Outbound "Saiba Mais" link; the public card shows a placeholder
    /// when empty.
    pub external_link: String,
    #[serde(default)]
    pub image_source: ImageSource,
}

/// An event record as returned by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: String,
    #[serde(flatten)]
    pub fields: EventFields,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_status_round_trips_through_labels() {
        for status in EventStatus::ALL {
            let json = serde_json::to_string(&status).unwrap();
            assert_eq!(json, format!("\"{}\"", status.label()));
            let back: EventStatus = serde_json::from_str(&json).unwrap();
            assert_eq!(back, status);
            assert_eq!(EventStatus::from_label(status.label()), Some(status));
        }
    }

    #[test]
    fn unknown_status_label_is_rejected() {
        assert!(serde_json::from_str::<EventStatus>("\"Aberto\"").is_err());
        assert_eq!(EventStatus::from_label("Aberto"), None);
    }

    #[test]
    fn legacy_doctor_without_provenance_defaults_to_url() {
        let doctor: Doctor = serde_json::from_value(serde_json::json!({
            "id": "d1",
            "name": "Dra. Ana",
            "specialty": "Retina",
            "city": "Belém",
            "contact_info": "(91) 98888-0000",
            "image_url": "https://example.com/ana.jpg",
        }))
        .unwrap();
        assert_eq!(doctor.fields.image_source, ImageSource::Url);
    }

    #[test]
    fn record_id_and_fields_flatten_into_one_object() {
        let event = Event {
            id: "e1".into(),
            fields: EventFields {
                title: "Congresso".into(),
                ..EventFields::default()
            },
        };
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["id"], "e1");
        assert_eq!(json["title"], "Congresso");
        assert_eq!(json["status"], "Inscrições Abertas");
    }
}
