//! Record editor state machine for the admin panel.
//!
//! One editor instance drives the create/edit dialog for both entity
//! kinds. The form state is a tagged union of the two field sets, so a
//! doctor draft can never carry event fields and vice versa.

use crate::models::{
    Doctor, DoctorFields, EntityKind, Event, EventFields, ImageSource,
};

/// User-selected strategy for supplying the record's image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageMode {
    Upload,
    Url,
}

impl From<ImageSource> for ImageMode {
    fn from(source: ImageSource) -> Self {
        match source {
            ImageSource::Upload => ImageMode::Upload,
            ImageSource::Url => ImageMode::Url,
        }
    }
}

/// Form state for one record, tagged by entity kind.
#[derive(Debug, Clone, PartialEq)]
pub enum Draft {
    Doctor(DoctorFields),
    Event(EventFields),
}

impl Draft {
    /// Type-specific default field map for a new record.
    pub fn new(kind: EntityKind) -> Self {
        match kind {
            EntityKind::Doctors => Draft::Doctor(DoctorFields::default()),
            EntityKind::Events => Draft::Event(EventFields::default()),
        }
    }

    pub fn kind(&self) -> EntityKind {
        match self {
            Draft::Doctor(_) => EntityKind::Doctors,
            Draft::Event(_) => EntityKind::Events,
        }
    }

    pub fn image_url(&self) -> &str {
        match self {
            Draft::Doctor(f) => &f.image_url,
            Draft::Event(f) => &f.image_url,
        }
    }

    pub fn image_source(&self) -> ImageSource {
        match self {
            Draft::Doctor(f) => f.image_source,
            Draft::Event(f) => f.image_source,
        }
    }

    /// Replace the image and record where it came from.
    pub fn set_image(&mut self, url: String, source: ImageSource) {
        match self {
            Draft::Doctor(f) => {
                f.image_url = url;
                f.image_source = source;
            }
            Draft::Event(f) => {
                f.image_url = url;
                f.image_source = source;
            }
        }
    }
}

/// The record editor: closed, creating a new record, or editing an
/// existing one.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Editor {
    #[default]
    Closed,
    Creating {
        draft: Draft,
        image_mode: ImageMode,
    },
    Editing {
        id: String,
        draft: Draft,
        image_mode: ImageMode,
    },
}

impl Editor {
    /// `Closed -> Creating`: type-specific defaults, image mode `Upload`.
    pub fn create(kind: EntityKind) -> Self {
        Editor::Creating {
            draft: Draft::new(kind),
            image_mode: ImageMode::Upload,
        }
    }

    /// `Closed -> Editing`, pre-filled from an existing doctor. The image
    /// mode follows the record's persisted provenance.
    pub fn edit_doctor(doctor: &Doctor) -> Self {
        Editor::Editing {
            id: doctor.id.clone(),
            image_mode: doctor.fields.image_source.into(),
            draft: Draft::Doctor(doctor.fields.clone()),
        }
    }

    /// `Closed -> Editing`, pre-filled from an existing event.
    pub fn edit_event(event: &Event) -> Self {
        Editor::Editing {
            id: event.id.clone(),
            image_mode: event.fields.image_source.into(),
            draft: Draft::Event(event.fields.clone()),
        }
    }

    pub fn is_open(&self) -> bool {
        !matches!(self, Editor::Closed)
    }

    pub fn is_editing(&self) -> bool {
        matches!(self, Editor::Editing { .. })
    }

    pub fn kind(&self) -> Option<EntityKind> {
        self.draft().map(Draft::kind)
    }

    pub fn draft(&self) -> Option<&Draft> {
        match self {
            Editor::Closed => None,
            Editor::Creating { draft, .. } | Editor::Editing { draft, .. } => Some(draft),
        }
    }

    pub fn draft_mut(&mut self) -> Option<&mut Draft> {
        match self {
            Editor::Closed => None,
            Editor::Creating { draft, .. } | Editor::Editing { draft, .. } => Some(draft),
        }
    }

    pub fn image_mode(&self) -> Option<ImageMode> {
        match self {
            Editor::Closed => None,
            Editor::Creating { image_mode, .. } | Editor::Editing { image_mode, .. } => {
                Some(*image_mode)
            }
        }
    }

    pub fn set_image_mode(&mut self, mode: ImageMode) {
        match self {
            Editor::Closed => {}
            Editor::Creating { image_mode, .. } | Editor::Editing { image_mode, .. } => {
                *image_mode = mode;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::EventStatus;

    #[test]
    fn create_starts_from_defaults_in_upload_mode() {
        let editor = Editor::create(EntityKind::Events);
        assert!(editor.is_open());
        assert!(!editor.is_editing());
        assert_eq!(editor.image_mode(), Some(ImageMode::Upload));

        let Some(Draft::Event(fields)) = editor.draft() else {
            panic!("expected an event draft");
        };
        assert!(fields.title.is_empty());
        assert_eq!(fields.status, EventStatus::InscricoesAbertas);
    }

    #[test]
    fn edit_copies_fields_verbatim() {
        let doctor = Doctor {
            id: "d42".into(),
            fields: DoctorFields {
                name: "Dr. João".into(),
                specialty: "Córnea".into(),
                city: "Ananindeua".into(),
                contact_info: "(91) 91234-5678".into(),
                image_url: "https://example.com/j.jpg".into(),
                image_source: ImageSource::Url,
            },
        };

        let editor = Editor::edit_doctor(&doctor);
        assert!(editor.is_editing());
        assert_eq!(editor.draft(), Some(&Draft::Doctor(doctor.fields.clone())));
    }

    #[test]
    fn edit_selects_mode_from_persisted_provenance() {
        let mut doctor = Doctor {
            id: "d1".into(),
            fields: DoctorFields {
                image_url: "http://localhost:8000/uploads/a.png".into(),
                image_source: ImageSource::Upload,
                ..DoctorFields::default()
            },
        };
        assert_eq!(
            Editor::edit_doctor(&doctor).image_mode(),
            Some(ImageMode::Upload)
        );

        doctor.fields.image_source = ImageSource::Url;
        assert_eq!(
            Editor::edit_doctor(&doctor).image_mode(),
            Some(ImageMode::Url)
        );
    }

    #[test]
    fn closed_editor_has_nothing_to_edit() {
        let mut editor = Editor::Closed;
        assert!(!editor.is_open());
        assert_eq!(editor.draft(), None);
        assert_eq!(editor.image_mode(), None);
        editor.set_image_mode(ImageMode::Url);
        assert_eq!(editor, Editor::Closed);
    }
}
