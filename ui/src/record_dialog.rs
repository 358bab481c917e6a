//! Modal dialog for creating and editing doctor and event records.
//!
//! The dialog renders whatever [`Editor`] state it is handed; all
//! transitions (open, close, submit) are owned by the admin view.

use api::models::{DoctorFields, EventFields, EventStatus, ImageSource};
use api::{Draft, Editor, ImageMode, SelectedFile};
use dioxus::prelude::*;

#[component]
pub fn RecordDialog(
    mut editor: Signal<Editor>,
    mut selected_file: Signal<Option<SelectedFile>>,
    busy: bool,
    on_submit: EventHandler<()>,
    on_cancel: EventHandler<()>,
) -> Element {
    let current = editor();
    let Some(kind) = current.kind() else {
        return rsx! {};
    };
    let editing = current.is_editing();
    let mode = current.image_mode().unwrap_or(ImageMode::Upload);

    let title = format!(
        "{} {}",
        if editing { "Editar" } else { "Adicionar" },
        kind.singular()
    );
    let submit_label = if busy {
        "Enviando..."
    } else if editing {
        "Salvar"
    } else {
        "Adicionar"
    };

    // Field binders; plain fn pointers keep the per-field closures small.
    let set_doctor = move |set: fn(&mut DoctorFields, String)| {
        move |evt: FormEvent| {
            if let Some(Draft::Doctor(fields)) = editor.write().draft_mut() {
                set(fields, evt.value());
            }
        }
    };
    let set_event = move |set: fn(&mut EventFields, String)| {
        move |evt: FormEvent| {
            if let Some(Draft::Event(fields)) = editor.write().draft_mut() {
                set(fields, evt.value());
            }
        }
    };

    let fields_section = match current.draft() {
        Some(Draft::Doctor(f)) => rsx! {
            div {
                class: "form-field",
                label { "Nome Completo" }
                input {
                    r#type: "text",
                    required: true,
                    value: "{f.name}",
                    oninput: set_doctor(|f, v| f.name = v),
                }
            }
            div {
                class: "form-row",
                div {
                    class: "form-field",
                    label { "Especialidade" }
                    input {
                        r#type: "text",
                        required: true,
                        value: "{f.specialty}",
                        oninput: set_doctor(|f, v| f.specialty = v),
                    }
                }
                div {
                    class: "form-field",
                    label { "Cidade" }
                    input {
                        r#type: "text",
                        required: true,
                        value: "{f.city}",
                        oninput: set_doctor(|f, v| f.city = v),
                    }
                }
            }
            div {
                class: "form-field",
                label { "Contato" }
                input {
                    r#type: "text",
                    required: true,
                    value: "{f.contact_info}",
                    oninput: set_doctor(|f, v| f.contact_info = v),
                }
            }
        },
        Some(Draft::Event(f)) => rsx! {
            div {
                class: "form-field",
                label { "Título do Evento" }
                input {
                    r#type: "text",
                    required: true,
                    placeholder: "Congresso...",
                    value: "{f.title}",
                    oninput: set_event(|f, v| f.title = v),
                }
            }
            div {
                class: "form-row",
                div {
                    class: "form-field",
                    label { "Data" }
                    input {
                        r#type: "text",
                        required: true,
                        placeholder: "15 Out, 2025",
                        value: "{f.date}",
                        oninput: set_event(|f, v| f.date = v),
                    }
                }
                div {
                    class: "form-field",
                    label { "Horário" }
                    input {
                        r#type: "text",
                        required: true,
                        placeholder: "08:00 - 18:00",
                        value: "{f.time}",
                        oninput: set_event(|f, v| f.time = v),
                    }
                }
            }
            div {
                class: "form-field",
                label { "Localização" }
                input {
                    r#type: "text",
                    required: true,
                    placeholder: "Auditório X",
                    value: "{f.location}",
                    oninput: set_event(|f, v| f.location = v),
                }
            }
            div {
                class: "form-field",
                label { "Link \"Saiba Mais\"" }
                input {
                    r#type: "text",
                    placeholder: "https://...",
                    value: "{f.external_link}",
                    oninput: set_event(|f, v| f.external_link = v),
                }
            }
            div {
                class: "form-field",
                label { "Status" }
                select {
                    value: "{f.status.label()}",
                    onchange: move |evt| {
                        if let Some(Draft::Event(fields)) = editor.write().draft_mut() {
                            fields.status =
                                EventStatus::from_label(&evt.value()).unwrap_or_default();
                        }
                    },
                    for status in EventStatus::ALL {
                        option { value: "{status.label()}", "{status.label()}" }
                    }
                }
            }
            div {
                class: "form-field",
                label { "Descrição" }
                textarea {
                    required: true,
                    placeholder: "Detalhes do evento...",
                    value: "{f.description}",
                    oninput: set_event(|f, v| f.description = v),
                }
            }
        },
        None => rsx! {},
    };

    let image_pane = if mode == ImageMode::Upload {
        let file_label = selected_file()
            .map(|f| f.name)
            .unwrap_or_else(|| "Clique para selecionar".to_string());
        rsx! {
            label {
                class: "file-drop",
                input {
                    r#type: "file",
                    accept: "image/*",
                    onchange: move |evt: FormEvent| async move {
                        if let Some(engine) = evt.files() {
                            if let Some(name) = engine.files().first().cloned() {
                                if let Some(bytes) = engine.read_file(&name).await {
                                    selected_file.set(Some(SelectedFile { name, bytes }));
                                }
                            }
                        }
                    },
                }
                span { "{file_label}" }
            }
        }
    } else {
        let image_url = current.draft().map(Draft::image_url).unwrap_or_default();
        rsx! {
            input {
                r#type: "text",
                placeholder: "https://...",
                value: "{image_url}",
                oninput: move |evt: FormEvent| {
                    if let Some(draft) = editor.write().draft_mut() {
                        draft.set_image(evt.value(), ImageSource::Url);
                    }
                },
            }
        }
    };

    rsx! {
        div {
            class: "modal-overlay",
            div {
                class: "modal",
                h2 { "{title}" }
                form {
                    onsubmit: move |evt: FormEvent| {
                        evt.prevent_default();
                        on_submit.call(());
                    },

                    div {
                        class: "form-field",
                        label { "Imagem de Capa/Perfil" }
                        div {
                            class: "mode-tabs",
                            button {
                                r#type: "button",
                                class: if mode == ImageMode::Upload { "mode-tab mode-tab-active" } else { "mode-tab" },
                                onclick: move |_| editor.write().set_image_mode(ImageMode::Upload),
                                "Upload"
                            }
                            button {
                                r#type: "button",
                                class: if mode == ImageMode::Url { "mode-tab mode-tab-active" } else { "mode-tab" },
                                onclick: move |_| editor.write().set_image_mode(ImageMode::Url),
                                "Link URL"
                            }
                        }
                        div {
                            class: "image-pane",
                            {image_pane}
                        }
                    }

                    {fields_section}

                    div {
                        class: "form-actions",
                        button {
                            r#type: "button",
                            class: "secondary",
                            onclick: move |_| on_cancel.call(()),
                            "Cancelar"
                        }
                        button {
                            r#type: "submit",
                            class: "primary",
                            disabled: busy,
                            "{submit_label}"
                        }
                    }
                }
            }
        }
    }
}
