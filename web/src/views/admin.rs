use api::models::{Doctor, EntityKind, Event};
use api::{Editor, RestClient, SelectedFile, SubmitError};
use dioxus::prelude::*;
use ui::{
    clear_token, push_toast, use_session, use_toasts, RecordDialog, SkeletonGrid, ToastLevel,
};

use crate::Route;

/// Admin panel: one tabbed table per entity kind plus the record dialog.
/// Unauthenticated visits bounce straight to the login page.
#[component]
pub fn Admin() -> Element {
    let mut session = use_session();
    let mut toasts = use_toasts();
    let nav = use_navigator();

    if !session().is_authenticated() {
        nav.replace(Route::Login {});
        return rsx! {};
    }

    let mut tab = use_signal(|| EntityKind::Doctors);
    let mut doctors = use_signal(Vec::<Doctor>::new);
    let mut events = use_signal(Vec::<Event>::new);
    let mut loading = use_signal(|| true);
    let mut editor = use_signal(|| Editor::Closed);
    let mut selected_file = use_signal(|| Option::<SelectedFile>::None);
    let mut busy = use_signal(|| false);

    // Reloads whichever list the active tab shows. Reading `tab` here also
    // makes the mount effect rerun on tab switches.
    let mut refresh = move || {
        let kind = tab();
        loading.set(true);
        spawn(async move {
            let client = RestClient::default();
            let result = match kind {
                EntityKind::Doctors => client
                    .list_doctors(None)
                    .await
                    .map(|list| doctors.set(list)),
                EntityKind::Events => client.list_events().await.map(|list| events.set(list)),
            };
            if let Err(err) = result {
                tracing::error!("loading {} failed: {err}", kind.label());
                push_toast(
                    &mut toasts,
                    ToastLevel::Error,
                    &format!("Falha ao buscar {}", kind.label()),
                );
            }
            loading.set(false);
        });
    };

    use_effect(move || refresh());

    let handle_delete = move |id: String| {
        if !delete_confirmed(prompt_delete()) {
            return;
        }
        let kind = tab();
        spawn(async move {
            let Some(token) = session().token else {
                return;
            };
            let client = RestClient::default();
            match client.delete_record(kind, &id, &token).await {
                Ok(()) => {
                    push_toast(&mut toasts, ToastLevel::Success, "Removido com sucesso");
                    refresh();
                }
                Err(err) => {
                    tracing::error!("delete failed: {err}");
                    push_toast(&mut toasts, ToastLevel::Error, "Falha ao excluir");
                }
            }
        });
    };

    let handle_submit = move |_| {
        if busy() {
            return;
        }
        busy.set(true);
        spawn(async move {
            let Some(token) = session().token else {
                busy.set(false);
                return;
            };
            let client = RestClient::default();
            let current = editor();
            let editing = current.is_editing();
            let file = selected_file();
            match client.submit(&current, file.as_ref(), &token).await {
                Ok(()) => {
                    let message = if editing {
                        "Atualizado com sucesso"
                    } else {
                        "Adicionado com sucesso"
                    };
                    push_toast(&mut toasts, ToastLevel::Success, message);
                    editor.set(Editor::Closed);
                    selected_file.set(None);
                    refresh();
                }
                // The dialog stays open with the entered data on failure.
                Err(SubmitError::Upload(err)) => {
                    tracing::error!("image upload failed: {err}");
                    push_toast(&mut toasts, ToastLevel::Error, "Falha no upload da imagem");
                }
                Err(SubmitError::Save(err)) => {
                    tracing::error!("saving record failed: {err}");
                    push_toast(&mut toasts, ToastLevel::Error, "Operação falhou");
                }
            }
            busy.set(false);
        });
    };

    let doctor_rows = doctors().into_iter().map(|doctor| {
        let record = doctor.clone();
        let delete_id = doctor.id.clone();
        rsx! {
            tr {
                key: "{doctor.id}",
                td {
                    if !doctor.fields.image_url.is_empty() {
                        img { class: "row-thumb", src: "{doctor.fields.image_url}" }
                    }
                    "{doctor.fields.name}"
                }
                td { "{doctor.fields.specialty}" }
                td { "{doctor.fields.city}" }
                td {
                    class: "row-actions",
                    button {
                        class: "edit",
                        onclick: move |_| {
                            selected_file.set(None);
                            editor.set(Editor::edit_doctor(&record));
                        },
                        "Editar"
                    }
                    button {
                        class: "delete",
                        onclick: move |_| handle_delete(delete_id.clone()),
                        "Excluir"
                    }
                }
            }
        }
    });

    let event_rows = events().into_iter().map(|event| {
        let record = event.clone();
        let delete_id = event.id.clone();
        rsx! {
            tr {
                key: "{event.id}",
                td {
                    if !event.fields.image_url.is_empty() {
                        img { class: "row-thumb", src: "{event.fields.image_url}" }
                    }
                    "{event.fields.title}"
                }
                td { "{event.fields.date}" }
                td {
                    span { class: "status-pill", "{event.fields.status.label()}" }
                }
                td {
                    class: "row-actions",
                    button {
                        class: "edit",
                        onclick: move |_| {
                            selected_file.set(None);
                            editor.set(Editor::edit_event(&record));
                        },
                        "Editar"
                    }
                    button {
                        class: "delete",
                        onclick: move |_| handle_delete(delete_id.clone()),
                        "Excluir"
                    }
                }
            }
        }
    });

    let table = if loading() {
        rsx! {
            SkeletonGrid { count: 3, class: "rows" }
        }
    } else {
        match tab() {
            EntityKind::Doctors if doctors().is_empty() => rsx! {
                div { class: "admin-empty", "Nenhum item encontrado." }
            },
            EntityKind::Events if events().is_empty() => rsx! {
                div { class: "admin-empty", "Nenhum item encontrado." }
            },
            EntityKind::Doctors => rsx! {
                table {
                    class: "admin-table",
                    thead {
                        tr {
                            th { "Nome" }
                            th { "Especialidade" }
                            th { "Cidade" }
                            th { "Ações" }
                        }
                    }
                    tbody { {doctor_rows} }
                }
            },
            EntityKind::Events => rsx! {
                table {
                    class: "admin-table",
                    thead {
                        tr {
                            th { "Evento" }
                            th { "Data" }
                            th { "Status" }
                            th { "Ações" }
                        }
                    }
                    tbody { {event_rows} }
                }
            },
        }
    };

    let dialog = if editor().is_open() {
        rsx! {
            RecordDialog {
                editor,
                selected_file,
                busy: busy(),
                on_submit: handle_submit,
                on_cancel: move |_| {
                    editor.set(Editor::Closed);
                    selected_file.set(None);
                },
            }
        }
    } else {
        rsx! {}
    };

    rsx! {
        div {
            class: "page",
            h1 { "Painel Administrativo" }

            div {
                class: "admin-toolbar",
                div {
                    class: "tab-group",
                    button {
                        class: if tab() == EntityKind::Doctors { "tab-active" } else { "" },
                        onclick: move |_| tab.set(EntityKind::Doctors),
                        "Médicos"
                    }
                    button {
                        class: if tab() == EntityKind::Events { "tab-active" } else { "" },
                        onclick: move |_| tab.set(EntityKind::Events),
                        "Eventos"
                    }
                }
                div {
                    class: "admin-actions",
                    button {
                        class: "add",
                        onclick: move |_| {
                            selected_file.set(None);
                            editor.set(Editor::create(tab()));
                        },
                        "Adicionar {tab().singular()}"
                    }
                    button {
                        class: "logout",
                        onclick: move |_| {
                            clear_token(&mut session);
                            nav.push(Route::Home {});
                        },
                        "Sair"
                    }
                }
            }

            {table}
        }

        {dialog}
    }
}

/// Raw answer to the delete prompt; `None` when the browser could not
/// show one.
#[cfg(target_arch = "wasm32")]
fn prompt_delete() -> Option<bool> {
    web_sys::window()?
        .confirm_with_message("Tem certeza que deseja excluir?")
        .ok()
}

#[cfg(not(target_arch = "wasm32"))]
fn prompt_delete() -> Option<bool> {
    Some(true)
}

/// A delete proceeds only on an explicit positive answer.
fn delete_confirmed(answer: Option<bool>) -> bool {
    answer == Some(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn declining_the_prompt_blocks_the_delete() {
        assert!(!delete_confirmed(Some(false)));
        // No prompt shown counts as not confirmed.
        assert!(!delete_confirmed(None));
    }

    #[test]
    fn confirming_the_prompt_allows_the_delete() {
        assert!(delete_confirmed(Some(true)));
    }
}
