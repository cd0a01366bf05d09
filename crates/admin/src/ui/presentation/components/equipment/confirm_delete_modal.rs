//! Confirmation dialog shown before a record is deleted

use dioxus::prelude::*;

use crate::ui::presentation::services::use_editor_workflow;
use crate::ui::presentation::state::EditorState;

#[component]
pub fn ConfirmDeleteModal() -> Element {
    let mut state = use_context::<EditorState>();
    let workflow = use_editor_workflow();

    let pending_name = {
        let editor = state.editor.read();
        editor.pending_delete().map(|id| {
            editor
                .all_equipment()
                .iter()
                .find(|e| e.id == Some(id))
                .map(|e| e.name().to_string())
                .unwrap_or_else(|| format!("#{}", id))
        })
    };

    let Some(name) = pending_name else {
        return rsx! {};
    };

    let confirm = move |_| {
        let Some(confirmed) = state.confirm_delete() else {
            return;
        };
        let workflow = workflow.clone();
        spawn(async move {
            if let Ok(outcome) = workflow.delete(confirmed).await {
                state.apply_delete(outcome);
            }
        });
    };

    rsx! {
        div {
            class: "modal-backdrop",
            onclick: move |_| state.cancel_delete(),
            div {
                class: "modal",
                onclick: |e| e.stop_propagation(),
                h2 { class: "section-title", "Delete equipment?" }
                p { "\"{name}\" will be removed permanently." }
                div {
                    class: "form-actions",
                    button {
                        r#type: "button",
                        class: "btn btn-secondary",
                        onclick: move |_| state.cancel_delete(),
                        "Cancel"
                    }
                    button {
                        r#type: "button",
                        class: "btn btn-danger",
                        onclick: confirm,
                        "Delete"
                    }
                }
            }
        }
    }
}
