//! Equipment form - scalar fields, guild requirements and submit

use dioxus::prelude::*;

use armory_domain::{NumericField, TextField, ALIGNMENT_OPTIONS};

use crate::ui::presentation::services::use_editor_workflow;
use crate::ui::presentation::state::EditorState;
use crate::ui::routes::RouterNavigation;

use super::GuildRequirementsEditor;

/// Parse a number input; blank reads as 0, anything else unparseable is ignored.
fn parse_number(raw: &str) -> Option<i32> {
    let raw = raw.trim();
    if raw.is_empty() {
        Some(0)
    } else {
        raw.parse().ok()
    }
}

#[component]
pub fn EquipmentForm() -> Element {
    let mut state = use_context::<EditorState>();
    let workflow = use_editor_workflow();
    let navigator = use_navigator();

    let (draft, ready, guild_count) = {
        let editor = state.editor.read();
        (editor.draft().clone(), editor.is_ready(), editor.guilds().len())
    };
    let is_cursed = draft.stats.is_cursed;
    let alignment = draft.text(TextField::Alignment).to_string();
    let based_on = draft.based_on;

    let submit = move |_| {
        let Some(record) = state.prepare_submission() else {
            return;
        };
        let workflow = workflow.clone();
        spawn(async move {
            let navigation = RouterNavigation::new(navigator);
            // Failures are logged by the workflow; the form stays as it is.
            let _ = workflow.submit(record, &navigation).await;
        });
    };

    rsx! {
        section {
            class: "panel equipment-form",

            if !ready {
                p { class: "muted", "Loading guilds..." }
            }

            if let Some(id) = based_on {
                div {
                    class: "notice",
                    "Copied from equipment #{id}. Saving creates a new record; the original is not changed."
                }
            }

            div {
                class: "form-grid",
                TextInput { field: TextField::Name }
                TextInput { field: TextField::Type }
                div {
                    class: "form-group",
                    label { class: "form-label", "{TextField::Alignment.label()} *" }
                    select {
                        class: "input",
                        value: "{alignment}",
                        onchange: move |e| state.set_text(TextField::Alignment, e.value()),
                        if !ALIGNMENT_OPTIONS.contains(&alignment.as_str()) {
                            option { value: "{alignment}", "{alignment}" }
                        }
                        for option_value in ALIGNMENT_OPTIONS {
                            option {
                                key: "{option_value}",
                                value: "{option_value}",
                                "{option_value}"
                            }
                        }
                    }
                }
                div {
                    class: "form-group form-check",
                    input {
                        r#type: "checkbox",
                        id: "isCursed",
                        checked: is_cursed,
                        onchange: move |e| state.set_cursed(e.checked()),
                    }
                    label { r#for: "isCursed", "Cursed" }
                }
            }

            h3 { class: "section-title", "Combat" }
            div {
                class: "form-grid",
                for field in NumericField::COMBAT {
                    NumberInput { key: "{field}", field }
                }
                NumberInput { field: NumericField::Value }
            }

            h3 { class: "section-title", "Requirements" }
            div {
                class: "form-grid",
                for field in NumericField::REQUIREMENTS {
                    NumberInput { key: "{field}", field }
                }
            }

            h3 { class: "section-title", "Bonuses" }
            div {
                class: "form-grid",
                for field in NumericField::BONUSES {
                    NumberInput { key: "{field}", field }
                }
            }

            h3 { class: "section-title", "Guild requirements ({guild_count})" }
            GuildRequirementsEditor {}

            h3 { class: "section-title", "Details" }
            div {
                class: "form-grid",
                TextInput { field: TextField::Special }
                TextInput { field: TextField::Special2 }
                TextInput { field: TextField::IconUrl }
            }

            div {
                class: "form-actions",
                button {
                    r#type: "button",
                    class: "btn btn-secondary",
                    onclick: move |_| state.reset_draft(),
                    "Reset"
                }
                button {
                    r#type: "button",
                    class: "btn btn-primary",
                    disabled: !ready,
                    onclick: submit,
                    "Create equipment"
                }
            }
        }
    }
}

#[component]
fn TextInput(field: TextField) -> Element {
    let mut state = use_context::<EditorState>();
    let (value, invalid) = {
        let editor = state.editor.read();
        let invalid = editor
            .validation_errors()
            .is_some_and(|errors| errors.has_field(field.key()));
        (editor.draft().text(field).to_string(), invalid)
    };
    let marker = if field.is_required() { " *" } else { "" };

    rsx! {
        div {
            class: "form-group",
            label { class: "form-label", "{field.label()}{marker}" }
            input {
                r#type: "text",
                class: if invalid { "input input-invalid" } else { "input" },
                value: "{value}",
                oninput: move |e| state.set_text(field, e.value()),
            }
        }
    }
}

#[component]
fn NumberInput(field: NumericField) -> Element {
    let mut state = use_context::<EditorState>();
    let (value, invalid) = {
        let editor = state.editor.read();
        let invalid = editor
            .validation_errors()
            .is_some_and(|errors| errors.has_field(field.key()));
        (editor.draft().numeric(field), invalid)
    };
    let min = field.minimum().map(|m| m.to_string()).unwrap_or_default();

    rsx! {
        div {
            class: "form-group",
            label { class: "form-label", "{field.label()}" }
            input {
                r#type: "number",
                class: if invalid { "input input-invalid" } else { "input" },
                min: "{min}",
                value: "{value}",
                oninput: move |e| {
                    if let Some(parsed) = parse_number(&e.value()) {
                        state.set_numeric(field, parsed);
                    }
                },
            }
        }
    }
}
