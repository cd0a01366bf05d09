//! Existing equipment with the type filter

use dioxus::prelude::*;

use armory_domain::Equipment;

use crate::ui::presentation::state::EditorState;

#[component]
pub fn EquipmentList() -> Element {
    let mut state = use_context::<EditorState>();
    let (items, filter, total, ready) = {
        let editor = state.editor.read();
        (
            editor.filtered_equipment().to_vec(),
            editor.type_filter().to_string(),
            editor.all_equipment().len(),
            editor.is_ready(),
        )
    };
    let shown = items.len();
    let keyed: Vec<(String, Equipment)> = items
        .iter()
        .enumerate()
        .map(|(i, item)| {
            let key = item.id.map(|id| id.to_string()).unwrap_or_else(|| format!("new-{}", i));
            (key, item.clone())
        })
        .collect();

    rsx! {
        section {
            class: "panel equipment-list",
            h2 { class: "section-title", "Existing equipment" }
            input {
                r#type: "text",
                class: "input",
                placeholder: "Filter by exact type, e.g. Weapon",
                value: "{filter}",
                oninput: move |e| state.apply_filter(&e.value()),
            }
            p { class: "muted", "Showing {shown} of {total}" }

            if !ready {
                p { class: "muted", "Loading equipment..." }
            } else if items.is_empty() {
                p { class: "muted", "No equipment found." }
            }

            ul {
                class: "item-list",
                for (row_key, item) in keyed {
                    EquipmentRow {
                        key: "{row_key}",
                        equipment: item,
                        selectable: ready,
                    }
                }
            }
        }
    }
}

#[component]
fn EquipmentRow(equipment: Equipment, selectable: bool) -> Element {
    let mut state = use_context::<EditorState>();
    let id = equipment.id;
    let name = equipment.name().to_string();
    let equipment_type = equipment.equipment_type().to_string();

    rsx! {
        li {
            class: "item-row",
            div {
                class: "item-summary",
                span { class: "item-name", "{name}" }
                span { class: "item-type", "{equipment_type}" }
            }
            div {
                class: "item-actions",
                button {
                    r#type: "button",
                    class: "btn btn-secondary",
                    disabled: !selectable,
                    onclick: move |_| state.select(&equipment),
                    "Copy to form"
                }
                if let Some(id) = id {
                    button {
                        r#type: "button",
                        class: "btn btn-danger",
                        onclick: move |_| state.request_delete(id),
                        "Delete"
                    }
                }
            }
        }
    }
}
