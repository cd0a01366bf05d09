//! Per-guild required level inputs, one row per loaded guild

use dioxus::prelude::*;

use armory_domain::GuildId;

use crate::ui::presentation::state::EditorState;

#[component]
pub fn GuildRequirementsEditor() -> Element {
    let state = use_context::<EditorState>();
    let rows: Vec<(GuildId, String, i32, bool)> = {
        let editor = state.editor.read();
        let errors = editor.validation_errors();
        editor
            .draft()
            .guild_rows(editor.guilds())
            .into_iter()
            .filter_map(|row| {
                let guild = editor.guilds().iter().find(|g| g.id == row.guild_id)?;
                let invalid = errors.is_some_and(|e| e.has_guild(row.guild_id));
                Some((row.guild_id, guild.display_name(), row.required_level, invalid))
            })
            .collect()
    };

    if rows.is_empty() {
        return rsx! {
            p { class: "muted", "No guilds loaded." }
        };
    }

    rsx! {
        div {
            class: "form-grid",
            for (guild_id, name, level, invalid) in rows {
                GuildLevelInput {
                    key: "{guild_id}",
                    guild_id,
                    name,
                    level,
                    invalid,
                }
            }
        }
    }
}

#[component]
fn GuildLevelInput(guild_id: GuildId, name: String, level: i32, invalid: bool) -> Element {
    let mut state = use_context::<EditorState>();

    rsx! {
        div {
            class: "form-group",
            label { class: "form-label", "{name}" }
            input {
                r#type: "number",
                class: if invalid { "input input-invalid" } else { "input" },
                min: "0",
                value: "{level}",
                oninput: move |e| {
                    let raw = e.value();
                    let raw = raw.trim();
                    if raw.is_empty() {
                        state.set_guild_level(guild_id, 0);
                    } else if let Ok(parsed) = raw.parse() {
                        state.set_guild_level(guild_id, parsed);
                    }
                },
            }
        }
    }
}
