//! Equipment editor route
//!
//! Owns the editor state for as long as the screen is open; leaving the
//! route discards the lists and the draft.

use dioxus::prelude::*;
use dioxus::router::Navigator;

use crate::ports::outbound::{Destination, NavigationPort};
use crate::ui::presentation::components::equipment::{
    ConfirmDeleteModal, EquipmentForm, EquipmentList,
};
use crate::ui::presentation::services::use_editor_workflow;
use crate::ui::presentation::state::EditorState;

use super::Route;

/// [`NavigationPort`] backed by the router.
pub struct RouterNavigation {
    navigator: Navigator,
}

impl RouterNavigation {
    pub fn new(navigator: Navigator) -> Self {
        Self { navigator }
    }
}

impl NavigationPort for RouterNavigation {
    fn navigate(&self, destination: Destination) {
        match destination {
            Destination::MainMenu => {
                self.navigator.push(Route::MainMenuRoute {});
            }
        }
    }
}

#[component]
pub fn CreateEquipmentRoute() -> Element {
    let mut state = use_context_provider(EditorState::new);
    let workflow = use_editor_workflow();

    // Fetch guilds and equipment once when the screen opens
    use_hook(move || {
        state.begin_loading();
        spawn(async move {
            let data = workflow.load().await;
            state.finish_loading(data);
        })
    });

    rsx! {
        div {
            class: "editor-screen",
            header {
                class: "editor-header",
                Link { to: Route::MainMenuRoute {}, class: "btn btn-link", "← Main menu" }
                h1 { class: "title", "Create equipment" }
            }
            div {
                class: "editor-columns",
                EquipmentList {}
                EquipmentForm {}
            }
            ConfirmDeleteModal {}
        }
    }
}
