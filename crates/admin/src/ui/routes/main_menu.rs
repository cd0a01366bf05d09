//! Main menu route handler

use dioxus::prelude::*;

use super::Route;

#[component]
pub fn MainMenuRoute() -> Element {
    let navigator = use_navigator();

    rsx! {
        div {
            class: "main-menu",
            h1 { class: "title", "Armory Admin" }
            nav {
                class: "menu-links",
                button {
                    class: "btn btn-primary",
                    onclick: move |_| {
                        navigator.push(Route::CreateEquipmentRoute {});
                    },
                    "Create equipment"
                }
            }
        }
    }
}
