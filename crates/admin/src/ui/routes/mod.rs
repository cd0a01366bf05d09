//! Route definitions for the admin client

use dioxus::prelude::*;

mod create_equipment;
mod main_menu;

pub use create_equipment::{CreateEquipmentRoute, RouterNavigation};
pub use main_menu::MainMenuRoute;

#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[redirect("/", || Route::MainMenuRoute {})]
    #[route("/menu")]
    MainMenuRoute {},
    #[route("/create-equipment")]
    CreateEquipmentRoute {},
}
