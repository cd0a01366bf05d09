use dioxus::prelude::*;

pub mod presentation;
pub mod routes;

pub use routes::Route;

pub fn app() -> Element {
    rsx! {
        AppRoot {}
    }
}

#[component]
fn AppRoot() -> Element {
    rsx! {
        DesktopShell {
            Router::<routes::Route> {}
        }
    }
}

#[component]
fn DesktopShell(children: Element) -> Element {
    rsx! {
        div {
            class: "app-shell",
            {children}
        }
    }
}
