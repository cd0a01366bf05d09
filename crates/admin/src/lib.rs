//! Armory admin client.
//!
//! Desktop front-end for maintaining the equipment catalog: UI, application
//! logic and the HTTP adapter for the equipment backend.

pub mod application;
pub mod infrastructure;
pub mod ports;
pub mod runner;
pub mod ui;

pub use ui::app;
pub use ui::Route;
