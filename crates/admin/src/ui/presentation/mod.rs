//! Presentation layer: components, screen state and service hooks.

pub mod components;
pub mod services;
pub mod state;

pub use services::Services;
