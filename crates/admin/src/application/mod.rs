pub mod api;
pub mod editor;
pub mod error;
pub mod services;

pub use error::ServiceError;
