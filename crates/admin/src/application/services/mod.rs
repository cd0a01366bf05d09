//! Application services
//!
//! Each service wraps one backend resource behind the typed [`Api`](crate::application::api::Api).

pub mod equipment_service;
pub mod guild_service;

pub use equipment_service::EquipmentService;
pub use guild_service::GuildService;
