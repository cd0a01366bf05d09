//! Armory Shared - REST contract for the equipment backend
//!
//! This crate describes the HTTP surface the admin client talks to:
//! - Endpoint paths
//! - Error body and error classification for failed responses
//!
//! # Design Principles
//!
//! 1. **Minimal dependencies** - Only serde and serde_json
//! 2. **No business logic** - Pure data types and serialization
//! 3. **No domain types** - records themselves live in `armory-domain`

pub mod responses;
pub mod routes;

pub use responses::{ErrorBody, ErrorCode};
