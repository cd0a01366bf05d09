//! Outbound ports - Interfaces for external services
//!
//! These ports define the contracts that infrastructure adapters must implement,
//! allowing application services to interact with external systems without
//! depending on concrete implementations.

pub mod api_port;
pub mod navigation_port;
pub mod raw_api_port;

pub use api_port::{ApiError, ApiPort};
pub use navigation_port::{Destination, NavigationPort};
pub use raw_api_port::RawApiPort;

#[cfg(any(test, feature = "testing"))]
pub use navigation_port::MockNavigationPort;
#[cfg(any(test, feature = "testing"))]
pub use raw_api_port::MockRawApiPort;
