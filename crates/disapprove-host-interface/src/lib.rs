//! Host platform contract: permissions, comments and pull request lifecycle events.

mod errors;
mod interface;
pub mod types;

pub use errors::{HostError, Result};
pub use interface::HostService;
#[cfg(any(test, feature = "testkit"))]
pub use interface::MockHostService;
