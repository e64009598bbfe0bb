//! Host errors.

use thiserror::Error;

/// Host error.
#[allow(missing_docs)]
#[derive(Debug, Error)]
pub enum HostError {
    #[error("Unknown repository {0} on host")]
    UnknownRepository(u64),

    #[error(transparent)]
    ImplementationError {
        source: Box<dyn std::error::Error + Send + Sync + 'static>,
    },
}

/// Result alias for `HostError`.
pub type Result<T, E = HostError> = core::result::Result<T, E>;
