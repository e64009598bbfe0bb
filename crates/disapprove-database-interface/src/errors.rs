use disapprove_models::PullRequestHandle;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DatabaseError {
    #[error("Import/Export JSON error: {source}")]
    ExchangeJsonError { source: serde_json::Error },

    #[error("Unknown repository configuration for repository ID '{0}'")]
    UnknownRepositoryConfiguration(u64),

    #[error("Unknown pull request disapproval for {0}")]
    UnknownPullRequestDisapproval(PullRequestHandle),

    #[error("Pull request disapproval for {0} was modified concurrently")]
    ConcurrentModification(PullRequestHandle),

    #[error(transparent)]
    ImplementationError {
        source: Box<dyn std::error::Error + Send + Sync + 'static>,
    },
}

pub type Result<T, E = DatabaseError> = core::result::Result<T, E>;
