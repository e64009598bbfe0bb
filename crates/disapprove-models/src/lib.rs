//! Domain models.

#![warn(clippy::all)]

mod disapproval_mode;
mod disapproval_state;
mod pull_request_disapproval;
mod pull_request_handle;
mod repository_configuration;
mod username;

pub use disapproval_mode::{DisapprovalMode, DisapprovalModeError};
pub use disapproval_state::{DisapprovalChange, DisapprovalState, NO_DISAPPROVER};
pub use pull_request_disapproval::{PullRequestDisapproval, PullRequestDisapprovalError};
pub use pull_request_handle::PullRequestHandle;
pub use repository_configuration::RepositoryConfiguration;
pub use username::{Username, UsernameError};
