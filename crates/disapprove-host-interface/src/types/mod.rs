mod pull_request_action;
mod pull_request_event;
mod user_permission;

pub use pull_request_action::PullRequestAction;
pub use pull_request_event::PullRequestEvent;
pub use user_permission::{UserPermission, UserPermissionError};
