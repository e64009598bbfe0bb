pub(crate) mod get_or_create_pull_request_disapproval;
pub(crate) mod process_pull_request_event;

pub use get_or_create_pull_request_disapproval::GetOrCreatePullRequestDisapprovalInterface;
pub use process_pull_request_event::ProcessPullRequestEventInterface;

#[cfg(any(test, feature = "testkit"))]
pub use self::{
    get_or_create_pull_request_disapproval::MockGetOrCreatePullRequestDisapprovalInterface,
    process_pull_request_event::MockProcessPullRequestEventInterface,
};
