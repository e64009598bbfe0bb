pub(crate) mod can_user_disapprove;
pub(crate) mod get_disapproval_status;
pub(crate) mod is_pull_request_disapproved;
pub(crate) mod request_disapproval_transition;
mod status;
mod transition_parameters;

pub use can_user_disapprove::CanUserDisapproveInterface;
pub use get_disapproval_status::GetDisapprovalStatusInterface;
pub use is_pull_request_disapproved::IsPullRequestDisapprovedInterface;
pub use request_disapproval_transition::{RequestDisapprovalTransitionInterface, TransitionOutcome};
pub use status::DisapprovalStatus;
pub use transition_parameters::TransitionParameters;

#[cfg(any(test, feature = "testkit"))]
pub use self::{
    can_user_disapprove::MockCanUserDisapproveInterface,
    get_disapproval_status::MockGetDisapprovalStatusInterface,
    is_pull_request_disapproved::MockIsPullRequestDisapprovedInterface,
    request_disapproval_transition::MockRequestDisapprovalTransitionInterface,
};
