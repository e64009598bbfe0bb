//! Disapproval core: provisioning, authorization and transitions.

#![warn(clippy::all)]
#![allow(clippy::new_without_default)]

mod context;
pub mod errors;
pub mod use_cases;

#[cfg(any(test, feature = "testkit"))]
pub use context::tests::{CoreContextMockDbTest, CoreContextTest};
pub use context::CoreContext;
pub use errors::{AuthorizationError, DomainError, Result, ValidationError};
use shaku::module;
use use_cases::{
    comments::post_audit_comment::PostAuditComment,
    disapprovals::{
        can_user_disapprove::CanUserDisapprove, get_disapproval_status::GetDisapprovalStatus,
        is_pull_request_disapproved::IsPullRequestDisapproved,
        request_disapproval_transition::RequestDisapprovalTransition,
    },
    pulls::{
        get_or_create_pull_request_disapproval::GetOrCreatePullRequestDisapproval,
        process_pull_request_event::ProcessPullRequestEvent,
    },
    repositories::{
        get_or_create_repository_configuration::GetOrCreateRepositoryConfiguration,
        get_repository_configuration::GetRepositoryConfiguration,
        update_repository_configuration::UpdateRepositoryConfiguration,
    },
};

module! {
    pub CoreModule {
        components = [
            GetOrCreateRepositoryConfiguration, GetOrCreatePullRequestDisapproval,
            ProcessPullRequestEvent, GetDisapprovalStatus, IsPullRequestDisapproved,
            CanUserDisapprove, RequestDisapprovalTransition, PostAuditComment,
            GetRepositoryConfiguration, UpdateRepositoryConfiguration
        ],
        providers = []
    }
}
