//! Null driver for the host platform.

#![warn(missing_docs)]
#![warn(clippy::all)]

use async_trait::async_trait;
use disapprove_host_interface::{types::UserPermission, HostService, Result};
use disapprove_models::{PullRequestHandle, Username};
use tracing::info;

/// Null host service.
///
/// Every user gets the same permission (read by default) and comments are only logged.
#[derive(Clone)]
pub struct NullHostService {
    permission: UserPermission,
}

impl NullHostService {
    /// Build a null host service granting read permission.
    pub fn new() -> Self {
        Self::with_permission(UserPermission::Read)
    }

    /// Build a null host service granting `permission` to every user.
    pub fn with_permission(permission: UserPermission) -> Self {
        Self { permission }
    }
}

impl Default for NullHostService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HostService for NullHostService {
    #[tracing::instrument(skip(self, username), fields(username = %username), ret)]
    async fn user_permission_get(
        &self,
        _repository_id: u64,
        username: &Username,
    ) -> Result<UserPermission> {
        Ok(self.permission)
    }

    #[tracing::instrument(skip(self, body), fields(handle = %handle))]
    async fn comments_post(&self, handle: PullRequestHandle, body: &str) -> Result<u64> {
        info!(body = body, message = "Comment posted");
        Ok(0)
    }
}
