use disapprove_host_interface::types::UserPermission;
use disapprove_models::Username;

use crate::{errors::AuthorizationError, CoreContext, Result};

pub struct CheckIsAdmin;

impl CheckIsAdmin {
    #[tracing::instrument(skip(self, ctx), fields(repository_id, username = %username), ret)]
    pub async fn run(
        &self,
        ctx: &CoreContext<'_>,
        repository_id: u64,
        username: &Username,
    ) -> Result<bool> {
        let permission = ctx
            .host_service
            .user_permission_get(repository_id, username)
            .await?;

        Ok(permission.is_admin())
    }

    /// Fail with an authorization error if the user is not a repository admin.
    pub async fn ensure(
        &self,
        ctx: &CoreContext<'_>,
        repository_id: u64,
        username: &Username,
    ) -> Result<()> {
        if self.run(ctx, repository_id, username).await? {
            Ok(())
        } else {
            Err(AuthorizationError::MissingPermission {
                username: username.to_string(),
                repository_id,
                permission: UserPermission::Admin,
            }
            .into())
        }
    }
}
