use async_trait::async_trait;
use clap::Parser;
use disapprove_core::use_cases::pulls::ProcessPullRequestEventInterface;
use disapprove_host_interface::types::{PullRequestAction, PullRequestEvent};
use shaku::HasComponent;

use crate::{
    commands::{Command, CommandContext},
    Result,
};

/// Make sure disapproval records exist for a pull request
#[derive(Parser)]
pub(crate) struct PullRequestProvisionCommand {
    /// Repository ID
    repository_id: u64,
    /// Pull request ID
    pull_request_id: u64,
}

#[async_trait]
impl Command for PullRequestProvisionCommand {
    async fn execute(self, ctx: CommandContext) -> Result<()> {
        let process_pull_request_event: &dyn ProcessPullRequestEventInterface =
            ctx.core_module.resolve_ref();
        process_pull_request_event
            .run(
                &ctx.as_core_context(),
                PullRequestEvent {
                    action: PullRequestAction::Updated,
                    repository_id: self.repository_id,
                    pull_request_id: self.pull_request_id,
                },
            )
            .await;

        let provisioned = ctx
            .db_service
            .pull_request_disapprovals_get((self.repository_id, self.pull_request_id).into())
            .await?
            .is_some();

        if provisioned {
            writeln!(
                ctx.writer.write().await,
                "Pull request #{} provisioned on repository {}.",
                self.pull_request_id,
                self.repository_id
            )?;
        } else {
            writeln!(
                ctx.writer.write().await,
                "Pull request #{} could not be provisioned on repository {}.",
                self.pull_request_id,
                self.repository_id
            )?;
        }

        Ok(())
    }
}
