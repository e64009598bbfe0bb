use async_trait::async_trait;
use clap::Parser;
use disapprove_core::use_cases::disapprovals::RequestDisapprovalTransitionInterface;
use shaku::HasComponent;

use super::parse_transition;
use crate::{
    commands::{Command, CommandContext},
    Result,
};

/// Remove the disapproval of a pull request on behalf of a user
#[derive(Parser)]
pub(crate) struct PullRequestRemoveDisapprovalCommand {
    /// Repository ID
    repository_id: String,
    /// Pull request ID
    pull_request_id: String,
    /// Acting user
    #[clap(long)]
    user: Option<String>,
}

#[async_trait]
impl Command for PullRequestRemoveDisapprovalCommand {
    async fn execute(self, ctx: CommandContext) -> Result<()> {
        let (parameters, acting_user) = parse_transition(
            &self.repository_id,
            &self.pull_request_id,
            "false",
            self.user.as_deref(),
        )?;
        let handle = parameters.handle;

        let request_disapproval_transition: &dyn RequestDisapprovalTransitionInterface =
            ctx.core_module.resolve_ref();
        let outcome = request_disapproval_transition
            .run(
                &ctx.as_core_context(),
                handle,
                &acting_user,
                parameters.disapproved,
            )
            .await?;

        if outcome.changed {
            writeln!(
                ctx.writer.write().await,
                "Disapproval removed from pull request {handle}."
            )?;
        } else {
            writeln!(
                ctx.writer.write().await,
                "Pull request {handle} is not disapproved."
            )?;
        }

        Ok(())
    }
}
