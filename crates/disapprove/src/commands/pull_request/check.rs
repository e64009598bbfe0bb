use async_trait::async_trait;
use clap::Parser;
use disapprove_core::use_cases::disapprovals::{
    CanUserDisapproveInterface, IsPullRequestDisapprovedInterface,
};
use disapprove_models::{PullRequestHandle, Username};
use shaku::HasComponent;

use crate::{
    commands::{Command, CommandContext},
    Result,
};

/// Evaluate the display conditions of a pull request for a user
#[derive(Parser)]
pub(crate) struct PullRequestCheckCommand {
    /// Repository ID
    repository_id: u64,
    /// Pull request ID
    pull_request_id: u64,
    /// Acting user
    #[clap(long)]
    user: String,
}

#[async_trait]
impl Command for PullRequestCheckCommand {
    async fn execute(self, ctx: CommandContext) -> Result<()> {
        let handle = PullRequestHandle::new(self.repository_id, self.pull_request_id);
        let acting_user = Username::new(&self.user)?;
        let core_context = ctx.as_core_context();

        let is_pull_request_disapproved: &dyn IsPullRequestDisapprovedInterface =
            ctx.core_module.resolve_ref();
        let disapproved = is_pull_request_disapproved.run(&core_context, handle).await;

        let can_user_disapprove: &dyn CanUserDisapproveInterface = ctx.core_module.resolve_ref();
        let can_flip = can_user_disapprove
            .run(&core_context, handle, &acting_user)
            .await;

        let mut writer = ctx.writer.write().await;
        writeln!(writer, "Pull request {handle}:")?;
        writeln!(writer, "- disapproved: {disapproved}")?;
        writeln!(writer, "- {acting_user} can change the disapproval: {can_flip}")?;

        Ok(())
    }
}
