use async_trait::async_trait;
use clap::Parser;
use disapprove_core::use_cases::disapprovals::GetDisapprovalStatusInterface;
use disapprove_models::PullRequestHandle;
use shaku::HasComponent;

use crate::{
    commands::{Command, CommandContext},
    Result,
};

/// Show pull request disapproval status
#[derive(Parser)]
pub(crate) struct PullRequestShowCommand {
    /// Repository ID
    repository_id: u64,
    /// Pull request ID
    pull_request_id: u64,
}

#[async_trait]
impl Command for PullRequestShowCommand {
    async fn execute(self, ctx: CommandContext) -> Result<()> {
        let handle = PullRequestHandle::new(self.repository_id, self.pull_request_id);
        let get_disapproval_status: &dyn GetDisapprovalStatusInterface =
            ctx.core_module.resolve_ref();
        let status = get_disapproval_status
            .run(&ctx.as_core_context(), handle)
            .await?;

        let mut writer = ctx.writer.write().await;
        writeln!(writer, "Accessing pull request {handle}:")?;
        writeln!(writer, "- disapproved: {}", status.disapproved)?;
        writeln!(writer, "- disapproved by: {}", status.disapproved_by)?;
        writeln!(writer, "- enabled for repository: {}", status.enabled_for_repo)?;

        Ok(())
    }
}
