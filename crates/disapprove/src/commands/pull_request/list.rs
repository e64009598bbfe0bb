use async_trait::async_trait;
use clap::Parser;

use crate::{
    commands::{Command, CommandContext},
    Result,
};

/// List pull request disapprovals of a repository
#[derive(Parser)]
pub(crate) struct PullRequestListCommand {
    /// Repository ID
    repository_id: u64,
}

#[async_trait]
impl Command for PullRequestListCommand {
    async fn execute(self, ctx: CommandContext) -> Result<()> {
        let disapprovals = ctx
            .db_service
            .pull_request_disapprovals_list(self.repository_id)
            .await?;

        if disapprovals.is_empty() {
            writeln!(
                ctx.writer.write().await,
                "No pull request known for repository {}.",
                self.repository_id
            )?;
        } else {
            for disapproval in disapprovals {
                if disapproval.is_disapproved() {
                    writeln!(
                        ctx.writer.write().await,
                        "- #{} disapproved by {}",
                        disapproval.pull_request_id,
                        disapproval.disapproved_by()
                    )?;
                } else {
                    writeln!(
                        ctx.writer.write().await,
                        "- #{}",
                        disapproval.pull_request_id
                    )?;
                }
            }
        }

        Ok(())
    }
}
