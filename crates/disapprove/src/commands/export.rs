use std::{fs::File, io::BufWriter, path::PathBuf};

use async_trait::async_trait;
use clap::Parser;
use disapprove_database_interface::Exchanger;

use super::{Command, CommandContext};
use crate::Result;

/// Export all data
#[derive(Parser)]
pub(crate) struct ExportCommand {
    /// Output file, command output if not set
    #[clap(short, long)]
    output_file: Option<PathBuf>,
}

#[async_trait]
impl Command for ExportCommand {
    async fn execute(self, ctx: CommandContext) -> Result<()> {
        if let Some(file_path) = self.output_file {
            let file = File::create(file_path)?;
            let mut writer = BufWriter::new(file);
            Exchanger::export_to_json(ctx.db_service.as_ref(), &mut writer).await?;
        } else {
            let mut buffer = Vec::new();
            Exchanger::export_to_json(ctx.db_service.as_ref(), &mut buffer).await?;
            ctx.writer.write().await.write_all(&buffer)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::error::Error;

    use disapprove_database_interface::DbService;
    use disapprove_models::{PullRequestDisapproval, RepositoryConfiguration};

    use crate::testutils::{test_command, CommandContextTest};

    #[tokio::test]
    async fn run() -> Result<(), Box<dyn Error>> {
        let ctx = CommandContextTest::new();
        ctx.db_service
            .repository_configurations_get_or_create(RepositoryConfiguration {
                repository_id: 1,
                ..Default::default()
            })
            .await?;
        ctx.db_service
            .pull_request_disapprovals_get_or_create(PullRequestDisapproval::new_default(
                (1, 2).into(),
            ))
            .await?;

        let output = test_command(ctx, &["export"]).await;
        let data: serde_json::Value = serde_json::from_str(&output)?;
        assert_eq!(data["repository_configurations"][0]["repository_id"], 1);
        assert_eq!(data["pull_request_disapprovals"][0]["pull_request_id"], 2);
        assert_eq!(
            data["pull_request_disapprovals"][0]["disapproved_by"],
            "none"
        );

        Ok(())
    }
}
