use async_trait::async_trait;
use clap::Parser;
use disapprove_models::RepositoryConfiguration;

use crate::{
    commands::{Command, CommandContext},
    Result,
};

/// Enable or disable disapprovals for a repository, without permission checks
#[derive(Parser)]
pub(crate) struct RepositorySetEnabledCommand {
    /// Repository ID
    repository_id: u64,
    /// Status
    #[clap(action = clap::ArgAction::Set)]
    enabled: bool,
}

#[async_trait]
impl Command for RepositorySetEnabledCommand {
    async fn execute(self, ctx: CommandContext) -> Result<()> {
        let configuration = ctx
            .db_service
            .repository_configurations_get_expect(self.repository_id)
            .await?;

        ctx.db_service
            .repository_configurations_update(RepositoryConfiguration {
                enabled: self.enabled,
                ..configuration
            })
            .await?;

        writeln!(
            ctx.writer.write().await,
            "Disapprovals set to '{}' for repository {}.",
            self.enabled,
            self.repository_id
        )?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::error::Error;

    use disapprove_database_interface::DbService;
    use disapprove_models::RepositoryConfiguration;

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

        assert_eq!(
            test_command(ctx, &["repositories", "set-enabled", "1", "true"]).await,
            "Disapprovals set to 'true' for repository 1.\n"
        );

        Ok(())
    }
}
