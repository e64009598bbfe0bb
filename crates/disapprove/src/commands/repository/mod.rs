//! Repository commands.

use async_trait::async_trait;
use clap::{Parser, Subcommand};

use super::{Command, CommandContext};
use crate::Result;

mod configure;
mod list;
mod set_enabled;
mod set_mode;
mod show;

use self::{
    configure::RepositoryConfigureCommand, list::RepositoryListCommand,
    set_enabled::RepositorySetEnabledCommand, set_mode::RepositorySetModeCommand,
    show::RepositoryShowCommand,
};

/// Manage repository configurations
#[derive(Parser)]
pub(crate) struct RepositoryCommand {
    #[clap(subcommand)]
    inner: RepositorySubCommand,
}

#[async_trait]
impl Command for RepositoryCommand {
    async fn execute(self, ctx: CommandContext) -> Result<()> {
        self.inner.execute(ctx).await
    }
}

#[derive(Subcommand)]
enum RepositorySubCommand {
    Configure(RepositoryConfigureCommand),
    List(RepositoryListCommand),
    SetEnabled(RepositorySetEnabledCommand),
    SetMode(RepositorySetModeCommand),
    Show(RepositoryShowCommand),
}

#[async_trait]
impl Command for RepositorySubCommand {
    async fn execute(self, ctx: CommandContext) -> Result<()> {
        match self {
            Self::Configure(sub) => sub.execute(ctx).await,
            Self::List(sub) => sub.execute(ctx).await,
            Self::SetEnabled(sub) => sub.execute(ctx).await,
            Self::SetMode(sub) => sub.execute(ctx).await,
            Self::Show(sub) => sub.execute(ctx).await,
        }
    }
}
