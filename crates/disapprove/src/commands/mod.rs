//! Commands.

use std::{io::Write, sync::Arc};

use async_trait::async_trait;
use clap::Subcommand;
use disapprove_config::Config;
use disapprove_core::{CoreContext, CoreModule};
use disapprove_database_interface::DbService;
use disapprove_host_interface::HostService;
use tokio::sync::RwLock;

use self::{
    export::ExportCommand, import::ImportCommand, pull_request::PullRequestCommand,
    repository::RepositoryCommand,
};
use crate::Result;

mod export;
mod import;
mod pull_request;
mod repository;

pub(crate) struct CommandContext {
    pub config: Config,
    pub db_service: Box<dyn DbService + Send + Sync>,
    pub host_service: Box<dyn HostService + Send + Sync>,
    pub core_module: CoreModule,
    pub writer: Arc<RwLock<dyn Write + Send + Sync>>,
}

impl CommandContext {
    pub fn as_core_context(&self) -> CoreContext {
        CoreContext {
            config: &self.config,
            core_module: &self.core_module,
            host_service: self.host_service.as_ref(),
            db_service: self.db_service.as_ref(),
        }
    }
}

#[async_trait]
pub(crate) trait Command {
    async fn execute(self, ctx: CommandContext) -> Result<()>;
}

/// Command
#[derive(Subcommand)]
pub(crate) enum SubCommand {
    Export(ExportCommand),
    Import(ImportCommand),
    PullRequests(PullRequestCommand),
    Repositories(RepositoryCommand),
}

#[async_trait]
impl Command for SubCommand {
    async fn execute(self, ctx: CommandContext) -> Result<()> {
        match self {
            Self::Export(sub) => sub.execute(ctx).await,
            Self::Import(sub) => sub.execute(ctx).await,
            Self::PullRequests(sub) => sub.execute(ctx).await,
            Self::Repositories(sub) => sub.execute(ctx).await,
        }
    }
}
