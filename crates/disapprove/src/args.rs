use std::sync::Arc;

use clap::Parser;
use disapprove_config::{Config, DatabaseDriver};
use disapprove_core::CoreModule;
use disapprove_database_interface::DbService;
use disapprove_database_memory::MemoryDb;
use disapprove_database_pg::{establish_pool_connection, run_migrations, PostgresDb};
use disapprove_host_interface::{types::UserPermission, HostService};
use disapprove_host_null::NullHostService;
use tokio::sync::RwLock;
use tracing::info;

use crate::{
    commands::{Command, CommandContext, SubCommand},
    Result,
};

#[derive(Parser)]
#[command(about = None, long_about = None)]
pub struct Args {
    #[command(subcommand)]
    cmd: SubCommand,
}

pub struct CommandExecutor;

impl CommandExecutor {
    pub fn parse_args(config: Config, args: Args) -> Result<()> {
        let sync = |config: Config, args: Args| async move {
            let core_module = CoreModule::builder().build();
            let db_service: Box<dyn DbService + Send + Sync + 'static> = {
                if config.database.driver == DatabaseDriver::Postgres {
                    info!("Using PostgresDb database driver");

                    let pool = establish_pool_connection(&config).await?;
                    run_migrations(&pool).await?;

                    Box::new(PostgresDb::new(pool))
                } else {
                    info!("Using MemoryDb database driver");
                    Box::new(MemoryDb::new())
                }
            };

            let permission = UserPermission::try_from(&config.host.null_permission[..])?;
            info!(
                permission = %permission,
                "Using NullHostService host driver"
            );
            let host_service: Box<dyn HostService + Send + Sync + 'static> =
                Box::new(NullHostService::with_permission(permission));

            let ctx = CommandContext {
                config,
                db_service,
                host_service,
                core_module,
                writer: Arc::new(RwLock::new(std::io::stdout())),
            };

            Self::parse_args_async(args, ctx).await
        };

        tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()?
            .block_on(sync(config, args))
    }

    pub(crate) async fn parse_args_async(args: Args, ctx: CommandContext) -> Result<()> {
        args.cmd.execute(ctx).await
    }
}
