use std::{io::Write, sync::Arc};

use clap::Parser;
use disapprove_config::Config;
use disapprove_core::CoreModule;
use disapprove_database_memory::MemoryDb;
use disapprove_host_interface::MockHostService;
use tokio::sync::RwLock;

use crate::{
    args::{Args, CommandExecutor},
    commands::CommandContext,
    Result,
};

pub(crate) struct CommandContextTest {
    pub config: Config,
    pub core_module: CoreModule,
    pub host_service: MockHostService,
    pub db_service: MemoryDb,
}

impl CommandContextTest {
    pub fn new() -> Self {
        Self {
            config: Config::from_env_no_version(),
            core_module: CoreModule::builder().build(),
            host_service: MockHostService::new(),
            db_service: MemoryDb::new(),
        }
    }

    pub fn into_context(self, writer: Arc<RwLock<dyn Write + Send + Sync>>) -> CommandContext {
        CommandContext {
            config: self.config,
            core_module: self.core_module,
            db_service: Box::new(self.db_service),
            host_service: Box::new(self.host_service),
            writer,
        }
    }
}

pub(crate) async fn test_command(ctx: CommandContextTest, command_args: &[&str]) -> String {
    try_test_command(ctx, command_args).await.unwrap()
}

pub(crate) async fn try_test_command(
    ctx: CommandContextTest,
    command_args: &[&str],
) -> Result<String> {
    let buf = Arc::new(RwLock::new(Vec::new()));

    {
        let command_args = {
            let mut tmp_args = vec!["disapprove"];
            tmp_args.extend(command_args);
            tmp_args
        };

        match Args::try_parse_from(command_args) {
            Ok(args) => {
                CommandExecutor::parse_args_async(args, ctx.into_context(buf.clone())).await?
            }
            Err(e) => {
                eprintln!("{}", e);
                panic!("Parse error.")
            }
        }
    }

    let vec = buf.read().await.to_vec();
    Ok(std::str::from_utf8(&vec)?.to_string())
}
