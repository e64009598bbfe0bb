//! Pull request commands.

use async_trait::async_trait;
use clap::{Parser, Subcommand};
use disapprove_core::{use_cases::disapprovals::TransitionParameters, ValidationError};
use disapprove_models::Username;

use super::{Command, CommandContext};
use crate::Result;

mod check;
mod disapprove;
mod list;
mod provision;
mod remove_disapproval;
mod show;

use self::{
    check::PullRequestCheckCommand, disapprove::PullRequestDisapproveCommand,
    list::PullRequestListCommand, provision::PullRequestProvisionCommand,
    remove_disapproval::PullRequestRemoveDisapprovalCommand, show::PullRequestShowCommand,
};

/// Manage pull request disapprovals
#[derive(Parser)]
pub(crate) struct PullRequestCommand {
    #[clap(subcommand)]
    inner: PullRequestSubCommand,
}

#[async_trait]
impl Command for PullRequestCommand {
    async fn execute(self, ctx: CommandContext) -> Result<()> {
        self.inner.execute(ctx).await
    }
}

#[derive(Subcommand)]
enum PullRequestSubCommand {
    Check(PullRequestCheckCommand),
    Disapprove(PullRequestDisapproveCommand),
    List(PullRequestListCommand),
    Provision(PullRequestProvisionCommand),
    RemoveDisapproval(PullRequestRemoveDisapprovalCommand),
    Show(PullRequestShowCommand),
}

#[async_trait]
impl Command for PullRequestSubCommand {
    async fn execute(self, ctx: CommandContext) -> Result<()> {
        match self {
            Self::Check(sub) => sub.execute(ctx).await,
            Self::Disapprove(sub) => sub.execute(ctx).await,
            Self::List(sub) => sub.execute(ctx).await,
            Self::Provision(sub) => sub.execute(ctx).await,
            Self::RemoveDisapproval(sub) => sub.execute(ctx).await,
            Self::Show(sub) => sub.execute(ctx).await,
        }
    }
}

/// Validate raw transition arguments, before touching the store.
fn parse_transition(
    repository_id: &str,
    pull_request_id: &str,
    disapproved: &str,
    user: Option<&str>,
) -> Result<(TransitionParameters, Username), ValidationError> {
    let parameters =
        TransitionParameters::parse(Some(repository_id), Some(pull_request_id), Some(disapproved))?;
    let acting_user = Username::from_current_user(user)?;

    Ok((parameters, acting_user))
}
