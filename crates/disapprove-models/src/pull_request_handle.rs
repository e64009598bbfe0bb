use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// Key of a pull request: owning repository ID and pull request ID.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PullRequestHandle {
    repository_id: u64,
    pull_request_id: u64,
}

impl Display for PullRequestHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!(
            "repository {} (#{})",
            self.repository_id, self.pull_request_id
        ))
    }
}

impl PullRequestHandle {
    pub fn new(repository_id: u64, pull_request_id: u64) -> Self {
        Self {
            repository_id,
            pull_request_id,
        }
    }

    pub fn repository_id(&self) -> u64 {
        self.repository_id
    }

    pub fn pull_request_id(&self) -> u64 {
        self.pull_request_id
    }
}

impl From<(u64, u64)> for PullRequestHandle {
    fn from((repository_id, pull_request_id): (u64, u64)) -> Self {
        Self::new(repository_id, pull_request_id)
    }
}
