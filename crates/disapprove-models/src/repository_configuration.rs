use disapprove_config::Config;
use serde::{Deserialize, Serialize};

use crate::DisapprovalMode;

/// Disapproval settings of a repository.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct RepositoryConfiguration {
    pub repository_id: u64,
    /// When disabled, the merge check never blocks.
    pub enabled: bool,
    pub mode: DisapprovalMode,
}

impl RepositoryConfiguration {
    /// Default configuration for a repository, using platform defaults.
    pub fn new_default(repository_id: u64, config: &Config) -> Self {
        Self {
            repository_id,
            ..Default::default()
        }
        .with_config(config)
    }

    pub fn with_config(mut self, config: &Config) -> Self {
        self.enabled = config.defaults.enabled;
        self.mode = (&config.defaults.mode).try_into().unwrap_or_default();
        self
    }
}
