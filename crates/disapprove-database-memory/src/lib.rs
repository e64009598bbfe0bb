use std::{collections::HashMap, sync::RwLock};

use async_trait::async_trait;
use disapprove_database_interface::{DatabaseError, DbService, Result};
use disapprove_models::{
    DisapprovalState, PullRequestDisapproval, PullRequestHandle, RepositoryConfiguration,
};

#[derive(Debug, Default)]
pub struct MemoryDb {
    repository_configurations: RwLock<HashMap<u64, RepositoryConfiguration>>,
    pull_request_disapprovals: RwLock<HashMap<PullRequestHandle, PullRequestDisapproval>>,
}

impl MemoryDb {
    pub fn new() -> Self {
        Default::default()
    }
}

#[async_trait]
impl DbService for MemoryDb {
    ///////////////
    // Health check

    async fn health_check(&self) -> Result<()> {
        Ok(())
    }

    ///////////////////////////////
    // Pull request disapprovals

    async fn pull_request_disapprovals_all(&self) -> Result<Vec<PullRequestDisapproval>> {
        let mut values: Vec<_> = self
            .pull_request_disapprovals
            .read()
            .unwrap()
            .values()
            .cloned()
            .collect();
        values.sort_by_key(|a| a.handle());
        Ok(values)
    }

    async fn pull_request_disapprovals_compare_and_set(
        &self,
        expected: &DisapprovalState,
        instance: PullRequestDisapproval,
    ) -> Result<PullRequestDisapproval> {
        let handle = instance.handle();
        let mut disapprovals = self.pull_request_disapprovals.write().unwrap();

        match disapprovals.get_mut(&handle) {
            None => Err(DatabaseError::UnknownPullRequestDisapproval(handle)),
            Some(current) if &current.state != expected => {
                Err(DatabaseError::ConcurrentModification(handle))
            }
            Some(current) => {
                *current = instance.clone();
                Ok(instance)
            }
        }
    }

    async fn pull_request_disapprovals_get(
        &self,
        handle: PullRequestHandle,
    ) -> Result<Option<PullRequestDisapproval>> {
        Ok(self
            .pull_request_disapprovals
            .read()
            .unwrap()
            .get(&handle)
            .cloned())
    }

    async fn pull_request_disapprovals_get_or_create(
        &self,
        instance: PullRequestDisapproval,
    ) -> Result<PullRequestDisapproval> {
        Ok(self
            .pull_request_disapprovals
            .write()
            .unwrap()
            .entry(instance.handle())
            .or_insert(instance)
            .clone())
    }

    async fn pull_request_disapprovals_list(
        &self,
        repository_id: u64,
    ) -> Result<Vec<PullRequestDisapproval>> {
        let mut values: Vec<_> = self
            .pull_request_disapprovals
            .read()
            .unwrap()
            .values()
            .filter(|d| d.repository_id == repository_id)
            .cloned()
            .collect();
        values.sort_by_key(|a| a.pull_request_id);
        Ok(values)
    }

    ///////////////////////////////
    // Repository configurations

    async fn repository_configurations_all(&self) -> Result<Vec<RepositoryConfiguration>> {
        let mut values: Vec<_> = self
            .repository_configurations
            .read()
            .unwrap()
            .values()
            .cloned()
            .collect();
        values.sort_by_key(|a| a.repository_id);
        Ok(values)
    }

    async fn repository_configurations_get(
        &self,
        repository_id: u64,
    ) -> Result<Option<RepositoryConfiguration>> {
        Ok(self
            .repository_configurations
            .read()
            .unwrap()
            .get(&repository_id)
            .cloned())
    }

    async fn repository_configurations_get_or_create(
        &self,
        instance: RepositoryConfiguration,
    ) -> Result<RepositoryConfiguration> {
        Ok(self
            .repository_configurations
            .write()
            .unwrap()
            .entry(instance.repository_id)
            .or_insert(instance)
            .clone())
    }

    async fn repository_configurations_update(
        &self,
        instance: RepositoryConfiguration,
    ) -> Result<RepositoryConfiguration> {
        let mut configurations = self.repository_configurations.write().unwrap();

        match configurations.get_mut(&instance.repository_id) {
            Some(current) => {
                *current = instance.clone();
                Ok(instance)
            }
            None => Err(DatabaseError::UnknownRepositoryConfiguration(
                instance.repository_id,
            )),
        }
    }
}
