use async_trait::async_trait;
use disapprove_database_interface::{DatabaseError, DbService, Result};
use disapprove_models::{
    DisapprovalState, PullRequestDisapproval, PullRequestHandle, RepositoryConfiguration,
};
use sqlx::PgPool;

use crate::{
    fields::id_to_db,
    row::{PullRequestDisapprovalRow, RepositoryConfigurationRow},
};

pub struct PostgresDb {
    pool: PgPool,
}

impl PostgresDb {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn wrap_error(e: sqlx::Error) -> DatabaseError {
        DatabaseError::ImplementationError { source: e.into() }
    }
}

#[async_trait]
impl DbService for PostgresDb {
    #[tracing::instrument(skip(self))]
    async fn health_check(&self) -> Result<()> {
        sqlx::query("SELECT 1;")
            .execute(&self.pool)
            .await
            .map_err(Self::wrap_error)?;

        Ok(())
    }

    #[tracing::instrument(skip(self))]
    async fn pull_request_disapprovals_all(&self) -> Result<Vec<PullRequestDisapproval>> {
        let rows = sqlx::query_as::<_, PullRequestDisapprovalRow>(
            r#"
                SELECT *
                FROM pull_request_disapproval
                ORDER BY repository_id, pull_request_id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(Self::wrap_error)?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    #[tracing::instrument(skip(self))]
    async fn pull_request_disapprovals_compare_and_set(
        &self,
        expected: &DisapprovalState,
        instance: PullRequestDisapproval,
    ) -> Result<PullRequestDisapproval> {
        let handle = instance.handle();
        let row = sqlx::query_as::<_, PullRequestDisapprovalRow>(
            r#"
            UPDATE pull_request_disapproval
            SET disapproved = $3,
                disapproved_by = $4
            WHERE repository_id = $1
            AND pull_request_id = $2
            AND disapproved = $5
            AND disapproved_by = $6
            RETURNING *;
        "#,
        )
        .bind(id_to_db(instance.repository_id)?)
        .bind(id_to_db(instance.pull_request_id)?)
        .bind(instance.is_disapproved())
        .bind(instance.disapproved_by())
        .bind(expected.is_disapproved())
        .bind(expected.disapproved_by())
        .fetch_optional(&self.pool)
        .await
        .map_err(Self::wrap_error)?;

        match row {
            Some(row) => Ok(row.into()),
            None => {
                // Nothing matched: either missing, or changed since it was read.
                self.pull_request_disapprovals_get_expect(handle).await?;
                Err(DatabaseError::ConcurrentModification(handle))
            }
        }
    }

    #[tracing::instrument(skip(self))]
    async fn pull_request_disapprovals_get(
        &self,
        handle: PullRequestHandle,
    ) -> Result<Option<PullRequestDisapproval>> {
        let row = sqlx::query_as::<_, PullRequestDisapprovalRow>(
            r#"
                SELECT *
                FROM pull_request_disapproval
                WHERE repository_id = $1
                AND pull_request_id = $2
            "#,
        )
        .bind(id_to_db(handle.repository_id())?)
        .bind(id_to_db(handle.pull_request_id())?)
        .fetch_optional(&self.pool)
        .await
        .map_err(Self::wrap_error)?;

        Ok(row.map(Into::into))
    }

    #[tracing::instrument(skip(self))]
    async fn pull_request_disapprovals_get_or_create(
        &self,
        instance: PullRequestDisapproval,
    ) -> Result<PullRequestDisapproval> {
        sqlx::query(
            r#"
            INSERT INTO pull_request_disapproval
            (
                repository_id,
                pull_request_id,
                disapproved,
                disapproved_by
            )
            VALUES
            (
                $1,
                $2,
                $3,
                $4
            )
            ON CONFLICT (repository_id, pull_request_id) DO NOTHING;
        "#,
        )
        .bind(id_to_db(instance.repository_id)?)
        .bind(id_to_db(instance.pull_request_id)?)
        .bind(instance.is_disapproved())
        .bind(instance.disapproved_by())
        .execute(&self.pool)
        .await
        .map_err(Self::wrap_error)?;

        self.pull_request_disapprovals_get_expect(instance.handle())
            .await
    }

    #[tracing::instrument(skip(self))]
    async fn pull_request_disapprovals_list(
        &self,
        repository_id: u64,
    ) -> Result<Vec<PullRequestDisapproval>> {
        let rows = sqlx::query_as::<_, PullRequestDisapprovalRow>(
            r#"
                SELECT *
                FROM pull_request_disapproval
                WHERE repository_id = $1
                ORDER BY pull_request_id
            "#,
        )
        .bind(id_to_db(repository_id)?)
        .fetch_all(&self.pool)
        .await
        .map_err(Self::wrap_error)?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    #[tracing::instrument(skip(self))]
    async fn repository_configurations_all(&self) -> Result<Vec<RepositoryConfiguration>> {
        let rows = sqlx::query_as::<_, RepositoryConfigurationRow>(
            r#"
                SELECT *
                FROM repository_configuration
                ORDER BY repository_id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(Self::wrap_error)?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    #[tracing::instrument(skip(self))]
    async fn repository_configurations_get(
        &self,
        repository_id: u64,
    ) -> Result<Option<RepositoryConfiguration>> {
        let row = sqlx::query_as::<_, RepositoryConfigurationRow>(
            r#"
                SELECT *
                FROM repository_configuration
                WHERE repository_id = $1
            "#,
        )
        .bind(id_to_db(repository_id)?)
        .fetch_optional(&self.pool)
        .await
        .map_err(Self::wrap_error)?;

        Ok(row.map(Into::into))
    }

    #[tracing::instrument(skip(self))]
    async fn repository_configurations_get_or_create(
        &self,
        instance: RepositoryConfiguration,
    ) -> Result<RepositoryConfiguration> {
        sqlx::query(
            r#"
            INSERT INTO repository_configuration
            (
                repository_id,
                enabled,
                mode
            )
            VALUES
            (
                $1,
                $2,
                $3
            )
            ON CONFLICT (repository_id) DO NOTHING;
        "#,
        )
        .bind(id_to_db(instance.repository_id)?)
        .bind(instance.enabled)
        .bind(instance.mode.to_str())
        .execute(&self.pool)
        .await
        .map_err(Self::wrap_error)?;

        self.repository_configurations_get_expect(instance.repository_id)
            .await
    }

    #[tracing::instrument(skip(self))]
    async fn repository_configurations_update(
        &self,
        instance: RepositoryConfiguration,
    ) -> Result<RepositoryConfiguration> {
        let row = sqlx::query_as::<_, RepositoryConfigurationRow>(
            r#"
            UPDATE repository_configuration
            SET enabled = $2,
                mode = $3
            WHERE repository_id = $1
            RETURNING *;
        "#,
        )
        .bind(id_to_db(instance.repository_id)?)
        .bind(instance.enabled)
        .bind(instance.mode.to_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(Self::wrap_error)?;

        row.map(Into::into)
            .ok_or(DatabaseError::UnknownRepositoryConfiguration(
                instance.repository_id,
            ))
    }
}
