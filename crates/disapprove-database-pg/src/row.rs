use disapprove_models::{PullRequestDisapproval, RepositoryConfiguration};
use sqlx::{postgres::PgRow, FromRow, Row};

use crate::fields::{id_from_db, DisapprovalModeDecode};

pub(crate) struct RepositoryConfigurationRow(RepositoryConfiguration);
pub(crate) struct PullRequestDisapprovalRow(PullRequestDisapproval);

impl From<RepositoryConfigurationRow> for RepositoryConfiguration {
    fn from(r: RepositoryConfigurationRow) -> Self {
        r.0
    }
}

impl From<PullRequestDisapprovalRow> for PullRequestDisapproval {
    fn from(r: PullRequestDisapprovalRow) -> Self {
        r.0
    }
}

impl<'r> FromRow<'r, PgRow> for RepositoryConfigurationRow {
    fn from_row(row: &'r PgRow) -> core::result::Result<Self, sqlx::Error> {
        Ok(Self(RepositoryConfiguration {
            repository_id: id_from_db(row.try_get("repository_id")?)?,
            enabled: row.try_get("enabled")?,
            mode: *row.try_get::<DisapprovalModeDecode, _>("mode")?,
        }))
    }
}

impl<'r> FromRow<'r, PgRow> for PullRequestDisapprovalRow {
    fn from_row(row: &'r PgRow) -> core::result::Result<Self, sqlx::Error> {
        let disapproved_by: String = row.try_get("disapproved_by")?;

        PullRequestDisapproval::from_fields(
            id_from_db(row.try_get("repository_id")?)?,
            id_from_db(row.try_get("pull_request_id")?)?,
            row.try_get("disapproved")?,
            &disapproved_by,
        )
        .map(Self)
        .map_err(|e| sqlx::Error::Decode(e.into()))
    }
}
