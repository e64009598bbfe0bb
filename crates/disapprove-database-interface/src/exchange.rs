use std::io::{Read, Write};

use disapprove_models::{PullRequestDisapproval, RepositoryConfiguration};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::{DatabaseError, DbService, Result};

#[derive(Debug, Serialize, Deserialize)]
struct ExchangeData {
    repository_configurations: Vec<RepositoryConfiguration>,
    pull_request_disapprovals: Vec<PullRequestDisapproval>,
}

pub struct Exchanger;

impl Exchanger {
    pub async fn export_to_json<W: Write>(db_service: &dyn DbService, writer: &mut W) -> Result<()> {
        let data = ExchangeData {
            repository_configurations: db_service.repository_configurations_all().await?,
            pull_request_disapprovals: db_service.pull_request_disapprovals_all().await?,
        };

        serde_json::to_writer_pretty(writer, &data)
            .map_err(|e| DatabaseError::ExchangeJsonError { source: e })?;

        Ok(())
    }

    /// Import records, overwriting existing ones with the same keys.
    pub async fn import_from_json<R: Read>(db_service: &dyn DbService, reader: R) -> Result<()> {
        let data: ExchangeData = serde_json::from_reader(reader)
            .map_err(|e| DatabaseError::ExchangeJsonError { source: e })?;

        for configuration in data.repository_configurations {
            db_service
                .repository_configurations_get_or_create(configuration.clone())
                .await?;
            db_service
                .repository_configurations_update(configuration)
                .await?;
        }

        for disapproval in data.pull_request_disapprovals {
            let existing = db_service
                .pull_request_disapprovals_get_or_create(PullRequestDisapproval::new_default(
                    disapproval.handle(),
                ))
                .await?;

            if existing.state != disapproval.state {
                warn!(
                    handle = %disapproval.handle(),
                    message = "Overwriting pull request disapproval from import"
                );

                db_service
                    .pull_request_disapprovals_compare_and_set(&existing.state, disapproval)
                    .await?;
            }
        }

        Ok(())
    }
}
