use disapprove_database_interface::{DbService, Exchanger};
use disapprove_database_memory::MemoryDb;
use disapprove_models::{
    DisapprovalMode, DisapprovalState, PullRequestDisapproval, RepositoryConfiguration, Username,
};
use pretty_assertions::assert_eq;

use crate::testcase::db_test_case;

#[tokio::test]
async fn export_then_import() {
    db_test_case("exchange_export_then_import", |db| async move {
        db.repository_configurations_get_or_create(RepositoryConfiguration {
            repository_id: 1,
            enabled: true,
            mode: DisapprovalMode::Strict,
        })
        .await?;
        db.pull_request_disapprovals_get_or_create(
            PullRequestDisapproval::new_default((1, 1).into()).with_state(
                DisapprovalState::Disapproved {
                    by: Username::new("alice")?,
                },
            ),
        )
        .await?;
        db.pull_request_disapprovals_get_or_create(PullRequestDisapproval::new_default(
            (1, 2).into(),
        ))
        .await?;

        let mut buffer = Vec::new();
        Exchanger::export_to_json(db.as_ref(), &mut buffer).await?;

        let target = MemoryDb::new();
        // Pre-existing record gets overwritten.
        target
            .repository_configurations_get_or_create(RepositoryConfiguration {
                repository_id: 1,
                ..Default::default()
            })
            .await?;
        Exchanger::import_from_json(&target, &buffer[..]).await?;

        assert_eq!(
            target.repository_configurations_all().await?,
            db.repository_configurations_all().await?
        );
        assert_eq!(
            target.pull_request_disapprovals_all().await?,
            db.pull_request_disapprovals_all().await?
        );

        Ok(())
    })
    .await;
}

#[tokio::test]
async fn import_rejects_inconsistent_records() {
    let target = MemoryDb::new();
    let data = r#"{
        "repository_configurations": [],
        "pull_request_disapprovals": [
            {"repository_id": 1, "pull_request_id": 1, "disapproved": true, "disapproved_by": "none"}
        ]
    }"#;

    assert!(Exchanger::import_from_json(&target, data.as_bytes())
        .await
        .is_err());
    assert!(target.pull_request_disapprovals_all().await.unwrap().is_empty());
}
