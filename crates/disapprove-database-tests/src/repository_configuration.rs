use disapprove_database_interface::DatabaseError;
use disapprove_models::{DisapprovalMode, RepositoryConfiguration};
use futures::future::join_all;
use pretty_assertions::assert_eq;

use crate::testcase::db_test_case;

#[tokio::test]
async fn get_or_create() {
    db_test_case("repository_configuration_get_or_create", |db| async move {
        assert_eq!(db.repository_configurations_get(1).await?, None);

        let created = db
            .repository_configurations_get_or_create(RepositoryConfiguration {
                repository_id: 1,
                enabled: true,
                mode: DisapprovalMode::Strict,
            })
            .await?;
        assert_eq!(
            created,
            RepositoryConfiguration {
                repository_id: 1,
                enabled: true,
                mode: DisapprovalMode::Strict,
            }
        );

        // Existing record is kept as is.
        let existing = db
            .repository_configurations_get_or_create(RepositoryConfiguration {
                repository_id: 1,
                ..Default::default()
            })
            .await?;
        assert_eq!(existing, created);
        assert_eq!(db.repository_configurations_get(1).await?, Some(created));

        Ok(())
    })
    .await;
}

#[tokio::test]
async fn get_or_create_concurrently() {
    db_test_case(
        "repository_configuration_get_or_create_concurrently",
        |db| async move {
            let results = join_all((0..16).map(|i| {
                db.repository_configurations_get_or_create(RepositoryConfiguration {
                    repository_id: 42,
                    enabled: i % 2 == 0,
                    mode: DisapprovalMode::Standard,
                })
            }))
            .await;

            let results: Vec<_> = results.into_iter().collect::<Result<_, _>>()?;
            assert!(results.iter().all(|r| r == &results[0]));
            assert_eq!(db.repository_configurations_all().await?.len(), 1);

            Ok(())
        },
    )
    .await;
}

#[tokio::test]
async fn update() {
    db_test_case("repository_configuration_update", |db| async move {
        assert!(matches!(
            db.repository_configurations_update(RepositoryConfiguration {
                repository_id: 1,
                enabled: true,
                ..Default::default()
            })
            .await,
            Err(DatabaseError::UnknownRepositoryConfiguration(1))
        ));
        assert_eq!(db.repository_configurations_get(1).await?, None);

        db.repository_configurations_get_or_create(RepositoryConfiguration {
            repository_id: 1,
            ..Default::default()
        })
        .await?;

        let updated = db
            .repository_configurations_update(RepositoryConfiguration {
                repository_id: 1,
                enabled: true,
                mode: DisapprovalMode::Strict,
            })
            .await?;
        assert_eq!(db.repository_configurations_get_expect(1).await?, updated);

        // Provisioning again does not revert the administrator's choice.
        db.repository_configurations_get_or_create(RepositoryConfiguration {
            repository_id: 1,
            ..Default::default()
        })
        .await?;
        assert_eq!(db.repository_configurations_get_expect(1).await?, updated);

        Ok(())
    })
    .await;
}

#[tokio::test]
async fn all() {
    db_test_case("repository_configuration_all", |db| async move {
        for id in [3, 1, 2] {
            db.repository_configurations_get_or_create(RepositoryConfiguration {
                repository_id: id,
                ..Default::default()
            })
            .await?;
        }

        let ids: Vec<_> = db
            .repository_configurations_all()
            .await?
            .into_iter()
            .map(|c| c.repository_id)
            .collect();
        assert_eq!(ids, vec![1, 2, 3]);

        Ok(())
    })
    .await;
}
