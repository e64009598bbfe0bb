use disapprove_database_interface::DatabaseError;
use disapprove_models::{
    DisapprovalState, PullRequestDisapproval, PullRequestHandle, Username, NO_DISAPPROVER,
};
use futures::future::join_all;
use pretty_assertions::assert_eq;

use crate::testcase::db_test_case;

fn disapproved_by(handle: PullRequestHandle, username: &str) -> PullRequestDisapproval {
    PullRequestDisapproval::new_default(handle).with_state(DisapprovalState::Disapproved {
        by: Username::new(username).unwrap(),
    })
}

#[tokio::test]
async fn get_or_create_concurrently() {
    db_test_case(
        "pull_request_disapproval_get_or_create_concurrently",
        |db| async move {
            let handle = PullRequestHandle::new(42, 7);
            assert_eq!(db.pull_request_disapprovals_get(handle).await?, None);

            let results = join_all(
                (0..16).map(|_| {
                    db.pull_request_disapprovals_get_or_create(
                        PullRequestDisapproval::new_default(handle),
                    )
                }),
            )
            .await;
            for result in results {
                assert_eq!(result?, PullRequestDisapproval::new_default(handle));
            }

            let all = db.pull_request_disapprovals_all().await?;
            assert_eq!(all.len(), 1);
            assert!(!all[0].is_disapproved());
            assert_eq!(all[0].disapproved_by(), NO_DISAPPROVER);

            Ok(())
        },
    )
    .await;
}

#[tokio::test]
async fn get_or_create_keeps_existing_state() {
    db_test_case(
        "pull_request_disapproval_get_or_create_keeps_existing_state",
        |db| async move {
            let handle = PullRequestHandle::new(1, 1);
            db.pull_request_disapprovals_get_or_create(PullRequestDisapproval::new_default(
                handle,
            ))
            .await?;
            db.pull_request_disapprovals_compare_and_set(
                &DisapprovalState::NotDisapproved,
                disapproved_by(handle, "alice"),
            )
            .await?;

            let record = db
                .pull_request_disapprovals_get_or_create(PullRequestDisapproval::new_default(
                    handle,
                ))
                .await?;
            assert_eq!(record, disapproved_by(handle, "alice"));

            Ok(())
        },
    )
    .await;
}

#[tokio::test]
async fn compare_and_set() {
    db_test_case("pull_request_disapproval_compare_and_set", |db| async move {
        let handle = PullRequestHandle::new(1, 2);

        assert!(matches!(
            db.pull_request_disapprovals_compare_and_set(
                &DisapprovalState::NotDisapproved,
                disapproved_by(handle, "alice"),
            )
            .await,
            Err(DatabaseError::UnknownPullRequestDisapproval(h)) if h == handle
        ));

        db.pull_request_disapprovals_get_or_create(PullRequestDisapproval::new_default(handle))
            .await?;

        let updated = db
            .pull_request_disapprovals_compare_and_set(
                &DisapprovalState::NotDisapproved,
                disapproved_by(handle, "alice"),
            )
            .await?;
        assert_eq!(updated, disapproved_by(handle, "alice"));

        // Stale expectation
        assert!(matches!(
            db.pull_request_disapprovals_compare_and_set(
                &DisapprovalState::NotDisapproved,
                disapproved_by(handle, "bob"),
            )
            .await,
            Err(DatabaseError::ConcurrentModification(h)) if h == handle
        ));
        assert_eq!(
            db.pull_request_disapprovals_get_expect(handle).await?,
            disapproved_by(handle, "alice")
        );

        let cleared = db
            .pull_request_disapprovals_compare_and_set(
                &updated.state,
                PullRequestDisapproval::new_default(handle),
            )
            .await?;
        assert!(!cleared.is_disapproved());
        assert_eq!(cleared.disapproved_by(), NO_DISAPPROVER);

        Ok(())
    })
    .await;
}

#[tokio::test]
async fn compare_and_set_concurrently() {
    db_test_case(
        "pull_request_disapproval_compare_and_set_concurrently",
        |db| async move {
            let handle = PullRequestHandle::new(5, 5);
            db.pull_request_disapprovals_get_or_create(PullRequestDisapproval::new_default(
                handle,
            ))
            .await?;

            let users: Vec<_> = (0..8).map(|i| format!("user{i}")).collect();
            let results = join_all(users.iter().map(|u| {
                db.pull_request_disapprovals_compare_and_set(
                    &DisapprovalState::NotDisapproved,
                    disapproved_by(handle, u),
                )
            }))
            .await;

            let successes = results.iter().filter(|r| r.is_ok()).count();
            assert_eq!(successes, 1);
            assert!(results.iter().all(|r| matches!(
                r,
                Ok(_) | Err(DatabaseError::ConcurrentModification(_))
            )));

            Ok(())
        },
    )
    .await;
}

#[tokio::test]
async fn list() {
    db_test_case("pull_request_disapproval_list", |db| async move {
        for (repository_id, pull_request_id) in [(1, 3), (2, 1), (1, 1)] {
            db.pull_request_disapprovals_get_or_create(PullRequestDisapproval::new_default(
                (repository_id, pull_request_id).into(),
            ))
            .await?;
        }

        let handles: Vec<_> = db
            .pull_request_disapprovals_list(1)
            .await?
            .into_iter()
            .map(|d| d.handle())
            .collect();
        assert_eq!(handles, vec![(1, 1).into(), (1, 3).into()]);

        let handles: Vec<_> = db
            .pull_request_disapprovals_all()
            .await?
            .into_iter()
            .map(|d| d.handle())
            .collect();
        assert_eq!(handles, vec![(1, 1).into(), (1, 3).into(), (2, 1).into()]);

        Ok(())
    })
    .await;
}
