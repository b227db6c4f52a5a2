//! Tests for the user directory service.

use std::collections::BTreeSet;

use super::*;
use crate::domain::ErrorCode;
use crate::domain::ports::{InMemoryUserStore, MockUserStore};
use rstest::{fixture, rstest};

fn seeded(names: &[(u64, &str)]) -> Vec<User> {
    names
        .iter()
        .map(|(id, name)| User::from_draft(UserId::new(*id), UserDraft::named(*name)))
        .collect()
}

#[fixture]
fn store() -> Arc<InMemoryUserStore> {
    Arc::new(InMemoryUserStore::with_users(seeded(&[
        (1, "Devweekerson"),
        (4, "Carlos Mendes"),
    ])))
}

fn service(store: Arc<InMemoryUserStore>) -> UserDirectoryService {
    UserDirectoryService::new(store)
}

#[rstest]
#[tokio::test]
async fn create_assigns_next_id_and_persists(store: Arc<InMemoryUserStore>) {
    let directory = service(store.clone());

    let created = directory
        .create_user(UserDraft::named("Ana"))
        .await
        .expect("create succeeds");

    assert_eq!(created.id(), UserId::new(5));
    let persisted = store.load().await.expect("load");
    assert_eq!(persisted.last(), Some(&created));
}

#[rstest]
#[tokio::test]
async fn find_returns_the_stored_body(store: Arc<InMemoryUserStore>) {
    let directory = service(store);
    let created = directory
        .create_user(UserDraft::named("Ana"))
        .await
        .expect("create succeeds");

    let found = directory.find_user(created.id()).await.expect("found");

    assert_eq!(found, created);
}

#[rstest]
#[tokio::test]
async fn find_unknown_id_is_not_found(store: Arc<InMemoryUserStore>) {
    let err = service(store)
        .find_user(UserId::new(2))
        .await
        .expect_err("missing user");

    assert_eq!(err.code(), ErrorCode::NotFound);
    assert_eq!(err.message(), USER_NOT_FOUND);
}

#[rstest]
#[tokio::test]
async fn replace_keeps_the_identifier(store: Arc<InMemoryUserStore>) {
    let directory = service(store);

    let replaced = directory
        .replace_user(UserId::new(4), UserDraft::named("Carlos M. Mendes"))
        .await
        .expect("replace succeeds");

    assert_eq!(replaced.id(), UserId::new(4));
    assert_eq!(replaced.name(), "Carlos M. Mendes");
    let listed = directory.list_users().await.expect("list");
    let names: Vec<&str> = listed.iter().map(User::name).collect();
    assert_eq!(names, vec!["Devweekerson", "Carlos M. Mendes"]);
}

#[rstest]
#[tokio::test]
async fn replace_unknown_id_is_not_found(store: Arc<InMemoryUserStore>) {
    let err = service(store)
        .replace_user(UserId::new(9), UserDraft::named("Nobody"))
        .await
        .expect_err("missing user");

    assert_eq!(err.code(), ErrorCode::NotFound);
}

#[rstest]
#[tokio::test]
async fn delete_removes_exactly_one_record(store: Arc<InMemoryUserStore>) {
    let directory = service(store);

    directory
        .delete_user(UserId::new(1))
        .await
        .expect("delete succeeds");
    let err = directory
        .delete_user(UserId::new(1))
        .await
        .expect_err("second delete misses");

    assert_eq!(err.code(), ErrorCode::NotFound);
    let remaining = directory.list_users().await.expect("list");
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].id(), UserId::new(4));
}

#[rstest]
#[tokio::test]
async fn missing_records_do_not_trigger_a_save() {
    let mut store = MockUserStore::new();
    store
        .expect_load()
        .times(1)
        .returning(|| Ok(seeded(&[(1, "Ana")])));
    store.expect_save().times(0);

    let err = UserDirectoryService::new(Arc::new(store))
        .delete_user(UserId::new(2))
        .await
        .expect_err("missing user");

    assert_eq!(err.code(), ErrorCode::NotFound);
}

#[rstest]
#[tokio::test]
async fn store_failures_surface_as_internal_errors() {
    let mut store = MockUserStore::new();
    store.expect_load().returning(|| Ok(Vec::new()));
    store
        .expect_save()
        .returning(|_| Err(UserStoreError::write("disk full")));

    let err = UserDirectoryService::new(Arc::new(store))
        .create_user(UserDraft::named("Ana"))
        .await
        .expect_err("save fails");

    assert_eq!(err.code(), ErrorCode::InternalError);
    assert!(err.message().contains("disk full"));
}

#[rstest]
#[tokio::test]
async fn malformed_documents_fail_reads() {
    let mut store = MockUserStore::new();
    store
        .expect_load()
        .returning(|| Err(UserStoreError::malformed("expected an object")));

    let err = UserDirectoryService::new(Arc::new(store))
        .list_users()
        .await
        .expect_err("load fails");

    assert_eq!(err.code(), ErrorCode::InternalError);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_creates_never_share_an_identifier() {
    let directory = Arc::new(UserDirectoryService::new(Arc::new(
        InMemoryUserStore::default(),
    )));

    let handles: Vec<_> = (0..32)
        .map(|n| {
            let directory = Arc::clone(&directory);
            tokio::spawn(async move {
                directory
                    .create_user(UserDraft::named(format!("user-{n}")))
                    .await
                    .map(|user| user.id().get())
            })
        })
        .collect();

    let mut ids = BTreeSet::new();
    for handle in handles {
        let id = handle.await.expect("task joins").expect("create succeeds");
        assert!(ids.insert(id), "identifier {id} issued twice");
    }

    assert_eq!(ids, (1..=32).collect());
    assert_eq!(directory.list_users().await.expect("list").len(), 32);
}
