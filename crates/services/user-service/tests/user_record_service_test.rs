//! User record service tests against an in-memory store.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use common::{AppError, AppResult, ErrorKind};
use domain::{CreateUserInput, UpdateUserInput, UserId, UserRecord};
use user_record_service::repository::UserStore;
use user_record_service::service::{UserRecordManager, UserRecordService};
use user_record_service::{execute_user_action, UserAction};

/// Store double with auto-increment ids and a unique email column.
#[derive(Default)]
struct InMemoryUserStore {
    state: Mutex<StoreState>,
}

#[derive(Default)]
struct StoreState {
    last_id: UserId,
    rows: BTreeMap<UserId, UserRecord>,
    calls: usize,
}

impl InMemoryUserStore {
    async fn calls(&self) -> usize {
        self.state.lock().await.calls
    }

    async fn get(&self, id: UserId) -> Option<UserRecord> {
        self.state.lock().await.rows.get(&id).cloned()
    }
}

fn email_taken(state: &StoreState, email: &str, except: Option<UserId>) -> bool {
    state
        .rows
        .values()
        .any(|row| row.email == email && Some(row.id) != except)
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn insert(&self, fields: CreateUserInput) -> AppResult<UserRecord> {
        let mut state = self.state.lock().await;
        state.calls += 1;

        if email_taken(&state, &fields.email, None) {
            return Err(AppError::store("duplicate key value violates unique constraint"));
        }

        state.last_id += 1;
        let record = UserRecord {
            id: state.last_id,
            email: fields.email,
            name: fields.name,
        };
        state.rows.insert(record.id, record.clone());
        Ok(record)
    }

    async fn update_by_id(&self, id: UserId, patch: UpdateUserInput) -> AppResult<UserRecord> {
        let mut state = self.state.lock().await;
        state.calls += 1;

        if let Some(email) = &patch.email {
            if email_taken(&state, email, Some(id)) {
                return Err(AppError::store("duplicate key value violates unique constraint"));
            }
        }

        let row = state.rows.get_mut(&id).ok_or(AppError::NotFound)?;
        if let Some(email) = patch.email {
            row.email = email;
        }
        if let Some(name) = patch.name {
            row.name = name;
        }
        Ok(row.clone())
    }

    async fn delete_by_id(&self, id: UserId) -> AppResult<UserRecord> {
        let mut state = self.state.lock().await;
        state.calls += 1;

        state.rows.remove(&id).ok_or(AppError::NotFound)
    }
}

fn setup() -> (Arc<InMemoryUserStore>, UserRecordManager) {
    let store = Arc::new(InMemoryUserStore::default());
    let service = UserRecordManager::new(store.clone());
    (store, service)
}

fn record(id: UserId, email: &str, name: &str) -> UserRecord {
    UserRecord {
        id,
        email: email.to_string(),
        name: name.to_string(),
    }
}

#[tokio::test]
async fn test_create_assigns_id_and_keeps_fields() {
    let (_, service) = setup();

    let first = service
        .create(CreateUserInput::new("a@x.com", "A"))
        .await
        .unwrap();
    let second = service
        .create(CreateUserInput::new("b@x.com", "B"))
        .await
        .unwrap();

    assert_eq!(first, record(1, "a@x.com", "A"));
    assert_eq!(second, record(2, "b@x.com", "B"));
}

#[tokio::test]
async fn test_create_duplicate_email_is_store_failure() {
    let (_, service) = setup();
    service
        .create(CreateUserInput::new("a@x.com", "A"))
        .await
        .unwrap();

    let err = service
        .create(CreateUserInput::new("a@x.com", "Other"))
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::StoreFailure);
}

#[tokio::test]
async fn test_update_changes_only_present_fields() {
    let (store, service) = setup();
    service
        .create(CreateUserInput::new("a@x.com", "A"))
        .await
        .unwrap();

    let renamed = service
        .update("1", UpdateUserInput::default().with_name("B"))
        .await
        .unwrap();
    assert_eq!(renamed, record(1, "a@x.com", "B"));

    let moved = service
        .update("1", UpdateUserInput::default().with_email("b@x.com"))
        .await
        .unwrap();
    assert_eq!(moved, record(1, "b@x.com", "B"));

    let untouched = service
        .update("1", UpdateUserInput::default())
        .await
        .unwrap();
    assert_eq!(untouched, record(1, "b@x.com", "B"));
    assert_eq!(store.get(1).await, Some(record(1, "b@x.com", "B")));
}

#[tokio::test]
async fn test_identifier_parsing_rules() {
    let (store, service) = setup();
    for i in 0..42 {
        service
            .create(CreateUserInput::new(format!("u{}@x.com", i), "U"))
            .await
            .unwrap();
    }

    let exact = service
        .update("42", UpdateUserInput::default().with_name("A"))
        .await
        .unwrap();
    assert_eq!(exact.id, 42);

    let prefixed = service
        .update("42abc", UpdateUserInput::default().with_name("A"))
        .await
        .unwrap();
    assert_eq!(prefixed.id, 42);

    let calls_before = store.calls().await;
    let err = service
        .update("abc", UpdateUserInput::default().with_name("A"))
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidIdentifier);
    assert_eq!(store.calls().await, calls_before);
}

#[tokio::test]
async fn test_remove_then_any_operation_is_not_found() {
    let (_, service) = setup();
    service
        .create(CreateUserInput::new("a@x.com", "A"))
        .await
        .unwrap();

    service.remove("1").await.unwrap();

    let err = service
        .update("1", UpdateUserInput::default().with_name("B"))
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);

    let err = service.remove("1").await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
}

#[tokio::test]
async fn test_unknown_numeric_id_is_not_found() {
    let (_, service) = setup();

    let err = service.remove("-1").await.unwrap_err();
    assert!(matches!(err, AppError::NotFound));

    let err = service
        .update("0", UpdateUserInput::default().with_name("B"))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::NotFound));
}

#[tokio::test]
async fn test_full_lifecycle_scenario() {
    let (_, service) = setup();

    let created = service
        .create(CreateUserInput::new("a@x.com", "A"))
        .await
        .unwrap();
    assert_eq!(created, record(1, "a@x.com", "A"));

    let updated = service
        .update("1", UpdateUserInput::default().with_name("B"))
        .await
        .unwrap();
    assert_eq!(updated, record(1, "a@x.com", "B"));

    let removed = service.remove("1").await.unwrap();
    assert_eq!(removed, record(1, "a@x.com", "B"));

    let err = service.remove("1").await.unwrap_err();
    assert!(matches!(err, AppError::NotFound));
}

#[tokio::test]
async fn test_shared_service_handles_concurrent_creates() {
    let store = Arc::new(InMemoryUserStore::default());
    let service: Arc<dyn UserRecordService> = Arc::new(UserRecordManager::new(store.clone()));

    let handles: Vec<_> = (0..16)
        .map(|i| {
            let service = service.clone();
            tokio::spawn(async move {
                service
                    .create(CreateUserInput::new(format!("user{}@x.com", i), "U"))
                    .await
            })
        })
        .collect();

    let mut ids = Vec::new();
    for handle in handles {
        ids.push(handle.await.unwrap().unwrap().id);
    }
    ids.sort_unstable();

    assert_eq!(ids, (1..=16).collect::<Vec<_>>());
}

#[tokio::test]
async fn test_execute_user_action_dispatches() {
    let (_, service) = setup();

    let created = execute_user_action(
        &service,
        UserAction::Create(CreateUserInput::new("a@x.com", "A")),
    )
    .await
    .unwrap();
    assert_eq!(created.id, 1);

    let updated = execute_user_action(
        &service,
        UserAction::Update {
            id: "1".to_string(),
            patch: UpdateUserInput::default().with_name("B"),
        },
    )
    .await
    .unwrap();
    assert_eq!(updated.name, "B");

    let removed = execute_user_action(&service, UserAction::Remove { id: "1".to_string() })
        .await
        .unwrap();
    assert_eq!(removed, record(1, "a@x.com", "B"));
}

#[test]
fn test_user_action_validation() {
    assert!(UserAction::Create(CreateUserInput::new("a@x.com", "A"))
        .validate()
        .is_ok());
    assert!(UserAction::Remove { id: "abc".to_string() }.validate().is_ok());

    let err = UserAction::Create(CreateUserInput::new("nope", "A"))
        .validate()
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Validation);

    let err = UserAction::Update {
        id: "1".to_string(),
        patch: UpdateUserInput::default().with_name(""),
    }
    .validate()
    .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Validation);
}
