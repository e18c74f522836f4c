use actor_store::{
    ActorEntity, Conflict, FrameworkError, KeyValueStore, MemoryStore, ResourceActor,
    SqliteStore, Stamp, StorageError,
};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

// --- Test Entity ---

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
struct Counter {
    name: String,
    stamp_id: u64,
    hits: u32,
    locked: bool,
    #[serde(default)]
    pinned: bool,
}

#[derive(Debug)]
struct Rename(String);

#[derive(Debug)]
enum CounterAction {
    Hit,
    Lock,
    Pin,
}

#[derive(Debug, thiserror::Error, PartialEq)]
enum CounterError {
    #[error("name is required")]
    EmptyName,
    #[error("counter is locked")]
    Locked,
}

#[async_trait]
impl ActorEntity for Counter {
    type Id = String;
    type Create = String;
    type Update = Rename;
    type Action = CounterAction;
    type ActionResult = u32;
    type Context = ();
    type Error = CounterError;
    const COLLECTION: &'static str = "counters";

    fn id(&self) -> String {
        self.name.clone()
    }

    fn max_stamp_id(&self) -> Option<u64> {
        Some(self.stamp_id)
    }

    fn from_create_params(stamp: Stamp, name: String) -> Result<Self, CounterError> {
        if name.trim().is_empty() {
            return Err(CounterError::EmptyName);
        }
        Ok(Self {
            name,
            stamp_id: stamp.id,
            hits: 1,
            locked: false,
            pinned: false,
        })
    }

    fn on_conflict(&mut self, _incoming: Self) -> Conflict {
        if self.locked {
            Conflict::Reject
        } else if self.pinned {
            Conflict::Keep
        } else {
            self.hits += 1;
            Conflict::Merged
        }
    }

    async fn on_update(&mut self, update: Rename, _ctx: &()) -> Result<(), CounterError> {
        self.name = update.0;
        Ok(())
    }

    async fn handle_action(&mut self, action: CounterAction, _ctx: &()) -> Result<u32, CounterError> {
        match action {
            CounterAction::Hit => {
                // mutate before failing so a rollback is observable
                self.hits += 1;
                if self.locked {
                    return Err(CounterError::Locked);
                }
                Ok(self.hits)
            }
            CounterAction::Lock => {
                self.locked = true;
                Ok(self.hits)
            }
            CounterAction::Pin => {
                self.pinned = true;
                Ok(self.hits)
            }
        }
    }
}

/// Wraps a store and starts refusing writes once `fail` is set.
struct FlakyStore {
    inner: MemoryStore,
    fail: AtomicBool,
}

impl KeyValueStore for FlakyStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.inner.get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        if self.fail.load(Ordering::SeqCst) {
            return Err(StorageError::Poisoned);
        }
        self.inner.set(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.inner.remove(key)
    }
}

fn spawn(store: Arc<dyn KeyValueStore>) -> actor_store::ResourceClient<Counter> {
    let (actor, client) = ResourceActor::<Counter>::new(10, store);
    tokio::spawn(actor.run(()));
    client
}

// --- Tests ---

#[tokio::test]
async fn test_create_merge_and_reject() {
    let client = spawn(Arc::new(MemoryStore::new()));

    let first = client.create("door".into()).await.unwrap();
    assert_eq!(first.hits, 1);

    let merged = client.create("door".into()).await.unwrap();
    assert_eq!(merged.hits, 2);
    assert_eq!(merged.stamp_id, first.stamp_id);

    client.perform_action("door".into(), CounterAction::Lock).await.unwrap();
    let rejected = client.create("door".into()).await;
    assert!(matches!(rejected, Err(FrameworkError::AlreadyExists(id)) if id == "door"));

    assert_eq!(client.list().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_kept_conflict_writes_nothing() {
    let store = Arc::new(FlakyStore {
        inner: MemoryStore::new(),
        fail: AtomicBool::new(false),
    });
    let client = spawn(store.clone());
    let first = client.create("shelf".into()).await.unwrap();
    client.perform_action("shelf".into(), CounterAction::Pin).await.unwrap();

    // a write would fail now
    store.fail.store(true, Ordering::SeqCst);

    let again = client.create("shelf".into()).await.unwrap();
    assert_eq!(again.hits, first.hits);
    assert!(again.pinned);
    assert_eq!(client.list().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_entity_errors_downcast() {
    let client = spawn(Arc::new(MemoryStore::new()));

    let err = client.create("  ".into()).await.unwrap_err();
    assert_eq!(err.downcast::<CounterError>().unwrap(), CounterError::EmptyName);

    let missing = client.perform_action("nope".into(), CounterAction::Hit).await;
    assert!(matches!(missing, Err(FrameworkError::NotFound(id)) if id == "nope"));
}

#[tokio::test]
async fn test_failed_action_leaves_record_untouched() {
    let client = spawn(Arc::new(MemoryStore::new()));
    client.create("gate".into()).await.unwrap();
    client.perform_action("gate".into(), CounterAction::Lock).await.unwrap();

    let err = client
        .perform_action("gate".into(), CounterAction::Hit)
        .await
        .unwrap_err();
    assert_eq!(err.downcast::<CounterError>().unwrap(), CounterError::Locked);

    let gate = client.get("gate".into()).await.unwrap().unwrap();
    assert_eq!(gate.hits, 1);
}

#[tokio::test]
async fn test_collection_survives_restart_in_order() {
    let store: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::new());

    let client = spawn(store.clone());
    for name in ["b", "a", "c"] {
        client.create(name.into()).await.unwrap();
    }
    client.update("a".into(), Rename("z".into())).await.unwrap();
    drop(client);

    let client = spawn(store);
    let names: Vec<String> = client
        .list()
        .await
        .unwrap()
        .into_iter()
        .map(|c| c.name)
        .collect();
    assert_eq!(names, vec!["b", "z", "c"]);
}

#[tokio::test]
async fn test_reload_moves_stamp_floor() {
    let store = MemoryStore::new();
    let far = Stamp::next().id + 5_000_000;
    store
        .set(
            "counters",
            &format!(r#"[{{"name":"old","stamp_id":{far},"hits":3,"locked":false}}]"#),
        )
        .unwrap();

    let client = spawn(Arc::new(store));
    let fresh = client.create("new".into()).await.unwrap();
    assert!(fresh.stamp_id > far);
}

#[tokio::test]
async fn test_corrupted_collection_starts_empty() {
    let store = MemoryStore::new();
    store.set("counters", "[{\"name\": ").unwrap();

    let client = spawn(Arc::new(store));
    assert!(client.list().await.unwrap().is_empty());
    client.create("fresh".into()).await.unwrap();
    assert_eq!(client.list().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_failed_write_rolls_back() {
    let store = Arc::new(FlakyStore {
        inner: MemoryStore::new(),
        fail: AtomicBool::new(false),
    });
    let client = spawn(store.clone());
    client.create("kept".into()).await.unwrap();

    store.fail.store(true, Ordering::SeqCst);

    assert!(matches!(
        client.create("lost".into()).await,
        Err(FrameworkError::Storage(_))
    ));
    assert!(matches!(
        client.create("kept".into()).await,
        Err(FrameworkError::Storage(_))
    ));
    assert!(matches!(
        client.update("kept".into(), Rename("renamed".into())).await,
        Err(FrameworkError::Storage(_))
    ));
    assert!(matches!(client.clear().await, Err(FrameworkError::Storage(_))));

    let all = client.list().await.unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].name, "kept");
    assert_eq!(all[0].hits, 1);
}

#[tokio::test]
async fn test_clear_empties_storage() {
    let store: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::new());
    let client = spawn(store.clone());
    client.create("x".into()).await.unwrap();
    client.clear().await.unwrap();
    drop(client);

    let client = spawn(store);
    assert!(client.list().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_sqlite_backed_actor() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("counters.db");

    let client = spawn(Arc::new(SqliteStore::open(&path).unwrap()));
    client.create("one".into()).await.unwrap();
    client.create("one".into()).await.unwrap();
    drop(client);

    let client = spawn(Arc::new(SqliteStore::open(&path).unwrap()));
    let one = client.get("one".into()).await.unwrap().unwrap();
    assert_eq!(one.hits, 2);
}
