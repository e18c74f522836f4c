//! # Generic Actor Server
//!
//! The `ResourceActor` owns one persisted collection. It loads the collection when it starts,
//! processes requests one at a time, and writes the whole collection back after every
//! mutation.

use crate::client::ResourceClient;
use crate::entity::{ActorEntity, Conflict};
use crate::error::FrameworkError;
use crate::message::ResourceRequest;
use crate::stamp::Stamp;
use crate::storage::{load_collection, save_collection, KeyValueStore, StorageError};
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The actor that manages one collection of `T`.
///
/// Records are kept in a `Vec` so the persisted array and every `List` answer preserve
/// insertion order. Lookups are linear; collections here hold one user's worth of data.
///
/// # Usage Pattern
///
/// 1. **Create**: `ResourceActor::new(buffer, store)` returns the actor and its client.
/// 2. **Wire**: pass dependencies (other clients) into `actor.run(context)`.
/// 3. **Run**: spawn the run loop on a Tokio task.
///
/// ```rust
/// use actor_store::{ActorEntity, MemoryStore, ResourceActor, Stamp};
/// use async_trait::async_trait;
/// use serde::{Deserialize, Serialize};
/// use std::sync::Arc;
///
/// #[derive(Clone, Debug, Serialize, Deserialize)]
/// struct Note { id: u64, text: String }
/// #[derive(Debug)] enum NoteAction {}
/// #[derive(Debug, thiserror::Error)] #[error("note error")] struct NoteError;
///
/// #[async_trait]
/// impl ActorEntity for Note {
///     type Id = u64;
///     type Create = String;
///     type Update = ();
///     type Action = NoteAction;
///     type ActionResult = ();
///     type Context = ();
///     type Error = NoteError;
///     const COLLECTION: &'static str = "notes";
///
///     fn id(&self) -> u64 { self.id }
///     fn from_create_params(stamp: Stamp, text: String) -> Result<Self, NoteError> {
///         Ok(Self { id: stamp.id, text })
///     }
///     async fn handle_action(&mut self, action: NoteAction, _: &()) -> Result<(), NoteError> {
///         match action {}
///     }
/// }
///
/// #[tokio::main]
/// async fn main() {
///     let (actor, client) = ResourceActor::<Note>::new(10, Arc::new(MemoryStore::new()));
///     tokio::spawn(actor.run(()));
///
///     let note = client.create("hello".to_string()).await.unwrap();
///     assert_eq!(client.list().await.unwrap().len(), 1);
///     assert_eq!(client.get(note.id).await.unwrap().unwrap().text, "hello");
/// }
/// ```
///
/// # Persistence
///
/// Every mutating request (Create, Update, Action, Clear) ends with a full rewrite of
/// `T::COLLECTION`. If the write fails the in-memory change is undone and the caller gets
/// [`FrameworkError::Storage`], so memory never runs ahead of storage. A failing hook
/// likewise leaves the record as it was before the request.
pub struct ResourceActor<T: ActorEntity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    storage: Arc<dyn KeyValueStore>,
    items: Vec<T>,
}

impl<T: ActorEntity> ResourceActor<T> {
    /// Creates the actor and its client. The collection is read from `storage` once `run`
    /// starts, not here.
    pub fn new(buffer_size: usize, storage: Arc<dyn KeyValueStore>) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            storage,
            items: Vec::new(),
        };
        (actor, ResourceClient::new(sender))
    }

    fn position(&self, id: &T::Id) -> Option<usize> {
        self.items.iter().position(|item| item.id() == *id)
    }

    fn persist(&self) -> Result<(), StorageError> {
        save_collection(self.storage.as_ref(), T::COLLECTION, &self.items)
    }

    /// Runs the event loop until every client is dropped.
    ///
    /// `context` is handed to every entity hook, which lets entities call actors that were
    /// created after this one.
    pub async fn run(mut self, context: T::Context) {
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");

        self.items = load_collection(self.storage.as_ref(), T::COLLECTION);
        if let Some(max) = self.items.iter().filter_map(|item| item.max_stamp_id()).max() {
            Stamp::observe(max);
        }
        info!(entity_type, collection = T::COLLECTION, size = self.items.len(), "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Create { params, respond_to } => {
                    debug!(entity_type, ?params, "Create");
                    let result = self.create(params, &context, entity_type).await;
                    let _ = respond_to.send(result);
                }
                ResourceRequest::Get { id, respond_to } => {
                    let item = self.position(&id).map(|index| self.items[index].clone());
                    debug!(entity_type, %id, found = item.is_some(), "Get");
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::List { respond_to } => {
                    debug!(entity_type, size = self.items.len(), "List");
                    let _ = respond_to.send(Ok(self.items.clone()));
                }
                ResourceRequest::Update {
                    id,
                    update,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?update, "Update");
                    let Some(index) = self.position(&id) else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                        continue;
                    };
                    let previous = self.items[index].clone();
                    let result = match self.items[index].on_update(update, &context).await {
                        Ok(()) => self.commit(index, previous).map(|()| self.items[index].clone()),
                        Err(e) => {
                            self.items[index] = previous;
                            Err(FrameworkError::EntityError(Box::new(e)))
                        }
                    };
                    match &result {
                        Ok(_) => info!(entity_type, %id, "Updated"),
                        Err(e) => warn!(entity_type, %id, error = %e, "Update failed"),
                    }
                    let _ = respond_to.send(result);
                }
                ResourceRequest::Action {
                    id,
                    action,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?action, "Action");
                    let Some(index) = self.position(&id) else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                        continue;
                    };
                    let previous = self.items[index].clone();
                    let result = match self.items[index].handle_action(action, &context).await {
                        Ok(outcome) => self.commit(index, previous).map(|()| outcome),
                        Err(e) => {
                            self.items[index] = previous;
                            Err(FrameworkError::EntityError(Box::new(e)))
                        }
                    };
                    match &result {
                        Ok(_) => info!(entity_type, %id, "Action ok"),
                        Err(e) => warn!(entity_type, %id, error = %e, "Action failed"),
                    }
                    let _ = respond_to.send(result);
                }
                ResourceRequest::Clear { respond_to } => {
                    let previous = std::mem::take(&mut self.items);
                    let result = self.persist().map_err(|e| {
                        self.items = previous;
                        FrameworkError::Storage(e)
                    });
                    match &result {
                        Ok(()) => info!(entity_type, "Cleared"),
                        Err(e) => warn!(entity_type, error = %e, "Clear failed"),
                    }
                    let _ = respond_to.send(result);
                }
            }
        }

        info!(entity_type, size = self.items.len(), "Shutdown");
    }

    /// Persists after an in-place change to `items[index]`, restoring `previous` on failure.
    fn commit(&mut self, index: usize, previous: T) -> Result<(), FrameworkError> {
        self.persist().map_err(|e| {
            self.items[index] = previous;
            FrameworkError::Storage(e)
        })
    }

    async fn create(
        &mut self,
        params: T::Create,
        context: &T::Context,
        entity_type: &str,
    ) -> Result<T, FrameworkError> {
        let mut item = T::from_create_params(Stamp::next(), params).map_err(|e| {
            warn!(entity_type, error = %e, "Create failed");
            FrameworkError::EntityError(Box::new(e))
        })?;
        if let Err(e) = item.on_create(context).await {
            warn!(entity_type, error = %e, "on_create failed");
            return Err(FrameworkError::EntityError(Box::new(e)));
        }

        let id = item.id();
        match self.position(&id) {
            Some(index) => {
                let previous = self.items[index].clone();
                match self.items[index].on_conflict(item) {
                    Conflict::Reject => {
                        warn!(entity_type, %id, "Already exists");
                        Err(FrameworkError::AlreadyExists(id.to_string()))
                    }
                    Conflict::Merged => {
                        self.commit(index, previous)?;
                        info!(entity_type, %id, size = self.items.len(), "Merged");
                        Ok(self.items[index].clone())
                    }
                    Conflict::Keep => {
                        self.items[index] = previous.clone();
                        debug!(entity_type, %id, "Already exists, kept");
                        Ok(previous)
                    }
                }
            }
            None => {
                self.items.push(item.clone());
                if let Err(e) = self.persist() {
                    self.items.pop();
                    warn!(entity_type, %id, error = %e, "Create not persisted");
                    return Err(FrameworkError::Storage(e));
                }
                info!(entity_type, %id, size = self.items.len(), "Created");
                Ok(item)
            }
        }
    }
}
