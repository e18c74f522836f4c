//! # ActorClient Trait
//!
//! Common surface for resource-specific clients: provided `get` and `list` on top of a
//! [`ResourceClient`], with framework errors mapped into the resource's own error enum.

use crate::{ActorEntity, FrameworkError, ResourceClient};
use async_trait::async_trait;

/// Trait for resource-specific client wrappers.
///
/// ```rust
/// use actor_store::{ActorClient, ActorEntity, FrameworkError, ResourceClient, Stamp};
/// use async_trait::async_trait;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, Debug, Serialize, Deserialize)]
/// struct Tag { id: u64 }
/// #[derive(Debug)] enum TagAction {}
///
/// #[derive(Debug, thiserror::Error)]
/// enum TagError {
///     #[error("Actor communication error: {0}")]
///     ActorCommunicationError(String),
/// }
/// impl From<String> for TagError {
///     fn from(msg: String) -> Self { TagError::ActorCommunicationError(msg) }
/// }
///
/// #[async_trait]
/// impl ActorEntity for Tag {
///     type Id = u64; type Create = (); type Update = (); type Action = TagAction;
///     type ActionResult = (); type Context = (); type Error = TagError;
///     const COLLECTION: &'static str = "tags";
///     fn id(&self) -> u64 { self.id }
///     fn from_create_params(stamp: Stamp, _: ()) -> Result<Self, TagError> { Ok(Self { id: stamp.id }) }
///     async fn handle_action(&mut self, action: TagAction, _: &()) -> Result<(), TagError> { match action {} }
/// }
///
/// struct TagClient { inner: ResourceClient<Tag> }
///
/// #[async_trait]
/// impl ActorClient<Tag> for TagClient {
///     type Error = TagError;
///     fn inner(&self) -> &ResourceClient<Tag> { &self.inner }
///     fn map_error(e: FrameworkError) -> TagError { TagError::ActorCommunicationError(e.to_string()) }
/// }
///
/// async fn usage(client: TagClient) {
///     // get() and list() come for free
///     let _ = client.get(1).await;
///     let _ = client.list().await;
/// }
/// ```
#[async_trait]
pub trait ActorClient<T: ActorEntity>: Send + Sync {
    /// The resource-specific error type.
    type Error: From<String> + Send + Sync;

    /// Access the inner generic ResourceClient.
    fn inner(&self) -> &ResourceClient<T>;

    /// Map framework errors to the resource error type.
    fn map_error(e: FrameworkError) -> Self::Error;

    /// Fetch a record by id.
    #[tracing::instrument(skip(self))]
    async fn get(&self, id: T::Id) -> Result<Option<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().get(id).await.map_err(Self::map_error)
    }

    /// Every record, in insertion order.
    #[tracing::instrument(skip(self))]
    async fn list(&self) -> Result<Vec<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().list().await.map_err(Self::map_error)
    }
}
