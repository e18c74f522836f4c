//! # Generic Messages
//!
//! Requests exchanged between a [`ResourceClient`](crate::ResourceClient) and its
//! [`ResourceActor`](crate::ResourceActor).

use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use tokio::sync::oneshot;

/// One-shot response channel carried by every request.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Operations a resource actor understands.
///
/// Records are never deleted one by one: collections only grow, change in place, or are
/// emptied as a whole with `Clear` (the cart after a checkout).
///
/// - **Create**: builds a record from [`ActorEntity::Create`]; answers the stored (or merged) record
/// - **Get**: one record by id
/// - **List**: every record, in insertion order
/// - **Update**: applies [`ActorEntity::Update`] to one record
/// - **Action**: runs a resource-specific [`ActorEntity::Action`]
/// - **Clear**: empties the collection
#[derive(Debug)]
pub enum ResourceRequest<T: ActorEntity> {
    Create {
        params: T::Create,
        respond_to: Response<T>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    List {
        respond_to: Response<Vec<T>>,
    },
    Update {
        id: T::Id,
        update: T::Update,
        respond_to: Response<T>,
    },
    Action {
        id: T::Id,
        action: T::Action,
        respond_to: Response<T::ActionResult>,
    },
    Clear {
        respond_to: Response<()>,
    },
}
