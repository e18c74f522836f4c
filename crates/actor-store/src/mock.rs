//! # Mock Client
//!
//! [`MockClient<T>`] hands out a real [`ResourceClient<T>`] whose requests are answered from
//! a queue of expectations instead of an actor. Use it to test an actor whose hooks call
//! another actor (the review ledger consulting the order ledger, for example) without
//! running that other actor.
//!
//! | | MockClient | Real actor |
//! |---|---|---|
//! | **State** | none, answers are scripted | loaded from and written to a store |
//! | **Error injection** | `return_err(...)` | needs a failing store |
//! | **Use case** | code *around* a client | the actor itself, or the whole system |
//!
//! ```rust
//! use actor_store::mock::MockClient;
//! use actor_store::{ActorEntity, FrameworkError, Stamp};
//! use async_trait::async_trait;
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
//! struct Ticket { id: u64, open: bool }
//! #[derive(Debug)] enum TicketAction {}
//! #[derive(Debug, thiserror::Error)] #[error("ticket error")] struct TicketError;
//!
//! #[async_trait]
//! impl ActorEntity for Ticket {
//!     type Id = u64; type Create = (); type Update = (); type Action = TicketAction;
//!     type ActionResult = (); type Context = (); type Error = TicketError;
//!     const COLLECTION: &'static str = "tickets";
//!     fn id(&self) -> u64 { self.id }
//!     fn from_create_params(stamp: Stamp, _: ()) -> Result<Self, TicketError> {
//!         Ok(Self { id: stamp.id, open: true })
//!     }
//!     async fn handle_action(&mut self, action: TicketAction, _: &()) -> Result<(), TicketError> {
//!         match action {}
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut mock = MockClient::<Ticket>::new();
//!     mock.expect_get(7).return_ok(Some(Ticket { id: 7, open: true }));
//!     mock.expect_list().return_err(FrameworkError::ActorClosed);
//!
//!     let client = mock.client();
//!     assert!(client.get(7).await.unwrap().unwrap().open);
//!     assert!(matches!(client.list().await, Err(FrameworkError::ActorClosed)));
//!
//!     mock.verify();
//! }
//! ```
//!
//! For tests that want to inspect the request payloads themselves, [`create_mock_client`]
//! returns a client plus the raw receiving end, and [`expect_create`] / [`expect_action`]
//! pull the next request off it.

use crate::client::ResourceClient;
use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use crate::message::ResourceRequest;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tokio::sync::{mpsc, oneshot};

/// A scripted answer to one request.
enum Expectation<T: ActorEntity> {
    Get {
        id: T::Id,
        response: Result<Option<T>, FrameworkError>,
    },
    List {
        response: Result<Vec<T>, FrameworkError>,
    },
    Create {
        response: Result<T, FrameworkError>,
    },
    Update {
        id: T::Id,
        response: Result<T, FrameworkError>,
    },
    Action {
        id: T::Id,
        response: Result<T::ActionResult, FrameworkError>,
    },
    Clear {
        response: Result<(), FrameworkError>,
    },
}

struct Script<T: ActorEntity> {
    pending: VecDeque<Expectation<T>>,
    mismatches: Vec<String>,
}

type Shared<T> = Arc<Mutex<Script<T>>>;

fn lock<T: ActorEntity>(script: &Shared<T>) -> MutexGuard<'_, Script<T>> {
    script.lock().unwrap_or_else(PoisonError::into_inner)
}

/// A client whose requests are answered, in order, by queued expectations.
///
/// A request that does not match the next expectation (wrong kind or wrong id) is recorded
/// and its response channel dropped, so the caller sees [`FrameworkError::ActorDropped`];
/// [`MockClient::verify`] then fails the test.
pub struct MockClient<T: ActorEntity> {
    client: ResourceClient<T>,
    script: Shared<T>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: ActorEntity> Default for MockClient<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ActorEntity> MockClient<T> {
    /// Creates a mock with no expectations. Must be called inside a Tokio runtime.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<ResourceRequest<T>>(100);
        let script: Shared<T> = Arc::new(Mutex::new(Script {
            pending: VecDeque::new(),
            mismatches: Vec::new(),
        }));
        let answering = script.clone();

        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let mut script = lock(&answering);
                let expectation = script.pending.pop_front();
                if let Some(mismatch) = answer(request, expectation) {
                    script.mismatches.push(mismatch);
                }
            }
        });

        Self {
            client: ResourceClient::new(sender),
            script,
            _handle: handle,
        }
    }

    /// The client to hand to the code under test.
    pub fn client(&self) -> ResourceClient<T> {
        self.client.clone()
    }

    fn push(&self, expectation: Expectation<T>) {
        lock(&self.script).pending.push_back(expectation);
    }

    pub fn expect_get(&mut self, id: T::Id) -> Expect<'_, T, Option<T>> {
        Expect::new(self, move |response| Expectation::Get { id, response })
    }

    pub fn expect_list(&mut self) -> Expect<'_, T, Vec<T>> {
        Expect::new(self, |response| Expectation::List { response })
    }

    pub fn expect_create(&mut self) -> Expect<'_, T, T> {
        Expect::new(self, |response| Expectation::Create { response })
    }

    pub fn expect_update(&mut self, id: T::Id) -> Expect<'_, T, T> {
        Expect::new(self, move |response| Expectation::Update { id, response })
    }

    pub fn expect_action(&mut self, id: T::Id) -> Expect<'_, T, T::ActionResult> {
        Expect::new(self, move |response| Expectation::Action { id, response })
    }

    pub fn expect_clear(&mut self) -> Expect<'_, T, ()> {
        Expect::new(self, |response| Expectation::Clear { response })
    }

    /// Panics if an expectation is still queued or a request did not match its expectation.
    pub fn verify(&self) {
        let script = lock(&self.script);
        if !script.mismatches.is_empty() {
            panic!("Unexpected requests: {:?}", script.mismatches);
        }
        if !script.pending.is_empty() {
            panic!(
                "Not all expectations were met. {} remaining",
                script.pending.len()
            );
        }
    }
}

/// Builder returned by the `expect_*` methods; finish it with `return_ok` or `return_err`.
pub struct Expect<'a, T: ActorEntity, R> {
    mock: &'a MockClient<T>,
    build: Box<dyn FnOnce(Result<R, FrameworkError>) -> Expectation<T> + 'a>,
}

impl<'a, T: ActorEntity, R> Expect<'a, T, R> {
    fn new(
        mock: &'a MockClient<T>,
        build: impl FnOnce(Result<R, FrameworkError>) -> Expectation<T> + 'a,
    ) -> Self {
        Self {
            mock,
            build: Box::new(build),
        }
    }

    pub fn return_ok(self, value: R) {
        self.mock.push((self.build)(Ok(value)));
    }

    pub fn return_err(self, error: FrameworkError) {
        self.mock.push((self.build)(Err(error)));
    }
}

/// Answers `request` from `expectation`, or describes why it could not.
fn answer<T: ActorEntity>(
    request: ResourceRequest<T>,
    expectation: Option<Expectation<T>>,
) -> Option<String> {
    match (request, expectation) {
        (ResourceRequest::Get { id, respond_to }, Some(Expectation::Get { id: want, response }))
            if id == want =>
        {
            let _ = respond_to.send(response);
            None
        }
        (ResourceRequest::List { respond_to }, Some(Expectation::List { response })) => {
            let _ = respond_to.send(response);
            None
        }
        (ResourceRequest::Create { respond_to, .. }, Some(Expectation::Create { response })) => {
            let _ = respond_to.send(response);
            None
        }
        (
            ResourceRequest::Update { id, respond_to, .. },
            Some(Expectation::Update { id: want, response }),
        ) if id == want => {
            let _ = respond_to.send(response);
            None
        }
        (
            ResourceRequest::Action { id, respond_to, .. },
            Some(Expectation::Action { id: want, response }),
        ) if id == want => {
            let _ = respond_to.send(response);
            None
        }
        (ResourceRequest::Clear { respond_to }, Some(Expectation::Clear { response })) => {
            let _ = respond_to.send(response);
            None
        }
        (request, expectation) => Some(format!(
            "got {request:?}, expected {}",
            expectation.map_or("nothing", |e| e.kind())
        )),
    }
}

impl<T: ActorEntity> Expectation<T> {
    fn kind(&self) -> &'static str {
        match self {
            Expectation::Get { .. } => "Get",
            Expectation::List { .. } => "List",
            Expectation::Create { .. } => "Create",
            Expectation::Update { .. } => "Update",
            Expectation::Action { .. } => "Action",
            Expectation::Clear { .. } => "Clear",
        }
    }
}

/// Creates a client together with the receiving end of its channel.
///
/// Nothing answers the requests; the test pulls them off the receiver, inspects the
/// payload, and replies through the responder.
pub fn create_mock_client<T: ActorEntity>(
    buffer_size: usize,
) -> (ResourceClient<T>, mpsc::Receiver<ResourceRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ResourceClient::new(sender), receiver)
}

/// Takes the next request if it is a Create.
pub async fn expect_create<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Create, oneshot::Sender<Result<T, FrameworkError>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Create { params, respond_to }) => Some((params, respond_to)),
        _ => None,
    }
}

/// Takes the next request if it is an Action.
pub async fn expect_action<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(
    T::Id,
    T::Action,
    oneshot::Sender<Result<T::ActionResult, FrameworkError>>,
)> {
    match receiver.recv().await {
        Some(ResourceRequest::Action {
            id,
            action,
            respond_to,
        }) => Some((id, action, respond_to)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stamp::Stamp;
    use async_trait::async_trait;
    use serde::{Deserialize, Serialize};

    #[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
    struct Seat {
        id: u64,
        label: String,
        held: bool,
    }

    #[derive(Debug)]
    enum SeatAction {
        Hold,
    }

    #[derive(Debug, thiserror::Error)]
    #[error("seat error")]
    struct SeatError;

    #[async_trait]
    impl ActorEntity for Seat {
        type Id = u64;
        type Create = String;
        type Update = ();
        type Action = SeatAction;
        type ActionResult = bool;
        type Context = ();
        type Error = SeatError;
        const COLLECTION: &'static str = "seats";

        fn id(&self) -> u64 {
            self.id
        }

        fn from_create_params(stamp: Stamp, label: String) -> Result<Self, SeatError> {
            Ok(Self {
                id: stamp.id,
                label,
                held: false,
            })
        }

        async fn handle_action(&mut self, action: SeatAction, _: &()) -> Result<bool, SeatError> {
            match action {
                SeatAction::Hold => {
                    let changed = !self.held;
                    self.held = true;
                    Ok(changed)
                }
            }
        }
    }

    fn seat(id: u64) -> Seat {
        Seat {
            id,
            label: format!("A{id}"),
            held: false,
        }
    }

    #[tokio::test]
    async fn test_raw_receiver_sees_payloads() {
        let (client, mut receiver) = create_mock_client::<Seat>(10);

        let create = tokio::spawn(async move {
            let created = client.create("B4".to_string()).await;
            let held = client.perform_action(4, SeatAction::Hold).await;
            (created, held)
        });

        let (label, responder) = expect_create(&mut receiver).await.unwrap();
        assert_eq!(label, "B4");
        responder.send(Ok(seat(4))).unwrap();

        let (id, action, responder) = expect_action(&mut receiver).await.unwrap();
        assert_eq!(id, 4);
        assert!(matches!(action, SeatAction::Hold));
        responder.send(Ok(true)).unwrap();

        let (created, held) = create.await.unwrap();
        assert_eq!(created.unwrap().id, 4);
        assert!(held.unwrap());
    }

    #[tokio::test]
    async fn test_expectations_answer_in_order() {
        let mut mock = MockClient::<Seat>::new();
        mock.expect_create().return_ok(seat(1));
        mock.expect_get(1).return_ok(Some(seat(1)));
        mock.expect_update(1).return_err(FrameworkError::NotFound("1".into()));
        mock.expect_list().return_ok(vec![seat(1), seat(2)]);
        mock.expect_clear().return_ok(());

        let client = mock.client();
        assert_eq!(client.create("A1".into()).await.unwrap(), seat(1));
        assert_eq!(client.get(1).await.unwrap(), Some(seat(1)));
        assert!(matches!(
            client.update(1, ()).await,
            Err(FrameworkError::NotFound(_))
        ));
        assert_eq!(client.list().await.unwrap().len(), 2);
        client.clear().await.unwrap();

        mock.verify();
    }

    #[tokio::test]
    async fn test_mismatched_request_is_dropped_and_reported() {
        let mut mock = MockClient::<Seat>::new();
        mock.expect_get(1).return_ok(None);

        let client = mock.client();
        assert!(matches!(
            client.get(2).await,
            Err(FrameworkError::ActorDropped)
        ));

        let verdict = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| mock.verify()));
        assert!(verdict.is_err());
    }

    #[tokio::test]
    #[should_panic(expected = "Not all expectations were met")]
    async fn test_verify_reports_unused_expectations() {
        let mut mock = MockClient::<Seat>::new();
        mock.expect_action(3).return_ok(true);
        mock.verify();
    }
}
