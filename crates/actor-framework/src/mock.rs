//! # Mock Framework & Testing Guide
//!
//! `MockClient<T>` hands out a real `ResourceClient<T>` whose requests are answered from a queue
//! of scripted expectations instead of by a `ResourceActor`. Use it to test code that *calls*
//! an actor (an order hook reserving stock, an intake handler) without the actor behind it.
//!
//! ## When to use Mocks vs Real Actors
//!
//! | Feature | MockClient | Real Actor |
//! |---------|------------|------------|
//! | **State** | None, responses are scripted | Real rows |
//! | **Error Injection** | `return_err(..)` | Needs the right state |
//! | **Use Case** | Logic *around* the client | The actor itself, full system |
//!
//! ## Testing Strategies
//!
//! 1. **Pure mock**: script the dependency, exercise the caller.
//! 2. **Single actor**: spawn one `ResourceActor` with `()` context.
//! 3. **Actor with mocked dependencies**: spawn the actor under test with a context built from
//!    `MockClient::client()` handles (see `tests/order_actor_test.rs` in the application crate).
//! 4. **Full system**: start every actor and drive it end to end.
//!
//! ```rust
//! use actor_framework::mock::MockClient;
//! use actor_framework::{ActorEntity, FrameworkError};
//! use async_trait::async_trait;
//!
//! #[derive(Clone, Debug)] struct Bin { id: u32, stock: u32 }
//! #[derive(Debug)] struct BinCreate;
//! #[derive(Debug)] struct BinUpdate;
//! #[derive(Debug)] enum BinAction { Take(u32) }
//! #[derive(Debug, thiserror::Error)] #[error("empty")] struct BinError;
//!
//! #[async_trait]
//! impl ActorEntity for Bin {
//!     type Id = u32; type Create = BinCreate; type Update = BinUpdate;
//!     type Action = BinAction; type ActionResult = u32; type Context = (); type Error = BinError;
//!     fn from_create_params(id: u32, _: BinCreate) -> Result<Self, Self::Error> { Ok(Self { id, stock: 0 }) }
//!     async fn on_update(&mut self, _: BinUpdate, _: &()) -> Result<(), Self::Error> { Ok(()) }
//!     async fn handle_action(&mut self, _: BinAction, _: &()) -> Result<u32, Self::Error> { Ok(self.stock) }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut mock = MockClient::<Bin>::new();
//!     mock.expect_transaction(vec![1, 2]).return_ok(vec![4, 9]);
//!     mock.expect_get(3).return_err(FrameworkError::ActorClosed);
//!
//!     let client = mock.client();
//!     let taken = client
//!         .transaction(vec![(1, BinAction::Take(1)), (2, BinAction::Take(1))])
//!         .await
//!         .unwrap();
//!     assert_eq!(taken, vec![4, 9]);
//!     assert!(matches!(client.get(3).await, Err(FrameworkError::ActorClosed)));
//!
//!     mock.verify();
//! }
//! ```
//!
//! For tests that need to inspect the request payload itself, [`create_mock_client`] returns the
//! raw receiver and [`expect_create`] / [`expect_transaction`] pull the next request off it.

use crate::client::ResourceClient;
use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use crate::message::ResourceRequest;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::{mpsc, oneshot};

type Expectations<T> = Arc<Mutex<VecDeque<Expectation<T>>>>;

/// One scripted request and the response to send back.
enum Expectation<T: ActorEntity> {
    Get {
        id: T::Id,
        response: Result<Option<T>, FrameworkError>,
    },
    List {
        response: Result<Vec<T>, FrameworkError>,
    },
    Create {
        response: Result<T::Id, FrameworkError>,
    },
    Update {
        id: T::Id,
        response: Result<T, FrameworkError>,
    },
    Delete {
        id: T::Id,
        response: Result<(), FrameworkError>,
    },
    Action {
        id: T::Id,
        response: Result<T::ActionResult, FrameworkError>,
    },
    Transaction {
        ids: Vec<T::Id>,
        response: Result<Vec<T::ActionResult>, FrameworkError>,
    },
}

fn check_id<Id: PartialEq + std::fmt::Debug>(kind: &str, expected: &Id, actual: &Id) {
    if expected != actual {
        panic!("{kind}: expected id {expected:?}, got {actual:?}");
    }
}

/// A mock client with expectation tracking for fluent testing.
///
/// Expectations are consumed in the order they were registered. A request that does not
/// match the next expectation (wrong kind or wrong id) panics the mock task, which surfaces
/// in the test as `FrameworkError::ActorDropped`.
pub struct MockClient<T: ActorEntity> {
    client: ResourceClient<T>,
    expectations: Expectations<T>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: ActorEntity> Default for MockClient<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ActorEntity> MockClient<T> {
    /// Creates a new mock client with no expectations.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<ResourceRequest<T>>(100);
        let expectations: Expectations<T> = Arc::new(Mutex::new(VecDeque::new()));
        let queue = expectations.clone();

        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let expectation = queue.lock().unwrap().pop_front();

                match (request, expectation) {
                    (ResourceRequest::Get { id, respond_to }, Some(Expectation::Get { id: want, response })) => {
                        check_id("get", &want, &id);
                        let _ = respond_to.send(response);
                    }
                    (ResourceRequest::List { respond_to }, Some(Expectation::List { response })) => {
                        let _ = respond_to.send(response);
                    }
                    (ResourceRequest::Create { respond_to, .. }, Some(Expectation::Create { response })) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        ResourceRequest::Update { id, respond_to, .. },
                        Some(Expectation::Update { id: want, response }),
                    ) => {
                        check_id("update", &want, &id);
                        let _ = respond_to.send(response);
                    }
                    (ResourceRequest::Delete { id, respond_to }, Some(Expectation::Delete { id: want, response })) => {
                        check_id("delete", &want, &id);
                        let _ = respond_to.send(response);
                    }
                    (
                        ResourceRequest::Action { id, respond_to, .. },
                        Some(Expectation::Action { id: want, response }),
                    ) => {
                        check_id("action", &want, &id);
                        let _ = respond_to.send(response);
                    }
                    (
                        ResourceRequest::Transaction { ops, respond_to },
                        Some(Expectation::Transaction { ids, response }),
                    ) => {
                        let got: Vec<T::Id> = ops.into_iter().map(|(id, _)| id).collect();
                        if got != ids {
                            panic!("transaction: expected ids {ids:?}, got {got:?}");
                        }
                        let _ = respond_to.send(response);
                    }
                    (_, None) => panic!("Unexpected request with no expectation left"),
                    (_, Some(_)) => panic!("Request does not match next expectation"),
                }
            }
        });

        Self {
            client: ResourceClient::new(sender),
            expectations,
            _handle: handle,
        }
    }

    /// Returns the client for use in tests.
    pub fn client(&self) -> ResourceClient<T> {
        self.client.clone()
    }

    fn builder<R: 'static>(
        &self,
        make: impl FnOnce(Result<R, FrameworkError>) -> Expectation<T> + Send + 'static,
    ) -> ExpectationBuilder<T, R> {
        ExpectationBuilder {
            expectations: self.expectations.clone(),
            make: Box::new(make),
        }
    }

    pub fn expect_get(&mut self, id: T::Id) -> ExpectationBuilder<T, Option<T>> {
        self.builder(move |response| Expectation::Get { id, response })
    }

    pub fn expect_list(&mut self) -> ExpectationBuilder<T, Vec<T>> {
        self.builder(|response| Expectation::List { response })
    }

    pub fn expect_create(&mut self) -> ExpectationBuilder<T, T::Id> {
        self.builder(|response| Expectation::Create { response })
    }

    pub fn expect_update(&mut self, id: T::Id) -> ExpectationBuilder<T, T> {
        self.builder(move |response| Expectation::Update { id, response })
    }

    pub fn expect_delete(&mut self, id: T::Id) -> ExpectationBuilder<T, ()> {
        self.builder(move |response| Expectation::Delete { id, response })
    }

    pub fn expect_action(&mut self, id: T::Id) -> ExpectationBuilder<T, T::ActionResult> {
        self.builder(move |response| Expectation::Action { id, response })
    }

    /// Expects a transaction touching exactly `ids`, in that order.
    pub fn expect_transaction(
        &mut self,
        ids: Vec<T::Id>,
    ) -> ExpectationBuilder<T, Vec<T::ActionResult>> {
        self.builder(move |response| Expectation::Transaction { ids, response })
    }

    /// Verifies that all expectations were met.
    pub fn verify(&self) {
        let remaining = self.expectations.lock().unwrap().len();
        if remaining > 0 {
            panic!("Not all expectations were met. {remaining} remaining");
        }
    }
}

/// Finishes an expectation by choosing its response.
pub struct ExpectationBuilder<T: ActorEntity, R> {
    expectations: Expectations<T>,
    make: Box<dyn FnOnce(Result<R, FrameworkError>) -> Expectation<T> + Send>,
}

impl<T: ActorEntity, R> ExpectationBuilder<T, R> {
    pub fn return_ok(self, value: R) {
        self.push(Ok(value));
    }

    pub fn return_err(self, error: FrameworkError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<R, FrameworkError>) {
        let expectation = (self.make)(response);
        self.expectations.lock().unwrap().push_back(expectation);
    }
}

/// Creates a client and the receiver its requests arrive on.
///
/// Pair with [`expect_create`] / [`expect_transaction`] to answer requests by hand, which is
/// useful when the test needs to assert on the request payload.
pub fn create_mock_client<T: ActorEntity>(
    buffer_size: usize,
) -> (ResourceClient<T>, mpsc::Receiver<ResourceRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ResourceClient::new(sender), receiver)
}

/// Waits for the next request and returns it if it is a Create.
pub async fn expect_create<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Create, oneshot::Sender<Result<T::Id, FrameworkError>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Create { params, respond_to }) => Some((params, respond_to)),
        _ => None,
    }
}

/// Waits for the next request and returns it if it is a Transaction.
#[allow(clippy::type_complexity)]
pub async fn expect_transaction<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(
    Vec<(T::Id, T::Action)>,
    oneshot::Sender<Result<Vec<T::ActionResult>, FrameworkError>>,
)> {
    match receiver.recv().await {
        Some(ResourceRequest::Transaction { ops, respond_to }) => Some((ops, respond_to)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    #[derive(Clone, Debug, PartialEq)]
    struct Shelf {
        id: u32,
        label: String,
        units: u32,
    }

    #[derive(Debug)]
    struct ShelfCreate {
        label: String,
    }

    #[derive(Debug)]
    struct ShelfUpdate;

    #[derive(Debug, PartialEq)]
    enum ShelfAction {
        Take(u32),
    }

    #[derive(Debug, thiserror::Error)]
    #[error("Shelf error")]
    struct ShelfError;

    #[async_trait]
    impl ActorEntity for Shelf {
        type Id = u32;
        type Create = ShelfCreate;
        type Update = ShelfUpdate;
        type Action = ShelfAction;
        type ActionResult = u32;
        type Context = ();
        type Error = ShelfError;

        fn from_create_params(id: u32, params: ShelfCreate) -> Result<Self, Self::Error> {
            Ok(Self {
                id,
                label: params.label,
                units: 0,
            })
        }

        async fn on_update(&mut self, _: ShelfUpdate, _: &()) -> Result<(), Self::Error> {
            Ok(())
        }

        async fn handle_action(&mut self, _: ShelfAction, _: &()) -> Result<u32, Self::Error> {
            Ok(self.units)
        }
    }

    fn shelf(id: u32, label: &str) -> Shelf {
        Shelf {
            id,
            label: label.to_string(),
            units: 3,
        }
    }

    #[tokio::test]
    async fn test_raw_receiver_sees_payloads() {
        let (client, mut receiver) = create_mock_client::<Shelf>(10);

        let create_task = tokio::spawn({
            let client = client.clone();
            async move {
                client
                    .create(ShelfCreate {
                        label: "A1".to_string(),
                    })
                    .await
            }
        });
        let (payload, responder) = expect_create(&mut receiver)
            .await
            .expect("Expected Create request");
        assert_eq!(payload.label, "A1");
        responder.send(Ok(1)).unwrap();
        assert_eq!(create_task.await.unwrap().unwrap(), 1);

        let txn_task = tokio::spawn(async move {
            client
                .transaction(vec![(1, ShelfAction::Take(2)), (1, ShelfAction::Take(1))])
                .await
        });
        let (ops, responder) = expect_transaction(&mut receiver)
            .await
            .expect("Expected Transaction request");
        assert_eq!(ops, vec![(1, ShelfAction::Take(2)), (1, ShelfAction::Take(1))]);
        responder.send(Ok(vec![1, 0])).unwrap();
        assert_eq!(txn_task.await.unwrap().unwrap(), vec![1, 0]);
    }

    #[tokio::test]
    async fn test_mock_client_with_expectations() {
        let mut mock = MockClient::<Shelf>::new();

        mock.expect_create().return_ok(1);
        mock.expect_get(1).return_ok(Some(shelf(1, "A1")));
        mock.expect_list().return_ok(vec![shelf(1, "A1"), shelf(2, "B2")]);
        mock.expect_delete(2).return_err(FrameworkError::NotFound("2".into()));

        let client = mock.client();

        let id = client
            .create(ShelfCreate {
                label: "A1".to_string(),
            })
            .await
            .unwrap();
        assert_eq!(id, 1);

        let fetched = client.get(1).await.unwrap();
        assert_eq!(fetched.unwrap().label, "A1");

        let all = client.list().await.unwrap();
        assert_eq!(all.len(), 2);

        let err = client.delete(2).await.unwrap_err();
        assert!(matches!(err, FrameworkError::NotFound(id) if id == "2"));

        mock.verify();
    }

    #[tokio::test]
    async fn test_mismatched_request_drops_reply() {
        let mut mock = MockClient::<Shelf>::new();
        mock.expect_get(7).return_ok(None);

        let result = mock.client().get(8).await;
        assert!(matches!(result, Err(FrameworkError::ActorDropped)));
    }

    #[tokio::test]
    #[should_panic(expected = "Not all expectations were met")]
    async fn test_verify_reports_leftovers() {
        let mut mock = MockClient::<Shelf>::new();
        mock.expect_action(1).return_ok(3);
        mock.verify();
    }
}
