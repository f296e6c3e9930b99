//! # Mock Framework & Testing Guide
//!
//! `MockClient<S>` hands out a real [`SnapshotClient<S>`] whose requests are answered
//! from a queue of expectations instead of by a running actor. Code that only *talks*
//! to the store (workflows such as an import or a stock count) can be tested without
//! spawning anything or preparing a snapshot.
//!
//! ## When to use Mocks vs Real Actors
//!
//! | Feature | MockClient | Real Actor |
//! |---------|------------|------------|
//! | **Speed** | Instant (in-memory) | Fast (but involves tokio spawn) |
//! | **State** | No real state (expectations) | Real snapshot, real persistence |
//! | **Use Case** | Asserting *which* ops a workflow sends | Testing the state or the full system |
//! | **Error Injection** | Easy (`return_err`) | Hard (requires a dead actor) |
//!
//! ## Testing Strategies
//!
//! <details>
//! <summary><b>Pattern 0: Workflow Test (Pure Mock)</b></summary>
//!
//! ```rust
//! use serde::{Deserialize, Serialize};
//! use snapshot_framework::mock::MockClient;
//! use snapshot_framework::{Applied, SnapshotState};
//!
//! #[derive(Clone, Debug, Default, Serialize, Deserialize)]
//! struct Counter { value: u32 }
//!
//! impl SnapshotState for Counter {
//!     type Op = u32;
//!     type Outcome = u32;
//!     type Event = String;
//!     fn seed() -> Self { Self::default() }
//!     fn apply(&mut self, by: u32) -> Applied<u32, String> {
//!         self.value += by;
//!         Applied::changed(self.value, String::new())
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut mock = MockClient::<Counter>::new();
//!     mock.expect_apply().return_ok(7);
//!
//!     let client = mock.client();
//!     assert_eq!(client.apply(3).await.unwrap(), 7);
//!
//!     assert_eq!(mock.received(), vec![3]);
//!     mock.verify();
//! }
//! ```
//! </details>
//!
//! <details>
//! <summary><b>Pattern 1: Real Actor over a MemorySlot</b></summary>
//!
//! Spawn a `SnapshotActor` with a [`MemorySlot`](crate::MemorySlot) and keep a clone
//! of the slot to inspect what was persisted. See `tests/integration_test.rs`.
//! </details>
//!
//! ## Testing Failure Scenarios
//!
//! `return_err(FrameworkError::ActorClosed)` simulates a store that went away.
//! [`FailingSlot`] simulates storage that rejects every write, so the degrade-to-memory
//! path of the actor can be exercised.
//!
//! ## Mocking Utilities
//!
//! Use [`create_mock_client`] to get a client and the raw request receiver, or use the
//! fluent [`MockClient`] API.

use crate::client::SnapshotClient;
use crate::error::FrameworkError;
use crate::message::{ChangeNotice, Response, SnapshotRequest};
use crate::slot::{SnapshotSlot, StorageError};
use crate::state::SnapshotState;
use std::collections::VecDeque;
use std::io;
use std::sync::{Arc, Mutex};
use tokio::sync::{broadcast, mpsc};

// =============================================================================
// EXPECTATION BUILDER API
// =============================================================================

enum Expectation<S: SnapshotState> {
    Apply {
        response: Result<S::Outcome, FrameworkError>,
    },
    Read {
        response: Result<S, FrameworkError>,
    },
}

type Queue<S> = Arc<Mutex<VecDeque<Expectation<S>>>>;

/// A mock client with expectation tracking for fluent testing.
///
/// Expectations are consumed in order. `subscribe` requests are always answered from
/// an internal broadcast channel fed by [`MockClient::notify`].
pub struct MockClient<S: SnapshotState> {
    client: SnapshotClient<S>,
    expectations: Queue<S>,
    received: Arc<Mutex<Vec<S::Op>>>,
    notices: broadcast::Sender<ChangeNotice<S::Event>>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<S: SnapshotState> Default for MockClient<S>
where
    S::Op: Clone,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<S: SnapshotState> MockClient<S>
where
    S::Op: Clone,
{
    /// Creates a new mock client with no expectations.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<SnapshotRequest<S>>(100);
        let (notices, _) = broadcast::channel(16);
        let expectations: Queue<S> = Arc::new(Mutex::new(VecDeque::new()));
        let received = Arc::new(Mutex::new(Vec::new()));

        let exps = expectations.clone();
        let log = received.clone();
        let feed = notices.clone();
        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                if let SnapshotRequest::Subscribe { respond_to } = request {
                    let _ = respond_to.send(Ok(feed.subscribe()));
                    continue;
                }
                let expectation = exps.lock().unwrap().pop_front();

                match (request, expectation) {
                    (
                        SnapshotRequest::Apply { op, respond_to },
                        Some(Expectation::Apply { response }),
                    ) => {
                        log.lock().unwrap().push(op);
                        let _ = respond_to.send(response);
                    }
                    (SnapshotRequest::Read { respond_to }, Some(Expectation::Read { response })) => {
                        let _ = respond_to.send(response);
                    }
                    (request, _) => {
                        panic!("Unexpected request or expectation mismatch: {request:?}");
                    }
                }
            }
        });

        Self {
            client: SnapshotClient::new(sender),
            expectations,
            received,
            notices,
            _handle: handle,
        }
    }

    /// Returns the client for use in tests.
    pub fn client(&self) -> SnapshotClient<S> {
        self.client.clone()
    }

    /// Expects an `apply` request.
    pub fn expect_apply(&mut self) -> ApplyExpectationBuilder<S> {
        ApplyExpectationBuilder {
            expectations: self.expectations.clone(),
        }
    }

    /// Expects a `snapshot` request.
    pub fn expect_read(&mut self) -> ReadExpectationBuilder<S> {
        ReadExpectationBuilder {
            expectations: self.expectations.clone(),
        }
    }

    /// Every op received through `apply`, in arrival order.
    pub fn received(&self) -> Vec<S::Op> {
        self.received.lock().unwrap().clone()
    }

    /// Broadcasts a notice to everyone who subscribed through the mock client.
    pub fn notify(&self, revision: u64, event: S::Event) {
        let _ = self.notices.send(ChangeNotice { revision, event });
    }

    /// Verifies that all expectations were met.
    pub fn verify(&self) {
        let exps = self.expectations.lock().unwrap();
        if !exps.is_empty() {
            panic!("Not all expectations were met. {} remaining", exps.len());
        }
    }
}

/// Builder for `apply` expectations.
pub struct ApplyExpectationBuilder<S: SnapshotState> {
    expectations: Queue<S>,
}

impl<S: SnapshotState> ApplyExpectationBuilder<S> {
    pub fn return_ok(self, outcome: S::Outcome) {
        self.expectations
            .lock()
            .unwrap()
            .push_back(Expectation::Apply {
                response: Ok(outcome),
            });
    }

    pub fn return_err(self, error: FrameworkError) {
        self.expectations
            .lock()
            .unwrap()
            .push_back(Expectation::Apply {
                response: Err(error),
            });
    }
}

/// Builder for `snapshot` expectations.
pub struct ReadExpectationBuilder<S: SnapshotState> {
    expectations: Queue<S>,
}

impl<S: SnapshotState> ReadExpectationBuilder<S> {
    pub fn return_ok(self, state: S) {
        self.expectations
            .lock()
            .unwrap()
            .push_back(Expectation::Read {
                response: Ok(state),
            });
    }

    pub fn return_err(self, error: FrameworkError) {
        self.expectations
            .lock()
            .unwrap()
            .push_back(Expectation::Read {
                response: Err(error),
            });
    }
}

// =============================================================================
// RAW CHANNEL HELPERS
// =============================================================================

/// Creates a client and the receiver its requests arrive on.
///
/// The test plays the actor: it pulls requests with [`expect_apply`] /
/// [`expect_read`], asserts on them and answers through the returned responder.
pub fn create_mock_client<S: SnapshotState>(
    buffer_size: usize,
) -> (SnapshotClient<S>, mpsc::Receiver<SnapshotRequest<S>>) {
    let (sender, receiver) = mpsc::channel(buffer_size.max(1));
    (SnapshotClient::new(sender), receiver)
}

/// Helper to verify that the next message is an Apply request.
pub async fn expect_apply<S: SnapshotState>(
    receiver: &mut mpsc::Receiver<SnapshotRequest<S>>,
) -> Option<(S::Op, Response<S::Outcome>)> {
    match receiver.recv().await {
        Some(SnapshotRequest::Apply { op, respond_to }) => Some((op, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a Read request.
pub async fn expect_read<S: SnapshotState>(
    receiver: &mut mpsc::Receiver<SnapshotRequest<S>>,
) -> Option<Response<S>> {
    match receiver.recv().await {
        Some(SnapshotRequest::Read { respond_to }) => Some(respond_to),
        _ => None,
    }
}

/// A slot whose reads find nothing and whose writes always fail.
#[derive(Debug, Clone, Default)]
pub struct FailingSlot;

impl SnapshotSlot for FailingSlot {
    fn key(&self) -> &str {
        "FAILING"
    }

    fn read(&self) -> Result<Option<String>, StorageError> {
        Ok(None)
    }

    fn write(&self, _contents: &str) -> Result<(), StorageError> {
        Err(StorageError::Io {
            key: self.key().to_string(),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "read-only slot"),
        })
    }
}
