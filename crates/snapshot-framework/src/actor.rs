//! # Generic Snapshot Actor
//!
//! This module defines the `SnapshotActor`, the "Server" side of the framework. It
//! exclusively owns one [`SnapshotState`] document, processes requests sequentially and
//! writes the whole document through its [`SnapshotSlot`] after every change.

use crate::client::SnapshotClient;
use crate::message::{ChangeNotice, SnapshotRequest};
use crate::slot::{decode, encode, SnapshotSlot};
use crate::state::SnapshotState;
use tokio::sync::{broadcast, mpsc};
use tracing::{debug, info, warn};

/// The generic actor that owns a snapshot document.
///
/// # Concurrency Model
/// The actor runs in a single Tokio task and handles one message at a time, so an
/// operation observes the snapshot exactly as the previous one left it. No `Mutex`
/// guards the state; exclusive ownership inside the task does.
///
/// # Usage Pattern
///
/// 1.  **Create**: `SnapshotActor::new()` loads (or seeds) the snapshot and returns the
///     `actor` (server) and `client` (interface).
/// 2.  **Run**: spawn `actor.run()` in a background task.
/// 3.  **Use**: clone the client into every consumer.
///
/// ```rust
/// use serde::{Deserialize, Serialize};
/// use snapshot_framework::{Applied, MemorySlot, SnapshotActor, SnapshotState};
///
/// #[derive(Clone, Debug, Default, Serialize, Deserialize)]
/// struct Counter { value: u32 }
///
/// impl SnapshotState for Counter {
///     type Op = u32;
///     type Outcome = u32;
///     type Event = String;
///
///     fn seed() -> Self { Self::default() }
///
///     fn apply(&mut self, by: u32) -> Applied<u32, String> {
///         self.value += by;
///         Applied::changed(self.value, format!("+{by}"))
///     }
/// }
///
/// #[tokio::main]
/// async fn main() {
///     let (actor, client) = SnapshotActor::<Counter>::new(10, MemorySlot::new("COUNTER"), 16);
///     tokio::spawn(actor.run());
///
///     assert_eq!(client.apply(2).await.unwrap(), 2);
///     assert_eq!(client.snapshot().await.unwrap().value, 2);
/// }
/// ```
///
/// # Operations
///
/// * **Apply**:
///     1. Calls `S::apply` with the operation.
///     2. If the state reports an event: bumps the revision, persists the snapshot,
///        broadcasts a [`ChangeNotice`].
///     3. Responds with the outcome.
///
/// * **Read**: responds with a clone of the snapshot.
///
/// * **Subscribe**: responds with a fresh broadcast receiver.
pub struct SnapshotActor<S: SnapshotState> {
    receiver: mpsc::Receiver<SnapshotRequest<S>>,
    state: S,
    slot: Box<dyn SnapshotSlot>,
    notices: broadcast::Sender<ChangeNotice<S::Event>>,
    revision: u64,
}

impl<S: SnapshotState> SnapshotActor<S> {
    /// Creates a new `SnapshotActor` and its associated `SnapshotClient`.
    ///
    /// The slot is read immediately. A missing, unreadable or undecodable snapshot is
    /// replaced by `S::seed()`; the failure is only logged.
    ///
    /// # Arguments
    ///
    /// * `buffer_size` - Capacity of the request channel.
    /// * `slot` - Where the snapshot is loaded from and persisted to.
    /// * `notice_capacity` - How many notices a lagging subscriber may fall behind.
    pub fn new(
        buffer_size: usize,
        slot: impl SnapshotSlot,
        notice_capacity: usize,
    ) -> (Self, SnapshotClient<S>) {
        let (sender, receiver) = mpsc::channel(buffer_size.max(1));
        let (notices, _) = broadcast::channel(notice_capacity.max(1));
        let state = Self::load(&slot);
        let actor = Self {
            receiver,
            state,
            slot: Box::new(slot),
            notices,
            revision: 0,
        };
        (actor, SnapshotClient::new(sender))
    }

    fn load(slot: &dyn SnapshotSlot) -> S {
        let key = slot.key();
        match slot.read() {
            Ok(Some(raw)) => match decode(&raw) {
                Ok(state) => {
                    info!(key, "Snapshot loaded");
                    state
                }
                Err(e) => {
                    warn!(key, error = %e, "Snapshot unreadable, seeding");
                    S::seed()
                }
            },
            Ok(None) => {
                info!(key, "No snapshot found, seeding");
                S::seed()
            }
            Err(e) => {
                warn!(key, error = %e, "Slot read failed, seeding");
                S::seed()
            }
        }
    }

    /// The snapshot as currently held, before `run` takes over.
    pub fn state(&self) -> &S {
        &self.state
    }

    fn persist(&self) {
        let result = encode(&self.state).and_then(|raw| self.slot.write(&raw));
        if let Err(e) = result {
            warn!(key = self.slot.key(), revision = self.revision, error = %e, "Persist failed");
        }
    }

    /// Runs the event loop until every client has been dropped.
    ///
    /// The loaded (or seeded) snapshot is written back once before the first message.
    pub async fn run(mut self) {
        let state_type = std::any::type_name::<S>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(state_type, key = self.slot.key(), "Actor started");
        self.persist();

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                SnapshotRequest::Apply { op, respond_to } => {
                    debug!(state_type, ?op, "Apply");
                    let applied = self.state.apply(op);
                    match applied.event {
                        Some(event) => {
                            self.revision += 1;
                            self.persist();
                            info!(state_type, revision = self.revision, "Applied");
                            // No receivers is fine: nobody subscribed yet.
                            let _ = self.notices.send(ChangeNotice {
                                revision: self.revision,
                                event,
                            });
                        }
                        None => debug!(state_type, outcome = ?applied.outcome, "No change"),
                    }
                    let _ = respond_to.send(Ok(applied.outcome));
                }
                SnapshotRequest::Read { respond_to } => {
                    debug!(state_type, "Read");
                    let _ = respond_to.send(Ok(self.state.clone()));
                }
                SnapshotRequest::Subscribe { respond_to } => {
                    debug!(state_type, "Subscribe");
                    let _ = respond_to.send(Ok(self.notices.subscribe()));
                }
            }
        }

        info!(state_type, revision = self.revision, "Shutdown");
    }
}
