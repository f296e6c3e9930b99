//! # SnapshotState Trait
//!
//! The `SnapshotState` trait is the contract a whole document (every collection
//! the store owns, as one value) implements to be managed by the generic
//! [`SnapshotActor`](crate::SnapshotActor). The snapshot is also the unit of
//! persistence: after each applied operation the actor serializes all of it.
//!
//! # Architecture Note
//! The actor knows nothing about items, users or logs. It knows how to:
//! - build a first snapshot when nothing is persisted ([`SnapshotState::seed`]),
//! - hand an operation to the snapshot ([`SnapshotState::apply`]),
//! - persist and announce the result when the snapshot says something changed.
//!
//! Domain rules (what an operation means, which log line it writes) live
//! entirely in `apply`.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt::Debug;

/// What [`SnapshotState::apply`] hands back to the actor.
///
/// `event: None` tells the actor nothing changed: it will neither persist nor
/// notify subscribers.
#[derive(Debug)]
pub struct Applied<O, E> {
    pub outcome: O,
    pub event: Option<E>,
}

impl<O, E> Applied<O, E> {
    /// The snapshot changed; `event` is broadcast to subscribers.
    pub fn changed(outcome: O, event: E) -> Self {
        Self {
            outcome,
            event: Some(event),
        }
    }

    /// Nothing changed.
    pub fn untouched(outcome: O) -> Self {
        Self {
            outcome,
            event: None,
        }
    }
}

/// Trait a document must implement to be owned by a `SnapshotActor`.
pub trait SnapshotState:
    Clone + Debug + Serialize + DeserializeOwned + Send + Sync + 'static
{
    /// Enum of every mutation the document accepts.
    type Op: Debug + Send;

    /// Result returned to the caller for an operation.
    type Outcome: Debug + Send;

    /// Payload broadcast to subscribers after a change.
    type Event: Clone + Debug + Send + Sync + 'static;

    /// The document used when nothing usable is persisted.
    fn seed() -> Self;

    /// Applies one operation synchronously.
    ///
    /// Runs inside the actor loop, so no other operation can interleave with it.
    fn apply(&mut self, op: Self::Op) -> Applied<Self::Outcome, Self::Event>;
}
