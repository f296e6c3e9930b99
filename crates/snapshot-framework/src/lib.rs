//! # Snapshot Framework
//!
//! Building blocks for a single-owner document store on top of the **Actor Model**:
//! one Tokio task exclusively owns a whole document (the *snapshot*), applies
//! mutations to it one at a time and writes the entire document to a key/value
//! *slot* after every change.
//!
//! ## Why one actor per document?
//!
//! A document made of several collections often needs mutations that touch more than
//! one of them at once (a record change plus an audit entry, a bulk update plus a
//! summary). Giving the whole document to one actor makes every such mutation atomic
//! with respect to every other, with no locks and no cross-actor coordination.
//! Persisting the whole snapshot keeps the storage format trivial: one JSON value
//! under one key.
//!
//! **Further Reading**:
//! - [Actors in Rust](https://ryhl.io/blog/actors-with-tokio/) - Practical guide to implementing actors with Tokio
//!
//! ## Architecture Overview
//!
//! 1. **Record Layer** ([`Record`], [`Collection`], [`Change`]) - ordered collections of
//!    id-carrying records with CRUD primitives that report what happened.
//! 2. **State Layer** ([`SnapshotState`]) - your document and its `apply` function.
//! 3. **Runtime Layer** ([`SnapshotActor`]) - message processing, persistence through a
//!    [`SnapshotSlot`], change notices.
//! 4. **Interface Layer** ([`SnapshotClient`], [`StoreClient`]) - type-safe communication.
//!
//! ## Example
//!
//! ```rust
//! use serde::{Deserialize, Serialize};
//! use snapshot_framework::{
//!     Applied, Change, Collection, MemorySlot, Record, RecordId, SnapshotActor, SnapshotSlot,
//!     SnapshotState,
//! };
//!
//! #[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
//! struct Task { id: RecordId, title: String }
//!
//! impl Record for Task {
//!     type Draft = String;
//!     fn id(&self) -> &RecordId { &self.id }
//!     fn from_draft(id: RecordId, title: String) -> Self { Self { id, title } }
//! }
//!
//! #[derive(Clone, Debug, Default, Serialize, Deserialize)]
//! struct Board { tasks: Collection<Task> }
//!
//! #[derive(Debug)]
//! enum BoardOp { Add(String), Remove(RecordId) }
//!
//! impl SnapshotState for Board {
//!     type Op = BoardOp;
//!     type Outcome = Change<Task>;
//!     type Event = String;
//!
//!     fn seed() -> Self { Self::default() }
//!
//!     fn apply(&mut self, op: BoardOp) -> Applied<Change<Task>, String> {
//!         match op {
//!             BoardOp::Add(title) => {
//!                 let task = self.tasks.insert(title);
//!                 let event = format!("added {}", task.title);
//!                 Applied::changed(Change::Created(task), event)
//!             }
//!             BoardOp::Remove(id) => match self.tasks.remove(&id) {
//!                 Change::Deleted(task) => {
//!                     let event = format!("removed {}", task.title);
//!                     Applied::changed(Change::Deleted(task), event)
//!                 }
//!                 other => Applied::untouched(other),
//!             },
//!         }
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let slot = MemorySlot::new("BOARD");
//!     let (actor, client) = SnapshotActor::<Board>::new(10, slot.clone(), 16);
//!     tokio::spawn(actor.run());
//!
//!     let created = client.apply(BoardOp::Add("write docs".into())).await.unwrap();
//!     let id = created.record().unwrap().id.clone();
//!
//!     assert!(client.apply(BoardOp::Remove(id.clone())).await.unwrap().is_applied());
//!     assert!(!client.apply(BoardOp::Remove(id)).await.unwrap().is_applied());
//!
//!     // The slot holds the latest snapshot.
//!     assert_eq!(slot.read().unwrap().as_deref(), Some("{\"tasks\":[]}"));
//! }
//! ```
//!
//! ## Concurrency Model
//!
//! - The actor runs in its own Tokio task and handles messages **sequentially**.
//! - Clients are cheap clones of a channel sender; any number of tasks may share one.
//! - Subscribers get a `tokio::sync::broadcast` receiver; a subscriber that falls behind
//!   by more than the configured capacity misses the oldest notices.
//!
//! ## Persistence Model
//!
//! - The slot is read once, in [`SnapshotActor::new`]. Missing or corrupt data falls back
//!   to [`SnapshotState::seed`], logged with `warn!` and never returned as an error.
//! - The snapshot is written once when the actor starts and after every change.
//!   Write failures are logged and the actor keeps serving from memory.
//! - Nothing coordinates two processes sharing one slot: the last writer wins.
//!
//! ## Testing
//!
//! See the [`mock`] module for [`MockClient`](mock::MockClient), raw channel helpers and
//! a [`FailingSlot`](mock::FailingSlot).

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod collection;
pub mod error;
pub mod message;
pub mod mock;
pub mod record;
pub mod slot;
pub mod state;

// Re-export core types for convenience
pub use actor::SnapshotActor;
pub use client::SnapshotClient;
pub use client_trait::StoreClient;
pub use collection::{Change, Collection};
pub use error::FrameworkError;
pub use message::{ChangeNotice, NoticeReceiver, Response, SnapshotRequest};
pub use record::{Record, RecordId};
pub use slot::{FileSlot, MemorySlot, SnapshotSlot, StorageError};
pub use state::{Applied, SnapshotState};
