//! # Framework Errors
//!
//! Errors raised by the plumbing between a [`SnapshotClient`](crate::SnapshotClient)
//! and its [`SnapshotActor`](crate::SnapshotActor). Domain problems never travel
//! through this type: the state reports them as part of its `Outcome`.

/// Errors that can occur within the snapshot framework itself.
#[derive(Debug, thiserror::Error)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
}
