//! # Generic Messages
//!
//! Messages exchanged between a [`SnapshotClient`](crate::SnapshotClient) and the
//! [`SnapshotActor`](crate::SnapshotActor), plus the notice broadcast after every
//! change.

use crate::error::FrameworkError;
use crate::state::SnapshotState;
use tokio::sync::{broadcast, oneshot};

/// Type alias for the one-shot response channel used by the actor.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Receiver half handed out by `subscribe`.
pub type NoticeReceiver<E> = broadcast::Receiver<ChangeNotice<E>>;

/// Broadcast to subscribers after each applied change.
///
/// `revision` increases by one per change within the running process.
#[derive(Debug, Clone, PartialEq)]
pub struct ChangeNotice<E> {
    pub revision: u64,
    pub event: E,
}

/// Request sent to the actor.
///
/// - **Apply**: run one mutation against the snapshot.
/// - **Read**: clone the current snapshot.
/// - **Subscribe**: obtain a receiver of [`ChangeNotice`]s.
#[derive(Debug)]
pub enum SnapshotRequest<S: SnapshotState> {
    Apply {
        op: S::Op,
        respond_to: Response<S::Outcome>,
    },
    Read {
        respond_to: Response<S>,
    },
    Subscribe {
        respond_to: Response<NoticeReceiver<S::Event>>,
    },
}
