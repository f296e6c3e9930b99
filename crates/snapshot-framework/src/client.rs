//! # Generic Client
//!
//! The handle consumers use to talk to a [`SnapshotActor`](crate::SnapshotActor).

use crate::error::FrameworkError;
use crate::message::{NoticeReceiver, SnapshotRequest};
use crate::state::SnapshotState;
use tokio::sync::{mpsc, oneshot};

/// A type-safe client for a `SnapshotActor<S>`.
///
/// Holds only a channel sender, so cloning is cheap and clones can be moved into any
/// task. Every method resolves to `Result<_, FrameworkError>`; domain failures arrive
/// inside the `Ok` outcome.
pub struct SnapshotClient<S: SnapshotState> {
    sender: mpsc::Sender<SnapshotRequest<S>>,
}

// Manual impl: deriving would demand `S: Clone` on the handle for no reason.
impl<S: SnapshotState> Clone for SnapshotClient<S> {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
        }
    }
}

impl<S: SnapshotState> SnapshotClient<S> {
    pub fn new(sender: mpsc::Sender<SnapshotRequest<S>>) -> Self {
        Self { sender }
    }

    pub async fn apply(&self, op: S::Op) -> Result<S::Outcome, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(SnapshotRequest::Apply { op, respond_to })
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    pub async fn snapshot(&self) -> Result<S, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(SnapshotRequest::Read { respond_to })
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    pub async fn subscribe(&self) -> Result<NoticeReceiver<S::Event>, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(SnapshotRequest::Subscribe { respond_to })
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }
}
