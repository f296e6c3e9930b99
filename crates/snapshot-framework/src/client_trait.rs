//! # StoreClient Trait
//!
//! Provides a common interface for domain clients, adding default `snapshot` and
//! `subscribe` methods built on top of a generic [`SnapshotClient`].

use crate::message::NoticeReceiver;
use crate::{FrameworkError, SnapshotClient, SnapshotState};
use async_trait::async_trait;

/// Trait for domain-specific clients to inherit the read side of the store.
///
/// # Example
///
/// ```rust
/// use serde::{Deserialize, Serialize};
/// use snapshot_framework::{Applied, FrameworkError, SnapshotClient, SnapshotState, StoreClient};
///
/// #[derive(Clone, Debug, Default, Serialize, Deserialize)]
/// struct Notes { lines: Vec<String> }
///
/// impl SnapshotState for Notes {
///     type Op = String;
///     type Outcome = usize;
///     type Event = String;
///     fn seed() -> Self { Self::default() }
///     fn apply(&mut self, line: String) -> Applied<usize, String> {
///         self.lines.push(line.clone());
///         Applied::changed(self.lines.len(), line)
///     }
/// }
///
/// #[derive(Debug)]
/// struct NotesError(String);
///
/// struct NotesClient { inner: SnapshotClient<Notes> }
///
/// impl StoreClient<Notes> for NotesClient {
///     type Error = NotesError;
///     fn inner(&self) -> &SnapshotClient<Notes> { &self.inner }
///     fn map_error(e: FrameworkError) -> NotesError { NotesError(e.to_string()) }
/// }
///
/// async fn usage(client: NotesClient) {
///     // snapshot() and subscribe() are provided automatically!
///     let _ = client.snapshot().await;
///     let _ = client.subscribe().await;
/// }
/// ```
#[async_trait]
pub trait StoreClient<S: SnapshotState>: Send + Sync {
    /// The domain error type.
    type Error: Send + Sync;

    /// Access the inner generic client.
    fn inner(&self) -> &SnapshotClient<S>;

    /// Map framework errors to the domain error type.
    fn map_error(e: FrameworkError) -> Self::Error;

    /// Clone of the whole current snapshot.
    #[tracing::instrument(skip(self))]
    async fn snapshot(&self) -> Result<S, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().snapshot().await.map_err(Self::map_error)
    }

    /// Receiver of every change applied from now on.
    #[tracing::instrument(skip(self))]
    async fn subscribe(&self) -> Result<NoticeReceiver<S::Event>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().subscribe().await.map_err(Self::map_error)
    }
}
