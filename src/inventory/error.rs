//! Error types for the inventory store.

use thiserror::Error;

/// Errors surfaced by [`InventoryClient`](crate::clients::InventoryClient).
///
/// An unknown id is not an error: it comes back as
/// [`Change::NotFound`](snapshot_framework::Change::NotFound).
#[derive(Debug, Clone, Error, PartialEq)]
pub enum InventoryError {
    /// A draft or record was rejected before reaching the store.
    #[error("Validation failed: {0}")]
    Validation(String),

    /// An error occurred while communicating with the store actor.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),

    /// The store answered with an outcome that does not belong to the request.
    #[error("Unexpected outcome: {0}")]
    UnexpectedOutcome(String),
}
