//! Read-only projections of an [`Inventory`](crate::model::Inventory) snapshot.
//!
//! Everything here is a pure function of a snapshot the caller already holds;
//! nothing talks to the store.

pub mod dashboard;
pub mod directory;
pub mod items;
pub mod orders;

pub use dashboard::*;
pub use directory::*;
pub use items::*;
pub use orders::*;
