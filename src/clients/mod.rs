//! Type-safe wrappers around [`SnapshotClient`](snapshot_framework::SnapshotClient).

pub mod inventory_client;

pub use inventory_client::*;
