//! # System Lifecycle
//!
//! Starting and stopping the store, plus process-wide telemetry.
//!
//! ## Startup
//!
//! [`InventorySystem::start`] builds the actor from a [`StoreConfig`](crate::config::StoreConfig):
//! the snapshot is read from `<data_dir>/<storage_key>.json` (or seeded), the actor is
//! spawned and its client is exposed as `system.inventory`.
//!
//! ## Graceful Shutdown
//!
//! 1. **Drop all clients** - closes the sender side of the request channel
//! 2. **Actor detects closure** - `receiver.recv()` returns `None`
//! 3. **Await completion** - [`InventorySystem::shutdown`] joins the actor task
//!
//! Requests already queued are processed (and persisted) before the actor exits.
//!
//! ## Observability
//!
//! Call [`setup_tracing`] once at the start of `main`. See the [`telemetry`] module.

pub mod inventory_system;
pub mod telemetry;

pub use inventory_system::*;
pub use telemetry::*;
