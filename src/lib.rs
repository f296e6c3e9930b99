//! # Gudang
//!
//! > **A single-warehouse inventory store behind one actor.**
//!
//! The whole warehouse (items, categories, suppliers, orders, users and the activity
//! log) is one [`Inventory`](model::Inventory) snapshot owned by a single
//! `SnapshotActor` task. Every change is applied in order, written to the snapshot
//! slot and announced to subscribers with a revision number.
//!
//! ## 🏗️ Design
//!
//! ### One snapshot, one writer
//! Mutations queue on a bounded channel and are applied one at a time, so there are
//! no locks around the data. Readers get a clone of the whole snapshot.
//!
//! ### Every change leaves a trace
//! Each applied mutation prepends a human-readable line to the activity log. Unknown
//! ids are not errors: the store answers `Change::NotFound` and logs nothing.
//!
//! ### Storage never stops the store
//! An unreadable snapshot is replaced by seed data and a failed write is only a
//! `warn!`; the store keeps serving from memory.
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Data ([`model`])
//! Plain records and their creation drafts.
//!
//! ### 2. The Store ([`inventory`])
//! Operations, seed data, validation and the actor constructor.
//! - **Key items**: [`InventoryOp`](inventory::InventoryOp), [`Validate`](inventory::Validate),
//!   [`CurrentUser`](inventory::CurrentUser).
//!
//! ### 3. The Interface ([`clients`])
//! [`InventoryClient`](clients::InventoryClient) validates drafts and hides the message passing.
//!
//! ### 4. The Orchestrator ([`lifecycle`]) and [`config`]
//! [`InventorySystem`](lifecycle::InventorySystem) starts and stops the store from a
//! [`StoreConfig`](config::StoreConfig).
//!
//! ### 5. Workflows
//! - [`import`]: CSV import with a per-row report.
//! - [`export`]: CSV export of a selection.
//! - [`opname`]: physical stock counts submitted as one bulk update.
//! - [`labels`]: barcode label sheets.
//! - [`views`]: filters and dashboard metrics over a snapshot.
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! # Run the demo with info logs
//! RUST_LOG=info cargo run
//!
//! # Keep the snapshot somewhere else
//! GUDANG__STORE__DATA_DIR=/tmp/gudang cargo run
//! ```

pub mod clients;
pub mod config;
pub mod export;
pub mod import;
pub mod inventory;
pub mod labels;
pub mod lifecycle;
pub mod model;
pub mod opname;
pub mod views;
