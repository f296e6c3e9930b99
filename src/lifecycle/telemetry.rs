//! # Observability & Tracing
//!
//! [`setup_tracing`] installs a `tracing-subscriber` formatter for the whole process.
//! Levels come from `RUST_LOG`.
//!
//! ## What Gets Traced
//!
//! - **Store lifecycle**: snapshot loaded or seeded, actor start and shutdown
//! - **Mutations**: one `info` line per applied change with its `revision`
//! - **Client calls**: a span per `InventoryClient` method (`add_item`, `update_many_items`, ...)
//! - **Degradation**: unreadable snapshots, failed writes and skipped import rows at `warn`
//!
//! ## Usage Examples
//!
//! ```bash
//! # Compact logs
//! RUST_LOG=info cargo run
//!
//! # Full payloads of every op and draft
//! RUST_LOG=debug cargo run
//!
//! # Only the store actor
//! RUST_LOG=snapshot_framework=debug cargo run
//! ```
//!
//! With `RUST_LOG=info` a short session reads:
//!
//! ```text
//! INFO Starting inventory store path=data/GUDANG_JAYA_DB.json
//! INFO No snapshot found, seeding key="GUDANG_JAYA_DB"
//! INFO Actor started state_type="Inventory" key="GUDANG_JAYA_DB"
//! INFO Applied state_type="Inventory" revision=1
//! INFO Shutdown state_type="Inventory" revision=1
//! ```

pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
