//! The inventory store: snapshot operations, seed data, validation and the actor
//! that owns it all.

pub mod current_user;
pub mod error;
pub mod ops;
pub mod seed;
mod state;
pub mod validate;

pub use current_user::*;
pub use error::*;
pub use ops::*;
pub use validate::Validate;

use crate::clients::InventoryClient;
use crate::config::StoreConfig;
use crate::model::Inventory;
use snapshot_framework::{FileSlot, SnapshotActor, SnapshotSlot};

/// Creates the inventory actor over the configured snapshot file, and its client.
pub fn new(config: &StoreConfig) -> (SnapshotActor<Inventory>, InventoryClient) {
    let slot = FileSlot::new(&config.data_dir, config.storage_key.clone());
    with_slot(config, slot)
}

/// Same as [`new`] but over any slot, e.g. a `MemorySlot` in tests.
pub fn with_slot(
    config: &StoreConfig,
    slot: impl SnapshotSlot,
) -> (SnapshotActor<Inventory>, InventoryClient) {
    let (actor, generic_client) =
        SnapshotActor::new(config.channel_capacity, slot, config.notice_capacity);
    (actor, InventoryClient::new(generic_client))
}
