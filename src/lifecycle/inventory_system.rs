use crate::clients::InventoryClient;
use crate::config::StoreConfig;
use snapshot_framework::SnapshotSlot;
use tracing::{error, info};

/// The runtime orchestrator: starts the store actor and owns its task handle.
///
/// Construct it once at process start and hand clones of [`InventorySystem::inventory`]
/// to every consumer. There is no global instance.
///
/// # Example
///
/// ```no_run
/// # async fn demo() -> Result<(), String> {
/// use gudang::config::StoreConfig;
/// use gudang::lifecycle::InventorySystem;
/// use gudang::model::CategoryDraft;
///
/// let system = InventorySystem::start(&StoreConfig::default());
/// system
///     .inventory
///     .add_category(CategoryDraft::new("Mainan"))
///     .await
///     .map_err(|e| e.to_string())?;
/// system.shutdown().await
/// # }
/// ```
pub struct InventorySystem {
    /// Client for the inventory store actor.
    pub inventory: InventoryClient,

    handle: tokio::task::JoinHandle<()>,
}

impl InventorySystem {
    /// Loads (or seeds) the snapshot file named by `config` and spawns the actor.
    pub fn start(config: &StoreConfig) -> Self {
        info!(path = %config.snapshot_path().display(), "Starting inventory store");
        let (actor, inventory) = crate::inventory::new(config);
        let handle = tokio::spawn(actor.run());
        Self { inventory, handle }
    }

    /// Same as [`InventorySystem::start`] over an explicit slot.
    pub fn start_with_slot(config: &StoreConfig, slot: impl SnapshotSlot) -> Self {
        info!(key = slot.key(), "Starting inventory store");
        let (actor, inventory) = crate::inventory::with_slot(config, slot);
        let handle = tokio::spawn(actor.run());
        Self { inventory, handle }
    }

    /// Drops the system's client and waits for the actor to finish.
    ///
    /// The actor only stops once every clone of the client is gone, so consumers
    /// must release theirs first or this waits for them.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down system...");

        // Closing the last sender makes the actor's `recv()` return `None`.
        drop(self.inventory);

        if let Err(e) = self.handle.await {
            error!("Actor task failed: {:?}", e);
            return Err(format!("Actor task failed: {:?}", e));
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
