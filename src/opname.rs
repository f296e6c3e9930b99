//! # Stock Opname
//!
//! A physical stock count. [`OpnameSession::start`] stages every item with its
//! physical count equal to the system count. The operator overwrites the physical
//! counts, and [`OpnameSession::finish`] sends only the rows that differ, in a
//! single `update_many_items` call.
//!
//! The session works on a copy of the items taken at `start`. Changes made by
//! others in the meantime are overwritten for the rows that get adjusted.

use crate::clients::InventoryClient;
use crate::inventory::{BulkSummary, InventoryError};
use crate::model::numeric::parse_quantity;
use crate::model::{Inventory, Item, QuantityUpdate};
use crate::views::ItemFilter;
use snapshot_framework::RecordId;
use tracing::{debug, info, instrument};

/// One counted item.
#[derive(Debug, Clone, PartialEq)]
pub struct OpnameRow {
    /// The item as it was when the session started.
    pub item: Item,
    pub physical_quantity: u32,
}

impl OpnameRow {
    pub fn system_quantity(&self) -> u32 {
        self.item.quantity
    }

    /// `physical - system`; negative when stock went missing.
    pub fn delta(&self) -> i64 {
        i64::from(self.physical_quantity) - i64::from(self.system_quantity())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpnameOutcome {
    /// Every physical count matched; the store was not called.
    NoChanges,
    Applied(BulkSummary),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct OpnameSession {
    rows: Vec<OpnameRow>,
}

impl OpnameSession {
    pub fn start(inventory: &Inventory) -> Self {
        let rows = inventory
            .items
            .iter()
            .map(|item| OpnameRow {
                item: item.clone(),
                physical_quantity: item.quantity,
            })
            .collect();
        Self { rows }
    }

    pub fn rows(&self) -> &[OpnameRow] {
        &self.rows
    }

    /// Records the physical count of one item. Returns `false` for an unknown id.
    pub fn set_physical(&mut self, id: &RecordId, quantity: u32) -> bool {
        match self.rows.iter_mut().find(|row| &row.item.id == id) {
            Some(row) => {
                row.physical_quantity = quantity;
                true
            }
            None => false,
        }
    }

    /// Like [`OpnameSession::set_physical`] for raw form input; unusable input counts as `0`.
    pub fn set_physical_input(&mut self, id: &RecordId, input: &str) -> bool {
        self.set_physical(id, parse_quantity(input))
    }

    /// Rows the item-list filter lets through, in item order.
    pub fn visible_rows(&self, filter: &ItemFilter) -> Vec<&OpnameRow> {
        self.rows
            .iter()
            .filter(|row| filter.matches(&row.item))
            .collect()
    }

    /// The updates `finish` would send.
    pub fn adjustments(&self) -> Vec<QuantityUpdate> {
        self.rows
            .iter()
            .filter(|row| row.delta() != 0)
            .map(|row| QuantityUpdate {
                id: row.item.id.clone(),
                quantity: row.physical_quantity,
            })
            .collect()
    }

    #[instrument(skip(self, client), fields(rows = self.rows.len()))]
    pub async fn finish(&self, client: &InventoryClient) -> Result<OpnameOutcome, InventoryError> {
        let updates = self.adjustments();
        if updates.is_empty() {
            info!("No differences counted");
            return Ok(OpnameOutcome::NoChanges);
        }

        debug!(?updates, "Submitting adjustments");
        let summary = client.update_many_items(updates).await?;
        info!(adjusted = summary.applied, "Stock opname submitted");
        Ok(OpnameOutcome::Applied(summary))
    }
}
