//! CSV export of selected items, in the same column layout the importer reads.

use crate::clients::InventoryClient;
use crate::import::ITEM_CSV_HEADERS;
use crate::inventory::InventoryError;
use crate::model::Inventory;
use crate::views::category_name;
use snapshot_framework::{RecordId, StoreClient};
use std::io;
use std::path::Path;
use thiserror::Error;
use tracing::{info, instrument};

/// File name suggested for downloads.
pub const EXPORT_FILE_NAME: &str = "export_selected_items.csv";

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Select the items to export first")]
    NothingSelected,

    #[error("Failed to write CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("CSV output is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    #[error(transparent)]
    Store(#[from] InventoryError),
}

/// Writes the selected items to `writer`, in collection order.
///
/// Ids that match no item are ignored. Image data is never exported.
pub fn write_items<W: io::Write>(
    inventory: &Inventory,
    ids: &[RecordId],
    writer: W,
) -> Result<usize, ExportError> {
    let mut csv = csv::Writer::from_writer(writer);
    csv.write_record(ITEM_CSV_HEADERS)?;

    let mut written = 0;
    for item in inventory.items.iter().filter(|i| ids.contains(&i.id)) {
        let quantity = item.quantity.to_string();
        let purchase_price = item.purchase_price.to_string();
        let sale_price = item.sale_price.to_string();
        csv.write_record([
            item.sku.as_str(),
            item.name.as_str(),
            category_name(&inventory.categories, &item.category_id),
            quantity.as_str(),
            purchase_price.as_str(),
            sale_price.as_str(),
            item.description.as_str(),
        ])?;
        written += 1;
    }
    csv.flush()?;
    Ok(written)
}

/// Renders the selected items as a CSV string.
pub fn export_items(inventory: &Inventory, ids: &[RecordId]) -> Result<String, ExportError> {
    let mut buffer = Vec::new();
    write_items(inventory, ids, &mut buffer)?;
    Ok(String::from_utf8(buffer)?)
}

/// Exports the current selection and records the export in the activity log.
///
/// The log line counts the selection, as the operator saw it.
#[instrument(skip(client, ids), fields(selected = ids.len()))]
pub async fn export_selected(
    client: &InventoryClient,
    ids: &[RecordId],
) -> Result<String, ExportError> {
    if ids.is_empty() {
        return Err(ExportError::NothingSelected);
    }
    let inventory = client.snapshot().await?;
    let csv = export_items(&inventory, ids)?;
    client
        .add_log(format!("Exported {} item(s) to CSV.", ids.len()))
        .await?;
    info!("Export finished");
    Ok(csv)
}

/// [`export_selected`] straight into a file.
pub async fn export_selected_to(
    client: &InventoryClient,
    ids: &[RecordId],
    path: impl AsRef<Path>,
) -> Result<(), ExportError> {
    let csv = export_selected(client, ids).await?;
    tokio::fs::write(path, csv).await?;
    Ok(())
}
