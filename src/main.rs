//! Demo session against the inventory store.
//!
//! Loads the configuration, opens (or seeds) the snapshot file and walks through
//! the main workflows: adding an item, importing a CSV, a stock count, an export
//! and the dashboard.

use gudang::config::StoreConfig;
use gudang::export::export_selected;
use gudang::import::import_csv;
use gudang::labels::LabelSheet;
use gudang::lifecycle::{setup_tracing, InventorySystem};
use gudang::model::ItemDraft;
use gudang::opname::{OpnameOutcome, OpnameSession};
use gudang::views::DashboardMetrics;
use snapshot_framework::StoreClient;
use tracing::{error, info, Instrument};

const DEMO_CSV: &str = "\
sku,namaBarang,kategoriNama,jumlah,hargaBeli,hargaJual,deskripsi
ATK-001,Pulpen Hitam,Alat Tulis,120,2500,3500,Isi 12
,Tanpa SKU,Alat Tulis,5,1000,1500,
MNM-010,Teh Botol,minuman,48,3000,4500,Dingin
MKN-404,Roti Tawar,Roti,10,8000,12000,
";

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();

    let config = StoreConfig::load().map_err(|e| e.to_string())?;
    info!(data_dir = %config.data_dir.display(), "Starting Gudang demo");

    let system = InventorySystem::start(&config);
    let inventory = &system.inventory;

    let mut notices = inventory.subscribe().await.map_err(|e| e.to_string())?;
    let watcher = tokio::spawn(async move {
        while let Ok(notice) = notices.recv().await {
            info!(revision = notice.revision, message = %notice.event.message, "Change observed");
        }
    });

    let span = tracing::info_span!("item_creation");
    let item = async {
        let snapshot = inventory.snapshot().await.map_err(|e| e.to_string())?;
        let category = snapshot
            .categories
            .first()
            .map(|c| c.id.clone())
            .ok_or_else(|| "no categories available".to_string())?;
        let draft = ItemDraft::new("Kabel HDMI 2m", "ELK-HDMI-2", category)
            .with_quantity(20)
            .with_prices(25_000.0, 40_000.0);
        inventory.add_item(draft).await.map_err(|e| e.to_string())
    }
    .instrument(span)
    .await?;
    info!(id = %item.id, sku = %item.sku, "Item created");

    let span = tracing::info_span!("csv_import");
    match import_csv(inventory, DEMO_CSV.as_bytes()).instrument(span).await {
        Ok(report) => info!(
            succeeded = report.succeeded,
            skipped = report.skipped,
            errored = report.errored,
            "Import report"
        ),
        Err(e) => error!(error = %e, "Import rejected"),
    }

    let span = tracing::info_span!("stock_opname");
    let outcome = async {
        let snapshot = inventory.snapshot().await?;
        let mut session = OpnameSession::start(&snapshot);
        session.set_physical(&item.id, 18);
        session.finish(inventory).await
    }
    .instrument(span)
    .await
    .map_err(|e| e.to_string())?;
    match outcome {
        OpnameOutcome::NoChanges => info!("Stock count matched the system"),
        OpnameOutcome::Applied(summary) => info!(adjusted = summary.applied, "Stock adjusted"),
    }

    let csv = export_selected(inventory, &[item.id.clone()])
        .await
        .map_err(|e| e.to_string())?;
    info!(bytes = csv.len(), "Exported selection");

    let snapshot = inventory.snapshot().await.map_err(|e| e.to_string())?;
    if let Some(current) = snapshot.items.get(&item.id) {
        let sheet = LabelSheet::for_item(current, 2);
        info!(title = %sheet.document_title(), labels = sheet.labels().len(), "Label sheet ready");
    }

    let metrics = DashboardMetrics::compute_now(&snapshot, config.low_stock_threshold);
    info!(
        total_stock = metrics.total_stock,
        inventory_value = metrics.inventory_value,
        low_stock = metrics.low_stock_items,
        "Dashboard"
    );
    for entry in &metrics.recent_activity {
        info!(at = %entry.timestamp, "{}", entry.message);
    }

    system.shutdown().await?;
    watcher.abort();

    info!("Demo completed successfully");
    Ok(())
}
