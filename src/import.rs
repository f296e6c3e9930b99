//! # CSV Item Import
//!
//! Bulk-creates items from a CSV file with the columns of [`ITEM_CSV_HEADERS`].
//!
//! The file is checked as a whole first: the header set must match exactly, there
//! must be at least one data row, and at least one category must exist. After that
//! every row is handled on its own. A bad row is skipped (or counted as errored if
//! the store refuses it) and the rest carry on. One `add_item` call is made per
//! accepted row.
//!
//! Row numbers in [`ImportReport::details`] are those a spreadsheet shows: the
//! header is row 1, so the first data row is row 2.

use crate::clients::InventoryClient;
use crate::inventory::InventoryError;
use crate::model::numeric::{parse_price, parse_quantity};
use crate::model::{Category, ItemDraft};
use snapshot_framework::StoreClient;
use std::io;
use thiserror::Error;
use tracing::{info, instrument, warn};

/// Column names shared by import, export and the template, in template order.
pub const ITEM_CSV_HEADERS: [&str; 7] = [
    "sku",
    "namaBarang",
    "kategoriNama",
    "jumlah",
    "hargaBeli",
    "hargaJual",
    "deskripsi",
];

#[derive(Debug, Error)]
pub enum ImportError {
    #[error("Invalid file format. Headers must be: {expected} (found: {found})")]
    HeaderMismatch { expected: String, found: String },

    #[error("The file contains no data rows")]
    NoRows,

    #[error("No categories exist yet; add a category before importing")]
    NoCategories,

    #[error("Failed to read CSV file: {0}")]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Store(#[from] InventoryError),
}

/// One data row, cells trimmed, numbers still raw.
#[derive(Debug, Clone, PartialEq)]
pub struct ImportRow {
    /// Spreadsheet row number (header is row 1).
    pub row: usize,
    pub sku: String,
    pub name: String,
    pub category_name: String,
    pub quantity: String,
    pub purchase_price: String,
    pub sale_price: String,
    pub description: String,
}

/// Outcome of an import. `details` lists one line per skipped or errored row.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ImportReport {
    pub succeeded: usize,
    pub skipped: usize,
    pub errored: usize,
    pub details: Vec<String>,
}

impl ImportReport {
    pub fn is_clean(&self) -> bool {
        self.skipped == 0 && self.errored == 0
    }
}

/// A header-only CSV operators can fill in.
pub fn import_template() -> String {
    format!("{}\n", ITEM_CSV_HEADERS.join(","))
}

/// Parses and header-checks a CSV file. Blank lines are ignored.
pub fn parse_rows<R: io::Read>(reader: R) -> Result<Vec<ImportRow>, ImportError> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(reader);

    let headers = reader.headers()?.clone();
    let mut found: Vec<&str> = headers.iter().collect();
    let mut expected = ITEM_CSV_HEADERS.to_vec();
    found.sort_unstable();
    expected.sort_unstable();
    if found != expected {
        return Err(ImportError::HeaderMismatch {
            expected: ITEM_CSV_HEADERS.join(", "),
            found: headers.iter().collect::<Vec<_>>().join(", "),
        });
    }

    let column = |name: &str| headers.iter().position(|h| h == name).unwrap_or(usize::MAX);
    let [sku, name, category, quantity, purchase, sale, description] = ITEM_CSV_HEADERS.map(column);

    let mut rows = Vec::new();
    for (index, record) in reader.records().enumerate() {
        let record = record?;
        let cell = |i: usize| record.get(i).unwrap_or("").to_string();
        rows.push(ImportRow {
            row: index + 2,
            sku: cell(sku),
            name: cell(name),
            category_name: cell(category),
            quantity: cell(quantity),
            purchase_price: cell(purchase),
            sale_price: cell(sale),
            description: cell(description),
        });
    }
    Ok(rows)
}

/// What to do with one row, decided without touching the store.
#[derive(Debug, Clone, PartialEq)]
pub enum RowPlan {
    Create(ItemDraft),
    Skip(String),
}

/// Resolves the row's category (case-insensitive) and coerces its numbers.
pub fn plan_row(row: &ImportRow, categories: &[Category]) -> RowPlan {
    if row.sku.is_empty() || row.name.is_empty() || row.category_name.is_empty() {
        return RowPlan::Skip(format!(
            "Row {}: SKU, item name or category name is empty.",
            row.row
        ));
    }

    let wanted = row.category_name.to_lowercase();
    let Some(category) = categories.iter().find(|c| c.name.to_lowercase() == wanted) else {
        return RowPlan::Skip(format!(
            "Row {}: category \"{}\" not found.",
            row.row, row.category_name
        ));
    };

    RowPlan::Create(ItemDraft {
        name: row.name.clone(),
        sku: row.sku.clone(),
        category_id: category.id.clone(),
        quantity: parse_quantity(&row.quantity),
        purchase_price: parse_price(&row.purchase_price),
        sale_price: parse_price(&row.sale_price),
        description: row.description.clone(),
        image_data: None,
    })
}

/// Imports already-parsed rows against the store's current categories.
#[instrument(skip(client, rows), fields(rows = rows.len()))]
pub async fn import_rows(
    client: &InventoryClient,
    rows: Vec<ImportRow>,
) -> Result<ImportReport, ImportError> {
    if rows.is_empty() {
        return Err(ImportError::NoRows);
    }
    let categories = client.snapshot().await?.categories;
    if categories.is_empty() {
        return Err(ImportError::NoCategories);
    }

    let mut report = ImportReport::default();
    for row in &rows {
        match plan_row(row, categories.as_slice()) {
            RowPlan::Skip(detail) => {
                warn!(row = row.row, "{detail}");
                report.skipped += 1;
                report.details.push(detail);
            }
            RowPlan::Create(draft) => match client.add_item(draft).await {
                Ok(_) => report.succeeded += 1,
                Err(e) => {
                    let detail = format!("Row {} ({}): import failed - {e}", row.row, row.sku);
                    warn!(row = row.row, "{detail}");
                    report.errored += 1;
                    report.details.push(detail);
                }
            },
        }
    }

    info!(
        succeeded = report.succeeded,
        skipped = report.skipped,
        errored = report.errored,
        "Import finished"
    );
    Ok(report)
}

/// Parses `reader` and imports every row.
pub async fn import_csv<R: io::Read>(
    client: &InventoryClient,
    reader: R,
) -> Result<ImportReport, ImportError> {
    let rows = parse_rows(reader)?;
    import_rows(client, rows).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use snapshot_framework::RecordId;

    fn categories() -> Vec<Category> {
        vec![Category {
            id: RecordId::from("cat-elk"),
            name: "Elektronik".into(),
        }]
    }

    #[test]
    fn template_is_header_only() {
        assert_eq!(
            import_template(),
            "sku,namaBarang,kategoriNama,jumlah,hargaBeli,hargaJual,deskripsi\n"
        );
        assert!(parse_rows(import_template().as_bytes()).unwrap().is_empty());
    }

    #[test]
    fn header_order_does_not_matter() {
        let csv = "namaBarang,sku,deskripsi,kategoriNama,jumlah,hargaJual,hargaBeli\n\
                   Kabel,KBL-1,Hitam,Elektronik,4,2000,1500\n";
        let rows = parse_rows(csv.as_bytes()).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].sku, "KBL-1");
        assert_eq!(rows[0].sale_price, "2000");
        assert_eq!(rows[0].row, 2);
    }

    #[test]
    fn missing_or_extra_columns_reject_the_file() {
        let missing = "sku,namaBarang,kategoriNama,jumlah,hargaBeli,hargaJual\n";
        assert!(matches!(
            parse_rows(missing.as_bytes()),
            Err(ImportError::HeaderMismatch { .. })
        ));

        let extra = "sku,namaBarang,kategoriNama,jumlah,hargaBeli,hargaJual,deskripsi,warna\n";
        assert!(matches!(
            parse_rows(extra.as_bytes()),
            Err(ImportError::HeaderMismatch { .. })
        ));
    }

    #[test]
    fn blank_lines_do_not_shift_row_numbers() {
        let csv = "sku,namaBarang,kategoriNama,jumlah,hargaBeli,hargaJual,deskripsi\n\
                   A,Satu,Elektronik,1,1,1,\n\
                   \n\
                   B,Dua,Elektronik,2,2,2,\n";
        let rows = parse_rows(csv.as_bytes()).unwrap();
        let numbers: Vec<_> = rows.iter().map(|r| r.row).collect();
        assert_eq!(numbers, [2, 3]);
    }

    #[test]
    fn plan_matches_category_case_insensitively_and_coerces_numbers() {
        let row = ImportRow {
            row: 2,
            sku: "KBL-1".into(),
            name: "Kabel".into(),
            category_name: "eLeKtRoNiK".into(),
            quantity: "abc".into(),
            purchase_price: "1500.5".into(),
            sale_price: "".into(),
            description: "Hitam".into(),
        };
        match plan_row(&row, &categories()) {
            RowPlan::Create(draft) => {
                assert_eq!(draft.category_id, RecordId::from("cat-elk"));
                assert_eq!(draft.quantity, 0);
                assert_eq!(draft.purchase_price, 1500.5);
                assert_eq!(draft.sale_price, 0.0);
            }
            other => panic!("expected Create, got {other:?}"),
        }
    }

    #[test]
    fn plan_skips_with_row_numbered_details() {
        let mut row = ImportRow {
            row: 4,
            sku: "X".into(),
            name: "Barang".into(),
            category_name: "Mainan".into(),
            quantity: "1".into(),
            purchase_price: "1".into(),
            sale_price: "1".into(),
            description: String::new(),
        };
        assert_eq!(
            plan_row(&row, &categories()),
            RowPlan::Skip("Row 4: category \"Mainan\" not found.".into())
        );

        row.sku.clear();
        assert_eq!(
            plan_row(&row, &categories()),
            RowPlan::Skip("Row 4: SKU, item name or category name is empty.".into())
        );
    }
}
