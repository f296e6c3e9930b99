//! Printable barcode labels for a single item.
//!
//! Only the layout is produced here. Drawing the barcode glyphs is up to
//! whatever renders the sheet.

use crate::model::Item;
use std::fmt::Write;

/// Barcode value for items without a SKU.
pub const FALLBACK_BARCODE: &str = "NO-SKU";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Label {
    pub name: String,
    pub barcode: String,
    pub sku_text: String,
}

/// Most labels printed for one item in a single job.
pub const MAX_LABEL_COPIES: usize = 500;

/// `copies` identical labels for one item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelSheet {
    sku: String,
    labels: Vec<Label>,
}

/// Parses the copies field of the print form. Anything below 1 or unparsable is 1;
/// anything above [`MAX_LABEL_COPIES`] is capped.
pub fn copies_from_input(input: &str) -> usize {
    let trimmed = input.trim();
    match trimmed.parse::<i64>() {
        Ok(n) if n > 0 => usize::try_from(n)
            .map_or(MAX_LABEL_COPIES, |n| n.min(MAX_LABEL_COPIES)),
        // Digits too long for an i64 are still a request for "many"
        Err(_) if !trimmed.is_empty() && trimmed.bytes().all(|b| b.is_ascii_digit()) => {
            MAX_LABEL_COPIES
        }
        _ => 1,
    }
}

impl LabelSheet {
    /// `copies` is clamped to `1..=MAX_LABEL_COPIES`.
    pub fn for_item(item: &Item, copies: usize) -> Self {
        let label = Label {
            name: item.name.clone(),
            barcode: if item.sku.is_empty() {
                FALLBACK_BARCODE.to_string()
            } else {
                item.sku.clone()
            },
            sku_text: if item.sku.is_empty() {
                "N/A".to_string()
            } else {
                item.sku.clone()
            },
        };
        Self {
            sku: item.sku.clone(),
            labels: vec![label; copies.clamp(1, MAX_LABEL_COPIES)],
        }
    }

    pub fn labels(&self) -> &[Label] {
        &self.labels
    }

    /// Title of the print job, also used as the PDF file name.
    pub fn document_title(&self) -> String {
        if self.sku.is_empty() {
            "Label_item".to_string()
        } else {
            format!("Label_{}", self.sku)
        }
    }

    /// One block per label, separated by form feeds.
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        for (i, label) in self.labels.iter().enumerate() {
            if i > 0 {
                out.push('\u{c}');
            }
            // Writing into a String cannot fail.
            let _ = writeln!(out, "{}", label.name);
            let _ = writeln!(out, "[{}]", label.barcode);
            let _ = writeln!(out, "SKU: {}", label.sku_text);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ItemDraft;
    use snapshot_framework::{Record, RecordId};

    fn item(sku: &str) -> Item {
        Item::from_draft(
            RecordId::from("i1"),
            ItemDraft::new("Buku Tulis", sku, RecordId::from("c1")),
        )
    }

    #[test]
    fn copies_input_never_drops_below_one() {
        assert_eq!(copies_from_input("4"), 4);
        assert_eq!(copies_from_input("0"), 1);
        assert_eq!(copies_from_input("-2"), 1);
        assert_eq!(copies_from_input("banyak"), 1);
        assert_eq!(LabelSheet::for_item(&item("B-1"), 0).labels().len(), 1);
    }

    #[test]
    fn copies_are_capped() {
        assert_eq!(copies_from_input("500"), 500);
        assert_eq!(copies_from_input("501"), MAX_LABEL_COPIES);
        assert_eq!(copies_from_input("999999999999"), MAX_LABEL_COPIES);
        assert_eq!(copies_from_input("99999999999999999999999"), MAX_LABEL_COPIES);
        assert_eq!(
            LabelSheet::for_item(&item("B-1"), usize::MAX).labels().len(),
            MAX_LABEL_COPIES
        );
    }

    #[test]
    fn missing_sku_uses_fallbacks() {
        let sheet = LabelSheet::for_item(&item(""), 2);
        assert_eq!(sheet.labels()[0].barcode, "NO-SKU");
        assert_eq!(sheet.labels()[0].sku_text, "N/A");
        assert_eq!(sheet.document_title(), "Label_item");
    }

    #[test]
    fn renders_one_block_per_copy() {
        let sheet = LabelSheet::for_item(&item("BK-01"), 3);
        assert_eq!(sheet.document_title(), "Label_BK-01");
        let text = sheet.render_text();
        assert_eq!(text.matches("[BK-01]").count(), 3);
        assert_eq!(text.split('\u{c}').count(), 3);
        assert!(text.starts_with("Buku Tulis\n[BK-01]\nSKU: BK-01\n"));
    }
}
