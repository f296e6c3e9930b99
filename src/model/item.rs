use crate::model::lenient::or_default;
use crate::model::numeric::{lenient_price, lenient_quantity};
use serde::{Deserialize, Serialize};
use snapshot_framework::{Record, RecordId};

/// A stock-keeping unit in the catalog.
///
/// `quantity` is the only record of stock on hand; there is no movement ledger.
/// `category_id` is a loose reference: deleting the category leaves it dangling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    #[serde(default, deserialize_with = "or_default")]
    pub id: RecordId,
    #[serde(default, deserialize_with = "or_default")]
    pub name: String,
    #[serde(default, deserialize_with = "or_default")]
    pub sku: String,
    #[serde(default, deserialize_with = "or_default")]
    pub category_id: RecordId,
    #[serde(default, deserialize_with = "lenient_quantity")]
    pub quantity: u32,
    #[serde(default, deserialize_with = "lenient_price")]
    pub purchase_price: f64,
    #[serde(default, deserialize_with = "lenient_price")]
    pub sale_price: f64,
    #[serde(default, deserialize_with = "or_default")]
    pub description: String,
    #[serde(
        default,
        deserialize_with = "or_default",
        skip_serializing_if = "Option::is_none"
    )]
    pub image_data: Option<String>,
}

/// Payload for creating a new item.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemDraft {
    pub name: String,
    pub sku: String,
    pub category_id: RecordId,
    pub quantity: u32,
    pub purchase_price: f64,
    pub sale_price: f64,
    pub description: String,
    pub image_data: Option<String>,
}

impl ItemDraft {
    pub fn new(name: impl Into<String>, sku: impl Into<String>, category_id: RecordId) -> Self {
        Self {
            name: name.into(),
            sku: sku.into(),
            category_id,
            ..Self::default()
        }
    }

    pub fn with_quantity(mut self, quantity: u32) -> Self {
        self.quantity = quantity;
        self
    }

    pub fn with_prices(mut self, purchase_price: f64, sale_price: f64) -> Self {
        self.purchase_price = purchase_price;
        self.sale_price = sale_price;
        self
    }
}

/// One entry of a bulk quantity update.
#[derive(Debug, Clone, PartialEq)]
pub struct QuantityUpdate {
    pub id: RecordId,
    pub quantity: u32,
}

impl Record for Item {
    type Draft = ItemDraft;

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn from_draft(id: RecordId, draft: ItemDraft) -> Self {
        Self {
            id,
            name: draft.name,
            sku: draft.sku,
            category_id: draft.category_id,
            quantity: draft.quantity,
            purchase_price: draft.purchase_price,
            sale_price: draft.sale_price,
            description: draft.description,
            image_data: draft.image_data,
        }
    }
}
