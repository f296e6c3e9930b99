use chrono::NaiveDate;
use rand::Rng;
use serde::{Deserialize, Serialize};
use snapshot_framework::{Record, RecordId};
use std::fmt;

use crate::model::lenient::{lenient_date, or_default};
use crate::model::numeric::lenient_quantity;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderType {
    #[default]
    Incoming,
    Outgoing,
}

impl fmt::Display for OrderType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            OrderType::Incoming => "Incoming",
            OrderType::Outgoing => "Outgoing",
        })
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderStatus {
    #[default]
    Pending,
    Processing,
    Shipped,
    Delivered,
    Cancelled,
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::Processing => "Processing",
            OrderStatus::Shipped => "Shipped",
            OrderStatus::Delivered => "Delivered",
            OrderStatus::Cancelled => "Cancelled",
        })
    }
}

/// A purchase (incoming) or sale (outgoing) order.
///
/// `items` is free text and does not reference [`Item`](crate::model::Item) records;
/// changing an order's status never touches stock.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    #[serde(default, deserialize_with = "or_default")]
    pub id: RecordId,
    /// Display code such as `#48213`. Random, so not guaranteed unique.
    #[serde(default, deserialize_with = "or_default")]
    pub order_id: String,
    #[serde(default, deserialize_with = "lenient_date")]
    pub date: NaiveDate,
    #[serde(rename = "type", default, deserialize_with = "or_default")]
    pub kind: OrderType,
    #[serde(default, deserialize_with = "or_default")]
    pub status: OrderStatus,
    #[serde(default, deserialize_with = "or_default")]
    pub items: String,
    #[serde(default, deserialize_with = "lenient_quantity")]
    pub quantity: u32,
}

/// Payload for creating a new order. The display code is assigned on creation.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderDraft {
    pub date: NaiveDate,
    pub kind: OrderType,
    pub status: OrderStatus,
    pub items: String,
    pub quantity: u32,
}

/// Draws a display code in `#10000..=#99999`.
pub fn generate_order_code() -> String {
    let n: u32 = rand::thread_rng().gen_range(10000..=99999);
    format!("#{n}")
}

impl Record for Order {
    type Draft = OrderDraft;

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn from_draft(id: RecordId, draft: OrderDraft) -> Self {
        Self {
            id,
            order_id: generate_order_code(),
            date: draft.date,
            kind: draft.kind,
            status: draft.status,
            items: draft.items,
            quantity: draft.quantity,
        }
    }
}
