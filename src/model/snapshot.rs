use crate::model::lenient::{lenient_records, or_default};
use crate::model::{ActivityLogEntry, Category, Item, Order, Supplier, User};
use serde::{Deserialize, Serialize};
use snapshot_framework::Collection;

/// The whole persisted document.
///
/// Every collection keeps insertion order except `activity_log`, which is kept
/// newest-first by prepending. `current_user` is only ever refreshed by a user
/// update with a matching id; see [`CurrentUser`](crate::inventory::CurrentUser)
/// for how the active operator is resolved.
///
/// Decoding is tolerant: unreadable fields fall back to defaults and entries
/// that are not records at all are dropped, so one bad record never costs the
/// rest of the document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Inventory {
    #[serde(default, deserialize_with = "lenient_records")]
    pub items: Collection<Item>,
    #[serde(default, deserialize_with = "lenient_records")]
    pub categories: Collection<Category>,
    #[serde(default, deserialize_with = "lenient_records")]
    pub suppliers: Collection<Supplier>,
    #[serde(default, deserialize_with = "lenient_records")]
    pub orders: Collection<Order>,
    #[serde(default, deserialize_with = "lenient_records")]
    pub users: Collection<User>,
    #[serde(default, deserialize_with = "lenient_records")]
    pub activity_log: Collection<ActivityLogEntry>,
    #[serde(default, deserialize_with = "or_default")]
    pub current_user: Option<User>,
}
