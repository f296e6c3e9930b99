use crate::model::lenient::or_default;
use serde::{Deserialize, Serialize};
use snapshot_framework::{Record, RecordId};
use std::fmt;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SupplierStatus {
    #[default]
    Active,
    Inactive,
    #[serde(rename = "On Hold")]
    OnHold,
}

impl SupplierStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SupplierStatus::Active => "Active",
            SupplierStatus::Inactive => "Inactive",
            SupplierStatus::OnHold => "On Hold",
        }
    }
}

impl fmt::Display for SupplierStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A vendor. Informational only: nothing else in the store references suppliers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Supplier {
    #[serde(default, deserialize_with = "or_default")]
    pub id: RecordId,
    #[serde(default, deserialize_with = "or_default")]
    pub name: String,
    #[serde(default, deserialize_with = "or_default")]
    pub contact_person: String,
    #[serde(default, deserialize_with = "or_default")]
    pub phone: String,
    #[serde(default, deserialize_with = "or_default")]
    pub email: String,
    #[serde(default, deserialize_with = "or_default")]
    pub address: String,
    #[serde(default, deserialize_with = "or_default")]
    pub status: SupplierStatus,
}

/// Payload for creating a new supplier.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SupplierDraft {
    pub name: String,
    pub contact_person: String,
    pub phone: String,
    pub email: String,
    pub address: String,
    pub status: SupplierStatus,
}

impl Record for Supplier {
    type Draft = SupplierDraft;

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn from_draft(id: RecordId, draft: SupplierDraft) -> Self {
        Self {
            id,
            name: draft.name,
            contact_person: draft.contact_person,
            phone: draft.phone,
            email: draft.email,
            address: draft.address,
            status: draft.status,
        }
    }
}
