use crate::model::lenient::or_default;
use serde::{Deserialize, Serialize};
use snapshot_framework::{Record, RecordId};

/// Label shown wherever an item points at a category that no longer exists.
pub const MISSING_CATEGORY: &str = "N/A";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    #[serde(default, deserialize_with = "or_default")]
    pub id: RecordId,
    #[serde(default, deserialize_with = "or_default")]
    pub name: String,
}

/// Payload for creating a new category.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryDraft {
    pub name: String,
}

impl CategoryDraft {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Record for Category {
    type Draft = CategoryDraft;

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn from_draft(id: RecordId, draft: CategoryDraft) -> Self {
        Self {
            id,
            name: draft.name,
        }
    }
}
