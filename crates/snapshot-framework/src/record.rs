//! # Record Trait
//!
//! A [`Record`] is one element of a [`Collection`](crate::Collection): a plain,
//! serializable struct that carries a store-assigned [`RecordId`]. The record
//! type pairs itself with a `Draft` (the caller-supplied payload without an id),
//! so the only way to obtain a fresh record is through the collection that
//! mints the id.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Debug, Display};
use uuid::Uuid;

/// Opaque, globally unique identifier of a record.
///
/// Rendered as a hyphenated UUID v4 string and serialized transparently, so a
/// persisted id is just a JSON string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(String);

impl RecordId {
    /// Mints a fresh random id.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<String> for RecordId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for RecordId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Trait every collection element implements.
///
/// # Drafts
/// `Draft` is what callers hand to `add`; it has no id field at all.
/// [`Record::from_draft`] is the single place a record comes to life, and the
/// collection calls it with an id it generated itself.
pub trait Record:
    Clone + Debug + PartialEq + Serialize + DeserializeOwned + Send + Sync + 'static
{
    /// Creation payload (DTO) without an id.
    type Draft: Debug + Send;

    /// The store-assigned identifier.
    fn id(&self) -> &RecordId;

    /// Builds the full record from a freshly minted id and the caller's draft.
    fn from_draft(id: RecordId, draft: Self::Draft) -> Self;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_ids_are_distinct_uuid_strings() {
        let a = RecordId::generate();
        let b = RecordId::generate();
        assert_ne!(a, b);
        assert_eq!(a.as_str().len(), 36);
        assert!(Uuid::parse_str(a.as_str()).is_ok());
    }

    #[test]
    fn serializes_as_plain_string() {
        let id = RecordId::from("abc");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"abc\"");
        let back: RecordId = serde_json::from_str("\"abc\"").unwrap();
        assert_eq!(back, id);
    }
}
