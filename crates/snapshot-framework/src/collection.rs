//! # Ordered Collections
//!
//! [`Collection<T>`] is an insertion-ordered list of [`Record`]s with the CRUD
//! primitives a snapshot needs. Every mutation reports what happened through
//! [`Change`], so an unknown id is a visible [`Change::NotFound`] rather than a
//! silent no-op.

use crate::record::{Record, RecordId};
use serde::{Deserialize, Serialize};

/// Result of a single-record mutation.
#[derive(Debug, Clone, PartialEq)]
pub enum Change<T> {
    /// A new record was appended.
    Created(T),
    /// An existing record was replaced in place.
    Updated { previous: T, current: T },
    /// The id matched but the replacement was identical to what was stored.
    Unchanged(T),
    /// The record was removed.
    Deleted(T),
    /// No record carries this id; the collection was not touched.
    NotFound(RecordId),
}

impl<T> Change<T> {
    /// `false` only for [`Change::NotFound`].
    pub fn is_applied(&self) -> bool {
        !matches!(self, Change::NotFound(_))
    }

    /// The record this change is about, in its latest state.
    pub fn record(&self) -> Option<&T> {
        match self {
            Change::Created(record) | Change::Unchanged(record) | Change::Deleted(record) => {
                Some(record)
            }
            Change::Updated { current, .. } => Some(current),
            Change::NotFound(_) => None,
        }
    }
}

/// Insertion-ordered records of one type.
///
/// Serialized as a plain JSON array.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Collection<T> {
    records: Vec<T>,
}

impl<T> Default for Collection<T> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
        }
    }
}

impl<T: Record> Collection<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps records that already carry ids (e.g. a seed).
    pub fn from_records(records: Vec<T>) -> Self {
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.records.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.records.iter_mut()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.records
    }

    pub fn first(&self) -> Option<&T> {
        self.records.first()
    }

    pub fn get(&self, id: &RecordId) -> Option<&T> {
        self.records.iter().find(|record| record.id() == id)
    }

    pub fn contains(&self, id: &RecordId) -> bool {
        self.get(id).is_some()
    }

    fn fresh_id(&self) -> RecordId {
        let mut id = RecordId::generate();
        while self.contains(&id) {
            id = RecordId::generate();
        }
        id
    }

    /// Mints an id no record in this collection uses, builds the record and
    /// appends it.
    pub fn insert(&mut self, draft: T::Draft) -> T {
        let record = T::from_draft(self.fresh_id(), draft);
        self.records.push(record.clone());
        record
    }

    /// Like [`Collection::insert`] but puts the record first, for newest-first lists.
    pub fn prepend(&mut self, draft: T::Draft) -> T {
        let record = T::from_draft(self.fresh_id(), draft);
        self.records.insert(0, record.clone());
        record
    }

    /// Replaces the record with the same id, keeping its position.
    pub fn replace(&mut self, record: T) -> Change<T> {
        match self.records.iter_mut().find(|slot| slot.id() == record.id()) {
            Some(slot) if *slot == record => Change::Unchanged(record),
            Some(slot) => {
                let previous = std::mem::replace(slot, record.clone());
                Change::Updated {
                    previous,
                    current: record,
                }
            }
            None => Change::NotFound(record.id().clone()),
        }
    }

    pub fn remove(&mut self, id: &RecordId) -> Change<T> {
        match self.records.iter().position(|record| record.id() == id) {
            Some(index) => Change::Deleted(self.records.remove(index)),
            None => Change::NotFound(id.clone()),
        }
    }

    /// Removes every record whose id is listed and returns them in their
    /// original order. Unknown ids are ignored.
    pub fn remove_many(&mut self, ids: &[RecordId]) -> Vec<T> {
        let (removed, kept): (Vec<T>, Vec<T>) = std::mem::take(&mut self.records)
            .into_iter()
            .partition(|record| ids.contains(record.id()));
        self.records = kept;
        removed
    }
}

impl<'a, T> IntoIterator for &'a Collection<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Note {
        id: RecordId,
        text: String,
    }

    impl Record for Note {
        type Draft = String;

        fn id(&self) -> &RecordId {
            &self.id
        }

        fn from_draft(id: RecordId, text: String) -> Self {
            Self { id, text }
        }
    }

    fn notes(texts: &[&str]) -> (Collection<Note>, Vec<Note>) {
        let mut collection = Collection::new();
        let created = texts
            .iter()
            .map(|text| collection.insert(text.to_string()))
            .collect();
        (collection, created)
    }

    #[test]
    fn insert_assigns_fresh_ids_in_order() {
        let (collection, created) = notes(&["a", "b", "c"]);
        assert_eq!(collection.len(), 3);
        assert!(created.iter().all(|note| !note.id.is_empty()));
        assert_ne!(created[0].id, created[1].id);
        let texts: Vec<_> = collection.iter().map(|n| n.text.as_str()).collect();
        assert_eq!(texts, ["a", "b", "c"]);
    }

    #[test]
    fn prepend_puts_newest_first() {
        let mut collection = Collection::<Note>::new();
        collection.prepend("old".to_string());
        collection.prepend("new".to_string());
        assert_eq!(collection.first().unwrap().text, "new");
    }

    #[test]
    fn replace_keeps_position_and_reports_previous() {
        let (mut collection, created) = notes(&["a", "b", "c"]);
        let mut edited = created[1].clone();
        edited.text = "B".into();

        match collection.replace(edited.clone()) {
            Change::Updated { previous, current } => {
                assert_eq!(previous.text, "b");
                assert_eq!(current, edited);
            }
            other => panic!("expected Updated, got {other:?}"),
        }
        assert_eq!(collection.as_slice()[1], edited);
    }

    #[test]
    fn replace_with_identical_record_is_unchanged() {
        let (mut collection, created) = notes(&["a"]);
        assert_eq!(
            collection.replace(created[0].clone()),
            Change::Unchanged(created[0].clone())
        );
    }

    #[test]
    fn unknown_ids_leave_collection_untouched() {
        let (mut collection, _) = notes(&["a", "b"]);
        let before = collection.clone();
        let ghost = Note {
            id: RecordId::from("missing"),
            text: "x".into(),
        };

        assert_eq!(
            collection.replace(ghost),
            Change::NotFound(RecordId::from("missing"))
        );
        assert!(!collection.remove(&RecordId::from("missing")).is_applied());
        assert_eq!(collection, before);
    }

    #[test]
    fn remove_twice_is_idempotent() {
        let (mut collection, created) = notes(&["a", "b"]);
        assert!(matches!(collection.remove(&created[0].id), Change::Deleted(_)));
        assert!(matches!(collection.remove(&created[0].id), Change::NotFound(_)));
        assert_eq!(collection.len(), 1);
    }

    #[test]
    fn remove_many_preserves_order_of_survivors() {
        let (mut collection, created) = notes(&["a", "b", "c", "d"]);
        let removed = collection.remove_many(&[
            created[2].id.clone(),
            created[0].id.clone(),
            RecordId::from("missing"),
        ]);
        let removed: Vec<_> = removed.iter().map(|n| n.text.as_str()).collect();
        let kept: Vec<_> = collection.iter().map(|n| n.text.as_str()).collect();
        assert_eq!(removed, ["a", "c"]);
        assert_eq!(kept, ["b", "d"]);
    }

    #[test]
    fn serializes_as_array() {
        let (collection, _) = notes(&["a"]);
        let json = serde_json::to_value(&collection).unwrap();
        assert!(json.is_array());
        let back: Collection<Note> = serde_json::from_value(json).unwrap();
        assert_eq!(back, collection);
    }
}
