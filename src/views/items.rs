use crate::model::{Category, Item, MISSING_CATEGORY};
use snapshot_framework::{Collection, RecordId};

/// Name of the category `id` points at, or `"N/A"` when it no longer exists.
pub fn category_name<'a>(categories: &'a Collection<Category>, id: &RecordId) -> &'a str {
    categories
        .get(id)
        .map(|c| c.name.as_str())
        .unwrap_or(MISSING_CATEGORY)
}

/// Search box plus category dropdown of the item list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemFilter {
    /// Case-insensitive substring of the name or SKU. Empty matches everything.
    pub search: String,
    pub category_id: Option<RecordId>,
}

impl ItemFilter {
    pub fn search(term: impl Into<String>) -> Self {
        Self {
            search: term.into(),
            category_id: None,
        }
    }

    pub fn in_category(mut self, id: RecordId) -> Self {
        self.category_id = Some(id);
        self
    }

    pub fn matches(&self, item: &Item) -> bool {
        if let Some(category) = &self.category_id {
            if &item.category_id != category {
                return false;
            }
        }
        let needle = self.search.to_lowercase();
        needle.is_empty()
            || item.name.to_lowercase().contains(&needle)
            || item.sku.to_lowercase().contains(&needle)
    }

    /// Matching items in collection order.
    pub fn apply<'a>(&self, items: &'a Collection<Item>) -> Vec<&'a Item> {
        items.iter().filter(|item| self.matches(item)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CategoryDraft, ItemDraft};

    fn fixture() -> (Collection<Category>, Collection<Item>) {
        let mut categories: Collection<Category> = Collection::new();
        let elektronik = categories.insert(CategoryDraft::new("Elektronik")).id.clone();
        let mut items = Collection::new();
        items.insert(ItemDraft::new("Kabel HDMI", "KBL-01", elektronik.clone()));
        items.insert(ItemDraft::new("Lem Kayu", "LEM-7", RecordId::from("gone")));
        (categories, items)
    }

    #[test]
    fn orphaned_category_reads_as_missing() {
        let (categories, items) = fixture();
        let names: Vec<_> = items
            .iter()
            .map(|i| category_name(&categories, &i.category_id))
            .collect();
        assert_eq!(names, ["Elektronik", "N/A"]);
    }

    #[test]
    fn search_hits_name_or_sku_ignoring_case() {
        let (_, items) = fixture();
        assert_eq!(ItemFilter::search("hdmi").apply(&items).len(), 1);
        assert_eq!(ItemFilter::search("lem-").apply(&items)[0].name, "Lem Kayu");
        assert_eq!(ItemFilter::default().apply(&items).len(), 2);
    }

    #[test]
    fn category_filter_is_exact() {
        let (categories, items) = fixture();
        let elektronik = categories.first().unwrap().id.clone();
        let filter = ItemFilter::search("").in_category(elektronik);
        let found = filter.apply(&items);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].sku, "KBL-01");
    }
}
