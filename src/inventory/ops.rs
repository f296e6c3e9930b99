//! Operations accepted by the inventory store and what it answers.

use crate::model::{
    ActivityLogEntry, Category, CategoryDraft, Item, ItemDraft, Order, OrderDraft,
    QuantityUpdate, Supplier, SupplierDraft, User, UserDraft,
};
use snapshot_framework::{Change, RecordId};

/// Every mutation of the inventory snapshot.
#[derive(Debug, Clone)]
pub enum InventoryOp {
    AddItem(ItemDraft),
    UpdateItem(Item),
    DeleteItem(RecordId),
    UpdateManyItems(Vec<QuantityUpdate>),
    DeleteManyItems(Vec<RecordId>),

    AddCategory(CategoryDraft),
    UpdateCategory(Category),
    DeleteCategory(RecordId),

    AddSupplier(SupplierDraft),
    UpdateSupplier(Supplier),
    DeleteSupplier(RecordId),

    AddOrder(OrderDraft),
    UpdateOrder(Order),
    DeleteOrder(RecordId),

    AddUser(UserDraft),
    UpdateUser(User),
    DeleteUser(RecordId),

    AddLog(String),
}

/// Counts reported by the bulk item operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BulkSummary {
    /// How many ids the caller sent.
    pub requested: usize,
    /// How many of them matched an item.
    pub applied: usize,
}

/// Answer to an [`InventoryOp`], one variant per collection.
#[derive(Debug, Clone, PartialEq)]
pub enum OpOutcome {
    Item(Change<Item>),
    Category(Change<Category>),
    Supplier(Change<Supplier>),
    Order(Change<Order>),
    User(Change<User>),
    Bulk(BulkSummary),
    Logged(ActivityLogEntry),
}
