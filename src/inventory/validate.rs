//! Checks run by the client before anything is sent to the store.

use crate::inventory::InventoryError;
use crate::model::{
    Category, CategoryDraft, Item, ItemDraft, Order, OrderDraft, Supplier, SupplierDraft, User,
    UserDraft,
};
use chrono::NaiveDate;
use snapshot_framework::RecordId;

pub trait Validate {
    fn validate(&self) -> Result<(), InventoryError>;
}

fn require(ok: bool, message: &str) -> Result<(), InventoryError> {
    if ok {
        Ok(())
    } else {
        Err(InventoryError::Validation(message.to_string()))
    }
}

fn blank(value: &str) -> bool {
    value.trim().is_empty()
}

fn check_item(name: &str, sku: &str, category_id: &RecordId) -> Result<(), InventoryError> {
    require(!category_id.is_empty(), "item category must be selected")?;
    require(!blank(name), "item name must not be empty")?;
    require(!blank(sku), "item SKU must not be empty")
}

fn check_supplier(name: &str, contact_person: &str) -> Result<(), InventoryError> {
    require(!blank(name), "supplier name must not be empty")?;
    require(!blank(contact_person), "supplier contact person must not be empty")
}

fn check_user(full_name: &str, email: &str) -> Result<(), InventoryError> {
    require(!blank(full_name), "full name must not be empty")?;
    require(!blank(email), "email must not be empty")
}

/// An order read back without a usable date carries the epoch; it has to be
/// given a real one before it can be saved again.
fn check_order(date: NaiveDate, quantity: u32) -> Result<(), InventoryError> {
    require(date != NaiveDate::default(), "order date must be set")?;
    require(quantity > 0, "order quantity must be at least 1")
}

impl Validate for ItemDraft {
    fn validate(&self) -> Result<(), InventoryError> {
        check_item(&self.name, &self.sku, &self.category_id)
    }
}

impl Validate for Item {
    fn validate(&self) -> Result<(), InventoryError> {
        check_item(&self.name, &self.sku, &self.category_id)
    }
}

impl Validate for CategoryDraft {
    fn validate(&self) -> Result<(), InventoryError> {
        require(!self.name.trim().is_empty(), "category name must not be empty")
    }
}

impl Validate for Category {
    fn validate(&self) -> Result<(), InventoryError> {
        require(!self.name.trim().is_empty(), "category name must not be empty")
    }
}

impl Validate for SupplierDraft {
    fn validate(&self) -> Result<(), InventoryError> {
        check_supplier(&self.name, &self.contact_person)
    }
}

impl Validate for Supplier {
    fn validate(&self) -> Result<(), InventoryError> {
        check_supplier(&self.name, &self.contact_person)
    }
}

impl Validate for UserDraft {
    fn validate(&self) -> Result<(), InventoryError> {
        check_user(&self.full_name, &self.email)
    }
}

impl Validate for User {
    fn validate(&self) -> Result<(), InventoryError> {
        check_user(&self.full_name, &self.email)
    }
}

impl Validate for OrderDraft {
    fn validate(&self) -> Result<(), InventoryError> {
        check_order(self.date, self.quantity)
    }
}

impl Validate for Order {
    fn validate(&self) -> Result<(), InventoryError> {
        check_order(self.date, self.quantity)
    }
}
