//! The inventory snapshot as a [`SnapshotState`].
//!
//! Each applied operation writes exactly one activity-log entry, and that entry is
//! the event broadcast to subscribers. An operation that matches no record writes
//! nothing and changes nothing.

use crate::inventory::ops::{BulkSummary, InventoryOp, OpOutcome};
use crate::inventory::seed;
use crate::model::{ActivityLogEntry, Inventory};
use snapshot_framework::{Applied, Change, SnapshotState};

type Step = Applied<OpOutcome, ActivityLogEntry>;

impl Inventory {
    /// Prepends a log entry and returns it.
    fn log(&mut self, message: String) -> ActivityLogEntry {
        self.activity_log.prepend(message)
    }

    fn logged(&mut self, outcome: OpOutcome, message: String) -> Step {
        let entry = self.log(message);
        Applied::changed(outcome, entry)
    }

    /// Logs `describe(record)` for an applied change; leaves `NotFound` untouched.
    fn settle<T>(
        &mut self,
        change: Change<T>,
        wrap: fn(Change<T>) -> OpOutcome,
        describe: impl FnOnce(&T) -> String,
    ) -> Step {
        match change.record().map(describe) {
            Some(message) => self.logged(wrap(change), message),
            None => Applied::untouched(wrap(change)),
        }
    }
}

impl SnapshotState for Inventory {
    type Op = InventoryOp;
    type Outcome = OpOutcome;
    type Event = ActivityLogEntry;

    fn seed() -> Self {
        seed::seed()
    }

    fn apply(&mut self, op: InventoryOp) -> Step {
        match op {
            // --- Items ---
            InventoryOp::AddItem(draft) => {
                let item = self.items.insert(draft);
                let message = format!("New item added: {} (SKU: {})", item.name, item.sku);
                self.logged(OpOutcome::Item(Change::Created(item)), message)
            }
            InventoryOp::UpdateItem(item) => {
                let change = self.items.replace(item);
                self.settle(change, OpOutcome::Item, |i| {
                    format!("Item updated: {} (SKU: {})", i.name, i.sku)
                })
            }
            InventoryOp::DeleteItem(id) => {
                let change = self.items.remove(&id);
                self.settle(change, OpOutcome::Item, |i| {
                    format!("Item deleted: {} (SKU: {})", i.name, i.sku)
                })
            }
            InventoryOp::UpdateManyItems(updates) => {
                let mut applied = 0;
                for item in self.items.iter_mut() {
                    if let Some(update) = updates.iter().find(|u| u.id == item.id) {
                        item.quantity = update.quantity;
                        applied += 1;
                    }
                }
                let summary = BulkSummary {
                    requested: updates.len(),
                    applied,
                };
                let message = format!(
                    "Stock opname finished. {} item(s) adjusted.",
                    summary.requested
                );
                self.logged(OpOutcome::Bulk(summary), message)
            }
            InventoryOp::DeleteManyItems(ids) => {
                let removed = self.items.remove_many(&ids);
                let summary = BulkSummary {
                    requested: ids.len(),
                    applied: removed.len(),
                };
                let message = format!("{} item(s) deleted (bulk action).", summary.applied);
                self.logged(OpOutcome::Bulk(summary), message)
            }

            // --- Categories ---
            InventoryOp::AddCategory(draft) => {
                let category = self.categories.insert(draft);
                let message = format!("New category added: {}", category.name);
                self.logged(OpOutcome::Category(Change::Created(category)), message)
            }
            InventoryOp::UpdateCategory(category) => {
                let change = self.categories.replace(category);
                self.settle(change, OpOutcome::Category, |c| {
                    format!("Category updated: {}", c.name)
                })
            }
            InventoryOp::DeleteCategory(id) => {
                let change = self.categories.remove(&id);
                self.settle(change, OpOutcome::Category, |c| {
                    format!("Category deleted: {}", c.name)
                })
            }

            // --- Suppliers ---
            InventoryOp::AddSupplier(draft) => {
                let supplier = self.suppliers.insert(draft);
                let message = format!("New supplier added: {}", supplier.name);
                self.logged(OpOutcome::Supplier(Change::Created(supplier)), message)
            }
            InventoryOp::UpdateSupplier(supplier) => {
                let change = self.suppliers.replace(supplier);
                self.settle(change, OpOutcome::Supplier, |s| {
                    format!("Supplier updated: {}", s.name)
                })
            }
            InventoryOp::DeleteSupplier(id) => {
                let change = self.suppliers.remove(&id);
                self.settle(change, OpOutcome::Supplier, |s| {
                    format!("Supplier deleted: {}", s.name)
                })
            }

            // --- Orders ---
            InventoryOp::AddOrder(draft) => {
                let order = self.orders.insert(draft);
                let message = format!("New order created: {} (Type: {})", order.order_id, order.kind);
                self.logged(OpOutcome::Order(Change::Created(order)), message)
            }
            InventoryOp::UpdateOrder(order) => {
                let change = self.orders.replace(order);
                self.settle(change, OpOutcome::Order, |o| {
                    format!("Order updated: {} (Status: {})", o.order_id, o.status)
                })
            }
            InventoryOp::DeleteOrder(id) => {
                let change = self.orders.remove(&id);
                self.settle(change, OpOutcome::Order, |o| {
                    format!("Order deleted: {}", o.order_id)
                })
            }

            // --- Users ---
            InventoryOp::AddUser(draft) => {
                let user = self.users.insert(draft);
                let message = format!("New user added: {} (Role: {})", user.full_name, user.role);
                self.logged(OpOutcome::User(Change::Created(user)), message)
            }
            InventoryOp::UpdateUser(user) => {
                let change = self.users.replace(user);
                if let Some(current) = change.record() {
                    if self.current_user.as_ref().map(|u| &u.id) == Some(&current.id) {
                        self.current_user = Some(current.clone());
                    }
                }
                self.settle(change, OpOutcome::User, |u| {
                    format!("User profile updated: {}", u.full_name)
                })
            }
            InventoryOp::DeleteUser(id) => {
                let change = self.users.remove(&id);
                self.settle(change, OpOutcome::User, |u| {
                    format!("User deleted: {}", u.full_name)
                })
            }

            InventoryOp::AddLog(message) => {
                let entry = self.log(message);
                Applied::changed(OpOutcome::Logged(entry.clone()), entry)
            }
        }
    }
}
