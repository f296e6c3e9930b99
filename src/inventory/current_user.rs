use crate::model::{Inventory, User};

/// Decides who the active operator is.
///
/// There is no login yet. The default [`FirstUser`] picks the first user in the
/// list; an authentication layer can plug in its own resolver through
/// [`InventoryClient::with_current_user`](crate::clients::InventoryClient::with_current_user).
pub trait CurrentUser: Send + Sync {
    fn resolve<'a>(&self, inventory: &'a Inventory) -> Option<&'a User>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct FirstUser;

impl CurrentUser for FirstUser {
    fn resolve<'a>(&self, inventory: &'a Inventory) -> Option<&'a User> {
        inventory.users.first()
    }
}
