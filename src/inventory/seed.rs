use crate::model::{
    ActivityLogEntry, Category, CategoryDraft, Inventory, Role, User, UserDraft, UserStatus,
};
use snapshot_framework::Collection;

pub const SEED_CATEGORIES: [&str; 5] = ["Elektronik", "Pakaian", "Makanan", "Minuman", "Alat Tulis"];

/// First-run snapshot: the stock categories, one admin and a start-up log line.
pub fn seed() -> Inventory {
    let mut categories = Collection::<Category>::new();
    for name in SEED_CATEGORIES {
        categories.insert(CategoryDraft::new(name));
    }

    let mut users = Collection::<User>::new();
    let admin = users.insert(UserDraft {
        full_name: "John Doe".to_string(),
        email: "john.doe@example.com".to_string(),
        phone: "+1234567890".to_string(),
        role: Role::Admin,
        status: UserStatus::Active,
        password: "admin".to_string(),
    });

    let mut activity_log = Collection::<ActivityLogEntry>::new();
    activity_log.prepend(format!(
        "System started. {} user ({}) created.",
        admin.role, admin.full_name
    ));

    Inventory {
        items: Collection::new(),
        categories,
        suppliers: Collection::new(),
        orders: Collection::new(),
        users,
        activity_log,
        current_user: None,
    }
}
