use crate::model::{ActivityLogEntry, Inventory, OrderStatus};
use chrono::{NaiveDate, Utc};

/// How many log lines the dashboard shows.
pub const RECENT_LOG_LIMIT: usize = 5;

/// Headline numbers of the dashboard.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardMetrics {
    pub pending_orders: usize,
    /// Items with `quantity <= threshold`, out-of-stock ones included.
    pub low_stock_items: usize,
    pub shipped_orders: usize,
    pub total_stock: u64,
    /// Sum of `quantity * purchase_price`.
    pub inventory_value: f64,
    pub out_of_stock_items: usize,
    pub shipped_today: usize,
    pub recent_activity: Vec<ActivityLogEntry>,
}

impl DashboardMetrics {
    /// Metrics as of `today` (UTC calendar date in production).
    pub fn compute(inventory: &Inventory, low_stock_threshold: u32, today: NaiveDate) -> Self {
        let items = &inventory.items;
        let orders = &inventory.orders;
        let shipped = || orders.iter().filter(|o| o.status == OrderStatus::Shipped);

        Self {
            pending_orders: orders
                .iter()
                .filter(|o| o.status == OrderStatus::Pending)
                .count(),
            low_stock_items: items
                .iter()
                .filter(|i| i.quantity <= low_stock_threshold)
                .count(),
            shipped_orders: shipped().count(),
            total_stock: items.iter().map(|i| u64::from(i.quantity)).sum(),
            inventory_value: items
                .iter()
                .map(|i| f64::from(i.quantity) * i.purchase_price)
                .sum(),
            out_of_stock_items: items.iter().filter(|i| i.quantity == 0).count(),
            shipped_today: shipped().filter(|o| o.date == today).count(),
            recent_activity: inventory
                .activity_log
                .iter()
                .take(RECENT_LOG_LIMIT)
                .cloned()
                .collect(),
        }
    }

    pub fn compute_now(inventory: &Inventory, low_stock_threshold: u32) -> Self {
        Self::compute(inventory, low_stock_threshold, Utc::now().date_naive())
    }
}
