use crate::model::{Order, OrderStatus, OrderType};
use chrono::NaiveDate;
use snapshot_framework::Collection;

/// Filters of the order list. Unset fields match everything.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OrderFilter {
    pub status: Option<OrderStatus>,
    pub kind: Option<OrderType>,
    /// First day included.
    pub from: Option<NaiveDate>,
    /// Last day included.
    pub to: Option<NaiveDate>,
}

impl OrderFilter {
    pub fn matches(&self, order: &Order) -> bool {
        self.status.map_or(true, |s| order.status == s)
            && self.kind.map_or(true, |k| order.kind == k)
            && self.from.map_or(true, |from| order.date >= from)
            && self.to.map_or(true, |to| order.date <= to)
    }

    /// Matching orders, newest date first. Orders on the same day keep collection order.
    pub fn apply<'a>(&self, orders: &'a Collection<Order>) -> Vec<&'a Order> {
        let mut found: Vec<&Order> = orders.iter().filter(|o| self.matches(o)).collect();
        found.sort_by(|a, b| b.date.cmp(&a.date));
        found
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::OrderDraft;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, d).unwrap()
    }

    fn orders() -> Collection<Order> {
        let mut orders = Collection::new();
        for (d, kind, status) in [
            (1, OrderType::Incoming, OrderStatus::Delivered),
            (9, OrderType::Outgoing, OrderStatus::Shipped),
            (5, OrderType::Outgoing, OrderStatus::Pending),
            (12, OrderType::Incoming, OrderStatus::Pending),
        ] {
            orders.insert(OrderDraft {
                date: day(d),
                kind,
                status,
                items: format!("order of day {d}"),
                quantity: d,
            });
        }
        orders
    }

    #[test]
    fn unfiltered_list_is_newest_first() {
        let orders = orders();
        let days: Vec<_> = OrderFilter::default()
            .apply(&orders)
            .iter()
            .map(|o| o.quantity)
            .collect();
        assert_eq!(days, [12, 9, 5, 1]);
    }

    #[test]
    fn date_range_includes_both_ends() {
        let orders = orders();
        let filter = OrderFilter {
            from: Some(day(5)),
            to: Some(day(9)),
            ..OrderFilter::default()
        };
        let days: Vec<_> = filter.apply(&orders).iter().map(|o| o.quantity).collect();
        assert_eq!(days, [9, 5]);
    }

    #[test]
    fn status_and_kind_combine() {
        let orders = orders();
        let filter = OrderFilter {
            status: Some(OrderStatus::Pending),
            kind: Some(OrderType::Outgoing),
            ..OrderFilter::default()
        };
        let found = filter.apply(&orders);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].date, day(5));
    }
}
