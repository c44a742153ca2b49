//! Order rows of the order list screen.

use super::aggregate::OrderStatus;
use crate::shared::pagination::{matches_query, newest_first};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderSummary {
    #[serde(alias = "_id")]
    pub id: String,
    pub order_number: String,
    pub status: OrderStatus,
    #[serde(default)]
    pub customer_name: String,
    #[serde(default)]
    pub item_count: u32,
    pub total: f64,
    pub created_at: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrderFilter {
    pub query: String,
    pub status: Option<OrderStatus>,
}

impl OrderFilter {
    pub fn matches(&self, order: &OrderSummary) -> bool {
        if self.status.is_some_and(|s| s != order.status) {
            return false;
        }
        matches_query(
            &self.query,
            [order.order_number.as_str(), order.customer_name.as_str()],
        )
    }

    /// Matching orders, newest first.
    pub fn apply(&self, orders: &[OrderSummary]) -> Vec<OrderSummary> {
        let mut rows: Vec<OrderSummary> =
            orders.iter().filter(|o| self.matches(o)).cloned().collect();
        rows.sort_by(|a, b| newest_first(&a.created_at, &b.created_at));
        rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn order(number: &str, customer: &str, status: OrderStatus, created_at: &str) -> OrderSummary {
        OrderSummary {
            id: number.to_lowercase(),
            order_number: number.to_string(),
            status,
            customer_name: customer.to_string(),
            item_count: 1,
            total: 10.0,
            created_at: created_at.to_string(),
        }
    }

    #[test]
    fn filter_by_status_and_query() {
        let orders = vec![
            order("A-1", "Maria Lopez", OrderStatus::Pending, "2024-03-01T10:00:00Z"),
            order("A-2", "John Smith", OrderStatus::Shipped, "2024-03-02T10:00:00Z"),
            order("A-3", "maria kim", OrderStatus::Shipped, "2024-03-03T10:00:00Z"),
        ];
        let filter = OrderFilter {
            query: "MARIA".to_string(),
            status: Some(OrderStatus::Shipped),
        };
        let rows = filter.apply(&orders);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].order_number, "A-3");

        let all = OrderFilter::default().apply(&orders);
        assert_eq!(all[0].order_number, "A-3");
        assert_eq!(all[2].order_number, "A-1");
    }

    #[test]
    fn deserializes_mongo_id() {
        let json = r#"{"_id":"o1","orderNumber":"A-9","status":"delivered","total":42.5,"createdAt":"2024-01-01"}"#;
        let o: OrderSummary = serde_json::from_str(json).unwrap();
        assert_eq!(o.id, "o1");
        assert_eq!(o.status, OrderStatus::Delivered);
        assert_eq!(o.item_count, 0);
    }
}
