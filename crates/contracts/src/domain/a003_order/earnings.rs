use super::aggregate::{OrderDetail, SellerEarnings};

/// Default platform commission applied when the order carries none.
pub const DEFAULT_COMMISSION_RATE: f64 = 10.0;

/// Subtotal split into the platform commission and the seller's share.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EarningsBreakdown {
    pub subtotal: f64,
    pub commission_rate: f64,
    pub commission: f64,
    pub earnings: f64,
}

impl EarningsBreakdown {
    pub fn compute(subtotal: f64, commission_rate: f64) -> Self {
        let commission = round_cents(subtotal * commission_rate / 100.0);
        Self {
            subtotal,
            commission_rate,
            commission,
            earnings: round_cents(subtotal - commission),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SellerBreakdown {
    pub seller_id: String,
    pub seller_name: String,
    pub item_count: u32,
    pub breakdown: EarningsBreakdown,
}

pub fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Groups order items by seller, keeping first-appearance order.
///
/// Figures already computed by the server win over local arithmetic; items
/// without a seller are collected under an empty id.
pub fn seller_breakdowns(order: &OrderDetail) -> Vec<SellerBreakdown> {
    let rate = order.commission_rate.unwrap_or(DEFAULT_COMMISSION_RATE);
    let mut groups: Vec<SellerBreakdown> = Vec::new();

    for item in &order.items {
        let seller_id = item.seller_id.clone().unwrap_or_default();
        let idx = match groups.iter().position(|g| g.seller_id == seller_id) {
            Some(idx) => idx,
            None => {
                groups.push(SellerBreakdown {
                    seller_name: item
                        .seller_name
                        .clone()
                        .unwrap_or_else(|| "Unknown seller".to_string()),
                    seller_id,
                    item_count: 0,
                    breakdown: EarningsBreakdown::compute(0.0, rate),
                });
                groups.len() - 1
            }
        };
        let group = &mut groups[idx];
        group.item_count += item.quantity;
        group.breakdown = EarningsBreakdown::compute(group.breakdown.subtotal + item.line_total(), rate);
    }

    for group in &mut groups {
        if let Some(server) = find_server_figures(&order.seller_earnings, &group.seller_id) {
            group.breakdown = EarningsBreakdown {
                subtotal: server.subtotal,
                commission_rate: rate,
                commission: server.commission,
                earnings: server.earnings,
            };
            if let Some(name) = &server.seller_name {
                group.seller_name = name.clone();
            }
        }
    }

    groups
}

fn find_server_figures<'a>(figures: &'a [SellerEarnings], seller_id: &str) -> Option<&'a SellerEarnings> {
    figures.iter().find(|f| f.seller_id == seller_id)
}

/// Sum of every seller's breakdown.
pub fn order_breakdown(order: &OrderDetail) -> EarningsBreakdown {
    let rate = order.commission_rate.unwrap_or(DEFAULT_COMMISSION_RATE);
    let groups = seller_breakdowns(order);
    if groups.is_empty() {
        return EarningsBreakdown::compute(order.items_subtotal(), rate);
    }
    let (subtotal, commission, earnings) = groups.iter().fold((0.0, 0.0, 0.0), |acc, g| {
        (
            acc.0 + g.breakdown.subtotal,
            acc.1 + g.breakdown.commission,
            acc.2 + g.breakdown.earnings,
        )
    });
    EarningsBreakdown {
        subtotal: round_cents(subtotal),
        commission_rate: rate,
        commission: round_cents(commission),
        earnings: round_cents(earnings),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a003_order::aggregate::{OrderItem, OrderStatus};

    fn item(seller: &str, qty: u32, price: f64) -> OrderItem {
        OrderItem {
            product_id: format!("p-{}", seller),
            name: "Item".to_string(),
            image_url: None,
            seller_id: Some(seller.to_string()),
            seller_name: Some(seller.to_uppercase()),
            quantity: qty,
            unit_price: price,
            subtotal: None,
        }
    }

    fn order(items: Vec<OrderItem>) -> OrderDetail {
        OrderDetail {
            id: "o1".to_string(),
            order_number: "ORD-1".to_string(),
            status: OrderStatus::Confirmed,
            payment_status: None,
            payment_method: None,
            customer: Default::default(),
            shipping_address: Default::default(),
            items,
            subtotal: None,
            shipping_cost: 0.0,
            tax: 0.0,
            discount: 0.0,
            total: None,
            commission_rate: Some(12.5),
            seller_earnings: Vec::new(),
            tracking: None,
            comments: Vec::new(),
            created_at: "2024-01-01T00:00:00Z".to_string(),
            updated_at: None,
        }
    }

    #[test]
    fn compute_rounds_commission_to_cents() {
        let b = EarningsBreakdown::compute(19.99, 12.5);
        assert_eq!(b.commission, 2.5);
        assert_eq!(b.earnings, 17.49);
    }

    #[test]
    fn groups_items_by_seller() {
        let o = order(vec![item("a", 2, 10.0), item("b", 1, 40.0), item("a", 1, 20.0)]);
        let groups = seller_breakdowns(&o);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].seller_id, "a");
        assert_eq!(groups[0].item_count, 3);
        assert_eq!(groups[0].breakdown.subtotal, 40.0);
        assert_eq!(groups[0].breakdown.commission, 5.0);
        assert_eq!(groups[1].breakdown.earnings, 35.0);
    }

    #[test]
    fn server_figures_take_precedence() {
        let mut o = order(vec![item("a", 1, 100.0)]);
        o.seller_earnings = vec![SellerEarnings {
            seller_id: "a".to_string(),
            seller_name: Some("Alpha Store".to_string()),
            subtotal: 100.0,
            commission: 8.0,
            earnings: 92.0,
        }];
        let groups = seller_breakdowns(&o);
        assert_eq!(groups[0].breakdown.commission, 8.0);
        assert_eq!(groups[0].seller_name, "Alpha Store");
        assert_eq!(order_breakdown(&o).earnings, 92.0);
    }

    #[test]
    fn default_rate_when_missing() {
        let mut o = order(vec![item("a", 1, 50.0)]);
        o.commission_rate = None;
        assert_eq!(order_breakdown(&o).commission, 5.0);
    }
}
