use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Confirmed,
    Processing,
    Shipped,
    Delivered,
    Cancelled,
    Refunded,
    #[serde(other)]
    Unknown,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 7] = [
        OrderStatus::Pending,
        OrderStatus::Confirmed,
        OrderStatus::Processing,
        OrderStatus::Shipped,
        OrderStatus::Delivered,
        OrderStatus::Cancelled,
        OrderStatus::Refunded,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Confirmed => "confirmed",
            OrderStatus::Processing => "processing",
            OrderStatus::Shipped => "shipped",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Cancelled => "cancelled",
            OrderStatus::Refunded => "refunded",
            OrderStatus::Unknown => "unknown",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == value)
    }

    pub fn label(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::Confirmed => "Confirmed",
            OrderStatus::Processing => "Processing",
            OrderStatus::Shipped => "Shipped",
            OrderStatus::Delivered => "Delivered",
            OrderStatus::Cancelled => "Cancelled",
            OrderStatus::Refunded => "Refunded",
            OrderStatus::Unknown => "Unknown",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShippingAddress {
    #[serde(default)]
    pub street: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub postal_code: String,
    #[serde(default)]
    pub country: String,
}

impl ShippingAddress {
    pub fn one_line(&self) -> String {
        [
            self.street.as_str(),
            self.postal_code.as_str(),
            self.city.as_str(),
            self.country.as_str(),
        ]
        .into_iter()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(", ")
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub product_id: String,
    pub name: String,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub seller_id: Option<String>,
    #[serde(default)]
    pub seller_name: Option<String>,
    pub quantity: u32,
    pub unit_price: f64,
    /// Server-computed line total; falls back to quantity × unit price.
    #[serde(default)]
    pub subtotal: Option<f64>,
}

impl OrderItem {
    pub fn line_total(&self) -> f64 {
        self.subtotal
            .unwrap_or(self.unit_price * f64::from(self.quantity))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackingInfo {
    #[serde(default)]
    pub carrier: String,
    #[serde(default)]
    pub tracking_number: String,
    #[serde(default)]
    pub tracking_url: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderComment {
    #[serde(alias = "_id")]
    pub id: String,
    pub message: String,
    #[serde(default)]
    pub author_name: Option<String>,
    #[serde(default)]
    pub is_internal: bool,
    pub created_at: String,
}

/// Per-seller figures as computed by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SellerEarnings {
    pub seller_id: String,
    #[serde(default)]
    pub seller_name: Option<String>,
    pub subtotal: f64,
    pub commission: f64,
    pub earnings: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderDetail {
    #[serde(alias = "_id")]
    pub id: String,
    pub order_number: String,
    pub status: OrderStatus,
    #[serde(default)]
    pub payment_status: Option<String>,
    #[serde(default)]
    pub payment_method: Option<String>,
    #[serde(default)]
    pub customer: Customer,
    #[serde(default)]
    pub shipping_address: ShippingAddress,
    #[serde(default)]
    pub items: Vec<OrderItem>,
    #[serde(default)]
    pub subtotal: Option<f64>,
    #[serde(default)]
    pub shipping_cost: f64,
    #[serde(default)]
    pub tax: f64,
    #[serde(default)]
    pub discount: f64,
    #[serde(default)]
    pub total: Option<f64>,
    /// Platform commission in percent.
    #[serde(default)]
    pub commission_rate: Option<f64>,
    #[serde(default)]
    pub seller_earnings: Vec<SellerEarnings>,
    #[serde(default)]
    pub tracking: Option<TrackingInfo>,
    #[serde(default)]
    pub comments: Vec<OrderComment>,
    pub created_at: String,
    #[serde(default)]
    pub updated_at: Option<String>,
}

impl OrderDetail {
    pub fn items_subtotal(&self) -> f64 {
        self.subtotal
            .unwrap_or_else(|| self.items.iter().map(OrderItem::line_total).sum())
    }

    pub fn grand_total(&self) -> f64 {
        self.total.unwrap_or_else(|| {
            self.items_subtotal() + self.shipping_cost + self.tax - self.discount
        })
    }

    pub fn item_count(&self) -> u32 {
        self.items.iter().map(|i| i.quantity).sum()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderStatusUpdate {
    pub status: OrderStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackingUpdate {
    pub carrier: String,
    pub tracking_number: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tracking_url: Option<String>,
}

impl TrackingUpdate {
    pub fn validate(&self) -> Result<(), String> {
        if self.carrier.trim().is_empty() {
            return Err("Carrier is required".to_string());
        }
        if self.tracking_number.trim().len() < 4 {
            return Err("Tracking number must be at least 4 characters".to_string());
        }
        if let Some(url) = self.tracking_url.as_deref().filter(|u| !u.trim().is_empty()) {
            if !crate::shared::validation::is_valid_url(url) {
                return Err("Tracking URL must start with http:// or https://".to_string());
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentRequest {
    pub message: String,
    pub is_internal: bool,
}

impl CommentRequest {
    pub fn validate(&self) -> Result<(), String> {
        let len = self.message.trim().chars().count();
        if len == 0 {
            return Err("Comment cannot be empty".to_string());
        }
        if len > 1000 {
            return Err("Comment must not exceed 1000 characters".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(qty: u32, price: f64) -> OrderItem {
        OrderItem {
            product_id: "p".to_string(),
            name: "Mug".to_string(),
            image_url: None,
            seller_id: Some("s1".to_string()),
            seller_name: None,
            quantity: qty,
            unit_price: price,
            subtotal: None,
        }
    }

    #[test]
    fn totals_fall_back_to_items() {
        let json = r#"{
            "_id": "o1", "orderNumber": "ORD-1", "status": "shipped",
            "createdAt": "2024-03-15T10:00:00Z", "shippingCost": 4.9, "discount": 2.0
        }"#;
        let mut order: OrderDetail = serde_json::from_str(json).unwrap();
        order.items = vec![item(2, 10.0), item(1, 5.5)];
        assert_eq!(order.items_subtotal(), 25.5);
        assert!((order.grand_total() - 28.4).abs() < 1e-9);
        assert_eq!(order.item_count(), 3);
    }

    #[test]
    fn address_one_line_skips_blanks() {
        let address = ShippingAddress {
            street: "Hauptstr. 5".to_string(),
            city: "Berlin".to_string(),
            postal_code: String::new(),
            country: "DE".to_string(),
        };
        assert_eq!(address.one_line(), "Hauptstr. 5, Berlin, DE");
    }

    #[test]
    fn tracking_update_validation() {
        let mut update = TrackingUpdate {
            carrier: "DHL".to_string(),
            tracking_number: "00340434".to_string(),
            tracking_url: Some("dhl.de/track".to_string()),
        };
        assert!(update.validate().is_err());
        update.tracking_url = Some("https://dhl.de/track?id=1".to_string());
        assert!(update.validate().is_ok());
        update.carrier = " ".to_string();
        assert_eq!(update.validate(), Err("Carrier is required".to_string()));
    }

    #[test]
    fn comment_must_not_be_blank() {
        let request = CommentRequest {
            message: "  ".to_string(),
            is_internal: true,
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn status_parse() {
        assert_eq!(OrderStatus::parse("delivered"), Some(OrderStatus::Delivered));
        assert_eq!(OrderStatus::parse("lost"), None);
    }

    #[test]
    fn unmodelled_status_decodes_as_unknown() {
        let decoded: Vec<OrderStatus> = serde_json::from_str(r#"["shipped","on-hold"]"#).unwrap();
        assert_eq!(decoded, vec![OrderStatus::Shipped, OrderStatus::Unknown]);
        assert!(!OrderStatus::ALL.contains(&OrderStatus::Unknown));
    }
}
