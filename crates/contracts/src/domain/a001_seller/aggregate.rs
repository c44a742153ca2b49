use crate::shared::pagination::matches_query;
use crate::system::access::SellerStatus;
use serde::{Deserialize, Serialize};

/// Seller as listed in the seller directory.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Seller {
    #[serde(alias = "_id")]
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub store_name: Option<String>,
    #[serde(default)]
    pub seller_status: SellerStatus,
    #[serde(default)]
    pub commission_rate: Option<f64>,
    #[serde(default)]
    pub total_sales: Option<f64>,
    #[serde(default)]
    pub product_count: Option<u32>,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl Seller {
    pub fn store_label(&self) -> &str {
        self.store_name
            .as_deref()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or(&self.name)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SellerStatusUpdate {
    pub seller_status: SellerStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

/// Status changes an administrator is offered for a seller in `status`.
pub fn status_actions(status: SellerStatus) -> &'static [SellerStatus] {
    match status {
        SellerStatus::Pending => &[SellerStatus::Approved, SellerStatus::Rejected],
        SellerStatus::Approved => &[SellerStatus::Suspended],
        SellerStatus::Rejected => &[SellerStatus::Approved],
        SellerStatus::Suspended => &[SellerStatus::Approved],
        SellerStatus::Unknown => &[],
    }
}

/// Button caption for moving a seller into `target`.
pub fn action_label(current: SellerStatus, target: SellerStatus) -> &'static str {
    match (current, target) {
        (SellerStatus::Suspended, SellerStatus::Approved) => "Reactivate",
        (_, SellerStatus::Approved) => "Approve",
        (_, SellerStatus::Rejected) => "Reject",
        (_, SellerStatus::Suspended) => "Suspend",
        (_, SellerStatus::Pending) => "Reset to pending",
        (_, SellerStatus::Unknown) => "Unknown",
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SellerFilter {
    pub query: String,
    pub status: Option<SellerStatus>,
}

impl SellerFilter {
    pub fn matches(&self, seller: &Seller) -> bool {
        if let Some(status) = self.status {
            if seller.seller_status != status {
                return false;
            }
        }
        matches_query(
            &self.query,
            [
                seller.name.as_str(),
                seller.email.as_str(),
                seller.store_name.as_deref().unwrap_or_default(),
                seller.phone.as_deref().unwrap_or_default(),
            ],
        )
    }

    pub fn apply(&self, sellers: &[Seller]) -> Vec<Seller> {
        sellers.iter().filter(|s| self.matches(s)).cloned().collect()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateChatRequest {
    pub participant_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Chat {
    #[serde(alias = "_id")]
    pub id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seller(name: &str, status: SellerStatus) -> Seller {
        Seller {
            id: name.to_lowercase(),
            name: name.to_string(),
            email: format!("{}@shop.de", name.to_lowercase()),
            phone: None,
            store_name: None,
            seller_status: status,
            commission_rate: Some(10.0),
            total_sales: None,
            product_count: None,
            created_at: None,
        }
    }

    #[test]
    fn filter_by_status_and_query() {
        let sellers = vec![
            seller("Alpha", SellerStatus::Pending),
            seller("Beta", SellerStatus::Approved),
            seller("Alphabet", SellerStatus::Approved),
        ];
        let filter = SellerFilter {
            query: "alpha".to_string(),
            status: Some(SellerStatus::Approved),
        };
        let found = filter.apply(&sellers);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "Alphabet");
        assert_eq!(SellerFilter::default().apply(&sellers).len(), 3);
    }

    #[test]
    fn pending_seller_can_be_approved_or_rejected() {
        assert_eq!(
            status_actions(SellerStatus::Pending),
            &[SellerStatus::Approved, SellerStatus::Rejected]
        );
        assert_eq!(
            action_label(SellerStatus::Suspended, SellerStatus::Approved),
            "Reactivate"
        );
    }

    #[test]
    fn deserializes_api_payload() {
        let json = r#"{"_id":"s1","name":"Anna","email":"a@b.de","sellerStatus":"suspended","storeName":"  "}"#;
        let s: Seller = serde_json::from_str(json).unwrap();
        assert_eq!(s.seller_status, SellerStatus::Suspended);
        assert_eq!(s.store_label(), "Anna");
    }

    #[test]
    fn list_survives_unexpected_status_values() {
        let json = r#"[
            {"_id":"s1","name":"Anna","email":"a@b.de","sellerStatus":"Approved"},
            {"_id":"s2","name":"Ben","email":"b@b.de","sellerStatus":"archived"},
            {"_id":"s3","name":"Cleo","email":"c@b.de"}
        ]"#;
        let sellers: Vec<Seller> = serde_json::from_str(json).unwrap();
        assert_eq!(sellers[0].seller_status, SellerStatus::Approved);
        assert_eq!(sellers[1].seller_status, SellerStatus::Unknown);
        assert_eq!(sellers[2].seller_status, SellerStatus::Pending);
        assert!(status_actions(SellerStatus::Unknown).is_empty());
    }

    #[test]
    fn status_update_omits_empty_reason() {
        let body = serde_json::to_string(&SellerStatusUpdate {
            seller_status: SellerStatus::Approved,
            reason: None,
        })
        .unwrap();
        assert_eq!(body, r#"{"sellerStatus":"approved"}"#);
    }
}
