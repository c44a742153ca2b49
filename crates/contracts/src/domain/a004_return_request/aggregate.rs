use crate::shared::pagination::matches_query;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ReturnStatus {
    #[default]
    Requested,
    InProcess,
    Approved,
    Rejected,
    /// Any status this dashboard does not model. Offers no transitions.
    #[serde(other)]
    Unknown,
}

impl ReturnStatus {
    pub const ALL: [ReturnStatus; 4] = [
        ReturnStatus::Requested,
        ReturnStatus::InProcess,
        ReturnStatus::Approved,
        ReturnStatus::Rejected,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ReturnStatus::Requested => "requested",
            ReturnStatus::InProcess => "in-process",
            ReturnStatus::Approved => "approved",
            ReturnStatus::Rejected => "rejected",
            ReturnStatus::Unknown => "unknown",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == value)
    }

    pub fn label(&self) -> &'static str {
        match self {
            ReturnStatus::Requested => "Requested",
            ReturnStatus::InProcess => "In process",
            ReturnStatus::Approved => "Approved",
            ReturnStatus::Rejected => "Rejected",
            ReturnStatus::Unknown => "Unknown",
        }
    }

    /// Statuses a reviewer can move the request into.
    pub fn next_statuses(&self) -> &'static [ReturnStatus] {
        match self {
            ReturnStatus::Requested => &[ReturnStatus::InProcess],
            ReturnStatus::InProcess => &[ReturnStatus::Approved, ReturnStatus::Rejected],
            ReturnStatus::Approved | ReturnStatus::Rejected | ReturnStatus::Unknown => &[],
        }
    }

    pub fn is_final(&self) -> bool {
        self.next_statuses().is_empty()
    }

    pub fn can_transition_to(&self, target: ReturnStatus) -> bool {
        self.next_statuses().contains(&target)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReturnRequest {
    #[serde(alias = "_id")]
    pub id: String,
    #[serde(default)]
    pub order_id: String,
    #[serde(default)]
    pub order_number: Option<String>,
    #[serde(default)]
    pub product_name: String,
    #[serde(default)]
    pub customer_name: String,
    #[serde(default)]
    pub customer_email: Option<String>,
    #[serde(default)]
    pub seller_name: Option<String>,
    #[serde(default)]
    pub reason: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub quantity: u32,
    #[serde(default)]
    pub refund_amount: Option<f64>,
    #[serde(default)]
    pub status: ReturnStatus,
    #[serde(default)]
    pub admin_note: Option<String>,
    #[serde(default)]
    pub images: Vec<String>,
    pub created_at: String,
    #[serde(default)]
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReturnStatusUpdate {
    pub status: ReturnStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub admin_note: Option<String>,
}

impl ReturnStatusUpdate {
    pub fn new(status: ReturnStatus, note: &str) -> Self {
        let note = note.trim();
        Self {
            status,
            admin_note: (!note.is_empty()).then(|| note.to_string()),
        }
    }

    /// Rejections must be explained to the customer.
    pub fn validate(&self, current: ReturnStatus) -> Result<(), String> {
        if !current.can_transition_to(self.status) {
            return Err(format!(
                "Cannot move a {} return to {}",
                current.label().to_lowercase(),
                self.status.label().to_lowercase()
            ));
        }
        if self.status == ReturnStatus::Rejected && self.admin_note.is_none() {
            return Err("Please give a reason for the rejection".to_string());
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReturnFilter {
    pub query: String,
    pub status: Option<ReturnStatus>,
}

impl ReturnFilter {
    pub fn matches(&self, request: &ReturnRequest) -> bool {
        if self.status.is_some_and(|s| s != request.status) {
            return false;
        }
        matches_query(
            &self.query,
            [
                request.order_id.as_str(),
                request.order_number.as_deref().unwrap_or_default(),
                request.product_name.as_str(),
                request.customer_name.as_str(),
                request.reason.as_str(),
            ],
        )
    }

    pub fn apply(&self, requests: &[ReturnRequest]) -> Vec<ReturnRequest> {
        requests.iter().filter(|r| self.matches(r)).cloned().collect()
    }
}

/// Count of requests per status, in `ReturnStatus::ALL` order.
pub fn status_counts(requests: &[ReturnRequest]) -> Vec<(ReturnStatus, usize)> {
    ReturnStatus::ALL
        .into_iter()
        .map(|s| (s, requests.iter().filter(|r| r.status == s).count()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(id: &str, status: ReturnStatus) -> ReturnRequest {
        ReturnRequest {
            id: id.to_string(),
            order_id: format!("order-{}", id),
            order_number: None,
            product_name: "Desk lamp".to_string(),
            customer_name: "Jonas".to_string(),
            customer_email: None,
            seller_name: None,
            reason: "Damaged on arrival".to_string(),
            description: None,
            quantity: 1,
            refund_amount: Some(29.9),
            status,
            admin_note: None,
            images: Vec::new(),
            created_at: "2024-05-01T09:00:00Z".to_string(),
            updated_at: None,
        }
    }

    #[test]
    fn status_flow() {
        assert_eq!(ReturnStatus::Requested.next_statuses(), &[ReturnStatus::InProcess]);
        assert_eq!(
            ReturnStatus::InProcess.next_statuses(),
            &[ReturnStatus::Approved, ReturnStatus::Rejected]
        );
        assert!(ReturnStatus::Approved.is_final());
        assert!(!ReturnStatus::Requested.can_transition_to(ReturnStatus::Approved));
    }

    #[test]
    fn in_process_uses_kebab_case() {
        let s: ReturnStatus = serde_json::from_str(r#""in-process""#).unwrap();
        assert_eq!(s, ReturnStatus::InProcess);
        assert_eq!(ReturnStatus::parse("in-process"), Some(ReturnStatus::InProcess));
    }

    #[test]
    fn list_survives_unmodelled_status() {
        let json = r#"[
            {"_id":"r1","status":"in-process","createdAt":"2024-05-01T09:00:00Z"},
            {"_id":"r2","status":"cancelled","createdAt":"2024-05-02T09:00:00Z"}
        ]"#;
        let requests: Vec<ReturnRequest> = serde_json::from_str(json).unwrap();
        assert_eq!(requests[0].status, ReturnStatus::InProcess);
        assert_eq!(requests[1].status, ReturnStatus::Unknown);
        assert!(requests[1].status.is_final());
        assert_eq!(ReturnStatus::parse("unknown"), None);
    }

    #[test]
    fn rejection_needs_note() {
        let update = ReturnStatusUpdate::new(ReturnStatus::Rejected, "   ");
        assert!(update.admin_note.is_none());
        assert!(update.validate(ReturnStatus::InProcess).is_err());

        let update = ReturnStatusUpdate::new(ReturnStatus::Rejected, "Used item");
        assert!(update.validate(ReturnStatus::InProcess).is_ok());
        assert!(update.validate(ReturnStatus::Requested).is_err());
    }

    #[test]
    fn filter_and_counts() {
        let all = vec![
            request("1", ReturnStatus::Requested),
            request("2", ReturnStatus::InProcess),
            request("3", ReturnStatus::Requested),
        ];
        let filter = ReturnFilter {
            query: "ORDER-3".to_string(),
            status: None,
        };
        assert_eq!(filter.apply(&all).len(), 1);

        let counts = status_counts(&all);
        assert_eq!(counts[0], (ReturnStatus::Requested, 2));
        assert_eq!(counts[3], (ReturnStatus::Rejected, 0));
    }
}
