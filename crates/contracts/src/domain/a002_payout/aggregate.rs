use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EarningsSummary {
    #[serde(default)]
    pub total_earnings: f64,
    #[serde(default)]
    pub withdrawable_balance: f64,
    #[serde(default)]
    pub pending_balance: f64,
    #[serde(default)]
    pub total_withdrawn: f64,
    #[serde(default)]
    pub total_commission: f64,
    #[serde(default = "default_currency")]
    pub currency: String,
}

fn default_currency() -> String {
    "EUR".to_string()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PayoutStatus {
    Pending,
    Approved,
    Processing,
    Completed,
    Rejected,
    Cancelled,
    #[serde(other)]
    Unknown,
}

impl PayoutStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PayoutStatus::Pending => "pending",
            PayoutStatus::Approved => "approved",
            PayoutStatus::Processing => "processing",
            PayoutStatus::Completed => "completed",
            PayoutStatus::Rejected => "rejected",
            PayoutStatus::Cancelled => "cancelled",
            PayoutStatus::Unknown => "unknown",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PayoutStatus::Pending => "Pending",
            PayoutStatus::Approved => "Approved",
            PayoutStatus::Processing => "Processing",
            PayoutStatus::Completed => "Completed",
            PayoutStatus::Rejected => "Rejected",
            PayoutStatus::Cancelled => "Cancelled",
            PayoutStatus::Unknown => "Unknown",
        }
    }

    /// Whether the payout still holds part of the balance.
    pub fn is_open(&self) -> bool {
        matches!(
            self,
            PayoutStatus::Pending | PayoutStatus::Approved | PayoutStatus::Processing
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payout {
    #[serde(alias = "_id")]
    pub id: String,
    pub amount: f64,
    pub status: PayoutStatus,
    #[serde(default)]
    pub payment_method_id: Option<String>,
    #[serde(default)]
    pub payment_method_label: Option<String>,
    #[serde(default)]
    pub note: Option<String>,
    #[serde(default)]
    pub admin_note: Option<String>,
    pub requested_at: String,
    #[serde(default)]
    pub processed_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayoutRequest {
    pub amount: f64,
    pub payment_method_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethodType {
    #[default]
    BankTransfer,
    Paypal,
}

impl PaymentMethodType {
    pub const ALL: [PaymentMethodType; 2] = [PaymentMethodType::BankTransfer, PaymentMethodType::Paypal];

    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethodType::BankTransfer => "bank_transfer",
            PaymentMethodType::Paypal => "paypal",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "bank_transfer" => Some(PaymentMethodType::BankTransfer),
            "paypal" => Some(PaymentMethodType::Paypal),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PaymentMethodType::BankTransfer => "Bank transfer",
            PaymentMethodType::Paypal => "PayPal",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BankDetails {
    pub account_holder_name: String,
    pub bank_name: String,
    pub account_number: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iban: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub swift_code: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentMethod {
    #[serde(alias = "_id")]
    pub id: String,
    pub method_type: PaymentMethodType,
    #[serde(default)]
    pub bank_details: Option<BankDetails>,
    #[serde(default)]
    pub paypal_email: Option<String>,
    #[serde(default)]
    pub is_default: bool,
    #[serde(default)]
    pub is_verified: bool,
}

impl PaymentMethod {
    /// Short human label, e.g. `Bank transfer · Sparkasse ****4321`.
    pub fn display_label(&self) -> String {
        match self.method_type {
            PaymentMethodType::BankTransfer => match &self.bank_details {
                Some(bank) => format!(
                    "{} · {} {}",
                    self.method_type.label(),
                    bank.bank_name,
                    mask_account_number(&bank.account_number)
                ),
                None => self.method_type.label().to_string(),
            },
            PaymentMethodType::Paypal => format!(
                "{} · {}",
                self.method_type.label(),
                self.paypal_email.as_deref().unwrap_or("-")
            ),
        }
    }
}

/// Body of create/update payment method calls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentMethodRequest {
    pub method_type: PaymentMethodType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bank_details: Option<BankDetails>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paypal_email: Option<String>,
    pub is_default: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Invoice {
    #[serde(alias = "_id")]
    pub id: String,
    pub invoice_number: String,
    pub period_start: String,
    pub period_end: String,
    pub amount: f64,
    #[serde(default)]
    pub commission: f64,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub download_url: Option<String>,
    #[serde(default)]
    pub issued_at: Option<String>,
}

/// Keep the last four digits visible: `DE89370400440532013000` → `****3000`.
pub fn mask_account_number(number: &str) -> String {
    let chars: Vec<char> = number.chars().filter(|c| !c.is_whitespace()).collect();
    if chars.len() <= 4 {
        return chars.into_iter().collect();
    }
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("****{}", tail)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn masks_all_but_last_four() {
        assert_eq!(mask_account_number("1234 5678 9012"), "****9012");
        assert_eq!(mask_account_number("123"), "123");
    }

    #[test]
    fn method_type_serializes_snake_case() {
        let json = serde_json::to_string(&PaymentMethodType::BankTransfer).unwrap();
        assert_eq!(json, r#""bank_transfer""#);
        assert_eq!(PaymentMethodType::parse("paypal"), Some(PaymentMethodType::Paypal));
    }

    #[test]
    fn display_label_for_each_type() {
        let bank = PaymentMethod {
            id: "m1".to_string(),
            method_type: PaymentMethodType::BankTransfer,
            bank_details: Some(BankDetails {
                account_holder_name: "Anna Schmidt".to_string(),
                bank_name: "Sparkasse".to_string(),
                account_number: "0532013000".to_string(),
                iban: None,
                swift_code: None,
            }),
            paypal_email: None,
            is_default: true,
            is_verified: false,
        };
        assert_eq!(bank.display_label(), "Bank transfer · Sparkasse ****3000");

        let paypal = PaymentMethod {
            id: "m2".to_string(),
            method_type: PaymentMethodType::Paypal,
            bank_details: None,
            paypal_email: Some("anna@shop.de".to_string()),
            is_default: false,
            is_verified: true,
        };
        assert_eq!(paypal.display_label(), "PayPal · anna@shop.de");
    }

    #[test]
    fn earnings_default_currency() {
        let summary: EarningsSummary =
            serde_json::from_str(r#"{"withdrawableBalance": 120.5}"#).unwrap();
        assert_eq!(summary.currency, "EUR");
        assert_eq!(summary.withdrawable_balance, 120.5);
    }

    #[test]
    fn open_statuses() {
        assert!(PayoutStatus::Pending.is_open());
        assert!(!PayoutStatus::Completed.is_open());
        assert!(!PayoutStatus::Unknown.is_open());
    }

    #[test]
    fn history_survives_unmodelled_status() {
        let json = r#"[
            {"_id":"p1","amount":50.0,"status":"completed","requestedAt":"2024-04-01T08:00:00Z"},
            {"_id":"p2","amount":20.0,"status":"on_hold","requestedAt":"2024-04-02T08:00:00Z"}
        ]"#;
        let payouts: Vec<Payout> = serde_json::from_str(json).unwrap();
        assert_eq!(payouts.len(), 2);
        assert_eq!(payouts[0].status, PayoutStatus::Completed);
        assert_eq!(payouts[1].status, PayoutStatus::Unknown);
        assert_eq!(payouts[1].status.label(), "Unknown");
    }
}
