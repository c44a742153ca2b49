//! Client-side checks run before a payout request or payment method is posted.

use super::aggregate::{BankDetails, PaymentMethod, PaymentMethodRequest, PaymentMethodType, PayoutRequest};
use crate::shared::validation::{
    compact_upper, digits_only, is_valid_email, validate_all, validate_field, FieldErrors,
    FieldRule, ValidationRules,
};

/// Smallest amount a seller may withdraw, in EUR.
pub const MIN_PAYOUT_AMOUNT: f64 = 50.0;
pub const MIN_ACCOUNT_NUMBER_DIGITS: usize = 6;
pub const MIN_IBAN_LEN: usize = 15;
pub const SWIFT_LEN: std::ops::RangeInclusive<usize> = 8..=11;

/// Accepts `120`, `120.50` and `120,50`.
pub fn parse_amount(text: &str) -> Option<f64> {
    let text = text.trim().replace(',', ".");
    if text.is_empty() {
        return None;
    }
    text.parse::<f64>().ok().filter(|v| v.is_finite())
}

pub fn validate_payout_amount(amount: f64, withdrawable_balance: f64) -> Option<String> {
    if !amount.is_finite() || amount <= 0.0 {
        return Some("Enter an amount greater than zero".to_string());
    }
    if amount < MIN_PAYOUT_AMOUNT {
        return Some(format!(
            "Minimum payout amount is €{:.2}",
            MIN_PAYOUT_AMOUNT
        ));
    }
    if amount > withdrawable_balance {
        return Some(format!(
            "Amount exceeds your withdrawable balance of €{:.2}",
            withdrawable_balance.max(0.0)
        ));
    }
    None
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PayoutRequestForm {
    pub amount: String,
    pub payment_method_id: String,
    pub note: String,
    pub withdrawable_balance: f64,
}

fn check_amount(f: &PayoutRequestForm) -> Option<String> {
    match parse_amount(&f.amount) {
        None if f.amount.trim().is_empty() => Some("Amount is required".to_string()),
        None => Some("Enter a valid number".to_string()),
        Some(amount) => validate_payout_amount(amount, f.withdrawable_balance),
    }
}

fn check_payout_method(f: &PayoutRequestForm) -> Option<String> {
    f.payment_method_id
        .trim()
        .is_empty()
        .then(|| "Select a payment method".to_string())
}

fn check_payout_note(f: &PayoutRequestForm) -> Option<String> {
    ValidationRules::none().max_length(500).check(&f.note, "Note")
}

pub const PAYOUT_RULES: &[FieldRule<PayoutRequestForm>] = &[
    FieldRule::new("amount", check_amount),
    FieldRule::new("payment_method_id", check_payout_method),
    FieldRule::new("note", check_payout_note),
];

impl PayoutRequestForm {
    pub fn validate(&self) -> FieldErrors {
        validate_all(self, PAYOUT_RULES)
    }

    pub fn validate_field(&self, field: &str) -> Option<String> {
        validate_field(self, PAYOUT_RULES, field)
    }

    /// Validated request body, or every failing field.
    pub fn to_request(&self) -> Result<PayoutRequest, FieldErrors> {
        self.validate().into_result()?;
        let note = self.note.trim();
        Ok(PayoutRequest {
            amount: parse_amount(&self.amount).unwrap_or_default(),
            payment_method_id: self.payment_method_id.trim().to_string(),
            note: (!note.is_empty()).then(|| note.to_string()),
        })
    }

    /// Keep the selected method while it still exists. Otherwise fall back
    /// to the default (or first) method, or clear the selection.
    pub fn with_default_method(mut self, methods: &[PaymentMethod]) -> Self {
        if methods.iter().any(|m| m.id == self.payment_method_id) {
            return self;
        }
        self.payment_method_id = methods
            .iter()
            .find(|m| m.is_default)
            .or(methods.first())
            .map(|m| m.id.clone())
            .unwrap_or_default();
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PaymentMethodForm {
    pub id: Option<String>,
    pub method_type: PaymentMethodType,
    pub account_holder_name: String,
    pub bank_name: String,
    pub account_number: String,
    pub iban: String,
    pub swift_code: String,
    pub paypal_email: String,
    pub is_default: bool,
}

pub fn validate_account_holder_name(value: &str) -> Option<String> {
    ValidationRules::required()
        .length(2, 100)
        .check(value, "Account holder name")
}

pub fn validate_bank_name(value: &str) -> Option<String> {
    ValidationRules::required().length(2, 100).check(value, "Bank name")
}

pub fn validate_account_number(value: &str) -> Option<String> {
    if value.trim().is_empty() {
        return Some("Account number is required".to_string());
    }
    if digits_only(value).len() < MIN_ACCOUNT_NUMBER_DIGITS {
        return Some(format!(
            "Account number must contain at least {} digits",
            MIN_ACCOUNT_NUMBER_DIGITS
        ));
    }
    None
}

/// Optional; when present at least 15 characters without spaces.
pub fn validate_iban(value: &str) -> Option<String> {
    let iban = compact_upper(value);
    if iban.is_empty() {
        return None;
    }
    if iban.len() < MIN_IBAN_LEN || !iban.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Some(format!("IBAN must be at least {} characters", MIN_IBAN_LEN));
    }
    None
}

/// Optional; when present 8 to 11 characters.
pub fn validate_swift(value: &str) -> Option<String> {
    let swift = compact_upper(value);
    if swift.is_empty() {
        return None;
    }
    if !SWIFT_LEN.contains(&swift.len()) || !swift.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Some("SWIFT code must be 8 to 11 characters".to_string());
    }
    None
}

pub fn validate_paypal_email(value: &str) -> Option<String> {
    if value.trim().is_empty() {
        return Some("PayPal email is required".to_string());
    }
    (!is_valid_email(value)).then(|| "Enter a valid PayPal email address".to_string())
}

fn bank_only(f: &PaymentMethodForm, check: fn(&str) -> Option<String>, value: &str) -> Option<String> {
    match f.method_type {
        PaymentMethodType::BankTransfer => check(value),
        PaymentMethodType::Paypal => None,
    }
}

fn check_holder(f: &PaymentMethodForm) -> Option<String> {
    bank_only(f, validate_account_holder_name, &f.account_holder_name)
}

fn check_bank_name(f: &PaymentMethodForm) -> Option<String> {
    bank_only(f, validate_bank_name, &f.bank_name)
}

fn check_account_number(f: &PaymentMethodForm) -> Option<String> {
    bank_only(f, validate_account_number, &f.account_number)
}

fn check_iban(f: &PaymentMethodForm) -> Option<String> {
    bank_only(f, validate_iban, &f.iban)
}

fn check_swift(f: &PaymentMethodForm) -> Option<String> {
    bank_only(f, validate_swift, &f.swift_code)
}

fn check_paypal(f: &PaymentMethodForm) -> Option<String> {
    match f.method_type {
        PaymentMethodType::Paypal => validate_paypal_email(&f.paypal_email),
        PaymentMethodType::BankTransfer => None,
    }
}

pub const PAYMENT_METHOD_RULES: &[FieldRule<PaymentMethodForm>] = &[
    FieldRule::new("account_holder_name", check_holder),
    FieldRule::new("bank_name", check_bank_name),
    FieldRule::new("account_number", check_account_number),
    FieldRule::new("iban", check_iban),
    FieldRule::new("swift_code", check_swift),
    FieldRule::new("paypal_email", check_paypal),
];

impl PaymentMethodForm {
    pub fn from_method(method: &PaymentMethod) -> Self {
        let bank = method.bank_details.clone().unwrap_or_default();
        Self {
            id: Some(method.id.clone()),
            method_type: method.method_type,
            account_holder_name: bank.account_holder_name,
            bank_name: bank.bank_name,
            account_number: bank.account_number,
            iban: bank.iban.unwrap_or_default(),
            swift_code: bank.swift_code.unwrap_or_default(),
            paypal_email: method.paypal_email.clone().unwrap_or_default(),
            is_default: method.is_default,
        }
    }

    pub fn validate(&self) -> FieldErrors {
        validate_all(self, PAYMENT_METHOD_RULES)
    }

    pub fn validate_field(&self, field: &str) -> Option<String> {
        validate_field(self, PAYMENT_METHOD_RULES, field)
    }

    /// Payload for the selected method type; fields of the other type are dropped.
    pub fn to_request(&self) -> Result<PaymentMethodRequest, FieldErrors> {
        self.validate().into_result()?;
        let optional = |v: String| (!v.is_empty()).then_some(v);
        Ok(match self.method_type {
            PaymentMethodType::BankTransfer => PaymentMethodRequest {
                method_type: self.method_type,
                bank_details: Some(BankDetails {
                    account_holder_name: self.account_holder_name.trim().to_string(),
                    bank_name: self.bank_name.trim().to_string(),
                    account_number: digits_only(&self.account_number),
                    iban: optional(compact_upper(&self.iban)),
                    swift_code: optional(compact_upper(&self.swift_code)),
                }),
                paypal_email: None,
                is_default: self.is_default,
            },
            PaymentMethodType::Paypal => PaymentMethodRequest {
                method_type: self.method_type,
                bank_details: None,
                paypal_email: Some(self.paypal_email.trim().to_string()),
                is_default: self.is_default,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_amount_accepts_comma() {
        assert_eq!(parse_amount("120,50"), Some(120.5));
        assert_eq!(parse_amount(" 75 "), Some(75.0));
        assert_eq!(parse_amount("abc"), None);
        assert_eq!(parse_amount(""), None);
        assert_eq!(parse_amount("inf"), None);
    }

    #[test]
    fn payout_amount_bounds() {
        assert!(validate_payout_amount(0.0, 500.0).is_some());
        assert!(validate_payout_amount(-5.0, 500.0).is_some());
        assert_eq!(
            validate_payout_amount(49.99, 500.0),
            Some("Minimum payout amount is €50.00".to_string())
        );
        assert!(validate_payout_amount(50.0, 500.0).is_none());
        assert!(validate_payout_amount(500.0, 500.0).is_none());
        assert!(validate_payout_amount(500.01, 500.0).is_some());
    }

    #[test]
    fn payout_form_collects_every_error() {
        let form = PayoutRequestForm {
            amount: "10".to_string(),
            payment_method_id: String::new(),
            note: String::new(),
            withdrawable_balance: 100.0,
        };
        let errors = form.to_request().unwrap_err();
        assert_eq!(errors.len(), 2);
        assert!(errors.contains("amount"));
        assert!(errors.contains("payment_method_id"));
    }

    #[test]
    fn payout_form_builds_request() {
        let form = PayoutRequestForm {
            amount: "60,00".to_string(),
            payment_method_id: "m1".to_string(),
            note: "  ".to_string(),
            withdrawable_balance: 100.0,
        };
        let request = form.to_request().unwrap();
        assert_eq!(request.amount, 60.0);
        assert_eq!(request.note, None);
    }

    fn paypal_method(id: &str, is_default: bool) -> PaymentMethod {
        PaymentMethod {
            id: id.to_string(),
            method_type: PaymentMethodType::Paypal,
            bank_details: None,
            paypal_email: Some(format!("{}@shop.de", id)),
            is_default,
            is_verified: true,
        }
    }

    fn selecting(id: &str) -> PayoutRequestForm {
        PayoutRequestForm {
            payment_method_id: id.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn default_method_is_preselected() {
        let methods = vec![paypal_method("m1", false), paypal_method("m2", true)];
        assert_eq!(selecting("").with_default_method(&methods).payment_method_id, "m2");
        assert_eq!(selecting("m1").with_default_method(&methods).payment_method_id, "m1");
    }

    #[test]
    fn deleted_method_selection_is_replaced() {
        let methods = vec![paypal_method("m1", false), paypal_method("m2", true)];
        assert_eq!(selecting("gone").with_default_method(&methods).payment_method_id, "m2");
        assert_eq!(
            selecting("gone").with_default_method(&methods[..1]).payment_method_id,
            "m1"
        );
        assert_eq!(selecting("m1").with_default_method(&[]).payment_method_id, "");
    }

    fn bank_form() -> PaymentMethodForm {
        PaymentMethodForm {
            method_type: PaymentMethodType::BankTransfer,
            account_holder_name: "Anna Schmidt".to_string(),
            bank_name: "Sparkasse".to_string(),
            account_number: "0532-013000".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn bank_form_without_optionals_is_valid() {
        assert!(bank_form().validate().is_empty());
    }

    #[test]
    fn bank_form_checks_iban_and_swift_when_present() {
        let mut form = bank_form();
        form.iban = "DE89 3704".to_string();
        form.swift_code = "COBADEFFXXXX".to_string();
        let errors = form.validate();
        assert!(errors.contains("iban"));
        assert!(errors.contains("swift_code"));

        form.iban = "de89 3704 0044 0532 0130 00".to_string();
        form.swift_code = "COBADEFF".to_string();
        let request = form.to_request().unwrap();
        let bank = request.bank_details.unwrap();
        assert_eq!(bank.iban.as_deref(), Some("DE89370400440532013000"));
        assert_eq!(bank.account_number, "0532013000");
        assert_eq!(request.paypal_email, None);
    }

    #[test]
    fn short_account_number_is_rejected() {
        let mut form = bank_form();
        form.account_number = "12-34".to_string();
        assert_eq!(
            form.validate_field("account_number"),
            Some("Account number must contain at least 6 digits".to_string())
        );
    }

    #[test]
    fn paypal_form_ignores_bank_fields() {
        let form = PaymentMethodForm {
            method_type: PaymentMethodType::Paypal,
            paypal_email: "anna@shop.de".to_string(),
            ..Default::default()
        };
        let request = form.to_request().unwrap();
        assert_eq!(request.bank_details, None);
        assert_eq!(request.paypal_email.as_deref(), Some("anna@shop.de"));

        let broken = PaymentMethodForm {
            paypal_email: "anna-at-shop".to_string(),
            ..form
        };
        assert!(broken.validate().contains("paypal_email"));
    }
}
