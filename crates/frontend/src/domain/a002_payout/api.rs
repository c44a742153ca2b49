//! Earnings, payouts, payment methods and invoices.
//!
//! `seller` scopes a call to one seller (admin view); `None` means the
//! signed-in seller.

use contracts::domain::a002_payout::aggregate::{
    EarningsSummary, Invoice, PaymentMethod, PaymentMethodRequest, Payout, PayoutRequest,
};

use crate::shared::http::{self, Envelope};

fn scoped(path: &str, seller: Option<&str>) -> String {
    match seller {
        Some(id) => format!("{}?sellerId={}", path, urlencoding::encode(id)),
        None => path.to_string(),
    }
}

pub async fn fetch_earnings(seller: Option<&str>) -> Result<EarningsSummary, String> {
    http::get_json::<Envelope<EarningsSummary>>(
        &scoped("/api/payouts/earnings", seller),
        "Failed to load earnings",
    )
    .await
    .map(Envelope::into_inner)
}

pub async fn fetch_payouts(seller: Option<&str>) -> Result<Vec<Payout>, String> {
    http::get_json::<Envelope<Vec<Payout>>>(&scoped("/api/payouts", seller), "Failed to load payouts")
        .await
        .map(Envelope::into_inner)
}

pub async fn request_payout(request: &PayoutRequest) -> Result<Payout, String> {
    http::post_json::<_, Envelope<Payout>>("/api/payouts/request", request, "Failed to request payout")
        .await
        .map(Envelope::into_inner)
}

pub async fn fetch_payment_methods(seller: Option<&str>) -> Result<Vec<PaymentMethod>, String> {
    http::get_json::<Envelope<Vec<PaymentMethod>>>(
        &scoped("/api/payment-methods", seller),
        "Failed to load payment methods",
    )
    .await
    .map(Envelope::into_inner)
}

pub async fn create_payment_method(request: &PaymentMethodRequest) -> Result<PaymentMethod, String> {
    http::post_json::<_, Envelope<PaymentMethod>>(
        "/api/payment-methods",
        request,
        "Failed to add payment method",
    )
    .await
    .map(Envelope::into_inner)
}

pub async fn update_payment_method(
    id: &str,
    request: &PaymentMethodRequest,
) -> Result<PaymentMethod, String> {
    http::put_json::<_, Envelope<PaymentMethod>>(
        &format!("/api/payment-methods/{}", id),
        request,
        "Failed to update payment method",
    )
    .await
    .map(Envelope::into_inner)
}

pub async fn delete_payment_method(id: &str) -> Result<(), String> {
    http::delete(
        &format!("/api/payment-methods/{}", id),
        "Failed to delete payment method",
    )
    .await
}

pub async fn set_default_payment_method(id: &str) -> Result<(), String> {
    http::put_unit(
        &format!("/api/payment-methods/{}/default", id),
        &serde_json::json!({}),
        "Failed to set default payment method",
    )
    .await
}

pub async fn fetch_invoices(seller: Option<&str>) -> Result<Vec<Invoice>, String> {
    http::get_json::<Envelope<Vec<Invoice>>>(&scoped("/api/invoices", seller), "Failed to load invoices")
        .await
        .map(Envelope::into_inner)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scoped_adds_seller_query() {
        assert_eq!(scoped("/api/payouts", None), "/api/payouts");
        assert_eq!(
            scoped("/api/payouts", Some("s 1")),
            "/api/payouts?sellerId=s%201"
        );
    }
}
