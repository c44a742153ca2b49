use contracts::domain::a007_privacy::aggregate::PrivacyPolicy;

use crate::shared::http::{self, Envelope};

/// `None` while no policy has been published yet.
pub async fn fetch_policy() -> Result<Option<PrivacyPolicy>, String> {
    let value =
        http::get_json::<serde_json::Value>("/api/privacy-policy", "Failed to load privacy policy")
            .await?;
    http::optional_payload(value)
}

pub async fn save_policy(policy: &PrivacyPolicy) -> Result<PrivacyPolicy, String> {
    http::put_json::<_, Envelope<PrivacyPolicy>>("/api/privacy-policy", policy, "Failed to save privacy policy")
        .await
        .map(Envelope::into_inner)
}
