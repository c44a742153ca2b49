use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: Option<String>,
    pub user: UserInfo,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshRequest {
    pub refresh_token: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshResponse {
    pub access_token: String,
}

/// The signed-in user as reported by the API.
///
/// Only `role`, `status`, `is_seller` and `seller_status` take part in access
/// decisions; the rest is display data.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInfo {
    #[serde(alias = "_id")]
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    pub role: String,
    /// `Some(false)` means the account is suspended. Absent is treated as active.
    #[serde(default)]
    pub status: Option<bool>,
    #[serde(default)]
    pub is_seller: Option<bool>,
    #[serde(default)]
    pub seller_status: Option<String>,
}

impl UserInfo {
    pub fn display_name(&self) -> String {
        self.name
            .clone()
            .or_else(|| self.email.clone())
            .unwrap_or_else(|| self.id.clone())
    }

    pub fn is_suspended(&self) -> bool {
        self.status == Some(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_info_accepts_api_field_names() {
        let json = r#"{
            "_id": "65f1",
            "name": "Anna",
            "role": "Seller",
            "status": true,
            "isSeller": true,
            "sellerStatus": "approved"
        }"#;
        let user: UserInfo = serde_json::from_str(json).unwrap();
        assert_eq!(user.id, "65f1");
        assert_eq!(user.is_seller, Some(true));
        assert_eq!(user.seller_status.as_deref(), Some("approved"));
        assert!(!user.is_suspended());
    }

    #[test]
    fn missing_status_is_not_suspended() {
        let user: UserInfo = serde_json::from_str(r#"{"id":"1","role":"admin"}"#).unwrap();
        assert_eq!(user.status, None);
        assert!(!user.is_suspended());
        assert_eq!(user.display_name(), "1");
    }
}
