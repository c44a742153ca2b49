use serde::{Deserialize, Serialize};

/// Error payload returned by the API on non-2xx responses.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl ApiErrorBody {
    /// Parse an error body; anything that is not the expected JSON yields an empty body.
    pub fn from_text(text: &str) -> Self {
        serde_json::from_str(text).unwrap_or_default()
    }

    /// Text shown to the user: the server's `message`, then `error`, then `fallback`.
    pub fn user_message(&self, status: u16, fallback: &str) -> String {
        self.message
            .as_deref()
            .or(self.error.as_deref())
            .map(str::trim)
            .filter(|m| !m.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| match status {
                0 => fallback.to_string(),
                _ => format!("{} (HTTP {})", fallback, status),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefers_server_message() {
        let body = ApiErrorBody::from_text(r#"{"message":"Insufficient balance","error":"Bad Request"}"#);
        assert_eq!(body.user_message(400, "Request failed"), "Insufficient balance");
    }

    #[test]
    fn falls_back_to_error_field() {
        let body = ApiErrorBody::from_text(r#"{"error":"Not found"}"#);
        assert_eq!(body.user_message(404, "Request failed"), "Not found");
    }

    #[test]
    fn generic_fallback_for_non_json() {
        let body = ApiErrorBody::from_text("<html>502</html>");
        assert_eq!(body.user_message(502, "Request failed"), "Request failed (HTTP 502)");
        assert_eq!(body.user_message(0, "Network error"), "Network error");
    }
}
