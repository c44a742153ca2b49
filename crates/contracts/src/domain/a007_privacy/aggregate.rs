use serde::{Deserialize, Serialize};

pub const MIN_POLICY_LENGTH: usize = 50;

/// Privacy policy text published on the storefront.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrivacyPolicy {
    #[serde(default, alias = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl PrivacyPolicy {
    pub fn validate(&self) -> Result<(), String> {
        if self.title.trim().is_empty() {
            return Err("Title is required".to_string());
        }
        if self.content.trim().chars().count() < MIN_POLICY_LENGTH {
            return Err(format!(
                "Policy text must be at least {} characters",
                MIN_POLICY_LENGTH
            ));
        }
        Ok(())
    }

    pub fn word_count(&self) -> usize {
        self.content.split_whitespace().count()
    }

    /// Whether `draft` differs from the stored text in anything but surrounding whitespace.
    pub fn is_changed(&self, draft: &PrivacyPolicy) -> bool {
        self.title.trim() != draft.title.trim() || self.content.trim() != draft.content.trim()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_empty_payload() {
        let p: PrivacyPolicy = serde_json::from_str("{}").unwrap();
        assert_eq!(p, PrivacyPolicy::default());
        assert!(p.validate().is_err());
    }

    #[test]
    fn short_text_rejected() {
        let p = PrivacyPolicy {
            title: "Privacy".to_string(),
            content: "We store your data.".to_string(),
            ..Default::default()
        };
        assert_eq!(
            p.validate(),
            Err("Policy text must be at least 50 characters".to_string())
        );
        assert_eq!(p.word_count(), 4);
    }

    #[test]
    fn whitespace_edits_are_not_changes() {
        let stored = PrivacyPolicy {
            title: "Privacy".to_string(),
            content: "Text".to_string(),
            ..Default::default()
        };
        let mut draft = stored.clone();
        draft.content = "Text\n".to_string();
        assert!(!stored.is_changed(&draft));
        draft.title = "Privacy policy".to_string();
        assert!(stored.is_changed(&draft));
    }
}
