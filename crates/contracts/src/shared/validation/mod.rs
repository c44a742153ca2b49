//! Field validation shared by every dashboard form.
//!
//! A form declares a table of [`FieldRule`]s, one per field. The UI runs a
//! single rule on blur ([`validate_field`]) and the whole table on step
//! advance or submit ([`validate_all`]), which reports every failing field.

pub mod patterns;
pub mod rules;

use std::collections::BTreeMap;

pub use patterns::{compact_upper, digits_only, is_valid_email, is_valid_phone, is_valid_url, Pattern};
pub use rules::ValidationRules;

/// Field name → predicate returning the error message, if any.
pub struct FieldRule<F> {
    pub field: &'static str,
    pub check: fn(&F) -> Option<String>,
}

impl<F> FieldRule<F> {
    pub const fn new(field: &'static str, check: fn(&F) -> Option<String>) -> Self {
        Self { field, check }
    }
}

/// Error messages keyed by field name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<String, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn insert(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.insert(field.into(), message.into());
    }

    pub fn remove(&mut self, field: &str) {
        self.0.remove(field);
    }

    /// Replace or clear the entry of one field.
    pub fn set(&mut self, field: &str, message: Option<String>) {
        match message {
            Some(message) => self.insert(field, message),
            None => self.remove(field),
        }
    }

    /// Merge `other` into `self`, keeping entries of `other` on conflict.
    pub fn extend(&mut self, other: FieldErrors) {
        self.0.extend(other.0);
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// First message in field order, used for a summary toast.
    pub fn first_message(&self) -> Option<&str> {
        self.0.values().next().map(String::as_str)
    }

    pub fn into_result(self) -> Result<(), FieldErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

/// Run every rule and collect all failures.
pub fn validate_all<F>(form: &F, rules: &[FieldRule<F>]) -> FieldErrors {
    let mut errors = FieldErrors::new();
    for rule in rules {
        if let Some(message) = (rule.check)(form) {
            errors.insert(rule.field, message);
        }
    }
    errors
}

/// Run the rules of one field. Unknown fields pass.
pub fn validate_field<F>(form: &F, rules: &[FieldRule<F>], field: &str) -> Option<String> {
    rules
        .iter()
        .filter(|rule| rule.field == field)
        .find_map(|rule| (rule.check)(form))
}

/// Run only the rules whose field is listed in `fields`.
pub fn validate_fields<F>(form: &F, rules: &[FieldRule<F>], fields: &[&str]) -> FieldErrors {
    let mut errors = FieldErrors::new();
    for rule in rules.iter().filter(|rule| fields.contains(&rule.field)) {
        if errors.contains(rule.field) {
            continue;
        }
        if let Some(message) = (rule.check)(form) {
            errors.insert(rule.field, message);
        }
    }
    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Form {
        name: String,
        email: String,
    }

    fn check_name(f: &Form) -> Option<String> {
        ValidationRules::required().length(2, 20).check(&f.name, "Name")
    }

    fn check_email(f: &Form) -> Option<String> {
        ValidationRules::required()
            .pattern(Pattern::Email)
            .check(&f.email, "Email")
    }

    const RULES: &[FieldRule<Form>] = &[
        FieldRule::new("name", check_name),
        FieldRule::new("email", check_email),
    ];

    #[test]
    fn validate_all_aggregates_every_failure() {
        let form = Form {
            name: String::new(),
            email: "broken".to_string(),
        };
        let errors = validate_all(&form, RULES);
        assert_eq!(errors.len(), 2);
        assert_eq!(errors.get("name"), Some("Name is required"));
        assert!(errors.contains("email"));
        assert_eq!(errors.first_message(), Some("Email is not a valid email address"));
    }

    #[test]
    fn validate_field_checks_one_field() {
        let form = Form {
            name: "Jo".to_string(),
            email: "broken".to_string(),
        };
        assert_eq!(validate_field(&form, RULES, "name"), None);
        assert!(validate_field(&form, RULES, "email").is_some());
        assert_eq!(validate_field(&form, RULES, "unknown"), None);
    }

    #[test]
    fn validate_fields_limits_scope() {
        let form = Form {
            name: String::new(),
            email: "broken".to_string(),
        };
        let errors = validate_fields(&form, RULES, &["email"]);
        assert_eq!(errors.len(), 1);
        assert!(errors.contains("email"));
    }

    #[test]
    fn set_clears_entry() {
        let mut errors = FieldErrors::new();
        errors.set("a", Some("bad".to_string()));
        assert!(errors.contains("a"));
        errors.set("a", None);
        assert!(errors.into_result().is_ok());
    }
}
