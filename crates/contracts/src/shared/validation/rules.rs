//! Declarative constraints for a single text or numeric field

use super::patterns::Pattern;

/// Validation rules for a field
/// Copy trait for efficient passing
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ValidationRules {
    pub required: bool,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
    pub pattern: Option<Pattern>,
    pub custom_error: Option<&'static str>,
}

impl ValidationRules {
    /// Create empty validation rules (all optional, no constraints)
    pub const fn none() -> Self {
        Self {
            required: false,
            min: None,
            max: None,
            min_length: None,
            max_length: None,
            pattern: None,
            custom_error: None,
        }
    }

    /// Create validation rules for required field
    pub const fn required() -> Self {
        Self {
            required: true,
            ..Self::none()
        }
    }

    pub const fn length(self, min: usize, max: usize) -> Self {
        Self {
            min_length: Some(min),
            max_length: Some(max),
            ..self
        }
    }

    pub const fn max_length(self, max: usize) -> Self {
        Self {
            max_length: Some(max),
            ..self
        }
    }

    pub const fn min_length(self, min: usize) -> Self {
        Self {
            min_length: Some(min),
            ..self
        }
    }

    pub const fn pattern(self, pattern: Pattern) -> Self {
        Self {
            pattern: Some(pattern),
            ..self
        }
    }

    pub const fn with_error(self, message: &'static str) -> Self {
        Self {
            custom_error: Some(message),
            ..self
        }
    }

    /// Check if field is required
    pub const fn is_required(&self) -> bool {
        self.required
    }

    /// Validate a string value against the rules.
    ///
    /// Empty optional values pass without further checks. Lengths count
    /// characters of the trimmed value.
    pub fn validate_string(&self, value: &str, field_label: &str) -> Result<(), String> {
        let value = value.trim();
        if value.is_empty() {
            return if self.required {
                Err(format!("{} is required", field_label))
            } else {
                Ok(())
            };
        }

        let len = value.chars().count();
        if let Some(min) = self.min_length {
            if len < min {
                return Err(format!(
                    "{} must be at least {} characters",
                    field_label, min
                ));
            }
        }

        if let Some(max) = self.max_length {
            if len > max {
                return Err(format!(
                    "{} must not exceed {} characters",
                    field_label, max
                ));
            }
        }

        if let Some(pattern) = self.pattern {
            if !pattern.matches(value) {
                return Err(self
                    .custom_error
                    .map(str::to_string)
                    .unwrap_or_else(|| format!("{} is not a valid {}", field_label, pattern.noun())));
            }
        }

        Ok(())
    }

    /// Validate a numeric value against min/max rules
    pub fn validate_number(&self, value: f64, field_label: &str) -> Result<(), String> {
        if !value.is_finite() {
            return Err(format!("{} must be a number", field_label));
        }

        if let Some(min) = self.min {
            if value < min {
                return Err(format!("{} must be at least {}", field_label, min));
            }
        }

        if let Some(max) = self.max {
            if value > max {
                return Err(format!("{} must not exceed {}", field_label, max));
            }
        }

        Ok(())
    }

    /// Same as [`Self::validate_string`] but shaped for field-rule closures.
    pub fn check(&self, value: &str, field_label: &str) -> Option<String> {
        self.validate_string(value, field_label).err()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn optional_empty_value_passes() {
        let rules = ValidationRules::none().length(3, 10);
        assert!(rules.validate_string("   ", "Name").is_ok());
    }

    #[test]
    fn required_empty_value_fails() {
        assert_eq!(
            ValidationRules::required().validate_string("", "Store name"),
            Err("Store name is required".to_string())
        );
    }

    #[test]
    fn length_bounds_count_chars() {
        let rules = ValidationRules::required().length(3, 5);
        assert!(rules.validate_string("ab", "Code").is_err());
        assert!(rules.validate_string("äöü", "Code").is_ok());
        assert!(rules.validate_string("abcdef", "Code").is_err());
    }

    #[test]
    fn pattern_uses_custom_error() {
        let rules = ValidationRules::required()
            .pattern(Pattern::Email)
            .with_error("Enter a valid email address");
        assert_eq!(
            rules.check("nope", "Email"),
            Some("Enter a valid email address".to_string())
        );
        assert_eq!(rules.check("a@b.io", "Email"), None);
    }

    #[test]
    fn number_bounds() {
        let rules = ValidationRules {
            min: Some(1.0),
            max: Some(10.0),
            ..ValidationRules::none()
        };
        assert!(rules.validate_number(0.5, "Qty").is_err());
        assert!(rules.validate_number(5.0, "Qty").is_ok());
        assert!(rules.validate_number(f64::NAN, "Qty").is_err());
    }
}
