use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+\-]+@[A-Za-z0-9](?:[A-Za-z0-9\-]*[A-Za-z0-9])?(?:\.[A-Za-z0-9](?:[A-Za-z0-9\-]*[A-Za-z0-9])?)*\.[A-Za-z]{2,}$")
        .expect("email pattern")
});

static PHONE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+?[0-9\s\-().]{7,20}$").expect("phone pattern"));

static URL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^https?://[A-Za-z0-9\-]+(?:\.[A-Za-z0-9\-]+)+(?::\d{1,5})?(?:[/?#]\S*)?$")
        .expect("url pattern")
});

/// Well-known formats a text field can be checked against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pattern {
    Email,
    Phone,
    Url,
}

impl Pattern {
    pub fn matches(&self, value: &str) -> bool {
        match self {
            Pattern::Email => is_valid_email(value),
            Pattern::Phone => is_valid_phone(value),
            Pattern::Url => is_valid_url(value),
        }
    }

    pub(crate) fn noun(&self) -> &'static str {
        match self {
            Pattern::Email => "email address",
            Pattern::Phone => "phone number",
            Pattern::Url => "URL",
        }
    }
}

pub fn is_valid_email(value: &str) -> bool {
    EMAIL.is_match(value.trim())
}

/// Digits with optional leading `+` and common separators; 7 to 15 digits.
pub fn is_valid_phone(value: &str) -> bool {
    let value = value.trim();
    let digits = value.chars().filter(char::is_ascii_digit).count();
    PHONE.is_match(value) && (7..=15).contains(&digits)
}

pub fn is_valid_url(value: &str) -> bool {
    URL.is_match(value.trim())
}

/// Keep only ASCII digits.
pub fn digits_only(value: &str) -> String {
    value.chars().filter(char::is_ascii_digit).collect()
}

/// Remove all whitespace and upper-case, as banks print IBAN/SWIFT codes.
pub fn compact_upper(value: &str) -> String {
    value
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn emails() {
        assert!(is_valid_email("seller@shop.de"));
        assert!(is_valid_email("first.last+tag@mail.example.com"));
        assert!(!is_valid_email("seller.shop.de"));
        assert!(!is_valid_email("seller@"));
        assert!(!is_valid_email("seller@shop"));
        assert!(!is_valid_email("@shop.de"));
        assert!(!is_valid_email("a b@shop.de"));
    }

    #[test]
    fn phones() {
        assert!(is_valid_phone("+49 30 1234567"));
        assert!(is_valid_phone("(030) 123-4567"));
        assert!(!is_valid_phone("12345"));
        assert!(!is_valid_phone("call me"));
        assert!(!is_valid_phone("+1 234 567 890 123 456 7"));
    }

    #[test]
    fn urls() {
        assert!(is_valid_url("https://shop.example.com"));
        assert!(is_valid_url("http://instagram.com/my_store?ref=1"));
        assert!(!is_valid_url("instagram.com/my_store"));
        assert!(!is_valid_url("ftp://files.example.com"));
        assert!(!is_valid_url("https://localhost"));
    }

    #[test]
    fn helpers() {
        assert_eq!(digits_only("12-34 56"), "123456");
        assert_eq!(compact_upper("de89 3704 0044"), "DE8937040044");
    }
}
