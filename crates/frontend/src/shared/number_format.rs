//! Number and money formatting for tables and summary cards.

/// Format with a space as thousands separator and `decimals` fraction digits.
///
/// ```rust,ignore
/// assert_eq!(format_number_with_decimals(1234.567, 2), "1 234.57");
/// ```
pub fn format_number_with_decimals(value: f64, decimals: usize) -> String {
    let formatted = format!("{:.*}", decimals, value);
    let (integer_part, decimal_part) = match formatted.split_once('.') {
        Some((i, d)) => (i, Some(d)),
        None => (formatted.as_str(), None),
    };

    let mut result = String::new();
    for (i, c) in integer_part.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 && c != '-' {
            result.push(' ');
        }
        result.push(c);
    }
    let integer: String = result.chars().rev().collect();

    match decimal_part {
        Some(d) => format!("{}.{}", integer, d),
        None => integer,
    }
}

/// `1234.5` → `€1 234.50`; negative values keep the sign in front.
pub fn format_money(value: f64) -> String {
    if value < 0.0 {
        format!("-€{}", format_number_with_decimals(-value, 2))
    } else {
        format!("€{}", format_number_with_decimals(value, 2))
    }
}

pub fn format_percent(value: f64) -> String {
    let s = format_number_with_decimals(value, 2);
    let trimmed = s.trim_end_matches('0').trim_end_matches('.');
    format!("{}%", trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thousands_separator() {
        assert_eq!(format_number_with_decimals(1234567.891, 2), "1 234 567.89");
        assert_eq!(format_number_with_decimals(-1234.0, 0), "-1 234");
        assert_eq!(format_number_with_decimals(999.0, 1), "999.0");
    }

    #[test]
    fn test_money() {
        assert_eq!(format_money(50.0), "€50.00");
        assert_eq!(format_money(-12345.5), "-€12 345.50");
    }

    #[test]
    fn test_percent() {
        assert_eq!(format_percent(12.5), "12.5%");
        assert_eq!(format_percent(10.0), "10%");
    }
}
