//! Field-level validation primitives for form input.
//!
//! Forms collect errors per field into a [`FieldErrors`] map so every
//! problem is shown at once rather than one per submit attempt.

use std::collections::BTreeMap;

/// Field name to error message. BTreeMap keeps iteration order stable so
/// error rendering does not jump around between frames.
pub type FieldErrors = BTreeMap<&'static str, String>;

/// Require a trimmed minimum character count. Returns the message when the
/// input is too short (covers the empty case as well).
pub fn check_min_len(value: &str, min: usize, message: &str) -> Option<String> {
    if value.trim().chars().count() < min {
        return Some(message.to_string());
    }
    None
}

/// Require a non-empty value.
pub fn check_required(value: &str, message: &str) -> Option<String> {
    if value.trim().is_empty() {
        return Some(message.to_string());
    }
    None
}

/// Strict `YYYY-MM-DD` shape check: exactly ten ASCII characters, digits
/// everywhere except hyphens at positions 4 and 7. No calendar validation.
pub fn check_date_shape(value: &str, message: &str) -> Option<String> {
    let bytes = value.as_bytes();
    if bytes.len() != 10 {
        return Some(message.to_string());
    }
    for (idx, b) in bytes.iter().enumerate() {
        let ok = match idx {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        };
        if !ok {
            return Some(message.to_string());
        }
    }
    None
}

/// Parse a strictly positive number from a text buffer.
pub fn parse_positive(value: &str, message: &str) -> Result<f64, String> {
    match value.trim().parse::<f64>() {
        Ok(n) if n > 0.0 && n.is_finite() => Ok(n),
        _ => Err(message.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_min_len() {
        assert!(check_min_len("ab", 2, "too short").is_none());
        assert!(check_min_len("a", 2, "too short").is_some());
        assert!(check_min_len("   ", 2, "too short").is_some()); // whitespace only
        assert!(check_min_len("  ab  ", 2, "too short").is_none());
    }

    #[test]
    fn test_date_shape() {
        assert!(check_date_shape("1990-01-15", "bad").is_none());
        assert!(check_date_shape("15-01-1990", "bad").is_some());
        assert!(check_date_shape("1990/01/15", "bad").is_some());
        assert!(check_date_shape("1990-1-15", "bad").is_some());
        assert!(check_date_shape("", "bad").is_some());
        assert!(check_date_shape("1990-01-155", "bad").is_some());
    }

    #[test]
    fn test_parse_positive() {
        assert_eq!(parse_positive("0.5", "bad"), Ok(0.5));
        assert_eq!(parse_positive(" 42 ", "bad"), Ok(42.0));
        assert!(parse_positive("0", "bad").is_err());
        assert!(parse_positive("-1", "bad").is_err());
        assert!(parse_positive("abc", "bad").is_err());
        assert!(parse_positive("", "bad").is_err());
        assert!(parse_positive("inf", "bad").is_err());
    }
}
