//! # Shared Utility Functions
//!
//! Display formatting helpers used across the workspace.
//!
//! ## Usage
//!
//! ```rust
//! use shared::utils::format_number;
//!
//! assert_eq!(format_number(72350.9, 2), "72,350.90");
//! ```

/// Format a number with thousands separators and a fixed number of decimals.
///
/// Used for fiat values and large quantities in tables and cards.
pub fn format_number(value: f64, decimals: usize) -> String {
    let formatted = format!("{:.*}", decimals, value.abs());
    let (int_part, frac_part) = match formatted.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (formatted.as_str(), None),
    };

    // Insert a comma every three digits, right to left
    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (idx, ch) in int_part.chars().enumerate() {
        if idx > 0 && (int_part.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if value < 0.0 { "-" } else { "" };
    match frac_part {
        Some(frac) => format!("{}{}.{}", sign, grouped, frac),
        None => format!("{}{}", sign, grouped),
    }
}

/// Format a signed percentage with two decimals, e.g. `+2.50%` / `-0.75%`.
pub fn format_percent(value: f64) -> String {
    if value >= 0.0 {
        format!("+{:.2}%", value)
    } else {
        format!("{:.2}%", value)
    }
}

/// Format a USD amount with a leading `$`, negative values as `-$..`.
pub fn format_usd(value: f64) -> String {
    if value < 0.0 {
        format!("-${}", format_number(-value, 2))
    } else {
        format!("${}", format_number(value, 2))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_thousands() {
        assert_eq!(format_number(1234567.891, 2), "1,234,567.89");
        assert_eq!(format_number(999.0, 2), "999.00");
        assert_eq!(format_number(1000.0, 0), "1,000");
    }

    #[test]
    fn keeps_sign() {
        assert_eq!(format_number(-1280.45, 2), "-1,280.45");
        assert_eq!(format_usd(-1280.45), "-$1,280.45");
        assert_eq!(format_usd(72350.9), "$72,350.90");
    }

    #[test]
    fn percent_is_signed() {
        assert_eq!(format_percent(2.5), "+2.50%");
        assert_eq!(format_percent(-0.75), "-0.75%");
        assert_eq!(format_percent(0.0), "+0.00%");
    }
}
