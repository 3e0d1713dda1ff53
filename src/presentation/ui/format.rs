//! Display formatting helpers.

use chrono::{DateTime, Utc};

/// Formats an XRP amount with thousands separators, dropping the fraction
/// when it is whole.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn format_xrp(amount: f64) -> String {
    let whole = amount.trunc().max(0.0) as u64;
    let mut grouped = String::new();
    let digits = whole.to_string();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    let cents = (((amount - amount.trunc()) * 100.0).round() as u64).min(99);
    if cents == 0 {
        format!("{grouped} XRP")
    } else {
        format!("{grouped}.{cents:02} XRP")
    }
}

/// Formats a count with thousands separators.
#[must_use]
pub fn format_count(count: u64) -> String {
    let digits = count.to_string();
    let mut grouped = String::new();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}

/// Formats a date with the configured chrono format string.
#[must_use]
pub fn format_date(date: DateTime<Utc>, format: &str) -> String {
    date.format(format).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_xrp_groups_thousands() {
        assert_eq!(format_xrp(1_234_567.0), "1,234,567 XRP");
        assert_eq!(format_xrp(999.0), "999 XRP");
        assert_eq!(format_xrp(0.0), "0 XRP");
    }

    #[test]
    fn test_format_xrp_keeps_cents() {
        assert_eq!(format_xrp(1_000.5), "1,000.50 XRP");
    }

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(2_412), "2,412");
        assert_eq!(format_count(51), "51");
    }

    #[test]
    fn test_format_date() {
        let date = DateTime::<Utc>::from_timestamp(1_751_328_000, 0).unwrap_or_default();
        assert_eq!(format_date(date, "%b %d, %Y"), "Jul 01, 2025");
    }
}
