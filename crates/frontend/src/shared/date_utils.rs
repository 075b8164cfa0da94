//! Date and price formatting helpers for tables and cards.

use chrono::{DateTime, NaiveDate};

/// Format an RFC 3339 timestamp as `dd.mm.yyyy hh:mm:ss`. Unparsable
/// input is returned as-is.
pub fn format_datetime(raw: &str) -> String {
    match DateTime::parse_from_rfc3339(raw) {
        Ok(dt) => dt.format("%d.%m.%Y %H:%M:%S").to_string(),
        Err(_) => raw.to_string(),
    }
}

/// Format a date (or timestamp) as `dd.mm.yyyy`.
pub fn format_date(raw: &str) -> String {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.format("%d.%m.%Y").to_string();
    }
    match NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        Ok(d) => d.format("%d.%m.%Y").to_string(),
        Err(_) => raw.to_string(),
    }
}

/// Menu price with currency symbol, two decimals.
pub fn format_price(value: f64) -> String {
    format!("₹{:.2}", value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_datetime() {
        assert_eq!(
            format_datetime("2024-03-15T14:02:26.123Z"),
            "15.03.2024 14:02:26"
        );
        assert_eq!(
            format_datetime("2024-12-31T23:59:59Z"),
            "31.12.2024 23:59:59"
        );
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2024-03-15"), "15.03.2024");
        assert_eq!(format_date("2024-03-15T14:02:26.123Z"), "15.03.2024");
    }

    #[test]
    fn test_invalid_format() {
        assert_eq!(format_datetime("invalid"), "invalid");
        assert_eq!(format_date("invalid"), "invalid");
    }

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(120.0), "₹120.00");
        assert_eq!(format_price(99.5), "₹99.50");
    }
}
