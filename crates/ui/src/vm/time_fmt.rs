use chrono::{DateTime, NaiveDate, Utc};

/// "Sep 2, 2024".
#[must_use]
pub fn format_date(value: DateTime<Utc>) -> String {
    value.format("%b %-d, %Y").to_string()
}

/// Value for an `<input type="date">`.
#[must_use]
pub fn format_date_input(value: DateTime<Utc>) -> String {
    value.format("%Y-%m-%d").to_string()
}

/// Parse an `<input type="date">` value as midnight UTC.
#[must_use]
pub fn parse_date_input(raw: &str) -> Option<DateTime<Utc>> {
    let date = NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").ok()?;
    Some(date.and_hms_opt(0, 0, 0)?.and_utc())
}

/// Hours without a trailing `.0`: "3", "4.5".
#[must_use]
pub fn format_hours(hours: f64) -> String {
    if hours.fract() == 0.0 {
        format!("{hours:.0}")
    } else {
        format!("{hours}")
    }
}
