//! Display formatting for amounts, timestamps, and form text.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeZone};

/// Trimmed text, or `None` when blank. Used to turn empty inputs into `null`.
pub fn optional_text(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() { None } else { Some(trimmed.to_owned()) }
}

/// Group an integer amount with comma thousands separators: `50000` -> `50,000`.
pub fn group_thousands(amount: i64) -> String {
    let digits = amount.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if amount < 0 {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// `"50,000 UGX"`, or an em dash placeholder for a missing amount.
pub fn format_amount(amount: Option<i64>, currency: Option<&str>) -> String {
    match amount {
        Some(value) => {
            let currency = currency.filter(|c| !c.is_empty()).unwrap_or("UGX");
            format!("{} {currency}", group_thousands(value))
        }
        None => "—".to_owned(),
    }
}

/// [`parse_timestamp_in`] on the browser's local clock.
pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    parse_timestamp_in(raw, &Local)
}

/// Parse the timestamp shapes the backend emits: RFC 3339 with an offset,
/// or a naive ISO datetime with optional fractional seconds, or a bare date.
///
/// Offset timestamps are shifted into `tz` before the offset is dropped;
/// naive ones are taken as already being wall-clock time.
pub fn parse_timestamp_in<Tz: TimeZone>(raw: &str, tz: &Tz) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(tz).naive_local());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(dt);
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M") {
        return Some(dt);
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}

/// `"12 Mar 2025"`; unparseable input is echoed, missing input is `-`.
pub fn format_date(raw: Option<&str>) -> String {
    match raw {
        None => "-".to_owned(),
        Some(value) => parse_timestamp(value).map_or_else(|| value.to_owned(), |dt| dt.format("%d %b %Y").to_string()),
    }
}

/// `"12 Mar 2025, 14:05"`; unparseable input is echoed, missing input is `-`.
pub fn format_datetime(raw: Option<&str>) -> String {
    match raw {
        None => "-".to_owned(),
        Some(value) => {
            parse_timestamp(value).map_or_else(|| value.to_owned(), |dt| dt.format("%d %b %Y, %H:%M").to_string())
        }
    }
}

/// Lowercase ASCII slug: `"Biogas Systems & More"` -> `"biogas-systems-more"`.
pub fn slugify(raw: &str) -> String {
    let mut slug = String::with_capacity(raw.len());
    let mut pending_dash = false;
    for ch in raw.chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(ch.to_ascii_lowercase());
        } else {
            pending_dash = true;
        }
    }
    slug
}

/// `"in_review"` -> `"in review"`.
pub fn humanize(raw: &str) -> String {
    raw.replace('_', " ")
}
