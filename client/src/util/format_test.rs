use super::*;

#[test]
fn optional_text_trims_and_drops_blank() {
    assert_eq!(optional_text("  Wakiso "), Some("Wakiso".to_owned()));
    assert_eq!(optional_text("   "), None);
}

#[test]
fn group_thousands_inserts_commas() {
    assert_eq!(group_thousands(0), "0");
    assert_eq!(group_thousands(999), "999");
    assert_eq!(group_thousands(50_000), "50,000");
    assert_eq!(group_thousands(1_234_567), "1,234,567");
    assert_eq!(group_thousands(-75_000), "-75,000");
}

#[test]
fn format_amount_defaults_currency_and_placeholder() {
    assert_eq!(format_amount(Some(50_000), Some("USD")), "50,000 USD");
    assert_eq!(format_amount(Some(50_000), None), "50,000 UGX");
    assert_eq!(format_amount(None, None), "—");
}

#[test]
fn format_amount_shows_zero_as_amount() {
    assert_eq!(format_amount(Some(0), None), "0 UGX");
    assert_eq!(format_amount(Some(0), Some("USD")), "0 USD");
}

#[test]
fn parse_timestamp_accepts_backend_shapes() {
    assert!(parse_timestamp("2025-03-12T14:05:00Z").is_some());
    assert!(parse_timestamp("2025-03-12T14:05:00+03:00").is_some());
    assert!(parse_timestamp("2025-03-12T14:05:00.123456").is_some());
    assert!(parse_timestamp("2025-03-12T14:05").is_some());
    assert!(parse_timestamp("2025-03-12").is_some());
    assert!(parse_timestamp("yesterday").is_none());
}

#[test]
fn parse_timestamp_in_shifts_offsets_into_zone() {
    let kampala = chrono::FixedOffset::east_opt(3 * 3600).unwrap();
    let utc_late = parse_timestamp_in("2025-03-31T22:30:00Z", &kampala).unwrap();
    assert_eq!(utc_late.to_string(), "2025-04-01 01:30:00");
    let local_early = parse_timestamp_in("2025-04-01T01:00:00+03:00", &chrono::Utc).unwrap();
    assert_eq!(local_early.to_string(), "2025-03-31 22:00:00");
}

#[test]
fn parse_timestamp_in_leaves_naive_values_alone() {
    let kampala = chrono::FixedOffset::east_opt(3 * 3600).unwrap();
    let naive = parse_timestamp_in("2025-04-01T00:15:00", &kampala).unwrap();
    assert_eq!(naive.to_string(), "2025-04-01 00:15:00");
}

#[test]
fn format_date_handles_missing_and_garbage() {
    assert_eq!(format_date(Some("2025-03-12T14:05:00")), "12 Mar 2025");
    assert_eq!(format_date(Some("not-a-date")), "not-a-date");
    assert_eq!(format_date(None), "-");
}

#[test]
fn format_datetime_includes_time() {
    assert_eq!(format_datetime(Some("2025-03-12T14:05:00")), "12 Mar 2025, 14:05");
}

#[test]
fn slugify_collapses_separators() {
    assert_eq!(slugify("Biogas Systems & More"), "biogas-systems-more");
    assert_eq!(slugify("  --Farm 2025-- "), "farm-2025");
    assert_eq!(slugify(""), "");
}

#[test]
fn humanize_replaces_underscores() {
    assert_eq!(humanize("in_review"), "in review");
}
