use super::*;

#[test]
fn donate_href_without_campaign() {
    assert_eq!(donate_href(None), "/donate");
    assert_eq!(donate_href(Some("  ")), "/donate");
}

#[test]
fn donate_href_with_campaign_slug() {
    assert_eq!(donate_href(Some("school-biogas")), "/donate?campaign=school-biogas");
}
