use super::*;

#[test]
fn with_query_skips_blank_pairs() {
    let path = with_query("/x", &[("a", "1".to_owned()), ("b", "  ".to_owned()), ("c", "z".to_owned())]);
    assert_eq!(path, "/x?a=1&c=z");
}

#[test]
fn with_query_without_values_returns_bare_path() {
    assert_eq!(with_query("/x", &[("a", String::new())]), "/x");
}

#[test]
fn with_query_encodes_reserved_characters() {
    assert_eq!(with_query("/x", &[("q", "a&b=c".to_owned())]), "/x?q=a%26b%3Dc");
}

#[test]
fn segment_encodes_spaces_and_slashes() {
    assert_eq!(segment("biogas-unit"), "biogas-unit");
    assert_eq!(segment("a b/c"), "a%20b%2Fc");
}

#[test]
fn public_projects_path_matches_listing_page() {
    assert_eq!(projects_path(PUBLIC_PROJECTS_LIMIT, 1), "/projects?limit=12&page=1");
}

#[test]
fn featured_projects_path_limits_to_three() {
    assert_eq!(featured_projects_path(), "/projects?featured=true&limit=3");
}

#[test]
fn detail_paths_use_slug_segment() {
    assert_eq!(project_path("school-biogas"), "/projects/school-biogas");
    assert_eq!(service_path("construction"), "/services/construction");
    assert_eq!(inquiry_path("i-1"), "/inquiries/i-1");
    assert_eq!(campaign_path("c-1"), "/campaigns/c-1");
    assert_eq!(testimonial_path("t-1"), "/testimonials/t-1");
    assert_eq!(user_role_path("u-1"), "/users/u-1/role");
}

#[test]
fn campaigns_path_filters_status_when_given() {
    assert_eq!(campaigns_path(None), "/campaigns");
    assert_eq!(campaigns_path(Some(CampaignStatus::Active)), "/campaigns?status=active");
}

#[test]
fn testimonials_path_featured_flag() {
    assert_eq!(testimonials_path(true), "/testimonials?featured=true");
    assert_eq!(testimonials_path(false), "/testimonials");
}

#[test]
fn dashboard_pages_request_confirmed_donations_at_max_limit() {
    assert_eq!(confirmed_donations_page_path(0), "/donations?status=confirmed&skip=0&limit=200");
    assert_eq!(confirmed_donations_page_path(400), "/donations?status=confirmed&skip=400&limit=200");
    assert_eq!(campaigns_page_path(0), "/campaigns?skip=0&limit=200");
}

#[test]
fn next_skip_advances_on_full_pages_only() {
    assert_eq!(next_skip(0, 200), Some(200));
    assert_eq!(next_skip(200, 200), Some(400));
    assert_eq!(next_skip(400, 37), None);
    assert_eq!(next_skip(0, 0), None);
}

#[test]
fn next_skip_stops_at_row_cap() {
    assert_eq!(next_skip(MAX_WALK_ROWS - MAX_PAGE_LIMIT, 200), None);
}
