//! Typed calls for each backend resource.
//!
//! DESIGN
//! ======
//! Path construction lives in small pure functions so query encoding can be
//! tested without a browser; the async wrappers only pair a path with the
//! generic verbs in `api`.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "endpoints_test.rs"]
mod endpoints_test;

use serde::de::{DeserializeOwned, IgnoredAny};
use url::form_urlencoded;

use super::api::{self, ApiError};
use super::types::{
    Campaign, CampaignPayload, CampaignStatus, Donation, DonationIntent, DonationPayload, DonationStatus, Inquiry,
    InquiryPayload, InquiryUpdate, Listing, Project, ProjectPayload, RolePayload, Service, ServicePayload, Stats,
    Subscriber, SubscriberPayload, Testimonial, TestimonialPayload, TestimonialUpdate, User, UserRole,
};
use crate::state::admin::{DonationFilters, InquiryFilters};

pub const PUBLIC_PROJECTS_LIMIT: u32 = 12;
pub const ADMIN_LIST_LIMIT: u32 = 100;
pub const FEATURED_PROJECTS_LIMIT: u32 = 3;
/// Largest page size the backend accepts.
pub const MAX_PAGE_LIMIT: u32 = 200;
/// Upper bound on rows pulled by a paged walk.
pub const MAX_WALK_ROWS: u32 = 10_000;

// =============================================================================
// PATHS
// =============================================================================

/// Append an encoded query string, skipping pairs whose value is blank.
pub fn with_query(path: &str, pairs: &[(&str, String)]) -> String {
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    let mut any = false;
    for (key, value) in pairs {
        let value = value.trim();
        if value.is_empty() {
            continue;
        }
        serializer.append_pair(key, value);
        any = true;
    }
    if any { format!("{path}?{}", serializer.finish()) } else { path.to_owned() }
}

/// Percent-encode one path segment (slug or id).
pub fn segment(raw: &str) -> String {
    form_urlencoded::byte_serialize(raw.as_bytes())
        .collect::<String>()
        .replace('+', "%20")
}

pub fn projects_path(limit: u32, page: u32) -> String {
    with_query("/projects", &[("limit", limit.to_string()), ("page", page.to_string())])
}

pub fn featured_projects_path() -> String {
    with_query("/projects", &[("featured", "true".to_owned()), ("limit", FEATURED_PROJECTS_LIMIT.to_string())])
}

pub fn project_path(slug_or_id: &str) -> String {
    format!("/projects/{}", segment(slug_or_id))
}

pub fn service_path(slug_or_id: &str) -> String {
    format!("/services/{}", segment(slug_or_id))
}

pub fn inquiries_path(filters: &InquiryFilters) -> String {
    with_query("/inquiries", &filters.query_pairs())
}

pub fn inquiry_path(id: &str) -> String {
    format!("/inquiries/{}", segment(id))
}

pub fn donations_path(filters: &DonationFilters) -> String {
    with_query("/donations", &filters.query_pairs())
}

pub fn campaigns_path(status: Option<CampaignStatus>) -> String {
    with_query("/campaigns", &[("status", status.map(|s| s.as_str().to_owned()).unwrap_or_default())])
}

/// One page of confirmed donations at the backend's maximum page size.
pub fn confirmed_donations_page_path(skip: u32) -> String {
    with_query(
        "/donations",
        &[
            ("status", DonationStatus::Confirmed.as_str().to_owned()),
            ("skip", skip.to_string()),
            ("limit", MAX_PAGE_LIMIT.to_string()),
        ],
    )
}

/// One page of campaigns of any status at the maximum page size.
pub fn campaigns_page_path(skip: u32) -> String {
    with_query("/campaigns", &[("skip", skip.to_string()), ("limit", MAX_PAGE_LIMIT.to_string())])
}

/// Offset of the following page, or `None` once a short page (or the row
/// cap) marks the end of the walk.
pub fn next_skip(skip: u32, fetched: usize) -> Option<u32> {
    let fetched = u32::try_from(fetched).ok()?;
    let next = skip.checked_add(fetched)?;
    (fetched >= MAX_PAGE_LIMIT && next < MAX_WALK_ROWS).then_some(next)
}

pub fn campaign_path(id: &str) -> String {
    format!("/campaigns/{}", segment(id))
}

pub fn testimonials_path(featured_only: bool) -> String {
    with_query("/testimonials", &[("featured", if featured_only { "true".to_owned() } else { String::new() })])
}

pub fn testimonial_path(id: &str) -> String {
    format!("/testimonials/{}", segment(id))
}

pub fn user_role_path(id: &str) -> String {
    format!("/users/{}/role", segment(id))
}

pub const STATS_PATH: &str = "/stats/";

// =============================================================================
// SERVICES
// =============================================================================

pub async fn list_services() -> Result<Vec<Service>, ApiError> {
    let listing: Listing<Service> = api::get("/services").await?;
    let mut services = listing.into_items();
    services.sort_by_key(|s| s.display_order);
    Ok(services)
}

pub async fn get_service(slug: &str) -> Result<Service, ApiError> {
    api::get(&service_path(slug)).await
}

pub async fn create_service(payload: &ServicePayload) -> Result<Service, ApiError> {
    api::post("/services", payload).await
}

pub async fn delete_service(id: &str) -> Result<(), ApiError> {
    api::delete(&service_path(id)).await
}

// =============================================================================
// PROJECTS
// =============================================================================

pub async fn list_projects(limit: u32, page: u32) -> Result<Vec<Project>, ApiError> {
    let listing: Listing<Project> = api::get(&projects_path(limit, page)).await?;
    Ok(listing.into_items())
}

pub async fn list_featured_projects() -> Result<Vec<Project>, ApiError> {
    let listing: Listing<Project> = api::get(&featured_projects_path()).await?;
    Ok(listing.into_items())
}

pub async fn get_project(slug: &str) -> Result<Project, ApiError> {
    api::get(&project_path(slug)).await
}

pub async fn create_project(payload: &ProjectPayload) -> Result<Project, ApiError> {
    api::post("/projects", payload).await
}

pub async fn update_project(id: &str, payload: &ProjectPayload) -> Result<Project, ApiError> {
    api::put(&project_path(id), payload).await
}

pub async fn delete_project(id: &str) -> Result<(), ApiError> {
    api::delete(&project_path(id)).await
}

// =============================================================================
// INQUIRIES + SUBSCRIBERS
// =============================================================================

pub async fn submit_inquiry(payload: &InquiryPayload) -> Result<(), ApiError> {
    api::post::<_, IgnoredAny>("/inquiries", payload).await.map(|_| ())
}

pub async fn list_inquiries(filters: &InquiryFilters) -> Result<Vec<Inquiry>, ApiError> {
    let listing: Listing<Inquiry> = api::get(&inquiries_path(filters)).await?;
    Ok(listing.into_items())
}

pub async fn update_inquiry(id: &str, update: &InquiryUpdate) -> Result<Inquiry, ApiError> {
    api::put(&inquiry_path(id), update).await
}

pub async fn subscribe(payload: &SubscriberPayload) -> Result<(), ApiError> {
    api::post::<_, IgnoredAny>("/subscribers", payload).await.map(|_| ())
}

pub async fn list_subscribers() -> Result<Vec<Subscriber>, ApiError> {
    let listing: Listing<Subscriber> = api::get("/subscribers").await?;
    Ok(listing.into_items())
}

// =============================================================================
// DONATIONS + CAMPAIGNS
// =============================================================================

pub async fn create_donation(payload: &DonationPayload) -> Result<DonationIntent, ApiError> {
    api::post("/donations", payload).await
}

pub async fn list_donations(filters: &DonationFilters) -> Result<Vec<Donation>, ApiError> {
    let listing: Listing<Donation> = api::get(&donations_path(filters)).await?;
    Ok(listing.into_items())
}

/// Walk `skip`/`limit` pages until the backend returns a short page.
async fn fetch_all<T: DeserializeOwned>(page_path: fn(u32) -> String) -> Result<Vec<T>, ApiError> {
    let mut items = Vec::new();
    let mut skip = 0;
    loop {
        let listing: Listing<T> = api::get(&page_path(skip)).await?;
        let page = listing.into_items();
        let next = next_skip(skip, page.len());
        items.extend(page);
        match next {
            Some(offset) => skip = offset,
            None => return Ok(items),
        }
    }
}

/// Every confirmed donation, for the dashboard totals.
pub async fn list_all_confirmed_donations() -> Result<Vec<Donation>, ApiError> {
    fetch_all(confirmed_donations_page_path).await
}

/// Every campaign regardless of status, for resolving campaign names.
pub async fn list_all_campaigns() -> Result<Vec<Campaign>, ApiError> {
    fetch_all(campaigns_page_path).await
}

pub async fn list_campaigns(status: Option<CampaignStatus>) -> Result<Vec<Campaign>, ApiError> {
    let listing: Listing<Campaign> = api::get(&campaigns_path(status)).await?;
    Ok(listing.into_items())
}

pub async fn create_campaign(payload: &CampaignPayload) -> Result<Campaign, ApiError> {
    api::post("/campaigns", payload).await
}

pub async fn update_campaign(id: &str, payload: &CampaignPayload) -> Result<Campaign, ApiError> {
    api::put(&campaign_path(id), payload).await
}

pub async fn delete_campaign(id: &str) -> Result<(), ApiError> {
    api::delete(&campaign_path(id)).await
}

// =============================================================================
// TESTIMONIALS, USERS, STATS
// =============================================================================

pub async fn list_testimonials(featured_only: bool) -> Result<Vec<Testimonial>, ApiError> {
    let listing: Listing<Testimonial> = api::get(&testimonials_path(featured_only)).await?;
    Ok(listing.into_items())
}

pub async fn create_testimonial(payload: &TestimonialPayload) -> Result<Testimonial, ApiError> {
    api::post("/testimonials", payload).await
}

pub async fn update_testimonial(id: &str, update: &TestimonialUpdate) -> Result<Testimonial, ApiError> {
    api::put(&testimonial_path(id), update).await
}

pub async fn delete_testimonial(id: &str) -> Result<(), ApiError> {
    api::delete(&testimonial_path(id)).await
}

pub async fn list_users() -> Result<Vec<User>, ApiError> {
    let listing: Listing<User> = api::get("/users").await?;
    Ok(listing.into_items())
}

pub async fn update_user_role(id: &str, role: UserRole) -> Result<User, ApiError> {
    api::patch(&user_role_path(id), &RolePayload { role }).await
}

pub async fn fetch_stats() -> Result<Stats, ApiError> {
    api::get(STATS_PATH).await
}
