//! Shared REST DTOs for the client/backend boundary.
//!
//! DESIGN
//! ======
//! These types mirror backend JSON payloads. Optional backend fields carry
//! `#[serde(default)]` so partial or older responses still decode, and ids
//! stay opaque strings because the browser never interprets them.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Deserializer, Serialize};

// =============================================================================
// LISTINGS
// =============================================================================

/// A list endpoint response.
///
/// Some endpoints answer with a bare JSON array, others with a paginated
/// object carrying `items`. Both shapes decode into this enum.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Listing<T> {
    Bare(Vec<T>),
    Page(Page<T>),
}

/// Paginated list wrapper.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Page<T> {
    #[serde(default = "Vec::new")]
    pub items: Vec<T>,
    #[serde(default)]
    pub total: Option<u64>,
    #[serde(default)]
    pub page: Option<u64>,
    #[serde(default)]
    pub limit: Option<u64>,
}

impl<T> Listing<T> {
    /// Consume the listing and return its items regardless of shape.
    pub fn into_items(self) -> Vec<T> {
        match self {
            Self::Bare(items) | Self::Page(Page { items, .. }) => items,
        }
    }
}

// =============================================================================
// SERVICES
// =============================================================================

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Service {
    pub id: String,
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub short_description: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub tagline: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub hero_image_url: Option<String>,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub highlight_1: Option<String>,
    #[serde(default)]
    pub highlight_2: Option<String>,
    #[serde(default)]
    pub highlight_3: Option<String>,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default)]
    pub display_order: i32,
}

impl Service {
    /// Non-empty marketing highlights in display order.
    pub fn highlights(&self) -> Vec<String> {
        [&self.highlight_1, &self.highlight_2, &self.highlight_3]
            .into_iter()
            .filter_map(|h| h.as_deref().map(str::trim))
            .filter(|h| !h.is_empty())
            .map(str::to_owned)
            .collect()
    }
}

/// Admin create body for a service.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ServicePayload {
    pub name: String,
    pub slug: String,
    pub short_description: Option<String>,
}

// =============================================================================
// PROJECTS
// =============================================================================

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectStatus {
    Planned,
    #[default]
    Ongoing,
    Completed,
    OnHold,
}

impl ProjectStatus {
    pub const ALL: [Self; 4] = [Self::Planned, Self::Ongoing, Self::Completed, Self::OnHold];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Planned => "planned",
            Self::Ongoing => "ongoing",
            Self::Completed => "completed",
            Self::OnHold => "on_hold",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Planned => "Planned",
            Self::Ongoing => "Ongoing",
            Self::Completed => "Completed",
            Self::OnHold => "On hold",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == raw)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub short_description: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub client_name: Option<String>,
    #[serde(default)]
    pub budget_amount: Option<f64>,
    #[serde(default)]
    pub budget: Option<String>,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default)]
    pub status: ProjectStatus,
    #[serde(default)]
    pub is_featured: bool,
    #[serde(default)]
    pub cover_image_url: Option<String>,
    #[serde(default)]
    pub hero_image_url: Option<String>,
    #[serde(default)]
    pub service: Option<Service>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

impl Project {
    /// Best image for cards: the cover image, then the hero image.
    pub fn thumbnail(&self) -> Option<&str> {
        self.cover_image_url
            .as_deref()
            .or(self.hero_image_url.as_deref())
            .filter(|url| !url.is_empty())
    }
}

/// Admin create/update body for a project.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ProjectPayload {
    pub name: String,
    pub slug: String,
    pub location: Option<String>,
    pub client_name: Option<String>,
    pub budget: Option<String>,
    pub status: ProjectStatus,
    pub is_featured: bool,
    pub short_description: Option<String>,
    pub description: Option<String>,
    pub hero_image_url: Option<String>,
}

impl From<&Project> for ProjectPayload {
    fn from(project: &Project) -> Self {
        Self {
            name: project.name.clone(),
            slug: project.slug.clone(),
            location: project.location.clone(),
            client_name: project.client_name.clone(),
            budget: project.budget.clone(),
            status: project.status,
            is_featured: project.is_featured,
            short_description: project.short_description.clone(),
            description: project.description.clone(),
            hero_image_url: project.hero_image_url.clone(),
        }
    }
}

// =============================================================================
// INQUIRIES
// =============================================================================

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InquiryStatus {
    #[default]
    New,
    InReview,
    Quoted,
    Closed,
}

impl InquiryStatus {
    pub const ALL: [Self; 4] = [Self::New, Self::InReview, Self::Quoted, Self::Closed];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::New => "new",
            Self::InReview => "in_review",
            Self::Quoted => "quoted",
            Self::Closed => "closed",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::New => "New",
            Self::InReview => "In review",
            Self::Quoted => "Quoted",
            Self::Closed => "Closed",
        }
    }

    /// Case-insensitive parse; the backend has emitted both `NEW` and `new`.
    pub fn parse(raw: &str) -> Option<Self> {
        let key = raw.trim().to_ascii_lowercase();
        Self::ALL.into_iter().find(|s| s.as_str() == key)
    }
}

impl<'de> Deserialize<'de> for InquiryStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).ok_or_else(|| serde::de::Error::custom(format!("unknown inquiry status: {raw}")))
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Inquiry {
    pub id: String,
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub project_type: Option<String>,
    #[serde(default)]
    pub budget_range: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub status: InquiryStatus,
    #[serde(default)]
    pub internal_notes: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Public create body for quote and contact submissions.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct InquiryPayload {
    pub full_name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub project_type: Option<String>,
    pub budget_range: Option<String>,
    pub location: Option<String>,
    pub message: Option<String>,
    pub source: String,
}

/// Admin partial update; absent fields are left untouched by the backend.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct InquiryUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<InquiryStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub internal_notes: Option<String>,
}

// =============================================================================
// SUBSCRIBERS
// =============================================================================

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Subscriber {
    pub id: String,
    pub email: String,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SubscriberPayload {
    pub email: String,
}

// =============================================================================
// DONATIONS + CAMPAIGNS
// =============================================================================

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DonationStatus {
    #[default]
    Pending,
    Confirmed,
    Failed,
    Refunded,
}

impl DonationStatus {
    pub const ALL: [Self; 4] = [Self::Pending, Self::Confirmed, Self::Failed, Self::Refunded];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Confirmed => "confirmed",
            Self::Failed => "failed",
            Self::Refunded => "refunded",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Confirmed => "Confirmed",
            Self::Failed => "Failed",
            Self::Refunded => "Refunded",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Donation {
    pub id: String,
    pub amount: i64,
    #[serde(default = "default_currency")]
    pub currency: String,
    #[serde(default)]
    pub donor_name: Option<String>,
    #[serde(default)]
    pub donor_email: Option<String>,
    #[serde(default)]
    pub donor_phone: Option<String>,
    #[serde(default)]
    pub is_anonymous: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub campaign_id: Option<String>,
    #[serde(default)]
    pub status: DonationStatus,
    #[serde(default)]
    pub payment_method: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Public create body for a donation intent.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DonationPayload {
    pub amount: i64,
    pub currency: String,
    pub payment_method: String,
    pub donor_name: Option<String>,
    pub donor_email: Option<String>,
    pub donor_phone: Option<String>,
    pub is_anonymous: bool,
    pub message: Option<String>,
    pub campaign_id: Option<String>,
}

/// Backend answer to a donation create: the stored donation and where to pay.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DonationIntent {
    #[serde(default)]
    pub donation: Option<Donation>,
    #[serde(default)]
    pub payment_url: Option<String>,
    #[serde(default)]
    pub provider_session_id: Option<String>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CampaignStatus {
    Draft,
    #[default]
    Active,
    Closed,
    Archived,
}

impl CampaignStatus {
    pub const ALL: [Self; 4] = [Self::Draft, Self::Active, Self::Closed, Self::Archived];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Active => "active",
            Self::Closed => "closed",
            Self::Archived => "archived",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == raw)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Campaign {
    pub id: String,
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub short_description: Option<String>,
    #[serde(default = "default_currency")]
    pub currency: String,
    #[serde(default)]
    pub target_amount: Option<i64>,
    #[serde(default)]
    pub raised_amount: i64,
    #[serde(default)]
    pub status: CampaignStatus,
    #[serde(default)]
    pub is_featured: bool,
    #[serde(default)]
    pub sort_order: i32,
}

/// Admin create/update body for a campaign.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct CampaignPayload {
    pub name: String,
    pub slug: String,
    pub target_amount: Option<i64>,
    pub status: CampaignStatus,
}

// =============================================================================
// TESTIMONIALS
// =============================================================================

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Testimonial {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub company: Option<String>,
    pub quote: String,
    #[serde(default = "default_true")]
    pub is_featured: bool,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

impl Testimonial {
    /// "Role, Company" byline with missing parts dropped.
    pub fn byline(&self) -> String {
        [self.role.as_deref(), self.company.as_deref()]
            .into_iter()
            .flatten()
            .filter(|part| !part.trim().is_empty())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct TestimonialPayload {
    pub name: String,
    pub role: Option<String>,
    pub company: Option<String>,
    pub quote: String,
    pub is_featured: bool,
    pub is_active: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct TestimonialUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_featured: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

// =============================================================================
// USERS + AUTH
// =============================================================================

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    #[default]
    Staff,
    Admin,
}

impl UserRole {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Staff => "staff",
            Self::Admin => "admin",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "staff" => Some(Self::Staff),
            "admin" => Some(Self::Admin),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub role: UserRole,
    #[serde(default)]
    pub is_superuser: bool,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RolePayload {
    pub role: UserRole,
}

/// Bearer token issued by `/api/v1/auth/login`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Token {
    pub access_token: String,
    #[serde(default = "default_token_type")]
    pub token_type: String,
}

/// Admin dashboard counters. Missing counts default to zero.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct Stats {
    #[serde(default)]
    pub services: u64,
    #[serde(default)]
    pub projects: u64,
    #[serde(default)]
    pub inquiries: u64,
    #[serde(default)]
    pub testimonials: u64,
    #[serde(default)]
    pub subscribers: u64,
}

fn default_true() -> bool {
    true
}

fn default_currency() -> String {
    "UGX".to_owned()
}

fn default_token_type() -> String {
    "bearer".to_owned()
}
