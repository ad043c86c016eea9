//! Admin list filters, form models, and the dashboard donation summary.
//!
//! DESIGN
//! ======
//! Pages keep these as plain values inside signals. Everything here is pure
//! so filter encoding and summary math can be unit-tested off the browser.

#[cfg(test)]
#[path = "admin_test.rs"]
mod admin_test;

use chrono::{Datelike, NaiveDate, TimeZone};

use crate::net::endpoints::ADMIN_LIST_LIMIT;
use crate::net::types::{
    Campaign, CampaignPayload, CampaignStatus, Donation, DonationStatus, InquiryStatus, Project, ProjectPayload,
    ProjectStatus, ServicePayload, TestimonialPayload,
};
use crate::util::format::{optional_text, parse_timestamp_in, slugify};

// =============================================================================
// INQUIRY FILTERS
// =============================================================================

/// Where an inquiry came from on the public site.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InquirySource {
    Quote,
    Contact,
}

impl InquirySource {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Quote => "quote",
            Self::Contact => "contact",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "quote" => Some(Self::Quote),
            "contact" => Some(Self::Contact),
            _ => None,
        }
    }
}

/// Mini-CRM filter bar. `None` means "all".
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InquiryFilters {
    pub status: Option<InquiryStatus>,
    pub source: Option<InquirySource>,
    pub search: String,
}

impl InquiryFilters {
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        vec![
            ("status", self.status.map(|s| s.as_str().to_owned()).unwrap_or_default()),
            ("source", self.source.map(|s| s.as_str().to_owned()).unwrap_or_default()),
            ("search", self.search.trim().to_owned()),
            ("limit", ADMIN_LIST_LIMIT.to_string()),
        ]
    }
}

// =============================================================================
// DONATION FILTERS
// =============================================================================

/// Raw donation filter inputs exactly as typed; blanks are not sent.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DonationFilters {
    pub campaign_id: String,
    pub status: Option<DonationStatus>,
    pub date_from: String,
    pub date_to: String,
    pub min_amount: String,
    pub max_amount: String,
}

impl DonationFilters {
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        vec![
            ("campaign_id", self.campaign_id.clone()),
            ("status", self.status.map(|s| s.as_str().to_owned()).unwrap_or_default()),
            ("date_from", self.date_from.clone()),
            ("date_to", self.date_to.clone()),
            ("min_amount", self.min_amount.clone()),
            ("max_amount", self.max_amount.clone()),
        ]
    }

    /// Reject amount bounds the backend would refuse (non-integers, negatives).
    pub fn validate(&self) -> Result<(), &'static str> {
        let parse = |raw: &str| -> Result<Option<u64>, &'static str> {
            let raw = raw.trim();
            if raw.is_empty() {
                return Ok(None);
            }
            raw.parse::<u64>()
                .map(Some)
                .map_err(|_| "Amounts must be whole numbers of zero or more.")
        };
        let min = parse(&self.min_amount)?;
        let max = parse(&self.max_amount)?;
        if let (Some(min), Some(max)) = (min, max)
            && min > max
        {
            return Err("Minimum amount cannot exceed maximum amount.");
        }
        Ok(())
    }
}

// =============================================================================
// DASHBOARD DONATION SUMMARY
// =============================================================================

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TopCampaign {
    pub id: String,
    pub name: String,
    pub total_amount: i64,
}

/// Headline donation figures for the admin dashboard.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DonationsSummary {
    /// Confirmed amount created during the calendar month of `today`, with
    /// offset timestamps read in the same zone as `today`.
    pub month_total: i64,
    /// Distinct non-empty donor emails among this month's confirmed donations.
    pub donors_count: usize,
    /// Campaign with the highest all-time confirmed total.
    pub top_campaign: Option<TopCampaign>,
}

impl DonationsSummary {
    pub fn compute<Tz: TimeZone>(
        donations: &[Donation],
        campaigns: &[Campaign],
        today: NaiveDate,
        tz: &Tz,
    ) -> Self {
        let confirmed: Vec<&Donation> = donations
            .iter()
            .filter(|d| d.status == DonationStatus::Confirmed)
            .collect();

        let in_month = |d: &Donation| {
            d.created_at
                .as_deref()
                .and_then(|raw| parse_timestamp_in(raw, tz))
                .is_some_and(|ts| ts.year() == today.year() && ts.month() == today.month())
        };

        let month: Vec<&Donation> = confirmed.iter().copied().filter(|d| in_month(*d)).collect();
        let month_total = month.iter().map(|d| d.amount).sum();

        let mut donors: Vec<&str> = month
            .iter()
            .filter_map(|d| d.donor_email.as_deref())
            .filter(|email| !email.is_empty())
            .collect();
        donors.sort_unstable();
        donors.dedup();

        // Insertion-ordered totals so ties resolve to the first campaign seen.
        let mut totals: Vec<(&str, i64)> = Vec::new();
        for donation in &confirmed {
            let Some(cid) = donation.campaign_id.as_deref().filter(|c| !c.is_empty()) else {
                continue;
            };
            match totals.iter_mut().find(|(id, _)| *id == cid) {
                Some((_, total)) => *total += donation.amount,
                None => totals.push((cid, donation.amount)),
            }
        }

        let mut top: Option<(&str, i64)> = None;
        for (cid, total) in totals {
            if total > top.map_or(0, |(_, best)| best) {
                top = Some((cid, total));
            }
        }

        let top_campaign = top.map(|(cid, total)| TopCampaign {
            id: cid.to_owned(),
            name: campaigns
                .iter()
                .find(|c| c.id == cid)
                .map_or_else(|| "Unnamed campaign".to_owned(), |c| c.name.clone()),
            total_amount: total,
        });

        Self { month_total, donors_count: donors.len(), top_campaign }
    }
}

// =============================================================================
// CAMPAIGN FORM
// =============================================================================

/// Create/edit form for a donation campaign. `id` is set while editing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CampaignForm {
    pub id: Option<String>,
    pub name: String,
    pub slug: String,
    pub target_amount: String,
    pub status: CampaignStatus,
}

impl Default for CampaignForm {
    fn default() -> Self {
        Self {
            id: None,
            name: String::new(),
            slug: String::new(),
            target_amount: String::new(),
            status: CampaignStatus::Draft,
        }
    }
}

impl CampaignForm {
    pub fn edit(campaign: &Campaign) -> Self {
        Self {
            id: Some(campaign.id.clone()),
            name: campaign.name.clone(),
            slug: campaign.slug.clone(),
            target_amount: campaign.target_amount.map(|t| t.to_string()).unwrap_or_default(),
            status: campaign.status,
        }
    }

    pub fn is_edit(&self) -> bool {
        self.id.is_some()
    }

    pub fn to_payload(&self) -> Result<CampaignPayload, &'static str> {
        let name = self.name.trim();
        let slug = self.slug.trim();
        if name.is_empty() || slug.is_empty() {
            return Err("Name and slug are required.");
        }
        let target_amount = match optional_text(&self.target_amount) {
            None => None,
            Some(raw) => Some(
                raw.parse::<i64>()
                    .ok()
                    .filter(|v| *v >= 0)
                    .ok_or("Target amount must be a whole number.")?,
            ),
        };
        Ok(CampaignPayload { name: name.to_owned(), slug: slug.to_owned(), target_amount, status: self.status })
    }
}

// =============================================================================
// PROJECT / SERVICE / TESTIMONIAL FORMS
// =============================================================================

/// Editable project fields as raw input text.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProjectForm {
    pub id: Option<String>,
    pub name: String,
    pub slug: String,
    pub location: String,
    pub client_name: String,
    pub budget: String,
    pub status: ProjectStatus,
    pub is_featured: bool,
    pub short_description: String,
    pub description: String,
    pub hero_image_url: String,
}

impl ProjectForm {
    pub fn edit(project: &Project) -> Self {
        let text = |v: &Option<String>| v.clone().unwrap_or_default();
        Self {
            id: Some(project.id.clone()),
            name: project.name.clone(),
            slug: project.slug.clone(),
            location: text(&project.location),
            client_name: text(&project.client_name),
            budget: text(&project.budget),
            status: project.status,
            is_featured: project.is_featured,
            short_description: text(&project.short_description),
            description: text(&project.description),
            hero_image_url: text(&project.hero_image_url),
        }
    }

    pub fn is_edit(&self) -> bool {
        self.id.is_some()
    }

    /// Body for create/update. A blank slug is derived from the name.
    pub fn to_payload(&self) -> Result<ProjectPayload, &'static str> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err("Project name is required.");
        }
        let slug = match optional_text(&self.slug) {
            Some(slug) => slug,
            None => slugify(name),
        };
        if slug.is_empty() {
            return Err("Slug is required.");
        }
        Ok(ProjectPayload {
            name: name.to_owned(),
            slug,
            location: optional_text(&self.location),
            client_name: optional_text(&self.client_name),
            budget: optional_text(&self.budget),
            status: self.status,
            is_featured: self.is_featured,
            short_description: optional_text(&self.short_description),
            description: optional_text(&self.description),
            hero_image_url: optional_text(&self.hero_image_url),
        })
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ServiceForm {
    pub name: String,
    pub slug: String,
    pub short_description: String,
}

impl ServiceForm {
    pub fn to_payload(&self) -> Result<ServicePayload, &'static str> {
        let name = self.name.trim();
        let slug = self.slug.trim();
        if name.is_empty() || slug.is_empty() {
            return Err("Name and slug are required.");
        }
        Ok(ServicePayload {
            name: name.to_owned(),
            slug: slug.to_owned(),
            short_description: optional_text(&self.short_description),
        })
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TestimonialForm {
    pub name: String,
    pub role: String,
    pub company: String,
    pub quote: String,
    pub is_featured: bool,
}

impl Default for TestimonialForm {
    fn default() -> Self {
        Self { name: String::new(), role: String::new(), company: String::new(), quote: String::new(), is_featured: true }
    }
}

impl TestimonialForm {
    pub fn to_payload(&self) -> Result<TestimonialPayload, &'static str> {
        let name = self.name.trim();
        let quote = self.quote.trim();
        if name.is_empty() || quote.is_empty() {
            return Err("Name and quote are required.");
        }
        Ok(TestimonialPayload {
            name: name.to_owned(),
            role: optional_text(&self.role),
            company: optional_text(&self.company),
            quote: quote.to_owned(),
            is_featured: self.is_featured,
            is_active: true,
        })
    }
}
