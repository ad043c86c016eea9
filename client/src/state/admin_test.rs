use chrono::{FixedOffset, Utc};

use super::*;
use crate::net::endpoints::{donations_path, inquiries_path};

fn donation(id: &str, amount: i64, status: DonationStatus, created: &str) -> Donation {
    Donation {
        id: id.to_owned(),
        amount,
        currency: "UGX".to_owned(),
        status,
        created_at: Some(created.to_owned()),
        ..Donation::default()
    }
}

fn campaign(id: &str, name: &str) -> Campaign {
    Campaign { id: id.to_owned(), name: name.to_owned(), slug: id.to_owned(), ..Campaign::default() }
}

fn march_2025() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, 20).unwrap()
}

// =============================================================
// Filters
// =============================================================

#[test]
fn inquiry_filters_default_sends_only_limit() {
    assert_eq!(inquiries_path(&InquiryFilters::default()), "/inquiries?limit=100");
}

#[test]
fn inquiry_filters_encode_status_source_and_search() {
    let filters = InquiryFilters {
        status: Some(InquiryStatus::InReview),
        source: Some(InquirySource::Quote),
        search: "  biogas tank ".to_owned(),
    };
    assert_eq!(
        inquiries_path(&filters),
        "/inquiries?status=in_review&source=quote&search=biogas+tank&limit=100"
    );
}

#[test]
fn inquiry_source_parse_rejects_all() {
    assert_eq!(InquirySource::parse("contact"), Some(InquirySource::Contact));
    assert_eq!(InquirySource::parse("all"), None);
}

#[test]
fn donation_filters_skip_blank_values() {
    let filters = DonationFilters {
        status: Some(DonationStatus::Confirmed),
        min_amount: "1000".to_owned(),
        ..DonationFilters::default()
    };
    assert_eq!(donations_path(&filters), "/donations?status=confirmed&min_amount=1000");
    assert_eq!(donations_path(&DonationFilters::default()), "/donations");
}

#[test]
fn donation_filters_validate_amount_bounds() {
    let mut filters = DonationFilters::default();
    assert!(filters.validate().is_ok());
    filters.min_amount = "abc".to_owned();
    assert!(filters.validate().is_err());
    filters.min_amount = "5000".to_owned();
    filters.max_amount = "1000".to_owned();
    assert_eq!(filters.validate(), Err("Minimum amount cannot exceed maximum amount."));
    filters.max_amount = "9000".to_owned();
    assert!(filters.validate().is_ok());
}

// =============================================================
// Donation summary
// =============================================================

#[test]
fn summary_counts_only_confirmed_donations_in_current_month() {
    let donations = vec![
        donation("a", 50_000, DonationStatus::Confirmed, "2025-03-02T10:00:00"),
        donation("b", 20_000, DonationStatus::Pending, "2025-03-03T10:00:00"),
        donation("c", 10_000, DonationStatus::Confirmed, "2025-02-28T23:59:00"),
        donation("d", 5_000, DonationStatus::Confirmed, "2025-03-31T08:00:00Z"),
    ];
    let summary = DonationsSummary::compute(&donations, &[], march_2025(), &Utc);
    assert_eq!(summary.month_total, 55_000);
}

#[test]
fn summary_reads_offset_timestamps_in_the_local_zone() {
    let kampala = FixedOffset::east_opt(3 * 3600).unwrap();
    let april_first = NaiveDate::from_ymd_opt(2025, 4, 1).unwrap();
    let donations = vec![
        donation("a", 5_000, DonationStatus::Confirmed, "2025-04-01T01:00:00+03:00"),
        donation("b", 7_000, DonationStatus::Confirmed, "2025-03-31T22:30:00Z"),
        donation("c", 9_000, DonationStatus::Confirmed, "2025-03-31T20:59:00Z"),
    ];
    let summary = DonationsSummary::compute(&donations, &[], april_first, &kampala);
    assert_eq!(summary.month_total, 12_000);
}

#[test]
fn summary_counts_unique_donor_emails() {
    let mut a = donation("a", 1, DonationStatus::Confirmed, "2025-03-02");
    a.donor_email = Some("jane@example.com".to_owned());
    let mut b = donation("b", 1, DonationStatus::Confirmed, "2025-03-05");
    b.donor_email = Some("jane@example.com".to_owned());
    let mut c = donation("c", 1, DonationStatus::Confirmed, "2025-03-06");
    c.donor_email = Some(String::new());
    let mut d = donation("d", 1, DonationStatus::Confirmed, "2025-03-07");
    d.donor_email = Some("tom@example.com".to_owned());

    let summary = DonationsSummary::compute(&[a, b, c, d], &[], march_2025(), &Utc);
    assert_eq!(summary.donors_count, 2);
}

#[test]
fn summary_top_campaign_uses_all_time_confirmed_totals() {
    let mut a = donation("a", 30_000, DonationStatus::Confirmed, "2024-01-01");
    a.campaign_id = Some("c1".to_owned());
    let mut b = donation("b", 40_000, DonationStatus::Confirmed, "2025-03-01");
    b.campaign_id = Some("c2".to_owned());
    let mut c = donation("c", 20_000, DonationStatus::Confirmed, "2023-05-01");
    c.campaign_id = Some("c1".to_owned());
    let mut d = donation("d", 90_000, DonationStatus::Failed, "2025-03-01");
    d.campaign_id = Some("c2".to_owned());

    let campaigns = vec![campaign("c1", "School Biogas"), campaign("c2", "Dairy Units")];
    let summary = DonationsSummary::compute(&[a, b, c, d], &campaigns, march_2025(), &Utc);
    let top = summary.top_campaign.unwrap();
    assert_eq!(top.id, "c1");
    assert_eq!(top.name, "School Biogas");
    assert_eq!(top.total_amount, 50_000);
}

#[test]
fn summary_top_campaign_tie_keeps_first_seen() {
    let mut a = donation("a", 10, DonationStatus::Confirmed, "2025-03-01");
    a.campaign_id = Some("c2".to_owned());
    let mut b = donation("b", 10, DonationStatus::Confirmed, "2025-03-01");
    b.campaign_id = Some("c1".to_owned());
    let summary = DonationsSummary::compute(&[a, b], &[], march_2025(), &Utc);
    let top = summary.top_campaign.unwrap();
    assert_eq!(top.id, "c2");
    assert_eq!(top.name, "Unnamed campaign");
}

#[test]
fn summary_empty_has_no_top_campaign() {
    let summary = DonationsSummary::compute(&[], &[], march_2025(), &Utc);
    assert_eq!(summary, DonationsSummary::default());
}

// =============================================================
// Campaign form
// =============================================================

#[test]
fn campaign_form_requires_name_and_slug() {
    let form = CampaignForm { name: "Dairy".to_owned(), ..CampaignForm::default() };
    assert_eq!(form.to_payload(), Err("Name and slug are required."));
}

#[test]
fn campaign_form_parses_target_amount() {
    let form = CampaignForm {
        name: " Dairy ".to_owned(),
        slug: "dairy".to_owned(),
        target_amount: "5000000".to_owned(),
        status: CampaignStatus::Active,
        ..CampaignForm::default()
    };
    let payload = form.to_payload().unwrap();
    assert_eq!(payload.name, "Dairy");
    assert_eq!(payload.target_amount, Some(5_000_000));
    assert_eq!(payload.status, CampaignStatus::Active);
}

#[test]
fn campaign_form_rejects_bad_target_amount() {
    let form = CampaignForm {
        name: "Dairy".to_owned(),
        slug: "dairy".to_owned(),
        target_amount: "-5".to_owned(),
        ..CampaignForm::default()
    };
    assert!(form.to_payload().is_err());
}

#[test]
fn campaign_form_edit_prefills_from_campaign() {
    let mut c = campaign("c9", "Clean Water");
    c.target_amount = Some(1200);
    c.status = CampaignStatus::Closed;
    let form = CampaignForm::edit(&c);
    assert!(form.is_edit());
    assert_eq!(form.target_amount, "1200");
    assert_eq!(form.status, CampaignStatus::Closed);
}

// =============================================================
// Project / service / testimonial forms
// =============================================================

#[test]
fn project_form_derives_slug_from_name_when_blank() {
    let form = ProjectForm { name: "School Biogas Unit".to_owned(), ..ProjectForm::default() };
    let payload = form.to_payload().unwrap();
    assert_eq!(payload.slug, "school-biogas-unit");
    assert_eq!(payload.status, ProjectStatus::Ongoing);
    assert_eq!(payload.location, None);
}

#[test]
fn project_form_requires_name() {
    assert_eq!(ProjectForm::default().to_payload(), Err("Project name is required."));
    let symbols_only = ProjectForm { name: "!!!".to_owned(), ..ProjectForm::default() };
    assert_eq!(symbols_only.to_payload(), Err("Slug is required."));
}

#[test]
fn project_form_edit_round_trips_existing_project() {
    let project = Project {
        id: "p1".to_owned(),
        name: "Dairy shed".to_owned(),
        slug: "dairy-shed".to_owned(),
        location: Some("Wakiso".to_owned()),
        status: ProjectStatus::Completed,
        is_featured: true,
        ..Project::default()
    };
    let form = ProjectForm::edit(&project);
    assert_eq!(form.id.as_deref(), Some("p1"));
    assert_eq!(form.to_payload().unwrap(), ProjectPayload::from(&project));
}

#[test]
fn service_form_requires_name_and_slug() {
    assert_eq!(ServiceForm::default().to_payload(), Err("Name and slug are required."));
    let form = ServiceForm { name: "Biogas".to_owned(), slug: "biogas".to_owned(), short_description: " ".to_owned() };
    let payload = form.to_payload().unwrap();
    assert_eq!(payload.short_description, None);
}

#[test]
fn testimonial_form_defaults_to_featured_and_active() {
    let form = TestimonialForm {
        name: "Sarah".to_owned(),
        quote: "Great work".to_owned(),
        company: "Mukono Farm".to_owned(),
        ..TestimonialForm::default()
    };
    let payload = form.to_payload().unwrap();
    assert!(payload.is_featured);
    assert!(payload.is_active);
    assert_eq!(payload.role, None);
    assert_eq!(payload.company.as_deref(), Some("Mukono Farm"));
    assert_eq!(TestimonialForm::default().to_payload(), Err("Name and quote are required."));
}
