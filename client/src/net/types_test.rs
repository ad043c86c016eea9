use super::*;

// =============================================================
// Listing
// =============================================================

#[test]
fn listing_decodes_bare_array() {
    let json = r#"[{"id":"s1","email":"a@b.com"}]"#;
    let listing: Listing<Subscriber> = serde_json::from_str(json).unwrap();
    let items = listing.into_items();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].email, "a@b.com");
}

#[test]
fn listing_decodes_paginated_object() {
    let json = r#"{"total":2,"page":1,"limit":10,"items":[
        {"id":"p1","name":"Biogas A","slug":"biogas-a","status":"completed"},
        {"id":"p2","name":"Barn","slug":"barn"}
    ]}"#;
    let listing: Listing<Project> = serde_json::from_str(json).unwrap();
    let items = listing.into_items();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0].status, ProjectStatus::Completed);
    assert_eq!(items[1].status, ProjectStatus::Ongoing);
}

#[test]
fn listing_page_without_items_is_empty() {
    let listing: Listing<Project> = serde_json::from_str(r#"{"total":0}"#).unwrap();
    assert!(listing.into_items().is_empty());
}

// =============================================================
// Inquiry status
// =============================================================

#[test]
fn inquiry_status_decodes_case_insensitively() {
    for raw in ["\"NEW\"", "\"new\"", "\"New\""] {
        let status: InquiryStatus = serde_json::from_str(raw).unwrap();
        assert_eq!(status, InquiryStatus::New);
    }
    let status: InquiryStatus = serde_json::from_str("\"IN_REVIEW\"").unwrap();
    assert_eq!(status, InquiryStatus::InReview);
}

#[test]
fn inquiry_status_rejects_unknown_value() {
    assert!(serde_json::from_str::<InquiryStatus>("\"archived\"").is_err());
}

#[test]
fn inquiry_status_serializes_snake_case() {
    assert_eq!(serde_json::to_string(&InquiryStatus::InReview).unwrap(), "\"in_review\"");
}

#[test]
fn inquiry_update_omits_absent_fields() {
    let update = InquiryUpdate { status: Some(InquiryStatus::Quoted), internal_notes: None };
    assert_eq!(serde_json::to_value(&update).unwrap(), serde_json::json!({ "status": "quoted" }));
}

// =============================================================
// Projects + services
// =============================================================

#[test]
fn project_thumbnail_prefers_cover_then_hero() {
    let mut project = Project { hero_image_url: Some("/hero.jpg".to_owned()), ..Project::default() };
    assert_eq!(project.thumbnail(), Some("/hero.jpg"));
    project.cover_image_url = Some("/cover.jpg".to_owned());
    assert_eq!(project.thumbnail(), Some("/cover.jpg"));
}

#[test]
fn project_payload_copies_editable_fields() {
    let project = Project {
        id: "p1".to_owned(),
        name: "Biogas".to_owned(),
        slug: "biogas".to_owned(),
        status: ProjectStatus::OnHold,
        is_featured: true,
        budget: Some("UGX 20M".to_owned()),
        ..Project::default()
    };
    let payload = ProjectPayload::from(&project);
    let json = serde_json::to_value(&payload).unwrap();
    assert_eq!(json["status"], "on_hold");
    assert_eq!(json["is_featured"], true);
    assert_eq!(json["budget"], "UGX 20M");
    assert!(json.get("id").is_none());
}

#[test]
fn project_status_parse_round_trips_labels() {
    for status in ProjectStatus::ALL {
        assert_eq!(ProjectStatus::parse(status.as_str()), Some(status));
    }
    assert_eq!(ProjectStatus::parse("cancelled"), None);
}

#[test]
fn service_highlights_skip_blank_entries() {
    let service = Service {
        highlight_1: Some("Clean energy".to_owned()),
        highlight_2: Some("   ".to_owned()),
        highlight_3: Some("Lower costs".to_owned()),
        ..Service::default()
    };
    assert_eq!(service.highlights(), vec!["Clean energy".to_owned(), "Lower costs".to_owned()]);
}

#[test]
fn service_defaults_active_when_missing() {
    let service: Service = serde_json::from_str(r#"{"id":"s","name":"Biogas","slug":"biogas"}"#).unwrap();
    assert!(service.is_active);
}

// =============================================================
// Donations, testimonials, stats
// =============================================================

#[test]
fn donation_intent_decodes_backend_shape() {
    let json = r#"{
        "donation": {"id":"donation-123","amount":50000,"currency":"UGX","status":"pending","donor_email":null},
        "payment_url": "https://payments.example.local/card/checkout/session-123",
        "provider_session_id": "session-123"
    }"#;
    let intent: DonationIntent = serde_json::from_str(json).unwrap();
    let donation = intent.donation.unwrap();
    assert_eq!(donation.amount, 50_000);
    assert_eq!(donation.status, DonationStatus::Pending);
    assert!(intent.payment_url.is_some());
}

#[test]
fn donation_currency_defaults_to_ugx() {
    let donation: Donation = serde_json::from_str(r#"{"id":"d1","amount":10}"#).unwrap();
    assert_eq!(donation.currency, "UGX");
}

#[test]
fn testimonial_byline_joins_present_parts() {
    let mut t = Testimonial { role: Some("Farmer".to_owned()), ..Testimonial::default() };
    assert_eq!(t.byline(), "Farmer");
    t.company = Some("Naluvule Dairy".to_owned());
    assert_eq!(t.byline(), "Farmer, Naluvule Dairy");
}

#[test]
fn stats_missing_counts_default_to_zero() {
    let stats: Stats = serde_json::from_str(r#"{"services":4}"#).unwrap();
    assert_eq!(stats.services, 4);
    assert_eq!(stats.projects, 0);
    assert_eq!(stats.subscribers, 0);
}

#[test]
fn token_type_defaults_to_bearer() {
    let token: Token = serde_json::from_str(r#"{"access_token":"abc"}"#).unwrap();
    assert_eq!(token.token_type, "bearer");
}
