use super::*;
use crate::net::types::Donation;

fn valid_form() -> DonationForm {
    DonationForm {
        amount: "50000".to_owned(),
        donor_name: "Jane Doe".to_owned(),
        donor_email: "jane@example.com".to_owned(),
        ..DonationForm::default()
    }
}

fn campaign(id: &str, slug: &str) -> Campaign {
    Campaign { id: id.to_owned(), name: slug.to_uppercase(), slug: slug.to_owned(), ..Campaign::default() }
}

// =============================================================
// Validation
// =============================================================

#[test]
fn default_form_uses_ugx_and_card() {
    let form = DonationForm::default();
    assert_eq!(form.currency, "UGX");
    assert_eq!(form.payment_method, "card");
    assert!(!form.is_anonymous);
}

#[test]
fn empty_amount_is_rejected() {
    let form = DonationForm { amount: String::new(), ..valid_form() };
    let errors = form.validate();
    assert_eq!(errors.get(&DonationField::Amount), Some(&"Enter a valid amount greater than zero."));
}

#[test]
fn non_numeric_zero_and_negative_amounts_are_rejected() {
    for raw in ["abc", "0", "-5", "12.5"] {
        let form = DonationForm { amount: raw.to_owned(), ..valid_form() };
        assert!(form.validate().contains_key(&DonationField::Amount), "amount {raw:?} should fail");
    }
}

#[test]
fn amount_accepts_thousands_separators() {
    let form = DonationForm { amount: " 1,250,000 ".to_owned(), ..valid_form() };
    assert_eq!(form.parsed_amount(), Some(1_250_000));
    assert!(form.validate().is_empty());
}

#[test]
fn unknown_payment_method_is_rejected() {
    let form = DonationForm { payment_method: "paypal".to_owned(), ..valid_form() };
    assert_eq!(form.validate().get(&DonationField::PaymentMethod), Some(&"Select a valid payment method."));
}

#[test]
fn blank_currency_is_rejected() {
    let form = DonationForm { currency: String::new(), ..valid_form() };
    assert_eq!(form.validate().get(&DonationField::Currency), Some(&"Select a currency."));
}

#[test]
fn named_donation_requires_name_and_email() {
    let form = DonationForm { donor_name: " ".to_owned(), donor_email: String::new(), ..valid_form() };
    let errors = form.validate();
    assert_eq!(
        errors.get(&DonationField::DonorName),
        Some(&"Please enter your name or choose to give anonymously.")
    );
    assert_eq!(
        errors.get(&DonationField::DonorEmail),
        Some(&"Please enter your email or choose to give anonymously.")
    );
}

#[test]
fn anonymous_donation_skips_donor_fields() {
    let form = DonationForm {
        amount: "1000".to_owned(),
        is_anonymous: true,
        ..DonationForm::default()
    };
    assert!(form.validate().is_empty());
}

#[test]
fn payment_method_labels() {
    assert_eq!(payment_method_label("card"), "Card (Visa / Mastercard)");
    assert_eq!(payment_method_label("mtn_momo"), "MTN MoMo");
    assert_eq!(payment_method_label("airtel_momo"), "Airtel Money");
    assert_eq!(payment_method_label("other"), "other");
}

// =============================================================
// Payload
// =============================================================

#[test]
fn payload_blank_optional_fields_become_none() {
    let payload = valid_form().to_payload();
    assert_eq!(payload.amount, 50_000);
    assert_eq!(payload.donor_name.as_deref(), Some("Jane Doe"));
    assert_eq!(payload.donor_email.as_deref(), Some("jane@example.com"));
    assert_eq!(payload.donor_phone, None);
    assert_eq!(payload.message, None);
    assert_eq!(payload.campaign_id, None);
}

#[test]
fn anonymous_payload_drops_donor_identity() {
    let form = DonationForm { is_anonymous: true, donor_phone: "+256700000000".to_owned(), ..valid_form() };
    let payload = form.to_payload();
    assert_eq!(payload.donor_name, None);
    assert_eq!(payload.donor_email, None);
    assert_eq!(payload.donor_phone.as_deref(), Some("+256700000000"));
    assert!(payload.is_anonymous);
}

#[test]
fn payload_serializes_nulls_for_missing_fields() {
    let json = serde_json::to_value(valid_form().to_payload()).unwrap();
    assert!(json["campaign_id"].is_null());
    assert_eq!(json["currency"], "UGX");
    assert_eq!(json["payment_method"], "card");
}

// =============================================================
// Campaign hint
// =============================================================

#[test]
fn campaign_hint_selects_matching_campaign() {
    let mut form = DonationForm { campaign_slug_hint: Some("school-biogas".to_owned()), ..DonationForm::default() };
    form.resolve_campaign_hint(&[campaign("c-1", "general"), campaign("c-2", "school-biogas")]);
    assert_eq!(form.campaign_id, "c-2");
}

#[test]
fn campaign_hint_does_not_override_existing_choice() {
    let mut form = DonationForm {
        campaign_id: "c-1".to_owned(),
        campaign_slug_hint: Some("school-biogas".to_owned()),
        ..DonationForm::default()
    };
    form.resolve_campaign_hint(&[campaign("c-2", "school-biogas")]);
    assert_eq!(form.campaign_id, "c-1");
}

#[test]
fn unknown_campaign_hint_leaves_selection_empty() {
    let mut form = DonationForm { campaign_slug_hint: Some("missing".to_owned()), ..DonationForm::default() };
    form.resolve_campaign_hint(&[campaign("c-1", "general")]);
    assert!(form.campaign_id.is_empty());
}

#[test]
fn selected_campaign_looks_up_by_id() {
    let campaigns = [campaign("c-1", "general")];
    let form = DonationForm { campaign_id: "c-1".to_owned(), ..DonationForm::default() };
    assert_eq!(form.selected_campaign(&campaigns).map(|c| c.slug.as_str()), Some("general"));
    assert!(DonationForm::default().selected_campaign(&campaigns).is_none());
}

#[test]
fn wizard_ignores_blank_hint() {
    assert_eq!(DonationWizard::with_campaign_hint(Some("  ".to_owned())).form.campaign_slug_hint, None);
}

// =============================================================
// Transitions
// =============================================================

#[test]
fn next_with_invalid_form_stays_on_form() {
    let mut wizard = DonationWizard::default();
    assert!(!wizard.next());
    assert_eq!(wizard.step, DonationStep::Form);
    assert!(wizard.error_for(DonationField::Amount).is_some());
}

#[test]
fn next_with_valid_form_moves_to_summary_and_clears_api_error() {
    let mut wizard = DonationWizard { form: valid_form(), api_error: Some("old".to_owned()), ..DonationWizard::default() };
    assert!(wizard.next());
    assert_eq!(wizard.step, DonationStep::Summary);
    assert_eq!(wizard.api_error, None);
    assert!(wizard.errors.is_empty());
}

#[test]
fn back_returns_to_form_and_clears_error() {
    let mut wizard = DonationWizard { form: valid_form(), ..DonationWizard::default() };
    wizard.next();
    wizard.begin_submit();
    wizard.fail("Card declined");
    assert_eq!(wizard.step, DonationStep::Failure("Card declined".to_owned()));
    wizard.back();
    assert_eq!(wizard.step, DonationStep::Form);
    assert_eq!(wizard.api_error, None);
    assert_eq!(wizard.form.amount, "50000");
}

#[test]
fn begin_submit_only_from_summary_once() {
    let mut wizard = DonationWizard { form: valid_form(), ..DonationWizard::default() };
    assert!(wizard.begin_submit().is_none());
    wizard.next();
    let payload = wizard.begin_submit();
    assert_eq!(payload.map(|p| p.amount), Some(50_000));
    assert!(wizard.submitting);
    assert!(wizard.begin_submit().is_none());
}

#[test]
fn fail_with_blank_message_uses_default() {
    let mut wizard = DonationWizard::default();
    wizard.fail("");
    assert_eq!(wizard.step, DonationStep::Failure(DEFAULT_FAILURE_MESSAGE.to_owned()));
}

#[test]
fn succeed_carries_intent() {
    let mut wizard = DonationWizard { form: valid_form(), ..DonationWizard::default() };
    wizard.next();
    wizard.begin_submit();
    let intent = DonationIntent {
        donation: Some(Donation { id: "d-1".to_owned(), amount: 50_000, ..Donation::default() }),
        payment_url: Some("https://pay.example/s/1".to_owned()),
        provider_session_id: None,
    };
    wizard.succeed(intent.clone());
    assert!(!wizard.submitting);
    assert_eq!(wizard.step, DonationStep::Success(intent));
}

#[test]
fn reset_returns_fresh_form() {
    let mut wizard = DonationWizard { form: valid_form(), ..DonationWizard::default() };
    wizard.next();
    wizard.fail("boom");
    wizard.reset();
    assert_eq!(wizard, DonationWizard::default());
}
