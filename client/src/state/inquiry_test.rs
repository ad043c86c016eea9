use super::*;

#[test]
fn quote_payload_marks_source_and_drops_blanks() {
    let form = QuoteForm {
        full_name: " Okello Peter ".to_owned(),
        email: "okello@example.com".to_owned(),
        project_type: "Biogas".to_owned(),
        location: "  ".to_owned(),
        ..QuoteForm::default()
    };
    let payload = form.to_payload();
    assert_eq!(payload.full_name, "Okello Peter");
    assert_eq!(payload.source, "quote");
    assert_eq!(payload.project_type.as_deref(), Some("Biogas"));
    assert_eq!(payload.location, None);
    assert_eq!(payload.phone, None);
}

#[test]
fn quote_requires_name_and_a_contact_channel() {
    assert_eq!(QuoteForm::default().validate(), Err("Please enter your full name."));
    let name_only = QuoteForm { full_name: "A".to_owned(), ..QuoteForm::default() };
    assert_eq!(name_only.validate(), Err("Please provide an email address or phone number."));
    let with_phone = QuoteForm { phone: "0700".to_owned(), ..name_only };
    assert_eq!(with_phone.validate(), Ok(()));
}

#[test]
fn contact_payload_uses_contact_source() {
    let form = ContactForm {
        full_name: "Amina".to_owned(),
        email: "amina@example.com".to_owned(),
        message: "Hello".to_owned(),
    };
    assert_eq!(form.validate(), Ok(()));
    let payload = form.to_payload();
    assert_eq!(payload.source, "contact");
    assert_eq!(payload.message.as_deref(), Some("Hello"));
    assert_eq!(payload.budget_range, None);
}

#[test]
fn contact_requires_all_fields() {
    let form = ContactForm { full_name: "Amina".to_owned(), ..ContactForm::default() };
    assert!(form.validate().is_err());
}

#[test]
fn newsletter_ignores_blank_email() {
    assert_eq!(newsletter_payload("   "), None);
    assert_eq!(newsletter_payload(" a@b.com ").map(|p| p.email), Some("a@b.com".to_owned()));
}

#[test]
fn feedback_from_status_error_uses_backend_detail() {
    let err = ApiError::Status { status: 422, message: "email: invalid".to_owned() };
    let feedback = Feedback::from_error(&err, QUOTE_FAILURE);
    assert!(feedback.is_error());
    assert_eq!(feedback.message(), "email: invalid");
}

#[test]
fn feedback_from_blank_error_uses_fallback() {
    let err = ApiError::Status { status: 500, message: String::new() };
    assert_eq!(Feedback::from_error(&err, QUOTE_FAILURE).message(), QUOTE_FAILURE);
    assert!(!Feedback::Success(CONTACT_SUCCESS.to_owned()).is_error());
}
