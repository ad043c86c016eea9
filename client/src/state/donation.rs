//! Donation wizard state machine.
//!
//! SYSTEM CONTEXT
//! ==============
//! The donate page walks a visitor through `Form -> Summary -> Success` or
//! `Failure`. All transitions live here as pure methods so the page only
//! wires inputs and the single network call.
//!
//! DESIGN
//! ======
//! Amounts stay raw text while editing and are parsed on validation. The
//! backend stores whole major units, so fractional input is rejected with
//! the same message as a missing amount.

#[cfg(test)]
#[path = "donation_test.rs"]
mod donation_test;

use std::collections::BTreeMap;

use crate::net::types::{Campaign, DonationIntent, DonationPayload};

pub const DEFAULT_CURRENCY: &str = "UGX";
pub const DEFAULT_PAYMENT_METHOD: &str = "card";
pub const DEFAULT_FAILURE_MESSAGE: &str = "Failed to create donation. Please try again.";

/// `(value, label)` pairs accepted by the backend.
pub const PAYMENT_METHODS: [(&str, &str); 3] =
    [("card", "Card (Visa / Mastercard)"), ("mtn_momo", "MTN MoMo"), ("airtel_momo", "Airtel Money")];

pub const CURRENCIES: [(&str, &str); 2] = [("UGX", "UGX (Ugandan Shillings)"), ("USD", "USD (US Dollars)")];

pub fn payment_method_label(value: &str) -> &str {
    PAYMENT_METHODS.iter().find(|(v, _)| *v == value).map_or(value, |(_, label)| label)
}

/// Form field a validation error is attached to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum DonationField {
    Amount,
    Currency,
    PaymentMethod,
    DonorName,
    DonorEmail,
}

pub type FieldErrors = BTreeMap<DonationField, &'static str>;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DonationForm {
    pub amount: String,
    pub currency: String,
    pub payment_method: String,
    pub campaign_id: String,
    pub donor_name: String,
    pub donor_email: String,
    pub donor_phone: String,
    pub is_anonymous: bool,
    pub message: String,
    /// `?campaign=<slug>` from the URL, resolved to an id once campaigns load.
    pub campaign_slug_hint: Option<String>,
}

impl Default for DonationForm {
    fn default() -> Self {
        Self {
            amount: String::new(),
            currency: DEFAULT_CURRENCY.to_owned(),
            payment_method: DEFAULT_PAYMENT_METHOD.to_owned(),
            campaign_id: String::new(),
            donor_name: String::new(),
            donor_email: String::new(),
            donor_phone: String::new(),
            is_anonymous: false,
            message: String::new(),
            campaign_slug_hint: None,
        }
    }
}

impl DonationForm {
    /// Amount as whole major units, `None` unless strictly positive.
    pub fn parsed_amount(&self) -> Option<i64> {
        let cleaned: String = self.amount.chars().filter(|c| *c != ',' && !c.is_whitespace()).collect();
        cleaned.parse::<i64>().ok().filter(|n| *n > 0)
    }

    pub fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        if self.parsed_amount().is_none() {
            errors.insert(DonationField::Amount, "Enter a valid amount greater than zero.");
        }
        if self.currency.trim().is_empty() {
            errors.insert(DonationField::Currency, "Select a currency.");
        }
        if !PAYMENT_METHODS.iter().any(|(v, _)| *v == self.payment_method) {
            errors.insert(DonationField::PaymentMethod, "Select a valid payment method.");
        }
        if !self.is_anonymous {
            if self.donor_name.trim().is_empty() {
                errors.insert(DonationField::DonorName, "Please enter your name or choose to give anonymously.");
            }
            if self.donor_email.trim().is_empty() {
                errors.insert(DonationField::DonorEmail, "Please enter your email or choose to give anonymously.");
            }
        }
        errors
    }

    /// Request body for `POST /donations`. Call only after `validate` passes.
    pub fn to_payload(&self) -> DonationPayload {
        let donor = |value: &str| if self.is_anonymous { None } else { non_blank(value) };
        DonationPayload {
            amount: self.parsed_amount().unwrap_or_default(),
            currency: self.currency.clone(),
            payment_method: self.payment_method.clone(),
            donor_name: donor(&self.donor_name),
            donor_email: donor(&self.donor_email),
            donor_phone: non_blank(&self.donor_phone),
            is_anonymous: self.is_anonymous,
            message: non_blank(&self.message),
            campaign_id: non_blank(&self.campaign_id),
        }
    }

    /// Select the hinted campaign unless the visitor already picked one.
    pub fn resolve_campaign_hint(&mut self, campaigns: &[Campaign]) {
        if !self.campaign_id.is_empty() {
            return;
        }
        let Some(hint) = self.campaign_slug_hint.as_deref() else {
            return;
        };
        if let Some(found) = campaigns.iter().find(|c| c.slug == hint) {
            self.campaign_id = found.id.clone();
        }
    }

    pub fn selected_campaign<'a>(&self, campaigns: &'a [Campaign]) -> Option<&'a Campaign> {
        if self.campaign_id.is_empty() {
            return None;
        }
        campaigns.iter().find(|c| c.id == self.campaign_id)
    }
}

fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_owned())
}

#[derive(Clone, Debug, Default, PartialEq)]
pub enum DonationStep {
    #[default]
    Form,
    Summary,
    Success(DonationIntent),
    Failure(String),
}

/// Whole wizard: the form, its errors, and where the visitor is.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DonationWizard {
    pub form: DonationForm,
    pub errors: FieldErrors,
    pub step: DonationStep,
    pub api_error: Option<String>,
    pub submitting: bool,
}

impl DonationWizard {
    pub fn with_campaign_hint(slug: Option<String>) -> Self {
        let form = DonationForm { campaign_slug_hint: slug.filter(|s| !s.trim().is_empty()), ..DonationForm::default() };
        Self { form, ..Self::default() }
    }

    /// Form -> Summary when the form validates. Returns whether it advanced.
    pub fn next(&mut self) -> bool {
        self.api_error = None;
        self.errors = self.form.validate();
        if self.step == DonationStep::Form && self.errors.is_empty() {
            self.step = DonationStep::Summary;
            return true;
        }
        false
    }

    pub fn back(&mut self) {
        self.step = DonationStep::Form;
        self.api_error = None;
    }

    /// Mark the confirm request in flight and hand back its body.
    pub fn begin_submit(&mut self) -> Option<DonationPayload> {
        if self.step != DonationStep::Summary || self.submitting {
            return None;
        }
        self.submitting = true;
        self.api_error = None;
        Some(self.form.to_payload())
    }

    pub fn succeed(&mut self, intent: DonationIntent) {
        self.submitting = false;
        self.step = DonationStep::Success(intent);
    }

    pub fn fail(&mut self, message: &str) {
        let message = if message.trim().is_empty() { DEFAULT_FAILURE_MESSAGE } else { message };
        self.submitting = false;
        self.api_error = Some(message.to_owned());
        self.step = DonationStep::Failure(message.to_owned());
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn error_for(&self, field: DonationField) -> Option<&'static str> {
        self.errors.get(&field).copied()
    }
}
