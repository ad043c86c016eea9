//! Public lead-capture forms: quote request, contact message, newsletter.
//!
//! Each form turns into a single POST. Quote and contact both land on
//! `/inquiries`, distinguished by `source`.

#[cfg(test)]
#[path = "inquiry_test.rs"]
mod inquiry_test;

use crate::net::api::ApiError;
use crate::net::types::{InquiryPayload, SubscriberPayload};
use crate::state::admin::InquirySource;

pub const QUOTE_SUCCESS: &str =
    "Thank you. Our team will review your request and get back to you with next steps or a site visit schedule.";
pub const QUOTE_FAILURE: &str = "Something went wrong. Please try again shortly.";
pub const CONTACT_SUCCESS: &str = "Your message has been sent successfully.";
pub const CONTACT_FAILURE: &str = "Something went wrong. Please try again.";
pub const NEWSLETTER_SUCCESS: &str = "Thank you! You've been successfully subscribed.";
pub const NEWSLETTER_FAILURE: &str = "Something went wrong. Please try again.";

/// Outcome line shown under a submitted form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Feedback {
    Success(String),
    Error(String),
}

impl Feedback {
    pub fn message(&self) -> &str {
        match self {
            Self::Success(m) | Self::Error(m) => m,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }

    /// Backend message when it has one, otherwise `fallback`.
    pub fn from_error(err: &ApiError, fallback: &str) -> Self {
        let text = err.to_string();
        if text.trim().is_empty() { Self::Error(fallback.to_owned()) } else { Self::Error(text) }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct QuoteForm {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub project_type: String,
    pub budget_range: String,
    pub location: String,
    pub message: String,
}

impl QuoteForm {
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.full_name.trim().is_empty() {
            return Err("Please enter your full name.");
        }
        if self.email.trim().is_empty() && self.phone.trim().is_empty() {
            return Err("Please provide an email address or phone number.");
        }
        Ok(())
    }

    pub fn to_payload(&self) -> InquiryPayload {
        InquiryPayload {
            full_name: self.full_name.trim().to_owned(),
            email: non_blank(&self.email),
            phone: non_blank(&self.phone),
            project_type: non_blank(&self.project_type),
            budget_range: non_blank(&self.budget_range),
            location: non_blank(&self.location),
            message: non_blank(&self.message),
            source: InquirySource::Quote.as_str().to_owned(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub full_name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.full_name.trim().is_empty() || self.email.trim().is_empty() || self.message.trim().is_empty() {
            return Err("Please fill in your name, email and message.");
        }
        Ok(())
    }

    pub fn to_payload(&self) -> InquiryPayload {
        InquiryPayload {
            full_name: self.full_name.trim().to_owned(),
            email: non_blank(&self.email),
            message: non_blank(&self.message),
            source: InquirySource::Contact.as_str().to_owned(),
            ..InquiryPayload::default()
        }
    }
}

/// Newsletter body, or `None` for blank input which is silently ignored.
pub fn newsletter_payload(email: &str) -> Option<SubscriberPayload> {
    non_blank(email).map(|email| SubscriberPayload { email })
}

fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_owned())
}
