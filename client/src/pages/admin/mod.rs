//! Admin CMS routes. Everything except `login` renders inside `AdminLayout`.

pub mod campaigns;
pub mod dashboard;
pub mod donations;
pub mod inquiries;
pub mod login;
pub mod projects;
pub mod services;
pub mod subscribers;
pub mod testimonials;
pub mod users;

/// Browser confirm dialog. Always confirms outside the browser.
pub(crate) fn confirm(message: &str) -> bool {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window().and_then(|w| w.confirm_with_message(message).ok()).unwrap_or(false)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = message;
        true
    }
}
