//! Link into the donation wizard, optionally preselecting a campaign.

#[cfg(test)]
#[path = "donate_button_test.rs"]
mod donate_button_test;

use leptos::prelude::*;

/// `/donate`, or `/donate?campaign=<slug>` when a campaign is given.
pub fn donate_href(campaign_slug: Option<&str>) -> String {
    match campaign_slug.map(str::trim).filter(|s| !s.is_empty()) {
        Some(slug) => crate::net::endpoints::with_query("/donate", &[("campaign", slug.to_owned())]),
        None => "/donate".to_owned(),
    }
}

#[component]
pub fn DonateButton(
    #[prop(optional, into)] campaign_slug: Option<String>,
    #[prop(default = "Donate Now", into)] label: String,
    #[prop(default = "accent")] variant: &'static str,
) -> impl IntoView {
    let href = donate_href(campaign_slug.as_deref());
    view! {
        <a href=href class=format!("btn btn--{variant} donate-button") role="button">
            {label}
        </a>
    }
}
