//! Final wizard screens: donation created, or creation failed.

use leptos::prelude::*;

use crate::net::types::DonationIntent;
use crate::util::format::format_amount;

pub const FAILURE_FALLBACK: &str = "Please check your details and internet connection, then try again.";

#[component]
pub fn DonationSuccess(
    intent: DonationIntent,
    campaign_name: Option<String>,
    on_new: Callback<()>,
) -> impl IntoView {
    let campaign_name = campaign_name.unwrap_or_else(|| "Brisk Farm Solutions".to_owned());
    let payment_url = intent.payment_url.clone().filter(|u| !u.is_empty());
    let donation = intent.donation;

    let go_to_payment = {
        let payment_url = payment_url.clone();
        move |_| {
            #[cfg(feature = "hydrate")]
            {
                if let (Some(url), Some(window)) = (payment_url.as_deref(), web_sys::window()) {
                    let _ = window.location().set_href(url);
                }
            }
            #[cfg(not(feature = "hydrate"))]
            let _ = &payment_url;
        }
    };

    view! {
        <div class="donation-outcome donation-outcome--success">
            <p class="eyebrow">"Thank you"</p>
            <h2>"Your donation has been created"</h2>
            <p>
                "We’ve recorded your intention to support "
                <strong>{campaign_name}</strong>
                ". Continue to the payment step to complete the transaction."
            </p>
            {donation.map(|d| {
                view! {
                    <dl class="summary-list">
                        <dt>"Amount"</dt>
                        <dd>{format_amount(Some(d.amount), Some(d.currency.as_str()))}</dd>
                        {d.donor_email.map(|email| view! { <dt>"Receipt email"</dt><dd>{email}</dd> })}
                        <dt>"Reference"</dt>
                        <dd class="mono">{d.id}</dd>
                    </dl>
                }
            })}
            <div class="form-actions">
                {payment_url.map(|_| {
                    view! {
                        <button class="btn btn--primary" type="button" on:click=go_to_payment>
                            "Continue to payment"
                        </button>
                    }
                })}
                <a href="/" class="btn btn--ghost">"Back to home"</a>
            </div>
            <button class="btn btn--link" type="button" on:click=move |_| on_new.run(())>
                "Make another donation"
            </button>
        </div>
    }
}

#[component]
pub fn DonationFailure(#[prop(into)] message: String, on_retry: Callback<()>) -> impl IntoView {
    let message = if message.trim().is_empty() { FAILURE_FALLBACK.to_owned() } else { message };
    view! {
        <div class="donation-outcome donation-outcome--failure">
            <p class="eyebrow">"Something went wrong"</p>
            <h2>"We couldn’t create your donation"</h2>
            <p>{message}</p>
            <div class="form-actions">
                <button class="btn btn--primary" type="button" on:click=move |_| on_retry.run(())>
                    "Back to form"
                </button>
                <a href="/" class="btn btn--ghost">"Back to home"</a>
            </div>
        </div>
    }
}
