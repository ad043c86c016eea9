//! Step two of the donation wizard: review before creating the donation.

use leptos::prelude::*;

use crate::net::types::Campaign;
use crate::state::donation::{DonationWizard, payment_method_label};
use crate::util::format::format_amount;

pub const GENERAL_SUPPORT: &str = "General support (Brisk allocates)";

#[component]
pub fn DonationSummary(
    wizard: RwSignal<DonationWizard>,
    #[prop(into)] campaign: Signal<Option<Campaign>>,
    on_back: Callback<()>,
    on_confirm: Callback<()>,
) -> impl IntoView {
    let form = move || wizard.with(|w| w.form.clone());
    let submitting = move || wizard.with(|w| w.submitting);

    view! {
        <div class="donation-summary">
            <p class="eyebrow">"Review your donation"</p>
            <p class="muted">"Please confirm the details below before continuing to the secure payment step."</p>
            <dl class="summary-list">
                <dt>"Amount"</dt>
                <dd>{move || {
                    let form = form();
                    format_amount(form.parsed_amount(), Some(form.currency.as_str()))
                }}</dd>
                <dt>"Payment method"</dt>
                <dd>{move || payment_method_label(&form().payment_method).to_owned()}</dd>
                <dt>"Campaign"</dt>
                <dd>{move || campaign.get().map_or_else(|| GENERAL_SUPPORT.to_owned(), |c| c.name)}</dd>
                <Show when=move || !form().is_anonymous>
                    <dt>"Name"</dt>
                    <dd>{move || non_empty_or_dash(form().donor_name)}</dd>
                    <dt>"Email"</dt>
                    <dd>{move || non_empty_or_dash(form().donor_email)}</dd>
                </Show>
                <Show when=move || !form().donor_phone.trim().is_empty()>
                    <dt>"Phone"</dt>
                    <dd>{move || form().donor_phone}</dd>
                </Show>
                <Show when=move || !form().message.trim().is_empty()>
                    <dt>"Message"</dt>
                    <dd>{move || form().message}</dd>
                </Show>
            </dl>
            <div class="form-actions">
                <button class="btn btn--ghost" type="button" on:click=move |_| on_back.run(())>"Back"</button>
                <button
                    class="btn btn--primary"
                    type="button"
                    disabled=submitting
                    on:click=move |_| on_confirm.run(())
                >
                    {move || if submitting() { "Processing…" } else { "Confirm & continue to payment" }}
                </button>
            </div>
        </div>
    }
}

fn non_empty_or_dash(value: String) -> String {
    if value.trim().is_empty() { "—".to_owned() } else { value }
}
