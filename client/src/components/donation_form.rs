//! Step one of the donation wizard: amount, method, campaign and donor.

use leptos::prelude::*;

use crate::net::types::Campaign;
use crate::state::donation::{CURRENCIES, DonationField, DonationForm, DonationWizard, PAYMENT_METHODS};
use crate::util::load::Remote;

#[component]
pub fn DonationFormView(
    wizard: RwSignal<DonationWizard>,
    #[prop(into)] campaigns: Signal<Remote<Vec<Campaign>>>,
    on_next: Callback<()>,
) -> impl IntoView {
    let field = move |read: fn(&DonationForm) -> String| move || wizard.with(|w| read(&w.form));
    let error = move |f: DonationField| {
        move || wizard.with(|w| w.error_for(f)).map(|msg| view! { <p class="field-error">{msg}</p> })
    };
    let set = move |write: fn(&mut DonationForm, String)| {
        move |ev: leptos::ev::Event| {
            let value = event_target_value(&ev);
            wizard.update(|w| write(&mut w.form, value));
        }
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        on_next.run(());
    };

    view! {
        <form class="donation-form" on:submit=on_submit novalidate=true>
            <div class="form-grid">
                <label class="field">
                    <span class="field__label">"Amount"</span>
                    <input
                        class="input"
                        inputmode="numeric"
                        placeholder="e.g. 50000"
                        prop:value=field(|f| f.amount.clone())
                        on:input=set(|f, v| f.amount = v)
                    />
                    {error(DonationField::Amount)}
                </label>
                <label class="field">
                    <span class="field__label">"Currency"</span>
                    <select class="input" prop:value=field(|f| f.currency.clone()) on:change=set(|f, v| f.currency = v)>
                        {CURRENCIES
                            .into_iter()
                            .map(|(value, label)| view! { <option value=value>{label}</option> })
                            .collect_view()}
                    </select>
                    {error(DonationField::Currency)}
                </label>
            </div>

            <fieldset class="field">
                <legend class="field__label">"Payment method"</legend>
                {PAYMENT_METHODS
                    .into_iter()
                    .map(|(value, label)| {
                        view! {
                            <label class="radio">
                                <input
                                    type="radio"
                                    name="payment_method"
                                    value=value
                                    prop:checked=move || wizard.with(|w| w.form.payment_method == value)
                                    on:change=move |_| wizard.update(|w| w.form.payment_method = value.to_owned())
                                />
                                <span>{label}</span>
                            </label>
                        }
                    })
                    .collect_view()}
                {error(DonationField::PaymentMethod)}
            </fieldset>

            <label class="field">
                <span class="field__label">"Campaign"</span>
                <select
                    class="input"
                    prop:value=field(|f| f.campaign_id.clone())
                    on:change=set(|f, v| f.campaign_id = v)
                    disabled=move || campaigns.with(Remote::is_loading)
                >
                    <option value="">"General support (let Brisk allocate where needed most)"</option>
                    {move || {
                        campaigns
                            .get()
                            .items()
                            .iter()
                            .map(|c| view! { <option value=c.id.clone()>{c.name.clone()}</option> })
                            .collect_view()
                    }}
                </select>
                {move || campaigns.with(|c| c.error().map(|e| view! { <p class="field-error">{e.to_owned()}</p> }))}
            </label>

            <label class="checkbox">
                <input
                    type="checkbox"
                    prop:checked=move || wizard.with(|w| w.form.is_anonymous)
                    on:change=move |ev| {
                        let checked = event_target_checked(&ev);
                        wizard.update(|w| w.form.is_anonymous = checked);
                    }
                />
                <span>"Give anonymously"</span>
            </label>

            <Show when=move || !wizard.with(|w| w.form.is_anonymous)>
                <div class="form-grid">
                    <label class="field">
                        <span class="field__label">"Your name"</span>
                        <input
                            class="input"
                            prop:value=field(|f| f.donor_name.clone())
                            on:input=set(|f, v| f.donor_name = v)
                        />
                        {error(DonationField::DonorName)}
                    </label>
                    <label class="field">
                        <span class="field__label">"Email"</span>
                        <input
                            class="input"
                            type="email"
                            prop:value=field(|f| f.donor_email.clone())
                            on:input=set(|f, v| f.donor_email = v)
                        />
                        {error(DonationField::DonorEmail)}
                    </label>
                </div>
            </Show>

            <label class="field">
                <span class="field__label">"Phone (optional)"</span>
                <input
                    class="input"
                    type="tel"
                    prop:value=field(|f| f.donor_phone.clone())
                    on:input=set(|f, v| f.donor_phone = v)
                />
            </label>
            <label class="field">
                <span class="field__label">"Message (optional)"</span>
                <textarea
                    class="input"
                    rows="3"
                    prop:value=field(|f| f.message.clone())
                    on:input=set(|f, v| f.message = v)
                ></textarea>
            </label>

            <button class="btn btn--primary" type="submit">"Continue"</button>
        </form>
    }
}
