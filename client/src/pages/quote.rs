//! Quote request form. Posts an inquiry with source `quote`.

use leptos::prelude::*;

use crate::components::feedback::FormFeedback;
use crate::components::seo::Seo;
use crate::net::endpoints;
use crate::state::inquiry::{Feedback, QUOTE_FAILURE, QUOTE_SUCCESS, QuoteForm};
use crate::util::load::spawn;

#[component]
pub fn QuotePage() -> impl IntoView {
    let form = RwSignal::new(QuoteForm::default());
    let submitting = RwSignal::new(false);
    let feedback = RwSignal::new(None::<Feedback>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }
        let current = form.get_untracked();
        if let Err(msg) = current.validate() {
            feedback.set(Some(Feedback::Error(msg.to_owned())));
            return;
        }
        let payload = current.to_payload();
        submitting.set(true);
        feedback.set(None);
        spawn(async move {
            match endpoints::submit_inquiry(&payload).await {
                Ok(()) => {
                    feedback.set(Some(Feedback::Success(QUOTE_SUCCESS.to_owned())));
                    form.set(QuoteForm::default());
                }
                Err(err) => feedback.set(Some(Feedback::from_error(&err, QUOTE_FAILURE))),
            }
            submitting.set(false);
        });
    };

    let text = move |read: fn(&QuoteForm) -> String| move || form.with(read);
    let edit = move |write: fn(&mut QuoteForm, String)| {
        move |ev: leptos::ev::Event| {
            let value = event_target_value(&ev);
            form.update(|f| write(f, value));
        }
    };

    view! {
        <Seo
            title="Request a Quote"
            description="Share details about your farm or construction project and Brisk Farm Solutions & Construction Company will respond with guidance, pricing, or a site visit plan."
        />
        <section class="section">
            <header>
                <p class="eyebrow">"Request Quotation"</p>
                <h1 class="page-title">"Tell us about your project."</h1>
                <p class="lead">
                    "Share a few details about your biogas system, livestock unit, crop production plan, or "
                    "construction project and our team will respond with next steps, site visit scheduling, "
                    "or a preliminary BOQ discussion."
                </p>
            </header>

            <form class="panel form" on:submit=on_submit>
                <div class="form-grid">
                    <label class="field">
                        <span class="field__label">"Full name"</span>
                        <input class="input" required=true prop:value=text(|f| f.full_name.clone()) on:input=edit(|f, v| f.full_name = v)/>
                    </label>
                    <label class="field">
                        <span class="field__label">"Email"</span>
                        <input class="input" type="email" prop:value=text(|f| f.email.clone()) on:input=edit(|f, v| f.email = v)/>
                    </label>
                    <label class="field">
                        <span class="field__label">"Phone"</span>
                        <input class="input" type="tel" prop:value=text(|f| f.phone.clone()) on:input=edit(|f, v| f.phone = v)/>
                    </label>
                    <label class="field">
                        <span class="field__label">"Project type"</span>
                        <input
                            class="input"
                            placeholder="Biogas, livestock unit, farm structure, housing..."
                            prop:value=text(|f| f.project_type.clone())
                            on:input=edit(|f, v| f.project_type = v)
                        />
                    </label>
                    <label class="field">
                        <span class="field__label">"Budget range"</span>
                        <input
                            class="input"
                            placeholder="e.g. 20M-150M UGX"
                            prop:value=text(|f| f.budget_range.clone())
                            on:input=edit(|f, v| f.budget_range = v)
                        />
                    </label>
                    <label class="field">
                        <span class="field__label">"Project location"</span>
                        <input
                            class="input"
                            placeholder="District / town"
                            prop:value=text(|f| f.location.clone())
                            on:input=edit(|f, v| f.location = v)
                        />
                    </label>
                </div>
                <label class="field">
                    <span class="field__label">"Project details"</span>
                    <textarea class="input" rows="5" prop:value=text(|f| f.message.clone()) on:input=edit(|f, v| f.message = v)></textarea>
                </label>
                <button class="btn btn--primary" type="submit" disabled=move || submitting.get()>
                    {move || if submitting.get() { "Submitting..." } else { "Submit request" }}
                </button>
                <FormFeedback feedback=feedback/>
            </form>
        </section>
    }
}
