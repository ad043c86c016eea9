//! Contact page: company details, map and a short message form.

use leptos::prelude::*;

use crate::components::feedback::FormFeedback;
use crate::components::footer::{CONTACT_ADDRESS, CONTACT_EMAIL};
use crate::components::seo::Seo;
use crate::net::endpoints;
use crate::state::inquiry::{CONTACT_FAILURE, CONTACT_SUCCESS, ContactForm, Feedback};
use crate::util::load::spawn;

const MAP_EMBED: &str = "https://maps.google.com/maps?q=0.40653,32.5118&z=15&output=embed";

#[component]
pub fn ContactPage() -> impl IntoView {
    let form = RwSignal::new(ContactForm::default());
    let loading = RwSignal::new(false);
    let feedback = RwSignal::new(None::<Feedback>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if loading.get_untracked() {
            return;
        }
        let current = form.get_untracked();
        if let Err(msg) = current.validate() {
            feedback.set(Some(Feedback::Error(msg.to_owned())));
            return;
        }
        let payload = current.to_payload();
        loading.set(true);
        feedback.set(None);
        spawn(async move {
            match endpoints::submit_inquiry(&payload).await {
                Ok(()) => {
                    feedback.set(Some(Feedback::Success(CONTACT_SUCCESS.to_owned())));
                    form.set(ContactForm::default());
                }
                Err(err) => {
                    leptos::logging::warn!("contact submit failed: {err}");
                    feedback.set(Some(Feedback::Error(CONTACT_FAILURE.to_owned())));
                }
            }
            loading.set(false);
        });
    };

    view! {
        <Seo
            title="Contact"
            description="Get in touch with Brisk Farm Solutions & Construction Company for biogas systems, livestock and crop production support, and modern construction services in Uganda."
        />
        <section class="section">
            <header>
                <p class="eyebrow">"Contact"</p>
                <h1 class="page-title">"Let’s talk about your farm or construction project."</h1>
                <p class="lead">
                    "Reach out for biogas installations, livestock units, crop production support, or "
                    "construction works. We typically respond within 1-2 working days."
                </p>
            </header>

            <div class="two-col">
                <form class="panel form" on:submit=on_submit>
                    <label class="field">
                        <span class="field__label">"Full name"</span>
                        <input
                            class="input"
                            required=true
                            prop:value=move || form.with(|f| f.full_name.clone())
                            on:input=move |ev| form.update(|f| f.full_name = event_target_value(&ev))
                        />
                    </label>
                    <label class="field">
                        <span class="field__label">"Email"</span>
                        <input
                            class="input"
                            type="email"
                            required=true
                            prop:value=move || form.with(|f| f.email.clone())
                            on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
                        />
                    </label>
                    <label class="field">
                        <span class="field__label">"Message"</span>
                        <textarea
                            class="input"
                            rows="5"
                            required=true
                            prop:value=move || form.with(|f| f.message.clone())
                            on:input=move |ev| form.update(|f| f.message = event_target_value(&ev))
                        ></textarea>
                    </label>
                    <button class="btn btn--primary" type="submit" disabled=move || loading.get()>
                        {move || if loading.get() { "Sending..." } else { "Send message" }}
                    </button>
                    <FormFeedback feedback=feedback/>
                </form>

                <aside class="panel">
                    <h2>"Visit or write to us"</h2>
                    <p>{CONTACT_ADDRESS}</p>
                    <p><a href=format!("mailto:{CONTACT_EMAIL}")>{CONTACT_EMAIL}</a></p>
                    <iframe
                        class="map"
                        title="Brisk Farm Solutions location"
                        src=MAP_EMBED
                        loading="lazy"
                        referrerpolicy="no-referrer-when-downgrade"
                    ></iframe>
                </aside>
            </div>
        </section>
    }
}
