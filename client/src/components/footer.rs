//! Site footer with company blurb, quick links and newsletter signup.

use leptos::prelude::*;

use crate::components::feedback::FormFeedback;
use crate::net::endpoints;
use crate::state::inquiry::{Feedback, NEWSLETTER_FAILURE, NEWSLETTER_SUCCESS, newsletter_payload};
use crate::util::load::spawn;

pub const CONTACT_EMAIL: &str = "briskfarmsolutions@gmail.com";
pub const CONTACT_ADDRESS: &str = "Ssenge, Naluvule, Wakiso District, Uganda";

#[component]
pub fn Footer() -> impl IntoView {
    let year = current_year();

    view! {
        <footer class="footer">
            <div class="footer__grid">
                <div class="footer__about">
                    <h3 class="footer__title">"BRISK FARM SOLUTIONS & CONSTRUCTION CO."</h3>
                    <p>
                        "Integrated agro-systems and modern construction, from biogas and livestock housing "
                        "to crop production, farm infrastructure and general building works across Uganda."
                    </p>
                    <p class="footer__contact">{CONTACT_ADDRESS}</p>
                    <p class="footer__contact">
                        <a href=format!("mailto:{CONTACT_EMAIL}")>{CONTACT_EMAIL}</a>
                    </p>
                </div>
                <div class="footer__links">
                    <a href="/projects">"View Projects"</a>
                    <a href="/quote">"Request Quotation"</a>
                    <a href="/donate">"Donate"</a>
                    <a href="/admin/login">"Staff login"</a>
                </div>
                <Newsletter/>
            </div>
            <div class="footer__bottom">
                <span>{format!("© {year} Brisk Farm Solutions & Construction Company. All rights reserved.")}</span>
            </div>
        </footer>
    }
}

/// Email signup posting to `/subscribers`. Blank input is ignored.
#[component]
fn Newsletter() -> impl IntoView {
    let email = RwSignal::new(String::new());
    let submitting = RwSignal::new(false);
    let feedback = RwSignal::new(None::<Feedback>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }
        let Some(payload) = newsletter_payload(&email.get_untracked()) else {
            return;
        };
        submitting.set(true);
        feedback.set(None);
        spawn(async move {
            match endpoints::subscribe(&payload).await {
                Ok(()) => {
                    feedback.set(Some(Feedback::Success(NEWSLETTER_SUCCESS.to_owned())));
                    email.set(String::new());
                }
                Err(err) => {
                    leptos::logging::warn!("newsletter signup failed: {err}");
                    feedback.set(Some(Feedback::Error(NEWSLETTER_FAILURE.to_owned())));
                }
            }
            submitting.set(false);
        });
    };

    view! {
        <div class="newsletter">
            <h4 class="newsletter__title">"Stay in the loop"</h4>
            <p class="newsletter__text">"Project updates, farm tips and new services. No spam."</p>
            <form class="newsletter__form" on:submit=on_submit>
                <input
                    class="input"
                    type="email"
                    placeholder="you@example.com"
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                />
                <button class="btn btn--accent" type="submit" disabled=move || submitting.get()>
                    {move || if submitting.get() { "Subscribing..." } else { "Subscribe" }}
                </button>
            </form>
            <FormFeedback feedback=feedback/>
        </div>
    }
}

fn current_year() -> i32 {
    use chrono::Datelike as _;
    chrono::Local::now().year()
}
