//! Donation wizard route.
//!
//! SYSTEM CONTEXT
//! ==============
//! Holds the wizard signal and the campaign list, and performs the single
//! `POST /donations` on confirm. Step rules live in `state::donation`.

use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

use crate::components::donation_form::DonationFormView;
use crate::components::donation_outcome::{DonationFailure, DonationSuccess};
use crate::components::donation_summary::DonationSummary;
use crate::components::seo::Seo;
use crate::net::endpoints;
use crate::net::types::{Campaign, CampaignStatus};
use crate::state::donation::{DonationStep, DonationWizard};
use crate::util::load::{Remote, load_into, spawn};

#[component]
pub fn DonatePage() -> impl IntoView {
    let query = use_query_map();
    let hint = query.with_untracked(|q| q.get("campaign"));
    let wizard = RwSignal::new(DonationWizard::with_campaign_hint(hint));
    let campaigns = RwSignal::new(Remote::<Vec<Campaign>>::Loading);

    Effect::new(move || load_into(campaigns, endpoints::list_campaigns(Some(CampaignStatus::Active))));

    // Map the `?campaign=` slug onto an id once the list arrives.
    Effect::new(move || {
        campaigns.with(|c| {
            if let Remote::Ready(items) = c {
                wizard.update(|w| w.form.resolve_campaign_hint(items));
            }
        });
    });

    let step = Memo::new(move |_| wizard.with(|w| w.step.clone()));
    let selected_campaign = Signal::derive(move || {
        let form = wizard.with(|w| w.form.clone());
        campaigns.with(|c| form.selected_campaign(c.items()).cloned())
    });

    let on_next = Callback::new(move |()| {
        wizard.update(|w| {
            w.next();
        });
    });
    let on_back = Callback::new(move |()| wizard.update(DonationWizard::back));
    let on_new = Callback::new(move |()| wizard.update(DonationWizard::reset));
    let on_confirm = Callback::new(move |()| {
        let mut payload = None;
        wizard.update(|w| payload = w.begin_submit());
        let Some(payload) = payload else {
            return;
        };
        spawn(async move {
            match endpoints::create_donation(&payload).await {
                Ok(intent) => wizard.update(|w| w.succeed(intent)),
                Err(err) => {
                    leptos::logging::warn!("donation create failed: {err}");
                    wizard.update(|w| w.fail(&err.to_string()));
                }
            }
        });
    });

    view! {
        <Seo
            title="Donate"
            description="Support Brisk Farm Solutions as we build sustainable biogas, waste management and farm systems across Uganda."
        />
        <section class="section section--narrow">
            <p class="eyebrow">"Donate"</p>
            <h1 class="page-title">"Support Brisk Farm Solutions"</h1>
            <p class="lead">
                "Your contribution helps us implement biodigester systems, waste management solutions, farm "
                "training and construction projects that keep households, farms and institutions resilient "
                "across Uganda."
            </p>

            <div class="panel">
                {move || {
                    match step.get() {
                        DonationStep::Form => {
                            view! { <DonationFormView wizard campaigns on_next/> }.into_any()
                        }
                        DonationStep::Summary => {
                            view! { <DonationSummary wizard campaign=selected_campaign on_back on_confirm/> }.into_any()
                        }
                        DonationStep::Success(intent) => {
                            let campaign_name = selected_campaign.get_untracked().map(|c| c.name);
                            view! { <DonationSuccess intent campaign_name on_new/> }.into_any()
                        }
                        DonationStep::Failure(message) => {
                            view! { <DonationFailure message on_retry=on_back/> }.into_any()
                        }
                    }
                }}
            </div>
        </section>
    }
}
