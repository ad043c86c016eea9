//! Admin landing page: entity counters and the donations widget.
//!
//! SYSTEM CONTEXT
//! ==============
//! Counters come from `/stats/`. The donations widget is computed client side
//! from every confirmed donation and every campaign, walked page by page.

use leptos::prelude::*;

use crate::components::stat_card::StatCard;
use crate::net::endpoints;
use crate::net::types::{Campaign, Donation, Stats};
use crate::state::admin::DonationsSummary;
use crate::state::auth::AuthState;
use crate::util::auth::load_guarded;
use crate::util::format::{format_amount, group_thousands};
use crate::util::load::Remote;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth_state = expect_context::<RwSignal<AuthState>>();
    let stats = RwSignal::new(Remote::<Stats>::Loading);
    let donations = RwSignal::new(Remote::<Vec<Donation>>::Loading);
    let campaigns = RwSignal::new(Remote::<Vec<Campaign>>::Loading);

    Effect::new(move || {
        load_guarded(auth_state, stats, endpoints::fetch_stats());
        load_guarded(auth_state, donations, endpoints::list_all_confirmed_donations());
        load_guarded(auth_state, campaigns, endpoints::list_all_campaigns());
    });

    let count = move |read: fn(&Stats) -> u64| {
        Signal::derive(move || match stats.get() {
            Remote::Ready(s) => group_thousands(i64::try_from(read(&s)).unwrap_or(i64::MAX)),
            Remote::Loading => "…".to_owned(),
            Remote::Failed(_) => "-".to_owned(),
        })
    };

    let summary = Memo::new(move |_| {
        let today = chrono::Local::now().date_naive();
        donations.with(|d| campaigns.with(|c| DonationsSummary::compute(d.items(), c.items(), today, &chrono::Local)))
    });

    view! {
        <section class="admin-page">
            <header class="admin-page__header">
                <p class="eyebrow">"Overview"</p>
                <h1>"Dashboard"</h1>
            </header>
            {move || stats.with(|s| s.error().map(|e| view! { <p class="error-text">{e.to_owned()}</p> }))}
            <div class="stat-grid">
                <StatCard label="Services" value=count(|s| s.services)/>
                <StatCard label="Projects" value=count(|s| s.projects) tone="earth"/>
                <StatCard label="Open inquiries" value=count(|s| s.inquiries) tone="orange"/>
                <StatCard label="Testimonials" value=count(|s| s.testimonials)/>
                <StatCard label="Subscribers" value=count(|s| s.subscribers) tone="earth"/>
            </div>

            <section class="panel">
                <div class="panel__header">
                    <h2>"Donations"</h2>
                    <a href="/admin/donations" class="btn btn--link">"View all →"</a>
                </div>
                {move || donations.with(|d| d.error().map(|e| view! { <p class="error-text">{e.to_owned()}</p> }))}
                <div class="stat-grid">
                    <StatCard
                        label="Confirmed this month"
                        value=Signal::derive(move || format_amount(Some(summary.get().month_total), None))
                        tone="orange"
                    />
                    <StatCard
                        label="Donors this month"
                        value=Signal::derive(move || summary.get().donors_count.to_string())
                    />
                    <StatCard
                        label="Top campaign"
                        value=Signal::derive(move || {
                            summary.get().top_campaign.map_or_else(
                                || "-".to_owned(),
                                |t| format!("{} ({})", t.name, format_amount(Some(t.total_amount), None)),
                            )
                        })
                        tone="earth"
                    />
                </div>
            </section>
        </section>
    }
}
