//! Donation ledger with campaign, status, date and amount filters.
//!
//! Filters are edited locally and only sent on "Apply filters"; "Clear"
//! resets them and refetches the unfiltered list.

use leptos::prelude::*;

use crate::components::admin_table::{AdminTable, ListStatus};
use crate::net::endpoints;
use crate::net::types::{Campaign, Donation, DonationStatus};
use crate::state::admin::DonationFilters;
use crate::state::auth::AuthState;
use crate::state::donation::payment_method_label;
use crate::util::auth::load_guarded;
use crate::util::format::{format_amount, format_datetime};
use crate::util::load::Remote;

const DONATION_HEADERS: &[&str] = &["Date", "Campaign", "Amount", "Method", "Status", "Donor"];

fn donation_status_class(status: DonationStatus) -> &'static str {
    match status {
        DonationStatus::Confirmed => "pill pill--green",
        DonationStatus::Failed => "pill pill--red",
        DonationStatus::Refunded => "pill pill--grey",
        DonationStatus::Pending => "pill pill--yellow",
    }
}

fn campaign_name(campaigns: &[Campaign], id: Option<&str>) -> String {
    id.and_then(|id| campaigns.iter().find(|c| c.id == id))
        .map_or_else(|| "General support".to_owned(), |c| c.name.clone())
}

#[component]
pub fn DonationsAdminPage() -> impl IntoView {
    let auth_state = expect_context::<RwSignal<AuthState>>();
    let donations = RwSignal::new(Remote::<Vec<Donation>>::Loading);
    let campaigns = RwSignal::new(Remote::<Vec<Campaign>>::Loading);
    let filters = RwSignal::new(DonationFilters::default());
    let filter_error = RwSignal::new(None::<&'static str>);

    let reload = move || {
        let current = filters.get_untracked();
        load_guarded(auth_state, donations, async move { endpoints::list_donations(&current).await });
    };
    Effect::new(move || {
        load_guarded(auth_state, campaigns, endpoints::list_all_campaigns());
        reload();
    });

    let on_apply = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        match filters.with_untracked(DonationFilters::validate) {
            Ok(()) => {
                filter_error.set(None);
                reload();
            }
            Err(msg) => filter_error.set(Some(msg)),
        }
    };
    let on_clear = move |_| {
        filters.set(DonationFilters::default());
        filter_error.set(None);
        reload();
    };

    let text_input = move |label: &'static str, kind: &'static str, read: fn(&DonationFilters) -> String, write: fn(&mut DonationFilters, String)| {
        view! {
            <label class="field">
                <span class="field__label">{label}</span>
                <input
                    class="input"
                    type=kind
                    min=(kind == "number").then_some("0")
                    prop:value=move || filters.with(read)
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        filters.update(|f| write(f, value));
                    }
                />
            </label>
        }
    };

    view! {
        <section class="admin-page">
            <header class="admin-page__header">
                <div>
                    <h1>"Donations"</h1>
                    <p class="muted">"Review incoming donations by date, campaign, status and amount."</p>
                </div>
            </header>

            <form class="panel form" on:submit=on_apply>
                <div class="form-grid form-grid--4">
                    <label class="field">
                        <span class="field__label">"Campaign"</span>
                        <select
                            class="input"
                            prop:value=move || filters.with(|f| f.campaign_id.clone())
                            on:change=move |ev| filters.update(|f| f.campaign_id = event_target_value(&ev))
                        >
                            <option value="">"All campaigns"</option>
                            {move || {
                                campaigns
                                    .get()
                                    .items()
                                    .iter()
                                    .map(|c| view! { <option value=c.id.clone()>{c.name.clone()}</option> })
                                    .collect_view()
                            }}
                        </select>
                    </label>
                    <label class="field">
                        <span class="field__label">"Status"</span>
                        <select
                            class="input"
                            prop:value=move || filters.with(|f| f.status.map(DonationStatus::as_str).unwrap_or_default())
                            on:change=move |ev| {
                                let raw = event_target_value(&ev);
                                let status = DonationStatus::ALL.into_iter().find(|s| s.as_str() == raw);
                                filters.update(|f| f.status = status);
                            }
                        >
                            <option value="">"All"</option>
                            {DonationStatus::ALL
                                .into_iter()
                                .map(|s| view! { <option value=s.as_str()>{s.label()}</option> })
                                .collect_view()}
                        </select>
                    </label>
                    {text_input("Date from", "datetime-local", |f| f.date_from.clone(), |f, v| f.date_from = v)}
                    {text_input("Date to", "datetime-local", |f| f.date_to.clone(), |f, v| f.date_to = v)}
                </div>
                <div class="form-grid form-grid--2">
                    {text_input("Min amount (UGX)", "number", |f| f.min_amount.clone(), |f, v| f.min_amount = v)}
                    {text_input("Max amount (UGX)", "number", |f| f.max_amount.clone(), |f, v| f.max_amount = v)}
                </div>
                {move || filter_error.get().map(|e| view! { <p class="error-text">{e}</p> })}
                <div class="form-actions">
                    <button class="btn btn--ghost" type="button" on:click=on_clear>"Clear"</button>
                    <button class="btn btn--primary" type="submit">"Apply filters"</button>
                </div>
            </form>

            <ListStatus remote=donations empty="No donations found for the selected filters."/>
            <AdminTable headers=DONATION_HEADERS>
                {move || {
                    let campaigns = campaigns.get();
                    donations
                        .get()
                        .items()
                        .iter()
                        .map(|d| {
                            view! {
                                <tr>
                                    <td>{format_datetime(d.created_at.as_deref())}</td>
                                    <td>{campaign_name(campaigns.items(), d.campaign_id.as_deref())}</td>
                                    <td>{format_amount(Some(d.amount), Some(d.currency.as_str()))}</td>
                                    <td>{d.payment_method.as_deref().map_or("-", payment_method_label).to_owned()}</td>
                                    <td><span class=donation_status_class(d.status)>{d.status.label()}</span></td>
                                    <td>
                                        {if d.is_anonymous {
                                            "Anonymous".to_owned()
                                        } else {
                                            d.donor_name.clone().unwrap_or_else(|| "Anonymous".to_owned())
                                        }}
                                    </td>
                                </tr>
                            }
                        })
                        .collect_view()
                }}
            </AdminTable>
        </section>
    }
}
