//! Donation campaign buckets: status filter, inline create/edit form, delete.

use leptos::prelude::*;

use crate::components::admin_table::{AdminTable, ListStatus};
use crate::net::endpoints;
use crate::net::types::{Campaign, CampaignStatus};
use crate::state::admin::CampaignForm;
use crate::state::auth::AuthState;
use crate::util::auth::{handle_auth_error, load_guarded};
use crate::util::format::{group_thousands, humanize};
use crate::util::load::{Remote, spawn};

use super::confirm;

const CAMPAIGN_HEADERS: &[&str] = &["Name", "Slug", "Target (UGX)", "Raised (UGX)", "Status", "Actions"];

fn campaign_status_class(status: CampaignStatus) -> &'static str {
    match status {
        CampaignStatus::Active => "pill pill--green",
        CampaignStatus::Closed | CampaignStatus::Archived => "pill pill--grey",
        CampaignStatus::Draft => "pill pill--yellow",
    }
}

fn amount_cell(amount: Option<i64>) -> String {
    amount.filter(|a| *a != 0).map_or_else(|| "—".to_owned(), group_thousands)
}

#[component]
pub fn CampaignsAdminPage() -> impl IntoView {
    let auth_state = expect_context::<RwSignal<AuthState>>();
    let status_filter = RwSignal::new(None::<CampaignStatus>);
    let campaigns = RwSignal::new(Remote::<Vec<Campaign>>::Loading);
    let form = RwSignal::new(CampaignForm::default());
    let saving = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);

    let reload = move || {
        let status = status_filter.get_untracked();
        load_guarded(auth_state, campaigns, endpoints::list_campaigns(status));
    };
    Effect::new(move || {
        status_filter.track();
        reload();
    });

    let report = move |err: crate::net::api::ApiError| {
        handle_auth_error(auth_state, &err);
        error.set(Some(err.to_string()));
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if saving.get_untracked() {
            return;
        }
        let current = form.get_untracked();
        let payload = match current.to_payload() {
            Ok(payload) => payload,
            Err(msg) => {
                error.set(Some(msg.to_owned()));
                return;
            }
        };
        saving.set(true);
        error.set(None);
        spawn(async move {
            let result = match current.id.as_deref() {
                Some(id) => endpoints::update_campaign(id, &payload).await,
                None => endpoints::create_campaign(&payload).await,
            };
            saving.set(false);
            match result {
                Ok(_) => {
                    form.set(CampaignForm::default());
                    reload();
                }
                Err(err) => report(err),
            }
        });
    };

    let on_delete = move |id: String| {
        if !confirm("Delete this campaign? Donations already linked to it keep their records.") {
            return;
        }
        spawn(async move {
            match endpoints::delete_campaign(&id).await {
                Ok(()) => {
                    if form.with_untracked(|f| f.id.as_deref() == Some(id.as_str())) {
                        form.set(CampaignForm::default());
                    }
                    reload();
                }
                Err(err) => report(err),
            }
        });
    };

    view! {
        <section class="admin-page">
            <header class="admin-page__header">
                <div>
                    <h1>"Donation Campaigns"</h1>
                    <p class="muted">"Create and manage campaign buckets that donations can be linked to."</p>
                </div>
                <select
                    class="input input--compact"
                    on:change=move |ev| status_filter.set(CampaignStatus::parse(&event_target_value(&ev)))
                >
                    <option value="">"All"</option>
                    {CampaignStatus::ALL
                        .into_iter()
                        .map(|s| view! { <option value=s.as_str()>{humanize(s.as_str())}</option> })
                        .collect_view()}
                </select>
            </header>

            {move || error.get().map(|e| view! { <p class="error-text">{e}</p> })}

            <form class="panel form" on:submit=on_submit>
                <div class="form-grid form-grid--3">
                    <label class="field">
                        <span class="field__label">"Name"</span>
                        <input
                            class="input"
                            required=true
                            placeholder="Biogas for Schools"
                            prop:value=move || form.with(|f| f.name.clone())
                            on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
                        />
                    </label>
                    <label class="field">
                        <span class="field__label">"Slug"</span>
                        <input
                            class="input"
                            required=true
                            placeholder="biogas-for-schools"
                            prop:value=move || form.with(|f| f.slug.clone())
                            on:input=move |ev| form.update(|f| f.slug = event_target_value(&ev))
                        />
                    </label>
                    <label class="field">
                        <span class="field__label">"Target amount (UGX)"</span>
                        <input
                            class="input"
                            type="number"
                            min="0"
                            placeholder="100000000"
                            prop:value=move || form.with(|f| f.target_amount.clone())
                            on:input=move |ev| form.update(|f| f.target_amount = event_target_value(&ev))
                        />
                    </label>
                </div>
                <div class="form-actions">
                    <label class="field">
                        <span class="field__label">"Status"</span>
                        <select
                            class="input"
                            prop:value=move || form.with(|f| f.status.as_str())
                            on:change=move |ev| {
                                if let Some(status) = CampaignStatus::parse(&event_target_value(&ev)) {
                                    form.update(|f| f.status = status);
                                }
                            }
                        >
                            {CampaignStatus::ALL
                                .into_iter()
                                .map(|s| view! { <option value=s.as_str()>{humanize(s.as_str())}</option> })
                                .collect_view()}
                        </select>
                    </label>
                    <Show when=move || form.with(CampaignForm::is_edit)>
                        <button class="btn btn--ghost" type="button" on:click=move |_| form.set(CampaignForm::default())>
                            "Cancel"
                        </button>
                    </Show>
                    <button class="btn btn--primary" type="submit" disabled=move || saving.get()>
                        {move || {
                            if saving.get() {
                                "Saving..."
                            } else if form.with(CampaignForm::is_edit) {
                                "Update campaign"
                            } else {
                                "Create campaign"
                            }
                        }}
                    </button>
                </div>
            </form>

            <ListStatus remote=campaigns empty="No campaigns yet. Use the form above to create one."/>
            <AdminTable headers=CAMPAIGN_HEADERS>
                {move || {
                    campaigns
                        .get()
                        .items()
                        .iter()
                        .map(|c| {
                            let editing = c.clone();
                            let id = c.id.clone();
                            view! {
                                <tr>
                                    <td>{c.name.clone()}</td>
                                    <td class="muted">{c.slug.clone()}</td>
                                    <td>{amount_cell(c.target_amount)}</td>
                                    <td>{amount_cell(Some(c.raised_amount))}</td>
                                    <td><span class=campaign_status_class(c.status)>{humanize(c.status.as_str())}</span></td>
                                    <td class="table-actions">
                                        <button class="btn btn--link" on:click=move |_| form.set(CampaignForm::edit(&editing))>
                                            "Edit"
                                        </button>
                                        <button class="btn btn--link btn--danger" on:click=move |_| on_delete(id.clone())>
                                            "Delete"
                                        </button>
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
