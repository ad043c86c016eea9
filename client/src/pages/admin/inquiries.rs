//! Mini-CRM for quote and contact requests.
//!
//! SYSTEM CONTEXT
//! ==============
//! Any filter change refetches `/inquiries`. Status and note edits are sent as
//! partial `PUT` bodies and followed by a reload so the table always mirrors
//! the backend.

use leptos::prelude::*;

use crate::components::inquiries_table::InquiriesTable;
use crate::net::endpoints;
use crate::net::types::{Inquiry, InquiryStatus, InquiryUpdate};
use crate::state::admin::{InquiryFilters, InquirySource};
use crate::state::auth::AuthState;
use crate::util::auth::{handle_auth_error, load_guarded};
use crate::util::load::{Remote, spawn};

#[component]
pub fn InquiriesAdminPage() -> impl IntoView {
    let auth_state = expect_context::<RwSignal<AuthState>>();
    let filters = RwSignal::new(InquiryFilters::default());
    let inquiries = RwSignal::new(Remote::<Vec<Inquiry>>::Loading);
    let action_error = RwSignal::new(None::<String>);

    let reload = move || {
        let current = filters.get_untracked();
        load_guarded(auth_state, inquiries, async move { endpoints::list_inquiries(&current).await });
    };
    Effect::new(move || {
        filters.track();
        reload();
    });

    let apply = move |id: String, update: InquiryUpdate| {
        action_error.set(None);
        spawn(async move {
            match endpoints::update_inquiry(&id, &update).await {
                Ok(_) => reload(),
                Err(err) => {
                    handle_auth_error(auth_state, &err);
                    action_error.set(Some(err.to_string()));
                }
            }
        });
    };
    let on_status = Callback::new(move |(id, status): (String, InquiryStatus)| {
        apply(id, InquiryUpdate { status: Some(status), internal_notes: None });
    });
    let on_notes = Callback::new(move |(id, notes): (String, String)| {
        apply(id, InquiryUpdate { status: None, internal_notes: Some(notes) });
    });

    view! {
        <section class="admin-page">
            <header class="admin-page__header">
                <div>
                    <p class="eyebrow">"Inquiries"</p>
                    <h1>"Client Inquiries & Quotes"</h1>
                    <p class="muted">
                        "View all requests from the website. Update statuses (NEW → IN_REVIEW → QUOTED → CLOSED) "
                        "and keep internal notes for your team."
                    </p>
                </div>
            </header>

            <div class="filter-bar">
                <select
                    class="input"
                    on:change=move |ev| {
                        let status = InquiryStatus::parse(&event_target_value(&ev));
                        filters.update(|f| f.status = status);
                    }
                >
                    <option value="all">"All statuses"</option>
                    {InquiryStatus::ALL
                        .into_iter()
                        .map(|s| view! { <option value=s.as_str()>{s.label()}</option> })
                        .collect_view()}
                </select>
                <select
                    class="input"
                    on:change=move |ev| {
                        let source = InquirySource::parse(&event_target_value(&ev));
                        filters.update(|f| f.source = source);
                    }
                >
                    <option value="all">"All sources"</option>
                    <option value="quote">"Quote page"</option>
                    <option value="contact">"Contact page"</option>
                </select>
                <input
                    class="input filter-bar__search"
                    type="text"
                    placeholder="Search name, email, or message..."
                    prop:value=move || filters.with(|f| f.search.clone())
                    on:input=move |ev| filters.update(|f| f.search = event_target_value(&ev))
                />
            </div>

            {move || action_error.get().map(|e| view! { <p class="error-text">{e}</p> })}
            {move || inquiries.with(|i| match i {
                Remote::Loading => view! { <p class="muted">"Loading inquiries..."</p> }.into_any(),
                Remote::Failed(e) => view! { <p class="error-text">{e.clone()}</p> }.into_any(),
                Remote::Ready(items) => {
                    view! { <InquiriesTable inquiries=items.clone() on_status on_notes/> }.into_any()
                }
            })}
        </section>
    }
}
