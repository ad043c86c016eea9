//! Inquiry list with status pill, status selector and internal notes.
//!
//! DESIGN
//! ======
//! The table owns only per-row draft notes. Status changes and note saves are
//! reported upward through callbacks; the page performs the PUT and reloads.

#[cfg(test)]
#[path = "inquiries_table_test.rs"]
mod inquiries_table_test;

use leptos::prelude::*;

use crate::net::types::{Inquiry, InquiryStatus};
use crate::util::format::{format_datetime, humanize};

pub fn status_pill_class(status: InquiryStatus) -> &'static str {
    match status {
        InquiryStatus::New => "pill pill--earth",
        InquiryStatus::InReview => "pill pill--yellow",
        InquiryStatus::Quoted => "pill pill--blue",
        InquiryStatus::Closed => "pill pill--green",
    }
}

#[component]
pub fn StatusPill(status: InquiryStatus) -> impl IntoView {
    view! { <span class=status_pill_class(status)>{status.label()}</span> }
}

#[component]
pub fn InquiriesTable(
    inquiries: Vec<Inquiry>,
    on_status: Callback<(String, InquiryStatus)>,
    on_notes: Callback<(String, String)>,
) -> impl IntoView {
    if inquiries.is_empty() {
        return view! {
            <div class="empty-state">
                "No inquiries match these filters. Once clients submit contact or quote forms, they will appear here."
            </div>
        }
        .into_any();
    }

    view! {
        <div class="admin-table">
            <table>
                <thead>
                    <tr>
                        <th>"Name"</th>
                        <th>"Contact"</th>
                        <th>"Source"</th>
                        <th>"Details"</th>
                        <th>"Status"</th>
                        <th>"Received"</th>
                        <th>"Notes"</th>
                    </tr>
                </thead>
                <tbody>
                    {inquiries.into_iter().map(|inquiry| view! { <InquiryRow inquiry on_status on_notes/> }).collect_view()}
                </tbody>
            </table>
        </div>
    }
    .into_any()
}

#[component]
fn InquiryRow(
    inquiry: Inquiry,
    on_status: Callback<(String, InquiryStatus)>,
    on_notes: Callback<(String, String)>,
) -> impl IntoView {
    let notes = RwSignal::new(inquiry.internal_notes.clone().unwrap_or_default());
    let id_for_status = inquiry.id.clone();
    let id_for_notes = inquiry.id.clone();
    let current = inquiry.status;
    let contact = [inquiry.email.clone(), inquiry.phone.clone()].into_iter().flatten().collect::<Vec<_>>().join(" · ");
    let details = [inquiry.project_type.clone(), inquiry.budget_range.clone(), inquiry.location.clone()]
        .into_iter()
        .flatten()
        .collect::<Vec<_>>()
        .join(" · ");

    view! {
        <tr>
            <td>{if inquiry.full_name.is_empty() { "-".to_owned() } else { inquiry.full_name.clone() }}</td>
            <td>{if contact.is_empty() { "-".to_owned() } else { contact }}</td>
            <td>{humanize(inquiry.source.as_deref().unwrap_or("-"))}</td>
            <td>
                <div>{details}</div>
                {inquiry.message.clone().map(|m| view! { <div class="muted">{m}</div> })}
            </td>
            <td>
                <StatusPill status=current/>
                <select
                    class="input input--compact"
                    on:change=move |ev| {
                        if let Some(next) = InquiryStatus::parse(&event_target_value(&ev))
                            && next != current
                        {
                            on_status.run((id_for_status.clone(), next));
                        }
                    }
                >
                    {InquiryStatus::ALL
                        .into_iter()
                        .map(|s| view! { <option value=s.as_str() selected=s == current>{s.label()}</option> })
                        .collect_view()}
                </select>
            </td>
            <td>{format_datetime(inquiry.created_at.as_deref())}</td>
            <td>
                <textarea
                    class="input input--compact"
                    rows="2"
                    prop:value=move || notes.get()
                    on:input=move |ev| notes.set(event_target_value(&ev))
                ></textarea>
                <button
                    class="btn btn--small"
                    on:click=move |_| on_notes.run((id_for_notes.clone(), notes.get_untracked()))
                >
                    "Save notes"
                </button>
            </td>
        </tr>
    }
}
