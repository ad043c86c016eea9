//! Newsletter subscriber list.

use leptos::prelude::*;

use crate::components::admin_table::{AdminTable, ListStatus};
use crate::net::endpoints;
use crate::net::types::Subscriber;
use crate::state::auth::AuthState;
use crate::util::auth::load_guarded;
use crate::util::format::format_datetime;
use crate::util::load::Remote;

const SUBSCRIBER_HEADERS: &[&str] = &["Email", "Subscribed At", "Subscriber ID"];

#[component]
pub fn SubscribersAdminPage() -> impl IntoView {
    let auth_state = expect_context::<RwSignal<AuthState>>();
    let subscribers = RwSignal::new(Remote::<Vec<Subscriber>>::Loading);
    Effect::new(move || load_guarded(auth_state, subscribers, endpoints::list_subscribers()));

    view! {
        <section class="admin-page">
            <header class="admin-page__header">
                <div>
                    <p class="eyebrow">"Newsletter"</p>
                    <h1>"Subscribers List"</h1>
                    <p class="muted">
                        "View people who have opted in to receive updates from Brisk Farm Solutions."
                    </p>
                </div>
            </header>
            <ListStatus remote=subscribers empty="No subscribers found yet."/>
            <AdminTable headers=SUBSCRIBER_HEADERS>
                {move || {
                    subscribers
                        .get()
                        .items()
                        .iter()
                        .map(|s| {
                            view! {
                                <tr>
                                    <td>{s.email.clone()}</td>
                                    <td class="muted">{format_datetime(s.created_at.as_deref())}</td>
                                    <td class="muted small">{s.id.clone()}</td>
                                </tr>
                            }
                        })
                        .collect_view()
                }}
            </AdminTable>
            {move || {
                let total = subscribers.with(|s| s.items().len());
                (total > 0).then(|| view! { <p class="muted small">"Total subscribers: " <strong>{total}</strong></p> })
            }}
        </section>
    }
}
