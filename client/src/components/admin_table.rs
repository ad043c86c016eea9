//! Table shell shared by admin list pages.

use leptos::prelude::*;

use crate::util::load::Remote;

/// Header row plus caller-rendered body rows.
#[component]
pub fn AdminTable(headers: &'static [&'static str], children: Children) -> impl IntoView {
    view! {
        <div class="admin-table">
            <table>
                <thead>
                    <tr>{headers.iter().map(|h| view! { <th>{*h}</th> }).collect_view()}</tr>
                </thead>
                <tbody>{children()}</tbody>
            </table>
        </div>
    }
}

/// Loading / error / empty line for a list fetch. Renders nothing once rows exist.
#[component]
pub fn ListStatus<T>(
    #[prop(into)] remote: Signal<Remote<Vec<T>>>,
    #[prop(into)] empty: String,
) -> impl IntoView
where
    T: Clone + Send + Sync + 'static,
{
    move || {
        remote.with(|r| match r {
            Remote::Loading => Some(view! { <p class="muted">"Loading..."</p> }.into_any()),
            Remote::Failed(message) => Some(view! { <p class="error-text">{message.clone()}</p> }.into_any()),
            Remote::Ready(items) if items.is_empty() => {
                Some(view! { <p class="muted">{empty.clone()}</p> }.into_any())
            }
            Remote::Ready(_) => None,
        })
    }
}
