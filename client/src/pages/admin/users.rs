//! Team accounts and their staff/admin role.

use leptos::prelude::*;

use crate::components::admin_table::{AdminTable, ListStatus};
use crate::net::endpoints;
use crate::net::types::{User, UserRole};
use crate::state::auth::AuthState;
use crate::util::auth::{handle_auth_error, load_guarded};
use crate::util::load::{Remote, spawn};

const USER_HEADERS: &[&str] = &["Name", "Email", "Role", "Superuser", "Active", "Actions"];

#[component]
pub fn UsersAdminPage() -> impl IntoView {
    let auth_state = expect_context::<RwSignal<AuthState>>();
    let users = RwSignal::new(Remote::<Vec<User>>::Loading);
    let error = RwSignal::new(None::<String>);
    Effect::new(move || load_guarded(auth_state, users, endpoints::list_users()));

    let on_saved = Callback::new(move |updated: User| {
        users.update(|u| {
            if let Remote::Ready(items) = u
                && let Some(slot) = items.iter_mut().find(|item| item.id == updated.id)
            {
                *slot = updated;
            }
        });
    });

    view! {
        <section class="admin-page">
            <header class="admin-page__header">
                <div>
                    <p class="eyebrow">"Users"</p>
                    <h1>"Admin & Staff Management"</h1>
                    <p class="muted">
                        "View team accounts and adjust their permissions. Only admins can promote or demote users "
                        "between " <strong>"staff"</strong> " and " <strong>"admin"</strong> "."
                    </p>
                </div>
            </header>
            {move || error.get().map(|e| view! { <p class="error-text">{e}</p> })}
            <ListStatus remote=users empty="No users found."/>
            <AdminTable headers=USER_HEADERS>
                {move || {
                    users
                        .get()
                        .items()
                        .iter()
                        .cloned()
                        .map(|user| view! { <UserRow user error on_saved/> })
                        .collect_view()
                }}
            </AdminTable>
            {move || {
                let total = users.with(|u| u.items().len());
                (total > 0).then(|| view! { <p class="muted small">"Total users: " <strong>{total}</strong></p> })
            }}
        </section>
    }
}

#[component]
fn UserRow(user: User, error: RwSignal<Option<String>>, on_saved: Callback<User>) -> impl IntoView {
    let auth_state = expect_context::<RwSignal<AuthState>>();
    let role = RwSignal::new(user.role);
    let saving = RwSignal::new(false);
    let id = user.id.clone();

    let on_update = move |_| {
        let id = id.clone();
        let next = role.get_untracked();
        saving.set(true);
        error.set(None);
        spawn(async move {
            match endpoints::update_user_role(&id, next).await {
                Ok(updated) => on_saved.run(updated),
                Err(err) => {
                    handle_auth_error(auth_state, &err);
                    error.set(Some(err.to_string()));
                }
            }
            saving.set(false);
        });
    };

    view! {
        <tr>
            <td>{user.full_name.clone().filter(|n| !n.is_empty()).unwrap_or_else(|| "—".to_owned())}</td>
            <td>{user.email.clone()}</td>
            <td>
                <select
                    class="input input--compact"
                    prop:value=move || role.get().as_str()
                    on:change=move |ev| {
                        if let Some(next) = UserRole::parse(&event_target_value(&ev)) {
                            role.set(next);
                        }
                    }
                >
                    <option value="staff">"staff"</option>
                    <option value="admin">"admin"</option>
                </select>
            </td>
            <td>{if user.is_superuser { "Full power" } else { "-" }}</td>
            <td>{if user.is_active { "Active" } else { "Disabled" }}</td>
            <td>
                <button
                    class="btn btn--small"
                    disabled=move || saving.get() || role.get() == user.role
                    on:click=on_update
                >
                    {move || if saving.get() { "Saving..." } else { "Update" }}
                </button>
            </td>
        </tr>
    }
}
