//! Admin header showing the signed-in email and a logout button.

use leptos::prelude::*;

use crate::state::auth::{self, AuthState};

#[component]
pub fn Topbar() -> impl IntoView {
    let auth_state = expect_context::<RwSignal<AuthState>>();

    let on_logout = move |_| {
        auth::logout();
        auth_state.set(AuthState::default());
    };

    view! {
        <header class="topbar">
            <div>
                <h2 class="topbar__title">"Brisk Admin Dashboard"</h2>
                <p class="topbar__subtitle">"Monitor inquiries, projects, and services in one place."</p>
            </div>
            <div class="topbar__actions">
                {move || auth_state.get().admin_email.map(|email| view! { <span class="topbar__email">{email}</span> })}
                <button class="btn btn--ghost" on:click=on_logout>"Logout"</button>
            </div>
        </header>
    }
}
