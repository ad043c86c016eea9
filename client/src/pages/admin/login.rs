//! Admin login: email + password exchanged for a bearer token.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::seo::Seo;
use crate::state::auth::{self, AuthState, DASHBOARD_ROUTE, validate_login_input};
use crate::util::load::spawn;

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth_state = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);

    // Already signed in: skip the form.
    Effect::new(move || {
        if auth_state.with(AuthState::is_logged_in) {
            navigate(DASHBOARD_ROUTE, NavigateOptions::default());
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let email_value = email.get_untracked();
        let password_value = password.get_untracked();
        if let Err(msg) = validate_login_input(&email_value, &password_value) {
            error.set(Some(msg.to_owned()));
            return;
        }
        busy.set(true);
        error.set(None);
        spawn(async move {
            match auth::login(&email_value, &password_value).await {
                Ok(state) => auth_state.set(state),
                Err(err) => {
                    let message = err.to_string();
                    error.set(Some(if message.is_empty() { "Login failed".to_owned() } else { message }));
                }
            }
            busy.set(false);
        });
    };

    view! {
        <Seo title="Admin Login" description="Brisk Farm Solutions staff sign in."/>
        <div class="login-page">
            <form class="login-card" on:submit=on_submit>
                <h1>"Brisk Admin Login"</h1>
                <p class="muted">"Secure access to manage projects, services and inquiries."</p>
                {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}
                <label class="field">
                    <span class="field__label">"Email"</span>
                    <input
                        class="input"
                        type="email"
                        placeholder="admin@briskfarmsolutions.com"
                        autocomplete="email"
                        required=true
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                </label>
                <label class="field">
                    <span class="field__label">"Password"</span>
                    <input
                        class="input"
                        type="password"
                        placeholder="••••••••"
                        autocomplete="current-password"
                        required=true
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                </label>
                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Logging in..." } else { "Login" }}
                </button>
                <p class="muted small">"Brisk Farm Solutions & Construction Company, internal use only."</p>
            </form>
        </div>
    }
}
