//! Admin service catalogue: quick-create form plus card list.

use leptos::prelude::*;

use crate::net::endpoints;
use crate::net::types::Service;
use crate::state::admin::ServiceForm;
use crate::state::auth::AuthState;
use crate::util::auth::{handle_auth_error, load_guarded};
use crate::util::load::{Remote, spawn};

use super::confirm;

const CREATED: &str = "Service created successfully.";

#[component]
pub fn ServicesAdminPage() -> impl IntoView {
    let auth_state = expect_context::<RwSignal<AuthState>>();
    let services = RwSignal::new(Remote::<Vec<Service>>::Loading);
    let form = RwSignal::new(ServiceForm::default());
    let creating = RwSignal::new(false);
    let message = RwSignal::new(None::<String>);

    let reload = move || load_guarded(auth_state, services, endpoints::list_services());
    Effect::new(move || reload());

    let on_create = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if creating.get_untracked() {
            return;
        }
        let payload = match form.with_untracked(ServiceForm::to_payload) {
            Ok(payload) => payload,
            Err(msg) => {
                message.set(Some(msg.to_owned()));
                return;
            }
        };
        creating.set(true);
        message.set(None);
        spawn(async move {
            match endpoints::create_service(&payload).await {
                Ok(_) => {
                    form.set(ServiceForm::default());
                    message.set(Some(CREATED.to_owned()));
                    reload();
                }
                Err(err) => {
                    handle_auth_error(auth_state, &err);
                    message.set(Some(err.to_string()));
                }
            }
            creating.set(false);
        });
    };

    let on_delete = move |id: String| {
        if !confirm("Delete this service?") {
            return;
        }
        spawn(async move {
            match endpoints::delete_service(&id).await {
                Ok(()) => reload(),
                Err(err) => {
                    handle_auth_error(auth_state, &err);
                    message.set(Some(err.to_string()));
                }
            }
        });
    };

    view! {
        <section class="admin-page">
            <header class="admin-page__header">
                <div>
                    <p class="eyebrow">"Services"</p>
                    <h1>"Manage Service Offerings"</h1>
                    <p class="muted">
                        "Create, view, and manage service categories such as biogas solutions, livestock enhancement, "
                        "crop production, general construction, and more."
                    </p>
                </div>
            </header>

            <form class="panel form" on:submit=on_create>
                <div class="form-grid form-grid--3">
                    <label class="field">
                        <span class="field__label">"Name"</span>
                        <input
                            class="input"
                            required=true
                            prop:value=move || form.with(|f| f.name.clone())
                            on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
                        />
                    </label>
                    <label class="field">
                        <span class="field__label">"Slug"</span>
                        <input
                            class="input"
                            required=true
                            prop:value=move || form.with(|f| f.slug.clone())
                            on:input=move |ev| form.update(|f| f.slug = event_target_value(&ev))
                        />
                    </label>
                    <label class="field">
                        <span class="field__label">"Short description"</span>
                        <input
                            class="input"
                            prop:value=move || form.with(|f| f.short_description.clone())
                            on:input=move |ev| form.update(|f| f.short_description = event_target_value(&ev))
                        />
                    </label>
                </div>
                <button class="btn btn--primary" type="submit" disabled=move || creating.get()>
                    {move || if creating.get() { "Saving..." } else { "Add Service" }}
                </button>
                {move || message.get().map(|m| view! { <p class="muted">{m}</p> })}
            </form>

            {move || services.with(|s| match s {
                Remote::Loading => view! { <p class="muted">"Loading services..."</p> }.into_any(),
                Remote::Failed(e) => view! { <p class="error-text">{e.clone()}</p> }.into_any(),
                Remote::Ready(items) if items.is_empty() => {
                    view! {
                        <p class="muted">
                            "No services found. Create at least one to populate the public Services page."
                        </p>
                    }
                    .into_any()
                }
                Remote::Ready(items) => {
                    view! {
                        <div class="card-grid card-grid--2">
                            {items
                                .iter()
                                .map(|service| {
                                    let id = service.id.clone();
                                    view! {
                                        <article class="panel admin-card">
                                            <h2>{service.name.clone()}</h2>
                                            <p class="eyebrow">{service.slug.clone()}</p>
                                            {service.short_description.clone().map(|d| view! { <p class="muted">{d}</p> })}
                                            <button class="btn btn--link btn--danger" on:click=move |_| on_delete(id.clone())>
                                                "Delete"
                                            </button>
                                        </article>
                                    }
                                })
                                .collect_view()}
                        </div>
                    }
                    .into_any()
                }
            })}
        </section>
    }
}
