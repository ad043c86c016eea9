//! Client feedback CMS: create testimonials, flip featured/active, delete.

use leptos::prelude::*;

use crate::net::endpoints;
use crate::net::types::{Testimonial, TestimonialUpdate};
use crate::state::admin::TestimonialForm;
use crate::state::auth::AuthState;
use crate::util::auth::{handle_auth_error, load_guarded};
use crate::util::load::{Remote, spawn};

use super::confirm;

const CREATED: &str = "Testimonial created successfully.";

/// Pill-style on/off switch.
#[component]
fn StatusToggle(label: &'static str, checked: bool, on_toggle: Callback<bool>) -> impl IntoView {
    view! {
        <label class="toggle">
            <span>{label}</span>
            <button
                type="button"
                class=if checked { "toggle__switch toggle__switch--on" } else { "toggle__switch" }
                aria-pressed=checked.to_string()
                on:click=move |_| on_toggle.run(!checked)
            >
                <span class="toggle__knob"></span>
            </button>
        </label>
    }
}

#[component]
pub fn TestimonialsAdminPage() -> impl IntoView {
    let auth_state = expect_context::<RwSignal<AuthState>>();
    let testimonials = RwSignal::new(Remote::<Vec<Testimonial>>::Loading);
    let form = RwSignal::new(TestimonialForm::default());
    let creating = RwSignal::new(false);
    let message = RwSignal::new(None::<String>);

    let reload = move || load_guarded(auth_state, testimonials, endpoints::list_testimonials(false));
    Effect::new(move || reload());

    let report = move |err: crate::net::api::ApiError| {
        handle_auth_error(auth_state, &err);
        message.set(Some(err.to_string()));
    };

    let on_create = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if creating.get_untracked() {
            return;
        }
        let payload = match form.with_untracked(TestimonialForm::to_payload) {
            Ok(payload) => payload,
            Err(msg) => {
                message.set(Some(msg.to_owned()));
                return;
            }
        };
        creating.set(true);
        message.set(None);
        spawn(async move {
            match endpoints::create_testimonial(&payload).await {
                Ok(_) => {
                    form.set(TestimonialForm::default());
                    message.set(Some(CREATED.to_owned()));
                    reload();
                }
                Err(err) => report(err),
            }
            creating.set(false);
        });
    };

    let apply = move |id: String, update: TestimonialUpdate| {
        spawn(async move {
            match endpoints::update_testimonial(&id, &update).await {
                Ok(_) => reload(),
                Err(err) => report(err),
            }
        });
    };

    let on_delete = move |id: String| {
        if !confirm("Delete this testimonial? This cannot be undone.") {
            return;
        }
        spawn(async move {
            match endpoints::delete_testimonial(&id).await {
                Ok(()) => reload(),
                Err(err) => report(err),
            }
        });
    };

    view! {
        <section class="admin-page">
            <header class="admin-page__header">
                <div>
                    <p class="eyebrow">"Testimonials"</p>
                    <h1>"Client Feedback CMS"</h1>
                    <p class="muted">
                        "Add and manage testimonials from farmers and construction clients. Featured & active "
                        "testimonials power the public \"What Our Clients Say\" section."
                    </p>
                </div>
            </header>

            <form class="panel form" on:submit=on_create>
                <div class="form-grid form-grid--3">
                    <label class="field">
                        <span class="field__label">"Client name"</span>
                        <input
                            class="input"
                            required=true
                            prop:value=move || form.with(|f| f.name.clone())
                            on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
                        />
                    </label>
                    <label class="field">
                        <span class="field__label">"Role / title"</span>
                        <input
                            class="input"
                            prop:value=move || form.with(|f| f.role.clone())
                            on:input=move |ev| form.update(|f| f.role = event_target_value(&ev))
                        />
                    </label>
                    <label class="field">
                        <span class="field__label">"Company / farm"</span>
                        <input
                            class="input"
                            prop:value=move || form.with(|f| f.company.clone())
                            on:input=move |ev| form.update(|f| f.company = event_target_value(&ev))
                        />
                    </label>
                </div>
                <label class="field">
                    <span class="field__label">"Message"</span>
                    <textarea
                        class="input"
                        rows="3"
                        required=true
                        placeholder="What did we do for this client? What outcome did they get?"
                        prop:value=move || form.with(|f| f.quote.clone())
                        on:input=move |ev| form.update(|f| f.quote = event_target_value(&ev))
                    ></textarea>
                </label>
                <label class="checkbox">
                    <input
                        type="checkbox"
                        prop:checked=move || form.with(|f| f.is_featured)
                        on:change=move |ev| {
                            let checked = event_target_checked(&ev);
                            form.update(|f| f.is_featured = checked);
                        }
                    />
                    <span>"Featured on the homepage"</span>
                </label>
                <button class="btn btn--primary" type="submit" disabled=move || creating.get()>
                    {move || if creating.get() { "Saving..." } else { "Add Testimonial" }}
                </button>
                {move || message.get().map(|m| view! { <p class="muted">{m}</p> })}
            </form>

            {move || testimonials.with(|t| match t {
                Remote::Loading => view! { <p class="muted">"Loading testimonials..."</p> }.into_any(),
                Remote::Failed(e) => view! { <p class="error-text">{e.clone()}</p> }.into_any(),
                Remote::Ready(items) if items.is_empty() => {
                    view! {
                        <p class="muted">
                            "No testimonials yet. Add at least one to showcase social proof on the homepage."
                        </p>
                    }
                    .into_any()
                }
                Remote::Ready(items) => {
                    view! {
                        <div class="card-grid card-grid--2">
                            {items
                                .iter()
                                .map(|t| {
                                    let (active_id, featured_id, delete_id) = (t.id.clone(), t.id.clone(), t.id.clone());
                                    let byline = t.byline();
                                    view! {
                                        <article class="panel admin-card">
                                            <h2>{t.name.clone()}</h2>
                                            {(!byline.is_empty()).then(|| view! { <p class="muted small">{byline}</p> })}
                                            <p>{t.quote.clone()}</p>
                                            <div class="admin-card__actions">
                                                <StatusToggle
                                                    label="Active"
                                                    checked=t.is_active
                                                    on_toggle=Callback::new(move |value| {
                                                        apply(
                                                            active_id.clone(),
                                                            TestimonialUpdate { is_active: Some(value), is_featured: None },
                                                        )
                                                    })
                                                />
                                                <StatusToggle
                                                    label="Featured"
                                                    checked=t.is_featured
                                                    on_toggle=Callback::new(move |value| {
                                                        apply(
                                                            featured_id.clone(),
                                                            TestimonialUpdate { is_featured: Some(value), is_active: None },
                                                        )
                                                    })
                                                />
                                                <button
                                                    class="btn btn--link btn--danger"
                                                    on:click=move |_| on_delete(delete_id.clone())
                                                >
                                                    "Delete"
                                                </button>
                                            </div>
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
