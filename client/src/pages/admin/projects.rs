//! Admin project list and the create/edit form.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::components::admin_table::{AdminTable, ListStatus};
use crate::net::endpoints::{self, ADMIN_LIST_LIMIT};
use crate::net::types::{Project, ProjectStatus};
use crate::state::admin::ProjectForm;
use crate::state::auth::AuthState;
use crate::util::auth::{handle_auth_error, load_guarded};
use crate::util::load::{Remote, spawn};

use super::confirm;

const PROJECT_HEADERS: &[&str] = &["Name", "Service", "Status", "Featured", ""];

#[component]
pub fn ProjectsAdminPage() -> impl IntoView {
    let auth_state = expect_context::<RwSignal<AuthState>>();
    let projects = RwSignal::new(Remote::<Vec<Project>>::Loading);
    Effect::new(move || load_guarded(auth_state, projects, endpoints::list_projects(ADMIN_LIST_LIMIT, 1)));

    view! {
        <section class="admin-page">
            <header class="admin-page__header">
                <div>
                    <p class="eyebrow">"Projects"</p>
                    <h1>"Manage Brisk Portfolio"</h1>
                    <p class="muted">
                        "Add and update key projects that showcase Brisk Farm Solutions & Construction Company's work across Uganda."
                    </p>
                </div>
                <a href="/admin/projects/new" class="btn btn--primary">"Add Project"</a>
            </header>
            <ListStatus remote=projects empty="No projects found. Use “Add Project” to publish your first Brisk case study."/>
            <AdminTable headers=PROJECT_HEADERS>
                {move || {
                    projects
                        .get()
                        .items()
                        .iter()
                        .map(|p| {
                            view! {
                                <tr>
                                    <td>{p.name.clone()}</td>
                                    <td>{p.service.as_ref().map_or_else(|| "-".to_owned(), |s| s.name.clone())}</td>
                                    <td>{p.status.label()}</td>
                                    <td>{if p.is_featured { "Yes" } else { "No" }}</td>
                                    <td><a href=format!("/admin/projects/{}", p.slug)>"Edit"</a></td>
                                </tr>
                            }
                        })
                        .collect_view()
                }}
            </AdminTable>
        </section>
    }
}

/// `/admin/projects/new` creates; `/admin/projects/:slug` loads and updates.
#[component]
pub fn ProjectEditPage() -> impl IntoView {
    let auth_state = expect_context::<RwSignal<AuthState>>();
    let params = use_params_map();
    let navigate = use_navigate();
    let form = RwSignal::new(ProjectForm::default());
    let loaded = RwSignal::new(Remote::<Project>::Loading);
    let saving = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);

    let slug = move || params.read().get("slug").filter(|s| s != "new");

    Effect::new(move || match slug() {
        Some(slug) => load_guarded(auth_state, loaded, async move { endpoints::get_project(&slug).await }),
        None => {
            form.set(ProjectForm::default());
            loaded.set(Remote::Ready(Project::default()));
        }
    });
    Effect::new(move || {
        if let Remote::Ready(project) = loaded.get()
            && !project.id.is_empty()
        {
            form.set(ProjectForm::edit(&project));
        }
    });

    let to_list = move || navigate("/admin/projects", NavigateOptions::default());

    let on_save = {
        let to_list = to_list.clone();
        move |ev: leptos::ev::SubmitEvent| {
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
            let to_list = to_list.clone();
            spawn(async move {
                let result = match current.id.as_deref() {
                    Some(id) => endpoints::update_project(id, &payload).await,
                    None => endpoints::create_project(&payload).await,
                };
                saving.set(false);
                match result {
                    Ok(_) => to_list(),
                    Err(err) => {
                        handle_auth_error(auth_state, &err);
                        error.set(Some(err.to_string()));
                    }
                }
            });
        }
    };

    let on_delete = move |_| {
        let Some(id) = form.with_untracked(|f| f.id.clone()) else {
            return;
        };
        if !confirm("Delete this project? This cannot be undone.") {
            return;
        }
        saving.set(true);
        let to_list = to_list.clone();
        spawn(async move {
            let result = endpoints::delete_project(&id).await;
            saving.set(false);
            match result {
                Ok(()) => to_list(),
                Err(err) => {
                    handle_auth_error(auth_state, &err);
                    error.set(Some(err.to_string()));
                }
            }
        });
    };

    let text = move |read: fn(&ProjectForm) -> String| move || form.with(read);
    let edit = move |write: fn(&mut ProjectForm, String)| {
        move |ev: leptos::ev::Event| {
            let value = event_target_value(&ev);
            form.update(|f| write(f, value));
        }
    };

    view! {
        <section class="admin-page">
            {move || loaded.with(|l| match l {
                Remote::Loading => Some(view! { <p class="muted">"Loading project..."</p> }.into_any()),
                Remote::Failed(e) => Some(view! { <p class="error-text">{e.clone()}</p> }.into_any()),
                Remote::Ready(_) => None,
            })}
            <form class="panel form" hidden=move || loaded.with(|l| l.ready().is_none()) on:submit=on_save>
                <header>
                    <p class="eyebrow">{move || if form.with(ProjectForm::is_edit) { "Edit Project" } else { "New Project" }}</p>
                    <h1>{move || form.with(|f| if f.name.is_empty() { "Untitled project".to_owned() } else { f.name.clone() })}</h1>
                    <p class="muted">"Update portfolio details, project status, and featured flags for this project."</p>
                </header>
                <div class="form-grid">
                    <label class="field">
                        <span class="field__label">"Name"</span>
                        <input class="input" required=true prop:value=text(|f| f.name.clone()) on:input=edit(|f, v| f.name = v)/>
                    </label>
                    <label class="field">
                        <span class="field__label">"Slug"</span>
                        <input
                            class="input"
                            placeholder="generated from name when blank"
                            prop:value=text(|f| f.slug.clone())
                            on:input=edit(|f, v| f.slug = v)
                        />
                    </label>
                    <label class="field">
                        <span class="field__label">"Location"</span>
                        <input class="input" prop:value=text(|f| f.location.clone()) on:input=edit(|f, v| f.location = v)/>
                    </label>
                    <label class="field">
                        <span class="field__label">"Client Name"</span>
                        <input class="input" prop:value=text(|f| f.client_name.clone()) on:input=edit(|f, v| f.client_name = v)/>
                    </label>
                    <label class="field">
                        <span class="field__label">"Budget"</span>
                        <input
                            class="input"
                            placeholder="e.g. 50M UGX"
                            prop:value=text(|f| f.budget.clone())
                            on:input=edit(|f, v| f.budget = v)
                        />
                    </label>
                    <label class="field">
                        <span class="field__label">"Status"</span>
                        <select
                            class="input"
                            prop:value=move || form.with(|f| f.status.as_str())
                            on:change=move |ev| {
                                if let Some(status) = ProjectStatus::parse(&event_target_value(&ev)) {
                                    form.update(|f| f.status = status);
                                }
                            }
                        >
                            {ProjectStatus::ALL
                                .into_iter()
                                .map(|s| view! { <option value=s.as_str()>{s.label()}</option> })
                                .collect_view()}
                        </select>
                    </label>
                    <label class="field">
                        <span class="field__label">"Hero Image URL (optional)"</span>
                        <input
                            class="input"
                            placeholder="https://..."
                            prop:value=text(|f| f.hero_image_url.clone())
                            on:input=edit(|f, v| f.hero_image_url = v)
                        />
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
                        <span>"Featured case study"</span>
                    </label>
                </div>
                <label class="field">
                    <span class="field__label">"Short Description"</span>
                    <input
                        class="input"
                        placeholder="One-line summary for cards."
                        prop:value=text(|f| f.short_description.clone())
                        on:input=edit(|f, v| f.short_description = v)
                    />
                </label>
                <label class="field">
                    <span class="field__label">"Full Description"</span>
                    <textarea
                        class="input"
                        rows="6"
                        prop:value=text(|f| f.description.clone())
                        on:input=edit(|f, v| f.description = v)
                    ></textarea>
                </label>
                {move || error.get().map(|e| view! { <p class="error-text">{e}</p> })}
                <div class="form-actions">
                    <a href="/admin/projects" class="btn btn--ghost">"Cancel"</a>
                    <button
                        class="btn btn--danger"
                        type="button"
                        hidden=move || !form.with(ProjectForm::is_edit)
                        disabled=move || saving.get()
                        on:click=on_delete
                    >
                        "Delete"
                    </button>
                    <button class="btn btn--primary" type="submit" disabled=move || saving.get()>
                        {move || if saving.get() { "Saving..." } else { "Save Project" }}
                    </button>
                </div>
            </form>
        </section>
    }
}
