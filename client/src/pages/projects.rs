//! Public project portfolio and project detail routes.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::donate_button::DonateButton;
use crate::components::project_card::ProjectCard;
use crate::components::seo::Seo;
use crate::net::endpoints::{self, PUBLIC_PROJECTS_LIMIT};
use crate::net::types::Project;
use crate::util::format::{format_date, optional_text};
use crate::util::load::{Remote, load_into};

#[component]
pub fn ProjectsPage() -> impl IntoView {
    let projects = RwSignal::new(Remote::<Vec<Project>>::Loading);
    Effect::new(move || load_into(projects, endpoints::list_projects(PUBLIC_PROJECTS_LIMIT, 1)));

    view! {
        <Seo
            title="Projects"
            description="Biogas installations, livestock units and construction projects delivered by Brisk Farm Solutions across Uganda."
        />
        <section class="section">
            <p class="eyebrow">"Projects"</p>
            <h1 class="page-title">"Selected work"</h1>
            {move || {
                projects.with(|p| match p {
                    Remote::Loading => view! { <p class="muted">"Loading projects..."</p> }.into_any(),
                    Remote::Failed(e) => view! { <p class="error-text">{e.clone()}</p> }.into_any(),
                    Remote::Ready(items) if items.is_empty() => {
                        view! { <p class="muted">"No projects published yet."</p> }.into_any()
                    }
                    Remote::Ready(items) => view! {
                        <div class="card-grid">
                            {items.iter().cloned().map(|project| view! { <ProjectCard project/> }).collect_view()}
                        </div>
                    }
                    .into_any(),
                })
            }}
        </section>
    }
}

#[component]
pub fn ProjectDetailPage() -> impl IntoView {
    let params = use_params_map();
    let project = RwSignal::new(Remote::<Project>::Loading);

    Effect::new(move || {
        let slug = params.read().get("slug").unwrap_or_default();
        load_into(project, async move { endpoints::get_project(&slug).await });
    });

    view! {
        {move || {
            project.with(|p| match p {
                Remote::Loading => view! { <section class="section"><p class="muted">"Loading project..."</p></section> }.into_any(),
                Remote::Failed(_) => view! {
                    <section class="section">
                        <Seo title="Project not found" description="The requested project could not be found."/>
                        <h1 class="page-title">"Project not found"</h1>
                        <a href="/projects" class="btn btn--link">"← Back to projects"</a>
                    </section>
                }
                .into_any(),
                Remote::Ready(project) => project_detail(project.clone()).into_any(),
            })
        }}
    }
}

fn project_detail(project: Project) -> impl IntoView {
    let description = project.short_description.clone().unwrap_or_default();
    let image = project.hero_image_url.clone().or_else(|| project.cover_image_url.clone());
    let facts = [
        ("Status", Some(project.status.label().to_owned())),
        ("Service", project.service.as_ref().map(|s| s.name.clone())),
        ("Location", project.location.clone()),
        ("Client", project.client_name.clone()),
        ("Budget", project.budget.as_deref().and_then(optional_text)),
        ("Started", project.start_date.as_ref().map(|d| format_date(Some(d.as_str())))),
        ("Completed", project.end_date.as_ref().map(|d| format_date(Some(d.as_str())))),
    ];

    view! {
        <section class="section">
            <Seo title=project.name.clone() description=description/>
            {image.map(|src| view! { <img class="detail-hero" src=src alt=project.name.clone()/> })}
            <p class="eyebrow">"Project"</p>
            <h1 class="page-title">{project.name.clone()}</h1>
            {project.short_description.map(|s| view! { <p class="lead">{s}</p> })}
            <dl class="facts">
                {facts
                    .into_iter()
                    .filter_map(|(label, value)| value.map(|v| view! { <dt>{label}</dt><dd>{v}</dd> }))
                    .collect_view()}
            </dl>
            {project.description.map(|d| view! { <div class="prose">{d}</div> })}
            <div class="form-actions">
                <a href="/quote" class="btn btn--primary">"Start a similar project"</a>
                <DonateButton label="Support projects like this" variant="ghost"/>
                <a href="/projects" class="btn btn--link">"← All projects"</a>
            </div>
        </section>
    }
}
