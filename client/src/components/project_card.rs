//! Project summary card linking to the detail page.

use leptos::prelude::*;

use crate::net::types::Project;

#[component]
pub fn ProjectCard(project: Project) -> impl IntoView {
    let href = format!("/projects/{}", project.slug);
    let image = project.thumbnail().unwrap_or("/placeholder.jpg").to_owned();
    let status = project.status.label();
    let service = project.service.as_ref().map(|s| s.name.clone());

    view! {
        <a class="project-card" href=href>
            <div class="project-card__media">
                <img src=image alt=project.name.clone() loading="lazy"/>
                <span class="project-card__status">{status}</span>
            </div>
            <div class="project-card__body">
                {service.map(|name| view! { <p class="eyebrow">{name}</p> })}
                <h3 class="project-card__title">{project.name}</h3>
                {project.short_description.map(|s| view! { <p class="project-card__summary">{s}</p> })}
                {project.location.map(|l| view! { <p class="project-card__location">{l}</p> })}
            </div>
        </a>
    }
}
