//! Landing page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pulls three independent lists after hydration: services for the teaser,
//! featured projects and featured testimonials. Each section degrades on its
//! own; a failed testimonial fetch simply hides the strip.

use leptos::prelude::*;

use crate::components::donate_button::DonateButton;
use crate::components::hero::Hero;
use crate::components::project_card::ProjectCard;
use crate::components::seo::Seo;
use crate::components::service_card::ServiceCard;
use crate::components::testimonials::Testimonials;
use crate::net::endpoints;
use crate::net::types::{Project, Service, Testimonial};
use crate::util::load::{Remote, load_into};

const SERVICES_TEASER: usize = 3;

#[component]
pub fn HomePage() -> impl IntoView {
    let services = RwSignal::new(Remote::<Vec<Service>>::Loading);
    let projects = RwSignal::new(Remote::<Vec<Project>>::Loading);
    let testimonials = RwSignal::new(Remote::<Vec<Testimonial>>::Loading);

    Effect::new(move || {
        load_into(services, endpoints::list_services());
        load_into(projects, endpoints::list_featured_projects());
        load_into(testimonials, endpoints::list_testimonials(true));
    });

    view! {
        <Seo
            title="Home"
            description="Brisk Farm Solutions & Construction Company delivers biogas systems, livestock units, crop production support and modern construction across Uganda."
        />
        <Hero/>

        <section class="section" id="services">
            <p class="eyebrow">"What we do"</p>
            <h2 class="section-title">"Services"</h2>
            {move || {
                services.with(|s| match s {
                    Remote::Loading => view! { <p class="muted">"Loading services..."</p> }.into_any(),
                    Remote::Failed(e) => view! { <p class="error-text">{e.clone()}</p> }.into_any(),
                    Remote::Ready(items) => view! {
                        <div class="card-grid">
                            {items
                                .iter()
                                .take(SERVICES_TEASER)
                                .cloned()
                                .map(|service| view! { <ServiceCard service/> })
                                .collect_view()}
                        </div>
                    }
                    .into_any(),
                })
            }}
            <a href="/services" class="btn btn--link">"All services →"</a>
        </section>

        <section class="section">
            <p class="eyebrow">"Our work"</p>
            <h2 class="section-title">"Featured projects"</h2>
            {move || {
                projects.with(|p| match p {
                    Remote::Loading => view! { <p class="muted">"Loading projects..."</p> }.into_any(),
                    Remote::Failed(e) => view! { <p class="error-text">{e.clone()}</p> }.into_any(),
                    Remote::Ready(items) if items.is_empty() => {
                        view! { <p class="muted">"Featured projects will appear here soon."</p> }.into_any()
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

        {move || testimonials.get().ready().cloned().map(|items| view! { <Testimonials items/> })}

        <section class="section cta">
            <h2 class="section-title">"Help us build resilient farms and communities"</h2>
            <p>"Your support funds biodigesters, farmer training and sustainable construction across Uganda."</p>
            <DonateButton/>
        </section>
    }
}
