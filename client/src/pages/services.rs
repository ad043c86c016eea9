//! Services list and service detail routes.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::seo::Seo;
use crate::components::service_card::ServiceCard;
use crate::net::endpoints;
use crate::net::types::Service;
use crate::util::load::{Remote, load_into};

#[component]
pub fn ServicesPage() -> impl IntoView {
    let services = RwSignal::new(Remote::<Vec<Service>>::Loading);
    Effect::new(move || load_into(services, endpoints::list_services()));

    view! {
        <Seo
            title="Services"
            description="Biogas systems, waste management, livestock units, crop production support and construction services from Brisk Farm Solutions."
        />
        <section class="section">
            <p class="eyebrow">"Services"</p>
            <h1 class="page-title">"Integrated farm & construction services"</h1>
            {move || {
                services.with(|s| match s {
                    Remote::Loading => view! { <p class="muted">"Loading services..."</p> }.into_any(),
                    Remote::Failed(e) => view! { <p class="error-text">{e.clone()}</p> }.into_any(),
                    Remote::Ready(items) if items.is_empty() => {
                        view! { <p class="muted">"No services published yet."</p> }.into_any()
                    }
                    Remote::Ready(items) => view! {
                        <div class="card-grid">
                            {items
                                .iter()
                                .filter(|s| s.is_active)
                                .cloned()
                                .map(|service| view! { <ServiceCard service/> })
                                .collect_view()}
                        </div>
                    }
                    .into_any(),
                })
            }}
        </section>
    }
}

#[component]
pub fn ServiceDetailPage() -> impl IntoView {
    let params = use_params_map();
    let service = RwSignal::new(Remote::<Service>::Loading);

    Effect::new(move || {
        let slug = params.read().get("slug").unwrap_or_default();
        load_into(service, async move { endpoints::get_service(&slug).await });
    });

    view! {
        {move || {
            service.with(|s| match s {
                Remote::Loading => view! { <section class="section"><p class="muted">"Loading service..."</p></section> }.into_any(),
                Remote::Failed(_) => view! {
                    <section class="section">
                        <Seo title="Service not found" description="The requested service could not be found."/>
                        <h1 class="page-title">"Service not found"</h1>
                        <a href="/services" class="btn btn--link">"← Back to services"</a>
                    </section>
                }
                .into_any(),
                Remote::Ready(service) => service_detail(service.clone()).into_any(),
            })
        }}
    }
}

fn service_detail(service: Service) -> impl IntoView {
    let description = service.short_description.clone().unwrap_or_default();
    let highlights = service.highlights();
    view! {
        <section class="section">
            <Seo title=service.name.clone() description=description/>
            {service.hero_image_url.map(|src| view! { <img class="detail-hero" src=src alt=service.name.clone()/> })}
            {service.category.map(|c| view! { <p class="eyebrow">{c}</p> })}
            <h1 class="page-title">{service.name.clone()}</h1>
            {service.tagline.map(|t| view! { <p class="lead">{t}</p> })}
            {service.description.map(|d| view! { <div class="prose">{d}</div> })}
            <ul class="bullets">{highlights.into_iter().map(|h| view! { <li>{h}</li> }).collect_view()}</ul>
            <div class="form-actions">
                <a href="/quote" class="btn btn--primary">"Request a quote"</a>
                <a href="/services" class="btn btn--ghost">"← All services"</a>
            </div>
        </section>
    }
}
