//! Service teaser card.

use leptos::prelude::*;

use crate::net::types::Service;

#[component]
pub fn ServiceCard(service: Service) -> impl IntoView {
    let href = format!("/services/{}", service.slug);
    let highlights = service.highlights();
    let blurb = service.tagline.clone().or_else(|| service.short_description.clone());

    view! {
        <a class="service-card" href=href>
            {service.icon.map(|icon| view! { <span class="service-card__icon">{icon}</span> })}
            <h3 class="service-card__title">{service.name}</h3>
            {blurb.map(|b| view! { <p class="service-card__blurb">{b}</p> })}
            <ul class="service-card__highlights">
                {highlights.into_iter().map(|h| view! { <li>{h}</li> }).collect_view()}
            </ul>
            <span class="service-card__more">"Learn more →"</span>
        </a>
    }
}
