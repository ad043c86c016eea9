//! Featured testimonials strip. Renders nothing without testimonials.

use leptos::prelude::*;

use crate::net::types::Testimonial;

#[component]
pub fn Testimonials(items: Vec<Testimonial>) -> impl IntoView {
    let items: Vec<Testimonial> = items.into_iter().filter(|t| t.is_active).collect();
    (!items.is_empty()).then(|| {
        view! {
            <section class="testimonials">
                <p class="eyebrow">"Testimonials"</p>
                <h2 class="section-title">"What our clients say"</h2>
                <div class="testimonials__grid">
                    {items
                        .into_iter()
                        .map(|t| {
                            let byline = t.byline();
                            view! {
                                <figure class="testimonial">
                                    <blockquote>{format!("“{}”", t.quote)}</blockquote>
                                    <figcaption>
                                        <strong>{t.name}</strong>
                                        {(!byline.is_empty()).then(|| view! { <span>{byline}</span> })}
                                    </figcaption>
                                </figure>
                            }
                        })
                        .collect_view()}
                </div>
            </section>
        }
    })
}
