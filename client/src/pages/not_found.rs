//! Fallback for unknown routes.

use leptos::prelude::*;

use crate::components::seo::Seo;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <Seo title="Page not found" description="The page you are looking for does not exist."/>
        <section class="section not-found">
            <p class="eyebrow">"404"</p>
            <h1 class="page-title">"Page not found"</h1>
            <p class="lead">"The page you are looking for has moved or never existed."</p>
            <a href="/" class="btn btn--primary">"Back to home"</a>
        </section>
    }
}
