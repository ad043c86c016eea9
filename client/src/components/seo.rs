//! Per-page `<title>` and meta description.

#[cfg(test)]
#[path = "seo_test.rs"]
mod seo_test;

use leptos::prelude::*;
use leptos_meta::{Meta, Title};

pub const SITE_NAME: &str = "Brisk Farm Solutions & Construction Company";

/// `"<title> | <site>"`, or just the site name for a blank title.
pub fn page_title(title: &str) -> String {
    let title = title.trim();
    if title.is_empty() || title.contains(SITE_NAME) { SITE_NAME.to_owned() } else { format!("{title} | {SITE_NAME}") }
}

#[component]
pub fn Seo(#[prop(into)] title: String, #[prop(into)] description: String) -> impl IntoView {
    view! {
        <Title text=page_title(&title)/>
        <Meta name="description" content=description/>
    }
}
