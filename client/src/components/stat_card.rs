//! Dashboard metric tile.

use leptos::prelude::*;

#[component]
pub fn StatCard(
    #[prop(into)] label: String,
    #[prop(into)] value: Signal<String>,
    /// `green`, `orange` or `earth`.
    #[prop(default = "green")]
    tone: &'static str,
) -> impl IntoView {
    view! {
        <div class=format!("stat-card stat-card--{tone}")>
            <p class="stat-card__label">{label}</p>
            <h2 class="stat-card__value">{move || value.get()}</h2>
        </div>
    }
}
