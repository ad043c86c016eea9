//! Static company profile.

use leptos::prelude::*;

use crate::components::seo::Seo;

const OBJECTIVES: [&str; 5] = [
    "Boost farm productivity through mechanization, improved breeds, and practical innovation.",
    "Coordinate and deliver farm trainings, tours, and learning programs for farmers and institutions.",
    "Expand biodigester and biogas technologies to enhance production, energy supply, fertilizer output, and waste management.",
    "Advocate for policies that support innovation in agriculture, renewable energy, and organic practices.",
    "Implement sustainable, modern construction methods across farm structures and general building projects.",
];

const TARGET_MARKET: [&str; 7] = [
    "Small, medium, and large-scale farmers seeking biogas systems, livestock housing, irrigation, and farm construction.",
    "Commercial livestock enterprises such as dairy farms, piggery units, poultry farms, and ranches.",
    "Agricultural cooperatives and farmer groups that need training, farm tours, and modern farming technologies.",
    "Institutions and organizations including schools, universities, health centers, NGOs, and community groups.",
    "Real estate developers and construction clients needing eco-friendly buildings, farm structures, and biogas systems.",
    "Government agencies and local authorities promoting agriculture, clean energy, and rural transformation.",
    "Urban and rural households looking for affordable biogas and sustainable waste management solutions.",
];

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <Seo
            title="About Us"
            description="Learn about Brisk Farm Solutions & Construction Company: our vision, mission, objectives and the communities we serve across Uganda."
        />
        <section class="section">
            <header>
                <p class="eyebrow">"About Us"</p>
                <h1 class="page-title">"Brisk Farm Solutions & Construction Company"</h1>
                <p class="lead">
                    "We are an integrated agro-systems and construction company focused on biogas, livestock, "
                    "crops, and sustainable building solutions that empower farmers, institutions, and "
                    "households across Uganda."
                </p>
            </header>

            <div class="two-col">
                <article class="panel">
                    <h2>"Vision"</h2>
                    <p>"A future where sustainable agriculture and modern construction work together to uplift communities everywhere."</p>
                </article>
                <article class="panel">
                    <h2>"Mission"</h2>
                    <p>
                        "To design and build integrated agro-systems, from biogas and construction to livestock "
                        "and crop production, that are productive, sustainable, and scalable."
                    </p>
                </article>
            </div>

            <section class="panel">
                <h2>"Objectives"</h2>
                <ul class="bullets">{OBJECTIVES.into_iter().map(|o| view! { <li>{o}</li> }).collect_view()}</ul>
            </section>

            <section class="panel">
                <h2>"Who we serve"</h2>
                <ul class="bullets">{TARGET_MARKET.into_iter().map(|t| view! { <li>{t}</li> }).collect_view()}</ul>
            </section>
        </section>
    }
}
