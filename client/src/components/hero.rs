//! Home page hero banner.

use leptos::prelude::*;

use crate::components::donate_button::DonateButton;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section class="hero">
            <div class="hero__copy">
                <p class="eyebrow">"Uganda · Farm & Construction Solutions"</p>
                <h1 class="hero__title">"Brisk Farm Solutions & Construction Company"</h1>
                <p class="hero__tagline">"Smart Construction. Sustainable Agriculture."</p>
                <p class="hero__lead">
                    "We combine modern construction, integrated farm systems and renewable energy "
                    "solutions to help households, farms and institutions build stronger, more "
                    "sustainable futures."
                </p>
                <div class="hero__actions">
                    <a href="/quote" class="btn btn--primary">"Request a Site Visit"</a>
                    <a href="/projects" class="btn btn--ghost">"View Completed Projects"</a>
                    <DonateButton label="Support our work"/>
                </div>
            </div>
            <div class="hero__pillars">
                <div class="hero__pillar">
                    <p class="hero__pillar-title">"Smart Builds"</p>
                    <p>"Construction tailored for farms, homes & institutions."</p>
                </div>
                <div class="hero__pillar">
                    <p class="hero__pillar-title">"Sustainable Systems"</p>
                    <p>"Biogas, waste-to-energy & climate-smart farming for resilient livelihoods."</p>
                </div>
            </div>
        </section>
    }
}
