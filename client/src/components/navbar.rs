//! Public site header with brand mark, primary links and the quote CTA.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::donate_button::DonateButton;

pub const NAV_LINKS: [(&str, &str); 5] =
    [("/", "Home"), ("/about", "About"), ("/services", "Services"), ("/projects", "Projects"), ("/contact", "Contact")];

#[component]
pub fn Navbar() -> impl IntoView {
    view! {
        <header class="navbar">
            <div class="navbar__inner">
                <a href="/" class="navbar__brand">
                    <span class="navbar__logo">"BF"</span>
                    <span class="navbar__brand-text">
                        <span class="navbar__brand-name">"BRISK FARM"</span>
                        <span class="navbar__brand-sub">"Solutions & Construction Co."</span>
                    </span>
                </a>
                <nav class="navbar__links">
                    {NAV_LINKS
                        .into_iter()
                        .map(|(href, label)| view! { <A href=href exact=true attr:class="navbar__link">{label}</A> })
                        .collect_view()}
                </nav>
                <div class="navbar__actions">
                    <DonateButton label="Donate" variant="ghost"/>
                    <a href="/quote" class="btn btn--primary">"Request Quote"</a>
                </div>
            </div>
        </header>
    }
}
