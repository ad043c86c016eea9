//! Admin navigation sidebar.

use leptos::prelude::*;
use leptos_router::components::A;

pub const ADMIN_LINKS: [(&str, &str); 9] = [
    ("/admin/dashboard", "Dashboard"),
    ("/admin/projects", "Projects"),
    ("/admin/services", "Services"),
    ("/admin/inquiries", "Inquiries"),
    ("/admin/subscribers", "Subscribers"),
    ("/admin/donations", "Donations"),
    ("/admin/campaigns", "Campaigns"),
    ("/admin/testimonials", "Testimonials"),
    ("/admin/users", "Users"),
];

#[component]
pub fn Sidebar() -> impl IntoView {
    view! {
        <aside class="sidebar">
            <div class="sidebar__brand">
                <h1>"Brisk Admin"</h1>
                <p>"Manage projects, services & inquiries."</p>
            </div>
            <nav class="sidebar__nav">
                {ADMIN_LINKS
                    .into_iter()
                    .map(|(href, label)| view! { <A href=href attr:class="sidebar__link">{label}</A> })
                    .collect_view()}
            </nav>
            <a class="sidebar__site" href="/">"← Back to site"</a>
        </aside>
    }
}
