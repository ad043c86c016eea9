//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{ParentRoute, Redirect, Route, Router, Routes},
};

use crate::components::layout::{AdminLayout, MainLayout};
use crate::pages::about::AboutPage;
use crate::pages::admin::{
    campaigns::CampaignsAdminPage,
    dashboard::DashboardPage,
    donations::DonationsAdminPage,
    inquiries::InquiriesAdminPage,
    login::LoginPage,
    projects::{ProjectEditPage, ProjectsAdminPage},
    services::ServicesAdminPage,
    subscribers::SubscribersAdminPage,
    testimonials::TestimonialsAdminPage,
    users::UsersAdminPage,
};
use crate::pages::contact::ContactPage;
use crate::pages::donate::DonatePage;
use crate::pages::home::HomePage;
use crate::pages::not_found::NotFoundPage;
use crate::pages::projects::{ProjectDetailPage, ProjectsPage};
use crate::pages::quote::QuotePage;
use crate::pages::services::{ServiceDetailPage, ServicesPage};
use crate::state::auth::{AuthState, DASHBOARD_ROUTE};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the shared auth signal and sets up client-side routing. Auth
/// starts in its loading state so admin guards wait for storage to be read
/// after hydration instead of bouncing to the login page during SSR.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState { loading: true, ..AuthState::default() });
    provide_context(auth);

    #[cfg(feature = "hydrate")]
    Effect::new(move || auth.set(AuthState::from_storage()));

    view! {
        <Stylesheet id="leptos" href="/pkg/brisk.css"/>
        <Title text="Brisk Farm Solutions & Construction Company"/>

        <Router>
            <Routes fallback=|| view! { <NotFoundPage/> }>
                <Route path=(StaticSegment("admin"), StaticSegment("login")) view=LoginPage/>
                <ParentRoute path=StaticSegment("admin") view=AdminLayout>
                    <Route path=StaticSegment("") view=|| view! { <Redirect path=DASHBOARD_ROUTE/> }/>
                    <Route path=StaticSegment("dashboard") view=DashboardPage/>
                    <Route path=StaticSegment("projects") view=ProjectsAdminPage/>
                    <Route path=(StaticSegment("projects"), StaticSegment("new")) view=ProjectEditPage/>
                    <Route path=(StaticSegment("projects"), ParamSegment("slug")) view=ProjectEditPage/>
                    <Route path=StaticSegment("services") view=ServicesAdminPage/>
                    <Route path=StaticSegment("inquiries") view=InquiriesAdminPage/>
                    <Route path=StaticSegment("subscribers") view=SubscribersAdminPage/>
                    <Route path=StaticSegment("donations") view=DonationsAdminPage/>
                    <Route path=StaticSegment("campaigns") view=CampaignsAdminPage/>
                    <Route path=StaticSegment("testimonials") view=TestimonialsAdminPage/>
                    <Route path=StaticSegment("users") view=UsersAdminPage/>
                </ParentRoute>
                <ParentRoute path=StaticSegment("") view=MainLayout>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("about") view=AboutPage/>
                    <Route path=StaticSegment("services") view=ServicesPage/>
                    <Route path=(StaticSegment("services"), ParamSegment("slug")) view=ServiceDetailPage/>
                    <Route path=StaticSegment("projects") view=ProjectsPage/>
                    <Route path=(StaticSegment("projects"), ParamSegment("slug")) view=ProjectDetailPage/>
                    <Route path=StaticSegment("quote") view=QuotePage/>
                    <Route path=StaticSegment("contact") view=ContactPage/>
                    <Route path=StaticSegment("donate") view=DonatePage/>
                </ParentRoute>
            </Routes>
        </Router>
    }
}
