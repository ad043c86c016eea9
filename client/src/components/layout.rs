//! Route layouts: the public site frame and the guarded admin frame.
//!
//! SYSTEM CONTEXT
//! ==============
//! Both are parent routes. Child pages render into the `Outlet`. The admin
//! frame installs the login redirect once for every admin child route.

use leptos::prelude::*;
use leptos_router::components::Outlet;
use leptos_router::hooks::use_navigate;

use crate::components::footer::Footer;
use crate::components::navbar::Navbar;
use crate::components::sidebar::Sidebar;
use crate::components::topbar::Topbar;
use crate::state::auth::AuthState;
use crate::util::auth::install_admin_redirect;

#[component]
pub fn MainLayout() -> impl IntoView {
    view! {
        <div class="site">
            <Navbar/>
            <main class="site__main">
                <Outlet/>
            </main>
            <Footer/>
        </div>
    }
}

/// Sidebar + topbar frame for authenticated admin pages.
#[component]
pub fn AdminLayout() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    install_admin_redirect(auth, use_navigate());

    view! {
        <Show
            when=move || auth.get().is_logged_in()
            fallback=move || {
                view! {
                    <div class="admin-gate">
                        <p>{move || if auth.get().loading { "Loading..." } else { "Redirecting to login..." }}</p>
                    </div>
                }
            }
        >
            <div class="admin">
                <Sidebar/>
                <div class="admin__body">
                    <Topbar/>
                    <main class="admin__main">
                        <Outlet/>
                    </main>
                </div>
            </div>
        </Show>
    }
}
