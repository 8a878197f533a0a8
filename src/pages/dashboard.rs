//! Dashboard page shown after a successful login.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the authenticated landing route. The guard only checks that a
//! session token exists in storage; token contents are never validated
//! against the server.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::util::session;

/// Whether the guard should bounce the visitor back to the login page.
fn needs_login(token: Option<&str>) -> bool {
    token.is_none()
}

/// Dashboard page — static welcome content behind a session-token guard.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let navigate = use_navigate();
    let authenticated = RwSignal::new(false);

    // Redirect to login if no session token is stored.
    Effect::new(move || {
        let token = session::load_token();
        if needs_login(token.as_deref()) {
            navigate("/login", NavigateOptions::default());
        } else {
            authenticated.set(true);
        }
    });

    view! {
        <Show
            when=move || authenticated.get()
            fallback=|| {
                view! {
                    <div class="dashboard-page">
                        <p>"Redirecting to login..."</p>
                    </div>
                }
            }
        >
            <div class="dashboard-page">
                <h1 class="dashboard-page__welcome">"Welcome to your Dashboard!"</h1>
            </div>
        </Show>
    }
}
