//! Root application component with routing, the session context, and the
//! route guard around every page.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::route_guard::RouteGuard;
use crate::net::auth_api::AuthService;
use crate::net::config::ApiConfig;
use crate::pages::{feed::FeedPage, login::LoginPage, register::RegisterPage};
use crate::state::auth::Session;

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
/// Creates the session once from build-time configuration, provides it via
/// context, kicks off the startup session check, and gates every route
/// behind the [`RouteGuard`].
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = Session::new(AuthService::from_config(&ApiConfig::from_build_env()));
    provide_context(session.clone());

    // Startup session check: resolves the stored token (if any) and ends
    // the initial loading state. Effects only run in the browser, so SSR
    // keeps loading=true and renders nothing inside the guard.
    Effect::new(move || {
        let session = session.clone();
        leptos::task::spawn_local(async move { session.init().await });
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/activity-client.css"/>
        <Title text="Activity"/>

        <Router>
            <RouteGuard>
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("register") view=RegisterPage/>
                    <Route path=StaticSegment("") view=FeedPage/>
                </Routes>
            </RouteGuard>
        </Router>
    }
}
