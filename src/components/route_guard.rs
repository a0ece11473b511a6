//! Route guard component wrapping the routed content.
//!
//! The decision logic lives in [`crate::guard`]; this component reads the
//! session and the current location, suspends output while the startup check
//! is in flight, and navigates to `/login` for protected routes without a
//! user.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::guard::{self, RouteDecision};
use crate::state::auth::use_session;

/// Gate around the routed pages. Re-evaluated on every auth or route change.
#[component]
pub fn RouteGuard(children: ChildrenFn) -> impl IntoView {
    let session = use_session();
    let location = use_location();

    let decision = Memo::new(move |_| {
        guard::decide(
            &location.pathname.get(),
            session.is_loading(),
            session.is_authenticated(),
        )
    });

    let navigate = use_navigate();
    Effect::new(move || {
        if decision.get() == RouteDecision::RedirectToLogin {
            navigate("/login", NavigateOptions::default());
        }
    });

    view! {
        <Show when=move || decision.get() == RouteDecision::Render>
            {children()}
        </Show>
    }
}
