//! Route-guard decision logic.
//!
//! Evaluated on every navigation/render cycle from the session store's
//! `(user, loading)` pair and a static set of public routes. The component
//! wrapper lives in `components::route_guard`; this module is the pure part.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

/// Routes reachable without authentication.
pub const PUBLIC_ROUTES: &[&str] = &["/login", "/register"];

/// What the current navigation target may do.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteDecision {
    /// Startup session check still in flight: render nothing. Avoids a
    /// flash of the login redirect before the check completes.
    Wait,
    /// Protected route, no user: go to the login screen instead.
    RedirectToLogin,
    /// Render the requested route's content.
    Render,
}

/// Whether a path is reachable without authentication.
pub fn is_public(path: &str) -> bool {
    PUBLIC_ROUTES.contains(&path)
}

/// The three-branch gate: wait while loading, redirect when a protected
/// route has no user, render otherwise. Idempotent under re-evaluation.
pub fn decide(path: &str, loading: bool, authenticated: bool) -> RouteDecision {
    if loading {
        RouteDecision::Wait
    } else if !authenticated && !is_public(path) {
        RouteDecision::RedirectToLogin
    } else {
        RouteDecision::Render
    }
}
