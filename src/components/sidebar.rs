//! Navigation sidebar with the signed-in user block and logout.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::auth::use_session;

/// Left-hand navigation for authenticated screens.
#[component]
pub fn Sidebar() -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();

    let display_name = {
        let session = session.clone();
        move || {
            session.user().map_or_else(String::new, |u| {
                match (u.first_name, u.last_name) {
                    (Some(first), Some(last)) => format!("{first} {last}"),
                    (Some(first), None) => first,
                    _ => u.username,
                }
            })
        }
    };
    let handle = {
        let session = session.clone();
        move || session.user().map_or_else(String::new, |u| format!("@{}", u.username))
    };

    let on_logout = move |_| {
        let session = session.clone();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            session.logout().await;
            navigate("/login", NavigateOptions::default());
        });
    };

    view! {
        <aside class="sidebar">
            <div class="sidebar__brand">
                <span class="sidebar__logo"></span>
                <span class="sidebar__title">"Activity"</span>
            </div>

            <nav class="sidebar__nav">
                <a href="/" class="sidebar__link sidebar__link--active">
                    "Feed"
                </a>
                <a href="/events" class="sidebar__link">
                    "Events"
                </a>
                <a href="/my-events" class="sidebar__link">
                    "My Events"
                </a>
                <a href="/profile" class="sidebar__link">
                    "Profile"
                </a>
            </nav>

            <div class="sidebar__stats">
                <div class="sidebar__stat">
                    <span class="sidebar__stat-value">"1.2K"</span>
                    <span class="sidebar__stat-label">"Active users"</span>
                </div>
                <div class="sidebar__stat">
                    <span class="sidebar__stat-value">"342"</span>
                    <span class="sidebar__stat-label">"Events today"</span>
                </div>
            </div>

            <div class="sidebar__user">
                <div class="sidebar__user-name">{display_name}</div>
                <div class="sidebar__user-handle">{handle}</div>
                <button class="btn btn--ghost sidebar__logout" on:click=on_logout>
                    "Log out"
                </button>
            </div>
        </aside>
    }
}
