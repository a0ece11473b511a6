//! Login page: credential form, field validation, API error banner.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::text_input::TextInput;
use crate::net::types::LoginData;
use crate::state::auth::use_session;
use crate::validate::{self, FieldErrors};

/// Login page. Redirects to the feed once authenticated.
#[component]
pub fn LoginPage() -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let errors = RwSignal::new(FieldErrors::default());
    let api_error = RwSignal::new(String::new());
    let submitting = RwSignal::new(false);

    // Already (or newly) authenticated: go to the feed.
    {
        let session = session.clone();
        Effect::new(move || {
            if session.is_authenticated() {
                navigate("/", NavigateOptions::default());
            }
        });
    }

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        api_error.set(String::new());

        let data = LoginData {
            email: email.get(),
            password: password.get(),
        };
        let found = validate::validate_login(&data);
        if !found.is_empty() {
            errors.set(found);
            return;
        }

        submitting.set(true);
        let session = session.clone();
        leptos::task::spawn_local(async move {
            if let Err(err) = session.login(&data).await {
                api_error.set(err.message());
            }
            submitting.set(false);
        });
    };

    view! {
        <div class="auth-page">
            <section class="auth-page__panel">
                <div class="auth-page__brand">
                    <span class="auth-page__logo"></span>
                    <span>"Activity"</span>
                </div>
                <h1>"Welcome back!"</h1>
                <p class="auth-page__subtitle">"Sign in and start exploring"</p>

                <form class="auth-page__form" on:submit=on_submit>
                    <TextInput
                        label="Email"
                        field="email"
                        value=email
                        errors=errors
                        input_type="email"
                        placeholder="you@example.com"
                    />
                    <TextInput
                        label="Password"
                        field="password"
                        value=password
                        errors=errors
                        input_type="password"
                        placeholder="........"
                    />

                    <Show when=move || !api_error.get().is_empty()>
                        <div class="auth-page__error">{move || api_error.get()}</div>
                    </Show>

                    <button
                        type="submit"
                        class="btn btn--primary auth-page__submit"
                        disabled=move || submitting.get()
                    >
                        {move || if submitting.get() { "Signing in..." } else { "Sign in" }}
                    </button>
                </form>

                <p class="auth-page__switch">
                    "No account yet? " <a href="/register">"Register now"</a>
                </p>
            </section>
        </div>
    }
}
