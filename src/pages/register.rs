//! Registration page: account form with confirm-password validation.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::text_input::TextInput;
use crate::net::types::RegisterData;
use crate::state::auth::use_session;
use crate::validate::{self, FieldErrors};

fn optional(value: String) -> Option<String> {
    if value.is_empty() { None } else { Some(value) }
}

/// Registration page. Navigates to the feed after a successful sign-up.
#[component]
pub fn RegisterPage() -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();

    let first_name = RwSignal::new(String::new());
    let last_name = RwSignal::new(String::new());
    let username = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm_password = RwSignal::new(String::new());
    let errors = RwSignal::new(FieldErrors::default());
    let api_error = RwSignal::new(String::new());
    let submitting = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        api_error.set(String::new());

        // The confirm value stays local: it is validated here and never
        // becomes part of the request payload.
        let data = RegisterData {
            email: email.get(),
            username: username.get(),
            password: password.get(),
            first_name: optional(first_name.get()),
            last_name: optional(last_name.get()),
        };
        let found = validate::validate_register(&data, &confirm_password.get());
        if !found.is_empty() {
            errors.set(found);
            return;
        }

        submitting.set(true);
        let session = session.clone();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match session.register(&data).await {
                Ok(()) => navigate("/", NavigateOptions::default()),
                Err(err) => api_error.set(err.message()),
            }
            submitting.set(false);
        });
    };

    view! {
        <div class="auth-page">
            <section class="auth-page__panel auth-page__panel--wide">
                <div class="auth-page__brand">
                    <span class="auth-page__logo"></span>
                    <span>"Activity"</span>
                </div>
                <h1>"Create an account"</h1>
                <p class="auth-page__subtitle">"Join the community and discover events"</p>

                <form class="auth-page__form" on:submit=on_submit>
                    <div class="auth-page__row">
                        <TextInput
                            label="First name"
                            field="first_name"
                            value=first_name
                            errors=errors
                            placeholder="Your first name"
                        />
                        <TextInput
                            label="Last name"
                            field="last_name"
                            value=last_name
                            errors=errors
                            placeholder="Your last name"
                        />
                    </div>
                    <TextInput
                        label="Username"
                        field="username"
                        value=username
                        errors=errors
                        placeholder="username"
                    />
                    <TextInput
                        label="Email"
                        field="email"
                        value=email
                        errors=errors
                        input_type="email"
                        placeholder="you@example.com"
                    />
                    <div class="auth-page__row">
                        <TextInput
                            label="Password"
                            field="password"
                            value=password
                            errors=errors
                            input_type="password"
                            placeholder="........"
                        />
                        <TextInput
                            label="Confirm password"
                            field="confirm_password"
                            value=confirm_password
                            errors=errors
                            input_type="password"
                            placeholder="........"
                        />
                    </div>

                    <Show when=move || !api_error.get().is_empty()>
                        <div class="auth-page__error">{move || api_error.get()}</div>
                    </Show>

                    <button
                        type="submit"
                        class="btn btn--primary auth-page__submit"
                        disabled=move || submitting.get()
                    >
                        {move || {
                            if submitting.get() { "Creating account..." } else { "Register" }
                        }}
                    </button>
                </form>

                <p class="auth-page__switch">
                    "Already have an account? " <a href="/login">"Sign in"</a>
                </p>
            </section>
        </div>
    }
}
