//! Event composer: a collapsed prompt that expands into the create form.

use leptos::prelude::*;

use crate::state::events::EventDraft;

/// "What are you planning?" composer. Submits an [`EventDraft`] and resets.
#[component]
pub fn CreateEventForm(#[prop(into)] on_submit: Callback<EventDraft>) -> impl IntoView {
    let expanded = RwSignal::new(false);

    let title = RwSignal::new(String::new());
    let location = RwSignal::new(String::new());
    let date = RwSignal::new(String::new());
    let time = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let max_participants = RwSignal::new(String::new());

    let reset = move || {
        title.set(String::new());
        location.set(String::new());
        date.set(String::new());
        time.set(String::new());
        description.set(String::new());
        max_participants.set(String::new());
        expanded.set(false);
    };

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if title.get().trim().is_empty() || location.get().trim().is_empty() {
            return;
        }
        let desc = description.get();
        let draft = EventDraft {
            title: title.get().trim().to_owned(),
            location: location.get().trim().to_owned(),
            date: date.get(),
            time: time.get(),
            description: if desc.trim().is_empty() {
                None
            } else {
                Some(desc.trim().to_owned())
            },
            max_participants: max_participants.get().trim().parse().ok(),
        };
        on_submit.run(draft);
        reset();
    };

    view! {
        <div class="composer">
            <Show
                when=move || expanded.get()
                fallback=move || {
                    view! {
                        <button class="composer__prompt" on:click=move |_| expanded.set(true)>
                            "What are you planning?"
                        </button>
                    }
                }
            >
                <form class="composer__form" on:submit=submit>
                    <h3>"Create an event"</h3>
                    <label class="form-field__label">
                        "Title"
                        <input
                            class="form-input"
                            type="text"
                            placeholder="Name your event"
                            prop:value=move || title.get()
                            on:input=move |ev| title.set(event_target_value(&ev))
                        />
                    </label>
                    <div class="composer__row">
                        <label class="form-field__label">
                            "Date"
                            <input
                                class="form-input"
                                type="date"
                                prop:value=move || date.get()
                                on:input=move |ev| date.set(event_target_value(&ev))
                            />
                        </label>
                        <label class="form-field__label">
                            "Time"
                            <input
                                class="form-input"
                                type="time"
                                prop:value=move || time.get()
                                on:input=move |ev| time.set(event_target_value(&ev))
                            />
                        </label>
                    </div>
                    <label class="form-field__label">
                        "Location"
                        <input
                            class="form-input"
                            type="text"
                            placeholder="Where is it happening?"
                            prop:value=move || location.get()
                            on:input=move |ev| location.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="form-field__label">
                        "Participant limit"
                        <input
                            class="form-input"
                            type="number"
                            placeholder="Optional"
                            prop:value=move || max_participants.get()
                            on:input=move |ev| max_participants.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="form-field__label">
                        "Description"
                        <textarea
                            class="form-input"
                            placeholder="Tell people what to expect"
                            prop:value=move || description.get()
                            on:input=move |ev| description.set(event_target_value(&ev))
                        ></textarea>
                    </label>
                    <div class="composer__actions">
                        <button type="button" class="btn" on:click=move |_| reset()>
                            "Cancel"
                        </button>
                        <button type="submit" class="btn btn--primary">
                            "Share"
                        </button>
                    </div>
                </form>
            </Show>
        </div>
    }
}
