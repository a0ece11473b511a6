//! Events feed: sidebar, composer, and the event list.

use leptos::prelude::*;

use crate::components::create_event_form::CreateEventForm;
use crate::components::event_card::EventCard;
use crate::components::sidebar::Sidebar;
use crate::state::auth::use_session;
use crate::state::events::{EventDraft, EventsState};

/// The main feed screen. Event state is local to this page: a list
/// mutated in place by create/join/leave.
#[component]
pub fn FeedPage() -> impl IntoView {
    let session = use_session();
    let events = RwSignal::new(EventsState::seeded());

    let on_create = Callback::new(move |draft: EventDraft| {
        let creator = session
            .user()
            .map_or_else(|| "You".to_owned(), |u| u.username);
        events.update(|state| state.create(draft, &creator));
    });

    let on_join = Callback::new(move |id: String| {
        events.update(|state| state.join(&id));
    });

    let on_leave = Callback::new(move |id: String| {
        events.update(|state| state.leave(&id));
    });

    view! {
        <div class="feed-page">
            <Sidebar/>

            <main class="feed-page__main">
                <CreateEventForm on_submit=on_create/>

                <div class="feed-page__list">
                    <For
                        each=move || events.get().events
                        key=|event| (event.id.clone(), event.current_participants, event.joined)
                        children=move |event| {
                            view! { <EventCard event=event on_join=on_join on_leave=on_leave/> }
                        }
                    />
                </div>
            </main>
        </div>
    }
}
