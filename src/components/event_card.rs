//! Event card: details plus the join/leave action.

use leptos::prelude::*;

use crate::state::events::EventItem;

/// One event in the feed. `on_join`/`on_leave` mutate the feed state.
#[component]
pub fn EventCard(
    event: EventItem,
    #[prop(into)] on_join: Callback<String>,
    #[prop(into)] on_leave: Callback<String>,
) -> impl IntoView {
    let joined = event.joined;
    let full = event.is_full();
    let disabled = !joined && full;
    let id = event.id.clone();

    let participants = match event.max_participants {
        Some(max) => format!("{} / {} going", event.current_participants, max),
        None => format!("{} going", event.current_participants),
    };

    let action = move |_| {
        if joined {
            on_leave.run(id.clone());
        } else if !full {
            on_join.run(id.clone());
        }
    };

    let button_label = if joined {
        "Leave"
    } else if full {
        "Full"
    } else {
        "Join"
    };
    let button_class = if joined {
        "btn btn--ghost"
    } else {
        "btn btn--primary"
    };

    view! {
        <article class="event-card">
            <header class="event-card__header">
                <span class="event-card__avatar"></span>
                <div>
                    <div class="event-card__creator">{event.creator_name.clone()}</div>
                    <div class="event-card__byline">"created an event"</div>
                </div>
            </header>

            <h3 class="event-card__title">{event.title.clone()}</h3>
            {event
                .description
                .clone()
                .map(|text| view! { <p class="event-card__description">{text}</p> })}

            <dl class="event-card__meta">
                <div>
                    <dt>"Where"</dt>
                    <dd>{event.location.clone()}</dd>
                </div>
                <div>
                    <dt>"When"</dt>
                    <dd>{format!("{} at {}", event.date, event.time)}</dd>
                </div>
                <div>
                    <dt>"Who"</dt>
                    <dd>{participants}</dd>
                </div>
            </dl>

            <button class=button_class disabled=disabled on:click=action>
                {button_label}
            </button>
        </article>
    }
}
