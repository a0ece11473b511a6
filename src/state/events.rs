//! Events feed state: a local list with create/join/leave mutations.

#[cfg(test)]
#[path = "events_test.rs"]
mod events_test;

/// One event in the feed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EventItem {
    pub id: String,
    pub title: String,
    pub location: String,
    pub date: String,
    pub time: String,
    pub description: Option<String>,
    pub current_participants: u32,
    pub max_participants: Option<u32>,
    pub creator_name: String,
    pub joined: bool,
}

impl EventItem {
    /// Whether the participant limit has been reached.
    pub fn is_full(&self) -> bool {
        self.max_participants
            .is_some_and(|max| self.current_participants >= max)
    }
}

/// Composer output for a new event.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EventDraft {
    pub title: String,
    pub location: String,
    pub date: String,
    pub time: String,
    pub description: Option<String>,
    pub max_participants: Option<u32>,
}

/// The feed: newest first, mutated in place by the feed screen.
#[derive(Clone, Debug, Default)]
pub struct EventsState {
    pub events: Vec<EventItem>,
}

impl EventsState {
    /// Fixture feed shown before any backend exists.
    pub fn seeded() -> Self {
        Self {
            events: vec![
                EventItem {
                    id: "1".to_owned(),
                    title: "Five-a-side Football".to_owned(),
                    location: "Riverside Pitch".to_owned(),
                    date: "2026-09-02".to_owned(),
                    time: "21:00".to_owned(),
                    description: Some(
                        "Casual five-a-side on Tuesday evening. All levels welcome!".to_owned(),
                    ),
                    current_participants: 7,
                    max_participants: Some(10),
                    creator_name: "Alex K.".to_owned(),
                    joined: false,
                },
                EventItem {
                    id: "2".to_owned(),
                    title: "Weekend Trekking".to_owned(),
                    location: "Highland Trails".to_owned(),
                    date: "2026-09-06".to_owned(),
                    time: "08:00".to_owned(),
                    description: Some(
                        "A full day out on the trails. Great views, good company.".to_owned(),
                    ),
                    current_participants: 12,
                    max_participants: Some(15),
                    creator_name: "Dana Y.".to_owned(),
                    joined: true,
                },
                EventItem {
                    id: "3".to_owned(),
                    title: "Open-air Concert".to_owned(),
                    location: "City Amphitheatre".to_owned(),
                    date: "2026-09-07".to_owned(),
                    time: "19:00".to_owned(),
                    description: None,
                    current_participants: 156,
                    max_participants: None,
                    creator_name: "The Organizers".to_owned(),
                    joined: false,
                },
            ],
        }
    }

    /// Prepend a new event created by `creator_name`: one participant (the
    /// creator), already joined.
    pub fn create(&mut self, draft: EventDraft, creator_name: &str) {
        let event = EventItem {
            id: uuid::Uuid::new_v4().to_string(),
            title: draft.title,
            location: draft.location,
            date: draft.date,
            time: draft.time,
            description: draft.description,
            current_participants: 1,
            max_participants: draft.max_participants,
            creator_name: creator_name.to_owned(),
            joined: true,
        };
        self.events.insert(0, event);
    }

    /// Join an event. No-op when already joined or full.
    pub fn join(&mut self, event_id: &str) {
        if let Some(event) = self.events.iter_mut().find(|e| e.id == event_id) {
            if !event.joined && !event.is_full() {
                event.current_participants += 1;
                event.joined = true;
            }
        }
    }

    /// Leave an event. No-op when not joined, so the count never goes
    /// negative.
    pub fn leave(&mut self, event_id: &str) {
        if let Some(event) = self.events.iter_mut().find(|e| e.id == event_id) {
            if event.joined {
                event.current_participants = event.current_participants.saturating_sub(1);
                event.joined = false;
            }
        }
    }
}
