//! Shared UI components used across pages.

pub mod create_event_form;
pub mod event_card;
pub mod route_guard;
pub mod sidebar;
pub mod text_input;
