//! Persisted session token storage.
//!
//! In the browser the token lives in `localStorage` under a fixed key; an
//! absent key means unauthenticated at startup. Outside the browser (SSR,
//! host-side tests) a process-local stash stands in so the token lifecycle
//! stays observable.

#[cfg(feature = "hydrate")]
const STORAGE_KEY: &str = "activity_token";

#[cfg(not(feature = "hydrate"))]
static STASH: std::sync::Mutex<Option<String>> = std::sync::Mutex::new(None);

/// Serializes tests that go through the process-local stash.
#[cfg(test)]
pub(crate) static TEST_LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());

/// Read the stored session token, if any.
pub fn stored_token() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let storage = web_sys::window()?.local_storage().ok().flatten()?;
        storage.get_item(STORAGE_KEY).ok().flatten()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        STASH.lock().ok()?.clone()
    }
}

/// Persist the session token.
pub fn store_token(token: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                let _ = storage.set_item(STORAGE_KEY, token);
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        if let Ok(mut stash) = STASH.lock() {
            *stash = Some(token.to_owned());
        }
    }
}

/// Delete the stored session token.
pub fn clear_token() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                let _ = storage.remove_item(STORAGE_KEY);
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        if let Ok(mut stash) = STASH.lock() {
            *stash = None;
        }
    }
}
