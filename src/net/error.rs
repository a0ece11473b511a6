//! Typed failure reasons for auth transport calls.
//!
//! Errors are values propagated to the submitting page, never unwinding:
//! a failed login re-enables the form and leaves session state untouched.

/// Why an auth transport call failed.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    /// The server (or mock) rejected the request. The message is already
    /// user-facing: invalid credentials, duplicate email/username, or the
    /// `message` field of an error body.
    #[error("{0}")]
    Rejected(String),

    /// The request never produced a usable response: network unreachable or
    /// malformed body.
    #[error("network error: {0}")]
    Network(String),

    /// A browser-only operation was invoked outside the browser.
    #[error("not available outside the browser")]
    Unavailable,
}

impl AuthError {
    /// User-facing text for the page's error banner.
    pub fn message(&self) -> String {
        match self {
            Self::Rejected(msg) => msg.clone(),
            Self::Network(_) | Self::Unavailable => "Something went wrong. Please try again.".to_owned(),
        }
    }
}
