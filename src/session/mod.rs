//! Session service collaborator.
//!
//! The session backend is an external service; this module consumes its
//! contract (pending-token exchange, sign-out) and models the outcome types
//! the callback handler works with. Nothing here persists state: a session
//! is exchanged per request and discarded.

mod client;

pub use client::SessionClient;

use serde::Deserialize;
use std::fmt;

/// Authenticated identity returned by the session service.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct UserIdentity {
    pub id: String,
    pub email: String,
}

/// Profile attached to a user, when one has been created.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Profile {
    pub username: String,
}

/// An established session: the user plus their profile, if any.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Session {
    pub user: UserIdentity,
    #[serde(default)]
    pub profile: Option<Profile>,
}

/// Errors from the session service boundary. None of these are fatal; the
/// callback handler degrades them to a user-visible failure page.
#[derive(Debug, Clone)]
pub enum SessionError {
    /// The pending token was missing or not in the expected format.
    InvalidToken,
    /// The request never completed (DNS, connect, timeout).
    Network(String),
    /// The service answered with a non-success status.
    Http { status: u16 },
    /// The response body did not match the session contract.
    Parse(String),
}

impl fmt::Display for SessionError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionError::InvalidToken => write!(formatter, "invalid pending-session token"),
            SessionError::Network(message) => write!(formatter, "session service unreachable: {message}"),
            SessionError::Http { status } => {
                write!(formatter, "session exchange failed ({status})")
            }
            SessionError::Parse(message) => {
                write!(formatter, "invalid session service response: {message}")
            }
        }
    }
}

impl std::error::Error for SessionError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_parses_with_profile() {
        let raw = r#"{"user":{"id":"01J0000000000000000000000","email":"a@sano.dev"},"profile":{"username":"ada"}}"#;
        let session: Session = serde_json::from_str(raw).expect("valid session json");
        assert_eq!(session.user.email, "a@sano.dev");
        assert_eq!(session.profile.map(|p| p.username), Some("ada".to_string()));
    }

    #[test]
    fn session_parses_without_profile() {
        let raw = r#"{"user":{"id":"01J0000000000000000000000","email":"a@sano.dev"}}"#;
        let session: Session = serde_json::from_str(raw).expect("valid session json");
        assert!(session.profile.is_none());
    }

    #[test]
    fn errors_render_without_token_material() {
        let err = SessionError::Http { status: 401 };
        assert_eq!(err.to_string(), "session exchange failed (401)");
        let err = SessionError::InvalidToken;
        assert_eq!(err.to_string(), "invalid pending-session token");
    }
}
