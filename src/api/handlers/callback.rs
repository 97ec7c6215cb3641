//! Magic-link callback.
//!
//! The identity provider redirects the user here with a pending-session
//! token. The handler exchanges it for a session exactly once and renders a
//! terminal page that navigates onward: `/profile` after 1 second on
//! success, `/auth/signin` after 2 seconds on failure (where the Edge Guard
//! then takes over and lands the user on `/create-profile`). Success
//! feedback is brief; failure feedback gives the user time to read the error
//! before being bounced.

use crate::{
    api::{handlers::html::Page, AppState},
    redirect::table::PROFILE_PATH,
    session::{Session, SessionError},
};
use axum::{extract::Query, response::IntoResponse, Extension};
use secrecy::SecretString;
use serde::Deserialize;
use std::{sync::Arc, time::Duration};
use tracing::{error, info};

/// Where a failed exchange sends the user. The guard intercepts the next
/// request to this path, so the terminal destination is `/create-profile`.
const FAILURE_PATH: &str = "/auth/signin";

const SUCCESS_DELAY: Duration = Duration::from_millis(1000);
const FAILURE_DELAY: Duration = Duration::from_millis(2000);

#[derive(Debug, Deserialize)]
pub struct CallbackParams {
    token: Option<String>,
}

/// Callback lifecycle. `Processing` is entered when the request arrives and
/// settles into exactly one terminal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum CallbackState {
    Processing,
    Success,
    Failure,
}

/// Terminal result of the flow: which state it settled in, what to tell the
/// user, and where (and when) to navigate next.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct CallbackOutcome {
    pub(crate) state: CallbackState,
    pub(crate) message_key: &'static str,
    /// Label key for the manual fallback link to the destination.
    pub(crate) link_key: &'static str,
    pub(crate) destination: &'static str,
    pub(crate) delay: Duration,
}

/// The exchange flow, settled at most once.
#[derive(Debug)]
pub(crate) struct CallbackFlow {
    state: CallbackState,
}

impl CallbackFlow {
    pub(crate) const fn new() -> Self {
        Self {
            state: CallbackState::Processing,
        }
    }

    /// Settle the flow with the exchange result. Terminal states are reached
    /// exactly once; the exchange is never re-attempted.
    pub(crate) fn settle(&mut self, result: &Result<Session, SessionError>) -> CallbackOutcome {
        debug_assert_eq!(self.state, CallbackState::Processing);

        match result {
            Ok(_) => {
                self.state = CallbackState::Success;
                CallbackOutcome {
                    state: CallbackState::Success,
                    message_key: "auth.loginSuccess",
                    link_key: "nav.profile",
                    destination: PROFILE_PATH,
                    delay: SUCCESS_DELAY,
                }
            }
            Err(_) => {
                self.state = CallbackState::Failure;
                CallbackOutcome {
                    state: CallbackState::Failure,
                    message_key: "auth.linkError",
                    link_key: "nav.signIn",
                    destination: FAILURE_PATH,
                    delay: FAILURE_DELAY,
                }
            }
        }
    }
}

pub async fn callback(
    Query(params): Query<CallbackParams>,
    Extension(state): Extension<Arc<AppState>>,
) -> impl IntoResponse {
    let catalog = state.catalog();

    let result = match params.token {
        Some(token) => {
            let token = SecretString::from(token);
            state.session().get_session(&token).await
        }
        None => Err(SessionError::InvalidToken),
    };

    match &result {
        Ok(session) => info!(user = %session.user.id, "magic-link exchange succeeded"),
        Err(err) => error!("magic-link exchange failed: {err}"),
    }

    let mut flow = CallbackFlow::new();
    let outcome = flow.settle(&result);

    let delay_secs = u16::try_from(outcome.delay.as_secs()).unwrap_or(u16::MAX);

    Page::new(catalog.t("auth.processingLink"))
        .refresh(delay_secs, outcome.destination)
        .heading(catalog.t("auth.processingLink"))
        .paragraph(catalog.t(outcome.message_key))
        .link(outcome.destination, catalog.t(outcome.link_key))
        .render()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::UserIdentity;

    fn session() -> Session {
        Session {
            user: UserIdentity {
                id: "01J0000000000000000000000".to_string(),
                email: "a@sano.dev".to_string(),
            },
            profile: None,
        }
    }

    #[test]
    fn success_navigates_to_profile_after_one_second() {
        let mut flow = CallbackFlow::new();
        let outcome = flow.settle(&Ok(session()));
        assert_eq!(outcome.state, CallbackState::Success);
        assert_eq!(outcome.destination, "/profile");
        assert_eq!(outcome.delay, Duration::from_millis(1000));
        assert_eq!(outcome.message_key, "auth.loginSuccess");
    }

    #[test]
    fn failure_navigates_to_signin_after_two_seconds() {
        let mut flow = CallbackFlow::new();
        let outcome = flow.settle(&Err(SessionError::Http { status: 401 }));
        assert_eq!(outcome.state, CallbackState::Failure);
        assert_eq!(outcome.destination, "/auth/signin");
        assert_eq!(outcome.delay, Duration::from_millis(2000));
        assert_eq!(outcome.message_key, "auth.linkError");
    }

    #[test]
    fn missing_token_is_a_failure() {
        let mut flow = CallbackFlow::new();
        let outcome = flow.settle(&Err(SessionError::InvalidToken));
        assert_eq!(outcome.state, CallbackState::Failure);
    }

    #[test]
    fn flow_starts_processing() {
        let flow = CallbackFlow::new();
        assert_eq!(flow.state, CallbackState::Processing);
    }
}
