//! Edge Guard: request-time interception for the legacy auth routes.
//!
//! Runs as middleware on the `/auth` sub-router only, before any page handler.
//! The decision itself is a pure function of path and query so it can be
//! tested without an HTTP stack.

use crate::redirect::table::{self, LOOP_BREAKER_PARAM};
use axum::{
    extract::Request,
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use tracing::debug;

/// Outcome of inspecting a single request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardDecision {
    /// Issue a non-permanent redirect to the given target.
    Redirect(String),
    /// Hand the request to normal routing unmodified.
    PassThrough,
}

/// Decide redirect-or-pass-through for a request.
///
/// Redirects when the path matches a legacy auth route and the loop breaker
/// is not already set. The loop-breaker check runs first: a request carrying
/// `no_redirect=true` always passes through, whatever its path, which makes
/// applying the guard twice a no-op.
#[must_use]
pub fn decide(path: &str, query: Option<&str>) -> GuardDecision {
    if loop_breaker_set(query) {
        return GuardDecision::PassThrough;
    }

    match table::legacy_route(path) {
        Some(_) => GuardDecision::Redirect(table::guarded_target()),
        None => GuardDecision::PassThrough,
    }
}

/// True when the loop-breaker parameter is present with value `true`.
fn loop_breaker_set(query: Option<&str>) -> bool {
    let Some(query) = query else {
        return false;
    };
    url::form_urlencoded::parse(query.as_bytes())
        .any(|(key, value)| key == LOOP_BREAKER_PARAM && value == "true")
}

/// Axum middleware wrapping [`decide`], scoped to the `/auth` sub-router.
pub async fn edge_guard(request: Request, next: Next) -> Response {
    let path = request.uri().path();
    let query = request.uri().query();

    match decide(path, query) {
        GuardDecision::Redirect(target) => {
            debug!(path, target = %target, "legacy auth route intercepted");
            Redirect::temporary(&target).into_response()
        }
        GuardDecision::PassThrough => next.run(request).await,
    }
}
