//! # Sano (Health Metrics Web Application)
//!
//! `sano` serves the navigation layer of the health-metrics web application:
//! the legacy authentication routes, the profile-creation flow they redirect
//! into, and the magic-link callback that completes an out-of-band sign-in.
//!
//! ## Redirect protocol
//!
//! The legacy routes `/auth/signin` and `/auth/signup` must never render.
//! Three cooperating pieces enforce this:
//!
//! - **Edge Guard:** middleware scoped to `/auth/*` that redirects legacy
//!   routes to `/create-profile` before any page handler runs. A
//!   `no_redirect=true` loop-breaker marker on the target keeps the guard
//!   idempotent: a request already carrying the marker always passes through.
//! - **Page fallbacks:** the legacy pages themselves, reachable only when the
//!   guard passed a request through (marker set, or a cached response served
//!   in front of the service), render refresh directives plus a manual link
//!   to the same destination.
//! - **Callback handler:** `/auth/callback` exchanges a pending magic-link
//!   token for a session and routes to `/profile` on success or back to
//!   `/auth/signin` on failure, where the Edge Guard takes over again.
//!
//! ## Admin gate
//!
//! The `/admin` route is gated by a client-held expiring token. It is a
//! convenience gate for hiding the page, not a security boundary; anything
//! that must actually be protected lives behind the session service.

pub mod admin;
pub mod api;
pub mod cli;
pub mod i18n;
pub mod redirect;
pub mod session;

#[allow(clippy::doc_markdown, clippy::needless_raw_string_hashes)]
pub mod built_info {
    include!(concat!(env!("OUT_DIR"), "/built.rs"));
}

pub const GIT_COMMIT_HASH: &str = match built_info::GIT_COMMIT_HASH {
    Some(hash) => hash,
    None => "unknown",
};

pub const APP_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"),);
