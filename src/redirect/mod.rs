//! Redirect-loop-prevention protocol for the legacy auth routes.
//!
//! [`table`] holds the legacy-route-to-destination mapping shared by every
//! layer; [`guard`] is the authoritative enforcement point, run as middleware
//! before any `/auth/*` page handler.

pub mod guard;
pub mod table;
