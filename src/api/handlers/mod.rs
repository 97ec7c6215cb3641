//! Route handlers for the navigation layer.
//!
//! The `/auth/*` handlers are fallbacks: the Edge Guard normally intercepts
//! the legacy routes before any of them run, so they only render when a
//! request carries the loop-breaker marker or bypassed the guard entirely.

pub mod admin;
pub mod callback;
pub mod create_profile;
pub mod health;
pub mod profile;
pub mod root;
pub mod signin;
pub mod signout;
pub mod signup;

pub(crate) mod html;
