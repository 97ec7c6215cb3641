//! Fallback page for the legacy `/auth/signup` route.
//!
//! Unlike the signin variant there is no transport-level refresh header; the
//! page renders a full interactive fallback (spinner, localized copy, manual
//! link) while the markup-level navigation completes. No retry loop: if
//! navigation is unavailable the manual link is the terminal fallback.

use crate::{
    api::{handlers::html::Page, AppState},
    redirect::table::{self, Provenance},
};
use axum::{response::IntoResponse, Extension};
use std::sync::Arc;
use tracing::debug;

pub async fn signup(Extension(state): Extension<Arc<AppState>>) -> impl IntoResponse {
    let catalog = state.catalog();
    let target = table::fallback_target(Provenance::Signup);

    debug!(target = %target, "signup fallback rendered");

    Page::new(catalog.t("nav.signUp"))
        .refresh(0, &target)
        .heading(catalog.t("nav.signUp"))
        .spinner()
        .paragraph(catalog.t("auth.authenticating"))
        .link(&target, catalog.t("auth.createAccount"))
        .render()
}
