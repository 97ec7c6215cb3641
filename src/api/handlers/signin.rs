//! Fallback page for the legacy `/auth/signin` route.
//!
//! Rendering at all means the Edge Guard did not fire (loop breaker set, or
//! a cached response bypassed it), so navigation away is unconditional. Two
//! automated mechanisms point at the same destination: a transport-level
//! `Refresh` header and a zero-delay markup refresh. The manual link is the
//! terminal fallback if both fail.

use crate::{
    api::{handlers::html::Page, AppState},
    redirect::table::{self, Provenance},
};
use axum::{
    http::{HeaderMap, HeaderName, HeaderValue},
    response::IntoResponse,
    Extension,
};
use std::sync::Arc;
use tracing::debug;

pub async fn signin(Extension(state): Extension<Arc<AppState>>) -> impl IntoResponse {
    let catalog = state.catalog();
    let target = table::fallback_target(Provenance::Signin);

    debug!(target = %target, "signin fallback rendered");

    let mut headers = HeaderMap::new();
    if let Ok(value) = HeaderValue::from_str(&format!("0;url={target}")) {
        headers.insert(HeaderName::from_static("refresh"), value);
    }

    let page = Page::new(catalog.t("nav.signIn"))
        .refresh(0, &target)
        .heading(catalog.t("nav.signIn"))
        .paragraph(catalog.t("auth.authenticating"))
        .link(&target, catalog.t("auth.createAccount"))
        .render();

    (headers, page)
}
