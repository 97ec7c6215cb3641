//! Canonical destination of the legacy auth routes.

use crate::api::{handlers::html::Page, AppState};
use axum::{extract::Query, response::IntoResponse, Extension};
use serde::Deserialize;
use std::sync::Arc;
use tracing::debug;

#[derive(Debug, Deserialize)]
pub struct CreateProfileParams {
    /// Provenance tag set by the page fallbacks (`signin` | `signup`).
    from: Option<String>,
    /// Loop-breaker marker set by the Edge Guard; its presence here means a
    /// redirect already happened and the page must simply render.
    no_redirect: Option<String>,
}

pub async fn create_profile(
    Query(params): Query<CreateProfileParams>,
    Extension(state): Extension<Arc<AppState>>,
) -> impl IntoResponse {
    let catalog = state.catalog();

    debug!(
        from = params.from.as_deref().unwrap_or("direct"),
        guarded = params.no_redirect.as_deref() == Some("true"),
        "create-profile rendered"
    );

    Page::new(catalog.t("auth.createAccount"))
        .nav(catalog)
        .heading(catalog.t("auth.createAccount"))
        .render()
}
