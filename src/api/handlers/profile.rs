//! Destination of a successful magic-link sign-in.

use crate::api::{handlers::html::Page, AppState};
use axum::{response::IntoResponse, Extension};
use std::sync::Arc;

pub async fn profile(Extension(state): Extension<Arc<AppState>>) -> impl IntoResponse {
    let catalog = state.catalog();

    Page::new(catalog.t("nav.profile"))
        .nav(catalog)
        .heading(catalog.t("nav.profile"))
        .render()
}
