use crate::api::{handlers::html::Page, AppState};
use axum::{response::IntoResponse, Extension};
use std::sync::Arc;

/// Landing page. The calculators themselves render client-side; this layer
/// only owns the navigation around them.
pub async fn root(Extension(state): Extension<Arc<AppState>>) -> impl IntoResponse {
    let catalog = state.catalog();

    Page::new("Sano")
        .nav(catalog)
        .heading("Sano")
        .paragraph("Calories, heart-rate zones, blood volume, bone mass and macronutrient calculators.")
        .render()
}
