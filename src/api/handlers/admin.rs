//! Admin page behind the convenience gate.
//!
//! The gate only hides the page; see [`crate::admin`] for why it is not a
//! security boundary.

use crate::{
    admin,
    api::{handlers::html::Page, AppState},
    redirect::table::CREATE_PROFILE_PATH,
};
use axum::{
    http::HeaderMap,
    response::{IntoResponse, Redirect, Response},
    Extension,
};
use std::sync::Arc;
use tracing::debug;

pub async fn admin(headers: HeaderMap, Extension(state): Extension<Arc<AppState>>) -> Response {
    let catalog = state.catalog();

    match admin::from_headers(&headers, admin::now_unix()) {
        Some(_) => Page::new("Admin")
            .nav(catalog)
            .heading("Admin")
            .render()
            .into_response(),
        None => {
            debug!("admin gate closed");
            Redirect::temporary(CREATE_PROFILE_PATH).into_response()
        }
    }
}
