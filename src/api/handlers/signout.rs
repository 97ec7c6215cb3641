//! Sign-out: terminate the remote session, clear local state, go home.

use crate::{admin::ADMIN_COOKIE_NAME, api::AppState};
use axum::{
    http::{
        header::{AUTHORIZATION, COOKIE, SET_COOKIE},
        HeaderMap, HeaderValue,
    },
    response::{IntoResponse, Redirect},
    Extension,
};
use secrecy::SecretString;
use std::sync::Arc;
use tracing::error;

const SESSION_COOKIE_NAME: &str = "sano_session";

pub async fn signout(
    headers: HeaderMap,
    Extension(state): Extension<Arc<AppState>>,
) -> impl IntoResponse {
    // Best effort: the user is navigated away whether or not the remote
    // session could be terminated.
    if let Some(token) = extract_session_token(&headers) {
        if let Err(err) = state.session().sign_out(&token).await {
            error!("failed to terminate session: {err}");
        }
    }

    let mut response_headers = HeaderMap::new();
    // Always clear the admin gate, even if no session cookie was present.
    if let Ok(cookie) =
        HeaderValue::from_str(&format!("{ADMIN_COOKIE_NAME}=; Path=/; HttpOnly; Max-Age=0"))
    {
        response_headers.insert(SET_COOKIE, cookie);
    }

    (response_headers, Redirect::temporary("/"))
}

fn extract_session_token(headers: &HeaderMap) -> Option<SecretString> {
    if let Some(token) = extract_bearer_token(headers) {
        return Some(token);
    }
    let header = headers.get(COOKIE)?;
    let value = header.to_str().ok()?;
    for pair in value.split(';') {
        let trimmed = pair.trim();
        let mut parts = trimmed.splitn(2, '=');
        let key = parts.next()?.trim();
        let val = parts.next()?.trim();
        if key == SESSION_COOKIE_NAME {
            return Some(SecretString::from(val));
        }
    }
    None
}

fn extract_bearer_token(headers: &HeaderMap) -> Option<SecretString> {
    let value = headers.get(AUTHORIZATION)?.to_str().ok()?;
    let trimmed = value.trim();
    let token = trimmed
        .strip_prefix("Bearer ")
        .or_else(|| trimmed.strip_prefix("bearer "))?
        .trim();
    if token.is_empty() {
        None
    } else {
        Some(SecretString::from(token))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;

    #[test]
    fn session_token_from_cookie() {
        let mut headers = HeaderMap::new();
        headers.insert(
            COOKIE,
            HeaderValue::from_static("theme=dark; sano_session=tok123"),
        );
        let token = extract_session_token(&headers).expect("cookie token");
        assert_eq!(token.expose_secret(), "tok123");
    }

    #[test]
    fn bearer_token_wins_over_cookie() {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_static("Bearer abc"));
        headers.insert(COOKIE, HeaderValue::from_static("sano_session=tok123"));
        let token = extract_session_token(&headers).expect("bearer token");
        assert_eq!(token.expose_secret(), "abc");
    }

    #[test]
    fn empty_bearer_is_ignored() {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_static("Bearer "));
        assert!(extract_session_token(&headers).is_none());
    }
}
