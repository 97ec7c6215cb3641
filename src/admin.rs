//! Admin convenience gate.
//!
//! A client-held expiring token, carried as JSON in a cookie, decides whether
//! the `/admin` page renders. This is a convenience gate, not a security
//! boundary: it only hides a page, and anything sensitive behind it must be
//! authorized by the session service. Malformed payloads are treated as an
//! absent session and never surfaced to the user.

use axum::http::{header::COOKIE, HeaderMap};
use serde::{Deserialize, Serialize};
use std::time::SystemTime;
use tracing::debug;

/// Cookie holding the serialized [`AdminSession`].
pub const ADMIN_COOKIE_NAME: &str = "sano_admin";

/// The persisted admin flag: an opaque token plus an explicit expiry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AdminSession {
    pub token: String,
    pub expires_at_unix: i64,
}

impl AdminSession {
    /// True while the expiry timestamp is still in the future.
    #[must_use]
    pub const fn is_active(&self, now_unix: i64) -> bool {
        now_unix < self.expires_at_unix
    }
}

/// Parse a persisted admin session; malformed data reads as absent.
#[must_use]
pub fn parse(raw: &str) -> Option<AdminSession> {
    match serde_json::from_str::<AdminSession>(raw) {
        Ok(session) => Some(session),
        Err(err) => {
            // Treat as unauthenticated rather than failing the request.
            debug!("malformed admin session payload: {err}");
            None
        }
    }
}

/// Extract an active admin session from request headers, if any.
#[must_use]
pub fn from_headers(headers: &HeaderMap, now_unix: i64) -> Option<AdminSession> {
    let raw = cookie_value(headers, ADMIN_COOKIE_NAME)?;
    let session = parse(&raw)?;
    if session.is_active(now_unix) {
        Some(session)
    } else {
        debug!("admin session expired");
        None
    }
}

/// Current unix time in seconds.
#[must_use]
pub fn now_unix() -> i64 {
    SystemTime::now()
        .duration_since(SystemTime::UNIX_EPOCH)
        .map(|d| i64::try_from(d.as_secs()).unwrap_or(i64::MAX))
        .unwrap_or(0)
}

fn cookie_value(headers: &HeaderMap, name: &str) -> Option<String> {
    let header = headers.get(COOKIE)?;
    let value = header.to_str().ok()?;
    for pair in value.split(';') {
        let trimmed = pair.trim();
        let mut parts = trimmed.splitn(2, '=');
        let key = parts.next()?.trim();
        let val = parts.next()?.trim();
        if key == name {
            return Some(val.to_string());
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers_with_cookie(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(COOKIE, HeaderValue::from_str(value).expect("ascii cookie"));
        headers
    }

    #[test]
    fn active_session_round_trips() {
        let session = AdminSession {
            token: "tok".to_string(),
            expires_at_unix: 2_000,
        };
        let raw = serde_json::to_string(&session).expect("serializes");
        assert_eq!(parse(&raw), Some(session));
    }

    #[test]
    fn malformed_payload_reads_as_absent() {
        assert_eq!(parse("{not json"), None);
        assert_eq!(parse(r#"{"token": 42}"#), None);
        assert_eq!(parse(""), None);
    }

    #[test]
    fn expiry_comparison() {
        let session = AdminSession {
            token: "tok".to_string(),
            expires_at_unix: 1_000,
        };
        assert!(session.is_active(999));
        assert!(!session.is_active(1_000));
        assert!(!session.is_active(1_001));
    }

    #[test]
    fn from_headers_requires_active_cookie() {
        let raw = r#"{"token":"tok","expires_at_unix":1000}"#;
        let headers = headers_with_cookie(&format!("{ADMIN_COOKIE_NAME}={raw}"));
        assert!(from_headers(&headers, 999).is_some());
        assert!(from_headers(&headers, 1_001).is_none());
    }

    #[test]
    fn from_headers_skips_other_cookies() {
        let headers = headers_with_cookie("theme=dark; other=1");
        assert!(from_headers(&headers, 0).is_none());
    }
}
