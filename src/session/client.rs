use crate::session::{Session, SessionError};
use anyhow::{Context, Result};
use reqwest::{Client, StatusCode};
use secrecy::{ExposeSecret, SecretString};
use std::collections::HashMap;
use tracing::{debug, error};
use ulid::Ulid;
use url::Url;

/// HTTP client for the session service.
///
/// One instance lives in the application state for the life of the process;
/// reqwest pools connections underneath.
#[derive(Debug, Clone)]
pub struct SessionClient {
    base_url: Url,
    client: Client,
}

impl SessionClient {
    /// Build a client for the service rooted at `base_url`.
    ///
    /// # Errors
    /// Returns an error if the underlying HTTP client cannot be constructed.
    pub fn new(base_url: Url) -> Result<Self> {
        let client = Client::builder()
            .user_agent(crate::APP_USER_AGENT)
            .build()
            .context("Failed to build session service HTTP client")?;

        Ok(Self { base_url, client })
    }

    /// Exchange a pending magic-link token for an authenticated session.
    ///
    /// The token must be a ULID; anything else is rejected locally without a
    /// network round trip, since the service only ever issues ULID tokens.
    ///
    /// # Errors
    /// Returns a [`SessionError`] if the token is malformed, the service is
    /// unreachable, answers with a non-success status, or the body does not
    /// parse.
    pub async fn get_session(&self, token: &SecretString) -> Result<Session, SessionError> {
        if Ulid::from_string(token.expose_secret()).is_err() {
            return Err(SessionError::InvalidToken);
        }

        let url = self.endpoint("v1/session/exchange")?;

        let mut body = HashMap::new();
        body.insert("token", token.expose_secret());

        let response = self
            .client
            .post(url)
            .json(&body)
            .send()
            .await
            .map_err(|err| SessionError::Network(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(SessionError::Http {
                status: status.as_u16(),
            });
        }

        response
            .json::<Session>()
            .await
            .map_err(|err| SessionError::Parse(err.to_string()))
    }

    /// Terminate the session held by `token`. Best effort: callers log the
    /// error and proceed, the user is signed out locally either way.
    ///
    /// # Errors
    /// Returns a [`SessionError`] if the service is unreachable or rejects
    /// the request.
    pub async fn sign_out(&self, token: &SecretString) -> Result<(), SessionError> {
        let url = self.endpoint("v1/session/signout")?;

        let response = self
            .client
            .post(url)
            .bearer_auth(token.expose_secret())
            .send()
            .await
            .map_err(|err| SessionError::Network(err.to_string()))?;

        let status = response.status();
        // A session the service no longer knows about is already signed out.
        if status.is_success() || status == StatusCode::NOT_FOUND {
            debug!("session terminated");
            Ok(())
        } else {
            Err(SessionError::Http {
                status: status.as_u16(),
            })
        }
    }

    fn endpoint(&self, path: &str) -> Result<Url, SessionError> {
        self.base_url.join(path).map_err(|err| {
            error!("invalid session service endpoint: {err}");
            SessionError::Parse(err.to_string())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> SessionClient {
        let base = Url::parse("https://session.sano.dev").expect("valid base url");
        SessionClient::new(base).expect("client builds")
    }

    #[tokio::test]
    async fn rejects_non_ulid_token_without_network() {
        let token = SecretString::from("definitely-not-a-ulid");
        let result = client().get_session(&token).await;
        assert!(matches!(result, Err(SessionError::InvalidToken)));
    }

    #[tokio::test]
    async fn rejects_empty_token_without_network() {
        let token = SecretString::from("");
        let result = client().get_session(&token).await;
        assert!(matches!(result, Err(SessionError::InvalidToken)));
    }

    #[test]
    fn endpoints_join_against_base() {
        let url = client().endpoint("v1/session/exchange").expect("joins");
        assert_eq!(url.as_str(), "https://session.sano.dev/v1/session/exchange");
    }
}
