//! Message catalog for user-facing copy.
//!
//! The built-in catalog is English; deployments can override any entry with
//! a JSON file (`--locale-file`), a flat object of `key -> string`. Lookups
//! for unknown keys fall back to the key itself so a missing translation is
//! visible in the page rather than a crash or an empty string.

use anyhow::{Context, Result};
use std::collections::HashMap;
use tracing::debug;

/// Built-in English messages. Keys are shared with the original frontend.
const ENGLISH: &[(&str, &str)] = &[
    ("auth.processingLink", "Processing your sign-in link…"),
    ("auth.loginSuccess", "You are signed in. Taking you to your profile."),
    (
        "auth.linkError",
        "That sign-in link did not work. Sending you back to sign in.",
    ),
    ("auth.authenticating", "Signing you in…"),
    ("auth.createAccount", "Create your profile"),
    ("nav.profile", "Profile"),
    ("nav.signOut", "Sign out"),
    ("nav.signIn", "Sign in"),
    ("nav.signUp", "Sign up"),
];

/// Immutable message catalog, built once at startup.
#[derive(Debug, Clone)]
pub struct Catalog {
    messages: HashMap<String, String>,
}

impl Catalog {
    /// The built-in English catalog.
    #[must_use]
    pub fn default_english() -> Self {
        let messages = ENGLISH
            .iter()
            .map(|(key, value)| ((*key).to_string(), (*value).to_string()))
            .collect();
        Self { messages }
    }

    /// Built-in catalog with entries overridden from a flat JSON object.
    ///
    /// # Errors
    /// Returns an error if the JSON is not an object of strings.
    pub fn from_json(raw: &str) -> Result<Self> {
        let overrides: HashMap<String, String> =
            serde_json::from_str(raw).context("locale file must be a flat JSON string map")?;

        let mut catalog = Self::default_english();
        catalog.messages.extend(overrides);
        Ok(catalog)
    }

    /// Look up a message; unknown keys fall back to the key itself.
    #[must_use]
    pub fn t<'a>(&'a self, key: &'a str) -> &'a str {
        match self.messages.get(key) {
            Some(message) => message,
            None => {
                debug!(key, "missing catalog entry");
                key
            }
        }
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::default_english()
    }
}
