//! Command-line argument dispatch.
//!
//! Maps validated CLI arguments to the action the binary executes, validating
//! the session-service URL before the server is allowed to start.

use crate::cli::actions::Action;
use anyhow::{Context, Result};
use url::Url;

/// Map validated CLI matches to a server action.
///
/// # Errors
/// Returns an error if required arguments are missing or malformed.
pub fn handler(matches: &clap::ArgMatches) -> Result<Action> {
    let port = matches.get_one::<u16>("port").copied().unwrap_or(8080);

    let session_url = matches
        .get_one::<String>("session-url")
        .cloned()
        .context("missing required argument: --session-url")?;

    let session_url = Url::parse(&session_url).context("invalid SANO_SESSION_URL")?;

    let locale_file = matches.get_one::<String>("locale-file").cloned();

    Ok(Action::Server {
        port,
        session_url,
        locale_file,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_action_from_args() -> Result<()> {
        temp_env::with_vars([("SANO_PORT", None::<&str>)], || -> Result<()> {
            let command = crate::cli::commands::new();
            let matches = command.get_matches_from(vec![
                "sano",
                "--session-url",
                "https://session.sano.dev",
            ]);
            let action = handler(&matches)?;
            let Action::Server {
                port,
                session_url,
                locale_file,
            } = action;
            assert_eq!(port, 8080);
            assert_eq!(session_url.as_str(), "https://session.sano.dev/");
            assert_eq!(locale_file, None);
            Ok(())
        })
    }

    #[test]
    fn session_url_must_parse() {
        temp_env::with_vars([("SANO_SESSION_URL", None::<&str>)], || {
            let command = crate::cli::commands::new();
            let matches =
                command.get_matches_from(vec!["sano", "--session-url", "not a url at all"]);
            let result = handler(&matches);
            assert!(result.is_err());
            if let Err(err) = result {
                assert!(err.to_string().contains("invalid SANO_SESSION_URL"));
            }
        });
    }
}
