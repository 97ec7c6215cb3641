use crate::{
    api::{self, AppState},
    cli::actions::Action,
    i18n::Catalog,
    session::SessionClient,
};
use anyhow::{Context, Result};
use std::{fs, sync::Arc};

/// Handle the server action
///
/// # Errors
/// Returns an error if the application state cannot be built or the server
/// fails to start
pub async fn handle(action: Action) -> Result<()> {
    match action {
        Action::Server {
            port,
            session_url,
            locale_file,
        } => {
            let catalog = match locale_file {
                Some(path) => {
                    let raw = fs::read_to_string(&path)
                        .with_context(|| format!("Failed to read locale file: {path}"))?;
                    Catalog::from_json(&raw)
                        .with_context(|| format!("Invalid locale file: {path}"))?
                }
                None => Catalog::default_english(),
            };

            let session = SessionClient::new(session_url)?;
            let state = Arc::new(AppState::new(session, catalog));

            api::new(port, state).await?;
        }
    }

    Ok(())
}
