use crate::{i18n::Catalog, session::SessionClient};

/// Shared application state, built once at startup and injected into every
/// handler as an extension. Nothing in it is mutated per request.
#[derive(Debug, Clone)]
pub struct AppState {
    session: SessionClient,
    catalog: Catalog,
}

impl AppState {
    #[must_use]
    pub fn new(session: SessionClient, catalog: Catalog) -> Self {
        Self { session, catalog }
    }

    #[must_use]
    pub fn session(&self) -> &SessionClient {
        &self.session
    }

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }
}
