use std::sync::Arc;
use std::time::Duration;

use codepulse_core::model::AiSettings;
use storage::repository::Storage;

use crate::Clock;
use crate::auth_service::AuthService;
use crate::completions::{Completions, CompletionsClient};
use crate::editorial_service::EditorialService;
use crate::error::AppServicesError;
use crate::preferences_service::PreferencesService;
use crate::session_service::SessionService;

/// Assembles app-facing services over one storage backend.
#[derive(Clone)]
pub struct AppServices {
    session: Arc<SessionService>,
    preferences: Arc<PreferencesService>,
    auth: Arc<AuthService>,
    editorial: Arc<EditorialService>,
}

impl AppServices {
    /// Build services backed by `SQLite` storage and the HTTP completions client.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if storage initialization fails.
    pub async fn new_sqlite(
        db_url: &str,
        clock: Clock,
        ai: AiSettings,
        auth_delay: Duration,
    ) -> Result<Self, AppServicesError> {
        let storage = Storage::sqlite(db_url).await?;
        if !ai.is_enabled() {
            tracing::warn!("CODEPULSE_AI_API_KEY is not set; editorials are disabled");
        }
        let completions: Arc<dyn Completions> = Arc::new(CompletionsClient::new(ai));
        Ok(Self::new(&storage, clock, completions, auth_delay))
    }

    #[must_use]
    pub fn new(
        storage: &Storage,
        clock: Clock,
        completions: Arc<dyn Completions>,
        auth_delay: Duration,
    ) -> Self {
        Self {
            session: Arc::new(SessionService::new(Arc::clone(&storage.kv))),
            preferences: Arc::new(PreferencesService::new(Arc::clone(&storage.kv))),
            auth: Arc::new(AuthService::new(clock, auth_delay)),
            editorial: Arc::new(EditorialService::new(completions)),
        }
    }

    #[must_use]
    pub fn session(&self) -> Arc<SessionService> {
        Arc::clone(&self.session)
    }

    #[must_use]
    pub fn preferences(&self) -> Arc<PreferencesService> {
        Arc::clone(&self.preferences)
    }

    #[must_use]
    pub fn auth(&self) -> Arc<AuthService> {
        Arc::clone(&self.auth)
    }

    #[must_use]
    pub fn editorial(&self) -> Arc<EditorialService> {
        Arc::clone(&self.editorial)
    }
}
