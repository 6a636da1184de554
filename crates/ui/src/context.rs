use std::sync::Arc;

use codepulse_core::model::{Theme, User};
use dioxus::prelude::*;
use services::{AuthService, EditorialService, PreferencesService, SessionService, SessionState};

pub trait UiApp: Send + Sync {
    fn session(&self) -> Arc<SessionService>;
    fn preferences(&self) -> Arc<PreferencesService>;
    fn auth(&self) -> Arc<AuthService>;
    fn editorial(&self) -> Arc<EditorialService>;
}

#[derive(Clone)]
pub struct AppContext {
    session: Arc<SessionService>,
    preferences: Arc<PreferencesService>,
    auth: Arc<AuthService>,
    editorial: Arc<EditorialService>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            session: app.session(),
            preferences: app.preferences(),
            auth: app.auth(),
            editorial: app.editorial(),
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

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}

/// Session as seen by the router: unknown until the stored one is restored.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SessionStatus {
    #[default]
    Restoring,
    Ready(SessionState),
}

impl SessionStatus {
    #[must_use]
    pub fn is_restoring(&self) -> bool {
        matches!(self, Self::Restoring)
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Ready(state) if state.is_authenticated())
    }

    #[must_use]
    pub fn user(&self) -> Option<&User> {
        match self {
            Self::Ready(state) => state.user(),
            Self::Restoring => None,
        }
    }
}

/// Reactive state shared by every screen.
#[derive(Clone, Copy)]
pub struct UiState {
    pub session: Signal<SessionStatus>,
    pub theme: Signal<Theme>,
}

/// Provide fresh shared state to the subtree.
pub fn use_ui_state_provider(session: SessionStatus, theme: Theme) -> UiState {
    use_context_provider(|| UiState {
        session: Signal::new(session),
        theme: Signal::new(theme),
    })
}

#[must_use]
pub fn use_ui_state() -> UiState {
    use_context::<UiState>()
}
