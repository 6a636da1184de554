#![forbid(unsafe_code)]

pub mod app_services;
pub mod auth_service;
pub mod completions;
pub mod editorial_service;
pub mod error;
pub mod preferences_service;
pub mod session_service;

pub use codepulse_core::Clock;

pub use app_services::AppServices;
pub use auth_service::{AuthService, DEFAULT_AUTH_DELAY, IdentityClaims, avatar_url};
pub use completions::{Completions, CompletionsClient, ai_settings_from_env};
pub use editorial_service::{EditorialRequests, EditorialService, EditorialState, RequestTicket};
pub use error::{AppServicesError, AuthError, EditorialError, SessionError};
pub use preferences_service::PreferencesService;
pub use session_service::{SessionService, SessionState};
