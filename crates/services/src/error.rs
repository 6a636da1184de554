//! Shared error types for the services crate.

use thiserror::Error;

use codepulse_core::auth::FormErrors;
use storage::repository::StorageError;
use storage::sqlite::SqliteInitError;

/// Errors emitted while fetching an editorial.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum EditorialError {
    #[error("editorial generation is not configured")]
    Disabled,
    #[error("completions API returned an empty response")]
    EmptyResponse,
    #[error("completions request failed with status {0}")]
    HttpStatus(reqwest::StatusCode),
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

/// Errors emitted by `AuthService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AuthError {
    #[error("the form has invalid fields")]
    Validation(FormErrors),
    #[error("Google sign-in failed. Please try again.")]
    IdentityProvider,
}

/// Errors emitted by the session gate.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SessionError {
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Errors emitted while bootstrapping app services.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppServicesError {
    #[error(transparent)]
    Sqlite(#[from] SqliteInitError),
    #[error(transparent)]
    Storage(#[from] StorageError),
}
