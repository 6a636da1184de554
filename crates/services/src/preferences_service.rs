use std::sync::Arc;

use codepulse_core::model::Theme;
use storage::keys;
use storage::repository::{KeyValueStore, StorageError};

#[derive(Clone)]
pub struct PreferencesService {
    kv: Arc<dyn KeyValueStore>,
}

impl PreferencesService {
    #[must_use]
    pub fn new(kv: Arc<dyn KeyValueStore>) -> Self {
        Self { kv }
    }

    /// Stored theme; missing or unreadable values mean light.
    pub async fn theme(&self) -> Theme {
        match self.kv.get(keys::DARK_MODE).await {
            Ok(Some(raw)) => match serde_json::from_str::<bool>(&raw) {
                Ok(dark) => Theme::from_dark_flag(dark),
                Err(err) => {
                    tracing::warn!(error = %err, value = %raw, "ignoring malformed theme value");
                    Theme::Light
                }
            },
            Ok(None) => Theme::Light,
            Err(err) => {
                tracing::warn!(error = %err, "failed to read theme");
                Theme::Light
            }
        }
    }

    /// Persist the theme.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the value cannot be written.
    pub async fn set_theme(&self, theme: Theme) -> Result<(), StorageError> {
        let raw = if theme.is_dark() { "true" } else { "false" };
        self.kv.set(keys::DARK_MODE, raw).await
    }
}
