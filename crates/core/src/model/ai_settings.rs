use thiserror::Error;
use url::Url;

pub const DEFAULT_BASE_URL: &str = "https://api.perplexity.ai";
pub const DEFAULT_MODEL: &str = "sonar-pro";

/// Validated connection settings for the chat-completions provider.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AiSettings {
    api_key: Option<String>,
    model: Option<String>,
    base_url: Option<String>,
}

#[derive(Clone, Debug, Default)]
pub struct AiSettingsDraft {
    pub api_key: Option<String>,
    pub model: Option<String>,
    pub base_url: Option<String>,
}

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AiSettingsError {
    #[error("invalid base URL")]
    InvalidBaseUrl,
}

impl AiSettingsDraft {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate and normalize the draft.
    ///
    /// # Errors
    ///
    /// Returns `AiSettingsError` if the base URL is present but invalid.
    pub fn validate(self) -> Result<AiSettings, AiSettingsError> {
        let api_key = normalize_optional(self.api_key);
        let model = normalize_optional(self.model);
        let base_url = normalize_optional(self.base_url);

        if let Some(url) = base_url.as_ref() {
            let parsed = Url::parse(url).map_err(|_| AiSettingsError::InvalidBaseUrl)?;
            if !matches!(parsed.scheme(), "http" | "https") {
                return Err(AiSettingsError::InvalidBaseUrl);
            }
        }

        Ok(AiSettings {
            api_key,
            model,
            base_url,
        })
    }
}

impl AiSettings {
    #[must_use]
    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }

    #[must_use]
    pub fn model(&self) -> &str {
        self.model.as_deref().unwrap_or(DEFAULT_MODEL)
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        self.base_url
            .as_deref()
            .unwrap_or(DEFAULT_BASE_URL)
            .trim_end_matches('/')
    }

    /// Completions are only attempted when a key is configured.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.api_key.is_some()
    }
}

fn normalize_optional(value: Option<String>) -> Option<String> {
    value
        .map(|val| val.trim().to_string())
        .filter(|val| !val.is_empty())
}
