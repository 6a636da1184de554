mod ai_settings;
mod ids;
mod problem;
mod theme;
mod user;

pub use ai_settings::{AiSettings, AiSettingsDraft, AiSettingsError, DEFAULT_BASE_URL, DEFAULT_MODEL};
pub use ids::{ProblemId, ProblemIdError, UserId};
pub use problem::{
    DEFAULT_DESCRIPTION, DEFAULT_TITLE, DEFAULT_TOPIC, Difficulty, FallbackReason, ProblemInfo,
    UNAVAILABLE_DESCRIPTION, UNSTRUCTURED_DESCRIPTION,
};
pub use theme::Theme;
pub use user::User;
