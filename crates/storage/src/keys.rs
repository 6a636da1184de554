//! Well-known keys of the local key-value store.

/// `"true"` while a user is signed in.
pub const IS_AUTHENTICATED: &str = "isAuthenticated";
/// JSON-serialized `User`.
pub const USER: &str = "user";
/// JSON boolean, `true` for the dark theme.
pub const DARK_MODE: &str = "darkMode";
/// Study plan blob owned by the tracker.
pub const STUDY_PLAN: &str = "studyPlan";
/// Per-problem notes blob owned by the tracker.
pub const PROBLEM_NOTES: &str = "problemNotes";

/// Everything a logout wipes.
pub const SESSION_KEYS: [&str; 5] = [USER, IS_AUTHENTICATED, DARK_MODE, STUDY_PLAN, PROBLEM_NOTES];
