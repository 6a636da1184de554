use std::fmt;

use super::ids::ProblemId;

pub const DEFAULT_TITLE: &str = "Unknown Problem";
pub const DEFAULT_TOPIC: &str = "Algorithm";
pub const DEFAULT_DESCRIPTION: &str = "Problem description will be provided in the editorial below.";
pub const UNSTRUCTURED_TITLE: &str = "LeetCode Problem";
pub const UNSTRUCTURED_DESCRIPTION: &str = "Problem details will be provided in the editorial below.";
pub const UNAVAILABLE_DESCRIPTION: &str = "Unable to load problem description at this time.";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    /// Parse the difficulty label an editorial header carries.
    ///
    /// Matching is case-insensitive on the first word, so `"Hard (rated 2100)"`
    /// is accepted.
    #[must_use]
    pub fn parse_label(label: &str) -> Option<Self> {
        let word = label
            .split(|c: char| c.is_whitespace() || c == '(' || c == '/' || c == ',')
            .find(|part| !part.is_empty())?;
        match word.to_ascii_lowercase().as_str() {
            "easy" => Some(Self::Easy),
            "medium" => Some(Self::Medium),
            "hard" => Some(Self::Hard),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Easy => "Easy",
            Self::Medium => "Medium",
            Self::Hard => "Hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Why a placeholder `ProblemInfo` was substituted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FallbackReason {
    /// The reply arrived but carried no header block.
    Unstructured,
    /// The request failed; the screen still needs something to show.
    Unavailable,
}

/// Summary of a problem, derived from the header of an editorial reply.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProblemInfo {
    pub title: String,
    pub difficulty: Difficulty,
    pub topics: Vec<String>,
    pub description: String,
}

impl ProblemInfo {
    /// Placeholder record used when the reply has no header or the request failed.
    #[must_use]
    pub fn fallback(problem_id: &ProblemId, reason: FallbackReason) -> Self {
        let description = match reason {
            FallbackReason::Unstructured => UNSTRUCTURED_DESCRIPTION,
            FallbackReason::Unavailable => UNAVAILABLE_DESCRIPTION,
        };
        Self {
            title: format!("{problem_id}: {UNSTRUCTURED_TITLE}"),
            difficulty: Difficulty::Medium,
            topics: vec![DEFAULT_TOPIC.to_string()],
            description: description.to_string(),
        }
    }

    #[must_use]
    pub fn default_topics() -> Vec<String> {
        vec![DEFAULT_TOPIC.to_string()]
    }
}
