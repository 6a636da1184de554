use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Unique identifier for a signed-in user.
///
/// Locally created accounts use a millisecond timestamp, identity-provider
/// accounts use the provider's subject claim, so the value is kept as text.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct UserId(String);

impl UserId {
    /// Creates a new `UserId`
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the underlying value
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// Older stored records carry the id as a JSON number.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawUserId {
    Text(String),
    Number(i64),
}

impl<'de> Deserialize<'de> for UserId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match RawUserId::deserialize(deserializer)? {
            RawUserId::Text(text) => Self(text),
            RawUserId::Number(number) => Self(number.to_string()),
        })
    }
}

/// Identifier of a coding problem as it appears in the editorial route.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ProblemId(String);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ProblemIdError {
    #[error("problem id is empty")]
    Empty,
}

impl ProblemId {
    /// Parse a route parameter into a `ProblemId`.
    ///
    /// # Errors
    ///
    /// Returns `ProblemIdError::Empty` when the value is blank.
    pub fn parse(raw: &str) -> Result<Self, ProblemIdError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ProblemIdError::Empty);
        }
        Ok(Self(trimmed.to_string()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "UserId({})", self.0)
    }
}

impl fmt::Debug for ProblemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ProblemId({})", self.0)
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Display for ProblemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for ProblemId {
    type Err = ProblemIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn problem_id_trims_route_value() {
        let id = ProblemId::parse("  two-sum ").unwrap();
        assert_eq!(id.as_str(), "two-sum");
        assert_eq!(id.to_string(), "two-sum");
    }

    #[test]
    fn problem_id_rejects_blank() {
        assert_eq!(ProblemId::parse("   "), Err(ProblemIdError::Empty));
        assert!("".parse::<ProblemId>().is_err());
    }

    #[test]
    fn user_id_accepts_numeric_json() {
        let id: UserId = serde_json::from_str("1700000000000").unwrap();
        assert_eq!(id, UserId::new("1700000000000"));
    }

    #[test]
    fn user_id_serializes_as_string() {
        let json = serde_json::to_string(&UserId::new("abc")).unwrap();
        assert_eq!(json, "\"abc\"");
    }
}
