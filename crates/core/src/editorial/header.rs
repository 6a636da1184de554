use once_cell::sync::Lazy;
use regex::Regex;

use crate::model::{
    DEFAULT_DESCRIPTION, DEFAULT_TITLE, Difficulty, ProblemId, ProblemInfo,
};

pub const HEADER_START: &str = "PROBLEM_INFO:";
pub const HEADER_END: &str = "END_PROBLEM_INFO";

static HEADER_BLOCK: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)PROBLEM_INFO:(.*?)END_PROBLEM_INFO\s*").expect("header pattern should compile")
});

/// Labeled values found inside a header block. `None` means the label was
/// absent or had nothing after it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HeaderFields {
    pub title: Option<String>,
    pub difficulty: Option<String>,
    pub topics: Option<Vec<String>>,
    pub description: Option<String>,
}

impl HeaderFields {
    /// Build the displayed record, filling absent fields with defaults.
    #[must_use]
    pub fn into_problem_info(self, problem_id: &ProblemId) -> ProblemInfo {
        let title = self.title.unwrap_or_else(|| DEFAULT_TITLE.to_string());
        ProblemInfo {
            title: format!("{problem_id}: {title}"),
            difficulty: self
                .difficulty
                .as_deref()
                .and_then(Difficulty::parse_label)
                .unwrap_or_default(),
            topics: self
                .topics
                .filter(|topics| !topics.is_empty())
                .unwrap_or_else(ProblemInfo::default_topics),
            description: self
                .description
                .unwrap_or_else(|| DEFAULT_DESCRIPTION.to_string()),
        }
    }
}

/// Result of looking for the header block in a reply.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SplitReply {
    /// `None` when the reply had no header block.
    pub header: Option<HeaderFields>,
    /// Reply text with the header block removed.
    pub body: String,
}

/// Locate the first header block, parse its fields and cut it out of the body.
///
/// With a header the remaining body is trimmed; without one the reply is
/// returned untouched.
#[must_use]
pub fn split_header(reply: &str) -> SplitReply {
    let Some(caps) = HEADER_BLOCK.captures(reply) else {
        return SplitReply {
            header: None,
            body: reply.to_string(),
        };
    };
    let (Some(block), Some(inner)) = (caps.get(0), caps.get(1)) else {
        return SplitReply {
            header: None,
            body: reply.to_string(),
        };
    };

    let mut body = String::with_capacity(reply.len() - block.len());
    body.push_str(&reply[..block.start()]);
    body.push_str(&reply[block.end()..]);

    SplitReply {
        header: Some(parse_fields(inner.as_str())),
        body: body.trim().to_string(),
    }
}

/// Extract the four labeled fields by line prefix. The first line carrying a
/// label wins.
#[must_use]
pub fn parse_fields(block: &str) -> HeaderFields {
    let mut fields = HeaderFields::default();
    for line in block.lines() {
        let line = strip_list_marker(line);
        if fields.title.is_none() {
            fields.title = labeled_value(line, "Title:");
        }
        if fields.difficulty.is_none() {
            fields.difficulty = labeled_value(line, "Difficulty:");
        }
        if fields.topics.is_none() {
            fields.topics = labeled_value(line, "Topics:").map(|raw| split_topics(&raw));
        }
        if fields.description.is_none() {
            fields.description = labeled_value(line, "Description:");
        }
    }
    fields
}

fn strip_list_marker(line: &str) -> &str {
    line.trim_start()
        .trim_start_matches(['-', '*'])
        .trim_start()
}

fn labeled_value(line: &str, label: &str) -> Option<String> {
    let rest = line.strip_prefix(label)?;
    // Tolerate bold labels such as `**Title:** Two Sum`.
    let value = rest.trim_start_matches('*').trim();
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

fn split_topics(raw: &str) -> Vec<String> {
    raw.trim_matches(['[', ']'])
        .split(',')
        .map(str::trim)
        .filter(|topic| !topic.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::UNSTRUCTURED_DESCRIPTION;

    fn id() -> ProblemId {
        ProblemId::parse("1").unwrap()
    }

    #[test]
    fn full_header_round_trips_into_fields() {
        let reply = "PROBLEM_INFO:\nTitle:  Two Sum \nDifficulty: Easy\nTopics: Array, Hash Table\nDescription: Find two numbers adding to target.\nEND_PROBLEM_INFO\n\n## Problem Analysis\nBody";
        let split = split_header(reply);
        let header = split.header.clone().unwrap();
        assert_eq!(header.title.as_deref(), Some("Two Sum"));
        assert_eq!(header.difficulty.as_deref(), Some("Easy"));
        assert_eq!(
            header.topics,
            Some(vec!["Array".to_string(), "Hash Table".to_string()])
        );
        assert_eq!(
            header.description.as_deref(),
            Some("Find two numbers adding to target.")
        );
        assert_eq!(split.body, "## Problem Analysis\nBody");

        let info = header.into_problem_info(&id());
        assert_eq!(info.title, "1: Two Sum");
        assert_eq!(info.difficulty, Difficulty::Easy);
    }

    #[test]
    fn missing_topics_yield_single_default_topic() {
        let reply = "PROBLEM_INFO:\nTitle: Two Sum\nDifficulty: Easy\nDescription: d\nEND_PROBLEM_INFO";
        let info = split_header(reply).header.unwrap().into_problem_info(&id());
        assert_eq!(info.topics, vec!["Algorithm".to_string()]);
    }

    #[test]
    fn missing_fields_use_defaults() {
        let info = split_header("PROBLEM_INFO:\nEND_PROBLEM_INFO\nbody")
            .header
            .unwrap()
            .into_problem_info(&id());
        assert_eq!(info.title, "1: Unknown Problem");
        assert_eq!(info.difficulty, Difficulty::Medium);
        assert_eq!(info.description, DEFAULT_DESCRIPTION);
        assert_ne!(info.description, UNSTRUCTURED_DESCRIPTION);
    }

    #[test]
    fn unknown_difficulty_falls_back_to_medium() {
        let fields = parse_fields("Difficulty: Legendary");
        let info = fields.into_problem_info(&id());
        assert_eq!(info.difficulty, Difficulty::Medium);
    }

    #[test]
    fn tolerates_list_markers_and_bold_labels() {
        let fields = parse_fields("- Title:** Valid Parentheses\n* Topics: [Stack, String]");
        assert_eq!(fields.title.as_deref(), Some("Valid Parentheses"));
        assert_eq!(
            fields.topics,
            Some(vec!["Stack".to_string(), "String".to_string()])
        );
    }

    #[test]
    fn reply_without_header_is_untouched() {
        let split = split_header("  just text\n");
        assert!(split.header.is_none());
        assert_eq!(split.body, "  just text\n");
    }

    #[test]
    fn text_before_header_is_kept() {
        let split = split_header("Intro\nPROBLEM_INFO:\nTitle: X\nEND_PROBLEM_INFO\n\nRest");
        assert_eq!(split.body, "Intro\nRest");
    }
}
