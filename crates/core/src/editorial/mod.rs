//! Parsing of AI-generated editorials.
//!
//! A reply is cut into an optional header block (problem title, difficulty,
//! topics, description) and a body. The body is split on code fences into
//! [`ContentSegment`]s; prose segments are further classified line by line
//! ([`Block`]) and tokenized into inline spans ([`Inline`]). Rendering lives in
//! the UI crate.

mod blocks;
mod header;
mod inline;
mod prompt;
mod segments;
mod symbols;

pub use blocks::{Block, classify_line, classify_lines};
pub use header::{HEADER_END, HEADER_START, HeaderFields, SplitReply, parse_fields, split_header};
pub use inline::{Inline, plain_text, tokenize_inline};
pub use prompt::editorial_prompt;
pub use segments::{ContentSegment, DEFAULT_CODE_LANGUAGE, split_segments};
pub use symbols::symbol_for;

use crate::model::{FallbackReason, ProblemId, ProblemInfo};

/// A parsed editorial ready for rendering.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Editorial {
    pub problem_id: ProblemId,
    pub info: ProblemInfo,
    pub body: String,
    pub segments: Vec<ContentSegment>,
}

impl Editorial {
    /// Parse a completions reply for `problem_id`.
    ///
    /// Replies that ignore the header format still produce an editorial, with
    /// the placeholder problem info.
    #[must_use]
    pub fn parse(problem_id: &ProblemId, reply: &str) -> Self {
        let SplitReply { header, body } = split_header(reply);
        let info = match header {
            Some(fields) => fields.into_problem_info(problem_id),
            None => ProblemInfo::fallback(problem_id, FallbackReason::Unstructured),
        };
        let segments = split_segments(&body);
        Self {
            problem_id: problem_id.clone(),
            info,
            body,
            segments,
        }
    }

    #[must_use]
    pub fn code_blocks(&self) -> impl Iterator<Item = &ContentSegment> {
        self.segments.iter().filter(|segment| segment.is_code())
    }
}
