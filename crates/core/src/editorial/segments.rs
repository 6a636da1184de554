use std::ops::Range;

use once_cell::sync::Lazy;
use regex::Regex;

/// Language assumed for a fence without a label.
pub const DEFAULT_CODE_LANGUAGE: &str = "java";

static FENCE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"```(\w+)?\n?((?s:.*?))```").expect("fence pattern should compile")
});

/// A span of the editorial body, either prose or a fenced code block.
///
/// `range` is the byte range of the body the segment covers; for code it
/// includes the fence delimiters and the language label.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ContentSegment {
    Text {
        text: String,
        range: Range<usize>,
    },
    Code {
        language: String,
        code: String,
        range: Range<usize>,
    },
}

impl ContentSegment {
    #[must_use]
    pub fn range(&self) -> Range<usize> {
        match self {
            Self::Text { range, .. } | Self::Code { range, .. } => range.clone(),
        }
    }

    /// Prose text or raw code, without fences.
    #[must_use]
    pub fn content(&self) -> &str {
        match self {
            Self::Text { text, .. } => text,
            Self::Code { code, .. } => code,
        }
    }

    #[must_use]
    pub fn is_code(&self) -> bool {
        matches!(self, Self::Code { .. })
    }
}

/// Split a body into alternating text and code segments.
///
/// Every complete fence becomes exactly one code segment, empty or not.
/// Every non-empty span between fences becomes one text segment holding the
/// span verbatim. An unterminated fence stays part of the surrounding text.
#[must_use]
pub fn split_segments(body: &str) -> Vec<ContentSegment> {
    let mut segments = Vec::new();
    let mut cursor = 0;

    for caps in FENCE.captures_iter(body) {
        let Some(fence) = caps.get(0) else {
            continue;
        };
        if fence.start() > cursor {
            segments.push(ContentSegment::Text {
                text: body[cursor..fence.start()].to_string(),
                range: cursor..fence.start(),
            });
        }

        let language = caps
            .get(1)
            .map_or_else(|| DEFAULT_CODE_LANGUAGE.to_string(), |m| m.as_str().to_lowercase());
        let code = caps.get(2).map_or("", |m| m.as_str()).to_string();
        segments.push(ContentSegment::Code {
            language,
            code,
            range: fence.range(),
        });
        cursor = fence.end();
    }

    if cursor < body.len() {
        segments.push(ContentSegment::Text {
            text: body[cursor..].to_string(),
            range: cursor..body.len(),
        });
    }

    segments
}

#[cfg(test)]
mod tests {
    use super::*;

    fn count_code(segments: &[ContentSegment]) -> usize {
        segments.iter().filter(|s| s.is_code()).count()
    }

    #[test]
    fn text_only_body_is_one_segment() {
        let segments = split_segments("Just prose.\nMore prose.");
        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].content(), "Just prose.\nMore prose.");
        assert_eq!(segments[0].range(), 0..23);
    }

    #[test]
    fn empty_body_has_no_segments() {
        assert!(split_segments("").is_empty());
    }

    #[test]
    fn labels_are_lowercased_and_default_to_java() {
        let body = "Intro\n```Python\nprint(1)\n```\nMiddle\n```\nint x;\n```";
        let segments = split_segments(body);
        assert_eq!(segments.len(), 4);
        assert_eq!(
            segments[1],
            ContentSegment::Code {
                language: "python".into(),
                code: "print(1)\n".into(),
                range: 6..28,
            }
        );
        match &segments[3] {
            ContentSegment::Code { language, code, .. } => {
                assert_eq!(language, "java");
                assert_eq!(code, "int x;\n");
            }
            other => panic!("expected code, got {other:?}"),
        }
    }

    #[test]
    fn every_fence_yields_a_code_segment_even_when_empty() {
        let body = "a```cpp\n```b``````c";
        let segments = split_segments(body);
        assert_eq!(count_code(&segments), 2);
        let texts: Vec<&str> = segments
            .iter()
            .filter(|s| !s.is_code())
            .map(ContentSegment::content)
            .collect();
        assert_eq!(texts, vec!["a", "b", "c"]);
    }

    #[test]
    fn adjacent_fences_produce_no_empty_text_between() {
        let segments = split_segments("```js\n1```\n```js\n2```");
        assert_eq!(segments.len(), 3);
        assert_eq!(segments[1].content(), "\n");
    }

    #[test]
    fn unterminated_fence_stays_text() {
        let segments = split_segments("before\n```java\nnever closed");
        assert_eq!(segments.len(), 1);
        assert!(!segments[0].is_code());
    }

    #[test]
    fn ranges_tile_the_body_and_contents_reconstruct_it() {
        let body = "# Title\n\nSome text\n```java\nclass A {}\n```\nmid\n```\nx\n```\ntail";
        let segments = split_segments(body);
        assert_eq!(count_code(&segments), 2);

        let mut expected_start = 0;
        for segment in &segments {
            assert_eq!(segment.range().start, expected_start);
            expected_start = segment.range().end;
        }
        assert_eq!(expected_start, body.len());

        let joined: String = segments.iter().map(ContentSegment::content).collect();
        assert_eq!(joined, "# Title\n\nSome text\nclass A {}\n\nmid\nx\n\ntail");
    }
}
