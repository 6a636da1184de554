use std::collections::HashSet;
use std::time::Duration;

use codepulse_core::editorial::{Block, ContentSegment, Editorial, Inline, classify_lines, tokenize_inline};
use codepulse_core::model::{Difficulty, ProblemInfo};
use services::EditorialState;

/// Code with more lines than this gets a line-number gutter.
pub const GUTTER_THRESHOLD: usize = 5;

/// How long a copy button shows "Copied!".
pub const COPY_FEEDBACK: Duration = Duration::from_secs(2);

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProblemInfoVm {
    pub title: String,
    pub difficulty: &'static str,
    pub difficulty_class: &'static str,
    pub topics: Vec<String>,
    pub description: String,
}

#[must_use]
pub fn map_problem_info(info: &ProblemInfo) -> ProblemInfoVm {
    let difficulty_class = match info.difficulty {
        Difficulty::Easy => "difficulty-easy",
        Difficulty::Medium => "difficulty-medium",
        Difficulty::Hard => "difficulty-hard",
    };
    ProblemInfoVm {
        title: info.title.clone(),
        difficulty: info.difficulty.as_str(),
        difficulty_class,
        topics: info.topics.clone(),
        description: info.description.clone(),
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CodeBlockVm {
    /// Index among the editorial's code blocks, used to track copy feedback.
    pub id: usize,
    pub language: String,
    /// Trimmed for display and copying.
    pub code: String,
    /// `1..=n` when the gutter is shown, empty otherwise.
    pub line_numbers: Vec<usize>,
}

impl CodeBlockVm {
    #[must_use]
    pub fn new(id: usize, language: &str, raw_code: &str) -> Self {
        let code = raw_code.trim().to_string();
        let line_count = code.split('\n').count();
        let line_numbers = if line_count > GUTTER_THRESHOLD {
            (1..=line_count).collect()
        } else {
            Vec::new()
        };
        Self {
            id,
            language: language.to_string(),
            code,
            line_numbers,
        }
    }

    #[must_use]
    pub fn has_gutter(&self) -> bool {
        !self.line_numbers.is_empty()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SectionVm {
    /// Sanitized HTML for a prose segment.
    Prose(String),
    Code(CodeBlockVm),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EditorialVm {
    pub info: ProblemInfoVm,
    pub sections: Vec<SectionVm>,
    pub error: Option<String>,
}

#[must_use]
pub fn map_editorial(editorial: &Editorial) -> EditorialVm {
    let mut next_code_id = 0;
    let sections = editorial
        .segments
        .iter()
        .map(|segment| match segment {
            ContentSegment::Text { text, .. } => SectionVm::Prose(render_prose(text)),
            ContentSegment::Code { language, code, .. } => {
                let block = CodeBlockVm::new(next_code_id, language, code);
                next_code_id += 1;
                SectionVm::Code(block)
            }
        })
        .collect();
    EditorialVm {
        info: map_problem_info(&editorial.info),
        sections,
        error: None,
    }
}

#[must_use]
pub fn map_editorial_state(state: &EditorialState) -> EditorialVm {
    match state {
        EditorialState::Loaded(editorial) => map_editorial(editorial),
        EditorialState::Failed { info, message } => EditorialVm {
            info: map_problem_info(info),
            sections: Vec::new(),
            error: Some(message.clone()),
        },
    }
}

/// Render one prose segment to sanitized HTML.
#[must_use]
pub fn render_prose(text: &str) -> String {
    let mut html = String::new();
    for block in classify_lines(text) {
        match block {
            Block::Blank => html.push_str(r#"<div class="ed-gap"></div>"#),
            Block::Rule => html.push_str(r#"<hr class="ed-rule">"#),
            Block::NumberedHeading { number, title } => {
                html.push_str(r#"<div class="ed-step"><span class="ed-step-number">"#);
                html.push_str(&ammonia::clean_text(number));
                html.push_str(r#"</span><h2 class="ed-step-title">"#);
                render_inline_into(&tokenize_inline(title), &mut html);
                html.push_str("</h2></div>");
            }
            Block::Heading { level, text } => {
                html.push_str(&format!(r#"<h{level} class="ed-h{level}">"#));
                render_inline_into(&tokenize_inline(text), &mut html);
                html.push_str(&format!("</h{level}>"));
            }
            Block::Bullet(text) => {
                html.push_str(r#"<div class="ed-bullet"><span class="ed-bullet-dot"></span><p>"#);
                render_inline_into(&tokenize_inline(text), &mut html);
                html.push_str("</p></div>");
            }
            Block::Paragraph(text) => {
                html.push_str(r#"<p class="ed-paragraph">"#);
                render_inline_into(&tokenize_inline(text), &mut html);
                html.push_str("</p>");
            }
        }
    }
    sanitize_editorial_html(&html)
}

/// Render inline spans to (unsanitized) HTML with escaped text.
#[must_use]
pub fn render_inline(spans: &[Inline]) -> String {
    let mut html = String::new();
    render_inline_into(spans, &mut html);
    html
}

fn render_inline_into(spans: &[Inline], html: &mut String) {
    for span in spans {
        match span {
            Inline::Text(text) => html.push_str(&ammonia::clean_text(text)),
            Inline::Code(code) => {
                html.push_str(r#"<code class="ed-code">"#);
                html.push_str(&ammonia::clean_text(code));
                html.push_str("</code>");
            }
            Inline::Math(inner) => {
                html.push_str(r#"<span class="ed-math">"#);
                render_inline_into(inner, html);
                html.push_str("</span>");
            }
            Inline::Symbol { glyph: Some(""), .. } => {}
            Inline::Symbol {
                glyph: Some(glyph), ..
            } => {
                html.push_str(r#"<span class="ed-symbol">"#);
                html.push_str(&ammonia::clean_text(glyph));
                html.push_str("</span>");
            }
            Inline::Symbol {
                command,
                glyph: None,
            } => {
                html.push_str(r#"<span class="ed-symbol ed-symbol-unknown">\"#);
                html.push_str(&ammonia::clean_text(command));
                html.push_str("</span>");
            }
            Inline::Group(inner) => {
                html.push_str(r#"<span class="ed-group">{"#);
                render_inline_into(inner, html);
                html.push_str("}</span>");
            }
            Inline::Bold(inner) => {
                html.push_str(r#"<strong class="ed-bold">"#);
                render_inline_into(inner, html);
                html.push_str("</strong>");
            }
            Inline::Italic(inner) => {
                html.push_str(r#"<em class="ed-italic">"#);
                render_inline_into(inner, html);
                html.push_str("</em>");
            }
        }
    }
}

#[must_use]
pub fn sanitize_editorial_html(html: &str) -> String {
    let tags: HashSet<&str> = [
        "div", "span", "p", "h1", "h2", "h3", "hr", "code", "strong", "em",
    ]
    .into_iter()
    .collect();
    let attributes: HashSet<&str> = ["class"].into_iter().collect();

    ammonia::Builder::new()
        .tags(tags)
        .generic_attributes(attributes)
        .clean(html)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use codepulse_core::model::{FallbackReason, ProblemId};

    #[test]
    fn headings_and_bullets_render_with_classes() {
        let html = render_prose("2. Approach\n- use a **map**\n---");
        assert!(html.contains(r#"<div class="ed-step"><span class="ed-step-number">2</span>"#), "{html}");
        assert!(html.contains(r#"<strong class="ed-bold">map</strong>"#), "{html}");
        assert!(html.contains(r#"<hr class="ed-rule">"#), "{html}");
    }

    #[test]
    fn markdown_prefix_wins_over_numbered_heading() {
        let html = render_prose("## 2. Approach");
        assert_eq!(html, r#"<h2 class="ed-h2">2. Approach</h2>"#);
    }

    #[test]
    fn markdown_heading_renders_at_its_level() {
        let html = render_prose("### Edge Cases");
        assert_eq!(html, r#"<h3 class="ed-h3">Edge Cases</h3>"#);
    }

    #[test]
    fn text_is_escaped() {
        let html = render_prose("a <script>alert(1)</script> & b");
        assert!(!html.contains("<script>"), "{html}");
        assert!(html.contains("&lt;script&gt;"), "{html}");
        assert!(html.contains("&amp; b"), "{html}");
    }

    #[test]
    fn symbols_render_glyphs_and_unknown_commands_literally() {
        let html = render_inline(&tokenize_inline(r"\(O(n \log n)\) and \alpha and \foo and \text{x}"));
        assert!(html.contains(r#"<span class="ed-math">"#), "{html}");
        assert!(html.contains(r#"<span class="ed-symbol">α</span>"#), "{html}");
        assert!(html.contains(r#"<span class="ed-symbol ed-symbol-unknown">\foo</span>"#), "{html}");
        assert!(!html.contains("text"), "{html}");
    }

    #[test]
    fn short_code_has_no_gutter() {
        let block = CodeBlockVm::new(0, "java", "\nint x = 1;\n");
        assert_eq!(block.code, "int x = 1;");
        assert!(!block.has_gutter());

        let long = CodeBlockVm::new(1, "python", "a\nb\nc\nd\ne\nf");
        assert_eq!(long.line_numbers, vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn editorial_maps_segments_in_order() {
        let id = ProblemId::parse("1").unwrap();
        let editorial = Editorial::parse(&id, "Intro\n```python\nprint(1)\n```\nOutro\n```\n```");
        let vm = map_editorial(&editorial);
        assert_eq!(vm.info.difficulty_class, "difficulty-medium");
        let kinds: Vec<_> = vm
            .sections
            .iter()
            .map(|section| match section {
                SectionVm::Prose(_) => "prose".to_string(),
                SectionVm::Code(block) => format!("code:{}:{}", block.id, block.language),
            })
            .collect();
        assert_eq!(kinds, ["prose", "code:0:python", "prose", "code:1:java"]);
    }

    #[test]
    fn failed_state_keeps_placeholder_info() {
        let id = ProblemId::parse("7").unwrap();
        let state = EditorialState::Failed {
            info: ProblemInfo::fallback(&id, FallbackReason::Unavailable),
            message: "boom".into(),
        };
        let vm = map_editorial_state(&state);
        assert_eq!(vm.info.title, "7: LeetCode Problem");
        assert_eq!(vm.error.as_deref(), Some("boom"));
        assert!(vm.sections.is_empty());
    }
}
