use once_cell::sync::Lazy;
use regex::Regex;

use super::symbols::symbol_for;

// Alternatives are tried leftmost-first, so at one position inline code beats
// math, math beats a bare command, and bold beats italic.
static INLINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r"`(?P<code>[^`]+)`",
        r"|\\\((?P<math>.+?)\\\)",
        r"|\\(?P<cmd>[A-Za-z]+)",
        r"|\{(?P<group>[^{}]+)\}",
        r"|\[(?P<cite>\d+)\]",
        r"|\*\*(?P<bold>[^*]+)\*\*",
        r"|\*(?P<italic>[^*]+)\*",
    ))
    .expect("inline pattern should compile")
});

/// Inline span of a heading, bullet or paragraph.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Inline {
    Text(String),
    Code(String),
    /// `\( ... \)`
    Math(Vec<Inline>),
    /// `\command`; `glyph` is `None` for commands outside the symbol table,
    /// which render as their literal source.
    Symbol {
        command: String,
        glyph: Option<&'static str>,
    },
    /// `{ ... }`
    Group(Vec<Inline>),
    Bold(Vec<Inline>),
    Italic(Vec<Inline>),
}

/// Split a line of prose into inline spans.
///
/// Double backslashes collapse to one first, and `[n]` citation markers are
/// dropped.
#[must_use]
pub fn tokenize_inline(text: &str) -> Vec<Inline> {
    let text = text.replace("\\\\", "\\");
    tokenize(&text)
}

fn tokenize(text: &str) -> Vec<Inline> {
    let mut spans = Vec::new();
    let mut cursor = 0;

    for caps in INLINE.captures_iter(text) {
        let Some(whole) = caps.get(0) else {
            continue;
        };
        push_text(&mut spans, &text[cursor..whole.start()]);
        cursor = whole.end();

        if let Some(code) = caps.name("code") {
            spans.push(Inline::Code(code.as_str().to_string()));
        } else if let Some(math) = caps.name("math") {
            spans.push(Inline::Math(tokenize(math.as_str())));
        } else if let Some(command) = caps.name("cmd") {
            spans.push(Inline::Symbol {
                command: command.as_str().to_string(),
                glyph: symbol_for(command.as_str()),
            });
        } else if let Some(group) = caps.name("group") {
            spans.push(Inline::Group(tokenize(group.as_str())));
        } else if caps.name("cite").is_some() {
            // dropped
        } else if let Some(bold) = caps.name("bold") {
            spans.push(Inline::Bold(tokenize(bold.as_str())));
        } else if let Some(italic) = caps.name("italic") {
            spans.push(Inline::Italic(tokenize(italic.as_str())));
        }
    }

    push_text(&mut spans, &text[cursor..]);
    spans
}

fn push_text(spans: &mut Vec<Inline>, text: &str) {
    if text.is_empty() {
        return;
    }
    if let Some(Inline::Text(previous)) = spans.last_mut() {
        previous.push_str(text);
    } else {
        spans.push(Inline::Text(text.to_string()));
    }
}

/// Flatten spans to the text a reader would see, without styling.
#[must_use]
pub fn plain_text(spans: &[Inline]) -> String {
    let mut out = String::new();
    write_plain(spans, &mut out);
    out
}

fn write_plain(spans: &[Inline], out: &mut String) {
    for span in spans {
        match span {
            Inline::Text(text) | Inline::Code(text) => out.push_str(text),
            Inline::Symbol { command, glyph } => match glyph {
                Some(glyph) => out.push_str(glyph),
                None => {
                    out.push('\\');
                    out.push_str(command);
                }
            },
            Inline::Group(inner) => {
                out.push('{');
                write_plain(inner, out);
                out.push('}');
            }
            Inline::Math(inner) | Inline::Bold(inner) | Inline::Italic(inner) => {
                write_plain(inner, out);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> Inline {
        Inline::Text(s.to_string())
    }

    #[test]
    fn plain_line_is_single_text_span() {
        assert_eq!(tokenize_inline("nothing special"), vec![text("nothing special")]);
        assert!(tokenize_inline("").is_empty());
    }

    #[test]
    fn bold_italic_and_code() {
        let spans = tokenize_inline("Use **two pointers** and *then* call `solve()`.");
        assert_eq!(
            spans,
            vec![
                text("Use "),
                Inline::Bold(vec![text("two pointers")]),
                text(" and "),
                Inline::Italic(vec![text("then")]),
                text(" call "),
                Inline::Code("solve()".into()),
                text("."),
            ]
        );
    }

    #[test]
    fn known_and_unknown_commands() {
        let spans = tokenize_inline(r"i \leq n \overline x");
        assert_eq!(
            spans,
            vec![
                text("i "),
                Inline::Symbol { command: "leq".into(), glyph: Some("≤") },
                text(" n "),
                Inline::Symbol { command: "overline".into(), glyph: None },
                text(" x"),
            ]
        );
        assert_eq!(plain_text(&spans), r"i ≤ n \overline x");
    }

    #[test]
    fn double_backslashes_collapse_before_matching() {
        let spans = tokenize_inline(r"O(\\log n)");
        assert_eq!(plain_text(&spans), "O(log n)");
    }

    #[test]
    fn math_and_groups_nest() {
        let spans = tokenize_inline(r"\(\lfloor n/2 \rfloor\) and x^{2}");
        assert_eq!(
            spans[0],
            Inline::Math(vec![
                Inline::Symbol { command: "lfloor".into(), glyph: Some("⌊") },
                text(" n/2 "),
                Inline::Symbol { command: "rfloor".into(), glyph: Some("⌋") },
            ])
        );
        assert_eq!(spans[2], Inline::Group(vec![text("2")]));
        assert_eq!(plain_text(&spans), "⌊ n/2 ⌋ and x^{2}");
    }

    #[test]
    fn citation_markers_are_removed() {
        let spans = tokenize_inline("Known result[1][23].");
        assert_eq!(spans, vec![text("Known result.")]);
    }

    #[test]
    fn code_span_keeps_backslashes_and_stars() {
        let spans = tokenize_inline(r"`a*b\n`");
        assert_eq!(spans, vec![Inline::Code(r"a*b\n".into())]);
    }

    #[test]
    fn formatting_commands_leave_their_argument() {
        let spans = tokenize_inline(r"\text{max}");
        assert_eq!(plain_text(&spans), "{max}");
    }

    #[test]
    fn lone_asterisk_is_text() {
        assert_eq!(tokenize_inline("a * b"), vec![text("a * b")]);
    }
}
