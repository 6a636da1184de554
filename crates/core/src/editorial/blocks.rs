use once_cell::sync::Lazy;
use regex::Regex;

static NUMBERED_HEADING: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d+)\.\s*(.+)$").expect("numbered heading pattern should compile"));
static BULLET: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*[-*]\s+").expect("bullet pattern should compile"));

/// Classification of one line of a prose segment.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Block<'a> {
    Blank,
    Rule,
    /// `1. Problem Analysis`
    NumberedHeading { number: &'a str, title: &'a str },
    /// `#`, `##` or `###` followed by a space.
    Heading { level: u8, text: &'a str },
    Bullet(&'a str),
    Paragraph(&'a str),
}

/// Classify each line of a prose segment.
#[must_use]
pub fn classify_lines(text: &str) -> Vec<Block<'_>> {
    text.lines().map(classify_line).collect()
}

#[must_use]
pub fn classify_line(line: &str) -> Block<'_> {
    let line = line.strip_suffix('\r').unwrap_or(line);
    let trimmed = line.trim();

    if trimmed.is_empty() {
        return Block::Blank;
    }
    if trimmed == "---" {
        return Block::Rule;
    }
    if let Some(caps) = NUMBERED_HEADING.captures(line) {
        if let (Some(number), Some(title)) = (caps.get(1), caps.get(2)) {
            return Block::NumberedHeading {
                number: number.as_str(),
                title: title.as_str(),
            };
        }
    }
    for (level, prefix) in [(3, "### "), (2, "## "), (1, "# ")] {
        if let Some(text) = line.strip_prefix(prefix) {
            return Block::Heading { level, text };
        }
    }
    if let Some(marker) = BULLET.find(line) {
        return Block::Bullet(&line[marker.end()..]);
    }
    Block::Paragraph(line)
}
