//! Line classifier for generated Markdown-like text
//!
//! Every line is classified independently, in this order:
//!
//! 1. `## ` prefix: level 2 heading
//! 2. `# ` prefix: level 1 heading
//! 3. wrapped in `**`: emphasized paragraph
//! 4. trimmed line starts with `* ` or `- `: bullet item
//! 5. trimmed line starts with digits, `.` and whitespace: numbered item
//! 6. anything else, including blank lines: paragraph
//!
//! There is no inline parsing and no grouping across lines.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

static NUMBERED_ITEM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+)\.\s(.*)$").expect("numbered item regex is valid"));

/// A typed display block produced from one line of text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ContentBlock {
    Heading { level: u8, text: String },
    /// Standalone bold line, markers stripped
    Emphasis { text: String },
    BulletItem { text: String },
    /// `number` is kept for display; `text` has the `N. ` prefix stripped
    NumberedItem { number: String, text: String },
    /// Plain text; an empty string is a blank line
    Paragraph { text: String },
}

impl ContentBlock {
    /// Text of the block without its structural marker
    pub fn text(&self) -> &str {
        match self {
            ContentBlock::Heading { text, .. }
            | ContentBlock::Emphasis { text }
            | ContentBlock::BulletItem { text }
            | ContentBlock::NumberedItem { text, .. }
            | ContentBlock::Paragraph { text } => text,
        }
    }
}

/// Classify a single line
pub fn classify_line(line: &str) -> ContentBlock {
    if let Some(rest) = line.strip_prefix("## ") {
        return ContentBlock::Heading {
            level: 2,
            text: rest.to_string(),
        };
    }
    if let Some(rest) = line.strip_prefix("# ") {
        return ContentBlock::Heading {
            level: 1,
            text: rest.to_string(),
        };
    }
    // A bare "**" or "***" would otherwise match with overlapping markers
    if line.len() >= 4 && line.starts_with("**") && line.ends_with("**") {
        return ContentBlock::Emphasis {
            text: line[2..line.len() - 2].to_string(),
        };
    }

    let trimmed = line.trim();
    if let Some(rest) = trimmed
        .strip_prefix("* ")
        .or_else(|| trimmed.strip_prefix("- "))
    {
        return ContentBlock::BulletItem {
            text: rest.to_string(),
        };
    }
    if let Some(caps) = NUMBERED_ITEM.captures(trimmed) {
        return ContentBlock::NumberedItem {
            number: caps[1].to_string(),
            text: caps[2].trim_start().to_string(),
        };
    }

    ContentBlock::Paragraph {
        text: line.to_string(),
    }
}

/// Convert a text block into display blocks, one per line
///
/// Blank lines are kept as empty paragraphs. A trailing `\r` on each line is
/// dropped so CRLF input classifies the same as LF input.
pub fn render_content(text: &str) -> Vec<ContentBlock> {
    text.split('\n')
        .map(|line| classify_line(line.strip_suffix('\r').unwrap_or(line)))
        .collect()
}
