//! Parsing of the existing output file into typed line records.

use regex::Regex;

/// Marker that comments out an entry.
pub const COMMENT_MARKER: &str = "#";

/// Key and value of a `key=value` line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub name: String,
    pub value: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineState {
    Unclassified,
    Inactive,
    Active,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind {
    /// Blank lines, free comments, anything not matching the line format.
    Unclassified,
    /// Commented out `#key=value`.
    Inactive(Entry),
    /// Live `key=value`.
    Active(Entry),
}

/// One physical line of the output file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineRecord {
    pub line: String,
    pub kind: LineKind,
}

impl LineRecord {
    pub fn state(&self) -> LineState {
        match self.kind {
            LineKind::Unclassified => LineState::Unclassified,
            LineKind::Inactive(_) => LineState::Inactive,
            LineKind::Active(_) => LineState::Active,
        }
    }

    pub fn entry(&self) -> Option<&Entry> {
        match &self.kind {
            LineKind::Unclassified => None,
            LineKind::Inactive(entry) | LineKind::Active(entry) => Some(entry),
        }
    }

    pub fn name(&self) -> Option<&str> {
        self.entry().map(|e| e.name.as_str())
    }
}

/// Classify a single line with `line_format` (groups: marker, key, value).
pub fn classify_line(line: &str, line_format: &Regex) -> LineRecord {
    let kind = match line_format.captures(line) {
        None => LineKind::Unclassified,
        Some(caps) => {
            let group = |i: usize| caps.get(i).map_or("", |m| m.as_str()).to_string();
            let entry = Entry {
                name: group(2),
                value: group(3),
            };
            // Only a single marker counts; "##key=value" is still live.
            if caps.get(1).map(|m| m.as_str()) == Some(COMMENT_MARKER) {
                LineKind::Inactive(entry)
            } else {
                LineKind::Active(entry)
            }
        }
    };

    LineRecord {
        line: line.to_string(),
        kind,
    }
}

/// Split `content` on `\n` and classify every line. Trailing empty lines
/// are dropped; blank lines in the middle are kept as unclassified.
pub fn classify(content: &str, line_format: &Regex) -> Vec<LineRecord> {
    let mut lines: Vec<&str> = content.split('\n').collect();
    while lines.last().is_some_and(|line| line.is_empty()) {
        lines.pop();
    }

    lines
        .into_iter()
        .map(|line| classify_line(line, line_format))
        .collect()
}
