//! Three-way merge between source tokens and the existing output lines.
//!
//! Existing lines are never reordered or removed. Only the comment marker of
//! entries is toggled, and new entries are appended after the last line.

use std::collections::HashSet;

use super::classify::{COMMENT_MARKER, LineKind, LineRecord};
use super::humanize::token_to_message;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeKind {
    /// New entry appended.
    Append,
    /// Active entry commented out.
    Deactivate,
    /// Inactive entry uncommented.
    Activate,
}

impl ChangeKind {
    pub fn label(self) -> &'static str {
        match self {
            ChangeKind::Append => "APPEND",
            ChangeKind::Deactivate => "DEACTIVATE",
            ChangeKind::Activate => "ACTIVATE",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Change {
    pub kind: ChangeKind,
    pub token: String,
}

/// Output of [`reconcile`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Reconciliation {
    pub lines: Vec<String>,
    /// Appends first, then deactivations, then activations.
    pub changes: Vec<Change>,
}

impl Reconciliation {
    pub fn count(&self, kind: ChangeKind) -> usize {
        self.changes.iter().filter(|c| c.kind == kind).count()
    }
}

/// Merge `tokens` found in source against the classified `records`.
///
/// - Tokens with no entry (active or inactive) are appended as
///   `token=<humanized token>`, once each, in the order of `tokens`.
/// - Active entries whose name is neither in `tokens` nor in
///   `no_deactivate` get a leading `#`.
/// - Inactive entries whose name is in `tokens` lose their first `#`.
pub fn reconcile(
    tokens: &[String],
    records: &[LineRecord],
    no_deactivate: &[String],
) -> Reconciliation {
    let referenced: HashSet<&str> = tokens.iter().map(String::as_str).collect();
    let exempt: HashSet<&str> = no_deactivate.iter().map(String::as_str).collect();
    let known: HashSet<&str> = records.iter().filter_map(LineRecord::name).collect();

    let mut appended: HashSet<&str> = HashSet::new();
    let additions: Vec<&str> = tokens
        .iter()
        .map(String::as_str)
        .filter(|token| !known.contains(token) && appended.insert(*token))
        .collect();

    let mut changes: Vec<Change> = additions
        .iter()
        .map(|token| Change {
            kind: ChangeKind::Append,
            token: token.to_string(),
        })
        .collect();
    let mut deactivations = Vec::new();
    let mut activations = Vec::new();

    let mut lines: Vec<String> = records
        .iter()
        .map(|record| match &record.kind {
            LineKind::Active(entry)
                if !referenced.contains(entry.name.as_str())
                    && !exempt.contains(entry.name.as_str()) =>
            {
                deactivations.push(Change {
                    kind: ChangeKind::Deactivate,
                    token: entry.name.clone(),
                });
                format!("{}{}", COMMENT_MARKER, record.line)
            }
            LineKind::Inactive(entry) if referenced.contains(entry.name.as_str()) => {
                activations.push(Change {
                    kind: ChangeKind::Activate,
                    token: entry.name.clone(),
                });
                record.line.replacen(COMMENT_MARKER, "", 1)
            }
            _ => record.line.clone(),
        })
        .collect();

    lines.extend(
        additions
            .iter()
            .map(|token| format!("{}={}", token, token_to_message(token))),
    );

    changes.extend(deactivations);
    changes.extend(activations);

    Reconciliation { lines, changes }
}
