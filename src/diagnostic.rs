//! Diagnostics reported by lint rules and corrections applied by the
//! rewriter.

use std::cmp::Ordering;
use std::fmt;
use std::path::PathBuf;

use colored::Colorize;
use serde::{Deserialize, Serialize};

use crate::location::{Location, SourceRange};

/// Details on the violated rule.
pub trait Violation {
    /// Name of the rule.
    fn name(&self) -> String;
    /// Explanation of the rule.
    fn body(&self) -> String;
    /// Optional suggestion for how to fix the violation.
    fn suggestion(&self) -> Option<String> {
        None
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ViolationData {
    pub name: String,
    pub body: String,
    pub suggestion: Option<String>,
}

impl<T: Violation> From<T> for ViolationData {
    fn from(value: T) -> Self {
        Self {
            name: Violation::name(&value),
            body: Violation::body(&value),
            suggestion: Violation::suggestion(&value),
        }
    }
}

/// The object that is eventually reported to the caller, one per flagged
/// occurrence.
///
/// `range.start()` is the position a human should be pointed at: the
/// declaration's introducing keyword, the attribute token, or the end of the
/// base identifier before `.init`. It is never the start of an enclosing
/// construct.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// The name and description of the violated rule.
    pub message: ViolationData,
    pub filename: PathBuf,
    pub range: SourceRange,
    /// Derived (row, column); filled in once per file after collection.
    pub location: Option<Location>,
}

impl Diagnostic {
    pub fn new<T: Into<ViolationData>>(message: T, range: SourceRange) -> Self {
        Self {
            message: message.into(),
            range,
            location: None,
            filename: "".into(),
        }
    }

    /// The offset the diagnostic points at.
    pub fn position(&self) -> usize {
        self.range.start()
    }
}

impl Ord for Diagnostic {
    fn cmp(&self, other: &Self) -> Ordering {
        // Compare first by filename, then by range
        match self.filename.cmp(&other.filename) {
            Ordering::Equal => self.range.cmp(&other.range),
            other => other,
        }
    }
}

impl PartialOrd for Diagnostic {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let location = self.location.unwrap_or_default();
        write!(
            f,
            "{} [{}:{}] {} {}",
            self.filename.to_string_lossy().white().bold(),
            location.row(),
            location.column(),
            self.message.name.red().bold(),
            self.message.body
        )
    }
}

/// One applied rewrite: the position detection flagged and the replacement
/// text the node was rewritten to (outer trivia excluded).
///
/// For any input, correction positions are a subset of detection positions;
/// disabled regions only ever shrink that subset.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Correction {
    pub position: usize,
    pub replacement: String,
}
