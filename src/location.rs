//! Byte offsets, source ranges, and the offset to (row, column) converter.

use serde::{Deserialize, Serialize};

/// Sourcecode location.
///
/// The row is 1-indexed, the column 0-indexed, matching how editors are
/// usually pointed at a diagnostic.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Location {
    row: usize,
    column: usize,
}

impl Location {
    pub fn new(row: usize, column: usize) -> Self {
        Location { row, column }
    }

    pub fn row(&self) -> usize {
        self.row
    }

    pub fn column(&self) -> usize {
        self.column
    }
}

/// Half-open `[start, end)` interval of byte offsets.
///
/// Used both for diagnostic ranges and for disabled regions supplied by the
/// external suppression resolver.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SourceRange {
    start: usize,
    end: usize,
}

impl SourceRange {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// A zero-width range, for diagnostics that point between two tokens.
    pub fn empty_at(position: usize) -> Self {
        Self {
            start: position,
            end: position,
        }
    }

    pub fn start(&self) -> usize {
        self.start
    }

    pub fn end(&self) -> usize {
        self.end
    }

    pub fn contains(&self, position: usize) -> bool {
        self.start <= position && position < self.end
    }
}

/// Index of newline positions in a source buffer, for offset to (row, column)
/// conversion. Built once per file, queried per diagnostic.
#[derive(Debug, Clone)]
pub struct LineIndex {
    newlines: Vec<usize>,
}

impl LineIndex {
    pub fn new(contents: &str) -> Self {
        Self {
            newlines: contents.match_indices('\n').map(|(i, _)| i).collect(),
        }
    }

    /// The row is 1 + the number of newline characters strictly before
    /// `offset`; the column is the distance from the last of those newlines.
    pub fn location(&self, offset: usize) -> Location {
        let before = self.newlines.partition_point(|&newline| newline < offset);
        let column = match before {
            0 => offset,
            n => offset - self.newlines[n - 1] - 1,
        };
        Location::new(before + 1, column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn locations_from_offsets() {
        let index = LineIndex::new("1 + 1\nany(x)\n");
        assert_eq!(index.location(0), Location::new(1, 0));
        assert_eq!(index.location(4), Location::new(1, 4));
        // Offset 5 is the newline itself, still row 1.
        assert_eq!(index.location(5), Location::new(1, 5));
        assert_eq!(index.location(6), Location::new(2, 0));
        assert_eq!(index.location(9), Location::new(2, 3));
    }

    #[test]
    fn single_line_has_no_newlines() {
        let index = LineIndex::new("let x = 1");
        assert_eq!(index.location(8), Location::new(1, 8));
    }

    #[test]
    fn range_contains_is_half_open() {
        let range = SourceRange::new(3, 7);
        assert!(!range.contains(2));
        assert!(range.contains(3));
        assert!(range.contains(6));
        assert!(!range.contains(7));
        assert!(!SourceRange::empty_at(5).contains(5));
    }
}
