//! Backtick literal regions
//!
//! Template literals are found once per line by pairing backticks left to
//! right. Every pass that must stay out of literals consults the result
//! instead of re-deriving it.

use std::ops::Range;

/// Literal intervals of a single line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LiteralRegions {
    /// Closed literals, backticks included, in line order
    closed: Vec<Range<usize>>,
    /// Byte offset of an unmatched trailing backtick
    unterminated: Option<usize>,
}

impl LiteralRegions {
    /// Pair up backticks in `line`.
    pub fn scan(line: &str) -> Self {
        let mut closed = Vec::new();
        let mut open: Option<usize> = None;

        for (idx, byte) in line.bytes().enumerate() {
            if byte != b'`' {
                continue;
            }
            match open.take() {
                Some(start) => closed.push(start..idx + 1),
                None => open = Some(idx),
            }
        }

        Self {
            closed,
            unterminated: open,
        }
    }

    /// Closed literal intervals, backticks included
    pub fn closed(&self) -> &[Range<usize>] {
        &self.closed
    }

    /// Start of an unterminated literal, if the line has an odd backtick count
    pub fn unterminated(&self) -> Option<usize> {
        self.unterminated
    }

    /// True if any byte of `range` falls inside a literal.
    ///
    /// An unterminated literal runs to the end of the line.
    pub fn overlaps(&self, range: &Range<usize>) -> bool {
        if let Some(open) = self.unterminated {
            if range.end > open {
                return true;
            }
        }
        self.closed
            .iter()
            .any(|lit| range.start < lit.end && lit.start < range.end)
    }

    pub fn is_empty(&self) -> bool {
        self.closed.is_empty() && self.unterminated.is_none()
    }
}
