//! Syntax highlighting data structures
//!
//! Defines span categories, spans, and per-line highlight results.

use std::ops::Range;

use serde::Serialize;

/// Category of a highlighted span.
///
/// Variants are declared in pass order: a span from a later category may
/// enclose spans from earlier ones, never the other way around.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Number,
    Keyword,
    Identifier,
    StringLiteral,
}

/// All categories in the order their passes run.
pub const PASS_ORDER: [Category; 4] = [
    Category::Number,
    Category::Keyword,
    Category::Identifier,
    Category::StringLiteral,
];

impl Category {
    /// Markup class name emitted for this category
    pub fn class_name(self) -> &'static str {
        match self {
            Category::Number => "number",
            Category::Keyword => "keyword",
            Category::Identifier => "var",
            Category::StringLiteral => "stringLiteral",
        }
    }

    /// Look up a category by its markup class name
    pub fn from_class_name(name: &str) -> Option<Self> {
        PASS_ORDER.into_iter().find(|c| c.class_name() == name)
    }
}

/// A single highlighted span within a line (byte offsets)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Span {
    /// Start byte (inclusive)
    pub start: usize,
    /// End byte (exclusive)
    pub end: usize,
    pub category: Category,
}

impl Span {
    pub fn new(range: Range<usize>, category: Category) -> Self {
        Self {
            start: range.start,
            end: range.end,
            category,
        }
    }

    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    /// True if `other` lies entirely within this span
    pub fn contains(&self, other: &Span) -> bool {
        self.start <= other.start && other.end <= self.end
    }

    /// True if the two spans share no bytes
    pub fn is_disjoint(&self, other: &Span) -> bool {
        self.end <= other.start || other.end <= self.start
    }
}

/// Highlight information for a single line
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LineHighlights {
    /// Accepted spans, sorted outermost-first: by start, then longest, then
    /// latest pass
    pub spans: Vec<Span>,
}

impl LineHighlights {
    /// Try to add a span produced by a later pass.
    ///
    /// The span is accepted only if it is non-empty, not already present,
    /// and, for every span already present, it is either disjoint from it or
    /// encloses it. Returns whether the span was accepted.
    pub fn push(&mut self, span: Span) -> bool {
        if span.is_empty() || self.spans.contains(&span) {
            return false;
        }
        let fits = self
            .spans
            .iter()
            .all(|existing| existing.is_disjoint(&span) || span.contains(existing));
        if !fits {
            return false;
        }

        let key = |s: &Span| (s.start, std::cmp::Reverse(s.end), std::cmp::Reverse(s.category));
        let idx = self.spans.partition_point(|s| key(s) < key(&span));
        self.spans.insert(idx, span);
        true
    }

    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    /// Spans of one category, in line order
    pub fn of(&self, category: Category) -> impl Iterator<Item = &Span> {
        self.spans.iter().filter(move |s| s.category == category)
    }
}
