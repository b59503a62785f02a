//! Four-pass line highlighter
//!
//! Passes run in a fixed order over the raw line:
//!
//! ```text
//! numbers → keywords → identifiers (+ brace contents) → backtick literals
//! ```
//!
//! Each pass proposes spans; [`LineHighlights::push`] keeps a span only if
//! it nests cleanly around what earlier passes already accepted. The first
//! three passes skip anything inside a backtick literal, except brace
//! contents, which are tagged as identifiers wherever they appear.
//!
//! Brace contents count only when they end in a word character right before
//! the closing `}` (`${i}`, `{return 1}`), so block bodies like `{ n-- }`
//! stay untagged. A literal that sits wholly inside tagged brace contents is
//! placed first so the brace span can enclose it.

use regex::Regex;

use super::extract::extract_declared_identifiers;
use super::highlights::{Category, LineHighlights, Span};
use super::keywords::KEYWORDS;
use super::literals::LiteralRegions;
use super::matcher::Matcher;
use crate::markup::{render_line, HtmlMarkup};

/// Compiled patterns shared by every line and every block.
#[derive(Debug, Clone)]
pub struct Highlighter {
    keywords: Matcher,
    numbers: Regex,
    interpolation: Regex,
}

impl Highlighter {
    /// Highlighter for the built-in keyword set
    pub fn new() -> Result<Self, String> {
        Self::with_keywords(KEYWORDS)
    }

    /// Highlighter for a custom keyword set.
    ///
    /// An empty keyword list is rejected: it is a configuration error, not
    /// something to paper over at highlight time.
    pub fn with_keywords(keywords: &[&str]) -> Result<Self, String> {
        let keywords = Matcher::keywords(keywords)?;
        let numbers = Regex::new(r"\b[0-9]+\b").map_err(|e| e.to_string())?;
        let interpolation =
            Regex::new(r"\{([^{}]*[0-9A-Za-z_])\}").map_err(|e| e.to_string())?;

        tracing::debug!("Compiled highlighter patterns");
        Ok(Self {
            keywords,
            numbers,
            interpolation,
        })
    }

    /// Classify the spans of one line.
    ///
    /// `identifiers` is the matcher compiled for the line's code block; pass
    /// [`Matcher::Never`] when the block declares nothing.
    pub fn highlight(&self, line: &str, identifiers: &Matcher) -> LineHighlights {
        let mut out = LineHighlights::default();
        if line.is_empty() {
            return out;
        }

        let regions = LiteralRegions::scan(line);

        for m in self.numbers.find_iter(line) {
            if !regions.overlaps(&m.range()) {
                out.push(Span::new(m.range(), Category::Number));
            }
        }

        for range in self.keywords.find_iter(line) {
            if !regions.overlaps(&range) {
                out.push(Span::new(range, Category::Keyword));
            }
        }

        self.identifier_pass(line, &regions, identifiers, &mut out);

        for literal in regions.closed() {
            out.push(Span::new(literal.clone(), Category::StringLiteral));
        }

        tracing::trace!(line, spans = out.spans.len(), "Highlighted line");
        out
    }

    fn identifier_pass(
        &self,
        line: &str,
        regions: &LiteralRegions,
        identifiers: &Matcher,
        out: &mut LineHighlights,
    ) {
        if identifiers.is_never() {
            tracing::trace!("No declared identifiers, skipping name matches");
        } else {
            for range in identifiers.find_iter(line) {
                if !regions.overlaps(&range) {
                    out.push(Span::new(range, Category::Identifier));
                }
            }
        }

        for caps in self.interpolation.captures_iter(line) {
            let Some(inner) = caps.get(1) else {
                continue;
            };
            let inner = Span::new(inner.range(), Category::Identifier);
            let literals: Vec<Span> = regions
                .closed()
                .iter()
                .map(|lit| Span::new(lit.clone(), Category::StringLiteral))
                .filter(|lit| !lit.is_disjoint(&inner))
                .collect();
            // brace contents may not cut a literal in two
            if literals
                .iter()
                .any(|lit| !inner.contains(lit) && !lit.contains(&inner))
            {
                continue;
            }
            for literal in literals.into_iter().filter(|lit| inner.contains(lit)) {
                out.push(literal);
            }
            out.push(inner);
        }
    }

    /// Highlight every line of a block against the block's own declarations
    pub fn highlight_lines<S: AsRef<str>>(&self, lines: &[S]) -> Vec<LineHighlights> {
        let identifiers = Matcher::identifiers(&extract_declared_identifiers(lines));
        lines
            .iter()
            .map(|line| self.highlight(line.as_ref(), &identifiers))
            .collect()
    }

    /// Annotate every line of a block with `<span class='...'>` markup.
    ///
    /// Source text is not escaped; see [`crate::markup`].
    pub fn highlight_block<S: AsRef<str>>(&self, lines: &[S]) -> Vec<String> {
        self.highlight_lines(lines)
            .iter()
            .zip(lines)
            .map(|(spans, line)| render_line(line.as_ref(), spans, &HtmlMarkup))
            .collect()
    }
}
