//! Presentation state and rendering boundary
//!
//! The view owns the only mutable state in the system (which block is
//! active, whether highlighting is shown) and hands read-only lines to the
//! highlighter.

use crate::catalog::{Catalog, CodeBlock};
use crate::markup::{render_line, HtmlMarkup, Markup};
use crate::syntax::{extract_declared_identifiers, Highlighter, LineHighlights, Matcher};

/// The two pieces of UI state: active block and formatting toggle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ViewState {
    pub active_block: usize,
    pub show_formatted: bool,
}

impl ViewState {
    pub fn new(active_block: usize, show_formatted: bool) -> Self {
        Self {
            active_block,
            show_formatted,
        }
    }

    pub fn toggle_formatted(&mut self) {
        self.show_formatted = !self.show_formatted;
    }

    /// Advance to the next block, wrapping to 0 after the last
    pub fn next_block(&mut self, block_count: usize) {
        self.active_block = if block_count == 0 || self.active_block + 1 >= block_count {
            0
        } else {
            self.active_block + 1
        };
    }

    /// Heading of the output column
    pub fn heading(&self) -> &'static str {
        if self.show_formatted {
            "Formatted"
        } else {
            "Unformatted"
        }
    }

    /// Label of the formatting toggle
    pub fn toggle_label(&self) -> &'static str {
        if self.show_formatted {
            "Remove Formatting"
        } else {
            "Format Code"
        }
    }
}

/// Annotate every line of `lines` with HTML span markup.
pub fn highlight_block<S: AsRef<str>>(highlighter: &Highlighter, lines: &[S]) -> Vec<String> {
    highlighter.highlight_block(lines)
}

/// Lines as they should be displayed: annotated, or verbatim when
/// formatting is off.
pub fn render<S: AsRef<str>>(
    highlighter: &Highlighter,
    lines: &[S],
    show_formatted: bool,
) -> Vec<String> {
    if show_formatted {
        highlight_block(highlighter, lines)
    } else {
        lines.iter().map(|l| l.as_ref().to_string()).collect()
    }
}

/// Both display columns for the active block
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedView {
    /// Raw lines, always unformatted
    pub source: Vec<String>,
    pub heading: &'static str,
    /// Formatted or raw lines, depending on the toggle
    pub output: Vec<String>,
}

/// Catalog, highlighter and view state together.
///
/// The identifier matcher is cached per active block and rebuilt only when
/// the active block changes.
#[derive(Debug)]
pub struct View {
    catalog: Catalog,
    highlighter: Highlighter,
    state: ViewState,
    identifiers: Option<(usize, Matcher)>,
}

impl View {
    /// Fails if `state.active_block` is outside the catalog
    pub fn new(catalog: Catalog, highlighter: Highlighter, state: ViewState) -> Result<Self, String> {
        if catalog.get(state.active_block).is_none() {
            return Err(format!(
                "unknown codeblock {} (catalog has {})",
                state.active_block,
                catalog.len()
            ));
        }
        Ok(Self {
            catalog,
            highlighter,
            state,
            identifiers: None,
        })
    }

    pub fn state(&self) -> ViewState {
        self.state
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn highlighter(&self) -> &Highlighter {
        &self.highlighter
    }

    pub fn toggle_formatted(&mut self) {
        self.state.toggle_formatted();
        tracing::debug!(show_formatted = self.state.show_formatted, "Toggled formatting");
    }

    pub fn next_block(&mut self) {
        self.state.next_block(self.catalog.len());
        tracing::debug!(active_block = self.state.active_block, "Changed codeblock");
    }

    pub fn active_block(&self) -> &CodeBlock {
        // `new` validated the index and `next_block` keeps it in range
        &self.catalog.blocks()[self.state.active_block]
    }

    /// Spans of every line of the active block
    pub fn highlights(&mut self) -> Vec<LineHighlights> {
        let active = self.state.active_block;
        if !matches!(&self.identifiers, Some((idx, _)) if *idx == active) {
            self.identifiers = None;
        }

        let lines = self.catalog.blocks()[active].lines();
        let (_, identifiers) = self.identifiers.get_or_insert_with(|| {
            (
                active,
                Matcher::identifiers(&extract_declared_identifiers(lines)),
            )
        });
        lines
            .iter()
            .map(|line| self.highlighter.highlight(line, identifiers))
            .collect()
    }

    /// Output lines for the active block using `markup`; raw lines when
    /// formatting is off
    pub fn render_with(&mut self, markup: &dyn Markup) -> Vec<String> {
        if !self.state.show_formatted {
            return self.active_block().lines().to_vec();
        }
        let highlights = self.highlights();
        self.active_block()
            .lines()
            .iter()
            .zip(&highlights)
            .map(|(line, spans)| render_line(line, spans, markup))
            .collect()
    }

    /// Render both columns for the active block as HTML markup
    pub fn render(&mut self) -> RenderedView {
        RenderedView {
            source: self.active_block().lines().to_vec(),
            heading: self.state.heading(),
            output: self.render_with(&HtmlMarkup),
        }
    }
}
