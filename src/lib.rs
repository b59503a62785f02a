//! spanlight - pattern-based syntax highlighting for sample snippets
//!
//! This crate provides a small highlighter for an ECMAScript-like dialect:
//! declared identifiers are extracted per code block, then each line goes
//! through four ordered passes (numbers, keywords, identifiers, template
//! literals) and is rendered as nested `<span class='...'>` markup.

pub mod catalog;
pub mod cli;
pub mod config;
pub mod config_paths;
pub mod markup;
pub mod syntax;
pub mod theme;
pub mod tracing;
pub mod view;

// Re-export commonly used types
pub use catalog::{Catalog, CodeBlock};
pub use config::{HighlighterConfig, OutputFormat};
pub use syntax::{Category, Highlighter, LineHighlights, Span};
pub use theme::Theme;
pub use view::{highlight_block, render, View, ViewState};
