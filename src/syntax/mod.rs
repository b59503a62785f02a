//! Syntax highlighting module
//!
//! Pattern-based highlighting for a small ECMAScript-like dialect:
//! - Declared identifier extraction per code block
//! - Backtick literal regions computed once per line
//! - Four ordered passes producing nested spans
//!
//! ## Architecture
//!
//! ```text
//! CodeBlock → extract_declared_identifiers → Matcher::identifiers
//!           → Highlighter::highlight (per line) → LineHighlights
//!           → markup::render_line → AnnotatedLine
//! ```

mod extract;
mod highlighter;
mod highlights;
mod keywords;
mod literals;
mod matcher;

pub use extract::{declared_on_line, extract_declared_identifiers, IdentifierSet};
pub use highlighter::Highlighter;
pub use highlights::{Category, LineHighlights, Span, PASS_ORDER};
pub use keywords::{DECLARATION_KEYWORDS, KEYWORDS};
pub use literals::LiteralRegions;
pub use matcher::Matcher;
