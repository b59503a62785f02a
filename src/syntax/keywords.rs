//! Reserved words recognised by the keyword pass

/// Keywords that introduce an identifier binding.
pub const DECLARATION_KEYWORDS: &[&str] = &["let", "const", "var"];

/// The compiled-in keyword set, in match-priority order.
///
/// The first four are the core loop/declaration words; the rest extend the
/// set to function and control-flow keywords of the same dialect.
pub const KEYWORDS: &[&str] = &[
    "let", "for", "const", "while",
    // declarations
    "var", "function", "class", "new",
    // control flow
    "if", "else", "do", "return", "break", "continue", "switch", "case", "default", "throw",
    "try", "catch", "finally",
    // iteration and operators
    "of", "in", "typeof", "instanceof",
    // async and generators
    "async", "await", "yield",
];
