//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use spanlight::syntax::{Category, IdentifierSet, LineHighlights, Matcher};
use spanlight::Highlighter;

/// Highlighter with the built-in keyword set
pub fn highlighter() -> Highlighter {
    Highlighter::new().expect("built-in keywords compile")
}

/// Identifier matcher for the given names
pub fn identifiers(names: &[&str]) -> Matcher {
    Matcher::identifiers(&names.iter().collect::<IdentifierSet>())
}

/// Source text covered by spans of one category, in line order
pub fn tagged<'a>(line: &'a str, spans: &LineHighlights, category: Category) -> Vec<&'a str> {
    spans.of(category).map(|s| &line[s.range()]).collect()
}

/// Lines exercising every category, literals, and brace contents
pub const MIXED_LINES: &[&str] = &[
    "for (let i = 1; i <= 10; i++) {",
    "console.log(`Pass number ${i}`);",
    "console.log(`Pass i let number 10 ${i}`);",
    "const myFunction = (x, y) => {",
    "return x + y",
    "while (count < 3) { count++ }",
    "let s = `a` + `b ${count}` + `c`;",
    "if (x) { return 42 } else { throw new Error(`bad`) }",
    "var unterminated = `oops 7",
    "",
    "}",
];
