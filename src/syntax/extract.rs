//! Declared identifier extraction
//!
//! Scans a code block once for `let`/`const`/`var` declarations and
//! collects the name that follows each keyword. Declarations that appear
//! inside a template literal are ignored.

use std::sync::OnceLock;

use regex::Regex;

use super::keywords::DECLARATION_KEYWORDS;
use super::literals::LiteralRegions;

/// Names declared in one code block, in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IdentifierSet {
    names: Vec<String>,
}

impl IdentifierSet {
    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    /// Pipe-separated alternation, e.g. `"i|x|y"`; empty when no names
    pub fn alternation(&self) -> String {
        self.names.join("|")
    }

    fn insert(&mut self, name: &str) {
        if !self.contains(name) {
            self.names.push(name.to_string());
        }
    }
}

impl<S: AsRef<str>> FromIterator<S> for IdentifierSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = IdentifierSet::default();
        for name in iter {
            let name = name.as_ref().trim();
            if !name.is_empty() {
                set.insert(name);
            }
        }
        set
    }
}

fn declaration_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        let pattern = format!(r"\b(?:{})\s+(\S+)", DECLARATION_KEYWORDS.join("|"));
        Regex::new(&pattern).expect("declaration keywords form a valid pattern")
    })
}

/// Names declared on a single line, outside template literals
pub fn declared_on_line(line: &str) -> Vec<&str> {
    let regions = LiteralRegions::scan(line);
    declaration_regex()
        .captures_iter(line)
        .filter(|caps| {
            caps.get(0)
                .map(|m| !regions.overlaps(&(m.start()..m.start() + 1)))
                .unwrap_or(false)
        })
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str())
        .collect()
}

/// Collect the identifier set for a whole code block.
pub fn extract_declared_identifiers<S: AsRef<str>>(lines: &[S]) -> IdentifierSet {
    let identifiers: IdentifierSet = lines
        .iter()
        .flat_map(|line| declared_on_line(line.as_ref()))
        .collect();

    tracing::debug!(
        lines = lines.len(),
        identifiers = %identifiers.alternation(),
        "Extracted declared identifiers"
    );
    identifiers
}
