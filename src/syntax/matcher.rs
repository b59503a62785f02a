//! Word matchers compiled from runtime vocabularies
//!
//! Keyword and identifier passes both need "any of these words, whole-word
//! only". The vocabulary is embedded into a regex alternation; an empty
//! vocabulary becomes [`Matcher::Never`] instead of a pattern that would
//! match the empty string everywhere.

use std::ops::Range;

use regex::Regex;

use super::extract::IdentifierSet;

/// A whole-word matcher over a fixed vocabulary.
#[derive(Debug, Clone)]
pub enum Matcher {
    /// Matches nothing
    Never,
    /// Word-boundary delimited alternation
    Words(Regex),
}

impl Matcher {
    /// Compile a matcher for `words`.
    ///
    /// Words are escaped before being embedded, so punctuation inside a
    /// declared name cannot change the pattern. Blank words are ignored.
    pub fn for_words<I, S>(words: I) -> Result<Self, String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let alternatives: Vec<String> = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_string())
            .filter(|w| !w.is_empty())
            .map(|w| regex::escape(&w))
            .collect();

        if alternatives.is_empty() {
            return Ok(Matcher::Never);
        }

        let pattern = format!(r"\b(?:{})\b", alternatives.join("|"));
        Regex::new(&pattern)
            .map(Matcher::Words)
            .map_err(|e| format!("Failed to compile word pattern {}: {}", pattern, e))
    }

    /// Keyword matcher; an empty keyword list is a configuration error.
    pub fn keywords(words: &[&str]) -> Result<Self, String> {
        match Self::for_words(words.iter().copied())? {
            Matcher::Never => Err("Keyword list must contain at least one word".to_string()),
            matcher => Ok(matcher),
        }
    }

    /// Identifier matcher for one code block.
    ///
    /// Never fails: a vocabulary that cannot be compiled degrades to
    /// [`Matcher::Never`] and the identifier name pass becomes a no-op.
    pub fn identifiers(identifiers: &IdentifierSet) -> Self {
        match Self::for_words(identifiers.names()) {
            Ok(matcher) => matcher,
            Err(e) => {
                tracing::warn!("Skipping identifier pass: {}", e);
                Matcher::Never
            }
        }
    }

    pub fn is_never(&self) -> bool {
        matches!(self, Matcher::Never)
    }

    /// Byte ranges of every non-overlapping match, left to right
    pub fn find_iter<'a>(&'a self, line: &'a str) -> impl Iterator<Item = Range<usize>> + 'a {
        let regex = match self {
            Matcher::Never => None,
            Matcher::Words(regex) => Some(regex),
        };
        regex
            .into_iter()
            .flat_map(move |re| re.find_iter(line).map(|m| m.range()))
    }
}
