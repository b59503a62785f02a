//! Command-line argument parsing
//!
//! Supports:
//! - Highlighting files or stdin, or the built-in sample catalog
//! - Choosing the block, output format and theme
//! - Plain (unformatted) and side-by-side output
//! - Persisting the chosen theme, format and toggle as the new defaults

use std::path::PathBuf;

use clap::Parser;

use crate::config::{HighlighterConfig, OutputFormat};

/// A tiny syntax highlighter for JavaScript-like snippets
#[derive(Parser, Debug)]
#[command(name = "spanlight", version, about = "Highlight JavaScript-like snippets")]
pub struct CliArgs {
    /// Files to highlight, one code block each (`-` reads stdin)
    #[arg(value_name = "PATHS")]
    pub paths: Vec<PathBuf>,

    /// Code block to show (0-based)
    #[arg(short = 'b', long, value_name = "N", default_value_t = 0)]
    pub block: usize,

    /// Show every code block in turn
    #[arg(long, conflicts_with = "block")]
    pub all: bool,

    /// Show the source unformatted
    #[arg(long)]
    pub plain: bool,

    /// Output format (html, ansi, json)
    #[arg(short = 'f', long, value_name = "FORMAT")]
    pub format: Option<OutputFormat>,

    /// Theme id for ansi output
    #[arg(short = 't', long, value_name = "ID")]
    pub theme: Option<String>,

    /// Print the available themes and exit
    #[arg(long)]
    pub list_themes: bool,

    /// Print source and output columns under their headings
    #[arg(long)]
    pub side_by_side: bool,

    /// Write the effective theme, format and formatting toggle to the config file
    #[arg(long)]
    pub save_config: bool,
}

/// Where code blocks come from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    /// The built-in sample catalog
    Builtin,
    /// Files (or `-` for stdin), one block per path
    Paths(Vec<PathBuf>),
}

/// Which blocks to show
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    One(usize),
    All,
}

/// What to do, after merging CLI flags over the config file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub source: Source,
    pub selection: Selection,
    pub show_formatted: bool,
    pub format: OutputFormat,
    pub theme: String,
    pub side_by_side: bool,
    pub list_themes: bool,
    pub save_config: bool,
}

impl RunConfig {
    /// The settings `--save-config` writes back
    pub fn persisted(&self) -> HighlighterConfig {
        HighlighterConfig {
            theme: self.theme.clone(),
            format: self.format,
            show_formatted: self.show_formatted,
        }
    }
}

impl CliArgs {
    /// Merge parsed CLI args over `config`; CLI flags win
    pub fn into_config(self, config: &HighlighterConfig) -> RunConfig {
        let source = if self.paths.is_empty() {
            Source::Builtin
        } else {
            Source::Paths(self.paths)
        };

        let selection = if self.all {
            Selection::All
        } else {
            Selection::One(self.block)
        };

        RunConfig {
            source,
            selection,
            show_formatted: config.show_formatted && !self.plain,
            format: self.format.unwrap_or(config.format),
            theme: self.theme.unwrap_or_else(|| config.theme.clone()),
            side_by_side: self.side_by_side,
            list_themes: self.list_themes,
            save_config: self.save_config,
        }
    }
}
