use std::io::{self, Read, Write};
use std::path::Path;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use serde::Serialize;

use spanlight::catalog::{Catalog, CodeBlock};
use spanlight::cli::{CliArgs, RunConfig, Selection, Source};
use spanlight::markup::{AnsiMarkup, HtmlMarkup, Markup};
use spanlight::syntax::Span;
use spanlight::theme::{list_available_themes, load_theme, ThemeSource};
use spanlight::{Highlighter, HighlighterConfig, OutputFormat, Theme, View, ViewState};

/// One line of `--format json` output
#[derive(Serialize)]
struct JsonLine<'a> {
    line: usize,
    text: &'a str,
    spans: &'a [Span],
}

fn main() -> Result<()> {
    spanlight::tracing::init();

    let config = HighlighterConfig::load();
    let run = CliArgs::parse().into_config(&config);
    tracing::debug!(?run, "Starting");

    if run.save_config {
        run.persisted()
            .save()
            .map_err(|e| anyhow!(e))
            .context("Failed to save config")?;
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if run.list_themes {
        for theme in list_available_themes() {
            let source = match theme.source {
                ThemeSource::User => "user",
                ThemeSource::Builtin => "builtin",
            };
            writeln!(out, "{}\t{}\t{}", theme.id, theme.name, source)?;
        }
        return Ok(());
    }

    let catalog = load_catalog(&run.source)?;
    let highlighter = Highlighter::new()
        .map_err(|e| anyhow!(e))
        .context("Failed to build highlighter")?;

    let (first, count) = match run.selection {
        Selection::One(index) => (index, 1),
        Selection::All => (0, catalog.len()),
    };
    let mut view = View::new(catalog, highlighter, ViewState::new(first, run.show_formatted))
        .map_err(|e| anyhow!(e))?;

    let theme = match run.format {
        OutputFormat::Ansi => load_theme(&run.theme).unwrap_or_else(|e| {
            tracing::warn!("Failed to load theme {}: {}, using default", run.theme, e);
            Theme::default()
        }),
        _ => Theme::default(),
    };

    for i in 0..count {
        if i > 0 {
            view.next_block();
            writeln!(out)?;
        }
        print_block(&mut out, &mut view, &run, &theme)?;
    }
    Ok(())
}

fn load_catalog(source: &Source) -> Result<Catalog> {
    match source {
        Source::Builtin => Ok(Catalog::builtin()),
        Source::Paths(paths) => {
            let blocks = paths
                .iter()
                .map(|path| read_source(path).map(|text| CodeBlock::from_source(&text)))
                .collect::<Result<Vec<_>>>()?;
            Ok(Catalog::new(blocks))
        }
    }
}

fn read_source(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut text = String::new();
        io::stdin()
            .read_to_string(&mut text)
            .context("Failed to read stdin")?;
        return Ok(text);
    }
    std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}

fn print_block(out: &mut impl Write, view: &mut View, run: &RunConfig, theme: &Theme) -> Result<()> {
    if run.format == OutputFormat::Json {
        return print_json(out, view);
    }

    let markup: Box<dyn Markup + '_> = match run.format {
        OutputFormat::Ansi => Box::new(AnsiMarkup::new(theme)),
        _ => Box::new(HtmlMarkup),
    };
    let output = view.render_with(markup.as_ref());

    if run.side_by_side {
        writeln!(out, "Code")?;
        for line in view.active_block().lines() {
            writeln!(out, "{}", line)?;
        }
        writeln!(out)?;
        writeln!(out, "{}", view.state().heading())?;
    }
    for line in output {
        writeln!(out, "{}", line)?;
    }
    Ok(())
}

fn print_json(out: &mut impl Write, view: &mut View) -> Result<()> {
    let highlights = if view.state().show_formatted {
        view.highlights()
    } else {
        vec![Default::default(); view.active_block().len()]
    };
    for (idx, (text, spans)) in view.active_block().lines().iter().zip(&highlights).enumerate() {
        let line = JsonLine {
            line: idx,
            text,
            spans: &spans.spans,
        };
        serde_json::to_writer(&mut *out, &line)?;
        writeln!(out)?;
    }
    Ok(())
}
