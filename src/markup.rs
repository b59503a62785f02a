//! Rendering spans as inline markup
//!
//! Spans nest (a literal may enclose interpolation identifiers), so
//! rendering walks them outermost-first and keeps a stack of open spans.
//!
//! Source text is written through unescaped. A line containing `<` or `&`
//! produces markup that a browser will interpret; input is assumed to be
//! trusted sample code.

use std::sync::OnceLock;

use regex::Regex;

use crate::syntax::{Category, LineHighlights, PASS_ORDER};
use crate::theme::Theme;

/// Emits the opening and closing text around a span.
pub trait Markup {
    fn open(&self, category: Category) -> String;

    /// Close `category`; `parent` is the span still open around it, if any.
    fn close(&self, category: Category, parent: Option<Category>) -> String;

    /// Written before a non-empty line
    fn begin_line(&self) -> String {
        String::new()
    }

    /// Written after a non-empty line
    fn end_line(&self) -> String {
        String::new()
    }
}

/// `<span class='...'>` tags
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlMarkup;

impl Markup for HtmlMarkup {
    fn open(&self, category: Category) -> String {
        format!("<span class='{}'>", category.class_name())
    }

    fn close(&self, _category: Category, _parent: Option<Category>) -> String {
        "</span>".to_string()
    }
}

/// 24-bit ANSI foreground colors.
///
/// Text outside any span uses the theme's `foreground`; each line ends with
/// a reset.
#[derive(Debug, Clone)]
pub struct AnsiMarkup<'a> {
    theme: &'a Theme,
}

impl<'a> AnsiMarkup<'a> {
    pub fn new(theme: &'a Theme) -> Self {
        Self { theme }
    }
}

pub const ANSI_RESET: &str = "\x1b[0m";

impl Markup for AnsiMarkup<'_> {
    fn open(&self, category: Category) -> String {
        self.theme.color_for(category).ansi_fg()
    }

    fn close(&self, _category: Category, parent: Option<Category>) -> String {
        match parent {
            Some(parent) => self.theme.color_for(parent).ansi_fg(),
            None => self.theme.foreground.ansi_fg(),
        }
    }

    fn begin_line(&self) -> String {
        self.theme.foreground.ansi_fg()
    }

    fn end_line(&self) -> String {
        ANSI_RESET.to_string()
    }
}

/// Wrap each span of `line` using `markup`; text outside spans is copied as is.
pub fn render_line(line: &str, highlights: &LineHighlights, markup: &dyn Markup) -> String {
    if line.is_empty() {
        return String::new();
    }
    let mut out = markup.begin_line();
    out.reserve(line.len() * 2);
    let mut pos = 0;
    let mut open: Vec<(usize, Category)> = Vec::new();

    fn close_until(
        line: &str,
        limit: usize,
        pos: &mut usize,
        open: &mut Vec<(usize, Category)>,
        out: &mut String,
        markup: &dyn Markup,
    ) {
        while let Some(&(end, category)) = open.last() {
            if end > limit {
                break;
            }
            out.push_str(&line[*pos..end]);
            *pos = end;
            open.pop();
            let parent = open.last().map(|&(_, c)| c);
            out.push_str(&markup.close(category, parent));
        }
    }

    for span in &highlights.spans {
        close_until(line, span.start, &mut pos, &mut open, &mut out, markup);
        out.push_str(&line[pos..span.start]);
        pos = span.start;
        out.push_str(&markup.open(span.category));
        open.push((span.end, span.category));
    }
    close_until(line, usize::MAX, &mut pos, &mut open, &mut out, markup);
    out.push_str(&line[pos..]);
    out.push_str(&markup.end_line());
    out
}

fn tag_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        let classes: Vec<&str> = PASS_ORDER.iter().map(|c| c.class_name()).collect();
        let pattern = format!("<span class='(?:{})'>|</span>", classes.join("|"));
        Regex::new(&pattern).expect("class names form a valid pattern")
    })
}

/// Remove the category tags written by [`HtmlMarkup`].
///
/// For any source line without literal `<span` / `</span>` text, this
/// returns the original line.
pub fn strip_markup(annotated: &str) -> String {
    tag_regex().replace_all(annotated, "").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::Span;

    fn spans(list: &[(std::ops::Range<usize>, Category)]) -> LineHighlights {
        let mut out = LineHighlights::default();
        for (range, category) in list {
            assert!(out.push(Span::new(range.clone(), *category)));
        }
        out
    }

    #[test]
    fn test_render_without_spans_is_identity() {
        let line = "x + y";
        assert_eq!(render_line(line, &LineHighlights::default(), &HtmlMarkup), line);
        assert_eq!(render_line("", &LineHighlights::default(), &HtmlMarkup), "");
    }

    #[test]
    fn test_render_flat_spans() {
        let line = "let x = 1";
        let hl = spans(&[(8..9, Category::Number), (0..3, Category::Keyword)]);
        assert_eq!(
            render_line(line, &hl, &HtmlMarkup),
            "<span class='keyword'>let</span> x = <span class='number'>1</span>"
        );
    }

    #[test]
    fn test_render_nested_spans() {
        let line = "`a ${i}`";
        let hl = spans(&[(5..6, Category::Identifier), (0..8, Category::StringLiteral)]);
        assert_eq!(
            render_line(line, &hl, &HtmlMarkup),
            "<span class='stringLiteral'>`a ${<span class='var'>i</span>}`</span>"
        );
    }

    #[test]
    fn test_render_equal_ranges() {
        let hl = spans(&[(1..2, Category::Number), (1..2, Category::Identifier)]);
        assert_eq!(
            render_line("{1}", &hl, &HtmlMarkup),
            "{<span class='var'><span class='number'>1</span></span>}"
        );
    }

    #[test]
    fn test_ansi_restores_parent_color() {
        let theme = Theme::default_dark();
        let markup = AnsiMarkup::new(&theme);
        let hl = spans(&[(5..6, Category::Identifier), (0..8, Category::StringLiteral)]);
        let out = render_line("`a ${i}`", &hl, &markup);

        let fg = theme.foreground.ansi_fg();
        let literal = theme.string_literal.ansi_fg();
        let ident = theme.identifier.ansi_fg();
        assert_eq!(
            out,
            format!("{fg}{literal}`a ${{{ident}i{literal}}}`{fg}{ANSI_RESET}")
        );
    }

    #[test]
    fn test_ansi_plain_text_uses_foreground() {
        let theme = Theme::default_dark();
        let markup = AnsiMarkup::new(&theme);
        let fg = theme.foreground.ansi_fg();
        let number = theme.number.ansi_fg();

        let hl = spans(&[(4..5, Category::Number)]);
        assert_eq!(
            render_line("x = 1;", &hl, &markup),
            format!("{fg}x = {number}1{fg};{ANSI_RESET}")
        );
        assert_eq!(
            render_line("}", &LineHighlights::default(), &markup),
            format!("{fg}}}{ANSI_RESET}")
        );
        assert_eq!(render_line("", &LineHighlights::default(), &markup), "");
    }

    #[test]
    fn test_strip_markup_removes_only_category_tags() {
        let annotated = "<span class='keyword'>let</span> <b>x</b>";
        assert_eq!(strip_markup(annotated), "let <b>x</b>");
    }

    #[test]
    fn test_source_markup_is_not_escaped() {
        let line = "a < b && c";
        assert_eq!(render_line(line, &LineHighlights::default(), &HtmlMarkup), line);
    }
}
