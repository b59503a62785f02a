//! Line highlighter behaviour tests
//!
//! Concrete scenarios plus properties that must hold for any input line.

mod common;

use common::{highlighter, identifiers, tagged, MIXED_LINES};
use spanlight::markup::{render_line, strip_markup, HtmlMarkup};
use spanlight::syntax::{extract_declared_identifiers, Category, LiteralRegions, Matcher, KEYWORDS};

// ========================================================================
// Scenarios
// ========================================================================

#[test]
fn test_template_literal_with_interpolation() {
    let hl = highlighter();
    let line = "`Pass number ${i}`";
    let out = render_line(line, &hl.highlight(line, &identifiers(&["i"])), &HtmlMarkup);

    assert_eq!(
        out,
        "<span class='stringLiteral'>`Pass number ${<span class='var'>i</span>}`</span>"
    );
}

#[test]
fn test_for_loop_header() {
    let hl = highlighter();
    let line = "for (let i = 1; i <= 10; i++) {";
    let out = render_line(line, &hl.highlight(line, &identifiers(&["i"])), &HtmlMarkup);

    assert_eq!(
        out,
        "<span class='keyword'>for</span> (<span class='keyword'>let</span> \
         <span class='var'>i</span> = <span class='number'>1</span>; \
         <span class='var'>i</span> <= <span class='number'>10</span>; \
         <span class='var'>i</span>++) {"
    );
}

#[test]
fn test_empty_identifier_set_is_a_no_op_for_names() {
    let hl = highlighter();
    let line = "let total = `sum ${a}` + 5;";
    let spans = hl.highlight(line, &Matcher::Never);

    assert_eq!(tagged(line, &spans, Category::Keyword), vec!["let"]);
    assert_eq!(tagged(line, &spans, Category::Number), vec!["5"]);
    assert_eq!(tagged(line, &spans, Category::StringLiteral), vec!["`sum ${a}`"]);
    // brace contents are still identifiers even without declarations
    assert_eq!(tagged(line, &spans, Category::Identifier), vec!["a"]);
}

#[test]
fn test_builtin_block_two_literal_is_opaque() {
    let hl = highlighter();
    let lines = [
        "for (let i = 1; i <= 10; i++) {",
        "console.log(`Pass i let number 10 ${i}`);",
        "}",
    ];
    let out = hl.highlight_block(&lines);

    assert_eq!(
        out[1],
        "console.log(<span class='stringLiteral'>`Pass i let number 10 \
         ${<span class='var'>i</span>}`</span>);"
    );
    assert_eq!(out[2], "}");
}

#[test]
fn test_arrow_function_block() {
    let hl = highlighter();
    let out = hl.highlight_block(&["const myFunction = (x, y) => {", "return x + y", "}"]);
    assert_eq!(
        out,
        vec![
            "<span class='keyword'>const</span> <span class='var'>myFunction</span> = (x, y) => {",
            "<span class='keyword'>return</span> x + y",
            "}",
        ]
    );
}

#[test]
fn test_line_without_tokens_is_unchanged() {
    let hl = highlighter();
    for line in ["", "}", "a + b;", "console.log(x)"] {
        assert_eq!(hl.highlight_block(&[line]), vec![line.to_string()]);
    }
}

// ========================================================================
// Properties
// ========================================================================

#[test]
fn test_stripping_markup_restores_every_line() {
    let hl = highlighter();
    for (annotated, original) in hl.highlight_block(MIXED_LINES).iter().zip(MIXED_LINES) {
        assert_eq!(&strip_markup(annotated), original, "annotated: {annotated}");
    }
}

#[test]
fn test_highlighting_is_deterministic() {
    let hl = highlighter();
    assert_eq!(hl.highlight_block(MIXED_LINES), hl.highlight_block(MIXED_LINES));
    assert_eq!(
        highlighter().highlight_block(MIXED_LINES),
        hl.highlight_block(MIXED_LINES)
    );
}

#[test]
fn test_every_keyword_outside_literals_is_tagged_once() {
    let hl = highlighter();
    for keyword in KEYWORDS {
        let line = format!("x = {keyword} + 1;");
        let spans = hl.highlight(&line, &Matcher::Never);
        assert_eq!(
            tagged(&line, &spans, Category::Keyword),
            vec![*keyword],
            "keyword {keyword}"
        );
    }
}

#[test]
fn test_nothing_but_brace_contents_is_tagged_inside_literals() {
    let hl = highlighter();
    let ids = extract_declared_identifiers(MIXED_LINES);
    let matcher = Matcher::identifiers(&ids);

    for line in MIXED_LINES {
        let regions = LiteralRegions::scan(line);
        let spans = hl.highlight(line, &matcher);
        for span in &spans.spans {
            if span.category == Category::StringLiteral || !regions.overlaps(&span.range()) {
                continue;
            }
            assert_eq!(span.category, Category::Identifier, "{line}: {span:?}");
            let before = &line[..span.start];
            assert!(before.ends_with('{'), "{line}: {span:?} is not brace content");
        }
    }
}

#[test]
fn test_spans_nest_without_crossing() {
    let hl = highlighter();
    let matcher = Matcher::identifiers(&extract_declared_identifiers(MIXED_LINES));
    for line in MIXED_LINES {
        let spans = hl.highlight(line, &matcher).spans;
        for (i, a) in spans.iter().enumerate() {
            for b in &spans[i + 1..] {
                assert!(
                    a.is_disjoint(b) || a.contains(b) || b.contains(a),
                    "{line}: {a:?} crosses {b:?}"
                );
            }
        }
    }
}

#[test]
fn test_every_closed_literal_is_wrapped() {
    let hl = highlighter();
    let matcher = Matcher::identifiers(&extract_declared_identifiers(MIXED_LINES));
    for line in MIXED_LINES {
        let spans = hl.highlight(line, &matcher);
        let literals: Vec<_> = spans.of(Category::StringLiteral).map(|s| s.range()).collect();
        assert_eq!(literals, LiteralRegions::scan(line).closed(), "{line}");
    }
}

#[test]
fn test_block_body_line_from_fixture() {
    let hl = highlighter();
    let out = hl.highlight_block(&["if (x) { return 42 } else { throw new Error(`bad`) }"]);
    assert_eq!(
        out[0],
        "<span class='keyword'>if</span> (x) { <span class='keyword'>return</span> \
         <span class='number'>42</span> } <span class='keyword'>else</span> { \
         <span class='keyword'>throw</span> <span class='keyword'>new</span> \
         Error(<span class='stringLiteral'>`bad`</span>) }"
    );
}

#[test]
fn test_unterminated_literal_hides_its_tail() {
    let hl = highlighter();
    let line = "var unterminated = `oops 7";
    let spans = hl.highlight(line, &identifiers(&["unterminated"]));

    assert_eq!(tagged(line, &spans, Category::Keyword), vec!["var"]);
    assert_eq!(tagged(line, &spans, Category::Identifier), vec!["unterminated"]);
    assert_eq!(spans.of(Category::Number).count(), 0);
    assert_eq!(spans.of(Category::StringLiteral).count(), 0);
}

#[test]
fn test_markup_in_source_passes_through_unescaped() {
    let hl = highlighter();
    let out = hl.highlight_block(&["let a = b < 2 && c > 1;"]);
    assert!(out[0].contains(" < "));
    assert!(out[0].contains(" && "));
}
