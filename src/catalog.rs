//! Code block catalog
//!
//! A catalog is a fixed, ordered list of sample code blocks. The view
//! selects one of them by index.

/// One sample unit of source text, as ordered lines
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeBlock {
    lines: Vec<String>,
}

impl CodeBlock {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }

    /// Split source text into lines (`\n` or `\r\n`)
    pub fn from_source(text: &str) -> Self {
        Self::new(text.lines())
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Ordered, immutable set of code blocks
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    blocks: Vec<CodeBlock>,
}

impl Catalog {
    pub fn new(blocks: Vec<CodeBlock>) -> Self {
        Self { blocks }
    }

    /// The three sample blocks shipped with the highlighter
    pub fn builtin() -> Self {
        Self::new(vec![
            CodeBlock::new([
                "for (let i = 1; i <= 10; i++) {",
                "console.log(`Pass number ${i}`);",
                "}",
            ]),
            CodeBlock::new([
                "for (let i = 1; i <= 10; i++) {",
                "console.log(`Pass i let number 10 ${i}`);",
                "}",
            ]),
            CodeBlock::new(["const myFunction = (x, y) => {", "return x + y", "}"]),
        ])
    }

    /// A one-block catalog holding `text`
    pub fn from_source(text: &str) -> Self {
        Self::new(vec![CodeBlock::from_source(text)])
    }

    pub fn get(&self, index: usize) -> Option<&CodeBlock> {
        self.blocks.get(index)
    }

    pub fn blocks(&self) -> &[CodeBlock] {
        &self.blocks
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}
