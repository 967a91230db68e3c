//! Document tree
//!
//! This module defines the nodes produced by parsing. The tree is the common
//! intermediate format consumed by both the HTML and the plain-text renderers.

/// A parsed document: its blocks in source order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    pub blocks: Vec<Block>,
}

impl Document {
    pub fn new(blocks: Vec<Block>) -> Self {
        Self { blocks }
    }

    /// True when the document holds no blocks at all
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Plain text of every block, one block per line
    pub fn plain_text(&self) -> String {
        self.blocks
            .iter()
            .map(Block::plain_text)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// A block-level node
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    /// Heading with level (1-6) and inline content
    Heading { level: u8, content: Vec<Inline> },

    /// Paragraph containing inline content
    Paragraph(Vec<Inline>),
}

/// An inline node
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Inline {
    /// Literal text, never containing unconsumed markup
    Text(String),

    /// Strong emphasis
    Bold(Vec<Inline>),

    /// Emphasis
    Italic(Vec<Inline>),
}

impl Block {
    /// Inline children of this block
    pub fn content(&self) -> &[Inline] {
        match self {
            Block::Heading { content, .. } => content,
            Block::Paragraph(content) => content,
        }
    }

    /// Concatenated text of the block's inlines with all markup removed
    pub fn plain_text(&self) -> String {
        inlines_plain_text(self.content())
    }
}

impl Inline {
    /// Shorthand for building a text node
    pub fn text(s: impl Into<String>) -> Self {
        Inline::Text(s.into())
    }

    /// Text content of this node and its descendants
    pub fn plain_text(&self) -> String {
        let mut out = String::new();
        self.push_plain_text(&mut out);
        out
    }

    fn push_plain_text(&self, out: &mut String) {
        match self {
            Inline::Text(text) => out.push_str(text),
            Inline::Bold(inlines) | Inline::Italic(inlines) => {
                for inline in inlines {
                    inline.push_plain_text(out);
                }
            }
        }
    }
}

/// Helper to concatenate the plain text of an inline slice
pub fn inlines_plain_text(inlines: &[Inline]) -> String {
    let mut out = String::new();
    for inline in inlines {
        inline.push_plain_text(&mut out);
    }
    out
}

/// Append a node to `inlines`, merging it into a trailing text node when both
/// are text. Empty text is dropped.
pub fn push_inline(inlines: &mut Vec<Inline>, node: Inline) {
    match node {
        Inline::Text(text) => push_text(inlines, &text),
        other => inlines.push(other),
    }
}

/// Append literal text to `inlines`, extending a trailing text node if present
pub fn push_text(inlines: &mut Vec<Inline>, text: &str) {
    if text.is_empty() {
        return;
    }
    if let Some(Inline::Text(last)) = inlines.last_mut() {
        last.push_str(text);
    } else {
        inlines.push(Inline::Text(text.to_string()));
    }
}
