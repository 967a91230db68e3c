//! # marklet
//!
//! Parse lightweight markup (ATX headings, `**bold**` and `*italic*`) into a
//! document tree, and render it as escaped HTML or plain text.
//!
//! ## Design
//!
//! Parsing is a three-stage pipeline:
//!
//! - **Line classification**: each line becomes a heading, a paragraph or a
//!   blank separator ([`classify`]).
//! - **Inline scanning**: the text of each block is scanned for emphasis
//!   spans with a delimiter stack ([`scan_inline`]).
//! - **Rendering**: blocks and their inlines are assembled into a
//!   [`Document`], which `marklet-core` renders to HTML or text.
//!
//! Every stage is total. Malformed markup degrades to literal text, it is
//! never rejected. The only error is handing bytes that are not text to the
//! byte-oriented entry points.
//!
//! ## Example
//!
//! ```rust
//! use marklet::{parse, to_html, Block, Inline};
//!
//! let document = parse("# Hello *World*");
//! assert_eq!(
//!     document.blocks,
//!     vec![Block::Heading {
//!         level: 1,
//!         content: vec![
//!             Inline::Text("Hello ".to_string()),
//!             Inline::Italic(vec![Inline::Text("World".to_string())]),
//!         ],
//!     }]
//! );
//!
//! assert_eq!(to_html("**bold** <tag>"), "<p><strong>bold</strong> &lt;tag&gt;</p>\n");
//! ```

mod block;
mod inline;
mod service;
mod utilities;

pub use block::{classify, classify_with, RawBlock};
pub use inline::{scan_inline, scan_inline_with};
pub use service::{render_blocks, MarkletService};
pub use utilities::split_lines;

pub use marklet_core::{
    render_html, render_text, Block, Document, EmphasisTags, Inline, Options, Slugger,
};

/// Error type for marklet operations
#[derive(Debug, thiserror::Error)]
pub enum MarkletError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Input is not valid UTF-8: {0}")]
    Utf8(#[from] std::str::Utf8Error),
}

pub type Result<T> = std::result::Result<T, MarkletError>;

/// Parse markup into a document tree with default options
pub fn parse(input: &str) -> Document {
    MarkletService::new().parse(input)
}

/// Parse raw bytes, rejecting input that is not UTF-8 text
pub fn parse_bytes(input: &[u8]) -> Result<Document> {
    MarkletService::new().parse_bytes(input)
}

/// Parse markup and render it to an HTML fragment with default options
pub fn to_html(input: &str) -> String {
    MarkletService::new().to_html(input)
}

/// Parse markup and render it to plain text with default options
pub fn to_text(input: &str) -> String {
    MarkletService::new().to_text(input)
}
