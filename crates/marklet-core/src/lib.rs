//! marklet-core - document tree and rendering
//!
//! This crate provides the data structures produced by the `marklet` parser
//! and the renderers that turn them into output.
//!
//! # Architecture
//!
//! ```text
//!                     ┌───────────────┐ ──render_html──▶ HTML fragment
//! Markup ──marklet──▶ │ Document tree │
//!                     └───────────────┘ ──render_text──▶ plain text
//! ```
//!
//! # Example
//!
//! ```rust
//! use marklet_core::{render_html, Block, Document, Inline, Options};
//!
//! let document = Document::new(vec![
//!     Block::Heading {
//!         level: 1,
//!         content: vec![Inline::Text("Hello World".to_string())],
//!     },
//!     Block::Paragraph(vec![
//!         Inline::Text("This is ".to_string()),
//!         Inline::Bold(vec![Inline::Text("bold".to_string())]),
//!         Inline::Text(" text.".to_string()),
//!     ]),
//! ]);
//!
//! let html = render_html(&document, &Options::default());
//! assert_eq!(
//!     html,
//!     "<h1>Hello World</h1>\n<p>This is <strong>bold</strong> text.</p>\n"
//! );
//! ```

mod ast;
mod options;
mod render;
mod slug;
mod text;

pub use ast::{inlines_plain_text, push_inline, push_text, Block, Document, Inline};
pub use options::{EmphasisTags, Options};
pub use render::render_html;
pub use slug::Slugger;
pub use text::render_text;
