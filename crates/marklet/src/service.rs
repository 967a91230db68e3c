//! MarkletService - the main entry point for parsing and rendering markup.

use marklet_core::{render_html, render_text, Block, Document, Options};

use crate::block::{classify_with, RawBlock};
use crate::inline::scan_inline_with;
use crate::Result;

/// Assemble classified blocks into a document tree, scanning each block's
/// text for inline markup. Blank lines are dropped.
pub fn render_blocks(blocks: &[RawBlock], options: &Options) -> Document {
    let blocks = blocks
        .iter()
        .filter_map(|block| match block {
            RawBlock::Heading { level, content } => Some(Block::Heading {
                level: *level,
                content: scan_inline_with(content, options),
            }),
            RawBlock::Paragraph(content) => {
                Some(Block::Paragraph(scan_inline_with(content, options)))
            }
            RawBlock::Blank => None,
        })
        .collect();

    Document::new(blocks)
}

/// Parses markup and renders the result.
///
/// The service only holds its options; every call builds a fresh tree, so a
/// shared service can be used from several threads at once.
#[derive(Debug, Clone, Default)]
pub struct MarkletService {
    options: Options,
}

impl MarkletService {
    /// Create a new MarkletService with default options
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a MarkletService with custom options
    pub fn with_options(options: Options) -> Self {
        Self { options }
    }

    /// Get the current options
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Get mutable access to options
    pub fn options_mut(&mut self) -> &mut Options {
        &mut self.options
    }

    /// Parse markup into a document tree
    pub fn parse(&self, input: &str) -> Document {
        let raw = classify_with(input, &self.options);
        let document = render_blocks(&raw, &self.options);

        log::debug!(
            "parsed {} lines into {} blocks",
            raw.len(),
            document.blocks.len()
        );
        document
    }

    /// Parse raw bytes, rejecting anything that is not UTF-8
    pub fn parse_bytes(&self, input: &[u8]) -> Result<Document> {
        let text = std::str::from_utf8(input)?;
        Ok(self.parse(text))
    }

    /// Render a document tree to HTML with this service's options
    pub fn render(&self, document: &Document) -> String {
        render_html(document, &self.options)
    }

    /// Parse markup and render it to an HTML fragment
    pub fn to_html(&self, input: &str) -> String {
        self.render(&self.parse(input))
    }

    /// Parse raw bytes and render them to an HTML fragment
    pub fn to_html_bytes(&self, input: &[u8]) -> Result<String> {
        Ok(self.render(&self.parse_bytes(input)?))
    }

    /// Parse markup and render it as plain text
    pub fn to_text(&self, input: &str) -> String {
        render_text(&self.parse(input))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MarkletError;
    use marklet_core::{EmphasisTags, Inline};

    #[test]
    fn test_simple_paragraph() {
        let service = MarkletService::new();
        assert_eq!(service.to_html("Hello World"), "<p>Hello World</p>\n");
    }

    #[test]
    fn test_headings() {
        let service = MarkletService::new();
        assert_eq!(
            service.to_html("# One\n## Two\n### Three"),
            "<h1>One</h1>\n<h2>Two</h2>\n<h3>Three</h3>\n"
        );
    }

    #[test]
    fn test_blank_lines_emit_nothing() {
        let service = MarkletService::new();
        assert_eq!(service.to_html("a\n\n\nb"), "<p>a</p>\n<p>b</p>\n");
        assert_eq!(service.to_html("\n  \n"), "");
        assert_eq!(service.to_html(""), "");
    }

    #[test]
    fn test_emphasis_in_heading() {
        let service = MarkletService::new();
        assert_eq!(
            service.to_html("## **Bold** title"),
            "<h2><strong>Bold</strong> title</h2>\n"
        );
    }

    #[test]
    fn test_presentational_tags() {
        let options = Options {
            emphasis_tags: EmphasisTags::Presentational,
            ..Default::default()
        };
        let service = MarkletService::with_options(options);
        assert_eq!(
            service.to_html("**This Text should be bold**"),
            "<p><b>This Text should be bold</b></p>\n"
        );
        assert_eq!(
            service.to_html("*This Text should be italicized*"),
            "<p><i>This Text should be italicized</i></p>\n"
        );
    }

    #[test]
    fn test_header_ids() {
        let mut service = MarkletService::new();
        service.options_mut().header_ids = true;
        assert_eq!(
            service.to_html("# Hello *World*\n# Hello World"),
            "<h1 id=\"hello-world\">Hello <em>World</em></h1>\n<h1 id=\"hello-world-1\">Hello World</h1>\n"
        );
    }

    #[test]
    fn test_header_ids_reset_between_calls() {
        let options = Options {
            header_ids: true,
            ..Default::default()
        };
        let service = MarkletService::with_options(options);
        let first = service.to_html("# Intro");
        let second = service.to_html("# Intro");
        assert_eq!(first, second);
        assert_eq!(first, "<h1 id=\"intro\">Intro</h1>\n");
    }

    #[test]
    fn test_render_blocks_skips_blank() {
        let raw = vec![
            RawBlock::Blank,
            RawBlock::Paragraph("*x*".to_string()),
            RawBlock::Blank,
        ];
        let document = render_blocks(&raw, &Options::default());
        assert_eq!(
            document.blocks,
            vec![Block::Paragraph(vec![Inline::Italic(vec![Inline::text("x")])])]
        );
    }

    #[test]
    fn test_to_text() {
        let service = MarkletService::new();
        assert_eq!(service.to_text("# *Title*\n\n**a** & b"), "Title\na & b");
    }

    #[test]
    fn test_parse_bytes_rejects_invalid_utf8() {
        let service = MarkletService::new();
        let err = service.parse_bytes(&[b'#', b' ', 0xff, 0xfe]).unwrap_err();
        assert!(matches!(err, MarkletError::Utf8(_)));
    }

    #[test]
    fn test_to_html_bytes() {
        let service = MarkletService::new();
        assert_eq!(
            service.to_html_bytes("# Hi".as_bytes()).unwrap(),
            "<h1>Hi</h1>\n"
        );
    }
}
