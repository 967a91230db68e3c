//! HTML rendering
//!
//! Converts a document tree into an HTML fragment. Every text node is
//! escaped, so the only markup in the output is markup the renderer wrote.

use crate::ast::{Block, Document, Inline};
use crate::options::Options;
use crate::slug::Slugger;

/// Render a document to an HTML string
pub fn render_html(document: &Document, options: &Options) -> String {
    let mut output = String::with_capacity(estimate_capacity(document));
    let mut slugger = Slugger::new();

    for block in &document.blocks {
        render_block(block, options, &mut slugger, &mut output);
    }

    log::debug!(
        "rendered {} blocks into {} bytes of html",
        document.blocks.len(),
        output.len()
    );
    output
}

fn estimate_capacity(document: &Document) -> usize {
    // Markup adds roughly a dozen bytes per block
    document
        .blocks
        .iter()
        .map(|b| b.plain_text().len() + 16)
        .sum()
}

fn render_block(block: &Block, options: &Options, slugger: &mut Slugger, out: &mut String) {
    match block {
        Block::Heading { level, content } => {
            render_heading(*level, content, options, slugger, out)
        }

        Block::Paragraph(inlines) => {
            out.push_str("<p>");
            render_inlines(inlines, options, out);
            out.push_str("</p>\n");
        }
    }
}

fn render_heading(
    level: u8,
    content: &[Inline],
    options: &Options,
    slugger: &mut Slugger,
    out: &mut String,
) {
    let level = level.clamp(1, 6);

    out.push_str("<h");
    out.push(char::from(b'0' + level));
    if options.header_ids {
        let raw = crate::ast::inlines_plain_text(content);
        let id = format!("{}{}", options.header_prefix, slugger.slug(&raw, false));
        out.push_str(" id=\"");
        out.push_str(&html_escape::encode_double_quoted_attribute(&id));
        out.push('"');
    }
    out.push('>');

    render_inlines(content, options, out);

    out.push_str("</h");
    out.push(char::from(b'0' + level));
    out.push_str(">\n");
}

fn render_inlines(inlines: &[Inline], options: &Options, out: &mut String) {
    for inline in inlines {
        render_inline(inline, options, out);
    }
}

fn render_inline(inline: &Inline, options: &Options, out: &mut String) {
    match inline {
        Inline::Text(text) => out.push_str(&html_escape::encode_text(text)),

        Inline::Bold(content) => {
            wrap(options.emphasis_tags.bold(), content, options, out);
        }

        Inline::Italic(content) => {
            wrap(options.emphasis_tags.italic(), content, options, out);
        }
    }
}

fn wrap(tag: &str, content: &[Inline], options: &Options, out: &mut String) {
    out.push('<');
    out.push_str(tag);
    out.push('>');
    render_inlines(content, options, out);
    out.push_str("</");
    out.push_str(tag);
    out.push('>');
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::EmphasisTags;

    fn default_options() -> Options {
        Options::default()
    }

    fn doc(blocks: Vec<Block>) -> Document {
        Document::new(blocks)
    }

    #[test]
    fn test_paragraph() {
        let document = doc(vec![Block::Paragraph(vec![Inline::text("Hello World")])]);
        let result = render_html(&document, &default_options());
        assert_eq!(result, "<p>Hello World</p>\n");
    }

    #[test]
    fn test_heading_levels() {
        for level in 1..=6u8 {
            let document = doc(vec![Block::Heading {
                level,
                content: vec![Inline::text("Title")],
            }]);
            let result = render_html(&document, &default_options());
            assert_eq!(result, format!("<h{level}>Title</h{level}>\n"));
        }
    }

    #[test]
    fn test_bold() {
        let document = doc(vec![Block::Paragraph(vec![Inline::Bold(vec![
            Inline::text("bold"),
        ])])]);
        let result = render_html(&document, &default_options());
        assert_eq!(result, "<p><strong>bold</strong></p>\n");
    }

    #[test]
    fn test_italic_presentational() {
        let options = Options {
            emphasis_tags: EmphasisTags::Presentational,
            ..Default::default()
        };
        let document = doc(vec![Block::Paragraph(vec![
            Inline::Italic(vec![Inline::text("it")]),
            Inline::Bold(vec![Inline::text("b")]),
        ])]);
        let result = render_html(&document, &options);
        assert_eq!(result, "<p><i>it</i><b>b</b></p>\n");
    }

    #[test]
    fn test_nested_emphasis() {
        let document = doc(vec![Block::Paragraph(vec![Inline::Bold(vec![
            Inline::text("bold "),
            Inline::Italic(vec![Inline::text("and italic")]),
            Inline::text(" text"),
        ])])]);
        let result = render_html(&document, &default_options());
        assert_eq!(
            result,
            "<p><strong>bold <em>and italic</em> text</strong></p>\n"
        );
    }

    #[test]
    fn test_text_is_escaped() {
        let document = doc(vec![Block::Paragraph(vec![Inline::text(
            "<script>alert(1)</script> & more",
        )])]);
        let result = render_html(&document, &default_options());
        assert_eq!(
            result,
            "<p>&lt;script&gt;alert(1)&lt;/script&gt; &amp; more</p>\n"
        );
    }

    #[test]
    fn test_header_ids() {
        let options = Options {
            header_ids: true,
            header_prefix: "doc-".to_string(),
            ..Default::default()
        };
        let document = doc(vec![
            Block::Heading {
                level: 1,
                content: vec![Inline::text("Intro")],
            },
            Block::Heading {
                level: 2,
                content: vec![Inline::Bold(vec![Inline::text("Intro")])],
            },
        ]);
        let result = render_html(&document, &options);
        assert_eq!(
            result,
            "<h1 id=\"doc-intro\">Intro</h1>\n<h2 id=\"doc-intro-1\"><strong>Intro</strong></h2>\n"
        );
    }

    #[test]
    fn test_header_prefix_is_attribute_escaped() {
        let options = Options {
            header_ids: true,
            header_prefix: "\"x".to_string(),
            ..Default::default()
        };
        let document = doc(vec![Block::Heading {
            level: 1,
            content: vec![Inline::text("A")],
        }]);
        let result = render_html(&document, &options);
        assert_eq!(result, "<h1 id=\"&quot;xa\">A</h1>\n");
    }

    #[test]
    fn test_empty_document() {
        assert_eq!(render_html(&Document::default(), &default_options()), "");
    }
}
