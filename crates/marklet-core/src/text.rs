//! Plain-text rendering

use crate::ast::Document;

/// Render a document as plain text: one line per block, markup removed
pub fn render_text(document: &Document) -> String {
    document.plain_text()
}
