//! Line classification: splits input into lines and decides what kind of
//! block each line is.

use marklet_core::Options;

use crate::utilities::{split_lines, HEADING_MARKER, MAX_HEADING_LEVEL};

/// A classified line, before inline scanning
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawBlock {
    /// `#`-prefixed line with the marker run and separator removed
    Heading { level: u8, content: String },

    /// Any other non-blank line, trimmed
    Paragraph(String),

    /// Empty or whitespace-only line
    Blank,
}

/// Classify every line of `input` with default options
pub fn classify(input: &str) -> Vec<RawBlock> {
    classify_with(input, &Options::default())
}

/// Classify every line of `input`
pub fn classify_with(input: &str, options: &Options) -> Vec<RawBlock> {
    split_lines(input)
        .into_iter()
        .enumerate()
        .map(|(index, line)| {
            let block = classify_line(line, options);
            log::trace!("line {index}: {block:?}");
            block
        })
        .collect()
}

fn classify_line(line: &str, options: &Options) -> RawBlock {
    let line = line.trim();
    if line.is_empty() {
        return RawBlock::Blank;
    }

    if options.headings {
        if let Some(heading) = heading(line) {
            return heading;
        }
    }

    RawBlock::Paragraph(line.to_string())
}

/// Match an ATX heading on an already-trimmed line.
///
/// The whole marker run must be followed by whitespace. Runs longer than the
/// deepest level keep their surplus markers as text.
fn heading(line: &str) -> Option<RawBlock> {
    let run = line.chars().take_while(|&c| c == HEADING_MARKER).count();
    if run == 0 {
        return None;
    }

    // '#' is one byte, so the run length is also a byte offset
    let rest = &line[run..];
    if !rest.starts_with(char::is_whitespace) {
        return None;
    }

    let (level, content) = if run > MAX_HEADING_LEVEL {
        (MAX_HEADING_LEVEL, line[MAX_HEADING_LEVEL..].trim())
    } else {
        (run, rest.trim())
    };

    Some(RawBlock::Heading {
        level: level as u8,
        content: content.to_string(),
    })
}
