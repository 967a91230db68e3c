//! Character and line helpers shared by the scanners.

/// Leading block marker for headings
pub const HEADING_MARKER: char = '#';

/// Emphasis delimiter character
pub const EMPHASIS_MARKER: char = '*';

/// Escape character for inline markup
pub const ESCAPE: char = '\\';

/// Deepest heading level
pub const MAX_HEADING_LEVEL: usize = 6;

/// Split input into lines on `\n`, `\r\n` or a lone `\r`.
///
/// A terminator at the very end does not start another line, so `"a\n"`
/// yields `["a"]` while `"a\n\n"` yields `["a", ""]`.
pub fn split_lines(input: &str) -> Vec<&str> {
    let bytes = input.as_bytes();
    let mut lines = Vec::new();
    let mut start = 0;
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'\n' => {
                lines.push(&input[start..i]);
                i += 1;
                start = i;
            }
            b'\r' => {
                lines.push(&input[start..i]);
                i += if bytes.get(i + 1) == Some(&b'\n') { 2 } else { 1 };
                start = i;
            }
            _ => i += 1,
        }
    }

    if start < bytes.len() {
        lines.push(&input[start..]);
    }

    lines
}

/// Check if a character may be backslash-escaped
pub fn is_escapable(c: char) -> bool {
    c.is_ascii_punctuation()
}

/// Whitespace test used by the flanking rules; a missing neighbour counts as
/// whitespace
pub fn is_space_or_edge(c: Option<char>) -> bool {
    c.map_or(true, char::is_whitespace)
}
