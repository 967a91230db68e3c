//! Configuration options for parsing and rendering

/// Tags used for emphasis in HTML output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EmphasisTags {
    /// `<strong>` and `<em>`
    #[default]
    Semantic,
    /// `<b>` and `<i>`
    Presentational,
}

impl EmphasisTags {
    /// Tag name for bold spans
    pub fn bold(self) -> &'static str {
        match self {
            EmphasisTags::Semantic => "strong",
            EmphasisTags::Presentational => "b",
        }
    }

    /// Tag name for italic spans
    pub fn italic(self) -> &'static str {
        match self {
            EmphasisTags::Semantic => "em",
            EmphasisTags::Presentational => "i",
        }
    }
}

/// Options for a parse/render call
#[derive(Debug, Clone)]
pub struct Options {
    /// Recognize `#` heading lines
    pub headings: bool,

    /// Recognize `**bold**` spans
    pub bold: bool,

    /// Recognize `*italic*` spans
    pub italic: bool,

    /// Treat `\` before ASCII punctuation as an escape
    pub escapes: bool,

    /// Emphasis tag style
    pub emphasis_tags: EmphasisTags,

    /// Emit `id` attributes on headings
    pub header_ids: bool,

    /// Prefix prepended to every heading id
    pub header_prefix: String,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            headings: true,
            bold: true,
            italic: true,
            escapes: true,
            emphasis_tags: EmphasisTags::Semantic,
            header_ids: false,
            header_prefix: String::new(),
        }
    }
}
