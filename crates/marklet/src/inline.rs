//! Inline scanning: turns the text of one block into text, bold and italic
//! nodes.
//!
//! Scanning runs in two steps. The text is first cut into literal runs and
//! delimiter candidates, each candidate carrying whether it may open or close
//! a span under the flanking rules. The candidates are then matched left to
//! right against a stack of open spans. A closer pops the nearest open span
//! of its kind; anything still open at the end of the text is put back as
//! the literal characters it was written with.

use marklet_core::{push_inline, push_text, Inline, Options};

use crate::utilities::{is_escapable, is_space_or_edge, EMPHASIS_MARKER, ESCAPE};

/// Scan `text` for emphasis with default options
pub fn scan_inline(text: &str) -> Vec<Inline> {
    scan_inline_with(text, &Options::default())
}

/// Scan `text` for emphasis
pub fn scan_inline_with(text: &str, options: &Options) -> Vec<Inline> {
    let pieces = tokenize(text, options);
    let mut scanner = Scanner::default();

    for piece in pieces {
        match piece {
            Piece::Text(text) => scanner.push_text(&text),
            Piece::Delimiter(delimiter) => scanner.delimiter(delimiter),
        }
    }

    scanner.finish()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Kind {
    Bold,
    Italic,
}

impl Kind {
    fn marker(self) -> &'static str {
        match self {
            Kind::Bold => "**",
            Kind::Italic => "*",
        }
    }

    fn width(self) -> usize {
        self.marker().len()
    }

    fn wrap(self, children: Vec<Inline>) -> Inline {
        match self {
            Kind::Bold => Inline::Bold(children),
            Kind::Italic => Inline::Italic(children),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Delimiter {
    kind: Kind,
    can_open: bool,
    can_close: bool,
}

#[derive(Debug, PartialEq, Eq)]
enum Piece {
    Text(String),
    Delimiter(Delimiter),
}

/// Cut `text` into literal runs and delimiter candidates
fn tokenize(text: &str, options: &Options) -> Vec<Piece> {
    let chars: Vec<char> = text.chars().collect();
    let mut pieces = Vec::new();
    let mut literal = String::new();
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];

        if c == ESCAPE && options.escapes {
            if let Some(&next) = chars.get(i + 1).filter(|&&n| is_escapable(n)) {
                literal.push(next);
                i += 2;
                continue;
            }
        }

        if c != EMPHASIS_MARKER {
            literal.push(c);
            i += 1;
            continue;
        }

        let run = chars[i..].iter().take_while(|&&c| c == EMPHASIS_MARKER).count();
        let kind = match run {
            1 if options.italic => Some(Kind::Italic),
            n if n >= 2 && options.bold => Some(Kind::Bold),
            _ => None,
        };

        let Some(kind) = kind else {
            literal.extend(std::iter::repeat(EMPHASIS_MARKER).take(run));
            i += run;
            continue;
        };

        let before = i.checked_sub(1).map(|p| chars[p]);
        let after = chars.get(i + kind.width()).copied();

        if !literal.is_empty() {
            pieces.push(Piece::Text(std::mem::take(&mut literal)));
        }
        pieces.push(Piece::Delimiter(Delimiter {
            kind,
            can_open: !is_space_or_edge(after),
            can_close: !is_space_or_edge(before),
        }));

        // Anything past a bold pair is literal
        literal.extend(std::iter::repeat(EMPHASIS_MARKER).take(run - kind.width()));
        i += run;
    }

    if !literal.is_empty() {
        pieces.push(Piece::Text(literal));
    }

    pieces
}

/// A span that has seen its opener but not yet its closer
#[derive(Debug)]
struct OpenSpan {
    kind: Kind,
    children: Vec<Inline>,
}

#[derive(Debug, Default)]
struct Scanner {
    root: Vec<Inline>,
    open: Vec<OpenSpan>,
}

impl Scanner {
    fn current(&mut self) -> &mut Vec<Inline> {
        match self.open.last_mut() {
            Some(span) => &mut span.children,
            None => &mut self.root,
        }
    }

    fn push_text(&mut self, text: &str) {
        push_text(self.current(), text);
    }

    fn delimiter(&mut self, delimiter: Delimiter) {
        let kind = delimiter.kind;
        let opener = self.open.iter().rposition(|span| span.kind == kind);

        match opener {
            Some(index) if delimiter.can_close => self.close(index),
            None if delimiter.can_open => self.open.push(OpenSpan {
                kind,
                children: Vec::new(),
            }),
            _ => {
                log::trace!("literal delimiter {:?}", kind.marker());
                self.push_text(kind.marker());
            }
        }
    }

    /// Close the open span at `index`, degrading any spans opened after it
    fn close(&mut self, index: usize) {
        while self.open.len() > index + 1 {
            self.degrade_innermost();
        }

        if let Some(span) = self.open.pop() {
            let node = span.kind.wrap(span.children);
            push_inline(self.current(), node);
        }
    }

    /// Put the innermost open span back as literal text
    fn degrade_innermost(&mut self) {
        let Some(span) = self.open.pop() else {
            return;
        };

        log::trace!("unmatched opener {:?} degraded to text", span.kind.marker());
        let parent = self.current();
        push_text(parent, span.kind.marker());
        for child in span.children {
            push_inline(parent, child);
        }
    }

    fn finish(mut self) -> Vec<Inline> {
        while !self.open.is_empty() {
            self.degrade_innermost();
        }
        self.root
    }
}
