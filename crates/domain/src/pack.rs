// crates/domain/src/pack.rs
//! Greedy line packing with an icon-aware display-width metric.

use unicode_segmentation::UnicodeSegmentation;

use crate::model::Token;

/// Display width of a string in grapheme clusters. Byte length is the wrong
/// metric for the chat medium; multi-byte glyphs count once.
pub fn display_width(text: &str) -> usize {
    text.graphemes(true).count()
}

/// Accumulates formatted tokens into capacity-bounded lines.
///
/// Tokens are appended to a running line; when the projected width would
/// exceed `max_len`, the running line is flushed and the token starts a new
/// one. A single token wider than `max_len` still lands on its own line and
/// overflows; tokens are never split.
#[derive(Debug)]
pub struct LinePacker {
    max_len: usize,
    delimiter: String,
    delimiter_width: usize,
    /// A delimiter starting with a newline separates tokens even on an
    /// otherwise empty running line.
    forced_break: bool,
    compress_icons: bool,
    current: String,
    current_width: usize,
    lines: Vec<String>,
}

impl LinePacker {
    pub fn new(max_len: usize, delimiter: &str, compress_icons: bool) -> Self {
        Self {
            max_len,
            delimiter: delimiter.to_string(),
            delimiter_width: display_width(delimiter),
            forced_break: delimiter.starts_with('\n'),
            compress_icons,
            current: String::new(),
            current_width: 0,
            lines: Vec::new(),
        }
    }

    fn token_width(&self, token: &Token) -> usize {
        let raw = display_width(&token.text);
        if self.compress_icons && token.icon_surplus > 0 {
            raw.saturating_sub(token.icon_surplus)
        } else {
            raw
        }
    }

    pub fn push(&mut self, token: &Token) {
        let token_width = self.token_width(token);
        let projected = self.current_width + self.delimiter_width + token_width;

        if projected > self.max_len && !self.current.is_empty() {
            self.lines.push(std::mem::take(&mut self.current));
            self.current.push_str(&token.text);
            self.current_width = token_width;
            return;
        }

        if !self.current.is_empty() || self.forced_break {
            self.current.push_str(&self.delimiter);
            self.current.push_str(&token.text);
            self.current_width += self.delimiter_width + token_width;
        } else {
            self.current.push_str(&token.text);
            self.current_width = token_width;
        }
    }

    /// Whether any token has been accepted so far.
    pub fn has_content(&self) -> bool {
        !self.lines.is_empty() || !self.current.is_empty()
    }

    /// Flushes the trailing running line and returns all completed lines.
    pub fn finish(mut self) -> Vec<String> {
        if !self.current.is_empty() {
            self.lines.push(self.current);
        }
        self.lines
    }
}
