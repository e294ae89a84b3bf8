//! Fixed-width JCL reflow for generated SAF commands.
//!
//! Batch input statements carry content in columns 1-71, with column 72
//! reserved for a continuation character. [`JclWriter`] re-flows free-form
//! command text into that format: `-` continues between words, `X` marks a
//! break forced inside a word.

/// Widest a line may grow, including the continuation column.
const LINE_WIDTH: usize = 72;
/// Content columns available before the continuation character.
const CONTENT_WIDTH: usize = 71;
/// Last column from which a soft ` -` continuation still fits.
const SOFT_BREAK_LIMIT: usize = 70;

/// Tokenize a command on spaces, respecting single-quoted regions.
///
/// Quotes are preserved verbatim in the tokens. Inside a quoted region a
/// doubled `''` is an escaped literal quote and does not end the region.
/// An unterminated quote keeps the remainder in the final token. Runs of
/// spaces never produce empty tokens.
pub fn parse(command: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = command.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '\'' if in_quotes => {
                if chars.peek() == Some(&'\'') {
                    // Escaped quote, stays inside the region.
                    current.push('\'');
                    current.push('\'');
                    chars.next();
                } else {
                    current.push('\'');
                    in_quotes = false;
                }
            }
            '\'' => {
                current.push('\'');
                in_quotes = true;
            }
            ' ' if !in_quotes => {
                if !current.is_empty() {
                    words.push(std::mem::take(&mut current));
                }
            }
            _ => current.push(c),
        }
    }
    if !current.is_empty() {
        words.push(current);
    }
    words
}

/// Accumulates commands re-flowed into fixed-width JCL lines.
#[derive(Debug)]
pub struct JclWriter {
    text: String,
    first_indent: usize,
    next_indent: usize,
}

impl Default for JclWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl JclWriter {
    /// Writer with the standard indents: 4 on the first line, 2 on
    /// continuation lines.
    pub fn new() -> Self {
        Self::with_indents(4, 2)
    }

    /// Writer with explicit indents.
    pub fn with_indents(first_indent: usize, next_indent: usize) -> Self {
        Self {
            text: String::new(),
            first_indent,
            next_indent,
        }
    }

    /// Append one command, reflowed, separated from prior text by a newline.
    ///
    /// Embedded line breaks in the raw command are treated as spaces.
    pub fn add(&mut self, command: &str) {
        let normalized: String = command
            .chars()
            .map(|c| if c == '\r' || c == '\n' { ' ' } else { c })
            .collect();
        let formatted = self.format(&parse(&normalized));
        if !self.text.is_empty() {
            self.text.push('\n');
        }
        self.text.push_str(&formatted);
    }

    /// The accumulated JCL text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Lay words out into lines no wider than 72 columns.
    ///
    /// Every line that is followed by more text ends with a continuation
    /// character: ` -` when the break falls between words, `X` flush in
    /// column 72 when it falls inside a word.
    pub fn format(&self, words: &[String]) -> String {
        let mut out = " ".repeat(self.first_indent);
        let mut position = self.first_indent;
        let mut line_blank = true;

        for (index, word) in words.iter().enumerate() {
            let len = word.chars().count();
            let sep = if line_blank { 0 } else { 1 };
            // Every word but the last must leave room for a ` -` marker.
            let marker = if index + 1 == words.len() { 0 } else { 2 };

            if position + sep + len + marker <= LINE_WIDTH {
                if !line_blank {
                    out.push(' ');
                    position += 1;
                }
                out.push_str(word);
                position += len;
                line_blank = false;
                continue;
            }

            if !line_blank {
                if position <= SOFT_BREAK_LIMIT {
                    out.push_str(" -\n");
                    out.push_str(&" ".repeat(self.next_indent));
                    position = self.next_indent;
                } else {
                    // No room left for the soft marker: hard break at the
                    // margin, continuation starts flush in column 1.
                    out.push_str("X\n");
                    position = 0;
                }
                line_blank = true;
            }

            // Chunk anything too long for the content columns that remain.
            let mut rest = word.as_str();
            let mut rest_len = len;
            while rest_len > CONTENT_WIDTH - position {
                let (chunk, tail) = split_at_chars(rest, CONTENT_WIDTH - position);
                out.push_str(chunk);
                out.push_str("X\n");
                rest_len -= CONTENT_WIDTH - position;
                rest = tail;
                position = 0;
            }
            out.push_str(rest);
            position += rest_len;
            line_blank = false;
        }
        out
    }
}

/// Split after `n` characters, char-boundary safe.
fn split_at_chars(s: &str, n: usize) -> (&str, &str) {
    match s.char_indices().nth(n) {
        Some((idx, _)) => s.split_at(idx),
        None => (s, ""),
    }
}
