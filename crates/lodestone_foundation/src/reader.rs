//! Cursor over immutable source text.
//!
//! `Reader` is a copyable scan position with bounded lookahead and
//! line-bounded reads. Speculative parsing copies the reader, runs the
//! candidate on the copy, and adopts the copy only on success, so a
//! failed parser never moves the caller's cursor.

/// An opaque, copyable cursor position for later restoration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Checkpoint {
    offset: usize,
}

impl Checkpoint {
    /// Returns the byte offset this checkpoint marks.
    #[must_use]
    pub const fn offset(&self) -> usize {
        self.offset
    }
}

/// A scan position over an immutable text buffer.
///
/// Offsets are byte indices; the cursor always sits on a `char`
/// boundary because it only ever advances by whole characters.
#[derive(Clone, Copy, Debug)]
pub struct Reader<'src> {
    source: &'src str,
    cursor: usize,
}

impl<'src> Reader<'src> {
    /// Creates a reader at the start of the given source.
    #[must_use]
    pub const fn new(source: &'src str) -> Self {
        Self { source, cursor: 0 }
    }

    /// Returns the full source text.
    #[must_use]
    pub const fn source(&self) -> &'src str {
        self.source
    }

    /// Returns the current byte offset.
    #[must_use]
    pub const fn offset(&self) -> usize {
        self.cursor
    }

    /// Captures the current position for later restoration.
    #[must_use]
    pub const fn checkpoint(&self) -> Checkpoint {
        Checkpoint {
            offset: self.cursor,
        }
    }

    /// Moves the cursor back to a previously captured position.
    pub fn restore(&mut self, checkpoint: Checkpoint) {
        self.cursor = checkpoint.offset;
    }

    /// Returns true if any input remains.
    #[must_use]
    pub fn can_read(&self) -> bool {
        self.cursor < self.source.len()
    }

    /// Returns true if input remains before the end of the current line.
    #[must_use]
    pub fn can_read_in_line(&self) -> bool {
        !matches!(self.peek(), None | Some('\n' | '\r'))
    }

    /// Returns the next character without consuming it.
    #[must_use]
    pub fn peek(&self) -> Option<char> {
        self.source[self.cursor..].chars().next()
    }

    /// Returns the character `n` positions ahead without consuming.
    ///
    /// `peek_at(0)` is equivalent to `peek()`.
    #[must_use]
    pub fn peek_at(&self, n: usize) -> Option<char> {
        self.source[self.cursor..].chars().nth(n)
    }

    /// Consumes and returns the next character.
    pub fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.cursor += c.len_utf8();
        Some(c)
    }

    /// Consumes the given literal if the input starts with it.
    ///
    /// Returns true and advances past the whole literal on a match;
    /// otherwise returns false without consuming anything.
    pub fn try_skip(&mut self, literal: &str) -> bool {
        if self.source[self.cursor..].starts_with(literal) {
            self.cursor += literal.len();
            true
        } else {
            false
        }
    }

    /// Consumes characters while the predicate holds and returns them.
    pub fn read_while(&mut self, predicate: impl Fn(char) -> bool) -> &'src str {
        let start = self.cursor;
        while let Some(c) = self.peek() {
            if !predicate(c) {
                break;
            }
            self.cursor += c.len_utf8();
        }
        &self.source[start..self.cursor]
    }

    /// Consumes an unquoted string token and returns it.
    ///
    /// The unquoted alphabet is ASCII alphanumerics plus `_`, `-`,
    /// `.`, and `+`. Returns an empty string if the next character is
    /// outside the alphabet.
    pub fn read_unquoted(&mut self) -> &'src str {
        self.read_while(is_allowed_in_unquoted)
    }

    /// Consumes everything up to the end of the current line and
    /// returns it, leaving the line terminator unconsumed.
    pub fn read_until_line_end(&mut self) -> &'src str {
        self.read_while(|c| !matches!(c, '\n' | '\r'))
    }
}

/// Returns true if the character may appear in an unquoted string.
#[must_use]
pub const fn is_allowed_in_unquoted(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.' | '+')
}
