//! Contains the [`Tokenizer`], which lazily pulls tokens out of a source string.

use getset::{CopyGetters, Getters};
use notal_base::source_file::{Position, Span};

use crate::{
    error::{Error, UnexpectedCharacter, UnterminatedString},
    token::{Scan, Token, TokenKind},
};

/// Scans a source string on demand, producing one [`Token`] per call to
/// [`Tokenizer::next_token()`].
///
/// The tokenizer keeps track of the line and column of its cursor. The column is incremented
/// eagerly for every consumed character and is reported one less than its stored value. A line
/// break is accounted as soon as the cursor *reaches* the `\n`, not when it consumes it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Getters, CopyGetters)]
pub struct Tokenizer {
    /// Gets the source string being tokenized.
    #[get = "pub"]
    source: String,

    /// Gets the byte offset of the next unconsumed character.
    #[get_copy = "pub"]
    cursor: usize,

    line: usize,
    column: usize,
}

impl Default for Tokenizer {
    fn default() -> Self { Self::new(String::new()) }
}

impl Tokenizer {
    /// Creates a tokenizer positioned at the start of the given source.
    #[must_use]
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            cursor: 0,
            line: 1,
            column: 1,
        }
    }

    /// Replaces the source and rewinds the tokenizer to its start, discarding any state left by a
    /// previous run.
    pub fn init(&mut self, source: impl Into<String>) { *self = Self::new(source); }

    /// Checks whether there is unconsumed input left.
    #[must_use]
    pub fn has_more_tokens(&self) -> bool { self.cursor < self.source.len() }

    /// Checks whether the cursor reached the end of the source.
    #[must_use]
    pub fn is_eof(&self) -> bool { self.cursor == self.source.len() }

    /// Gets the position right after the last consumed character.
    #[must_use]
    pub fn current_position(&self) -> Position {
        Position {
            line: self.line,
            column: self.column.saturating_sub(1),
        }
    }

    /// Scans the next token.
    ///
    /// The lexical rules of [`TokenKind::RULES`] are tried in order against the unconsumed input;
    /// the first one that matches produces the token and the cursor is moved right past it.
    ///
    /// # Returns
    /// `Ok(None)` if there is no more input to tokenize.
    ///
    /// # Errors
    /// - [`Error::UnexpectedCharacter`]: no rule accepts the character at the cursor.
    /// - [`Error::UnterminatedString`]: a `"` is never closed before the end of the source.
    pub fn next_token(&mut self) -> Result<Option<Token>, Error> {
        if !self.has_more_tokens() {
            return Ok(None);
        }

        let start = self.current_position();
        let rest = &self.source[self.cursor..];

        for kind in TokenKind::RULES {
            match kind.scan(rest) {
                Scan::Matched(length) => {
                    let value = rest[..length].to_owned();
                    self.advance(length);

                    return Ok(Some(Token {
                        kind,
                        value,
                        span: Span::new(start, self.current_position()),
                    }));
                }
                Scan::Unterminated => {
                    return Err(UnterminatedString { position: start }.into());
                }
                Scan::Rejected => {}
            }
        }

        Err(UnexpectedCharacter {
            character: rest.chars().next().unwrap_or_default(),
            position: start,
        }
        .into())
    }

    /// Returns an iterator pulling tokens lazily through [`Self::next_token()`].
    ///
    /// The iterator stops after yielding the first error.
    pub fn tokens(&mut self) -> impl Iterator<Item = Result<Token, Error>> + '_ {
        let mut failed = false;

        std::iter::from_fn(move || {
            if failed {
                return None;
            }

            let result = self.next_token().transpose();
            failed = matches!(result, Some(Err(..)));
            result
        })
    }

    fn advance(&mut self, length: usize) {
        let end = self.cursor + length;

        while self.cursor < end {
            self.increment_cursor();
        }
    }

    fn increment_cursor(&mut self) {
        let Some(character) = self.source[self.cursor..].chars().next() else {
            return;
        };

        self.column += 1;
        self.cursor += character.len_utf8();

        if self.source[self.cursor..].starts_with('\n') {
            self.line += 1;
            self.column = 0;
        }
    }
}
