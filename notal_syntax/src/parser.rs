//! Contains the [`Parser`] logic.

use getset::Getters;
use notal_base::source_file::Position;
use notal_lexical::{
    token::{Token, TokenKind},
    tokenizer::Tokenizer,
};

use crate::{
    error::{Error, SyntaxKind, UnexpectedEndOfInput, UnexpectedToken},
    syntax_tree::program::Program,
};

/// The predictive recursive descent parser of Notal.
///
/// The parser pulls tokens from its [`Tokenizer`] one at a time and holds exactly one of them, the
/// lookahead, to decide which production to apply. Tokens are never pushed back.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Getters)]
pub struct Parser {
    tokenizer: Tokenizer,

    /// Gets the next unconsumed token, `None` if the source is exhausted (or not primed yet).
    #[get = "pub"]
    lookahead: Option<Token>,
}

impl Parser {
    /// Creates a new parser with an empty source.
    #[must_use]
    pub fn new() -> Self { Self::default() }

    /// Parses the given source into a [`Program`].
    ///
    /// The parser can be reused: every call starts over from the new source.
    ///
    /// # Errors
    /// - [`Error::Lexical`]: the tokenizer failed to scan the source.
    /// - [`Error::Syntax`]: the source is not a single literal.
    pub fn parse(&mut self, source: impl Into<String>) -> Result<Program, Error> {
        self.tokenizer.init(source);
        self.lookahead = None;

        self.parse_program()
    }

    /// Gets the source string being parsed.
    #[must_use]
    pub fn source(&self) -> &str { self.tokenizer.source() }

    /// Gets the position right after the last token pulled from the tokenizer.
    #[must_use]
    pub fn current_position(&self) -> Position { self.tokenizer.current_position() }

    /// Pulls the first token of the source into the lookahead.
    ///
    /// # Errors
    /// Any lexical error raised while scanning the token.
    pub fn prime(&mut self) -> Result<(), Error> {
        self.lookahead = self.tokenizer.next_token()?;
        Ok(())
    }

    /// Expects the lookahead to be a token of the given kind, consumes it, and pulls the next
    /// token from the tokenizer.
    ///
    /// # Errors
    /// - [`UnexpectedEndOfInput`]: there is no lookahead token.
    /// - [`UnexpectedToken`]: the lookahead token is of another kind; the token stays in the
    ///   lookahead.
    /// - [`Error::Lexical`]: scanning the following token failed.
    pub fn eat(&mut self, expected: TokenKind) -> Result<Token, Error> {
        let Some(token) = self.lookahead.take() else {
            return Err(Error::Syntax(
                UnexpectedEndOfInput {
                    expected: SyntaxKind::Token(expected),
                    position: self.current_position(),
                }
                .into(),
            ));
        };

        if token.kind != expected {
            let error = UnexpectedToken {
                expected: SyntaxKind::Token(expected),
                found: token.clone(),
            };
            self.lookahead = Some(token);

            return Err(Error::Syntax(error.into()));
        }

        self.lookahead = self.tokenizer.next_token()?;
        Ok(token)
    }
}

#[cfg(test)]
mod tests;
