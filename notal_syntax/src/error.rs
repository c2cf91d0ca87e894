//! Contains all kinds of errors that can occur while parsing the source code.

use std::fmt::Display;

use derive_more::From;
use enum_as_inner::EnumAsInner;
use notal_base::{
    log::{Message, Severity},
    source_file::{Position, SourceElement, Span},
};
use notal_lexical::token::{Token, TokenKind};

/// Enumeration containing all kinds of syntax the parser can expect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, EnumAsInner)]
pub enum SyntaxKind {
    /// A token of the given kind.
    Token(TokenKind),

    /// Any literal token.
    Literal,

    /// Nothing but the end of the source.
    EndOfInput,
}

impl Display for SyntaxKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Token(kind) => write!(f, "{kind}"),
            Self::Literal => {
                for (index, kind) in TokenKind::RULES.iter().enumerate() {
                    if index > 0 {
                        f.write_str(" or ")?;
                    }
                    write!(f, "{kind}")?;
                }
                Ok(())
            }
            Self::EndOfInput => f.write_str("end of input"),
        }
    }
}

/// The source ended while the parser still expected a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct UnexpectedEndOfInput {
    /// The kind of syntax that was expected.
    pub expected: SyntaxKind,

    /// The position of the end of the source.
    pub position: Position,
}

impl Display for UnexpectedEndOfInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            Message::new(
                Severity::Error,
                format_args!("unexpected end of input, expected {}", self.expected)
            )
        )
    }
}

impl std::error::Error for UnexpectedEndOfInput {}

/// A syntax/token is expected but found an other token.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct UnexpectedToken {
    /// The kind of syntax that was expected.
    pub expected: SyntaxKind,

    /// The token that was found instead.
    pub found: Token,
}

impl Display for UnexpectedToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            Message::new(
                Severity::Error,
                format_args!(
                    "unexpected token `{}`, expected {}",
                    self.found.value,
                    self.expected
                )
            )
        )
    }
}

impl std::error::Error for UnexpectedToken {}

/// Is an enumeration containing all kinds of syntactic errors that can occur while parsing the
/// token pulled from the tokenizer.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, EnumAsInner, From, thiserror::Error)]
#[allow(missing_docs)]
pub enum SyntaxError {
    #[error(transparent)]
    UnexpectedEndOfInput(UnexpectedEndOfInput),

    #[error(transparent)]
    UnexpectedToken(UnexpectedToken),
}

/// Is the error returned by the parser: either a lexical error propagated unchanged from the
/// tokenizer, or a syntax error.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, EnumAsInner, From, thiserror::Error)]
#[allow(missing_docs)]
pub enum Error {
    #[error(transparent)]
    Lexical(notal_lexical::error::Error),

    #[error(transparent)]
    Syntax(SyntaxError),
}

impl Error {
    /// Gets the span of source code the error points at.
    #[must_use]
    pub fn span(&self) -> Span {
        match self {
            Self::Lexical(error) => Span::at(error.position()),
            Self::Syntax(SyntaxError::UnexpectedEndOfInput(error)) => Span::at(error.position),
            Self::Syntax(SyntaxError::UnexpectedToken(error)) => error.found.span(),
        }
    }

    /// Gets a short hint describing how to fix the error.
    #[must_use]
    pub fn help(&self) -> &'static str {
        match self {
            Self::Lexical(error) => error.help(),
            Self::Syntax(SyntaxError::UnexpectedEndOfInput(..)) => {
                "a program is a single number or string literal"
            }
            Self::Syntax(SyntaxError::UnexpectedToken(..)) => {
                "a program holds exactly one literal"
            }
        }
    }
}
