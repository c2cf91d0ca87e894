//! Contains all kinds of lexical errors that can occur while tokenizing the source code.

use std::fmt::Display;

use derive_more::From;
use enum_as_inner::EnumAsInner;
use notal_base::{
    log::{Message, Severity},
    source_file::Position,
};

/// No lexical rule accepts the character found at the current position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct UnexpectedCharacter {
    /// The offending character.
    pub character: char,

    /// The position of the offending character.
    pub position: Position,
}

impl Display for UnexpectedCharacter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            Message::new(
                Severity::Error,
                format_args!(
                    "unexpected character `{}` at {}",
                    self.character.escape_debug(),
                    self.position
                )
            )
        )
    }
}

impl std::error::Error for UnexpectedCharacter {}

/// The source code contains a `"` that is never closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct UnterminatedString {
    /// The position of the opening `"`.
    pub position: Position,
}

impl Display for UnterminatedString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            Message::new(
                Severity::Error,
                format_args!("found an unterminated string literal at {}", self.position)
            )
        )
    }
}

impl std::error::Error for UnterminatedString {}

/// Is an enumeration containing all kinds of lexical errors that can occur while tokenizing the
/// source code.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, EnumAsInner, From, thiserror::Error,
)]
#[allow(missing_docs)]
pub enum Error {
    #[error(transparent)]
    UnexpectedCharacter(UnexpectedCharacter),

    #[error(transparent)]
    UnterminatedString(UnterminatedString),
}

impl Error {
    /// Gets the position the error was reported at.
    #[must_use]
    pub fn position(&self) -> Position {
        match self {
            Self::UnexpectedCharacter(error) => error.position,
            Self::UnterminatedString(error) => error.position,
        }
    }

    /// Gets a short hint describing how to fix the error.
    #[must_use]
    pub fn help(&self) -> &'static str {
        match self {
            Self::UnexpectedCharacter(..) => "only digits and double-quoted strings are accepted",
            Self::UnterminatedString(..) => "this string literal is not closed by a `\"`",
        }
    }
}
