//! Contains the root of the syntax tree.

use getset::Getters;
use notal_base::source_file::{SourceElement, Span};
use serde::Serialize;

use super::literal::Literal;
use crate::{
    error::{Error, SyntaxKind, UnexpectedToken},
    parser::Parser,
};

/// Syntax Synopsis:
///
/// ``` ebnf
/// Program:
///     Literal
///     ;
/// ```
#[derive(Debug, Clone, PartialEq, PartialOrd, Getters, Serialize)]
#[serde(tag = "type")]
pub struct Program {
    /// Gets the sole literal of the program.
    #[get = "pub"]
    body: Literal,

    span: Span,
}

impl SourceElement for Program {
    fn span(&self) -> Span { self.span }
}

impl Program {
    /// Dissolves the [`Program`] into its body and span.
    #[must_use]
    pub fn dissolve(self) -> (Literal, Span) { (self.body, self.span) }
}

impl Parser {
    /// Parses a [`Program`] from the start of the source.
    ///
    /// The span of the program starts at the position before the first token is pulled and ends
    /// right after the literal is consumed.
    ///
    /// # Errors
    /// - any error returned by [`Self::parse_literal()`].
    /// - [`UnexpectedToken`]: a token follows the literal.
    pub fn parse_program(&mut self) -> Result<Program, Error> {
        let start = self.current_position();

        // the lookahead drives the predictive parsing
        self.prime()?;

        let body = self.parse_literal()?;

        if let Some(found) = self.lookahead().clone() {
            return Err(Error::Syntax(
                UnexpectedToken {
                    expected: SyntaxKind::EndOfInput,
                    found,
                }
                .into(),
            ));
        }

        Ok(Program {
            body,
            span: Span::new(start, self.current_position()),
        })
    }
}
