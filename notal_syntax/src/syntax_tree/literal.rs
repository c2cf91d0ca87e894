//! Contains the syntax trees of literal values and their parsing logic.

use enum_as_inner::EnumAsInner;
use getset::{CopyGetters, Getters};
use notal_base::source_file::{SourceElement, Span};
use notal_lexical::token::TokenKind;
use serde::{Serialize, Serializer};

use crate::{
    error::{Error, SyntaxKind, UnexpectedEndOfInput},
    parser::Parser,
};

/// Syntax Synopsis:
///
/// ``` ebnf
/// NumericLiteral:
///     NUMBER
///     ;
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, CopyGetters, Serialize)]
pub struct NumericLiteral {
    /// Gets the value of the literal, parsed in base 10.
    ///
    /// Digit runs beyond the precision of a double are rounded to the nearest representable
    /// value, or to infinity past its range.
    #[get_copy = "pub"]
    #[serde(serialize_with = "serialize_number")]
    value: f64,

    span: Span,
}

impl SourceElement for NumericLiteral {
    fn span(&self) -> Span { self.span }
}

/// The largest integer below which every integral double is exactly representable.
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_992.0;

// integral values are written without a fractional part
#[allow(clippy::trivially_copy_pass_by_ref, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn serialize_number<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if value.fract() == 0.0 && (0.0..MAX_SAFE_INTEGER).contains(value) {
        serializer.serialize_u64(*value as u64)
    } else {
        serializer.serialize_f64(*value)
    }
}

/// Syntax Synopsis:
///
/// ``` ebnf
/// StringLiteral:
///     STRING
///     ;
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Getters, Serialize)]
pub struct StringLiteral {
    /// Gets the content of the literal, without the surrounding quotes.
    #[get = "pub"]
    value: String,

    span: Span,
}

impl SourceElement for StringLiteral {
    fn span(&self) -> Span { self.span }
}

/// Syntax Synopsis:
///
/// ``` ebnf
/// Literal:
///     NumericLiteral
///     | StringLiteral
///     ;
/// ```
#[derive(Debug, Clone, PartialEq, PartialOrd, EnumAsInner, Serialize)]
#[serde(tag = "type")]
#[allow(missing_docs)]
pub enum Literal {
    #[serde(rename = "NumericLiteral")]
    Numeric(NumericLiteral),

    #[serde(rename = "StringLiteral")]
    String(StringLiteral),
}

impl SourceElement for Literal {
    fn span(&self) -> Span {
        match self {
            Self::Numeric(literal) => literal.span(),
            Self::String(literal) => literal.span(),
        }
    }
}

impl Parser {
    /// Parses a [`Literal`], choosing the production from the kind of the lookahead token.
    ///
    /// # Errors
    /// - [`UnexpectedEndOfInput`]: there is no lookahead token.
    /// - any error returned by [`Self::parse_numeric_literal()`] or
    ///   [`Self::parse_string_literal()`].
    pub fn parse_literal(&mut self) -> Result<Literal, Error> {
        match self.lookahead().as_ref().map(|token| token.kind) {
            Some(TokenKind::Number) => self.parse_numeric_literal().map(Literal::Numeric),
            Some(TokenKind::String) => self.parse_string_literal().map(Literal::String),
            None => Err(Error::Syntax(
                UnexpectedEndOfInput {
                    expected: SyntaxKind::Literal,
                    position: self.current_position(),
                }
                .into(),
            )),
        }
    }

    /// Parses a [`NumericLiteral`].
    ///
    /// # Errors
    /// Any error returned by [`Self::eat()`].
    pub fn parse_numeric_literal(&mut self) -> Result<NumericLiteral, Error> {
        let token = self.eat(TokenKind::Number)?;

        // a non-empty run of ASCII digits is always a valid float, overflowing to infinity
        let value = token.value.parse().unwrap_or(f64::INFINITY);

        Ok(NumericLiteral {
            value,
            span: token.span,
        })
    }

    /// Parses a [`StringLiteral`].
    ///
    /// # Errors
    /// - any error returned by [`Self::eat()`].
    pub fn parse_string_literal(&mut self) -> Result<StringLiteral, Error> {
        let token = self.eat(TokenKind::String)?;

        // strips the opening and closing `"`
        let value = token.value[1..token.value.len() - 1].to_owned();

        Ok(StringLiteral {
            value,
            span: token.span,
        })
    }
}
