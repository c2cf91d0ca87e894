//! Is a module containing the [`Token`] type and the lexical rules that produce it.

use enum_as_inner::EnumAsInner;
use notal_base::source_file::{SourceElement, Span};
use serde::Serialize;
use strum_macros::{Display, EnumIter};

/// Is an enumeration of every kind of token in the Notal language.
///
/// Each kind owns one lexical rule, see [`TokenKind::scan`].
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    EnumIter,
    Display,
    Serialize,
)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TokenKind {
    /// A run of decimal digits, `[0-9]+`.
    Number,

    /// A double-quoted run of characters without escapes, `"[^"]*"`.
    String,
}

/// Is the outcome of trying a lexical rule against the unconsumed input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, EnumAsInner)]
pub enum Scan {
    /// The rule matched a prefix of the given length in bytes.
    Matched(usize),

    /// The rule doesn't apply at this position.
    Rejected,

    /// The rule started matching but the input ended before the closing delimiter.
    Unterminated,
}

impl TokenKind {
    /// The lexical rules in the order the tokenizer tries them.
    ///
    /// The first rule that matches wins, so a new rule must be placed after every rule whose
    /// matches it could shadow.
    pub const RULES: [Self; 2] = [Self::Number, Self::String];

    /// Tries the lexical rule of this kind against the start of `text`.
    #[must_use]
    pub fn scan(self, text: &str) -> Scan {
        match self {
            Self::Number => {
                let length = text.bytes().take_while(u8::is_ascii_digit).count();

                if length == 0 {
                    Scan::Rejected
                } else {
                    Scan::Matched(length)
                }
            }
            Self::String => {
                let Some(body) = text.strip_prefix('"') else {
                    return Scan::Rejected;
                };

                // both quotes are one byte long
                body.find('"')
                    .map_or(Scan::Unterminated, |length| Scan::Matched(length + 2))
            }
        }
    }
}

/// Represents a run of source text matched by one lexical rule.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Token {
    /// Is the kind of the rule that matched the token.
    #[serde(rename = "type")]
    pub kind: TokenKind,

    /// Is the raw matched text, quotes included.
    pub value: String,

    /// Is the span that makes up the token.
    pub span: Span,
}

impl SourceElement for Token {
    fn span(&self) -> Span { self.span }
}
