use notal_base::source_file::{Position, SourceElement, Span};
use notal_lexical::{
    error::{UnexpectedCharacter, UnterminatedString},
    token::TokenKind,
};

use super::Parser;
use crate::error::{Error, SyntaxError, SyntaxKind, UnexpectedEndOfInput};

#[test]
fn empty_input_is_a_syntax_error() {
    let error = Parser::new().parse("").unwrap_err();

    assert_eq!(
        error,
        Error::Syntax(SyntaxError::UnexpectedEndOfInput(UnexpectedEndOfInput {
            expected: SyntaxKind::Literal,
            position: Position::new(1, 0),
        }))
    );
    assert!(error
        .to_string()
        .contains("unexpected end of input, expected NUMBER or STRING"));
}

#[test]
fn unrecognized_character_is_a_lexical_error() {
    let error = Parser::new().parse("abc").unwrap_err();

    assert_eq!(
        error,
        Error::Lexical(
            UnexpectedCharacter {
                character: 'a',
                position: Position::new(1, 0),
            }
            .into()
        )
    );
    assert_eq!(error.span(), Span::at(Position::new(1, 0)));

    let error = Parser::new().parse("@").unwrap_err();
    assert_eq!(
        error
            .as_lexical()
            .and_then(|error| error.as_unexpected_character())
            .map(|error| error.character),
        Some('@')
    );
}

#[test]
fn unterminated_string_is_a_lexical_error() {
    let error = Parser::new().parse("\"abc").unwrap_err();

    assert_eq!(
        error,
        Error::Lexical(
            UnterminatedString {
                position: Position::new(1, 0),
            }
            .into()
        )
    );
}

#[test]
fn trailing_token_is_rejected() {
    let error = Parser::new().parse("42\"a\"").unwrap_err();
    let error = error
        .as_syntax()
        .and_then(SyntaxError::as_unexpected_token)
        .unwrap();

    assert_eq!(error.expected, SyntaxKind::EndOfInput);
    assert_eq!(error.found.kind, TokenKind::String);
    assert_eq!(error.found.value, "\"a\"");
    assert_eq!(
        error.found.span,
        Span::new(Position::new(1, 2), Position::new(1, 5))
    );
}

#[test]
fn trailing_whitespace_is_a_lexical_error() {
    let error = Parser::new().parse("42 ").unwrap_err();

    assert_eq!(
        error
            .as_lexical()
            .and_then(|error| error.as_unexpected_character())
            .copied(),
        Some(UnexpectedCharacter {
            character: ' ',
            position: Position::new(1, 2),
        })
    );
}

#[test]
fn long_digit_runs_are_numeric_literals() {
    let digits = "123456789012345678901234567890";
    let program = Parser::new().parse(digits).unwrap();
    let literal = program.body().as_numeric().unwrap();

    assert_eq!(literal.value(), digits.parse::<f64>().unwrap());
    assert!((literal.value() - 1.234_567_890_123_456_7e29).abs() < 1e15);
    assert_eq!(
        literal.span(),
        Span::new(Position::new(1, 0), Position::new(1, 30))
    );

    let program = Parser::new().parse("9".repeat(400)).unwrap();
    assert_eq!(
        program.body().as_numeric().unwrap().value(),
        f64::INFINITY
    );
    assert_eq!(
        serde_json::to_value(&program).unwrap()["body"]["value"],
        serde_json::Value::Null
    );
}

#[test]
fn eat_checks_the_lookahead_kind() {
    let mut parser = Parser::new();
    parser.tokenizer.init("\"a\"");
    parser.prime().unwrap();

    let error = parser.eat(TokenKind::Number).unwrap_err();
    let error = error
        .as_syntax()
        .and_then(SyntaxError::as_unexpected_token)
        .unwrap();
    assert_eq!(error.expected, SyntaxKind::Token(TokenKind::Number));
    assert_eq!(error.found.kind, TokenKind::String);
    assert!(error.to_string().contains("expected NUMBER"));

    // the mismatched token stays in the lookahead
    assert_eq!(
        parser.lookahead().as_ref().map(|token| token.kind),
        Some(TokenKind::String)
    );

    let token = parser.eat(TokenKind::String).unwrap();
    assert_eq!(token.value, "\"a\"");
    assert_eq!(parser.lookahead(), &None);

    let error = parser.eat(TokenKind::String).unwrap_err();
    assert_eq!(
        error,
        Error::Syntax(SyntaxError::UnexpectedEndOfInput(UnexpectedEndOfInput {
            expected: SyntaxKind::Token(TokenKind::String),
            position: Position::new(1, 3),
        }))
    );
}

#[test]
fn parser_is_reusable() {
    let mut parser = Parser::new();

    let first = parser.parse("1").unwrap();
    assert_eq!(first.body().as_numeric().unwrap().value(), 1.0);

    assert!(parser.parse("@").is_err());

    let second = parser.parse("\"x\"").unwrap();
    assert_eq!(second.body().as_string().unwrap().value(), "x");
    assert_eq!(parser.source(), "\"x\"");
    assert_eq!(parser.lookahead(), &None);
}
