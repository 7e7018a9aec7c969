use jsonm_core::{JsonError, Result, TokenKind, Tokenizer};

/// Helper: tokenize the whole input, excluding the final `EndOfInput`.
fn lex(input: &str) -> Result<Vec<TokenKind>> {
    let mut tokenizer = Tokenizer::from_text(input);
    let mut kinds = Vec::new();
    loop {
        let token = tokenizer.next_token()?;
        if token.kind == TokenKind::EndOfInput {
            return Ok(kinds);
        }
        kinds.push(token.kind);
    }
}

fn string(s: &str) -> TokenKind {
    TokenKind::String(s.to_string())
}

fn number(s: &str) -> TokenKind {
    TokenKind::Number(s.to_string())
}

// ============================================================================
// Delimiters and whitespace
// ============================================================================

#[test]
fn delimiters() {
    assert_eq!(
        lex("{}[]:,").unwrap(),
        vec![
            TokenKind::LeftBrace,
            TokenKind::RightBrace,
            TokenKind::LeftBracket,
            TokenKind::RightBracket,
            TokenKind::Colon,
            TokenKind::Comma,
        ]
    );
}

#[test]
fn whitespace_is_skipped() {
    assert_eq!(
        lex("  {\n\t}\r\n ").unwrap(),
        vec![TokenKind::LeftBrace, TokenKind::RightBrace]
    );
}

#[test]
fn empty_input_is_end_of_input() {
    assert_eq!(lex("").unwrap(), Vec::<TokenKind>::new());
    assert!(lex(" \n ").unwrap().is_empty());
}

#[test]
fn end_of_input_repeats() {
    let mut tokenizer = Tokenizer::from_text("1");
    assert_eq!(tokenizer.next_token().unwrap().kind, number("1"));
    assert_eq!(tokenizer.next_token().unwrap().kind, TokenKind::EndOfInput);
    assert_eq!(tokenizer.next_token().unwrap().kind, TokenKind::EndOfInput);
}

// ============================================================================
// Strings
// ============================================================================

#[test]
fn string_literal() {
    assert_eq!(lex(r#""hello""#).unwrap(), vec![string("hello")]);
}

#[test]
fn string_keeps_inner_whitespace() {
    assert_eq!(lex("\"  a b\nc \"").unwrap(), vec![string("  a b\nc ")]);
}

#[test]
fn string_escapes_are_not_decoded() {
    assert_eq!(lex(r#""a\nb""#).unwrap(), vec![string(r"a\nb")]);
    // The backslash is an ordinary character; the next quote closes the string.
    assert_eq!(lex(r#""c\""#).unwrap(), vec![string(r"c\")]);
}

#[test]
fn empty_string() {
    assert_eq!(lex(r#""""#).unwrap(), vec![string("")]);
}

#[test]
fn unicode_string() {
    assert_eq!(lex("\"caf\u{e9} \u{4f60}\"").unwrap(), vec![string("caf\u{e9} \u{4f60}")]);
}

#[test]
fn unterminated_string() {
    let err = lex(r#"["abc"#).unwrap_err();
    assert!(
        matches!(err, JsonError::UnterminatedLiteral { line: 1, column: 2 }),
        "got {:?}",
        err
    );
}

// ============================================================================
// Numbers
// ============================================================================

#[test]
fn numbers_are_lexed_as_text() {
    assert_eq!(
        lex("42 -7 3.25 0").unwrap(),
        vec![number("42"), number("-7"), number("3.25"), number("0")]
    );
}

#[test]
fn number_run_includes_dashes_and_dots() {
    // Validation is the parser's job.
    assert_eq!(lex("1-2.3.4").unwrap(), vec![number("1-2.3.4")]);
    assert_eq!(lex("-").unwrap(), vec![number("-")]);
}

#[test]
fn number_stops_at_delimiter() {
    assert_eq!(
        lex("[1,22]").unwrap(),
        vec![
            TokenKind::LeftBracket,
            number("1"),
            TokenKind::Comma,
            number("22"),
            TokenKind::RightBracket,
        ]
    );
}

#[test]
fn exponent_is_not_part_of_a_number() {
    let err = lex("1e5").unwrap_err();
    assert!(matches!(
        err,
        JsonError::UnexpectedCharacter {
            ch: 'e',
            line: 1,
            column: 2
        }
    ));
}

// ============================================================================
// Literals
// ============================================================================

#[test]
fn boolean_and_null_literals() {
    assert_eq!(
        lex("true false null").unwrap(),
        vec![
            TokenKind::Boolean(true),
            TokenKind::Boolean(false),
            TokenKind::Null
        ]
    );
}

#[test]
fn misspelled_true() {
    let err = lex("tru").unwrap_err();
    assert!(matches!(
        err,
        JsonError::InvalidLiteral {
            expected: "true",
            ..
        }
    ));
}

#[test]
fn misspelled_false() {
    assert!(matches!(
        lex("falsy").unwrap_err(),
        JsonError::InvalidLiteral {
            expected: "false",
            ..
        }
    ));
}

#[test]
fn null_is_validated() {
    assert!(matches!(
        lex("nope").unwrap_err(),
        JsonError::InvalidLiteral {
            expected: "null",
            ..
        }
    ));
    assert!(matches!(
        lex("nu").unwrap_err(),
        JsonError::InvalidLiteral { .. }
    ));
}

#[test]
fn unexpected_character() {
    let err = lex("{\n  @}").unwrap_err();
    assert!(
        matches!(
            err,
            JsonError::UnexpectedCharacter {
                ch: '@',
                line: 2,
                column: 3
            }
        ),
        "got {:?}",
        err
    );
}

#[test]
fn token_positions() {
    let mut tokenizer = Tokenizer::from_text("[\n  true]");
    let open = tokenizer.next_token().unwrap();
    assert_eq!((open.line, open.column), (1, 1));
    let literal = tokenizer.next_token().unwrap();
    assert_eq!((literal.line, literal.column), (2, 3));
    let close = tokenizer.next_token().unwrap();
    assert_eq!((close.line, close.column), (2, 7));
}

#[test]
fn tokenizer_over_any_char_iterator() {
    let source = vec!['[', '1', ']'];
    let mut tokenizer = Tokenizer::new(source.into_iter());
    assert_eq!(tokenizer.next_token().unwrap().kind, TokenKind::LeftBracket);
    assert_eq!(tokenizer.next_token().unwrap().kind, number("1"));
    assert_eq!(tokenizer.next_token().unwrap().kind, TokenKind::RightBracket);
}
