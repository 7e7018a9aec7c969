//! Recursive-descent parser: tokens in, [`Value`] trees out.
//!
//! ```text
//! value   := object | array | STRING | NUMBER | BOOLEAN | NULL
//! object  := '{' [ member (',' member)* ] '}'
//! member  := STRING ':' value
//! array   := '[' [ value (',' value)* ] ']'
//! ```
//!
//! Each production is one method. `parse_object` and `parse_array` call back
//! into `parse_value`, so nesting is handled by plain recursion; every frame
//! keeps its own separator state, and a depth counter bounds the recursion at
//! [`ParseOptions::max_depth`].
//!
//! Object members are prepended as they are read, so a parsed object iterates
//! its members in reverse document order and, for a repeated key, lookups find
//! the last occurrence in the text. Array elements keep document order.
//!
//! A stream may hold several top-level documents one after another.
//! [`Parser::next_document`] reads them one at a time and returns `None` once
//! only whitespace remains; an empty stream is "no document", not an error.

use std::io::Read;
use std::str::Chars;

use log::{debug, warn};

use crate::error::{JsonError, Result};
use crate::options::ParseOptions;
use crate::sequence::Sequence;
use crate::tokenizer::{Token, TokenKind, Tokenizer};
use crate::value::Value;

/// Parser over a character stream.
pub struct Parser<I: Iterator<Item = char>> {
    tokenizer: Tokenizer<I>,
    options: ParseOptions,
    depth: usize,
    failed: bool,
}

impl<'a> Parser<Chars<'a>> {
    /// Parser over a string slice with default options.
    pub fn from_text(input: &'a str) -> Self {
        Self::new(input.chars())
    }
}

impl<I: Iterator<Item = char>> Parser<I> {
    pub fn new(chars: I) -> Self {
        Self::with_options(chars, ParseOptions::default())
    }

    pub fn with_options(chars: I, options: ParseOptions) -> Self {
        Self {
            tokenizer: Tokenizer::new(chars),
            options,
            depth: 0,
            failed: false,
        }
    }

    /// Read the next top-level document.
    ///
    /// Returns `Ok(None)` at end of input. Any error aborts the current
    /// document; nothing of it is returned.
    pub fn next_document(&mut self) -> Result<Option<Value>> {
        self.depth = 0;
        let token = self.tokenizer.next_token()?;
        let value = match token.kind {
            TokenKind::EndOfInput => {
                debug!("end of input at {}:{}", token.line, token.column);
                return Ok(None);
            }
            TokenKind::LeftBrace
            | TokenKind::String(_)
            | TokenKind::Number(_)
            | TokenKind::LeftBracket
            | TokenKind::Boolean(_)
            | TokenKind::Null => self.parse_value(token)?,
            _ => {
                return Err(malformed(
                    &token,
                    format!("expected a value, found {}", token.kind.describe()),
                ))
            }
        };
        debug!("parsed top-level {}", value.type_name());
        Ok(Some(value))
    }

    /// Build a value starting from an already-read token.
    fn parse_value(&mut self, token: Token) -> Result<Value> {
        match token.kind {
            TokenKind::LeftBrace => self.parse_object(&token),
            TokenKind::LeftBracket => self.parse_array(&token),
            TokenKind::String(s) => Ok(Value::String(s)),
            TokenKind::Number(ref text) => parse_number(text, &token),
            TokenKind::Boolean(b) => Ok(Value::Bool(b)),
            TokenKind::Null => Ok(Value::Null),
            TokenKind::EndOfInput => Err(malformed(&token, "unexpected end of input")),
            _ => Err(malformed(
                &token,
                format!("expected a value, found {}", token.kind.describe()),
            )),
        }
    }

    /// `object := '{' [ member (',' member)* ] '}'`, with the `{` already read.
    fn parse_object(&mut self, open: &Token) -> Result<Value> {
        self.enter(open)?;
        let mut entries = Sequence::new();

        let mut token = self.tokenizer.next_token()?;
        if token.kind == TokenKind::RightBrace {
            self.depth -= 1;
            return Ok(Value::Object(entries));
        }

        loop {
            // member := STRING ':' value
            let key = match token.kind {
                TokenKind::String(key) => key,
                TokenKind::EndOfInput => return Err(malformed(&token, "unterminated object")),
                ref other => {
                    return Err(malformed(
                        &token,
                        format!("expected a string key, found {}", other.describe()),
                    ))
                }
            };

            let colon = self.tokenizer.next_token()?;
            if colon.kind != TokenKind::Colon {
                return Err(malformed(
                    &colon,
                    format!("expected `:` after key {:?}, found {}", key, colon.kind.describe()),
                ));
            }

            let value_token = self.tokenizer.next_token()?;
            let value = self.parse_value(value_token)?;
            // Members are inserted like `Value::insert`: each one goes in front.
            entries.push_front((key, value));

            let separator = self.tokenizer.next_token()?;
            match separator.kind {
                TokenKind::Comma => {
                    token = self.tokenizer.next_token()?;
                    match token.kind {
                        TokenKind::RightBrace => {
                            return Err(malformed(&token, "trailing comma before `}`"))
                        }
                        TokenKind::Comma => return Err(malformed(&token, "duplicate comma")),
                        _ => {}
                    }
                }
                TokenKind::RightBrace => break,
                TokenKind::EndOfInput => {
                    return Err(malformed(&separator, "unterminated object"))
                }
                ref other => {
                    return Err(malformed(
                        &separator,
                        format!("expected `,` or `}}`, found {}", other.describe()),
                    ))
                }
            }
        }

        self.depth -= 1;
        Ok(Value::Object(entries))
    }

    /// `array := '[' [ value (',' value)* ] ']'`, with the `[` already read.
    fn parse_array(&mut self, open: &Token) -> Result<Value> {
        self.enter(open)?;
        let mut items = Sequence::new();

        let mut token = self.tokenizer.next_token()?;
        if token.kind == TokenKind::RightBracket {
            self.depth -= 1;
            return Ok(Value::Array(items));
        }

        loop {
            if token.kind == TokenKind::EndOfInput {
                return Err(malformed(&token, "unterminated array"));
            }
            items.push_back(self.parse_value(token)?);

            let separator = self.tokenizer.next_token()?;
            match separator.kind {
                TokenKind::Comma => {
                    token = self.tokenizer.next_token()?;
                    match token.kind {
                        TokenKind::RightBracket => {
                            return Err(malformed(&token, "trailing comma before `]`"))
                        }
                        TokenKind::Comma => return Err(malformed(&token, "duplicate comma")),
                        _ => {}
                    }
                }
                TokenKind::RightBracket => break,
                TokenKind::EndOfInput => {
                    return Err(malformed(&separator, "unterminated array"))
                }
                ref other => {
                    return Err(malformed(
                        &separator,
                        format!("expected `,` or `]`, found {}", other.describe()),
                    ))
                }
            }
        }

        self.depth -= 1;
        Ok(Value::Array(items))
    }

    /// Open one nesting level, failing once the configured maximum is passed.
    fn enter(&mut self, open: &Token) -> Result<()> {
        self.depth += 1;
        if self.depth > self.options.max_depth {
            warn!(
                "nesting depth limit {} exceeded at {}:{}",
                self.options.max_depth, open.line, open.column
            );
            return Err(JsonError::NestingTooDeep {
                depth: self.depth,
                max: self.options.max_depth,
                line: open.line,
                column: open.column,
            });
        }
        Ok(())
    }
}

/// Yields each top-level document in turn. Stops after the first error.
impl<I: Iterator<Item = char>> Iterator for Parser<I> {
    type Item = Result<Value>;

    fn next(&mut self) -> Option<Result<Value>> {
        if self.failed {
            return None;
        }
        match self.next_document() {
            Ok(Some(value)) => Some(Ok(value)),
            Ok(None) => None,
            Err(e) => {
                self.failed = true;
                Some(Err(e))
            }
        }
    }
}

/// Convert numeric token text. Text that overflows `f64` is rejected rather
/// than read as an infinity.
fn parse_number(text: &str, token: &Token) -> Result<Value> {
    let failure = |source| JsonError::NumberConversionFailure {
        text: text.to_string(),
        line: token.line,
        column: token.column,
        source,
    };
    let n = text.parse::<f64>().map_err(|e| failure(Some(e)))?;
    if !n.is_finite() {
        return Err(failure(None));
    }
    Ok(Value::Number(n))
}

fn malformed(token: &Token, message: impl Into<String>) -> JsonError {
    JsonError::MalformedStructure {
        message: message.into(),
        line: token.line,
        column: token.column,
    }
}

/// Parse `input` and return its last top-level document.
///
/// Documents are read in order until end of input, each replacing the one
/// before, so `"1 2"` yields `2`. Input with no document at all yields
/// `Value::Null`.
///
/// ```
/// use jsonm_core::{parse, Value};
///
/// let value = parse(r#"{"a":1,"b":[true,null]}"#).unwrap();
/// assert_eq!(value.get("a").unwrap(), &Value::Number(1.0));
/// ```
pub fn parse(input: &str) -> Result<Value> {
    parse_with_options(input, ParseOptions::default())
}

/// [`parse`] with explicit options.
pub fn parse_with_options(input: &str, options: ParseOptions) -> Result<Value> {
    let mut parser = Parser::with_options(input.chars(), options);
    let mut last = Value::Null;
    while let Some(value) = parser.next_document()? {
        last = value;
    }
    Ok(last)
}

/// Parse every top-level document in `input`, in order.
pub fn parse_all(input: &str) -> Result<Vec<Value>> {
    parse_all_with_options(input, ParseOptions::default())
}

/// [`parse_all`] with explicit options.
pub fn parse_all_with_options(input: &str, options: ParseOptions) -> Result<Vec<Value>> {
    Parser::with_options(input.chars(), options).collect()
}

/// Read `reader` to the end as UTF-8 and parse every document in it.
pub fn parse_reader<R: Read>(reader: R) -> Result<Vec<Value>> {
    parse_reader_with_options(reader, ParseOptions::default())
}

/// [`parse_reader`] with explicit options.
pub fn parse_reader_with_options<R: Read>(
    mut reader: R,
    options: ParseOptions,
) -> Result<Vec<Value>> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    parse_all_with_options(&text, options)
}
