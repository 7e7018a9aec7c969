//! Tokenizer: turns a character stream into lexical tokens, one at a time.
//!
//! The tokenizer keeps a single character of lookahead and never buffers more
//! than the token it is currently building. Its rules:
//!
//! - Whitespace between tokens is skipped.
//! - `"` starts a string that runs verbatim to the next `"`. Backslashes are
//!   ordinary characters; there is no escape decoding.
//! - `-` or a digit starts a number that continues over digits, `-` and `.`.
//!   The text is only lexed here; conversion to `f64` happens in the parser.
//! - `true`, `false` and `null` must be spelled out in full.
//!
//! Every token records the line and column of its first character.

use std::iter::Peekable;
use std::str::Chars;

use log::trace;

use crate::error::{JsonError, Result};

/// What a token is, with its text where it has one.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    /// `{`
    LeftBrace,
    /// `}`
    RightBrace,
    /// `[`
    LeftBracket,
    /// `]`
    RightBracket,
    /// `:`
    Colon,
    /// `,`
    Comma,
    /// String contents without the surrounding quotes.
    String(String),
    /// Raw numeric text, not yet converted.
    Number(String),
    Boolean(bool),
    Null,
    EndOfInput,
}

impl TokenKind {
    /// Short human-readable description for error messages.
    pub fn describe(&self) -> String {
        match self {
            TokenKind::LeftBrace => "`{`".to_string(),
            TokenKind::RightBrace => "`}`".to_string(),
            TokenKind::LeftBracket => "`[`".to_string(),
            TokenKind::RightBracket => "`]`".to_string(),
            TokenKind::Colon => "`:`".to_string(),
            TokenKind::Comma => "`,`".to_string(),
            TokenKind::String(s) => format!("string {:?}", s),
            TokenKind::Number(n) => format!("number {}", n),
            TokenKind::Boolean(b) => format!("boolean {}", b),
            TokenKind::Null => "null".to_string(),
            TokenKind::EndOfInput => "end of input".to_string(),
        }
    }
}

/// A token and the 1-based position of its first character.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub line: usize,
    pub column: usize,
}

/// Pull-based tokenizer over any character iterator.
pub struct Tokenizer<I: Iterator<Item = char>> {
    chars: Peekable<I>,
    line: usize,
    column: usize,
}

impl<'a> Tokenizer<Chars<'a>> {
    /// Tokenize a string slice.
    pub fn from_text(input: &'a str) -> Self {
        Self::new(input.chars())
    }
}

impl<I: Iterator<Item = char>> Tokenizer<I> {
    pub fn new(chars: I) -> Self {
        Self {
            chars: chars.peekable(),
            line: 1,
            column: 1,
        }
    }

    /// Line and column of the next unread character.
    pub fn position(&self) -> (usize, usize) {
        (self.line, self.column)
    }

    fn peek(&mut self) -> Option<char> {
        self.chars.peek().copied()
    }

    fn advance(&mut self) -> Option<char> {
        let c = self.chars.next()?;
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(c)
    }

    fn skip_whitespace(&mut self) {
        while let Some(' ' | '\n' | '\t' | '\r') = self.peek() {
            self.advance();
        }
    }

    /// Read the next token. Returns `EndOfInput` once the stream is exhausted,
    /// and keeps returning it on later calls.
    pub fn next_token(&mut self) -> Result<Token> {
        self.skip_whitespace();
        let (line, column) = self.position();

        let kind = match self.advance() {
            None => TokenKind::EndOfInput,
            Some('{') => TokenKind::LeftBrace,
            Some('}') => TokenKind::RightBrace,
            Some('[') => TokenKind::LeftBracket,
            Some(']') => TokenKind::RightBracket,
            Some(':') => TokenKind::Colon,
            Some(',') => TokenKind::Comma,
            Some('"') => self.read_string(line, column)?,
            Some(c @ ('-' | '0'..='9')) => self.read_number(c),
            Some('t') => {
                self.expect_rest("true", line, column)?;
                TokenKind::Boolean(true)
            }
            Some('f') => {
                self.expect_rest("false", line, column)?;
                TokenKind::Boolean(false)
            }
            Some('n') => {
                self.expect_rest("null", line, column)?;
                TokenKind::Null
            }
            Some(ch) => return Err(JsonError::UnexpectedCharacter { ch, line, column }),
        };

        trace!("token {:?} at {}:{}", kind, line, column);
        Ok(Token { kind, line, column })
    }

    /// Read string contents up to the closing quote. The opening quote has
    /// already been consumed.
    fn read_string(&mut self, line: usize, column: usize) -> Result<TokenKind> {
        let mut text = String::new();
        loop {
            match self.advance() {
                Some('"') => return Ok(TokenKind::String(text)),
                Some(c) => text.push(c),
                None => return Err(JsonError::UnterminatedLiteral { line, column }),
            }
        }
    }

    /// Accumulate a numeric run starting with `first`.
    fn read_number(&mut self, first: char) -> TokenKind {
        let mut text = String::from(first);
        while let Some(c @ ('-' | '.' | '0'..='9')) = self.peek() {
            text.push(c);
            self.advance();
        }
        TokenKind::Number(text)
    }

    /// Match the remainder of `literal` after its first character.
    fn expect_rest(&mut self, literal: &'static str, line: usize, column: usize) -> Result<()> {
        for expected in literal.chars().skip(1) {
            if self.advance() != Some(expected) {
                return Err(JsonError::InvalidLiteral {
                    expected: literal,
                    line,
                    column,
                });
            }
        }
        Ok(())
    }
}
