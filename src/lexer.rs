//! Lexer
//!
//! Turns the raw text of an ARFF file into a lazy stream of tokens.
//! The stream is single pass; tokenizing the text again requires a new
//! [`Lexer`].
use crate::errors::ArborError;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

/// Legacy reserved words carried over from an older grammar. They are
/// recognized whenever a string token's text matches one exactly, but play
/// no role in the attribute/data grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Reserved {
    If,
    Then,
    EndIf,
    Next,
    Gosub,
    Return,
}

const RESERVED_WORDS: [(&str, Reserved); 6] = [
    ("IF", Reserved::If),
    ("THEN", Reserved::Then),
    ("ENDIF", Reserved::EndIf),
    ("NEXT", Reserved::Next),
    ("GOSUB", Reserved::Gosub),
    ("RETURN", Reserved::Return),
];

fn reserved_lookup(text: &str) -> Option<Reserved> {
    RESERVED_WORDS
        .iter()
        .find(|(word, _)| *word == text)
        .map(|(_, reserved)| *reserved)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TokenKind {
    RelationDecl,
    AttrDecl,
    DataDecl,
    String,
    Number,
    /// `numeric`, `integer` and `real` are all treated as "numeric".
    NumDatatype,
    LeftCurly,
    RightCurly,
    Comma,
    /// The `?` missing value marker.
    Missing,
    Reserved(Reserved),
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            TokenKind::RelationDecl => "@relation",
            TokenKind::AttrDecl => "@attribute",
            TokenKind::DataDecl => "@data",
            TokenKind::String => "string",
            TokenKind::Number => "number",
            TokenKind::NumDatatype => "numeric datatype",
            TokenKind::LeftCurly => "'{'",
            TokenKind::RightCurly => "'}'",
            TokenKind::Comma => "','",
            TokenKind::Missing => "'?'",
            TokenKind::Reserved(_) => "reserved word",
        };
        write!(f, "{}", name)
    }
}

/// One lexeme with its position: `line` is 1-based, `column` is the 0-based
/// offset from the last line start.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub line: usize,
    pub column: usize,
}

/// Word constituents of a generic string token.
fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || matches!(c, '_' | '$' | '<' | '>' | '=')
}

/// Hyphens join word runs inside a string token, but never lead one.
fn is_joiner(c: char) -> bool {
    matches!(c, '-' | '\u{2013}')
}

pub struct Lexer<'a> {
    src: &'a str,
    pos: usize,
    line: usize,
    line_start: usize,
    failed: bool,
}

impl<'a> Lexer<'a> {
    pub fn new(src: &'a str) -> Self {
        Lexer {
            src,
            pos: 0,
            line: 1,
            line_start: 0,
            failed: false,
        }
    }

    fn peek(&self) -> Option<char> {
        self.src[self.pos..].chars().next()
    }

    fn peek_second(&self) -> Option<char> {
        let mut chars = self.src[self.pos..].chars();
        chars.next()?;
        chars.next()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    /// Consume a generic string token: word characters with internal joiners.
    fn scan_word(&mut self) -> &'a str {
        let start = self.pos;
        while let Some(c) = self.peek() {
            if is_word_char(c) {
                self.bump();
            } else if is_joiner(c) && self.peek_second().map_or(false, is_word_char) {
                self.bump();
            } else {
                break;
            }
        }
        &self.src[start..self.pos]
    }

    /// Consume an integer or decimal literal.
    fn scan_number(&mut self) {
        while self.peek().map_or(false, |c| c.is_ascii_digit()) {
            self.bump();
        }
        if self.peek() == Some('.') && self.peek_second().map_or(false, |c| c.is_ascii_digit()) {
            self.bump();
            while self.peek().map_or(false, |c| c.is_ascii_digit()) {
                self.bump();
            }
        }
    }

    fn emit(&self, kind: TokenKind, start: usize) -> Token {
        Token {
            kind,
            text: self.src[start..self.pos].to_string(),
            line: self.line,
            column: start - self.line_start,
        }
    }

    fn fail(&mut self, c: char, column: usize) -> ArborError {
        self.failed = true;
        ArborError::UnexpectedCharacter(c, self.line, column)
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Result<Token, ArborError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        // Discard comments, newlines and horizontal whitespace. Newlines are
        // tracked for position bookkeeping but never emitted.
        let c = loop {
            let c = self.peek()?;
            match c {
                '%' => {
                    while let Some(n) = self.peek() {
                        if n == '\n' {
                            break;
                        }
                        self.bump();
                    }
                }
                '\n' => {
                    self.bump();
                    self.line += 1;
                    self.line_start = self.pos;
                }
                ' ' | '\t' | '\r' => {
                    self.bump();
                }
                _ => break c,
            }
        };

        let start = self.pos;
        let column = start - self.line_start;
        let token = match c {
            '{' => {
                self.bump();
                self.emit(TokenKind::LeftCurly, start)
            }
            '}' => {
                self.bump();
                self.emit(TokenKind::RightCurly, start)
            }
            ',' => {
                self.bump();
                self.emit(TokenKind::Comma, start)
            }
            '?' => {
                self.bump();
                self.emit(TokenKind::Missing, start)
            }
            '@' => {
                self.bump();
                let word = self.scan_word();
                let kind = if word.eq_ignore_ascii_case("relation") {
                    TokenKind::RelationDecl
                } else if word.eq_ignore_ascii_case("attribute") {
                    TokenKind::AttrDecl
                } else if word.eq_ignore_ascii_case("data") {
                    TokenKind::DataDecl
                } else {
                    return Some(Err(self.fail('@', column)));
                };
                self.emit(kind, start)
            }
            c if c.is_ascii_digit() => {
                self.scan_number();
                let runs_on = self.peek().map_or(false, |n| {
                    is_word_char(n) || (is_joiner(n) && self.peek_second().map_or(false, is_word_char))
                });
                if runs_on {
                    // Not a literal after all, e.g. `5more` or `2-door`.
                    self.pos = start;
                    self.scan_word();
                    self.emit(TokenKind::String, start)
                } else {
                    self.emit(TokenKind::Number, start)
                }
            }
            c if is_word_char(c) => {
                let word = self.scan_word();
                let kind = if word.eq_ignore_ascii_case("numeric")
                    || word.eq_ignore_ascii_case("integer")
                    || word.eq_ignore_ascii_case("real")
                {
                    TokenKind::NumDatatype
                } else if let Some(reserved) = reserved_lookup(word) {
                    TokenKind::Reserved(reserved)
                } else {
                    TokenKind::String
                };
                self.emit(kind, start)
            }
            other => return Some(Err(self.fail(other, column))),
        };
        Some(Ok(token))
    }
}
