// Dweve HCONF - Hierarchical Configuration Format
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Pull-based scanner turning configuration text into tokens.
//!
//! The scanner makes one forward pass with a single character of lookahead
//! and single-step backup. Every fatal condition yields one
//! [`TokenKind::Error`] token, after which only [`TokenKind::Eof`] is
//! returned.

use super::error::LexError;
use super::token::{Token, TokenKind};

/// Scanner over a borrowed input string.
///
/// # Examples
///
/// ```
/// use hconf_core::lex::{Scanner, TokenKind};
///
/// let kinds: Vec<_> = Scanner::new("port = 80").map(|t| t.kind).collect();
/// assert_eq!(
///     kinds,
///     vec![
///         TokenKind::Unquoted,
///         TokenKind::Space,
///         TokenKind::Equals,
///         TokenKind::Space,
///         TokenKind::Number,
///         TokenKind::Eof,
///     ]
/// );
/// ```
#[derive(Debug, Clone)]
pub struct Scanner<'a> {
    input: &'a str,
    /// Start of the token being scanned.
    start: usize,
    /// Current read position.
    cursor: usize,
    /// Width of the last character read, for `backup`.
    width: usize,
    finished: bool,
}

impl<'a> Scanner<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            start: 0,
            cursor: 0,
            width: 0,
            finished: false,
        }
    }

    /// The text being scanned.
    #[inline]
    pub fn input(&self) -> &'a str {
        self.input
    }

    /// Returns true once an `Eof` or `Error` token has been produced.
    #[inline]
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Scans and returns the next token.
    pub fn next_token(&mut self) -> Token<'a> {
        if self.finished {
            return Token::new(TokenKind::Eof, self.input.len(), "");
        }
        loop {
            self.start = self.cursor;
            let c = match self.next_char() {
                Some(c) => c,
                None => {
                    self.finished = true;
                    return self.emit(TokenKind::Eof);
                }
            };
            let scanned = match c {
                '\r' | '\n' => Ok(TokenKind::Newline),
                ' ' | '\t' => {
                    self.accept_run(is_space);
                    Ok(TokenKind::Space)
                }
                '#' => {
                    self.skip_line_comment();
                    continue;
                }
                '/' => match self.next_char() {
                    Some('/') => {
                        self.skip_line_comment();
                        continue;
                    }
                    Some('*') => match self.skip_block_comment() {
                        Ok(()) => continue,
                        Err(e) => Err(e),
                    },
                    _ => Err(LexError::ExpectedComment),
                },
                '"' => self.scan_quoted(),
                '`' => self.scan_raw(),
                ',' => Ok(TokenKind::Comma),
                ':' => Ok(TokenKind::Colon),
                '=' => Ok(TokenKind::Equals),
                '{' => Ok(TokenKind::OpenBrace),
                '}' => Ok(TokenKind::CloseBrace),
                '[' => Ok(TokenKind::OpenBracket),
                ']' => Ok(TokenKind::CloseBracket),
                '+' => {
                    if self.accept(|c| c == '=') {
                        Ok(TokenKind::PlusEquals)
                    } else {
                        Err(LexError::ExpectedPlusEquals)
                    }
                }
                '$' => self.scan_substitution(),
                '-' | '0'..='9' => {
                    self.backup();
                    self.scan_number()
                }
                c if is_word_start(c) => {
                    self.accept_run(is_word_char);
                    Ok(self.classify_word())
                }
                other => Err(LexError::Unrecognized(other)),
            };
            return match scanned {
                Ok(kind) => self.emit(kind),
                Err(e) => self.fail(e),
            };
        }
    }

    // ==================== Cursor primitives ====================

    fn next_char(&mut self) -> Option<char> {
        match self.input[self.cursor..].chars().next() {
            Some(c) => {
                self.width = c.len_utf8();
                self.cursor += self.width;
                Some(c)
            }
            None => {
                self.width = 0;
                None
            }
        }
    }

    /// Steps back one character. Valid once per call of `next_char`.
    #[inline]
    fn backup(&mut self) {
        self.cursor -= self.width;
        self.width = 0;
    }

    fn peek(&mut self) -> Option<char> {
        let c = self.next_char();
        self.backup();
        c
    }

    fn accept(&mut self, valid: impl Fn(char) -> bool) -> bool {
        match self.next_char() {
            Some(c) if valid(c) => true,
            _ => {
                self.backup();
                false
            }
        }
    }

    fn accept_run(&mut self, valid: impl Fn(char) -> bool) {
        while self.accept(&valid) {}
    }

    fn emit(&mut self, kind: TokenKind) -> Token<'a> {
        let token = Token::new(kind, self.start, &self.input[self.start..self.cursor]);
        self.start = self.cursor;
        token
    }

    fn fail(&mut self, err: LexError) -> Token<'a> {
        self.finished = true;
        Token::error(self.start, err.to_string())
    }

    // ==================== Token scanners ====================

    /// Skips to (not past) the next line break.
    fn skip_line_comment(&mut self) {
        let rest = &self.input.as_bytes()[self.cursor..];
        self.cursor += memchr::memchr2(b'\n', b'\r', rest).unwrap_or(rest.len());
        self.width = 0;
    }

    /// Skips past the `*/` closing a block comment whose `/*` was consumed.
    fn skip_block_comment(&mut self) -> Result<(), LexError> {
        let rest = &self.input.as_bytes()[self.cursor..];
        match memchr::memmem::find(rest, b"*/") {
            Some(idx) => {
                self.cursor += idx + 2;
                self.width = 0;
                Ok(())
            }
            None => Err(LexError::UnclosedComment),
        }
    }

    fn scan_quoted(&mut self) -> Result<TokenKind, LexError> {
        loop {
            match self.next_char() {
                None | Some('\n') => return Err(LexError::UnterminatedQuote),
                Some('\\') => {
                    if matches!(self.next_char(), None | Some('\n')) {
                        return Err(LexError::UnterminatedQuote);
                    }
                }
                Some('"') => return Ok(TokenKind::Quoted),
                Some(_) => {}
            }
        }
    }

    fn scan_raw(&mut self) -> Result<TokenKind, LexError> {
        loop {
            match self.next_char() {
                None | Some('\n') => return Err(LexError::UnterminatedRaw),
                Some('`') => return Ok(TokenKind::Raw),
                Some(_) => {}
            }
        }
    }

    fn scan_substitution(&mut self) -> Result<TokenKind, LexError> {
        if !self.accept(|c| c == '{') {
            return Err(LexError::ExpectedSubstitution);
        }
        let soft = self.accept(|c| c == '?');
        let body_start = self.cursor;
        loop {
            match self.next_char() {
                Some(c) if is_path_char(c) => {}
                Some('}') => break,
                _ => return Err(LexError::InvalidSubstitution),
            }
        }
        if self.cursor - 1 == body_start {
            return Err(LexError::EmptySubstitution);
        }
        Ok(if soft {
            TokenKind::SoftSubstitution
        } else {
            TokenKind::HardSubstitution
        })
    }

    /// Scans a number, a complex pair, or a word that merely starts with a
    /// digit or dash (`10s`, `1.2.3`, `-x`).
    ///
    /// Numeric grammar is not validated here; the literal converter rejects
    /// malformed text when the parser builds the node.
    fn scan_number(&mut self) -> Result<TokenKind, LexError> {
        self.scan_numeric_literal();
        if matches!(self.peek(), Some('+' | '-')) {
            // Complex: 1+2i. No spaces, must end in 'i'.
            self.scan_numeric_literal();
            let text = &self.input[self.start..self.cursor];
            if text.ends_with('i') {
                return Ok(TokenKind::Complex);
            }
            return Err(LexError::BadNumber(text.to_string()));
        }
        if self.peek().map_or(false, is_word_char) {
            self.accept_run(is_word_char);
            return Ok(self.classify_word());
        }
        Ok(TokenKind::Number)
    }

    fn scan_numeric_literal(&mut self) {
        self.accept(|c| c == '+' || c == '-');
        let hex = self.accept(|c| c == '0') && self.accept(|c| c == 'x' || c == 'X');
        let digit = |c: char| {
            if hex {
                c.is_ascii_hexdigit()
            } else {
                c.is_ascii_digit()
            }
        };
        self.accept_run(digit);
        if self.accept(|c| c == '.') {
            self.accept_run(digit);
        }
        if !hex && self.accept(|c| c == 'e' || c == 'E') {
            self.accept(|c| c == '+' || c == '-');
            self.accept_run(|c| c.is_ascii_digit());
        }
        self.accept(|c| c == 'i');
    }

    fn classify_word(&self) -> TokenKind {
        match &self.input[self.start..self.cursor] {
            "true" | "false" | "on" | "off" => TokenKind::Bool,
            "nil" => TokenKind::Null,
            _ => TokenKind::Unquoted,
        }
    }
}

impl<'a> Iterator for Scanner<'a> {
    type Item = Token<'a>;

    /// Yields every token up to and including the terminal `Eof` or `Error`.
    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            None
        } else {
            Some(self.next_token())
        }
    }
}

#[inline]
fn is_space(c: char) -> bool {
    c == ' ' || c == '\t'
}

#[inline]
fn is_word_start(c: char) -> bool {
    c == '_' || c.is_alphanumeric()
}

#[inline]
fn is_word_char(c: char) -> bool {
    c == '_' || c == '-' || c == '.' || c.is_alphanumeric()
}

#[inline]
fn is_path_char(c: char) -> bool {
    c == '_' || c == '-' || c == '.' || c.is_alphanumeric()
}
