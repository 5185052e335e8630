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

//! Token types produced by the scanner.

use std::borrow::Cow;
use std::fmt;

/// The kind of a scanned token.
///
/// Comments are recognised by the scanner but never emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// End of input.
    Eof,
    /// A run of spaces and tabs.
    Space,
    /// A single `\r` or `\n`.
    Newline,
    Comma,
    Colon,
    Equals,
    PlusEquals,
    OpenBrace,
    CloseBrace,
    OpenBracket,
    CloseBracket,
    /// A bare word: letters, digits, `_`, `-` and `.`.
    Unquoted,
    /// A `"..."` string, quotes included.
    Quoted,
    /// A `` `...` `` string, backticks included.
    Raw,
    /// `true`, `false`, `on` or `off`.
    Bool,
    /// `nil`.
    Null,
    Number,
    /// A `re±imi` pair.
    Complex,
    /// `${path}`.
    HardSubstitution,
    /// `${?path}`.
    SoftSubstitution,
    /// Terminal error; the token text is the message.
    Error,
}

impl TokenKind {
    /// Returns true for tokens that may take part in a consolidated run.
    #[inline]
    pub fn is_literal(self) -> bool {
        matches!(
            self,
            Self::Unquoted
                | Self::Quoted
                | Self::Raw
                | Self::Bool
                | Self::Null
                | Self::Number
                | Self::Complex
        )
    }

    /// Returns true for tokens that may name an entry.
    #[inline]
    pub fn is_key(self) -> bool {
        matches!(
            self,
            Self::Unquoted | Self::Quoted | Self::Raw | Self::Bool | Self::Null | Self::Number
        )
    }

    /// Returns true for `=`, `:` and `+=`.
    #[inline]
    pub fn is_key_value_separator(self) -> bool {
        matches!(self, Self::Equals | Self::Colon | Self::PlusEquals)
    }
}

/// A token: its kind, starting byte offset, and text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    /// Byte offset of the token start within the input.
    pub pos: usize,
    /// Source text, or the message for [`TokenKind::Error`].
    pub text: Cow<'a, str>,
}

impl<'a> Token<'a> {
    #[inline]
    pub fn new(kind: TokenKind, pos: usize, text: &'a str) -> Self {
        Self {
            kind,
            pos,
            text: Cow::Borrowed(text),
        }
    }

    #[inline]
    pub fn error(pos: usize, message: String) -> Self {
        Self {
            kind: TokenKind::Error,
            pos,
            text: Cow::Owned(message),
        }
    }

    #[inline]
    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TokenKind::Eof => write!(f, "EOF"),
            TokenKind::Error => write!(f, "{}", self.text),
            _ => match self.text.char_indices().nth(10) {
                Some((idx, _)) => write!(f, "{:?}...", &self.text[..idx]),
                None => write!(f, "{:?}", self.text),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_eof() {
        assert_eq!(Token::new(TokenKind::Eof, 0, "").to_string(), "EOF");
    }

    #[test]
    fn test_display_error_is_message() {
        let token = Token::error(3, "unclosed comment".to_string());
        assert_eq!(token.to_string(), "unclosed comment");
    }

    #[test]
    fn test_display_short_text_quoted() {
        assert_eq!(Token::new(TokenKind::Unquoted, 0, "port").to_string(), "\"port\"");
    }

    #[test]
    fn test_display_long_text_truncated() {
        let token = Token::new(TokenKind::Unquoted, 0, "abcdefghijklmnop");
        assert_eq!(token.to_string(), "\"abcdefghij\"...");
    }

    #[test]
    fn test_literal_kinds() {
        assert!(TokenKind::Number.is_literal());
        assert!(TokenKind::Complex.is_literal());
        assert!(!TokenKind::HardSubstitution.is_literal());
        assert!(!TokenKind::OpenBrace.is_literal());
    }

    #[test]
    fn test_key_kinds() {
        assert!(TokenKind::Unquoted.is_key());
        assert!(TokenKind::Quoted.is_key());
        assert!(!TokenKind::Complex.is_key());
        assert!(!TokenKind::Comma.is_key());
    }

    #[test]
    fn test_separator_kinds() {
        assert!(TokenKind::Equals.is_key_value_separator());
        assert!(TokenKind::Colon.is_key_value_separator());
        assert!(TokenKind::PlusEquals.is_key_value_separator());
        assert!(!TokenKind::OpenBrace.is_key_value_separator());
    }
}
