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

//! Lexical error conditions.
//!
//! The scanner never returns these directly: each one becomes the text of a
//! terminal [`TokenKind::Error`](crate::lex::TokenKind::Error) token, after
//! which the token stream ends.

use thiserror::Error;

/// A fatal condition detected while scanning.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LexError {
    // ==================== String errors ====================
    /// Newline or end of input before the closing `"`.
    #[error("unterminated quoted string")]
    UnterminatedQuote,

    /// Newline or end of input before the closing backtick.
    #[error("unterminated raw quoted string")]
    UnterminatedRaw,

    // ==================== Comment errors ====================
    /// `/*` without a matching `*/`.
    #[error("unclosed comment")]
    UnclosedComment,

    /// A `/` that does not start `//` or `/*`.
    #[error("expected // or /*")]
    ExpectedComment,

    // ==================== Substitution errors ====================
    /// Illegal character inside `${...}`.
    #[error("variable substitution can only include letters, numbers, dot, dash or underscore.")]
    InvalidSubstitution,

    /// `${}` or `${?}`.
    #[error("empty variable substitution")]
    EmptySubstitution,

    /// `$` not followed by `{`.
    #[error("expected {{ after $")]
    ExpectedSubstitution,

    // ==================== Token errors ====================
    /// A `+` not followed by `=`.
    #[error("expected +=")]
    ExpectedPlusEquals,

    /// A sign-joined number pair that does not end in `i`.
    #[error("bad number syntax: {0:?}")]
    BadNumber(String),

    /// A character that cannot start any token.
    #[error("unrecognized character: {0:?}")]
    Unrecognized(char),
}
