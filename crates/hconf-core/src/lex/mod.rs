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

//! Lexical analysis for HCONF.
//!
//! This module turns configuration text into a token stream:
//!
//! - [`Scanner`]: pull-based tokenizer with one character of lookahead
//! - [`Token`] / [`TokenKind`]: scanned tokens and their classification
//! - [`LexError`]: fatal scanning conditions, reported through error tokens
//! - [`SourcePos`]: line/column recovery from byte offsets
//!
//! Escape processing of quoted strings lives here too, since it is purely a
//! function of the token text.

mod error;
mod scanner;
mod span;
mod token;

pub use error::LexError;
pub use scanner::Scanner;
pub use span::SourcePos;
pub use token::{Token, TokenKind};

/// Returns the text of a quoted or raw string token with its delimiters
/// removed and escapes processed.
///
/// Quoted strings understand `\"`, `\\`, `\/`, `\b`, `\f`, `\n`, `\r`, `\t`
/// and `\uXXXX`; any other escaped character stands for itself. Raw strings
/// are returned verbatim between the backticks. Any other text is returned
/// unchanged.
///
/// # Examples
///
/// ```
/// use hconf_core::lex::unquote;
///
/// assert_eq!(unquote(r#""a\tb""#), "a\tb");
/// assert_eq!(unquote(r"`C:\dir`"), r"C:\dir");
/// assert_eq!(unquote("plain"), "plain");
/// ```
pub fn unquote(text: &str) -> String {
    if text.len() >= 2 && text.starts_with('`') && text.ends_with('`') {
        return text[1..text.len() - 1].to_string();
    }
    if !(text.len() >= 2 && text.starts_with('"') && text.ends_with('"')) {
        return text.to_string();
    }
    let body = &text[1..text.len() - 1];
    let mut out = String::with_capacity(body.len());
    let mut chars = body.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('b') => out.push('\u{0008}'),
            Some('f') => out.push('\u{000C}'),
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('t') => out.push('\t'),
            Some('u') => {
                let hex: String = chars.clone().take(4).collect();
                match u32::from_str_radix(&hex, 16).ok().and_then(char::from_u32) {
                    Some(decoded)
                        if hex.len() == 4 && hex.chars().all(|h| h.is_ascii_hexdigit()) =>
                    {
                        out.push(decoded);
                        for _ in 0..4 {
                            chars.next();
                        }
                    }
                    _ => out.push('u'),
                }
            }
            Some(other) => out.push(other),
            None => out.push('\\'),
        }
    }
    out
}
