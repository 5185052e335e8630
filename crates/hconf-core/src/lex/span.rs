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

//! Source position tracking for HCONF lexical analysis.
//!
//! Tokens and nodes only carry a byte offset into the input. Line and column
//! are recomputed on demand by counting the newlines that precede the offset,
//! which keeps the scanner a single forward pass.
//!
//! # Examples
//!
//! ```
//! use hconf_core::lex::SourcePos;
//!
//! let text = "a = 1\nb = oops";
//! let pos = SourcePos::from_offset(text, 10);
//! assert_eq!(pos.line(), 2);
//! assert_eq!(pos.column(), 5);
//! ```

use std::fmt;

/// A position in source code (line and byte column).
///
/// Line and column numbers are 1-indexed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SourcePos {
    line: usize,
    column: usize,
}

impl SourcePos {
    /// Creates a new source position.
    #[inline]
    pub const fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }

    /// Creates a position at the start of the input (line 1, column 1).
    #[inline]
    pub const fn start() -> Self {
        Self { line: 1, column: 1 }
    }

    /// Computes the position of byte `offset` within `input`.
    ///
    /// `\n`, `\r\n` and a lone `\r` each end a line.
    ///
    /// Offsets past the end of the input are clamped to its length.
    pub fn from_offset(input: &str, offset: usize) -> Self {
        let bytes = input.as_bytes();
        let offset = offset.min(bytes.len());
        let mut line = 1;
        let mut line_start = 0;
        for idx in memchr::memchr2_iter(b'\n', b'\r', &bytes[..offset]) {
            // \r\n is one break, counted at the \n.
            if bytes[idx] == b'\r' && bytes.get(idx + 1) == Some(&b'\n') {
                continue;
            }
            line += 1;
            line_start = idx + 1;
        }
        Self {
            line,
            column: offset - line_start + 1,
        }
    }

    /// Returns the line number.
    #[inline]
    pub const fn line(&self) -> usize {
        self.line
    }

    /// Returns the column number.
    #[inline]
    pub const fn column(&self) -> usize {
        self.column
    }
}

impl fmt::Display for SourcePos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}
