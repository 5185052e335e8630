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

//! Error types for HCONF parsing and resolution.
//!
//! Two families exist. [`HconfError`] is fatal: a document that fails to
//! scan, parse or load produces no tree at all. [`ConfigError`] is returned
//! per query by the [`Config`](crate::Config) accessor and never affects the
//! tree or other queries.

use std::fmt;
use thiserror::Error;

/// Maximum number of characters kept in an error snippet.
pub const SNIPPET_LEN: usize = 20;

/// The kind of fatal error that occurred while producing a tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HconfErrorKind {
    /// Lexical, grammatical or literal-conversion violation.
    Syntax,
    /// A parse limit was exceeded.
    Security,
    /// The input could not be read.
    Io,
}

impl fmt::Display for HconfErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Syntax => write!(f, "SyntaxError"),
            Self::Security => write!(f, "SecurityError"),
            Self::Io => write!(f, "IOError"),
        }
    }
}

/// A fatal error raised while scanning, parsing or loading a document.
#[derive(Debug, Clone, Error)]
#[error("{kind} at {}: {message}", location(.source_name, .line, .column))]
pub struct HconfError {
    /// The kind of error.
    pub kind: HconfErrorKind,
    /// Human-readable error message.
    pub message: String,
    /// Name of the document being parsed.
    pub source_name: String,
    /// Line number (1-based, 0 when unknown).
    pub line: usize,
    /// Byte column (1-based, optional).
    pub column: Option<usize>,
    /// Text of the offending construct, truncated.
    pub snippet: Option<String>,
    /// Additional context (e.g., "while loading service settings").
    pub context: Option<String>,
}

fn location(source_name: &str, line: &usize, column: &Option<usize>) -> String {
    match column {
        Some(col) => format!("{}:{}:{}", source_name, line, col),
        None => format!("{}:{}", source_name, line),
    }
}

impl HconfError {
    /// Create a new error.
    pub fn new(kind: HconfErrorKind, message: impl Into<String>, line: usize) -> Self {
        Self {
            kind,
            message: message.into(),
            source_name: String::from("config"),
            line,
            column: None,
            snippet: None,
            context: None,
        }
    }

    /// Add column information.
    pub fn with_column(mut self, column: usize) -> Self {
        self.column = Some(column);
        self
    }

    /// Set the document name.
    pub fn with_source(mut self, name: impl Into<String>) -> Self {
        self.source_name = name.into();
        self
    }

    /// Attach the offending text, truncated to [`SNIPPET_LEN`] characters.
    pub fn with_snippet(mut self, text: &str) -> Self {
        self.snippet = Some(truncate_snippet(text));
        self
    }

    /// Add context information.
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    // Convenience constructors for each error kind
    pub fn syntax(message: impl Into<String>, line: usize) -> Self {
        Self::new(HconfErrorKind::Syntax, message, line)
    }

    pub fn security(message: impl Into<String>, line: usize) -> Self {
        Self::new(HconfErrorKind::Security, message, line)
    }

    pub fn io(message: impl Into<String>) -> Self {
        Self::new(HconfErrorKind::Io, message, 0)
    }
}

/// Truncate `text` to [`SNIPPET_LEN`] characters, appending `...` when cut.
pub fn truncate_snippet(text: &str) -> String {
    match text.char_indices().nth(SNIPPET_LEN) {
        Some((idx, _)) => format!("{}...", &text[..idx]),
        None => text.to_string(),
    }
}

/// Result type for parsing and loading.
pub type HconfResult<T> = Result<T, HconfError>;

/// A recoverable error returned by a single [`Config`](crate::Config) query.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigError {
    /// A path segment could not be followed (missing key or non-map node).
    #[error("path not valid: {0}")]
    PathNotValid(String),

    /// The node at `path` is not of the requested kind.
    #[error("not a valid {kind}: {path}")]
    NotValid { kind: &'static str, path: String },

    /// A soft substitution with no target and no fallback.
    #[error("invalid field node: {0}")]
    InvalidField(String),

    /// A substitution refers back to itself, directly or through others.
    #[error("substitution cycle: {0}")]
    SubstitutionCycle(String),

    /// A string node could not be read as the requested kind.
    #[error("cannot convert {path} to {kind}: {reason}")]
    Conversion {
        kind: &'static str,
        path: String,
        reason: String,
    },
}

/// Result type for configuration queries.
pub type ConfigResult<T> = Result<T, ConfigError>;
