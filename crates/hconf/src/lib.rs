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

//! # HCONF - Hierarchical Configuration Format
//!
//! HCONF is a HOCON-style configuration language: a JSON superset with
//! comments, unquoted strings, dotted keys, objects that merge when a key is
//! repeated, and substitutions that refer to other keys or to the process
//! environment.
//!
//! ## Quick Start
//!
//! ```rust
//! use hconf::{parse, HconfResultExt};
//!
//! let text = r#"
//! # defaults
//! http {
//!   host = 0.0.0.0
//!   port = 8080
//!   timeout = 2.5
//! }
//! http.port = ${?HCONF_DOC_HTTP_PORT}
//!
//! upstreams = [
//!   "10.0.0.1:9000"
//!   "10.0.0.2:9000"
//! ]
//! "#;
//!
//! let tree = parse(text).context("loading defaults").unwrap();
//! let config = tree.config();
//!
//! assert_eq!(config.get_string("http.host").unwrap(), "0.0.0.0");
//! assert_eq!(config.get_i64("http.port").unwrap(), 8080);
//! assert_eq!(config.get_array("upstreams").unwrap().len(), 2);
//! assert!(!config.get_bool_or("http.tls", false));
//! ```
//!
//! ## Features
//!
//! - **Comments**: `#`, `//` and `/* ... */`
//! - **Dotted keys**: `a.b.c = 1` is `a { b { c = 1 } }`
//! - **Merging**: a repeated object key merges; any other repeated key is replaced
//! - **Substitutions**: `${path}` always takes effect (nil when unresolved),
//!   `${?path}` only when its target exists
//! - **Environment fallback**: unresolved substitutions consult an injectable
//!   [`Env`], the process environment by default
//! - **Lazy resolution**: substitutions are resolved on every query against
//!   the immutable tree, so one tree can be read from many threads
//!
//! ## Modules
//!
//! - [`lex`]: the scanner and its tokens
//! - [`number`]: numeric literal conversion and textual grammars

pub use hconf_core::{
    // Functions
    parse as parse_named,
    parse_bytes,
    parse_bytes_with_options,
    parse_with_options,
    // Main types
    Config,
    Tree,
    // Nodes
    BoolNode,
    Complex128,
    FieldNode,
    ListNode,
    MapNode,
    NilNode,
    Node,
    NodeKind,
    NumberNode,
    StringNode,
    // Environment
    EmptyEnv,
    Env,
    ProcessEnv,
    // Errors
    ConfigError,
    ConfigResult,
    HconfError,
    HconfErrorKind,
    HconfResult,
    // Parser
    Limits,
    ParseOptions,
    ParseOptionsBuilder,
    DEFAULT_NAME,
};

// Error handling extensions
mod error_ext;
pub use error_ext::HconfResultExt;

pub mod lex {
    //! Lexical analysis utilities
    pub use hconf_core::lex::{unquote, LexError, Scanner, SourcePos, Token, TokenKind};
}

pub mod number {
    //! Numeric literal conversion
    pub use hconf_core::number::{
        exact_i64, exact_u64, parse_bool, parse_complex, parse_float, parse_int, parse_uint,
        LiteralError, NumberError,
    };
}

/// Parse an in-memory document under the default name.
///
/// # Examples
///
/// ```rust
/// let tree = hconf::parse("name = demo").unwrap();
/// assert_eq!(tree.name(), hconf::DEFAULT_NAME);
/// assert_eq!(tree.config().get_string("name").unwrap(), "demo");
/// ```
#[inline]
pub fn parse(text: &str) -> HconfResult<Tree> {
    hconf_core::parse(DEFAULT_NAME, text)
}

/// Parse a document from a file.
///
/// A file that cannot be read is an [`HconfErrorKind::Io`] error whose
/// context names the path.
#[inline]
pub fn parse_file(path: impl AsRef<std::path::Path>) -> HconfResult<Tree> {
    hconf_core::parse_file(path)
}

/// Check that a document parses, discarding the tree.
///
/// Substitutions are not resolved; a document that parses may still fail
/// individual queries.
#[inline]
pub fn validate(text: &str) -> HconfResult<()> {
    parse(text).map(|_| ())
}

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
