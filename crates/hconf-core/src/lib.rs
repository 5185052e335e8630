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

//! Core parser and data model for the HCONF configuration format.
//!
//! HCONF is a JSON superset in the HOCON family: comments, unquoted strings,
//! dotted keys, duplicate keys that merge, and `${path}` / `${?path}`
//! substitutions resolved against the whole document or the environment.
//!
//! The pipeline is:
//!
//! - [`lex`]: the [`Scanner`](lex::Scanner) turns text into tokens
//! - the parser builds an immutable [`Tree`] of [`Node`]s
//! - a [`Config`] view answers typed, path-addressed queries, resolving
//!   substitutions lazily on each query
//!
//! # Examples
//!
//! ```
//! let text = r#"
//! server {
//!   host = "0.0.0.0"
//!   port = 8080
//! }
//! server.port = ${?PORT}
//! "#;
//!
//! let tree = hconf_core::parse("service.conf", text)?
//!     .with_env(|_: &str| None::<String>);
//! let config = tree.config();
//! assert_eq!(config.get_string("server.host")?, "0.0.0.0");
//! assert_eq!(config.get_i64("server.port")?, 8080);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod config;
mod env;
mod error;
pub mod lex;
mod limits;
mod node;
pub mod number;
mod parser;
mod resolve;
mod tree;

pub use config::Config;
pub use env::{EmptyEnv, Env, ProcessEnv};
pub use error::{
    truncate_snippet, ConfigError, ConfigResult, HconfError, HconfErrorKind, HconfResult,
    SNIPPET_LEN,
};
pub use limits::Limits;
pub use node::{
    BoolNode, Complex128, FieldNode, ListNode, MapNode, NilNode, Node, NodeKind, NumberNode,
    StringNode,
};
pub use parser::{
    parse, parse_bytes, parse_bytes_with_options, parse_file, parse_with_options, ParseOptions,
    ParseOptionsBuilder, DEFAULT_NAME,
};
pub use tree::Tree;
