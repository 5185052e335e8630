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

//! Path-addressed, typed read access to a parsed [`Tree`].

use crate::error::{ConfigError, ConfigResult};
use crate::node::{Complex128, Node, NodeKind};
use crate::number::{parse_bool, parse_complex, parse_float, parse_int, parse_uint, NumberError};
use crate::resolve::Resolver;
use crate::tree::Tree;
use std::borrow::Cow;
use std::fmt;

/// A read-only view of one node of a [`Tree`].
///
/// Paths are `.`-separated map keys relative to the viewed node; the empty
/// path addresses the node itself. Substitutions met along a path are
/// resolved on every query against the whole tree. Errors are per query and
/// never affect the tree.
///
/// Every non-string getter also accepts a string node and parses its text,
/// so values substituted from the environment can be read as numbers or
/// booleans.
///
/// # Examples
///
/// ```
/// let tree = hconf_core::parse("app", "server { host = localhost, port = 8080 }").unwrap();
/// let config = tree.config();
///
/// assert_eq!(config.get_string("server.host").unwrap(), "localhost");
/// assert_eq!(config.get_i64("server.port").unwrap(), 8080);
/// assert_eq!(config.get_i64_or("server.threads", 4), 4);
/// ```
#[derive(Clone)]
pub struct Config<'t> {
    tree: &'t Tree,
    node: Cow<'t, Node>,
}

impl<'t> Config<'t> {
    pub(crate) fn new(tree: &'t Tree, node: Cow<'t, Node>) -> Self {
        Self { tree, node }
    }

    /// The viewed node. It is never a substitution reference.
    pub fn node(&self) -> &Node {
        &self.node
    }

    pub fn kind(&self) -> NodeKind {
        self.node.kind()
    }

    /// The tree this view reads from.
    pub fn tree(&self) -> &'t Tree {
        self.tree
    }

    /// Resolves `path` to a view of the node it names.
    pub fn get_value(&self, path: &str) -> ConfigResult<Config<'t>> {
        let node = Resolver::new(self.tree).walk(self.node.clone(), path)?;
        Ok(Config::new(self.tree, node))
    }

    /// The unescaped text of a string node.
    pub fn get_string(&self, path: &str) -> ConfigResult<String> {
        match self.get_value(path)?.node() {
            Node::String(s) => Ok(s.text.clone()),
            _ => Err(not_valid("string", path)),
        }
    }

    pub fn get_bool(&self, path: &str) -> ConfigResult<bool> {
        self.typed(
            path,
            "bool",
            |node| match node {
                Node::Bool(b) => Some(b.value),
                _ => None,
            },
            parse_bool,
        )
    }

    pub fn get_i64(&self, path: &str) -> ConfigResult<i64> {
        self.typed(path, "int64", |node| number(node, |n| n.int), parse_int)
    }

    pub fn get_u64(&self, path: &str) -> ConfigResult<u64> {
        self.typed(path, "uint64", |node| number(node, |n| n.uint), parse_uint)
    }

    pub fn get_f64(&self, path: &str) -> ConfigResult<f64> {
        self.typed(path, "float64", |node| number(node, |n| n.float), parse_float)
    }

    /// A complex value. A real number reads as having a zero imaginary part.
    pub fn get_complex(&self, path: &str) -> ConfigResult<Complex128> {
        self.typed(
            path,
            "complex128",
            |node| {
                number(node, |n| {
                    n.complex.or_else(|| n.float.map(|re| Complex128::new(re, 0.0)))
                })
            },
            parse_complex,
        )
    }

    /// One view per element of a list, each element resolved independently.
    pub fn get_array(&self, path: &str) -> ConfigResult<Vec<Config<'t>>> {
        let value = self.get_value(path)?;
        let list = match value.node {
            Cow::Borrowed(Node::List(list)) => list,
            _ => return Err(not_valid("list", path)),
        };
        let mut resolver = Resolver::new(self.tree);
        list.items
            .iter()
            .enumerate()
            .map(|(index, item)| match resolver.resolve(item) {
                Ok(node) => Ok(Config::new(self.tree, node)),
                Err(ConfigError::InvalidField(_)) => {
                    Err(ConfigError::InvalidField(format!("{}[{}]", path, index)))
                }
                Err(e) => Err(e),
            })
            .collect()
    }

    /// The keys of a map, in definition order. Callers should not rely on
    /// the order.
    pub fn get_key_set(&self, path: &str) -> ConfigResult<Vec<String>> {
        match self.get_value(path)?.node() {
            Node::Map(map) => Ok(map.keys().map(str::to_string).collect()),
            _ => Err(not_valid("map", path)),
        }
    }

    pub fn get_string_or(&self, path: &str, default: &str) -> String {
        self.get_string(path).unwrap_or_else(|_| default.to_string())
    }

    pub fn get_bool_or(&self, path: &str, default: bool) -> bool {
        self.get_bool(path).unwrap_or(default)
    }

    pub fn get_i64_or(&self, path: &str, default: i64) -> i64 {
        self.get_i64(path).unwrap_or(default)
    }

    pub fn get_u64_or(&self, path: &str, default: u64) -> u64 {
        self.get_u64(path).unwrap_or(default)
    }

    pub fn get_f64_or(&self, path: &str, default: f64) -> f64 {
        self.get_f64(path).unwrap_or(default)
    }

    pub fn get_complex_or(&self, path: &str, default: Complex128) -> Complex128 {
        self.get_complex(path).unwrap_or(default)
    }

    /// Resolves `path`, reads the value from a matching node or parses the
    /// text of a string node.
    fn typed<T>(
        &self,
        path: &str,
        kind: &'static str,
        from_node: impl FnOnce(&Node) -> Option<T>,
        from_text: fn(&str) -> Result<T, NumberError>,
    ) -> ConfigResult<T> {
        let value = self.get_value(path)?;
        if let Node::String(s) = value.node() {
            return from_text(&s.text).map_err(|e| ConfigError::Conversion {
                kind,
                path: path.to_string(),
                reason: e.to_string(),
            });
        }
        from_node(value.node()).ok_or_else(|| not_valid(kind, path))
    }
}

fn number<T>(node: &Node, pick: impl FnOnce(&crate::number::NumberNode) -> Option<T>) -> Option<T> {
    match node {
        Node::Number(n) => pick(n),
        _ => None,
    }
}

fn not_valid(kind: &'static str, path: &str) -> ConfigError {
    ConfigError::NotValid {
        kind,
        path: path.to_string(),
    }
}

impl fmt::Display for Config<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.node.as_ref(), f)
    }
}

impl fmt::Debug for Config<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("tree", &self.tree.name())
            .field("node", &self.node)
            .finish()
    }
}
