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

//! Lazy substitution resolution.
//!
//! Substitutions are resolved on every query, never cached. A reference is
//! looked up in this order:
//!
//! 1. its path, walked from the root of the whole tree;
//! 2. the environment, producing a string;
//! 3. a hard reference (`${x}`) becomes nil;
//! 4. a soft reference (`${?x}`) falls back to the value it shadowed, or
//!    fails when there is none.
//!
//! The paths being resolved are tracked per query so that a reference that
//! depends on itself fails instead of recursing forever.

use crate::error::{ConfigError, ConfigResult};
use crate::lex::unquote;
use crate::node::{NilNode, Node, StringNode};
use crate::tree::Tree;
use std::borrow::Cow;
use tracing::{debug, trace};

/// Per-query resolution state.
///
/// Resolved nodes borrow from the tree, except the string and nil leaves
/// synthesized for environment hits and unresolved hard references; those
/// are owned and are never maps or references.
pub(crate) struct Resolver<'t> {
    tree: &'t Tree,
    /// Reference paths currently being resolved, outermost first.
    visiting: Vec<String>,
}

impl<'t> Resolver<'t> {
    pub(crate) fn new(tree: &'t Tree) -> Self {
        Self {
            tree,
            visiting: Vec::new(),
        }
    }

    /// Follows `path` one map key per segment from `start`, resolving every
    /// reference met on the way. An empty path yields `start` itself.
    pub(crate) fn walk(&mut self, start: Cow<'t, Node>, path: &str) -> ConfigResult<Cow<'t, Node>> {
        let mut current = match start {
            Cow::Borrowed(node) => self.resolve(node)?,
            owned => owned,
        };
        if path.is_empty() {
            return Ok(current);
        }
        for segment in path.split('.') {
            let child = match current {
                Cow::Borrowed(Node::Map(map)) => map.get(segment),
                _ => None,
            };
            let child = child.ok_or_else(|| ConfigError::PathNotValid(segment.to_string()))?;
            current = self.resolve(child)?;
        }
        Ok(current)
    }

    /// Resolves `node` until it is no longer a reference.
    pub(crate) fn resolve(&mut self, node: &'t Node) -> ConfigResult<Cow<'t, Node>> {
        let mark = self.visiting.len();
        let result = self.resolve_chain(node);
        self.visiting.truncate(mark);
        result
    }

    fn resolve_chain(&mut self, node: &'t Node) -> ConfigResult<Cow<'t, Node>> {
        let mut current = node;
        loop {
            let field = match current {
                Node::Field(field) => field,
                other => return Ok(Cow::Borrowed(other)),
            };
            if self.visiting.iter().any(|path| *path == field.path) {
                return Err(ConfigError::SubstitutionCycle(field.path.clone()));
            }
            self.visiting.push(field.path.clone());
            trace!("resolving {}", current);

            match self.walk(Cow::Borrowed(self.tree.root()), &field.path) {
                Ok(found) => return Ok(found),
                Err(e @ ConfigError::SubstitutionCycle(_)) => return Err(e),
                Err(_) => {}
            }

            if let Some(value) = self.tree.env().lookup(&field.path) {
                debug!("substitution {} taken from environment", field.path);
                return Ok(Cow::Owned(Node::String(env_string(field.pos, value))));
            }

            if field.hard {
                return Ok(Cow::Owned(Node::Nil(NilNode { pos: field.pos })));
            }
            // The shadowed value is not a re-entry of this reference.
            self.visiting.pop();
            match &field.fallback {
                Some(fallback) => current = fallback,
                None => return Err(ConfigError::InvalidField(field.path.clone())),
            }
        }
    }
}

/// Environment values arrive as text; surrounding double quotes are removed.
fn env_string(pos: usize, value: String) -> StringNode {
    let text = if value.len() >= 2 && value.starts_with('"') && value.ends_with('"') {
        unquote(&value)
    } else {
        value.clone()
    };
    StringNode {
        pos,
        quoted: value,
        text,
    }
}
