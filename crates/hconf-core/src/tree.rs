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

//! The parsed document.

use crate::config::Config;
use crate::env::{Env, ProcessEnv};
use crate::error::truncate_snippet;
use crate::lex::SourcePos;
use crate::node::Node;
use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

/// A parsed document: its name, root node, source text, and the environment
/// consulted when a substitution has no target in the tree.
///
/// A tree is never mutated after parsing. `Clone` copies the whole node
/// structure and shares the environment.
#[derive(Clone)]
pub struct Tree {
    name: String,
    root: Node,
    text: String,
    env: Arc<dyn Env>,
}

impl Tree {
    pub(crate) fn new(name: String, root: Node, text: String) -> Self {
        Self {
            name,
            root,
            text,
            env: Arc::new(ProcessEnv),
        }
    }

    /// The name the document was parsed under.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn root(&self) -> &Node {
        &self.root
    }

    /// The source text the tree was parsed from.
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn env(&self) -> &dyn Env {
        self.env.as_ref()
    }

    /// Replaces the environment used for substitution fallback.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::collections::HashMap;
    ///
    /// let env: HashMap<String, String> = [("PORT".to_string(), "8080".to_string())].into();
    /// let tree = hconf_core::parse("t", "port = ${PORT}").unwrap().with_env(env);
    /// assert_eq!(tree.config().get_i64("port").unwrap(), 8080);
    /// ```
    pub fn with_env(mut self, env: impl Env + 'static) -> Self {
        self.env = Arc::new(env);
        self
    }

    /// A read-only view of the root.
    pub fn config(&self) -> Config<'_> {
        Config::new(self, Cow::Borrowed(&self.root))
    }

    /// Line and byte column of `node` within the source text.
    pub fn location_of(&self, node: &Node) -> SourcePos {
        SourcePos::from_offset(&self.text, node.pos())
    }

    /// `name:line:column` of `node`, with its rendering truncated to a short
    /// snippet.
    pub fn error_context(&self, node: &Node) -> (String, String) {
        let at = self.location_of(node);
        (
            format!("{}:{}:{}", self.name, at.line(), at.column()),
            truncate_snippet(&node.to_string()),
        )
    }
}

impl fmt::Debug for Tree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tree")
            .field("name", &self.name)
            .field("root", &self.root)
            .finish_non_exhaustive()
    }
}
