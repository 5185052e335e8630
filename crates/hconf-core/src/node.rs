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

//! The closed set of tree nodes produced by the parser.
//!
//! Every operation matches all variants exhaustively, so a new variant is a
//! compile error everywhere it needs handling. `Clone` is the deep copy.

use indexmap::map::Entry;
use indexmap::IndexMap;
use std::fmt;

pub use crate::number::{Complex128, NumberNode};

/// Discriminant of a [`Node`], used in error messages and kind checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Map,
    List,
    Bool,
    Nil,
    String,
    Number,
    Field,
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Map => "map",
            Self::List => "list",
            Self::Bool => "bool",
            Self::Nil => "nil",
            Self::String => "string",
            Self::Number => "number",
            Self::Field => "field",
        };
        f.write_str(name)
    }
}

/// A node of the parsed tree.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Node {
    Map(MapNode),
    List(ListNode),
    Bool(BoolNode),
    Nil(NilNode),
    String(StringNode),
    Number(NumberNode),
    Field(FieldNode),
}

/// Keyed children. Keys are unique; iteration follows first definition.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct MapNode {
    pub pos: usize,
    pub entries: IndexMap<String, Node>,
}

/// Ordered children.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ListNode {
    pub pos: usize,
    pub items: Vec<Node>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct BoolNode {
    pub pos: usize,
    pub value: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct NilNode {
    pub pos: usize,
}

/// A string value: the source form (quotes included) and the processed text.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct StringNode {
    pub pos: usize,
    pub quoted: String,
    pub text: String,
}

/// A substitution reference, resolved lazily at query time.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct FieldNode {
    pub pos: usize,
    /// Dotted path of the target.
    pub path: String,
    /// `${path}` when true, `${?path}` when false.
    pub hard: bool,
    /// Value this reference shadowed when it was defined.
    pub fallback: Option<Box<Node>>,
}

impl MapNode {
    pub fn new(pos: usize) -> Self {
        Self {
            pos,
            entries: IndexMap::new(),
        }
    }

    #[inline]
    pub fn get(&self, key: &str) -> Option<&Node> {
        self.entries.get(key)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

impl StringNode {
    pub fn new(pos: usize, quoted: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            pos,
            quoted: quoted.into(),
            text: text.into(),
        }
    }
}

impl FieldNode {
    pub fn new(pos: usize, path: impl Into<String>, hard: bool) -> Self {
        Self {
            pos,
            path: path.into(),
            hard,
            fallback: None,
        }
    }
}

impl Node {
    /// Nil at offset 0; used where a value must be moved out temporarily.
    fn placeholder() -> Node {
        Node::Nil(NilNode::default())
    }

    pub fn kind(&self) -> NodeKind {
        match self {
            Node::Map(_) => NodeKind::Map,
            Node::List(_) => NodeKind::List,
            Node::Bool(_) => NodeKind::Bool,
            Node::Nil(_) => NodeKind::Nil,
            Node::String(_) => NodeKind::String,
            Node::Number(_) => NodeKind::Number,
            Node::Field(_) => NodeKind::Field,
        }
    }

    /// Byte offset of the node in the source text.
    pub fn pos(&self) -> usize {
        match self {
            Node::Map(n) => n.pos,
            Node::List(n) => n.pos,
            Node::Bool(n) => n.pos,
            Node::Nil(n) => n.pos,
            Node::String(n) => n.pos,
            Node::Number(n) => n.pos,
            Node::Field(n) => n.pos,
        }
    }

    pub fn as_map(&self) -> Option<&MapNode> {
        match self {
            Node::Map(map) => Some(map),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&ListNode> {
        match self {
            Node::List(list) => Some(list),
            _ => None,
        }
    }

    #[inline]
    pub fn is_nil(&self) -> bool {
        matches!(self, Node::Nil(_))
    }

    /// Merges `fallback` underneath this node.
    ///
    /// Two maps merge recursively, this node winning conflicts; its keys keep
    /// their order and keys only in `fallback` are appended. For every other
    /// pairing this node is returned unchanged.
    pub fn merge_with_fallback(self, fallback: Node) -> Node {
        match (self, fallback) {
            (Node::Map(map), Node::Map(under)) => {
                Node::Map(merge_maps(map, under, Node::merge_with_fallback))
            }
            (Node::List(list), _) => Node::List(list),
            (Node::Map(map), _) => Node::Map(map),
            (node @ (Node::Bool(_) | Node::Nil(_) | Node::String(_) | Node::Number(_)), _) => node,
            (Node::Field(field), _) => Node::Field(field),
        }
    }

    /// Applies this node as a redefinition of `previous`.
    ///
    /// Maps merge recursively with `previous` keeping its key order and this
    /// node winning conflicts. A reference with no fallback captures the
    /// value it replaces. Anything else simply replaces `previous`.
    pub fn redefine(self, previous: Node) -> Node {
        match (self, previous) {
            (Node::Map(newer), Node::Map(older)) => {
                let pos = newer.pos;
                let mut merged = merge_maps(older, newer, |prior, value| value.redefine(prior));
                merged.pos = pos;
                Node::Map(merged)
            }
            (Node::Field(mut field), previous) => {
                if field.fallback.is_none() {
                    field.fallback = Some(Box::new(previous));
                }
                Node::Field(field)
            }
            (node, _) => node,
        }
    }
}

/// Key-wise union of two maps. `base` keeps its key order and keys only in
/// `other` are appended; `combine(base_value, other_value)` settles keys
/// present in both.
fn merge_maps(mut base: MapNode, other: MapNode, combine: fn(Node, Node) -> Node) -> MapNode {
    for (key, value) in other.entries {
        match base.entries.entry(key) {
            Entry::Occupied(mut slot) => {
                let current = std::mem::replace(slot.get_mut(), Node::placeholder());
                *slot.get_mut() = combine(current, value);
            }
            Entry::Vacant(slot) => {
                slot.insert(value);
            }
        }
    }
    base
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Map(map) => {
                for (key, value) in &map.entries {
                    write!(f, "{} = ({})", key, value)?;
                }
                Ok(())
            }
            Node::List(list) => list.items.iter().try_for_each(|item| write!(f, "{}", item)),
            Node::Bool(b) => write!(f, "{}", b.value),
            Node::Nil(_) => f.write_str("nil"),
            Node::String(s) => f.write_str(&s.quoted),
            Node::Number(n) => f.write_str(&n.text),
            Node::Field(field) if field.hard => write!(f, "${{{}}}", field.path),
            Node::Field(field) => write!(f, "${{?{}}}", field.path),
        }
    }
}

/// Structural equality: positions and map key order are ignored, strings
/// compare by processed text and numbers by source text.
impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Node::Map(a), Node::Map(b)) => {
                a.entries.len() == b.entries.len()
                    && a
                        .entries
                        .iter()
                        .all(|(key, value)| b.entries.get(key) == Some(value))
            }
            (Node::List(a), Node::List(b)) => a.items == b.items,
            (Node::Bool(a), Node::Bool(b)) => a.value == b.value,
            (Node::Nil(_), Node::Nil(_)) => true,
            (Node::String(a), Node::String(b)) => a.text == b.text,
            (Node::Number(a), Node::Number(b)) => a.text == b.text,
            (Node::Field(a), Node::Field(b)) => {
                a.path == b.path && a.hard == b.hard && a.fallback == b.fallback
            }
            (
                Node::Map(_)
                | Node::List(_)
                | Node::Bool(_)
                | Node::Nil(_)
                | Node::String(_)
                | Node::Number(_)
                | Node::Field(_),
                _,
            ) => false,
        }
    }
}
