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

//! Recursive-descent parser for HCONF documents.
//!
//! The parser pulls tokens from the [`Scanner`] with up to three tokens of
//! pushback and builds one immutable [`Tree`]. Any token that does not fit
//! the grammar aborts the whole parse; no partial tree is ever returned.
//!
//! # Desugaring
//!
//! - `a.b.c = v` is built as `a = { b = { c = v } }`, innermost first.
//! - `key { ... }` is `key = { ... }`.
//! - Redefining a key merges two maps recursively (newer values win) and
//!   otherwise replaces the earlier value; a substitution that replaces a
//!   value keeps it as its fallback.
//! - Adjacent literal tokens on one line form a single space-joined string
//!   (`timeout = 10 seconds`).
//!
//! # Security Limits
//!
//! - `max_file_size`: input size in bytes
//! - `max_nest_depth`: object/array nesting
//! - `max_object_keys`: distinct keys in one map

use crate::error::{HconfError, HconfResult};
use crate::lex::{unquote, Scanner, SourcePos, Token, TokenKind};
use crate::limits::Limits;
use crate::node::{BoolNode, FieldNode, ListNode, MapNode, NilNode, Node, NumberNode, StringNode};
use crate::tree::Tree;
use indexmap::map::Entry;
use std::path::Path;
use tracing::debug;

/// Name given to documents parsed from bytes or files.
pub const DEFAULT_NAME: &str = "config";

/// Parsing options: the document name used in errors, and resource limits.
///
/// # Examples
///
/// ```
/// use hconf_core::ParseOptions;
///
/// let opts = ParseOptions::builder()
///     .name("service.conf")
///     .max_nest_depth(16)
///     .build();
/// assert_eq!(opts.name, "service.conf");
/// assert_eq!(opts.limits.max_nest_depth, 16);
/// ```
#[derive(Debug, Clone)]
pub struct ParseOptions {
    /// Document name reported in errors.
    pub name: String,
    /// Security limits.
    pub limits: Limits,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            name: DEFAULT_NAME.to_string(),
            limits: Limits::default(),
        }
    }
}

impl ParseOptions {
    /// Create a builder with default options.
    pub fn builder() -> ParseOptionsBuilder {
        ParseOptionsBuilder::new()
    }
}

/// Fluent builder for [`ParseOptions`].
#[derive(Debug, Clone)]
pub struct ParseOptionsBuilder {
    name: String,
    limits: Limits,
}

impl ParseOptionsBuilder {
    /// Create a new builder with default options.
    pub fn new() -> Self {
        Self {
            name: DEFAULT_NAME.to_string(),
            limits: Limits::default(),
        }
    }

    /// Set the document name reported in errors.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Replace all limits at once.
    pub fn limits(mut self, limits: Limits) -> Self {
        self.limits = limits;
        self
    }

    /// Set the maximum input size in bytes.
    pub fn max_file_size(mut self, size: usize) -> Self {
        self.limits.max_file_size = size;
        self
    }

    /// Set the maximum object/array nesting depth.
    pub fn max_nest_depth(mut self, depth: usize) -> Self {
        self.limits.max_nest_depth = depth;
        self
    }

    /// Set the maximum number of distinct keys in one map.
    pub fn max_object_keys(mut self, count: usize) -> Self {
        self.limits.max_object_keys = count;
        self
    }

    /// Build the ParseOptions.
    pub fn build(self) -> ParseOptions {
        ParseOptions {
            name: self.name,
            limits: self.limits,
        }
    }
}

impl Default for ParseOptionsBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse a document held in memory, naming it `name` in errors.
///
/// # Examples
///
/// ```
/// let tree = hconf_core::parse("app.conf", "server { port = 8080 }").unwrap();
/// assert_eq!(tree.config().get_i64("server.port").unwrap(), 8080);
/// ```
pub fn parse(name: &str, text: &str) -> HconfResult<Tree> {
    parse_with_options(text, ParseOptions::builder().name(name).build())
}

/// Parse a document from bytes. A leading UTF-8 byte order mark is skipped.
pub fn parse_bytes(bytes: &[u8]) -> HconfResult<Tree> {
    parse_bytes_with_options(bytes, ParseOptions::default())
}

/// Parse a document from bytes with custom options.
pub fn parse_bytes_with_options(bytes: &[u8], options: ParseOptions) -> HconfResult<Tree> {
    let bytes = bytes.strip_prefix(b"\xEF\xBB\xBF").unwrap_or(bytes);
    match std::str::from_utf8(bytes) {
        Ok(text) => parse_with_options(text, options),
        Err(e) => {
            let valid = &bytes[..e.valid_up_to()];
            let line = std::str::from_utf8(valid)
                .map_or(1, |prefix| SourcePos::from_offset(prefix, prefix.len()).line());
            Err(HconfError::syntax("invalid UTF-8 in input", line).with_source(options.name))
        }
    }
}

/// Parse a document from a file.
///
/// A read failure is reported as an I/O error, "failed to read config file".
pub fn parse_file(path: impl AsRef<Path>) -> HconfResult<Tree> {
    let path = path.as_ref();
    let bytes = std::fs::read(path).map_err(|e| {
        debug!("reading {} failed: {}", path.display(), e);
        HconfError::io("failed to read config file").with_context(path.display().to_string())
    })?;
    parse_bytes(&bytes)
}

/// Parse a document with custom options.
pub fn parse_with_options(text: &str, options: ParseOptions) -> HconfResult<Tree> {
    debug!("parsing {} ({} bytes)", options.name, text.len());
    if text.len() > options.limits.max_file_size {
        return Err(HconfError::security(
            format!(
                "input size {} exceeds maximum {}",
                text.len(),
                options.limits.max_file_size
            ),
            1,
        )
        .with_source(options.name));
    }

    let root = Parser::new(text, &options.name, &options.limits)
        .parse_document()
        .map_err(|e| *e)?;
    if let Node::Map(map) = &root {
        debug!("parsed {}: {} root keys", options.name, map.len());
    }
    Ok(Tree::new(options.name, root, text.to_string()))
}

/// Internal result: errors stay boxed while the recursive descent unwinds so
/// every frame on the nesting path stays small.
type ParseResult<T> = Result<T, Box<HconfError>>;

/// Parser state for a single document.
struct Parser<'a> {
    scanner: Scanner<'a>,
    /// Pushed-back tokens; the last one is returned first.
    pending: Vec<Token<'a>>,
    name: &'a str,
    limits: &'a Limits,
    /// Map/list levels open around the current position, counting the
    /// levels a dotted key adds.
    depth: usize,
}

impl<'a> Parser<'a> {
    fn new(input: &'a str, name: &'a str, limits: &'a Limits) -> Self {
        Self {
            scanner: Scanner::new(input),
            pending: Vec::with_capacity(3),
            name,
            limits,
            depth: 0,
        }
    }

    // ==================== Token stream ====================

    /// Returns the next token; a lexical error token becomes a parse error.
    fn next(&mut self) -> ParseResult<Token<'a>> {
        let token = match self.pending.pop() {
            Some(token) => token,
            None => self.scanner.next_token(),
        };
        if token.is(TokenKind::Error) {
            return Err(self.lex_error(&token));
        }
        Ok(token)
    }

    #[inline]
    fn backup(&mut self, token: Token<'a>) {
        debug_assert!(self.pending.len() < 3);
        self.pending.push(token);
    }

    /// Next token that is not whitespace.
    fn next_non_space(&mut self) -> ParseResult<Token<'a>> {
        loop {
            let token = self.next()?;
            if !token.is(TokenKind::Space) {
                return Ok(token);
            }
        }
    }

    /// Next token that is neither whitespace nor a line break.
    fn next_significant(&mut self) -> ParseResult<Token<'a>> {
        loop {
            let token = self.next()?;
            if !matches!(token.kind, TokenKind::Space | TokenKind::Newline) {
                return Ok(token);
            }
        }
    }

    /// Consumes an element separator: a comma, or one or more line breaks.
    fn element_separator(&mut self) -> ParseResult<bool> {
        let mut saw_newline = false;
        loop {
            let token = self.next()?;
            match token.kind {
                TokenKind::Space => {}
                TokenKind::Newline => saw_newline = true,
                TokenKind::Comma => return Ok(true),
                _ => {
                    self.backup(token);
                    return Ok(saw_newline);
                }
            }
        }
    }

    // ==================== Errors ====================

    #[cold]
    fn error_at(&self, pos: usize, message: &str, snippet: &str) -> Box<HconfError> {
        let at = SourcePos::from_offset(self.scanner.input(), pos);
        Box::new(
            HconfError::syntax(message, at.line())
                .with_column(at.column())
                .with_source(self.name)
                .with_snippet(snippet.lines().next().unwrap_or("")),
        )
    }

    #[cold]
    fn lex_error(&self, token: &Token<'_>) -> Box<HconfError> {
        let snippet = &self.scanner.input()[token.pos..];
        self.error_at(token.pos, token.text.as_ref(), snippet)
    }

    #[cold]
    fn unexpected(&self, token: &Token<'_>, context: &str) -> Box<HconfError> {
        self.error_at(
            token.pos,
            &format!("unexpected {} in {}", token, context),
            &token.text,
        )
    }

    #[cold]
    fn expected(&self, token: &Token<'_>, what: &str) -> Box<HconfError> {
        self.error_at(
            token.pos,
            &format!("expected {} but token {} shows up", what, token),
            &token.text,
        )
    }

    #[cold]
    fn limit_error(&self, pos: usize, message: String) -> Box<HconfError> {
        let at = SourcePos::from_offset(self.scanner.input(), pos);
        Box::new(
            HconfError::security(message, at.line())
                .with_column(at.column())
                .with_source(self.name),
        )
    }

    /// Opens `levels` nesting levels at `pos`, failing past `max_nest_depth`.
    fn enter(&mut self, pos: usize, levels: usize) -> ParseResult<()> {
        match self.depth.checked_add(levels) {
            Some(depth) if depth <= self.limits.max_nest_depth => {
                self.depth = depth;
                Ok(())
            }
            _ => Err(self.limit_error(
                pos,
                format!("nesting depth exceeds maximum {}", self.limits.max_nest_depth),
            )),
        }
    }

    #[inline]
    fn leave(&mut self, levels: usize) {
        self.depth -= levels;
    }

    // ==================== Grammar ====================

    fn parse_document(&mut self) -> ParseResult<Node> {
        let first = self.next_significant()?;
        let root = match first.kind {
            TokenKind::OpenBrace | TokenKind::OpenBracket => self.parse_value(first)?,
            _ => {
                let pos = first.pos;
                self.backup(first);
                self.enter(pos, 1)?;
                let map = self.parse_object(false, pos)?;
                self.leave(1);
                Node::Map(map)
            }
        };
        let end = self.next_significant()?;
        if !end.is(TokenKind::Eof) {
            return Err(self.expected(&end, "EOF"));
        }
        Ok(root)
    }

    /// Parses entries up to `}` (when `braced`) or end of input.
    fn parse_object(&mut self, braced: bool, pos: usize) -> ParseResult<MapNode> {
        let mut map = MapNode::new(pos);
        loop {
            let token = self.next_significant()?;
            match token.kind {
                TokenKind::CloseBrace if braced => break,
                TokenKind::CloseBrace => return Err(self.unexpected(&token, "unbalanced close brace")),
                TokenKind::Eof if !braced => break,
                TokenKind::Eof => return Err(self.expected(&token, "}")),
                _ => {}
            }

            let key_pos = token.pos;
            let path = self.parse_key(token)?;
            // a.b.c = v opens two maps around v.
            let extra = path.len().saturating_sub(1);
            self.enter(key_pos, extra)?;
            let value = self.parse_entry_value()?;
            self.leave(extra);
            self.insert(&mut map, path, value, key_pos)?;

            if !self.element_separator()? {
                self.close_object(braced)?;
                break;
            }
        }
        Ok(map)
    }

    /// Value after a key: `{` directly, or a separator then a value.
    fn parse_entry_value(&mut self) -> ParseResult<Node> {
        let after = self.next_significant()?;
        if after.is(TokenKind::OpenBrace) {
            self.parse_value(after)
        } else if after.kind.is_key_value_separator() {
            self.parse_value_run()
        } else {
            Err(self.unexpected(&after, "object entry"))
        }
    }

    /// Expects the end of an object whose last entry had no separator.
    fn close_object(&mut self, braced: bool) -> ParseResult<()> {
        let next = self.next_significant()?;
        match next.kind {
            TokenKind::CloseBrace if braced => Ok(()),
            TokenKind::CloseBrace => Err(self.unexpected(&next, "unbalanced close brace")),
            TokenKind::Eof if !braced => Ok(()),
            _ if braced => Err(self.expected(&next, "}")),
            _ => Err(self.expected(&next, "EOF")),
        }
    }

    /// Parses array elements after `[`, allowing one trailing separator.
    fn parse_array(&mut self, pos: usize) -> ParseResult<ListNode> {
        let mut list = ListNode {
            pos,
            items: Vec::new(),
        };
        let first = self.next_significant()?;
        if first.is(TokenKind::CloseBracket) {
            return Ok(list);
        }
        self.backup(first);
        loop {
            list.items.push(self.parse_value_run()?);
            let separated = self.element_separator()?;
            let next = self.next_significant()?;
            match next.kind {
                TokenKind::CloseBracket => break,
                _ if separated => self.backup(next),
                _ => return Err(self.expected(&next, "]")),
            }
        }
        Ok(list)
    }

    /// Splits a key token into path segments.
    ///
    /// Quoted keys are taken literally; bare keys are split on `.`.
    fn parse_key(&self, token: Token<'a>) -> ParseResult<Vec<String>> {
        match token.kind {
            TokenKind::Quoted | TokenKind::Raw => Ok(vec![unquote(&token.text)]),
            kind if kind.is_key() => {
                let segments: Vec<String> = token.text.split('.').map(str::to_string).collect();
                if segments.iter().any(String::is_empty) {
                    return Err(self.error_at(
                        token.pos,
                        &format!("invalid key {}", token),
                        &token.text,
                    ));
                }
                Ok(segments)
            }
            _ => Err(self.unexpected(&token, "object key")),
        }
    }

    /// Stores `value` under the dotted `path`, applying redefinition rules.
    #[inline(never)]
    fn insert(
        &self,
        map: &mut MapNode,
        path: Vec<String>,
        value: Node,
        key_pos: usize,
    ) -> ParseResult<()> {
        let mut segments = path.into_iter();
        let first = match segments.next() {
            Some(first) => first,
            None => return Ok(()),
        };
        let inner: Vec<String> = segments.collect();
        let value_pos = value.pos();
        let value = inner.into_iter().rev().fold(value, |child, key| {
            let mut wrapper = MapNode::new(value_pos);
            wrapper.entries.insert(key, child);
            Node::Map(wrapper)
        });

        let key_count = map.entries.len();
        match map.entries.entry(first) {
            Entry::Occupied(mut slot) => {
                let previous = std::mem::replace(slot.get_mut(), Node::Nil(NilNode { pos: key_pos }));
                *slot.get_mut() = value.redefine(previous);
            }
            Entry::Vacant(slot) => {
                if key_count >= self.limits.max_object_keys {
                    return Err(self.limit_error(
                        key_pos,
                        format!(
                            "object key count exceeds maximum {}",
                            self.limits.max_object_keys
                        ),
                    ));
                }
                slot.insert(value);
            }
        }
        Ok(())
    }

    /// Parses a value, joining a run of literals on one line into a string.
    fn parse_value_run(&mut self) -> ParseResult<Node> {
        let first = self.next_significant()?;
        if !first.kind.is_literal() {
            return self.parse_value(first);
        }
        let mut rest = Vec::new();
        loop {
            let token = self.next_non_space()?;
            if token.kind.is_literal() {
                rest.push(token);
            } else {
                self.backup(token);
                break;
            }
        }
        if rest.is_empty() {
            return self.parse_scalar(first);
        }
        rest.insert(0, first);
        Ok(consolidate(&rest))
    }

    /// Parses one value starting at `token`. Only maps and lists recurse.
    fn parse_value(&mut self, token: Token<'a>) -> ParseResult<Node> {
        let pos = token.pos;
        match token.kind {
            TokenKind::OpenBrace => {
                self.enter(pos, 1)?;
                let map = self.parse_object(true, pos)?;
                self.leave(1);
                Ok(Node::Map(map))
            }
            TokenKind::OpenBracket => {
                self.enter(pos, 1)?;
                let list = self.parse_array(pos)?;
                self.leave(1);
                Ok(Node::List(list))
            }
            _ => self.parse_scalar(token),
        }
    }

    #[inline(never)]
    fn parse_scalar(&self, token: Token<'a>) -> ParseResult<Node> {
        let pos = token.pos;
        let node = match token.kind {
            TokenKind::HardSubstitution => {
                Node::Field(FieldNode::new(pos, &token.text[2..token.text.len() - 1], true))
            }
            TokenKind::SoftSubstitution => {
                Node::Field(FieldNode::new(pos, &token.text[3..token.text.len() - 1], false))
            }
            TokenKind::Bool => Node::Bool(BoolNode {
                pos,
                value: matches!(token.text.as_ref(), "true" | "on"),
            }),
            TokenKind::Null => Node::Nil(NilNode { pos }),
            TokenKind::Number => Node::Number(
                NumberNode::parse(pos, &token.text)
                    .map_err(|e| self.error_at(pos, &e.to_string(), &token.text))?,
            ),
            TokenKind::Complex => Node::Number(
                NumberNode::parse_complex(pos, &token.text)
                    .map_err(|e| self.error_at(pos, &e.to_string(), &token.text))?,
            ),
            TokenKind::Quoted | TokenKind::Raw => {
                Node::String(StringNode::new(pos, token.text.as_ref(), unquote(&token.text)))
            }
            TokenKind::Unquoted => {
                Node::String(StringNode::new(pos, token.text.as_ref(), token.text.as_ref()))
            }
            _ => return Err(self.unexpected(&token, "value")),
        };
        Ok(node)
    }
}

/// Joins a run of literal tokens into one string node.
#[inline(never)]
fn consolidate(run: &[Token<'_>]) -> Node {
    let pos = run.first().map_or(0, |t| t.pos);
    // Quoted form keeps each token's source text.
    let quoted: Vec<&str> = run.iter().map(|t| t.text.as_ref()).collect();
    let text: Vec<String> = run.iter().map(|t| unquote(&t.text)).collect();
    Node::String(StringNode::new(pos, quoted.join(" "), text.join(" ")))
}
