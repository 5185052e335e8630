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

//! Property-based tests for the scanner.
//!
//! # Properties Tested
//!
//! 1. **Totality**: any input yields a finite token stream ending in `Eof`
//!    or `Error`, and parsing it never panics
//! 2. **Positions**: token offsets never decrease and fall on char boundaries
//! 3. **Literal Fidelity**: bare words and quoted text read back unchanged

use hconf_core::lex::{Scanner, TokenKind};
use hconf_core::parse;
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(1000))]

    /// Property: Scanning arbitrary text terminates with exactly one terminal token.
    #[test]
    fn prop_scanner_terminates(input in "\\PC{0,200}") {
        let tokens: Vec<_> = Scanner::new(&input).collect();
        prop_assert!(!tokens.is_empty());
        let last = &tokens[tokens.len() - 1];
        prop_assert!(matches!(last.kind, TokenKind::Eof | TokenKind::Error));
        let terminals = tokens
            .iter()
            .filter(|t| matches!(t.kind, TokenKind::Eof | TokenKind::Error))
            .count();
        prop_assert_eq!(terminals, 1);
    }

    /// Property: Token offsets are ordered and valid.
    #[test]
    fn prop_token_positions(input in "[a-z0-9 ={}\\[\\],:.\"#\n$?-]{0,120}") {
        let mut last = 0;
        for token in Scanner::new(&input) {
            prop_assert!(token.pos >= last, "{} < {}", token.pos, last);
            prop_assert!(input.is_char_boundary(token.pos));
            last = token.pos;
        }
    }

    /// Property: Parsing arbitrary text returns instead of panicking.
    #[test]
    fn prop_parse_never_panics(input in "\\PC{0,200}") {
        let _ = parse("fuzz", &input);
    }

    /// Property: Structured noise parses or fails cleanly, and a successful
    /// parse can be queried.
    #[test]
    fn prop_structured_noise(input in "[a-c ={}\\[\\],\n]{0,80}") {
        if let Ok(tree) = parse("noise", &input) {
            let _ = tree.config().get_key_set("");
            let _ = tree.root().to_string();
        }
    }

    /// Property: A bare word is read back as itself.
    #[test]
    fn prop_bare_word(word in "[a-z][a-z0-9_-]{0,20}") {
        prop_assume!(!matches!(word.as_str(), "true" | "false" | "on" | "off" | "nil"));
        let tree = parse("prop", &format!("v = {}", word)).unwrap();
        prop_assert_eq!(tree.config().get_string("v").unwrap(), word);
    }

    /// Property: Quoted text without escapes is read back as itself.
    #[test]
    fn prop_quoted_text(text in "[a-zA-Z0-9 ,.:!?#/{}=]{0,30}") {
        let tree = parse("prop", &format!("v = \"{}\"", text)).unwrap();
        prop_assert_eq!(tree.config().get_string("v").unwrap(), text);
    }
}
