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

//! Property-based tests for redefinition and copy semantics.
//!
//! # Properties Tested
//!
//! 1. **Last Scalar Wins**: repeated scalar keys keep the final value
//! 2. **Map Union**: repeated map keys merge, newer entries winning
//! 3. **Dotted Keys**: `a.b.c = v` equals the nested form
//! 4. **Copy Identity**: a cloned tree renders and compares equal
//! 5. **Soft Fallback**: an unset soft reference keeps the shadowed value

use hconf_core::{parse, EmptyEnv};
use proptest::collection::{btree_set, vec};
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// Property: The last of several scalar definitions wins.
    #[test]
    fn prop_last_scalar_wins(values in vec(any::<i64>(), 1..10)) {
        let doc: String = values.iter().map(|v| format!("a = {}\n", v)).collect();
        let tree = parse("prop", &doc).unwrap();
        prop_assert_eq!(tree.config().get_i64("a").unwrap(), values[values.len() - 1]);
    }

    /// Property: Two definitions of one map produce the union of their keys.
    #[test]
    fn prop_maps_union(
        first in btree_set("k_[a-z]{1,6}", 0..8),
        second in btree_set("k_[a-z]{1,6}", 0..8),
    ) {
        let body = |keys: &std::collections::BTreeSet<String>, v: i64| -> String {
            keys.iter().map(|k| format!("{} = {}\n", k, v)).collect()
        };
        let doc = format!("m {{\n{}}}\nm {{\n{}}}\n", body(&first, 1), body(&second, 2));
        let tree = parse("prop", &doc).unwrap();
        let config = tree.config();

        let mut keys = config.get_key_set("m").unwrap();
        keys.sort();
        let expected: Vec<String> = first.union(&second).cloned().collect();
        prop_assert_eq!(&keys, &expected);

        for key in &expected {
            let want = if second.contains(key) { 2 } else { 1 };
            prop_assert_eq!(config.get_i64(&format!("m.{}", key)).unwrap(), want);
        }
    }

    /// Property: A dotted key builds the same tree as explicit nesting.
    #[test]
    fn prop_dotted_equals_nested(path in vec("k[a-z]{0,4}", 1..6), value in any::<i32>()) {
        let dotted = format!("{} = {}", path.join("."), value);
        let nested = format!(
            "{}{}{}",
            path.iter().take(path.len() - 1).map(|k| format!("{} {{ ", k)).collect::<String>(),
            format!("{} = {}", path[path.len() - 1], value),
            " }".repeat(path.len() - 1),
        );
        let a = parse("dotted", &dotted).unwrap();
        let b = parse("nested", &nested).unwrap();
        prop_assert_eq!(a.root(), b.root());
    }

    /// Property: Cloning a tree preserves rendering and structure.
    #[test]
    fn prop_clone_identity(
        entries in vec(("k[a-z]{0,4}", prop_oneof![
            any::<i32>().prop_map(|v| v.to_string()),
            "[a-z]{1,8}".prop_map(|s| format!("\"{}\"", s)),
            Just("[1, 2, 3]".to_string()),
            Just("{ x = 1 }".to_string()),
            Just("${k}".to_string()),
        ]), 0..12)
    ) {
        let doc: String = entries.iter().map(|(k, v)| format!("{} = {}\n", k, v)).collect();
        let tree = parse("prop", &doc).unwrap();
        let copy = tree.clone();
        prop_assert_eq!(copy.root().to_string(), tree.root().to_string());
        prop_assert_eq!(copy.root(), tree.root());
    }

    /// Property: An unset soft reference keeps the value it shadows.
    #[test]
    fn prop_soft_fallback(value in any::<i64>()) {
        let doc = format!("p = {}\np = ${{?HCONF_PROP_UNSET}}", value);
        let tree = parse("prop", &doc).unwrap().with_env(EmptyEnv);
        prop_assert_eq!(tree.config().get_i64("p").unwrap(), value);
    }
}
