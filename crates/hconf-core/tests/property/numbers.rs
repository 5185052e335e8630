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

//! Property-based tests for numeric literals.
//!
//! # Properties Tested
//!
//! 1. **Integer Fidelity**: every `i64` and `u64` reads back exactly
//! 2. **Float Fidelity**: shortest float text reads back exactly
//! 3. **Representation Invariant**: an accepted literal is valid in at least
//!    one of int64/uint64/float64, and integer-valid implies float-valid

use hconf_core::{parse, Node};
use proptest::prelude::*;

fn number_at(text: &str) -> Option<hconf_core::NumberNode> {
    let tree = parse("prop", &format!("v = {}", text)).ok()?;
    match tree.config().get_value("v").ok()?.node() {
        Node::Number(n) => Some(n.clone()),
        _ => None,
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(1000))]

    /// Property: Any i64 literal reads back as itself.
    #[test]
    fn prop_i64_roundtrips(n in any::<i64>()) {
        let tree = parse("prop", &format!("v = {}", n)).unwrap();
        prop_assert_eq!(tree.config().get_i64("v").unwrap(), n);
        prop_assert_eq!(tree.config().get_f64("v").unwrap(), n as f64);
    }

    /// Property: Any u64 literal reads back as itself.
    #[test]
    fn prop_u64_roundtrips(n in any::<u64>()) {
        let tree = parse("prop", &format!("v = {}", n)).unwrap();
        prop_assert_eq!(tree.config().get_u64("v").unwrap(), n);
    }

    /// Property: Display output of a finite float reads back exactly.
    #[test]
    fn prop_float_roundtrips(f in -1.0e9_f64..1.0e9_f64) {
        let tree = parse("prop", &format!("v = {}", f)).unwrap();
        prop_assert_eq!(tree.config().get_f64("v").unwrap(), f);
    }

    /// Property: Exponent forms read back like the float they denote.
    #[test]
    fn prop_exponent_form(mantissa in 1_u32..1000, exp in -20_i32..20) {
        let text = format!("{}e{}", mantissa, exp);
        let expected: f64 = text.parse().unwrap();
        let tree = parse("prop", &format!("v = {}", text)).unwrap();
        prop_assert_eq!(tree.config().get_f64("v").unwrap(), expected);
    }

    /// Property: Accepted literals always have a representation, and
    /// integer validity implies float validity.
    #[test]
    fn prop_representation_invariant(
        text in "-?[0-9]{1,22}(\\.[0-9]{1,6})?([eE][+-]?[0-9]{1,3})?"
    ) {
        if let Some(n) = number_at(&text) {
            prop_assert!(n.is_int() || n.is_uint() || n.is_float(), "{:?}", n);
            if n.is_int() || n.is_uint() {
                prop_assert!(n.is_float(), "{:?}", n);
            }
            prop_assert_eq!(&n.text, &text);
        }
    }

    /// Property: A float with an exact integer value is also integer-valid.
    #[test]
    fn prop_exact_float_is_int(n in -1_000_000_i64..1_000_000) {
        let tree = parse("prop", &format!("v = {}.0", n)).unwrap();
        prop_assert_eq!(tree.config().get_i64("v").unwrap(), n);
    }

    /// Property: Numeric strings coerce like the equivalent literal.
    #[test]
    fn prop_string_coercion_matches_literal(n in any::<i64>()) {
        let tree = parse("prop", &format!("a = {}\nb = \"{}\"", n, n)).unwrap();
        let config = tree.config();
        prop_assert_eq!(config.get_i64("a").unwrap(), config.get_i64("b").unwrap());
    }
}
