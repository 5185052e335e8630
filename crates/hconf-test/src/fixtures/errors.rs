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

//! Documents that must fail to parse.

/// Invalid text samples as `(name, text)` pairs.
pub fn invalid_samples() -> Vec<(&'static str, &'static str)> {
    vec![
        ("unterminated_quote", "x = \"abc"),
        ("unterminated_raw", "x = `abc"),
        ("unclosed_comment", "a = 1 /* never closed"),
        ("single_slash", "a = 1 / 2"),
        ("invalid_substitution", "a = ${b c}"),
        ("empty_substitution", "a = ${}"),
        ("lone_dollar", "a = $b"),
        ("unrecognized_character", "a = @"),
        ("missing_separator", "a 1"),
        ("unclosed_object", "a { b = 1"),
        ("unbalanced_close", "a = 1 }"),
        ("unclosed_array", "a = [1, 2"),
        ("missing_array_separator", "a = [{} {}]"),
        ("empty_key_segment", "a..b = 1"),
        ("bad_complex", "a = 1+2"),
        ("lone_plus", "a = +"),
        ("trailing_content", "{ a = 1 } b = 2"),
        ("bare_value", "= 1"),
    ]
}
