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

//! Resource limits for HCONF parsing.

/// Configurable limits for parser security.
///
/// These limits bound the resources consumed while parsing untrusted
/// configuration text. Exceeding any of them aborts the parse with a
/// [`Security`](crate::HconfErrorKind::Security) error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Limits {
    /// Maximum input size in bytes (default: 64MB).
    pub max_file_size: usize,
    /// Maximum object/array nesting depth, dotted-key levels included
    /// (default: 128).
    pub max_nest_depth: usize,
    /// Maximum number of distinct keys in a single map (default: 100k).
    pub max_object_keys: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_file_size: 64 * 1024 * 1024, // 64MB
            max_nest_depth: 128,
            max_object_keys: 100_000,
        }
    }
}

impl Limits {
    /// Create limits with no restrictions (for testing).
    pub fn unlimited() -> Self {
        Self {
            max_file_size: usize::MAX,
            max_nest_depth: usize::MAX,
            max_object_keys: usize::MAX,
        }
    }
}
