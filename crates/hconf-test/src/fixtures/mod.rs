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

//! Canonical test documents.
//!
//! - **documents**: valid documents exercising each part of the grammar
//! - **errors**: documents every conforming parser must reject

mod documents;
pub mod errors;

pub use documents::*;

use crate::FixtureList;

/// Returns all valid fixtures for iteration.
pub fn all() -> FixtureList {
    vec![
        ("scalars", scalars),
        ("numbers", numbers),
        ("strings", strings),
        ("comments", comments),
        ("dotted_keys", dotted_keys),
        ("merging", merging),
        ("substitutions", substitutions),
        ("arrays", arrays),
        ("json", json),
        ("root_array", root_array),
        ("service", service),
    ]
}
