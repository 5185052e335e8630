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

//! Shared test fixtures for HCONF.
//!
//! Fixtures are plain text and standard-library types, so the crate can be a
//! dev-dependency of `hconf-core` itself as well as of the facade and the
//! benchmarks.
//!
//! # Quick Start
//!
//! ```rust
//! use hconf_test::{fixed_env, fixtures};
//!
//! let text = fixtures::service();
//! let env = fixed_env(&[("PORT", "9090")]);
//! assert!(text.contains("${?PORT}"));
//! assert_eq!(env.get("PORT").map(String::as_str), Some("9090"));
//!
//! for (name, invalid) in fixtures::errors::invalid_samples() {
//!     assert!(!name.is_empty());
//!     let _ = invalid;
//! }
//! ```

use std::collections::HashMap;

/// Canonical documents and invalid samples.
pub mod fixtures;

/// Type alias for a list of fixture functions (name, generator).
pub type FixtureList = Vec<(&'static str, fn() -> &'static str)>;

/// Builds a fixed environment mapping from `(name, value)` pairs.
pub fn fixed_env(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(name, value)| (name.to_string(), value.to_string()))
        .collect()
}
