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

//! HCONF Benchmark Framework
//!
//! Deterministic document generators and standard sizes for the criterion
//! benchmarks.
//!
//! ## Usage
//!
//! Run all benchmarks:
//! ```bash
//! cargo bench --package hconf-bench
//! ```
//!
//! Run specific benchmark:
//! ```bash
//! cargo bench --package hconf-bench --bench parsing
//! ```

pub mod datasets;

pub use datasets::{
    deep_path, generate_chain, generate_config, generate_deep, generate_flat,
    generate_substitutions,
};

/// Standard fixture sizes for benchmarks
pub mod sizes {
    /// Small dataset: ~10 entries
    pub const SMALL: usize = 10;
    /// Medium dataset: ~100 entries
    pub const MEDIUM: usize = 100;
    /// Large dataset: ~1,000 entries
    pub const LARGE: usize = 1_000;
    /// Stress test: ~10,000 entries
    pub const STRESS: usize = 10_000;
}

#[cfg(test)]
mod tests {
    use super::*;
    use hconf_core::{parse, EmptyEnv};

    #[test]
    fn test_generate_flat_parses() {
        let tree = parse("flat", &generate_flat(sizes::MEDIUM)).unwrap();
        assert_eq!(tree.config().get_key_set("").unwrap().len(), sizes::MEDIUM);
    }

    #[test]
    fn test_generate_flat_is_deterministic() {
        assert_eq!(generate_flat(sizes::SMALL), generate_flat(sizes::SMALL));
    }

    #[test]
    fn test_generate_config_parses() {
        let tree = parse("config", &generate_config(sizes::SMALL))
            .unwrap()
            .with_env(EmptyEnv);
        let config = tree.config();
        assert!(config.get_bool("database0.enabled").unwrap());
        assert!(config.get_i64("database0.options.max_connections").is_ok());
        assert!(!config.get_array("cache1.hosts").unwrap().is_empty());
    }

    #[test]
    fn test_generate_deep_parses() {
        let tree = parse("deep", &generate_deep(50)).unwrap();
        assert_eq!(tree.config().get_i64(&deep_path(50)).unwrap(), 1);
    }

    #[test]
    fn test_generate_chain_resolves() {
        let tree = parse("chain", &generate_chain(100)).unwrap().with_env(EmptyEnv);
        assert_eq!(tree.config().get_string("link99").unwrap(), "end");
    }

    #[test]
    fn test_generate_substitutions_resolves() {
        let tree = parse("subs", &generate_substitutions(sizes::SMALL))
            .unwrap()
            .with_env(EmptyEnv);
        let config = tree.config();
        assert_eq!(config.get_string("svc3.host").unwrap(), "localhost");
        assert_eq!(config.get_f64("svc3.weight").unwrap(), 1.5);
        assert!(config.get_i64("svc3.port").unwrap() >= 1024);
    }

    #[test]
    fn test_fixtures_available() {
        assert!(!hconf_test::fixtures::all().is_empty());
    }
}
