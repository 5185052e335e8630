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

//! Environment lookup used when a substitution has no target in the tree.

use std::collections::HashMap;

/// A name-to-string lookup consulted during substitution resolution.
///
/// Implemented for the process environment ([`ProcessEnv`]), for
/// `HashMap<String, String>`, and for any `Fn(&str) -> Option<String>`.
///
/// # Examples
///
/// ```
/// use hconf_core::Env;
/// use std::collections::HashMap;
///
/// let mut fixed = HashMap::new();
/// fixed.insert("PORT".to_string(), "8080".to_string());
/// assert_eq!(fixed.lookup("PORT").as_deref(), Some("8080"));
///
/// let closure = |name: &str| (name == "HOST").then(|| "db".to_string());
/// assert_eq!(closure.lookup("HOST").as_deref(), Some("db"));
/// ```
pub trait Env: Send + Sync {
    fn lookup(&self, name: &str) -> Option<String>;
}

/// The process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl Env for ProcessEnv {
    fn lookup(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }
}

/// An environment with no variables.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmptyEnv;

impl Env for EmptyEnv {
    fn lookup(&self, _name: &str) -> Option<String> {
        None
    }
}

impl Env for HashMap<String, String> {
    fn lookup(&self, name: &str) -> Option<String> {
        self.get(name).cloned()
    }
}

impl<F> Env for F
where
    F: Fn(&str) -> Option<String> + Send + Sync,
{
    fn lookup(&self, name: &str) -> Option<String> {
        self(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_env() {
        assert_eq!(EmptyEnv.lookup("PATH"), None);
    }

    #[test]
    fn test_map_env() {
        let mut env = HashMap::new();
        env.insert("A".to_string(), "1".to_string());
        assert_eq!(env.lookup("A"), Some("1".to_string()));
        assert_eq!(env.lookup("B"), None);
    }

    #[test]
    fn test_closure_env() {
        let env = |name: &str| name.strip_prefix("X_").map(str::to_lowercase);
        assert_eq!(env.lookup("X_ABC"), Some("abc".to_string()));
        assert_eq!(env.lookup("ABC"), None);
    }

    #[test]
    fn test_process_env_unset_variable() {
        assert_eq!(ProcessEnv.lookup("HCONF_TEST_SURELY_UNSET_VARIABLE"), None);
    }
}
