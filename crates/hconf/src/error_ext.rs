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

//! Error context helpers.
//!
//! Extension methods for `Result<T, HconfError>` (and I/O results) that
//! annotate errors as they propagate.
//!
//! # Examples
//!
//! ```rust
//! use hconf::{parse, HconfResultExt};
//!
//! fn load(name: &str, text: &str) -> Result<hconf::Tree, hconf::HconfError> {
//!     parse(text).with_context(|| format!("while loading {}", name))
//! }
//!
//! let err = load("service.conf", "a = [1, 2").unwrap_err();
//! assert_eq!(err.context.as_deref(), Some("while loading service.conf"));
//! ```
//!
//! Reading a file and parsing it:
//!
//! ```rust
//! use hconf::{HconfError, HconfResultExt};
//!
//! fn read_and_parse(path: &str) -> Result<hconf::Tree, HconfError> {
//!     let text = std::fs::read_to_string(path)
//!         .map_err_to_hconf(|e| HconfError::io(format!("failed to read {}: {}", path, e)))?;
//!     hconf::parse(&text).context(path)
//! }
//!
//! assert!(read_and_parse("/nonexistent/app.conf").is_err());
//! ```

use crate::HconfError;
use std::fmt;

/// Extension trait for adding context to fallible HCONF operations.
///
/// Context goes into the error's `context` field; the message is never
/// modified. Repeated context is prepended, outermost first, separated by
/// `"; "`.
pub trait HconfResultExt<T> {
    /// The error type for this Result
    type ErrorType;

    /// Add context to an error.
    ///
    /// An empty context string is ignored.
    fn context<C>(self, context: C) -> Result<T, HconfError>
    where
        C: fmt::Display;

    /// Add context computed only when there is an error.
    fn with_context<C, F>(self, f: F) -> Result<T, HconfError>
    where
        C: fmt::Display,
        F: FnOnce() -> C;

    /// Convert a foreign error into an [`HconfError`].
    fn map_err_to_hconf<F>(self, f: F) -> Result<T, HconfError>
    where
        F: FnOnce(Self::ErrorType) -> HconfError,
        Self: Sized;
}

impl<T> HconfResultExt<T> for Result<T, HconfError> {
    type ErrorType = HconfError;

    fn context<C>(self, context: C) -> Result<T, HconfError>
    where
        C: fmt::Display,
    {
        self.map_err(|e| add_context_to_error(e, context.to_string()))
    }

    fn with_context<C, F>(self, f: F) -> Result<T, HconfError>
    where
        C: fmt::Display,
        F: FnOnce() -> C,
    {
        self.map_err(|e| add_context_to_error(e, f().to_string()))
    }

    fn map_err_to_hconf<F>(self, _f: F) -> Result<T, HconfError>
    where
        F: FnOnce(Self::ErrorType) -> HconfError,
    {
        self
    }
}

impl<T> HconfResultExt<T> for Result<T, std::io::Error> {
    type ErrorType = std::io::Error;

    fn context<C>(self, context: C) -> Result<T, HconfError>
    where
        C: fmt::Display,
    {
        self.map_err(|e| add_context_to_error(HconfError::io(e.to_string()), context.to_string()))
    }

    fn with_context<C, F>(self, f: F) -> Result<T, HconfError>
    where
        C: fmt::Display,
        F: FnOnce() -> C,
    {
        self.map_err(|e| add_context_to_error(HconfError::io(e.to_string()), f().to_string()))
    }

    fn map_err_to_hconf<F>(self, f: F) -> Result<T, HconfError>
    where
        F: FnOnce(Self::ErrorType) -> HconfError,
    {
        self.map_err(f)
    }
}

/// Prepends `new_context` to any context already on `error`.
fn add_context_to_error(mut error: HconfError, new_context: String) -> HconfError {
    if new_context.is_empty() {
        return error;
    }
    error.context = Some(match error.context {
        Some(existing) => format!("{}; {}", new_context, existing),
        None => new_context,
    });
    error
}
