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

//! Numeric literal conversion.
//!
//! A number literal is stored once with its source text and every
//! representation it is exactly valid in: signed 64-bit, unsigned 64-bit,
//! 64-bit float and 128-bit complex. A getter then answers from whichever
//! representation it needs without re-scanning.
//!
//! The textual grammars here are also used to coerce string values at query
//! time, so `"0x1F"` read from the environment satisfies an integer getter.

use std::fmt;
use std::num::IntErrorKind;
use thiserror::Error;

/// Reason a numeric text could not be converted.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum NumberError {
    #[error("invalid syntax")]
    Syntax,
    #[error("value out of range")]
    Range,
}

/// A complex number with `f64` components.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Complex128 {
    pub re: f64,
    pub im: f64,
}

impl Complex128 {
    #[inline]
    pub const fn new(re: f64, im: f64) -> Self {
        Self { re, im }
    }
}

impl fmt::Display for Complex128 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}{:+}i)", self.re, self.im)
    }
}

// ==================== Textual grammars ====================

/// Parses a boolean.
///
/// Accepts `1 t T TRUE true True 0 f F FALSE false False` plus `on`/`off`.
pub fn parse_bool(text: &str) -> Result<bool, NumberError> {
    match text {
        "1" | "t" | "T" | "TRUE" | "true" | "True" | "on" => Ok(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" | "off" => Ok(false),
        _ => Err(NumberError::Syntax),
    }
}

/// Parses a signed integer, inferring the base from its prefix.
///
/// `0x`/`0X` is hex, `0o`/`0O` or a bare leading `0` is octal, `0b`/`0B` is
/// binary, anything else decimal. `_` may separate digits.
///
/// # Examples
///
/// ```
/// use hconf_core::number::parse_int;
///
/// assert_eq!(parse_int("-0x10"), Ok(-16));
/// assert_eq!(parse_int("017"), Ok(15));
/// assert_eq!(parse_int("1_000"), Ok(1000));
/// ```
pub fn parse_int(text: &str) -> Result<i64, NumberError> {
    let (negative, digits) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };
    let magnitude = parse_magnitude(digits)?;
    const MIN_MAGNITUDE: u64 = 1 << 63;
    if negative {
        match magnitude {
            m if m == MIN_MAGNITUDE => Ok(i64::MIN),
            m if m < MIN_MAGNITUDE => Ok(-(m as i64)),
            _ => Err(NumberError::Range),
        }
    } else {
        i64::try_from(magnitude).map_err(|_| NumberError::Range)
    }
}

/// Parses an unsigned integer with the same base rules as [`parse_int`].
///
/// A sign is not accepted.
pub fn parse_uint(text: &str) -> Result<u64, NumberError> {
    if text.starts_with('+') || text.starts_with('-') {
        return Err(NumberError::Syntax);
    }
    parse_magnitude(text)
}

/// Parses a 64-bit float.
///
/// Finite input that overflows to infinity is a range error.
pub fn parse_float(text: &str) -> Result<f64, NumberError> {
    let value: f64 = text.parse().map_err(|_| NumberError::Syntax)?;
    if value.is_infinite() && !text.to_ascii_lowercase().contains("inf") {
        return Err(NumberError::Range);
    }
    Ok(value)
}

/// Parses a complex number: `re±imi`, `imi`, or a bare real, optionally in
/// parentheses.
///
/// # Examples
///
/// ```
/// use hconf_core::number::{parse_complex, Complex128};
///
/// assert_eq!(parse_complex("(1.5-2i)"), Ok(Complex128::new(1.5, -2.0)));
/// assert_eq!(parse_complex("3i"), Ok(Complex128::new(0.0, 3.0)));
/// assert_eq!(parse_complex("7"), Ok(Complex128::new(7.0, 0.0)));
/// ```
pub fn parse_complex(text: &str) -> Result<Complex128, NumberError> {
    let text = match text.strip_prefix('(') {
        Some(inner) => inner.strip_suffix(')').ok_or(NumberError::Syntax)?,
        None => text,
    };
    let imaginary = match text.strip_suffix('i') {
        Some(rest) => rest,
        None => return Ok(Complex128::new(parse_float(text)?, 0.0)),
    };
    match split_imaginary(imaginary) {
        Some(idx) => Ok(Complex128::new(
            parse_float(&imaginary[..idx])?,
            parse_imaginary(&imaginary[idx..])?,
        )),
        None => Ok(Complex128::new(0.0, parse_imaginary(imaginary)?)),
    }
}

/// Index of the sign that starts the imaginary part, skipping a leading sign
/// and exponent signs.
fn split_imaginary(text: &str) -> Option<usize> {
    let bytes = text.as_bytes();
    (1..bytes.len())
        .rev()
        .find(|&i| matches!(bytes[i], b'+' | b'-') && !matches!(bytes[i - 1], b'e' | b'E'))
}

/// `+` and `-` alone stand for a unit imaginary part.
fn parse_imaginary(text: &str) -> Result<f64, NumberError> {
    match text {
        "" | "+" => Ok(1.0),
        "-" => Ok(-1.0),
        _ => parse_float(text),
    }
}

fn parse_magnitude(text: &str) -> Result<u64, NumberError> {
    let (radix, prefix_len) = match text.as_bytes() {
        [b'0', b'x' | b'X', ..] => (16, 2),
        [b'0', b'o' | b'O', ..] => (8, 2),
        [b'0', b'b' | b'B', ..] => (2, 2),
        [b'0', _, ..] => (8, 1),
        _ => (10, 0),
    };
    if !underscores_ok(text, prefix_len) {
        return Err(NumberError::Syntax);
    }
    let digits: String = text[prefix_len..].chars().filter(|&c| c != '_').collect();
    if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
        return Err(NumberError::Syntax);
    }
    u64::from_str_radix(&digits, radix).map_err(|e| match e.kind() {
        IntErrorKind::PosOverflow => NumberError::Range,
        _ => NumberError::Syntax,
    })
}

/// Underscores must sit between digits; one may follow a base prefix.
fn underscores_ok(text: &str, prefix_len: usize) -> bool {
    if !text.contains('_') {
        return true;
    }
    let mut body = &text[prefix_len..];
    if prefix_len > 0 {
        body = body.strip_prefix('_').unwrap_or(body);
    }
    !body.is_empty() && !body.starts_with('_') && !body.ends_with('_') && !body.contains("__")
}

// ==================== Exact conversions ====================

/// Returns `value` as an `i64` if the conversion is lossless.
pub fn exact_i64(value: f64) -> Option<i64> {
    // 2^63 is exactly representable; the range is [-2^63, 2^63).
    const LIMIT: f64 = 9_223_372_036_854_775_808.0;
    (value.fract() == 0.0 && value >= -LIMIT && value < LIMIT).then(|| value as i64)
}

/// Returns `value` as a `u64` if the conversion is lossless.
pub fn exact_u64(value: f64) -> Option<u64> {
    const LIMIT: f64 = 18_446_744_073_709_551_616.0;
    (value.fract() == 0.0 && value >= 0.0 && value < LIMIT).then(|| value as u64)
}

/// A numeric literal with every representation it is valid in.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct NumberNode {
    pub pos: usize,
    /// The literal exactly as written.
    pub text: String,
    pub int: Option<i64>,
    pub uint: Option<u64>,
    pub float: Option<f64>,
    pub complex: Option<Complex128>,
}

/// Why a literal could not become a [`NumberNode`].
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LiteralError {
    #[error("illegal number syntax: {0:?}")]
    Illegal(String),
    #[error("bad complex number: {0:?}")]
    Complex(String),
}

impl NumberNode {
    /// Converts the text of a number token.
    pub fn parse(pos: usize, text: &str) -> Result<Self, LiteralError> {
        let mut node = Self {
            pos,
            text: text.to_string(),
            ..Self::default()
        };

        // Imaginary constants can only be complex unless they are zero.
        if let Some(imaginary) = text.strip_suffix('i') {
            if let Ok(im) = parse_float(imaginary) {
                node.set_complex(Complex128::new(0.0, im));
                return Ok(node);
            }
        }

        // Integer forms first, so 0x1F and 017 keep their base.
        node.uint = parse_uint(text).ok();
        node.int = parse_int(text).ok();
        if node.int == Some(0) {
            // -0
            node.uint = Some(0);
        }

        if let Some(i) = node.int {
            node.float = Some(i as f64);
        } else if let Some(u) = node.uint {
            node.float = Some(u as f64);
        } else if let Ok(f) = parse_float(text) {
            // Out-of-range integers and decimal-looking 089 land here.
            node.float = Some(f);
            node.int = exact_i64(f);
            node.uint = exact_u64(f);
        }

        if node.int.is_none() && node.uint.is_none() && node.float.is_none() {
            return Err(LiteralError::Illegal(text.to_string()));
        }
        Ok(node)
    }

    /// Converts the text of a complex-number token.
    pub fn parse_complex(pos: usize, text: &str) -> Result<Self, LiteralError> {
        let value =
            parse_complex(text).map_err(|_| LiteralError::Complex(text.to_string()))?;
        let mut node = Self {
            pos,
            text: text.to_string(),
            ..Self::default()
        };
        node.set_complex(value);
        Ok(node)
    }

    /// Records a complex value, deriving the real representations when the
    /// imaginary part is exactly zero.
    fn set_complex(&mut self, value: Complex128) {
        self.complex = Some(value);
        if value.im == 0.0 {
            self.float = Some(value.re);
            self.int = exact_i64(value.re);
            self.uint = exact_u64(value.re);
        }
    }

    #[inline]
    pub fn is_int(&self) -> bool {
        self.int.is_some()
    }

    #[inline]
    pub fn is_uint(&self) -> bool {
        self.uint.is_some()
    }

    #[inline]
    pub fn is_float(&self) -> bool {
        self.float.is_some()
    }

    #[inline]
    pub fn is_complex(&self) -> bool {
        self.complex.is_some()
    }
}
