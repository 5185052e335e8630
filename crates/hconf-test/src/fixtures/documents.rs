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

//! Valid documents, one per grammar area.

/// Booleans, nil and a bare word.
pub fn scalars() -> &'static str {
    "enabled = true\n\
     disabled = off\n\
     missing = nil\n\
     name = hconf\n"
}

/// Every numeric literal form.
pub fn numbers() -> &'static str {
    "int = 42\n\
     negative = -17\n\
     hex = 0xFF\n\
     octal = 017\n\
     big = 18446744073709551615\n\
     ratio = 0.25\n\
     exp = 1e3\n\
     whole = 2.0\n\
     complex = 1+2i\n\
     imaginary = 3i\n"
}

/// Quoted, raw and unquoted strings, including consolidated runs.
pub fn strings() -> &'static str {
    r#"quoted = "hello, world"
escaped = "tab\there \"quoted\" \u00e9"
raw = `C:\path\no\escapes`
unquoted = just some words
url = "http://example.com/path"
duration = 10 seconds
version = 1.2.3
"#
}

/// All three comment styles.
pub fn comments() -> &'static str {
    "# hash comment\n\
     // slash comment\n\
     a = 1 # trailing\n\
     /* block\n   comment */ b = 2\n\
     c = 3 // trailing\n"
}

/// Dotted keys, and a quoted key that is not split.
pub fn dotted_keys() -> &'static str {
    "a.b.c = 1\n\
     a.b.d = 2\n\
     \"quoted.key\" = 3\n"
}

/// Redefinitions: maps merge, everything else is replaced.
pub fn merging() -> &'static str {
    "server { host = localhost, port = 80 }\n\
     server { port = 8080 }\n\
     server.timeout = 30\n\
     list = [1, 2]\n\
     list = [3]\n\
     name = first\n\
     name = second\n"
}

/// Hard, soft, forward and nested substitutions.
pub fn substitutions() -> &'static str {
    "base { host = db.local, port = 5432 }\n\
     primary = ${base}\n\
     url = ${base.host}\n\
     port = 5432\n\
     port = ${?DB_PORT}\n\
     password = ${DB_PASSWORD}\n\
     later = ${defined.below}\n\
     defined.below = yes\n"
}

/// Array forms: empty, mixed, nested, multi-line, trailing comma.
pub fn arrays() -> &'static str {
    "empty = []\n\
     ints = [1, 2, 3]\n\
     mixed = [1, true, \"s\", nil]\n\
     nested = [[1, 2], [3]]\n\
     objects = [{ a = 1 }, { a = 2 }]\n\
     multiline = [\n  one\n  two,\n  three\n]\n\
     trailing = [1, 2,]\n"
}

/// Plain JSON.
pub fn json() -> &'static str {
    r#"{
  "name": "hconf",
  "version": 1,
  "tags": ["a", "b"],
  "nested": {"x": true}
}"#
}

/// A document whose root is an array.
pub fn root_array() -> &'static str {
    "[1, 2, 3]"
}

/// A realistic service configuration with environment overrides.
pub fn service() -> &'static str {
    r#"# Service configuration
service {
  name = "billing"
  listen {
    host = 0.0.0.0
    port = 8080
  }
  listen.port = ${?PORT}
  workers = 4
  debug = off
}

database {
  url = "postgres://db.internal:5432/billing"
  pool {
    min = 2
    max = 16
  }
  timeout = 2.5
}

database.pool.max = ${?DB_POOL_MAX}

features = [metrics, tracing, "rate limiting"]
owner = ${service.name}
"#
}
