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

//! Dataset generators for benchmarks
//!
//! Generates deterministic HCONF documents of various sizes and shapes. Every
//! generator seeds its own RNG, so a given size always yields the same text.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const SECTION_NAMES: [&str; 10] = [
    "database",
    "cache",
    "logging",
    "security",
    "api",
    "queue",
    "storage",
    "monitoring",
    "notifications",
    "features",
];

const WORDS: [&str; 8] = [
    "alpha", "bravo", "charlie", "delta", "echo", "foxtrot", "golf", "hotel",
];

fn scalar(rng: &mut StdRng) -> String {
    match rng.gen_range(0..6) {
        0 => rng.gen_range(-100_000..100_000).to_string(),
        1 => format!("{:.3}", rng.gen_range(0.0..1000.0)),
        2 => if rng.gen_bool(0.5) { "true" } else { "off" }.to_string(),
        3 => WORDS[rng.gen_range(0..WORDS.len())].to_string(),
        4 => format!("\"{} {}\"", WORDS[rng.gen_range(0..WORDS.len())], rng.gen::<u16>()),
        _ => format!("0x{:X}", rng.gen::<u32>()),
    }
}

/// `count` top-level keys with mixed scalar values.
pub fn generate_flat(count: usize) -> String {
    let mut rng = StdRng::seed_from_u64(12345);
    let mut out = String::with_capacity(count * 24);
    for i in 0..count {
        out.push_str(&format!("key{} = {}\n", i, scalar(&mut rng)));
    }
    out
}

/// `sections` service-style sections, each with nested options and a
/// commented header.
pub fn generate_config(sections: usize) -> String {
    let mut rng = StdRng::seed_from_u64(44444);
    let mut out = String::new();
    for i in 0..sections {
        let name = SECTION_NAMES[i % SECTION_NAMES.len()];
        out.push_str(&format!("# {} settings\n{}{} {{\n", name, name, i));
        out.push_str("  enabled = true\n");
        out.push_str(&format!("  timeout = {}\n", rng.gen_range(1000..30000)));
        out.push_str(&format!("  retries = {}\n", rng.gen_range(1..10)));
        out.push_str("  options {\n");
        out.push_str(&format!("    max_connections = {}\n", rng.gen_range(10..1000)));
        out.push_str(&format!("    buffer_size = {}\n", rng.gen_range(1024..65536)));
        out.push_str(&format!(
            "    compression = {}\n",
            if rng.gen_bool(0.5) { "on" } else { "off" }
        ));
        out.push_str("  }\n");
        out.push_str(&format!(
            "  hosts = [{}]\n",
            (0..rng.gen_range(1..5))
                .map(|h| format!("\"10.0.{}.{}\"", i % 256, h))
                .collect::<Vec<_>>()
                .join(", ")
        ));
        out.push_str("}\n");
        out.push_str(&format!("{}{}.options.max_connections = ${{?POOL_{}}}\n", name, i, i));
    }
    out
}

/// Objects nested `depth` levels deep, ending in one scalar.
pub fn generate_deep(depth: usize) -> String {
    let mut out = String::with_capacity(depth * 12);
    for i in 0..depth {
        out.push_str(&format!("level{} {{ ", i));
    }
    out.push_str("leaf = 1");
    for _ in 0..depth {
        out.push_str(" }");
    }
    out
}

/// A chain of `length` substitutions, each referring to the previous key.
pub fn generate_chain(length: usize) -> String {
    let mut out = String::from("link0 = end\n");
    for i in 1..length {
        out.push_str(&format!("link{} = ${{link{}}}\n", i, i - 1));
    }
    out
}

/// `count` entries overriding shared defaults through hard and soft
/// substitutions.
pub fn generate_substitutions(count: usize) -> String {
    let mut rng = StdRng::seed_from_u64(54321);
    let mut out = String::from("defaults { host = localhost, port = 8080, weight = 1.5 }\n");
    for i in 0..count {
        out.push_str(&format!("svc{} {{\n", i));
        out.push_str("  host = ${defaults.host}\n");
        out.push_str(&format!("  port = {}\n", rng.gen_range(1024..65535)));
        out.push_str(&format!("  port = ${{?SVC{}_PORT}}\n", i));
        out.push_str("  weight = ${defaults.weight}\n");
        out.push_str("}\n");
    }
    out
}

/// Path of the deepest key in [`generate_deep`] output.
pub fn deep_path(depth: usize) -> String {
    let mut path: String = (0..depth).map(|i| format!("level{}.", i)).collect();
    path.push_str("leaf");
    path
}
