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

//! Lookup and substitution benchmarks for HCONF.
//!
//! Trees are parsed once outside the measured loop; only path walking and
//! substitution resolution are timed.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use hconf_bench::{deep_path, generate_chain, generate_config, generate_deep, generate_substitutions, sizes};
use hconf_core::{parse, parse_with_options, EmptyEnv, ParseOptions};
use hconf_test::fixed_env;

// ============================================================================
// Path Lookup Benchmarks
// ============================================================================

fn bench_lookup_depth(c: &mut Criterion) {
    let mut group = c.benchmark_group("lookup_depth");
    let options = ParseOptions::builder().max_nest_depth(usize::MAX).build();

    for &depth in &[1usize, 10, 50] {
        let tree = match parse_with_options(&generate_deep(depth), options.clone()) {
            Ok(tree) => tree,
            Err(e) => panic!("generated document failed to parse: {}", e),
        };
        let path = deep_path(depth);
        group.bench_with_input(BenchmarkId::from_parameter(depth), &path, |b, path| {
            b.iter(|| tree.config().get_i64(black_box(path)))
        });
    }

    group.finish();
}

fn bench_typed_getters(c: &mut Criterion) {
    let mut group = c.benchmark_group("typed_getters");
    let text = generate_config(sizes::MEDIUM);
    let tree = match parse("bench", &text) {
        Ok(tree) => tree.with_env(EmptyEnv),
        Err(e) => panic!("generated document failed to parse: {}", e),
    };
    let config = tree.config();

    group.bench_function("bool", |b| b.iter(|| config.get_bool(black_box("api4.enabled"))));
    group.bench_function("i64", |b| b.iter(|| config.get_i64(black_box("cache1.timeout"))));
    group.bench_function("array", |b| b.iter(|| config.get_array(black_box("queue5.hosts"))));
    group.bench_function("key_set", |b| b.iter(|| config.get_key_set(black_box("database0.options"))));
    group.bench_function("missing_or", |b| {
        b.iter(|| config.get_i64_or(black_box("nowhere.at.all"), 0))
    });

    group.finish();
}

// ============================================================================
// Substitution Benchmarks
// ============================================================================

fn bench_substitution_chain(c: &mut Criterion) {
    let mut group = c.benchmark_group("substitution_chain");

    for &length in &[sizes::SMALL, sizes::MEDIUM, sizes::LARGE] {
        let tree = match parse("bench", &generate_chain(length)) {
            Ok(tree) => tree.with_env(EmptyEnv),
            Err(e) => panic!("generated document failed to parse: {}", e),
        };
        let path = format!("link{}", length - 1);
        group.bench_with_input(BenchmarkId::from_parameter(length), &path, |b, path| {
            b.iter(|| tree.config().get_string(black_box(path)))
        });
    }

    group.finish();
}

fn bench_env_overrides(c: &mut Criterion) {
    let mut group = c.benchmark_group("env_overrides");
    let text = generate_substitutions(sizes::MEDIUM);

    let fallback = match parse("bench", &text) {
        Ok(tree) => tree.with_env(EmptyEnv),
        Err(e) => panic!("generated document failed to parse: {}", e),
    };
    group.bench_function("fallback", |b| {
        b.iter(|| fallback.config().get_i64(black_box("svc42.port")))
    });

    let overridden = match parse("bench", &text) {
        Ok(tree) => tree.with_env(fixed_env(&[("SVC42_PORT", "9000")])),
        Err(e) => panic!("generated document failed to parse: {}", e),
    };
    group.bench_function("environment", |b| {
        b.iter(|| overridden.config().get_i64(black_box("svc42.port")))
    });

    group.bench_function("hard_reference", |b| {
        b.iter(|| fallback.config().get_string(black_box("svc42.host")))
    });

    group.finish();
}

// ============================================================================
// Criterion Configuration
// ============================================================================

criterion_group!(
    benches,
    bench_lookup_depth,
    bench_typed_getters,
    bench_substitution_chain,
    bench_env_overrides
);

criterion_main!(benches);
