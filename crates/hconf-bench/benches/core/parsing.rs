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

//! Core parsing benchmarks for HCONF.
//!
//! Measures scan plus tree construction across document sizes and shapes.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use hconf_bench::{generate_config, generate_deep, generate_flat, generate_substitutions, sizes};
use hconf_core::{parse, parse_with_options, ParseOptions};

// ============================================================================
// Size Scaling Benchmarks
// ============================================================================

fn bench_parse_flat(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_flat");

    for &size in &[sizes::SMALL, sizes::MEDIUM, sizes::LARGE, sizes::STRESS] {
        let text = generate_flat(size);
        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &text, |b, input| {
            b.iter(|| parse("bench", black_box(input)))
        });
    }

    group.finish();
}

fn bench_parse_config(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_config");

    for &size in &[sizes::SMALL, sizes::MEDIUM, sizes::LARGE] {
        let text = generate_config(size);
        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &text, |b, input| {
            b.iter(|| parse("bench", black_box(input)))
        });
    }

    group.finish();
}

// ============================================================================
// Structure Benchmarks
// ============================================================================

fn bench_parse_deep(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_deep");
    let options = ParseOptions::builder().max_nest_depth(usize::MAX).build();

    for &depth in &[10usize, 50, 100] {
        let text = generate_deep(depth);
        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(depth), &text, |b, input| {
            b.iter(|| parse_with_options(black_box(input), options.clone()))
        });
    }

    group.finish();
}

fn bench_parse_substitutions(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_substitutions");

    for &size in &[sizes::SMALL, sizes::MEDIUM, sizes::LARGE] {
        let text = generate_substitutions(size);
        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &text, |b, input| {
            b.iter(|| parse("bench", black_box(input)))
        });
    }

    group.finish();
}

// ============================================================================
// Criterion Configuration
// ============================================================================

criterion_group!(
    benches,
    bench_parse_flat,
    bench_parse_config,
    bench_parse_deep,
    bench_parse_substitutions
);

criterion_main!(benches);
