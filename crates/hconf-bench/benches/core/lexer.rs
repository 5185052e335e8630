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

//! Scanner benchmarks for HCONF.
//!
//! Measures raw tokenization throughput, independent of tree building.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use hconf_bench::{generate_config, generate_flat, sizes};
use hconf_core::lex::Scanner;
use hconf_test::fixtures;

fn count_tokens(input: &str) -> usize {
    Scanner::new(input).count()
}

// ============================================================================
// Fixture Scanning Benchmarks
// ============================================================================

fn bench_scan_fixtures(c: &mut Criterion) {
    let mut group = c.benchmark_group("scan_fixtures");

    for (name, fixture) in fixtures::all() {
        let input = fixture();
        group.throughput(Throughput::Bytes(input.len() as u64));
        group.bench_function(name, |b| b.iter(|| count_tokens(black_box(input))));
    }

    group.finish();
}

// ============================================================================
// Document Scanning Benchmarks
// ============================================================================

fn bench_scan_documents(c: &mut Criterion) {
    let mut group = c.benchmark_group("scan_documents");

    for &size in &[sizes::SMALL, sizes::MEDIUM, sizes::LARGE] {
        let flat = generate_flat(size);
        group.throughput(Throughput::Bytes(flat.len() as u64));
        group.bench_with_input(BenchmarkId::new("flat", size), &flat, |b, input| {
            b.iter(|| count_tokens(black_box(input)))
        });

        let config = generate_config(size);
        group.throughput(Throughput::Bytes(config.len() as u64));
        group.bench_with_input(BenchmarkId::new("config", size), &config, |b, input| {
            b.iter(|| count_tokens(black_box(input)))
        });
    }

    group.finish();
}

fn bench_scan_stress(c: &mut Criterion) {
    let mut group = c.benchmark_group("scan_stress");
    group.sample_size(20);

    let flat = generate_flat(sizes::STRESS);
    group.throughput(Throughput::Bytes(flat.len() as u64));
    group.bench_function("flat", |b| b.iter(|| count_tokens(black_box(&flat))));

    group.finish();
}

// ============================================================================
// Criterion Configuration
// ============================================================================

criterion_group!(
    benches,
    bench_scan_fixtures,
    bench_scan_documents,
    bench_scan_stress
);

criterion_main!(benches);
