// Dweve ResDeck - Reservoir Deck Value Engine
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

//! Token expansion benchmarks.
//!
//! Measures repeat-count splitting and value inference for single tokens
//! and for whole records.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use resdeck_bench::{as_refs, wconprod_records};
use resdeck_core::{
    expand_record, expand_token, ExpansionContext, ItemSchema, ParseOptions, UnitSystem,
};
use resdeck_test::fixtures;

// ============================================================================
// Single Tokens
// ============================================================================

fn bench_expand_token(c: &mut Criterion) {
    let mut group = c.benchmark_group("expand_token");
    let options = ParseOptions::default();

    let double = ItemSchema::double("data").with_dimension("Pressure");
    let uda = ItemSchema::uda("ORAT").with_dimension("LiquidSurfaceVolume/Time");
    let string = ItemSchema::string("WELL");

    let cases: [(&str, &ItemSchema, &str); 6] = [
        ("double", &double, "250.5"),
        ("double_repeat", &double, "100*250.5"),
        ("defaulted", &double, "5*"),
        ("uda_literal", &uda, "1500"),
        ("uda_symbolic", &uda, "'WUOPRL'"),
        ("quoted_string", &string, "'PROD1'"),
    ];

    for (name, item, token) in cases {
        let ctx = ExpansionContext::new(item, &UnitSystem::Metric, &options)
            .expect("benchmark item resolves");
        group.bench_with_input(BenchmarkId::new("token", name), &token, |b, token| {
            b.iter(|| expand_token(black_box(token), &ctx))
        });
    }

    group.finish();
}

// ============================================================================
// Repeat Counts
// ============================================================================

fn bench_repeat_counts(c: &mut Criterion) {
    let mut group = c.benchmark_group("repeat_count");
    let options = ParseOptions::default();
    let item = ItemSchema::double("data");
    let ctx = ExpansionContext::new(&item, &UnitSystem::Metric, &options)
        .expect("benchmark item resolves");

    for &count in &[10usize, 1_000, 100_000] {
        let token = format!("{count}*0.25");
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), &token, |b, token| {
            b.iter(|| expand_token(black_box(token), &ctx))
        });
    }

    group.finish();
}

// ============================================================================
// Records
// ============================================================================

fn bench_expand_record(c: &mut Criterion) {
    let mut group = c.benchmark_group("expand_record");
    let options = ParseOptions::default();
    let schema = fixtures::wconprod();
    let record_schema = &schema.records[0];

    let records = wconprod_records(3);
    let refs = as_refs(&records);

    for (i, tokens) in refs.iter().enumerate() {
        group.bench_with_input(BenchmarkId::new("wconprod", i), tokens, |b, tokens| {
            b.iter(|| {
                expand_record(
                    black_box(tokens),
                    record_schema,
                    &UnitSystem::Field,
                    &options,
                )
            })
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_expand_token,
    bench_repeat_counts,
    bench_expand_record
);
criterion_main!(benches);
