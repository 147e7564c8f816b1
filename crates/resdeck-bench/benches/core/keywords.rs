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

//! Keyword construction benchmarks.
//!
//! Covers data keywords built from mixed repeat tokens, multi-record
//! well keywords, and bulk SI extraction.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use resdeck_bench::{as_refs, expanded_len, porosity_tokens, sizes, wconprod_records};
use resdeck_core::{DeckKeyword, ParseOptions, UnitSystem};
use resdeck_test::fixtures;

// ============================================================================
// Data Keywords
// ============================================================================

fn bench_data_keyword(c: &mut Criterion) {
    let mut group = c.benchmark_group("data_keyword");
    let options = ParseOptions::default();
    let schema = fixtures::poro();

    for &size in &[sizes::SMALL, sizes::MEDIUM, sizes::LARGE] {
        let tokens = porosity_tokens(size);
        let record: Vec<&str> = tokens.iter().map(String::as_str).collect();
        let records = vec![record];

        group.throughput(Throughput::Elements(expanded_len(size) as u64));
        group.bench_with_input(BenchmarkId::new("poro", size), &records, |b, records| {
            b.iter(|| {
                DeckKeyword::from_tokens(
                    &schema,
                    black_box(records),
                    &UnitSystem::Metric,
                    &UnitSystem::Metric,
                    &options,
                )
            })
        });
    }

    group.finish();
}

// ============================================================================
// Well Keywords
// ============================================================================

fn bench_well_keyword(c: &mut Criterion) {
    let mut group = c.benchmark_group("well_keyword");
    let options = ParseOptions::default();
    let schema = fixtures::wconprod();

    for &wells in &[sizes::SMALL, sizes::MEDIUM] {
        let records = wconprod_records(wells);
        let refs = as_refs(&records);

        group.throughput(Throughput::Elements(wells as u64));
        group.bench_with_input(BenchmarkId::new("wconprod", wells), &refs, |b, refs| {
            b.iter(|| {
                DeckKeyword::from_tokens(
                    &schema,
                    black_box(refs),
                    &UnitSystem::Field,
                    &UnitSystem::Metric,
                    &options,
                )
            })
        });
    }

    group.finish();
}

// ============================================================================
// Data Extraction
// ============================================================================

fn bench_si_data(c: &mut Criterion) {
    let mut group = c.benchmark_group("si_data");
    let options = ParseOptions::default();
    let schema = fixtures::pressure();

    for &size in &[sizes::MEDIUM, sizes::LARGE] {
        let token = format!("{size}*3500");
        let keyword = DeckKeyword::from_tokens(
            &schema,
            &[vec![token.as_str()]],
            &UnitSystem::Field,
            &UnitSystem::Metric,
            &options,
        )
        .expect("pressure keyword builds");

        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("pressure", size), &keyword, |b, keyword| {
            b.iter(|| black_box(keyword).si_data())
        });
    }

    group.finish();
}

criterion_group!(benches, bench_data_keyword, bench_well_keyword, bench_si_data);
criterion_main!(benches);
