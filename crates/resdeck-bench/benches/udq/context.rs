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

//! UDQ context benchmarks.
//!
//! Measures layered value lookup, wildcard well matching and the first
//! versus cached use of the lazily built segment and region matchers.

use std::collections::HashMap;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use resdeck_bench::{region_topology, segment_topology, sizes, well_summary};
use resdeck_udq::{
    keys, GroupOrder, MatcherFactories, RegionSetMatcher, SegmentMatcher, UdqContext,
    UdqFunctionTable, UdqSet, UdqState, WellMatcher,
};
use resdeck_test::fixtures::{self, builders::UdqFixture};

fn well_names(count: usize) -> Vec<String> {
    (0..count).map(|w| format!("W{w:05}")).collect()
}

// ============================================================================
// Lookups
// ============================================================================

fn bench_lookup(c: &mut Criterion) {
    let mut group = c.benchmark_group("context_lookup");

    let functions = UdqFunctionTable::default();
    let wells = WellMatcher::new(well_names(sizes::MEDIUM));
    let groups = GroupOrder::new(["PLAT-A", "PLAT-B"]);
    let tables = HashMap::new();
    let mut summary = well_summary(sizes::MEDIUM);
    let mut state = UdqState::default();
    state.add_assign("WUOPRL", &UdqSet::wells("WUOPRL", wells.wells(), Some(250.0)));

    let mut ctx = UdqContext::new(
        &functions,
        &wells,
        &groups,
        &tables,
        MatcherFactories::new(),
        &mut summary,
        &mut state,
    );
    ctx.add("FUTEMP", 42.0);

    let summary_key = keys::well_key("WOPR", "W00500");
    let state_key = keys::well_key("WUOPRL", "W00500");

    group.bench_function("cached", |b| b.iter(|| ctx.get(black_box("FUTEMP"))));
    group.bench_function("summary", |b| b.iter(|| ctx.get(black_box(&summary_key))));
    group.bench_function("udq_state", |b| b.iter(|| ctx.get(black_box(&state_key))));
    group.bench_function("missing", |b| b.iter(|| ctx.get(black_box("WOPR:NOPE"))));

    group.finish();
}

// ============================================================================
// Well Matching
// ============================================================================

fn bench_wells_matching(c: &mut Criterion) {
    let mut group = c.benchmark_group("wells_matching");

    for &count in &[sizes::SMALL, sizes::MEDIUM] {
        let wells = fixtures::many_wells(count);
        group.throughput(Throughput::Elements(count as u64));
        for pattern in ["W*", "W0000?", "P*"] {
            group.bench_with_input(
                BenchmarkId::new(pattern, count),
                &pattern,
                |b, pattern| b.iter(|| wells.wells_matching(black_box(pattern))),
            );
        }
    }

    group.finish();
}

// ============================================================================
// Lazy Matchers
// ============================================================================

fn bench_segment_matcher(c: &mut Criterion) {
    let mut group = c.benchmark_group("segment_matcher");
    let topology = segment_topology(sizes::MEDIUM, 20);
    let mut fixture = UdqFixture::new();
    let descriptor: &[&str] = &["W0000*", "3"];

    group.bench_function("first_use", |b| {
        b.iter(|| {
            let factories = MatcherFactories::new()
                .with_segments(|| SegmentMatcher::new(topology.clone()));
            let ctx = fixture.context_with(factories);
            ctx.segments_matching(black_box(descriptor))
        })
    });

    let factories =
        MatcherFactories::new().with_segments(|| SegmentMatcher::new(topology.clone()));
    let ctx = fixture.context_with(factories);
    ctx.ensure_segment_matcher_exists()
        .expect("segment factory is installed");
    group.bench_function("cached", |b| {
        b.iter(|| ctx.segments_matching(black_box(descriptor)))
    });

    group.finish();
}

fn bench_region_matcher(c: &mut Criterion) {
    let mut group = c.benchmark_group("region_matcher");
    let topology = region_topology(sizes::MEDIUM);
    let mut fixture = UdqFixture::new();

    let factories =
        MatcherFactories::new().with_regions(|| RegionSetMatcher::new(topology.clone()));
    let ctx = fixture.context_with(factories);
    ctx.ensure_region_matcher_exists()
        .expect("region factory is installed");

    group.bench_function("all_regions", |b| {
        b.iter(|| ctx.regions_matching(black_box("RPR__ABC"), &["*"][..]))
    });
    group.bench_function("single_region", |b| {
        b.iter(|| ctx.regions_matching(black_box("RPR"), &["500"][..]))
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_lookup,
    bench_wells_matching,
    bench_segment_matcher,
    bench_region_matcher
);
criterion_main!(benches);
