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

//! Benchmark data generators for resdeck.
//!
//! ## Usage
//!
//! Run all benchmarks:
//! ```bash
//! cargo bench --package resdeck-bench
//! ```
//!
//! Run a specific benchmark:
//! ```bash
//! cargo bench --package resdeck-bench --bench expansion
//! ```

use resdeck_udq::{RegionTopology, SegmentTopology, SummaryState};

/// Standard input sizes for benchmarks
pub mod sizes {
    /// Small input: ~10 tokens or entities
    pub const SMALL: usize = 10;
    /// Medium input: ~1,000 tokens or entities
    pub const MEDIUM: usize = 1_000;
    /// Large input: ~100,000 tokens or entities
    pub const LARGE: usize = 100_000;
}

/// Porosity tokens mixing plain values with `N*value` repeats.
///
/// Every tenth token is a repeat of 10, so the expanded length is
/// roughly twice `count`.
pub fn porosity_tokens(count: usize) -> Vec<String> {
    (0..count)
        .map(|i| {
            let value = 0.1 + (i % 20) as f64 * 0.01;
            if i % 10 == 0 {
                format!("10*{value:.2}")
            } else {
                format!("{value:.2}")
            }
        })
        .collect()
}

/// Number of values `porosity_tokens(count)` expands to.
pub fn expanded_len(count: usize) -> usize {
    (0..count).map(|i| if i % 10 == 0 { 10 } else { 1 }).sum()
}

/// WCONPROD records for `count` wells, mixing literal, defaulted and UDA rates.
pub fn wconprod_records(count: usize) -> Vec<Vec<String>> {
    (0..count)
        .map(|i| {
            let rate = if i % 3 == 0 {
                "'WUOPRL'".to_string()
            } else {
                format!("{}", 500 + i)
            };
            vec![
                format!("'W{i:05}'"),
                "1*".to_string(),
                "'ORAT'".to_string(),
                rate,
                "4*".to_string(),
                "150".to_string(),
            ]
        })
        .collect()
}

/// Borrow generated tokens in the shape keyword construction expects.
pub fn as_refs(records: &[Vec<String>]) -> Vec<Vec<&str>> {
    records
        .iter()
        .map(|record| record.iter().map(String::as_str).collect())
        .collect()
}

/// Segment topology with `wells` wells of `segments` segments each.
pub fn segment_topology(wells: usize, segments: usize) -> SegmentTopology {
    let mut topology = SegmentTopology::new();
    for w in 0..wells {
        topology.add_well(format!("W{w:05}"), 1..=segments);
    }
    topology
}

/// Region topology with the default set plus one named set, each of `regions` regions.
pub fn region_topology(regions: usize) -> RegionTopology {
    let mut topology = RegionTopology::new();
    topology.add_set("FIPNUM", 1..=regions);
    topology.add_set("FIPABC", 1..=regions);
    topology
}

/// Summary state holding `WOPR` for every well of `wells`.
pub fn well_summary(wells: usize) -> SummaryState {
    let mut summary = SummaryState::new();
    for w in 0..wells {
        summary.update_well_var(&format!("W{w:05}"), "WOPR", w as f64);
    }
    summary
}
