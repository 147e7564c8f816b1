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

//! Entity topologies shared by the UDQ tests and benchmarks.
//!
//! The model has three producers, two injectors and two platforms. PROD1
//! and PROD2 are multi-segment wells; FIPNUM has three regions and FIPABC two.

use resdeck_udq::{GroupOrder, RegionTopology, SegmentTopology, Udt, UdtInterpolation, WellMatcher};
use std::collections::HashMap;

pub fn well_matcher() -> WellMatcher {
    WellMatcher::new(["PROD1", "PROD2", "PROD3", "INJ1", "INJ2"])
}

pub fn group_order() -> GroupOrder {
    GroupOrder::new(["PLAT-A", "PLAT-B"])
}

pub fn segment_topology() -> SegmentTopology {
    SegmentTopology::new()
        .with_well("PROD1", 1..=5)
        .with_well("PROD2", 1..=3)
}

pub fn region_topology() -> RegionTopology {
    RegionTopology::new()
        .with_set("FIPNUM", [1, 2, 3])
        .with_set("FIPABC", [1, 2])
}

/// A single `TU_WCUT` table: linear water-cut response clamped at both ends.
pub fn udt_tables() -> HashMap<String, Udt> {
    let mut tables = HashMap::new();
    if let Ok(table) = Udt::new(
        vec![0.0, 0.5, 1.0],
        vec![1.0, 0.8, 0.0],
        UdtInterpolation::LinearClamp,
    ) {
        tables.insert("TU_WCUT".to_string(), table);
    }
    tables
}

/// Synthetic wells `W0001..` for sizing benchmarks.
pub fn many_wells(count: usize) -> WellMatcher {
    WellMatcher::new((1..=count).map(|i| format!("W{:04}", i)))
}
