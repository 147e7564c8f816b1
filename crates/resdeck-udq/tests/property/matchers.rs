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

//! Property-based tests for entity matchers.

use proptest::prelude::*;
use resdeck_udq::{
    RegionDescriptor, RegionSetMatcher, RegionTopology, SegmentDescriptor, SegmentMatcher,
    SegmentTopology, WellMatcher,
};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(1000))]

    /// Property: Matching wells keep the canonical order.
    #[test]
    fn prop_well_matches_are_ordered_subsequence(
        wells in prop::collection::vec("[A-C][0-9]{1,2}", 1..20),
        prefix in "[A-C]"
    ) {
        let matcher = WellMatcher::new(wells);
        let matched = matcher.wells_matching(&format!("{}*", prefix)).unwrap();

        let positions: Vec<usize> = matched
            .iter()
            .map(|m| matcher.wells().iter().position(|w| w == m).unwrap())
            .collect();
        prop_assert!(positions.windows(2).all(|w| w[0] < w[1]));
        prop_assert!(matched.iter().all(|w| w.starts_with(prefix.as_str())));
    }

    /// Property: Region matches are sorted, unique and independent of selector order.
    #[test]
    fn prop_region_matches_sorted_and_stable(
        ids in prop::collection::vec(1_usize..50, 1..30),
        wanted in prop::collection::vec(1_usize..50, 0..10)
    ) {
        let matcher = RegionSetMatcher::new(RegionTopology::new().with_set("FIPNUM", ids));
        let tokens: Vec<String> = wanted.iter().map(|id| id.to_string()).collect();
        let mut reversed = tokens.clone();
        reversed.reverse();

        let forward = matcher.find_regions(&RegionDescriptor::parse("RPR", &tokens).unwrap());
        let backward = matcher.find_regions(&RegionDescriptor::parse("RPR", &reversed).unwrap());
        prop_assert_eq!(&forward, &backward);

        let found = forward.regions("FIPNUM");
        prop_assert!(found.windows(2).all(|w| w[0] < w[1]));
        if !tokens.is_empty() {
            prop_assert!(found.iter().all(|id| wanted.contains(id)));
        }
    }

    /// Property: Segment matches follow topology order with ascending segments.
    #[test]
    fn prop_segment_matches_ordered(
        wells in prop::collection::vec(
            ("[A-C][0-9]", prop::collection::vec(1_usize..20, 1..6)),
            1..8,
        ),
        segment in prop::option::of(1_usize..20)
    ) {
        let mut topology = SegmentTopology::new();
        for (well, segments) in &wells {
            topology.add_well(well.clone(), segments.iter().copied());
        }
        let matcher = SegmentMatcher::new(topology.clone());
        let descriptor = SegmentDescriptor { well_pattern: "*".to_string(), segment };

        let found = matcher.find_segments(&descriptor).unwrap();
        let order: Vec<&str> = topology.wells().collect();
        let mut last: Option<(usize, usize)> = None;
        for (well, seg) in found.iter() {
            let position = order.iter().position(|w| *w == well).unwrap();
            if let Some((p, s)) = last {
                prop_assert!(position > p || (position == p && seg > s));
            }
            if let Some(wanted) = segment {
                prop_assert_eq!(seg, wanted);
            }
            last = Some((position, seg));
        }
    }
}
