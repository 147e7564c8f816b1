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

//! Property-based tests for value stores and the context cache.

use proptest::prelude::*;
use resdeck_test::fixtures::builders::UdqFixture;
use resdeck_udq::{UdqSet, UdqState};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(1000))]

    /// Property: A cached value shadows the summary state for any key.
    #[test]
    fn prop_cache_shadows_summary(
        key in "[A-Z]{1,8}(:[A-Z0-9]{1,8})?",
        live in any::<f64>(),
        cached in any::<f64>()
    ) {
        let mut fx = UdqFixture::new().summary(&key, live);
        let mut ctx = fx.context();
        ctx.add(key.clone(), cached);
        prop_assert_eq!(ctx.get(&key).map(f64::to_bits), Some(cached.to_bits()));
    }

    /// Property: defined_as_of returns the latest definition step not after the query.
    #[test]
    fn prop_defined_as_of(
        steps in prop::collection::btree_set(0_usize..100, 1..10),
        query in 0_usize..120
    ) {
        let mut state = UdqState::default();
        for step in &steps {
            state.add_define(*step, "FU_X", &UdqSet::field("FU_X", Some(*step as f64)));
        }

        let expected = steps.iter().rev().find(|s| **s <= query).copied();
        prop_assert_eq!(state.defined_as_of("FU_X", query), expected);
        prop_assert_eq!(state.define_step("FU_X"), steps.iter().next_back().copied());
    }
}
