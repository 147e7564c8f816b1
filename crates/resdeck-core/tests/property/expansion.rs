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

//! Property-based tests for repeat-count expansion.

use proptest::prelude::*;
use resdeck_core::{
    expand_token, DeckErrorKind, DeckValue, ExpansionContext, ItemSchema, ParseOptions, UnitSystem,
};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(1000))]

    /// Property: `N*v` yields exactly N copies of the value.
    #[test]
    fn prop_repeat_count_respected(count in 0_usize..500, value in 0_i64..100_000) {
        let item = ItemSchema::int("I");
        let options = ParseOptions::default();
        let ctx = ExpansionContext::new(&item, &UnitSystem::Metric, &options).unwrap();

        let values = expand_token(&format!("{}*{}", count, value), &ctx).unwrap();
        prop_assert_eq!(values.len(), count);
        prop_assert!(values.iter().all(|v| *v == DeckValue::Int(value)));
    }

    /// Property: `N*` yields N defaults.
    #[test]
    fn prop_empty_value_defaults(count in 1_usize..500) {
        let item = ItemSchema::double("D");
        let options = ParseOptions::default();
        let ctx = ExpansionContext::new(&item, &UnitSystem::Metric, &options).unwrap();

        let values = expand_token(&format!("{}*", count), &ctx).unwrap();
        prop_assert_eq!(values.len(), count);
        prop_assert!(values.iter().all(DeckValue::is_default));
    }

    /// Property: A non-digit count always fails and produces nothing.
    #[test]
    fn prop_bad_count_fails(count in "[a-zA-Z.+-][a-zA-Z0-9.+-]{0,5}", value in "[0-9]{1,4}") {
        let item = ItemSchema::double("D");
        let options = ParseOptions::default();
        let ctx = ExpansionContext::new(&item, &UnitSystem::Metric, &options).unwrap();

        let err = expand_token(&format!("{}*{}", count, value), &ctx).unwrap_err();
        prop_assert_eq!(err.kind, DeckErrorKind::MalformedToken);
    }

    /// Property: Repeated UDA values keep the item dimension whether numeric or symbolic.
    #[test]
    fn prop_uda_dimension_kept(value in "[A-Z][A-Z0-9_]{0,7}|[0-9]{1,5}(\\.[0-9]{1,3})?") {
        let item = ItemSchema::uda("RATE").with_dimension("LiquidSurfaceVolume/Time");
        let options = ParseOptions::default();
        let ctx = ExpansionContext::new(&item, &UnitSystem::Field, &options).unwrap();
        let expected = UnitSystem::Field.parse("LiquidSurfaceVolume/Time").unwrap();

        let values = expand_token(&format!("2*{}", value), &ctx).unwrap();
        prop_assert_eq!(values.len(), 2);
        for v in values {
            match v {
                DeckValue::Uda(uda) => prop_assert_eq!(uda.dimension(), &expected),
                other => prop_assert!(false, "expected UDA, got {:?}", other),
            }
        }
    }
}
