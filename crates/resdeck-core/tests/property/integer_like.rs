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

//! Property-based tests for the integer-like test.

use proptest::prelude::*;
use resdeck_core::is_int;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(1000))]

    /// Property: Every non-empty digit string is integer-like.
    #[test]
    fn prop_digit_strings_are_int(s in "[0-9]{1,40}") {
        prop_assert!(is_int(&s));
    }

    /// Property: A sign makes a string non-integer-like.
    #[test]
    fn prop_signed_is_not_int(sign in "[+-]", digits in "[0-9]{1,10}") {
        let s = format!("{}{}", sign, digits);
        prop_assert!(!is_int(&s));
        prop_assert!(s.parse::<f64>().is_ok());
    }

    /// Property: A decimal point or exponent makes a string non-integer-like
    /// even though it still parses as a double.
    #[test]
    fn prop_fraction_or_exponent_is_not_int(
        whole in "[0-9]{1,6}",
        marker in prop::sample::select(vec![".", "e", "E"]),
        tail in "[0-9]{1,3}"
    ) {
        let s = format!("{}{}{}", whole, marker, tail);
        prop_assert!(!is_int(&s));
        prop_assert!(s.parse::<f64>().is_ok());
    }

    /// Property: Any string with a non-digit character is not integer-like.
    #[test]
    fn prop_non_digit_char_rejected(prefix in "[0-9]{0,5}", c in "[^0-9]", suffix in "[0-9]{0,5}") {
        let s = format!("{}{}{}", prefix, c, suffix);
        prop_assert!(!is_int(&s));
    }
}

#[test]
fn test_empty_is_not_int() {
    assert!(!is_int(""));
}
