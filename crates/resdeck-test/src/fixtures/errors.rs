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

//! Inputs that must be rejected.

/// Tokens whose repeat count is malformed.
///
/// Each tuple contains (name, token).
pub fn malformed_tokens() -> Vec<(&'static str, &'static str)> {
    vec![
        ("alpha_count", "abc*5"),
        ("signed_count", "-2*5"),
        ("plus_count", "+2*5"),
        ("float_count", "2.0*5"),
        ("exponent_count", "1e2*5"),
        ("spaced_count", " 2*5"),
        ("overflow_count", "99999999999999999999999*1"),
    ]
}

/// Strings that are numeric but not integer-like.
pub fn non_integer_numbers() -> Vec<(&'static str, &'static str)> {
    vec![
        ("negative", "-3"),
        ("positive_sign", "+3"),
        ("decimal", "3.0"),
        ("exponent", "3e2"),
        ("leading_dot", ".5"),
    ]
}

/// WCONPROD records with more values than the schema has items.
pub fn oversized_wconprod_records() -> Vec<Vec<&'static str>> {
    vec![
        vec!["'P1'", "OPEN", "ORAT", "8*", "1"],
        vec!["'P1'", "10*"],
    ]
}
