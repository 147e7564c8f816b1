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

//! Key composition for entity-scoped variables.
//!
//! Every store in this crate addresses entity values with these keys, so
//! a value written through one store is found by the same lookup in another.

pub fn well_key(var: &str, well: &str) -> String {
    format!("{}:{}", var, well)
}

pub fn group_key(var: &str, group: &str) -> String {
    format!("{}:{}", var, group)
}

pub fn segment_key(var: &str, well: &str, segment: usize) -> String {
    format!("{}:{}:{}", var, well, segment)
}

/// `region_set` is the set name, e.g. `FIPNUM`.
pub fn region_key(region_set: &str, var: &str, region: usize) -> String {
    format!("{}:{}:{}", var, region_set, region)
}
