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

//! Canonical test fixtures.
//!
//! - **schemas**: keyword schemas modelled on real deck keywords
//! - **topologies**: wells, groups, segments, regions and UDT tables
//! - **errors**: tokens and records that must be rejected
//! - **builders**: schema builder and a wired UDQ environment

pub mod builders;
pub mod errors;
mod schemas;
mod topologies;

pub use schemas::*;
pub use topologies::*;

use crate::SchemaList;

/// Returns all schema fixtures for iteration.
pub fn all() -> SchemaList {
    vec![
        ("WCONPROD", wconprod),
        ("WELSPECS", welspecs),
        ("PORO", poro),
        ("PRESSURE", pressure),
        ("FIPNUM", fipnum),
    ]
}
