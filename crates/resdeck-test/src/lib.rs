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

//! Shared test fixtures for the ResDeck crates.
//!
//! This crate provides canonical keyword schemas, entity topologies, token
//! samples and a ready-wired UDQ evaluation environment so the core, UDQ and
//! benchmark crates test against the same data.
//!
//! # Quick Start
//!
//! ```rust
//! use resdeck_test::fixtures;
//!
//! // Canonical schemas
//! let wconprod = fixtures::wconprod();
//! let poro = fixtures::poro();
//!
//! // Token samples that must fail expansion
//! for (name, token) in fixtures::errors::malformed_tokens() {
//!     // expand `token` and expect MalformedToken
//! }
//!
//! // A UDQ context over the standard topology
//! use resdeck_test::fixtures::builders::UdqFixture;
//!
//! let mut fx = UdqFixture::new().summary("FOPR", 1000.0);
//! let ctx = fx.context();
//! assert_eq!(ctx.get("FOPR"), Some(1000.0));
//! ```

use resdeck_core::KeywordSchema;

/// Type alias for a list of schema fixtures (name, generator).
pub type SchemaList = Vec<(&'static str, fn() -> KeywordSchema)>;

/// Canonical schemas, topologies and builders.
pub mod fixtures;

pub use fixtures::*;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_schemas_named_after_keyword() {
        for (name, schema_fn) in fixtures::all() {
            assert_eq!(schema_fn().name, name);
        }
    }
}
