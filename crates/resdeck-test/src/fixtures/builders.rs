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

//! Builders for customizable fixtures.

use crate::fixtures::topologies;
use resdeck_core::{DefaultValue, ItemSchema, KeywordSchema, RecordSchema};
use resdeck_udq::{
    GroupOrder, MatcherFactories, RegionSetMatcher, RegionTopology, SegmentMatcher,
    SegmentTopology, SummaryState, UdqContext, UdqFunctionTable, UdqParams, UdqState, Udt,
    WellMatcher,
};
use std::collections::HashMap;

/// Builder for single-record keyword schemas.
///
/// # Examples
///
/// ```
/// use resdeck_test::fixtures::builders::KeywordSchemaBuilder;
///
/// let schema = KeywordSchemaBuilder::new("WTEST")
///     .string("WELL")
///     .double("RATE", "LiquidSurfaceVolume/Time", Some(0.0))
///     .build();
///
/// assert_eq!(schema.records[0].len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct KeywordSchemaBuilder {
    name: String,
    items: Vec<ItemSchema>,
}

impl KeywordSchemaBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            items: Vec::new(),
        }
    }

    pub fn int(mut self, name: &str, default: Option<i64>) -> Self {
        let mut item = ItemSchema::int(name);
        if let Some(d) = default {
            item = item.with_default(DefaultValue::Int(d));
        }
        self.items.push(item);
        self
    }

    pub fn double(mut self, name: &str, dimension: &str, default: Option<f64>) -> Self {
        let mut item = ItemSchema::double(name).with_dimension(dimension);
        if let Some(d) = default {
            item = item.with_default(DefaultValue::Double(d));
        }
        self.items.push(item);
        self
    }

    pub fn string(mut self, name: &str) -> Self {
        self.items.push(ItemSchema::string(name));
        self
    }

    pub fn uda(mut self, name: &str, dimension: &str, default: Option<f64>) -> Self {
        let mut item = ItemSchema::uda(name).with_dimension(dimension);
        if let Some(d) = default {
            item = item.with_default(DefaultValue::Double(d));
        }
        self.items.push(item);
        self
    }

    /// Adds an item schema directly.
    pub fn item(mut self, item: ItemSchema) -> Self {
        self.items.push(item);
        self
    }

    pub fn build(self) -> KeywordSchema {
        KeywordSchema::new(self.name, vec![RecordSchema::new(self.items)])
    }
}

/// Owns every collaborator a [`UdqContext`] borrows.
///
/// Defaults to the standard topology of [`topologies`].
///
/// # Examples
///
/// ```
/// use resdeck_test::fixtures::builders::UdqFixture;
///
/// let mut fx = UdqFixture::new().well_var("PROD1", "WOPR", 50.0);
/// let ctx = fx.context();
/// assert_eq!(ctx.get_well_var("PROD1", "WOPR"), Some(50.0));
/// assert_eq!(ctx.segments().unwrap().len(), 8);
/// ```
#[derive(Debug, Clone)]
pub struct UdqFixture {
    pub functions: UdqFunctionTable,
    pub wells: WellMatcher,
    pub groups: GroupOrder,
    pub tables: HashMap<String, Udt>,
    pub segments: SegmentTopology,
    pub regions: RegionTopology,
    pub summary: SummaryState,
    pub state: UdqState,
}

impl Default for UdqFixture {
    fn default() -> Self {
        Self::new()
    }
}

impl UdqFixture {
    pub fn new() -> Self {
        Self::with_params(UdqParams::default())
    }

    pub fn with_params(params: UdqParams) -> Self {
        let state = UdqState::new(params.undefined_value);
        Self {
            functions: UdqFunctionTable::new(params),
            wells: topologies::well_matcher(),
            groups: topologies::group_order(),
            tables: topologies::udt_tables(),
            segments: topologies::segment_topology(),
            regions: topologies::region_topology(),
            summary: SummaryState::new(),
            state,
        }
    }

    /// Sets a summary value.
    pub fn summary(mut self, key: &str, value: f64) -> Self {
        self.summary.update(key, value);
        self
    }

    /// Sets a well-scoped summary value.
    pub fn well_var(mut self, well: &str, var: &str, value: f64) -> Self {
        self.summary.update_well_var(well, var, value);
        self
    }

    /// A context whose matchers are built from the fixture topologies.
    pub fn context(&mut self) -> UdqContext<'_> {
        let segments = &self.segments;
        let regions = &self.regions;
        let factories = MatcherFactories::new()
            .with_segments(move || SegmentMatcher::new(segments.clone()))
            .with_regions(move || RegionSetMatcher::new(regions.clone()));

        UdqContext::new(
            &self.functions,
            &self.wells,
            &self.groups,
            &self.tables,
            factories,
            &mut self.summary,
            &mut self.state,
        )
    }

    /// A context with the given factories, e.g. none for a model without
    /// multi-segment wells.
    pub fn context_with<'a>(&'a mut self, factories: MatcherFactories<'a>) -> UdqContext<'a> {
        UdqContext::new(
            &self.functions,
            &self.wells,
            &self.groups,
            &self.tables,
            factories,
            &mut self.summary,
            &mut self.state,
        )
    }
}
