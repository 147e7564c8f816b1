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

//! The evaluation environment of one UDQ pass.
//!
//! A [`UdqContext`] is created for each report step's UDQ evaluation and
//! dropped afterwards. It borrows the run's long-lived collaborators (well
//! and group ordering, UDT tables, summary state and UDQ state) and owns a
//! local cache of intermediate values plus the segment and region matchers,
//! which are built from their factories on first use.
//!
//! Variable lookups consult the local cache, then the summary state, then
//! the UDQ state. A miss is `None`, not an error.

use crate::function::UdqFunctionTable;
use crate::group::GroupOrder;
use crate::keys;
use crate::region::{RegionDescriptor, RegionSetMatchResult, RegionSetMatcher};
use crate::segment::{SegmentDescriptor, SegmentMatcher, SegmentSet};
use crate::set::UdqSet;
use crate::state::UdqState;
use crate::summary::SummaryState;
use crate::udt::Udt;
use crate::well::WellMatcher;
use resdeck_core::errors::messages;
use resdeck_core::DeckResult;
use std::cell::OnceCell;
use std::collections::HashMap;
use std::fmt;
use tracing::{debug, warn};

type Factory<'a, T> = Box<dyn Fn() -> T + 'a>;

/// Constructors for the matchers a context builds on demand.
///
/// A factory is absent when the model has no such topology, e.g. no
/// multi-segment wells; queries needing it then fail with
/// `CapabilityUnavailable`.
#[derive(Default)]
pub struct MatcherFactories<'a> {
    pub segments: Option<Factory<'a, SegmentMatcher>>,
    pub regions: Option<Factory<'a, RegionSetMatcher>>,
}

impl<'a> MatcherFactories<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_segments(mut self, factory: impl Fn() -> SegmentMatcher + 'a) -> Self {
        self.segments = Some(Box::new(factory));
        self
    }

    pub fn with_regions(mut self, factory: impl Fn() -> RegionSetMatcher + 'a) -> Self {
        self.regions = Some(Box::new(factory));
        self
    }
}

impl fmt::Debug for MatcherFactories<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MatcherFactories")
            .field("segments", &self.segments.is_some())
            .field("regions", &self.regions.is_some())
            .finish()
    }
}

pub struct UdqContext<'a> {
    function_table: &'a UdqFunctionTable,
    well_matcher: &'a WellMatcher,
    group_order: &'a GroupOrder,
    tables: &'a HashMap<String, Udt>,
    summary_state: &'a mut SummaryState,
    udq_state: &'a mut UdqState,
    factories: MatcherFactories<'a>,
    segment_matcher: OnceCell<SegmentMatcher>,
    region_matcher: OnceCell<RegionSetMatcher>,
    values: HashMap<String, f64>,
}

impl<'a> UdqContext<'a> {
    pub fn new(
        function_table: &'a UdqFunctionTable,
        well_matcher: &'a WellMatcher,
        group_order: &'a GroupOrder,
        tables: &'a HashMap<String, Udt>,
        factories: MatcherFactories<'a>,
        summary_state: &'a mut SummaryState,
        udq_state: &'a mut UdqState,
    ) -> Self {
        Self {
            function_table,
            well_matcher,
            group_order,
            tables,
            summary_state,
            udq_state,
            factories,
            segment_matcher: OnceCell::new(),
            region_matcher: OnceCell::new(),
            values: HashMap::new(),
        }
    }

    // ==================== Variable lookup ====================

    /// Value of `key`: local cache, then summary state, then UDQ state.
    pub fn get(&self, key: &str) -> Option<f64> {
        self.values
            .get(key)
            .copied()
            .or_else(|| self.summary_state.get(key))
            .or_else(|| self.udq_state.get(key))
    }

    /// The well need not exist; an unknown well simply has no value.
    pub fn get_well_var(&self, well: &str, var: &str) -> Option<f64> {
        self.get(&keys::well_key(var, well))
    }

    pub fn get_group_var(&self, group: &str, var: &str) -> Option<f64> {
        self.get(&keys::group_key(var, group))
    }

    pub fn get_segment_var(&self, well: &str, var: &str, segment: usize) -> Option<f64> {
        self.get(&keys::segment_key(var, well, segment))
    }

    pub fn get_region_var(&self, region_set: &str, var: &str, region: usize) -> Option<f64> {
        self.get(&keys::region_key(region_set, var, region))
    }

    /// Table `name`; an unknown table is an `UnknownName` error.
    pub fn get_udt(&self, name: &str) -> DeckResult<&Udt> {
        self.tables.get(name).ok_or_else(|| {
            warn!("UDQ formula references undefined table {}", name);
            messages::unknown_table(name)
        })
    }

    // ==================== Updates ====================

    /// Cache a value for the rest of this pass. It shadows every other source.
    pub fn add(&mut self, key: impl Into<String>, value: f64) {
        self.values.insert(key.into(), value);
    }

    /// Store an assigned result and publish it to the summary state.
    pub fn update_assign(&mut self, keyword: &str, result: &UdqSet) {
        debug!("UDQ assign {}: {} defined of {}", keyword, result.defined_size(), result.len());
        self.udq_state.add_assign(keyword, result);
        self.summary_state
            .update_udq(keyword, result, self.udq_state.undefined_value());
    }

    /// Store a result defined at `report_step` and publish it to the summary state.
    pub fn update_define(&mut self, report_step: usize, keyword: &str, result: &UdqSet) {
        debug!(
            "UDQ define {} at step {}: {} defined of {}",
            keyword,
            report_step,
            result.defined_size(),
            result.len()
        );
        self.udq_state.add_define(report_step, keyword, result);
        self.summary_state
            .update_udq(keyword, result, self.udq_state.undefined_value());
    }

    // ==================== Entity enumeration ====================

    pub fn function_table(&self) -> &UdqFunctionTable {
        self.function_table
    }

    pub fn wells(&self) -> &[String] {
        self.well_matcher.wells()
    }

    pub fn wells_matching(&self, pattern: &str) -> DeckResult<Vec<String>> {
        self.well_matcher.wells_matching(pattern)
    }

    pub fn non_field_groups(&self) -> Vec<String> {
        self.group_order.non_field_groups()
    }

    pub fn groups(&self, pattern: &str) -> DeckResult<Vec<String>> {
        self.group_order.groups_matching(pattern)
    }

    // ==================== Matchers ====================

    /// Build the segment matcher unless it already exists.
    pub fn ensure_segment_matcher_exists(&self) -> DeckResult<()> {
        self.segment_matcher().map(|_| ())
    }

    /// Build the region matcher unless it already exists.
    pub fn ensure_region_matcher_exists(&self) -> DeckResult<()> {
        self.region_matcher().map(|_| ())
    }

    fn segment_matcher(&self) -> DeckResult<&SegmentMatcher> {
        if let Some(matcher) = self.segment_matcher.get() {
            return Ok(matcher);
        }

        let factory = self.factories.segments.as_ref().ok_or_else(|| {
            warn!("Segment query without a segment topology");
            messages::matcher_unavailable("segment")
        })?;

        debug!("Building segment matcher");
        Ok(self.segment_matcher.get_or_init(|| factory()))
    }

    fn region_matcher(&self) -> DeckResult<&RegionSetMatcher> {
        if let Some(matcher) = self.region_matcher.get() {
            return Ok(matcher);
        }

        let factory = self.factories.regions.as_ref().ok_or_else(|| {
            warn!("Region query without a region topology");
            messages::matcher_unavailable("region")
        })?;

        debug!("Building region matcher");
        Ok(self.region_matcher.get_or_init(|| factory()))
    }

    /// Every segment of every multi-segment well.
    pub fn segments(&self) -> DeckResult<SegmentSet> {
        Ok(self.segment_matcher()?.all())
    }

    /// Segments selected by `descriptor`, e.g. `["PROD*", "3"]`.
    pub fn segments_matching<S: AsRef<str>>(&self, descriptor: &[S]) -> DeckResult<SegmentSet> {
        let matcher = self.segment_matcher()?;
        matcher.find_segments(&SegmentDescriptor::parse(descriptor)?)
    }

    /// Every region of every region set.
    pub fn regions(&self) -> DeckResult<RegionSetMatchResult> {
        Ok(self.region_matcher()?.all())
    }

    /// Regions of `vector_name`'s region set selected by `descriptor`.
    pub fn regions_matching<S: AsRef<str>>(
        &self,
        vector_name: &str,
        descriptor: &[S],
    ) -> DeckResult<RegionSetMatchResult> {
        let matcher = self.region_matcher()?;
        Ok(matcher.find_regions(&RegionDescriptor::parse(vector_name, descriptor)?))
    }
}

impl fmt::Debug for UdqContext<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UdqContext")
            .field("wells", &self.well_matcher.len())
            .field("tables", &self.tables.len())
            .field("cached_values", &self.values.len())
            .field("segment_matcher_built", &self.segment_matcher.get().is_some())
            .field("region_matcher_built", &self.region_matcher.get().is_some())
            .finish()
    }
}
