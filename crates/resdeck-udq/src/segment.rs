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

//! Multi-segment well topology and segment set matching.
//!
//! A [`SegmentMatcher`] resolves a descriptor such as `['PROD*', '3']` to the
//! concrete (well, segment) pairs it names. Results are ordered by the
//! topology's well order and ascending segment number, never by the order in
//! which a wildcard happened to expand.

use resdeck_core::{is_int, DeckError, DeckResult, Pattern};
use tracing::debug;

/// Segment numbers of every multi-segment well, in well order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SegmentTopology {
    wells: Vec<(String, Vec<usize>)>,
}

impl SegmentTopology {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or extend a well. Segment numbers are kept sorted and unique.
    pub fn add_well<I>(&mut self, well: impl Into<String>, segments: I)
    where
        I: IntoIterator<Item = usize>,
    {
        let well = well.into();
        let index = match self.wells.iter().position(|(w, _)| *w == well) {
            Some(index) => index,
            None => {
                self.wells.push((well, Vec::new()));
                self.wells.len() - 1
            }
        };

        let numbers = &mut self.wells[index].1;
        numbers.extend(segments);
        numbers.sort_unstable();
        numbers.dedup();
    }

    /// Builder form of [`add_well`](Self::add_well).
    pub fn with_well<I>(mut self, well: impl Into<String>, segments: I) -> Self
    where
        I: IntoIterator<Item = usize>,
    {
        self.add_well(well, segments);
        self
    }

    pub fn wells(&self) -> impl Iterator<Item = &str> {
        self.wells.iter().map(|(w, _)| w.as_str())
    }

    pub fn segments(&self, well: &str) -> Option<&[usize]> {
        self.wells
            .iter()
            .find(|(w, _)| w == well)
            .map(|(_, s)| s.as_slice())
    }

    pub fn is_empty(&self) -> bool {
        self.wells.is_empty()
    }
}

/// Which wells and segments to select.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SegmentDescriptor {
    /// Well name or wildcard pattern.
    pub well_pattern: String,
    /// One segment number, or every segment when `None`.
    pub segment: Option<usize>,
}

impl SegmentDescriptor {
    /// Every segment of every well.
    pub fn all() -> Self {
        Self {
            well_pattern: "*".to_string(),
            segment: None,
        }
    }

    /// Parse a selector list: `[]`, `[well]` or `[well, segment]`.
    ///
    /// A segment selector of `*` means every segment.
    pub fn parse<S: AsRef<str>>(tokens: &[S]) -> DeckResult<Self> {
        let mut descriptor = Self::all();

        match tokens {
            [] => {}
            [well] => descriptor.well_pattern = well.as_ref().to_string(),
            [well, segment] => {
                descriptor.well_pattern = well.as_ref().to_string();
                descriptor.segment = parse_segment(segment.as_ref())?;
            }
            _ => {
                return Err(DeckError::malformed_token(format!(
                    "segment selector takes at most a well and a segment, got {} tokens",
                    tokens.len()
                )))
            }
        }

        Ok(descriptor)
    }
}

fn parse_segment(token: &str) -> DeckResult<Option<usize>> {
    if token == "*" {
        return Ok(None);
    }

    if !is_int(token) {
        return Err(DeckError::malformed_token(format!(
            "invalid segment number '{}'",
            token
        )));
    }

    token.parse::<usize>().map(Some).map_err(|_| {
        DeckError::malformed_token(format!("segment number '{}' out of range", token))
    })
}

/// Matched (well, segment) pairs grouped by well.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SegmentSet {
    wells: Vec<(String, Vec<usize>)>,
}

impl SegmentSet {
    /// Matched wells in topology order.
    pub fn wells(&self) -> Vec<&str> {
        self.wells.iter().map(|(w, _)| w.as_str()).collect()
    }

    /// Matched segments of `well`; empty when the well did not match.
    pub fn segments(&self, well: &str) -> &[usize] {
        self.wells
            .iter()
            .find(|(w, _)| w == well)
            .map(|(_, s)| s.as_slice())
            .unwrap_or(&[])
    }

    /// Every (well, segment) pair in order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.wells
            .iter()
            .flat_map(|(w, segs)| segs.iter().map(move |s| (w.as_str(), *s)))
    }

    /// Number of (well, segment) pairs.
    pub fn len(&self) -> usize {
        self.wells.iter().map(|(_, s)| s.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Resolves segment descriptors against a fixed topology.
#[derive(Debug, Clone)]
pub struct SegmentMatcher {
    topology: SegmentTopology,
}

impl SegmentMatcher {
    pub fn new(topology: SegmentTopology) -> Self {
        debug!("Segment matcher over {} wells", topology.wells.len());
        Self { topology }
    }

    pub fn topology(&self) -> &SegmentTopology {
        &self.topology
    }

    /// Every segment of every multi-segment well.
    pub fn all(&self) -> SegmentSet {
        SegmentSet {
            wells: self.topology.wells.clone(),
        }
    }

    pub fn find_segments(&self, descriptor: &SegmentDescriptor) -> DeckResult<SegmentSet> {
        let pattern = Pattern::new(&descriptor.well_pattern)?;

        let wells = self
            .topology
            .wells
            .iter()
            .filter(|(well, _)| pattern.matches(well))
            .filter_map(|(well, segments)| {
                let selected: Vec<usize> = match descriptor.segment {
                    Some(number) => segments.iter().copied().filter(|s| *s == number).collect(),
                    None => segments.clone(),
                };
                (!selected.is_empty()).then(|| (well.clone(), selected))
            })
            .collect();

        Ok(SegmentSet { wells })
    }
}
