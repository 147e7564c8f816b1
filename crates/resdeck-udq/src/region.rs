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

//! Grid region sets and region matching.
//!
//! Region vectors select their region set from the vector name: `RPR__ABC`
//! reads from `FIPABC`, while a short name such as `RPR` reads from `FIPNUM`.

use resdeck_core::{is_int, DeckError, DeckResult};
use std::collections::BTreeMap;
use tracing::debug;

/// The region set every model has.
pub const DEFAULT_REGION_SET: &str = "FIPNUM";

/// Region set a region vector reads from.
pub fn region_set_of(vector_name: &str) -> String {
    match vector_name.get(5..) {
        Some(tag) if !tag.is_empty() => format!("FIP{}", tag),
        _ => DEFAULT_REGION_SET.to_string(),
    }
}

/// Region ids of every named region set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegionTopology {
    sets: BTreeMap<String, Vec<usize>>,
}

impl RegionTopology {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or extend a region set. Ids are kept sorted and unique.
    pub fn add_set<I>(&mut self, name: impl Into<String>, regions: I)
    where
        I: IntoIterator<Item = usize>,
    {
        let ids = self.sets.entry(name.into()).or_default();
        ids.extend(regions);
        ids.sort_unstable();
        ids.dedup();
    }

    pub fn with_set<I>(mut self, name: impl Into<String>, regions: I) -> Self
    where
        I: IntoIterator<Item = usize>,
    {
        self.add_set(name, regions);
        self
    }

    /// Distinct values of a per-cell region array, e.g. the FIPNUM keyword data.
    pub fn add_cell_array(&mut self, name: impl Into<String>, cells: &[i64]) {
        let ids: Vec<usize> = cells
            .iter()
            .filter_map(|&c| usize::try_from(c).ok())
            .filter(|&c| c > 0)
            .collect();
        self.add_set(name, ids);
    }

    pub fn set_names(&self) -> impl Iterator<Item = &str> {
        self.sets.keys().map(String::as_str)
    }

    pub fn regions(&self, set: &str) -> Option<&[usize]> {
        self.sets.get(set).map(Vec::as_slice)
    }
}

/// Which region set and which regions in it to select.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionDescriptor {
    pub region_set: String,
    /// Selected ids, or every region when `None`.
    pub regions: Option<Vec<usize>>,
}

impl RegionDescriptor {
    /// Parse the region selectors following a region vector.
    ///
    /// No selectors, or a single `*`, select every region of the set.
    pub fn parse<S: AsRef<str>>(vector_name: &str, tokens: &[S]) -> DeckResult<Self> {
        let region_set = region_set_of(vector_name);

        if tokens.is_empty() || (tokens.len() == 1 && tokens[0].as_ref() == "*") {
            return Ok(Self {
                region_set,
                regions: None,
            });
        }

        let regions = tokens
            .iter()
            .map(|t| parse_region(t.as_ref()))
            .collect::<DeckResult<Vec<_>>>()?;

        Ok(Self {
            region_set,
            regions: Some(regions),
        })
    }
}

fn parse_region(token: &str) -> DeckResult<usize> {
    if !is_int(token) {
        return Err(DeckError::malformed_token(format!(
            "invalid region number '{}'",
            token
        )));
    }
    token
        .parse::<usize>()
        .map_err(|_| DeckError::malformed_token(format!("region number '{}' out of range", token)))
}

/// Matched region ids, grouped by region set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RegionSetMatchResult {
    sets: BTreeMap<String, Vec<usize>>,
}

impl RegionSetMatchResult {
    /// Region set names in sorted order.
    pub fn set_names(&self) -> Vec<&str> {
        self.sets.keys().map(String::as_str).collect()
    }

    /// Matched ids of `set`, ascending; empty when the set did not match.
    pub fn regions(&self, set: &str) -> &[usize] {
        self.sets.get(set).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Every (set, region) pair in order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.sets
            .iter()
            .flat_map(|(set, ids)| ids.iter().map(move |id| (set.as_str(), *id)))
    }

    pub fn len(&self) -> usize {
        self.sets.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Resolves region descriptors against a fixed topology.
#[derive(Debug, Clone)]
pub struct RegionSetMatcher {
    topology: RegionTopology,
}

impl RegionSetMatcher {
    pub fn new(topology: RegionTopology) -> Self {
        debug!("Region matcher over {} region sets", topology.sets.len());
        Self { topology }
    }

    pub fn topology(&self) -> &RegionTopology {
        &self.topology
    }

    /// Every region of every set.
    pub fn all(&self) -> RegionSetMatchResult {
        RegionSetMatchResult {
            sets: self
                .topology
                .sets
                .iter()
                .filter(|(_, ids)| !ids.is_empty())
                .map(|(name, ids)| (name.clone(), ids.clone()))
                .collect(),
        }
    }

    /// Unknown sets and ids outside the set match nothing.
    pub fn find_regions(&self, descriptor: &RegionDescriptor) -> RegionSetMatchResult {
        let mut sets = BTreeMap::new();

        if let Some(available) = self.topology.sets.get(&descriptor.region_set) {
            let ids: Vec<usize> = match &descriptor.regions {
                None => available.clone(),
                Some(wanted) => available
                    .iter()
                    .copied()
                    .filter(|id| wanted.contains(id))
                    .collect(),
            };
            if !ids.is_empty() {
                sets.insert(descriptor.region_set.clone(), ids);
            }
        }

        RegionSetMatchResult { sets }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use resdeck_core::DeckErrorKind;

    fn matcher() -> RegionSetMatcher {
        RegionSetMatcher::new(
            RegionTopology::new()
                .with_set("FIPNUM", [3, 1, 2])
                .with_set("FIPABC", [10, 20]),
        )
    }

    // ==================== Region set naming tests ====================

    #[test]
    fn test_region_set_of() {
        assert_eq!(region_set_of("RPR__ABC"), "FIPABC");
        assert_eq!(region_set_of("ROPR_NUM"), "FIPNUM");
        assert_eq!(region_set_of("RPR"), "FIPNUM");
        assert_eq!(region_set_of("ROIP_"), "FIPNUM");
    }

    // ==================== Descriptor tests ====================

    #[test]
    fn test_descriptor_all() {
        let d = RegionDescriptor::parse::<&str>("RPR", &[]).unwrap();
        assert_eq!(d.region_set, "FIPNUM");
        assert_eq!(d.regions, None);
        assert_eq!(RegionDescriptor::parse("RPR", &["*"]).unwrap().regions, None);
    }

    #[test]
    fn test_descriptor_ids() {
        let d = RegionDescriptor::parse("RPR__ABC", &["20", "10"]).unwrap();
        assert_eq!(d.region_set, "FIPABC");
        assert_eq!(d.regions, Some(vec![20, 10]));
    }

    #[test]
    fn test_descriptor_bad_id() {
        let err = RegionDescriptor::parse("RPR", &["two"]).unwrap_err();
        assert_eq!(err.kind, DeckErrorKind::MalformedToken);
    }

    // ==================== Matching tests ====================

    #[test]
    fn test_all_sorted() {
        let all = matcher().all();
        assert_eq!(all.set_names(), vec!["FIPABC", "FIPNUM"]);
        assert_eq!(all.regions("FIPNUM"), &[1, 2, 3]);
        assert_eq!(all.len(), 5);
    }

    #[test]
    fn test_find_orders_by_topology() {
        let d = RegionDescriptor::parse("RPR__ABC", &["20", "10", "20"]).unwrap();
        let found = matcher().find_regions(&d);
        assert_eq!(found.iter().collect::<Vec<_>>(), vec![("FIPABC", 10), ("FIPABC", 20)]);
    }

    #[test]
    fn test_find_unknown_set_or_id_is_empty() {
        let d = RegionDescriptor::parse::<&str>("RPR__XYZ", &[]).unwrap();
        assert!(matcher().find_regions(&d).is_empty());
        let d = RegionDescriptor::parse("RPR", &["99"]).unwrap();
        assert!(matcher().find_regions(&d).is_empty());
    }

    #[test]
    fn test_cell_array() {
        let mut topo = RegionTopology::new();
        topo.add_cell_array("FIPNUM", &[1, 1, 2, 0, 2, 4]);
        assert_eq!(topo.regions("FIPNUM"), Some(&[1, 2, 4][..]));
    }
}
