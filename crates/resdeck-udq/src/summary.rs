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

//! Live numeric results of the running simulation.

use crate::keys;
use crate::set::UdqSet;
use std::collections::HashMap;

/// Latest value of every summary vector, keyed by [`keys`] composition.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SummaryState {
    values: HashMap<String, f64>,
}

impl SummaryState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<f64> {
        self.values.get(key).copied()
    }

    pub fn has(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    pub fn update(&mut self, key: impl Into<String>, value: f64) {
        self.values.insert(key.into(), value);
    }

    pub fn get_well_var(&self, well: &str, var: &str) -> Option<f64> {
        self.get(&keys::well_key(var, well))
    }

    pub fn update_well_var(&mut self, well: &str, var: &str, value: f64) {
        self.update(keys::well_key(var, well), value);
    }

    pub fn get_group_var(&self, group: &str, var: &str) -> Option<f64> {
        self.get(&keys::group_key(var, group))
    }

    pub fn update_group_var(&mut self, group: &str, var: &str, value: f64) {
        self.update(keys::group_key(var, group), value);
    }

    pub fn get_segment_var(&self, well: &str, var: &str, segment: usize) -> Option<f64> {
        self.get(&keys::segment_key(var, well, segment))
    }

    pub fn update_segment_var(&mut self, well: &str, var: &str, segment: usize, value: f64) {
        self.update(keys::segment_key(var, well, segment), value);
    }

    pub fn get_region_var(&self, region_set: &str, var: &str, region: usize) -> Option<f64> {
        self.get(&keys::region_key(region_set, var, region))
    }

    pub fn update_region_var(&mut self, region_set: &str, var: &str, region: usize, value: f64) {
        self.update(keys::region_key(region_set, var, region), value);
    }

    /// Publish a UDQ result under `keyword`; undefined entries are written as `undefined_value`.
    pub fn update_udq(&mut self, keyword: &str, set: &UdqSet, undefined_value: f64) {
        for scalar in set {
            let key = scalar.entity.key(keyword);
            self.update(key, scalar.value.unwrap_or(undefined_value));
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_keys() {
        let mut st = SummaryState::new();
        assert_eq!(st.get("FOPR"), None);
        st.update("FOPR", 100.0);
        assert!(st.has("FOPR"));
        assert_eq!(st.get("FOPR"), Some(100.0));
    }

    #[test]
    fn test_entity_vars() {
        let mut st = SummaryState::new();
        st.update_well_var("P1", "WOPR", 1.0);
        st.update_group_var("G1", "GOPR", 2.0);
        st.update_segment_var("P1", "SOFR", 3, 3.0);
        st.update_region_var("FIPNUM", "RPR", 2, 4.0);
        assert_eq!(st.get_well_var("P1", "WOPR"), Some(1.0));
        assert_eq!(st.get("WOPR:P1"), Some(1.0));
        assert_eq!(st.get_group_var("G1", "GOPR"), Some(2.0));
        assert_eq!(st.get_segment_var("P1", "SOFR", 3), Some(3.0));
        assert_eq!(st.get_region_var("FIPNUM", "RPR", 2), Some(4.0));
        assert_eq!(st.get_well_var("P2", "WOPR"), None);
        assert_eq!(st.len(), 4);
    }

    #[test]
    fn test_update_udq_writes_undefined_value() {
        let mut set = UdqSet::wells("WUX", &["P1", "P2"], None);
        set.assign(&crate::set::UdqEntity::Well("P1".to_string()), Some(5.0));
        let mut st = SummaryState::new();
        st.update_udq("WUX", &set, -1.0);
        assert_eq!(st.get_well_var("P1", "WUX"), Some(5.0));
        assert_eq!(st.get_well_var("P2", "WUX"), Some(-1.0));
    }

    #[test]
    fn test_update_udq_keys_by_keyword() {
        let set = UdqSet::wells("TMP", &["P1"], Some(3.0));
        let mut st = SummaryState::new();
        st.update_udq("WUOPR", &set, -1.0);
        assert_eq!(st.get_well_var("P1", "WUOPR"), Some(3.0));
        assert_eq!(st.get_well_var("P1", "TMP"), None);
    }
}
