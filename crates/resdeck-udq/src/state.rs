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

//! UDQ results persisted across report steps.

use crate::keys;
use crate::set::UdqSet;
use std::collections::HashMap;
use tracing::debug;

/// Persistent store of assigned and defined UDQ values.
///
/// Values are keyed like the summary state. Definitions remember every
/// report step they were made at, so a later definition supersedes the
/// value while [`defined_as_of`](Self::defined_as_of) still answers for
/// earlier steps.
#[derive(Debug, Clone, PartialEq)]
pub struct UdqState {
    undefined_value: f64,
    values: HashMap<String, f64>,
    assignments: HashMap<String, usize>,
    defines: HashMap<String, Vec<usize>>,
}

impl Default for UdqState {
    fn default() -> Self {
        Self::new(0.0)
    }
}

impl UdqState {
    /// `undefined_value` is stored for entities a result leaves undefined.
    pub fn new(undefined_value: f64) -> Self {
        Self {
            undefined_value,
            values: HashMap::new(),
            assignments: HashMap::new(),
            defines: HashMap::new(),
        }
    }

    pub fn undefined_value(&self) -> f64 {
        self.undefined_value
    }

    pub fn add_assign(&mut self, keyword: &str, set: &UdqSet) {
        *self.assignments.entry(keyword.to_string()).or_insert(0) += 1;
        self.store(keyword, set);
        debug!("UDQ state: assigned {} ({} values)", keyword, set.len());
    }

    pub fn add_define(&mut self, report_step: usize, keyword: &str, set: &UdqSet) {
        let steps = self.defines.entry(keyword.to_string()).or_default();
        if let Err(pos) = steps.binary_search(&report_step) {
            steps.insert(pos, report_step);
        }
        self.store(keyword, set);
        debug!(
            "UDQ state: defined {} at step {} ({} values)",
            keyword,
            report_step,
            set.len()
        );
    }

    fn store(&mut self, keyword: &str, set: &UdqSet) {
        for scalar in set {
            self.values.insert(
                scalar.entity.key(keyword),
                scalar.value.unwrap_or(self.undefined_value),
            );
        }
    }

    pub fn get(&self, key: &str) -> Option<f64> {
        self.values.get(key).copied()
    }

    pub fn has(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

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

    /// How many times `keyword` was assigned.
    pub fn assign_count(&self, keyword: &str) -> usize {
        self.assignments.get(keyword).copied().unwrap_or(0)
    }

    /// Latest report step `keyword` was defined at.
    pub fn define_step(&self, keyword: &str) -> Option<usize> {
        self.defines.get(keyword).and_then(|steps| steps.last().copied())
    }

    /// Latest definition step of `keyword` at or before `report_step`.
    pub fn defined_as_of(&self, keyword: &str, report_step: usize) -> Option<usize> {
        self.defines
            .get(keyword)?
            .iter()
            .rev()
            .find(|&&step| step <= report_step)
            .copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::set::UdqEntity;

    // ==================== Assign tests ====================

    #[test]
    fn test_assign_stores_values() {
        let mut st = UdqState::new(-99.0);
        st.add_assign("FU_X", &UdqSet::scalar("FU_X", Some(3.0)));
        assert_eq!(st.get("FU_X"), Some(3.0));
        assert_eq!(st.assign_count("FU_X"), 1);
        assert_eq!(st.assign_count("FU_Y"), 0);
    }

    #[test]
    fn test_undefined_stored_as_undefined_value() {
        let mut st = UdqState::new(-99.0);
        let mut set = UdqSet::wells("WUX", &["P1", "P2"], None);
        set.assign(&UdqEntity::Well("P2".to_string()), Some(7.0));
        st.add_assign("WUX", &set);
        assert_eq!(st.get_well_var("P1", "WUX"), Some(-99.0));
        assert_eq!(st.get_well_var("P2", "WUX"), Some(7.0));
        assert_eq!(st.get_well_var("P3", "WUX"), None);
    }

    // ==================== Define tests ====================

    #[test]
    fn test_redefine_keeps_history() {
        let mut st = UdqState::default();
        st.add_define(2, "FU_X", &UdqSet::scalar("FU_X", Some(1.0)));
        st.add_define(5, "FU_X", &UdqSet::scalar("FU_X", Some(2.0)));
        assert_eq!(st.get("FU_X"), Some(2.0));
        assert_eq!(st.define_step("FU_X"), Some(5));
        assert_eq!(st.defined_as_of("FU_X", 4), Some(2));
        assert_eq!(st.defined_as_of("FU_X", 5), Some(5));
        assert_eq!(st.defined_as_of("FU_X", 1), None);
    }

    #[test]
    fn test_define_same_step_twice() {
        let mut st = UdqState::default();
        st.add_define(3, "FU_X", &UdqSet::scalar("FU_X", Some(1.0)));
        st.add_define(3, "FU_X", &UdqSet::scalar("FU_X", Some(4.0)));
        assert_eq!(st.define_step("FU_X"), Some(3));
        assert_eq!(st.get("FU_X"), Some(4.0));
    }

    #[test]
    fn test_undefined_keyword() {
        let st = UdqState::default();
        assert_eq!(st.define_step("FU_X"), None);
        assert_eq!(st.defined_as_of("FU_X", 10), None);
    }
}
