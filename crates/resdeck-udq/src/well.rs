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

//! Well name enumeration and wildcard matching.

use resdeck_core::{DeckResult, Pattern};

/// Wells of the model in canonical (definition) order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WellMatcher {
    wells: Vec<String>,
}

impl WellMatcher {
    /// Duplicate names keep their first position.
    pub fn new<S: Into<String>>(wells: impl IntoIterator<Item = S>) -> Self {
        let mut ordered: Vec<String> = Vec::new();
        for well in wells {
            let well = well.into();
            if !ordered.contains(&well) {
                ordered.push(well);
            }
        }
        Self { wells: ordered }
    }

    pub fn wells(&self) -> &[String] {
        &self.wells
    }

    /// Wells whose name matches `pattern`, in canonical order.
    pub fn wells_matching(&self, pattern: &str) -> DeckResult<Vec<String>> {
        let pattern = Pattern::new(pattern)?;
        Ok(pattern
            .filter(&self.wells)
            .into_iter()
            .map(str::to_string)
            .collect())
    }

    pub fn contains(&self, well: &str) -> bool {
        self.wells.iter().any(|w| w == well)
    }

    pub fn len(&self) -> usize {
        self.wells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.wells.is_empty()
    }
}
