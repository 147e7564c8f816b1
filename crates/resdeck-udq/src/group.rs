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

//! Group name enumeration and wildcard matching.

use resdeck_core::{DeckResult, Pattern};

/// Name of the top group every model has.
pub const FIELD_GROUP: &str = "FIELD";

/// Groups of the model in canonical (definition) order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupOrder {
    names: Vec<String>,
}

impl Default for GroupOrder {
    fn default() -> Self {
        Self {
            names: vec![FIELD_GROUP.to_string()],
        }
    }
}

impl GroupOrder {
    /// `FIELD` is always present and first.
    pub fn new<S: Into<String>>(names: impl IntoIterator<Item = S>) -> Self {
        let mut order = Self::default();
        for name in names {
            order.add(name);
        }
        order
    }

    /// Append a group; an existing name keeps its position.
    pub fn add(&mut self, name: impl Into<String>) {
        let name = name.into();
        if !self.names.contains(&name) {
            self.names.push(name);
        }
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Every group except `FIELD`, in canonical order.
    pub fn non_field_groups(&self) -> Vec<String> {
        self.names
            .iter()
            .filter(|name| name.as_str() != FIELD_GROUP)
            .cloned()
            .collect()
    }

    /// Non-field groups whose name matches `pattern`.
    pub fn groups_matching(&self, pattern: &str) -> DeckResult<Vec<String>> {
        let pattern = Pattern::new(pattern)?;
        Ok(self
            .names
            .iter()
            .filter(|name| name.as_str() != FIELD_GROUP && pattern.matches(name))
            .cloned()
            .collect())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }
}
