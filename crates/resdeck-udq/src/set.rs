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

//! Result sets produced by UDQ evaluation.
//!
//! A [`UdqSet`] holds one possibly undefined value per entity the quantity
//! ranges over: a single scalar, or one value per well, group, segment or
//! region.

use crate::keys;
use crate::region::RegionSetMatchResult;
use crate::segment::SegmentSet;
use crate::var_type::UdqVarType;

/// The entity one value of a set belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum UdqEntity {
    Scalar,
    Well(String),
    Group(String),
    Segment { well: String, segment: usize },
    Region { set: String, region: usize },
}

impl UdqEntity {
    /// Store key of variable `var` on this entity.
    pub fn key(&self, var: &str) -> String {
        match self {
            Self::Scalar => var.to_string(),
            Self::Well(well) => keys::well_key(var, well),
            Self::Group(group) => keys::group_key(var, group),
            Self::Segment { well, segment } => keys::segment_key(var, well, *segment),
            Self::Region { set, region } => keys::region_key(set, var, *region),
        }
    }
}

/// One entity value; `None` while undefined.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UdqScalar {
    pub entity: UdqEntity,
    pub value: Option<f64>,
}

impl UdqScalar {
    pub fn defined(&self) -> bool {
        self.value.is_some()
    }
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UdqSet {
    name: String,
    var_type: UdqVarType,
    values: Vec<UdqScalar>,
}

impl UdqSet {
    fn build(
        name: impl Into<String>,
        var_type: UdqVarType,
        entities: impl IntoIterator<Item = UdqEntity>,
        value: Option<f64>,
    ) -> Self {
        Self {
            name: name.into(),
            var_type,
            values: entities
                .into_iter()
                .map(|entity| UdqScalar { entity, value })
                .collect(),
        }
    }

    pub fn scalar(name: impl Into<String>, value: Option<f64>) -> Self {
        Self::build(name, UdqVarType::Scalar, [UdqEntity::Scalar], value)
    }

    pub fn field(name: impl Into<String>, value: Option<f64>) -> Self {
        Self::build(name, UdqVarType::Field, [UdqEntity::Scalar], value)
    }

    pub fn wells<S: AsRef<str>>(name: impl Into<String>, wells: &[S], value: Option<f64>) -> Self {
        let entities = wells.iter().map(|w| UdqEntity::Well(w.as_ref().to_string()));
        Self::build(name, UdqVarType::Well, entities, value)
    }

    pub fn groups<S: AsRef<str>>(
        name: impl Into<String>,
        groups: &[S],
        value: Option<f64>,
    ) -> Self {
        let entities = groups.iter().map(|g| UdqEntity::Group(g.as_ref().to_string()));
        Self::build(name, UdqVarType::Group, entities, value)
    }

    pub fn segments(name: impl Into<String>, segments: &SegmentSet, value: Option<f64>) -> Self {
        let entities = segments.iter().map(|(well, segment)| UdqEntity::Segment {
            well: well.to_string(),
            segment,
        });
        Self::build(name, UdqVarType::Segment, entities, value)
    }

    pub fn regions(
        name: impl Into<String>,
        regions: &RegionSetMatchResult,
        value: Option<f64>,
    ) -> Self {
        let entities = regions.iter().map(|(set, region)| UdqEntity::Region {
            set: set.to_string(),
            region,
        });
        Self::build(name, UdqVarType::Region, entities, value)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn var_type(&self) -> UdqVarType {
        self.var_type
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, UdqScalar> {
        self.values.iter()
    }

    pub fn get(&self, index: usize) -> Option<&UdqScalar> {
        self.values.get(index)
    }

    /// Value of `entity`; `None` when absent or undefined.
    pub fn value_of(&self, entity: &UdqEntity) -> Option<f64> {
        self.values
            .iter()
            .find(|s| s.entity == *entity)
            .and_then(|s| s.value)
    }

    /// Set the value of `entity`. Returns false when the set has no such entity.
    pub fn assign(&mut self, entity: &UdqEntity, value: Option<f64>) -> bool {
        match self.values.iter_mut().find(|s| s.entity == *entity) {
            Some(scalar) => {
                scalar.value = value;
                true
            }
            None => false,
        }
    }

    /// Number of defined values.
    pub fn defined_size(&self) -> usize {
        self.values.iter().filter(|s| s.defined()).count()
    }
}

impl<'a> IntoIterator for &'a UdqSet {
    type Item = &'a UdqScalar;
    type IntoIter = std::slice::Iter<'a, UdqScalar>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}
