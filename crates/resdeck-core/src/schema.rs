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

//! Keyword schema metadata: expected item types, defaults and dimensions.
//!
//! The schema registry itself lives outside this crate; these types are the
//! shape in which it hands item metadata to the value builder.

use crate::error::DeckResult;
use crate::units::{Dimension, UnitSystem};
use crate::value::UdaValue;

/// Declared type of an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ItemType {
    Int,
    Double,
    String,
    RawString,
    Uda,
}

impl std::fmt::Display for ItemType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Int => write!(f, "int"),
            Self::Double => write!(f, "double"),
            Self::String => write!(f, "string"),
            Self::RawString => write!(f, "raw string"),
            Self::Uda => write!(f, "UDA"),
        }
    }
}

/// How many values an item takes from a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ItemSize {
    /// Exactly one value.
    #[default]
    Single,
    /// Every remaining value of the record.
    All,
}

/// Schema default for an item.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DefaultValue {
    Int(i64),
    Double(f64),
    String(String),
}

impl DefaultValue {
    pub fn as_double(&self) -> Option<f64> {
        match self {
            Self::Double(v) => Some(*v),
            Self::Int(v) => Some(*v as f64),
            Self::String(_) => None,
        }
    }
}

/// Metadata for one item position in a record.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemSchema {
    pub name: String,
    pub kind: ItemType,
    pub size: ItemSize,
    pub default: Option<DefaultValue>,
    /// Dimension expression, resolved against a unit system when needed.
    pub dimension: Option<String>,
}

impl ItemSchema {
    pub fn new(name: impl Into<String>, kind: ItemType) -> Self {
        Self {
            name: name.into(),
            kind,
            size: ItemSize::Single,
            default: None,
            dimension: None,
        }
    }

    pub fn int(name: impl Into<String>) -> Self {
        Self::new(name, ItemType::Int)
    }

    pub fn double(name: impl Into<String>) -> Self {
        Self::new(name, ItemType::Double)
    }

    pub fn string(name: impl Into<String>) -> Self {
        Self::new(name, ItemType::String)
    }

    pub fn raw_string(name: impl Into<String>) -> Self {
        Self::new(name, ItemType::RawString)
    }

    pub fn uda(name: impl Into<String>) -> Self {
        Self::new(name, ItemType::Uda)
    }

    pub fn with_default(mut self, default: DefaultValue) -> Self {
        self.default = Some(default);
        self
    }

    pub fn with_dimension(mut self, dimension: impl Into<String>) -> Self {
        self.dimension = Some(dimension.into());
        self
    }

    pub fn with_size(mut self, size: ItemSize) -> Self {
        self.size = size;
        self
    }

    pub fn is_uda(&self) -> bool {
        self.kind == ItemType::Uda
    }

    /// Resolve the item's dimension in `system`; dimensionless when none is declared.
    pub fn resolve_dimension(&self, system: &UnitSystem) -> DeckResult<Dimension> {
        match &self.dimension {
            Some(expr) => system.parse(expr),
            None => Ok(Dimension::dimensionless()),
        }
    }

    /// The UDA default, expressed in `system` (the deck's default unit system).
    pub fn uda_default(&self, system: &UnitSystem) -> DeckResult<Option<UdaValue>> {
        let dim = self.resolve_dimension(system)?;
        Ok(match &self.default {
            Some(DefaultValue::String(name)) => Some(UdaValue::symbolic(name.clone(), dim)),
            Some(other) => other.as_double().map(|v| UdaValue::literal(v, dim)),
            None => None,
        })
    }
}

/// Ordered item metadata for one record.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RecordSchema {
    pub items: Vec<ItemSchema>,
}

impl RecordSchema {
    pub fn new(items: Vec<ItemSchema>) -> Self {
        Self { items }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&ItemSchema> {
        self.items.get(index)
    }

    /// Upper bound on the number of values a record may hold.
    pub fn max_values(&self) -> Option<usize> {
        if self.items.iter().any(|i| i.size == ItemSize::All) {
            None
        } else {
            Some(self.items.len())
        }
    }
}

/// Schema for a whole keyword.
#[derive(Debug, Clone, PartialEq)]
pub struct KeywordSchema {
    pub name: String,
    pub records: Vec<RecordSchema>,
    /// A data keyword holds a single record with a single `All` item (e.g. PORO).
    pub data_keyword: bool,
}

impl KeywordSchema {
    pub fn new(name: impl Into<String>, records: Vec<RecordSchema>) -> Self {
        Self {
            name: name.into(),
            records,
            data_keyword: false,
        }
    }

    /// A keyword whose body is one flat array of values.
    pub fn data(name: impl Into<String>, item: ItemSchema) -> Self {
        Self {
            name: name.into(),
            records: vec![RecordSchema::new(vec![item.with_size(ItemSize::All)])],
            data_keyword: true,
        }
    }

    /// Schema of record `index`; records past the end reuse the last schema.
    pub fn record(&self, index: usize) -> Option<&RecordSchema> {
        self.records.get(index).or_else(|| self.records.last())
    }
}
