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

//! Keyword, record and item structure of a parsed deck.
//!
//! A [`DeckKeyword`] owns its [`DeckRecord`]s, each an ordered list of
//! [`DeckItem`]s positioned to match the keyword schema. Every item holds
//! values of exactly one declared type and remembers, per position, whether
//! the value came from the deck or from the schema default.

use crate::error::{DeckError, DeckResult};
use crate::errors::messages;
use crate::expand::{expand_record, ExpansionContext, RepeatToken};
use crate::options::ParseOptions;
use crate::schema::{DefaultValue, ItemSchema, ItemSize, ItemType, KeywordSchema, RecordSchema};
use crate::units::{Dimension, UnitSystem};
use crate::value::{DeckValue, ScalarValue, UdaValue};
use std::fmt;
use tracing::debug;

/// Where the value at an item position came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ValueStatus {
    /// Written in the deck.
    DeckValue,
    /// Defaulted, and the schema supplied a default.
    ValidDefault,
    /// Defaulted, but the schema has no default: the position has no value.
    EmptyDefault,
}

/// Typed storage for an item. `None` marks an [`ValueStatus::EmptyDefault`].
#[derive(Debug, Clone, PartialEq)]
enum ItemData {
    Int(Vec<Option<i64>>),
    Double(Vec<Option<f64>>),
    String(Vec<Option<String>>),
    RawString(Vec<Option<String>>),
    Uda(Vec<Option<UdaValue>>),
}

impl ItemData {
    fn for_type(kind: ItemType) -> Self {
        match kind {
            ItemType::Int => Self::Int(Vec::new()),
            ItemType::Double => Self::Double(Vec::new()),
            ItemType::String => Self::String(Vec::new()),
            ItemType::RawString => Self::RawString(Vec::new()),
            ItemType::Uda => Self::Uda(Vec::new()),
        }
    }
}

/// One item of a record.
#[derive(Debug, Clone, PartialEq)]
pub struct DeckItem {
    name: String,
    kind: ItemType,
    size: ItemSize,
    data: ItemData,
    status: Vec<ValueStatus>,
    default: Option<DefaultValue>,
    uda_default: Option<UdaValue>,
    /// Dimension of deck values (active unit system).
    active_dim: Dimension,
    /// Dimension of defaulted values (default unit system).
    default_dim: Dimension,
}

impl DeckItem {
    /// Create an empty item for `schema`.
    ///
    /// Deck values are expressed in `active`; schema defaults in `default_system`.
    pub fn new(
        schema: &ItemSchema,
        active: &UnitSystem,
        default_system: &UnitSystem,
    ) -> DeckResult<Self> {
        let (active_dim, default_dim) = match schema.kind {
            ItemType::Double | ItemType::Uda => (
                schema.resolve_dimension(active)?,
                schema.resolve_dimension(default_system)?,
            ),
            _ => (Dimension::dimensionless(), Dimension::dimensionless()),
        };

        let uda_default = if schema.is_uda() {
            schema.uda_default(default_system)?
        } else {
            None
        };

        Ok(Self {
            name: schema.name.clone(),
            kind: schema.kind,
            size: schema.size,
            data: ItemData::for_type(schema.kind),
            status: Vec::new(),
            default: schema.default.clone(),
            uda_default,
            active_dim,
            default_dim,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> ItemType {
        self.kind
    }

    pub fn size(&self) -> ItemSize {
        self.size
    }

    pub fn len(&self) -> usize {
        self.status.len()
    }

    pub fn is_empty(&self) -> bool {
        self.status.is_empty()
    }

    pub fn is_int(&self) -> bool {
        self.kind == ItemType::Int
    }

    pub fn is_double(&self) -> bool {
        self.kind == ItemType::Double
    }

    /// True for both plain and raw string items.
    pub fn is_string(&self) -> bool {
        matches!(self.kind, ItemType::String | ItemType::RawString)
    }

    pub fn is_raw_string(&self) -> bool {
        self.kind == ItemType::RawString
    }

    pub fn is_uda(&self) -> bool {
        self.kind == ItemType::Uda
    }

    pub fn active_dimension(&self) -> &Dimension {
        &self.active_dim
    }

    pub fn default_dimension(&self) -> &Dimension {
        &self.default_dim
    }

    // ==================== Mutation ====================

    /// Append a value, checking it against the declared type.
    ///
    /// Integers widen into double and UDA items; numbers placed into a UDA
    /// item take the item's active dimension.
    pub fn push(&mut self, value: DeckValue) -> DeckResult<()> {
        if value.is_default() {
            self.push_default();
            return Ok(());
        }

        match (&mut self.data, value) {
            (ItemData::Int(data), DeckValue::Int(n)) => data.push(Some(n)),
            (ItemData::Double(data), DeckValue::Int(n)) => data.push(Some(n as f64)),
            (ItemData::Double(data), DeckValue::Double(f)) => data.push(Some(f)),
            (ItemData::String(data), DeckValue::Str(s)) => data.push(Some(s)),
            (ItemData::RawString(data), DeckValue::Str(s)) => data.push(Some(s)),
            (ItemData::Uda(data), DeckValue::Uda(u)) => data.push(Some(u)),
            (ItemData::Uda(data), DeckValue::Int(n)) => {
                data.push(Some(UdaValue::literal(n as f64, self.active_dim.clone())))
            }
            (ItemData::Uda(data), DeckValue::Double(f)) => {
                data.push(Some(UdaValue::literal(f, self.active_dim.clone())))
            }
            (ItemData::Uda(data), DeckValue::Str(s)) => {
                data.push(Some(UdaValue::symbolic(s, self.active_dim.clone())))
            }
            (_, other) => {
                return Err(messages::type_mismatch(
                    &self.name,
                    &self.kind.to_string(),
                    other.type_name(),
                ))
            }
        }

        self.status.push(ValueStatus::DeckValue);
        Ok(())
    }

    /// Append the schema default, or an empty position when there is none.
    pub fn push_default(&mut self) {
        let present = match &mut self.data {
            ItemData::Int(data) => {
                let v = match &self.default {
                    Some(DefaultValue::Int(n)) => Some(*n),
                    _ => None,
                };
                data.push(v);
                v.is_some()
            }
            ItemData::Double(data) => {
                let v = self.default.as_ref().and_then(DefaultValue::as_double);
                data.push(v);
                v.is_some()
            }
            ItemData::String(data) | ItemData::RawString(data) => {
                let v = match &self.default {
                    Some(DefaultValue::String(s)) => Some(s.clone()),
                    _ => None,
                };
                let present = v.is_some();
                data.push(v);
                present
            }
            ItemData::Uda(data) => {
                let v = self.uda_default.clone();
                let present = v.is_some();
                data.push(v);
                present
            }
        };

        self.status.push(if present {
            ValueStatus::ValidDefault
        } else {
            ValueStatus::EmptyDefault
        });
    }

    // ==================== Status ====================

    pub fn status(&self, index: usize) -> Option<ValueStatus> {
        self.status.get(index).copied()
    }

    /// True when position `index` holds a deck value or a valid default.
    pub fn has_value(&self, index: usize) -> bool {
        matches!(
            self.status(index),
            Some(ValueStatus::DeckValue | ValueStatus::ValidDefault)
        )
    }

    /// True when position `index` was defaulted, with or without a value.
    pub fn default_applied(&self, index: usize) -> bool {
        matches!(
            self.status(index),
            Some(ValueStatus::ValidDefault | ValueStatus::EmptyDefault)
        )
    }

    // ==================== Single-position access ====================

    /// The value at `index` as a scalar, without unit conversion.
    ///
    /// Raw string items yield [`ScalarValue::RawStr`]; a symbolic UDA yields
    /// its name. Empty defaults and positions past the end are `None`.
    pub fn get(&self, index: usize) -> Option<ScalarValue> {
        match &self.data {
            ItemData::Int(data) => data.get(index).copied().flatten().map(ScalarValue::Int),
            ItemData::Double(data) => data.get(index).copied().flatten().map(ScalarValue::Double),
            ItemData::String(data) => data.get(index).cloned().flatten().map(ScalarValue::Str),
            ItemData::RawString(data) => {
                data.get(index).cloned().flatten().map(ScalarValue::RawStr)
            }
            ItemData::Uda(data) => match data.get(index)? {
                Some(UdaValue::Literal { value, .. }) => Some(ScalarValue::Double(*value)),
                Some(UdaValue::Symbolic { name, .. }) => Some(ScalarValue::Str(name.clone())),
                None => None,
            },
        }
    }

    pub fn get_int(&self, index: usize) -> DeckResult<Option<i64>> {
        match &self.data {
            ItemData::Int(data) => Ok(data.get(index).copied().flatten()),
            _ => Err(self.wrong_type("int")),
        }
    }

    /// The value at `index` as written, without unit conversion.
    pub fn get_raw(&self, index: usize) -> DeckResult<Option<f64>> {
        match &self.data {
            ItemData::Double(data) => Ok(data.get(index).copied().flatten()),
            ItemData::Uda(data) => match data.get(index) {
                Some(Some(uda)) => self.uda_number(uda).map(Some),
                _ => Ok(None),
            },
            _ => Err(self.wrong_type("double")),
        }
    }

    /// The value at `index` converted to SI.
    pub fn get_si(&self, index: usize) -> DeckResult<Option<f64>> {
        match &self.data {
            ItemData::Double(data) => Ok(data
                .get(index)
                .copied()
                .flatten()
                .map(|raw| self.dimension_at(index).to_si(raw))),
            ItemData::Uda(data) => match data.get(index) {
                Some(Some(uda)) => {
                    self.uda_number(uda)?;
                    uda.to_si().map(Some)
                }
                _ => Ok(None),
            },
            _ => Err(self.wrong_type("double")),
        }
    }

    pub fn get_uda(&self, index: usize) -> DeckResult<Option<&UdaValue>> {
        match &self.data {
            ItemData::Uda(data) => Ok(data.get(index).and_then(Option::as_ref)),
            _ => Err(self.wrong_type("UDA")),
        }
    }

    /// String at `index`; plain and raw string items read alike.
    pub fn get_str(&self, index: usize) -> DeckResult<Option<&str>> {
        match &self.data {
            ItemData::String(data) | ItemData::RawString(data) => {
                Ok(data.get(index).and_then(|s| s.as_deref()))
            }
            _ => Err(self.wrong_type("string")),
        }
    }

    /// True when every present UDA value is a literal number.
    pub fn is_uda_numeric(&self) -> DeckResult<bool> {
        match &self.data {
            ItemData::Uda(data) => Ok(data.iter().flatten().all(UdaValue::is_numeric)),
            _ => Err(DeckError::malformed_token(format!(
                "item {} does not support user defined quantities",
                self.name
            ))),
        }
    }

    // ==================== Bulk access ====================

    pub fn int_data(&self) -> DeckResult<Vec<i64>> {
        match &self.data {
            ItemData::Int(data) => self.collect(data.iter().map(|v| Ok(*v))),
            _ => Err(self.wrong_type("int")),
        }
    }

    /// All values as written, without unit conversion.
    pub fn raw_data(&self) -> DeckResult<Vec<f64>> {
        match &self.data {
            ItemData::Double(data) => self.collect(data.iter().map(|v| Ok(*v))),
            ItemData::Uda(data) => self.collect(
                data.iter()
                    .map(|v| v.as_ref().map(|u| self.uda_number(u)).transpose()),
            ),
            _ => Err(self.wrong_type("double")),
        }
    }

    /// All values converted to SI with the dimension recorded for each position.
    pub fn si_data(&self) -> DeckResult<Vec<f64>> {
        (0..self.len())
            .map(|i| {
                self.get_si(i)?
                    .ok_or_else(|| messages::missing_value(&self.name, i))
            })
            .collect()
    }

    pub fn string_data(&self) -> DeckResult<Vec<String>> {
        match &self.data {
            ItemData::String(data) | ItemData::RawString(data) => {
                self.collect(data.iter().map(|v| Ok(v.clone())))
            }
            _ => Err(self.wrong_type("string")),
        }
    }

    pub fn uda_data(&self) -> DeckResult<Vec<UdaValue>> {
        match &self.data {
            ItemData::Uda(data) => self.collect(data.iter().map(|v| Ok(v.clone()))),
            _ => Err(self.wrong_type("UDA")),
        }
    }

    // ==================== Helpers ====================

    fn collect<T>(
        &self,
        values: impl Iterator<Item = DeckResult<Option<T>>>,
    ) -> DeckResult<Vec<T>> {
        values
            .enumerate()
            .map(|(i, v)| v?.ok_or_else(|| messages::missing_value(&self.name, i)))
            .collect()
    }

    fn uda_number(&self, uda: &UdaValue) -> DeckResult<f64> {
        match uda {
            UdaValue::Literal { value, .. } => Ok(*value),
            UdaValue::Symbolic { name, .. } => Err(messages::symbolic_in_numeric(&self.name, name)),
        }
    }

    fn dimension_at(&self, index: usize) -> &Dimension {
        match self.status(index) {
            Some(ValueStatus::ValidDefault) => &self.default_dim,
            _ => &self.active_dim,
        }
    }

    fn wrong_type(&self, requested: &str) -> DeckError {
        messages::wrong_item_type(&self.name, &self.kind.to_string(), requested)
    }

    fn fmt_value(&self, f: &mut fmt::Formatter<'_>, index: usize) -> fmt::Result {
        if self.status(index) != Some(ValueStatus::DeckValue) {
            return write!(f, "1*");
        }
        match self.get(index) {
            Some(ScalarValue::Str(s)) => write!(f, "'{}'", s),
            Some(value) => write!(f, "{}", value),
            None => write!(f, "1*"),
        }
    }
}

impl fmt::Display for DeckItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in 0..self.len() {
            if i > 0 {
                write!(f, " ")?;
            }
            self.fmt_value(f, i)?;
        }
        Ok(())
    }
}

/// One record of a keyword.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DeckRecord {
    items: Vec<DeckItem>,
}

impl DeckRecord {
    pub fn new(items: Vec<DeckItem>) -> Self {
        Self { items }
    }

    /// Place `values` positionally into the items of `schema`.
    ///
    /// String entries written with repeat syntax (`2*`, `3*OPEN`) are expanded
    /// against the items they land on; everything else is placed as given.
    /// Trailing single-value items that receive nothing are defaulted.
    pub fn from_values(
        schema: &RecordSchema,
        values: Vec<DeckValue>,
        active: &UnitSystem,
        default_system: &UnitSystem,
        options: &ParseOptions,
    ) -> DeckResult<Self> {
        let limits = &options.limits;
        let mut expanded = Vec::with_capacity(values.len());
        let mut index = 0;

        for value in values {
            let text = match value {
                DeckValue::Str(text) => text,
                other => {
                    expanded.push(other);
                    index = next_position(schema, index);
                    continue;
                }
            };

            let split = RepeatToken::parse(&text, limits)?;
            if !split.repeated {
                expanded.push(DeckValue::Str(text));
                index = next_position(schema, index);
                continue;
            }

            for _ in 0..split.count {
                let item = schema
                    .get(index)
                    .ok_or_else(|| messages::too_many_values(schema.len()))?;
                expanded.push(ExpansionContext::new(item, active, options)?.infer(&split)?);
                if expanded.len() > limits.max_record_values {
                    return Err(messages::record_too_large(limits.max_record_values));
                }
                index = next_position(schema, index);
            }
        }

        Self::from_expanded(schema, expanded, active, default_system)
    }

    /// Place values that are already expanded, one per item position.
    pub(crate) fn from_expanded(
        schema: &RecordSchema,
        values: Vec<DeckValue>,
        active: &UnitSystem,
        default_system: &UnitSystem,
    ) -> DeckResult<Self> {
        let mut items = schema
            .items
            .iter()
            .map(|item| DeckItem::new(item, active, default_system))
            .collect::<DeckResult<Vec<_>>>()?;

        let mut index = 0;
        for value in values {
            let item = items
                .get_mut(index)
                .ok_or_else(|| messages::too_many_values(schema.len()))?;
            item.push(value)?;
            if item.size() == ItemSize::Single {
                index += 1;
            }
        }

        for item in items.iter_mut() {
            if item.size() == ItemSize::Single && item.is_empty() {
                item.push_default();
            }
        }

        Ok(Self { items })
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&DeckItem> {
        self.items.get(index)
    }

    pub fn get_by_name(&self, name: &str) -> Option<&DeckItem> {
        self.items.iter().find(|item| item.name() == name)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DeckItem> {
        self.items.iter()
    }
}

impl<'a> IntoIterator for &'a DeckRecord {
    type Item = &'a DeckItem;
    type IntoIter = std::slice::Iter<'a, DeckItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl fmt::Display for DeckRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for item in self.items.iter().filter(|i| !i.is_empty()) {
            write!(f, "{} ", item)?;
        }
        write!(f, "/")
    }
}

/// Position of the item after one value lands at `index`; an `All` item keeps absorbing.
fn next_position(schema: &RecordSchema, index: usize) -> usize {
    match schema.get(index) {
        Some(item) if item.size == ItemSize::All => index,
        _ => index + 1,
    }
}

/// A keyword and its records.
#[derive(Debug, Clone, PartialEq)]
pub struct DeckKeyword {
    name: String,
    records: Vec<DeckRecord>,
}

impl DeckKeyword {
    /// An empty keyword.
    pub fn new(schema: &KeywordSchema) -> Self {
        Self {
            name: schema.name.clone(),
            records: Vec::new(),
        }
    }

    /// Build from already typed values, one list per record.
    ///
    /// String entries may use repeat syntax, as in a deck record.
    pub fn from_values(
        schema: &KeywordSchema,
        records: Vec<Vec<DeckValue>>,
        active: &UnitSystem,
        default_system: &UnitSystem,
        options: &ParseOptions,
    ) -> DeckResult<Self> {
        Self::assemble(schema, records, active, options, |record_schema, values| {
            DeckRecord::from_values(record_schema, values, active, default_system, options)
        })
    }

    /// Build from raw deck tokens, one token list per record.
    pub fn from_tokens(
        schema: &KeywordSchema,
        records: &[Vec<&str>],
        active: &UnitSystem,
        default_system: &UnitSystem,
        options: &ParseOptions,
    ) -> DeckResult<Self> {
        let values = records
            .iter()
            .enumerate()
            .map(|(index, tokens)| {
                let record_schema = schema
                    .record(index)
                    .ok_or_else(|| messages::missing_record_schema(&schema.name, index))?;
                expand_record(tokens, record_schema, active, options).map_err(|e| {
                    e.with_context(format!("in keyword {} record {}", schema.name, index + 1))
                })
            })
            .collect::<DeckResult<Vec<_>>>()?;

        // Tokens are expanded already; a quoted 'P*' must not be split again
        Self::assemble(schema, values, active, options, |record_schema, values| {
            DeckRecord::from_expanded(record_schema, values, active, default_system)
        })
    }

    fn assemble(
        schema: &KeywordSchema,
        records: Vec<Vec<DeckValue>>,
        active: &UnitSystem,
        options: &ParseOptions,
        build: impl Fn(&RecordSchema, Vec<DeckValue>) -> DeckResult<DeckRecord>,
    ) -> DeckResult<Self> {
        let mut keyword = Self::new(schema);

        for (index, values) in records.into_iter().enumerate() {
            let context = || format!("in keyword {} record {}", schema.name, index + 1);

            if values.len() > options.limits.max_record_values {
                return Err(messages::record_too_large(options.limits.max_record_values)
                    .with_context(context()));
            }

            let record_schema = schema
                .record(index)
                .ok_or_else(|| messages::missing_record_schema(&schema.name, index))?;
            let record = build(record_schema, values).map_err(|e| e.with_context(context()))?;
            keyword.records.push(record);
        }

        debug!(
            "Built keyword {}: {} records in {} units",
            keyword.name,
            keyword.records.len(),
            active
        );
        Ok(keyword)
    }

    /// Build a data keyword from integers.
    pub fn from_int_data(schema: &KeywordSchema, data: Vec<i64>) -> DeckResult<Self> {
        let item = Self::data_item_schema(schema, ItemType::Int)?;
        let values = data.into_iter().map(DeckValue::Int).collect();
        let record = DeckRecord::from_expanded(
            &RecordSchema::new(vec![item.clone()]),
            values,
            &UnitSystem::Input,
            &UnitSystem::Input,
        )?;
        Ok(Self {
            name: schema.name.clone(),
            records: vec![record],
        })
    }

    /// Build a data keyword from doubles expressed in `active` units.
    pub fn from_double_data(
        schema: &KeywordSchema,
        data: Vec<f64>,
        active: &UnitSystem,
        default_system: &UnitSystem,
    ) -> DeckResult<Self> {
        let item = Self::data_item_schema(schema, ItemType::Double)?;
        let values = data.into_iter().map(DeckValue::Double).collect();
        let record = DeckRecord::from_expanded(
            &RecordSchema::new(vec![item.clone()]),
            values,
            active,
            default_system,
        )?;
        Ok(Self {
            name: schema.name.clone(),
            records: vec![record],
        })
    }

    fn data_item_schema(schema: &KeywordSchema, kind: ItemType) -> DeckResult<&ItemSchema> {
        let item = schema
            .records
            .first()
            .and_then(|r| r.get(0))
            .filter(|_| schema.data_keyword)
            .ok_or_else(|| messages::not_a_data_keyword(&schema.name))?;

        if item.kind != kind {
            return Err(messages::type_mismatch(
                &item.name,
                &item.kind.to_string(),
                &kind.to_string(),
            ));
        }
        Ok(item)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn record(&self, index: usize) -> Option<&DeckRecord> {
        self.records.get(index)
    }

    pub fn add_record(&mut self, record: DeckRecord) {
        self.records.push(record);
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DeckRecord> {
        self.records.iter()
    }

    /// The single item of a data keyword.
    pub fn data_item(&self) -> DeckResult<&DeckItem> {
        match self.records.as_slice() {
            [record] if record.len() == 1 => {
                record.get(0).ok_or_else(|| messages::not_a_data_keyword(&self.name))
            }
            _ => Err(messages::not_a_data_keyword(&self.name)),
        }
    }

    pub fn int_data(&self) -> DeckResult<Vec<i64>> {
        self.data_item()?.int_data()
    }

    pub fn raw_data(&self) -> DeckResult<Vec<f64>> {
        self.data_item()?.raw_data()
    }

    pub fn si_data(&self) -> DeckResult<Vec<f64>> {
        self.data_item()?.si_data()
    }

    pub fn string_data(&self) -> DeckResult<Vec<String>> {
        self.data_item()?.string_data()
    }
}

impl<'a> IntoIterator for &'a DeckKeyword {
    type Item = &'a DeckRecord;
    type IntoIter = std::slice::Iter<'a, DeckRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

impl fmt::Display for DeckKeyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.name)?;
        for record in &self.records {
            writeln!(f, "  {}", record)?;
        }
        Ok(())
    }
}
