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

//! Centralized error messages for deck value parsing and UDQ evaluation.
//!
//! Keeping every message here gives callers one place to match wording
//! against diagnostics shown to deck authors.

use crate::error::DeckError;

// ==================== Token Errors ====================

/// Repeat count before `*` is not a non-negative integer.
pub fn invalid_repeat_count(token: &str) -> DeckError {
    DeckError::malformed_token(format!(
        "invalid repeat count in '{}': expected a non-negative integer before '*'",
        token
    ))
}

/// Repeat count exceeds the configured limit.
pub fn repeat_count_too_large(count: usize, limit: usize) -> DeckError {
    DeckError::limit(format!(
        "repeat count {} exceeds limit of {}",
        count, limit
    ))
}

/// Token exceeds maximum length limit.
pub fn token_too_long(length: usize, limit: usize) -> DeckError {
    DeckError::limit(format!(
        "token too long: {} bytes exceeds limit of {} bytes",
        length, limit
    ))
}

// ==================== Record Errors ====================

/// More values than the record schema has items.
pub fn too_many_values(item_count: usize) -> DeckError {
    DeckError::shape(format!(
        "too many values for record with {} items",
        item_count
    ))
}

/// Expanded record exceeds the configured value limit.
pub fn record_too_large(limit: usize) -> DeckError {
    DeckError::limit(format!(
        "record expands to more than {} values",
        limit
    ))
}

/// No schema for a record index.
pub fn missing_record_schema(keyword: &str, index: usize) -> DeckError {
    DeckError::shape(format!(
        "keyword {} has no schema for record {}",
        keyword, index
    ))
}

// ==================== Item Errors ====================

/// A value of the wrong type was placed into an item.
pub fn type_mismatch(item: &str, expected: &str, found: &str) -> DeckError {
    DeckError::malformed_token(format!(
        "item {} holds {} values, cannot store {} value",
        item, expected, found
    ))
}

/// Data of the wrong type was requested from an item.
pub fn wrong_item_type(item: &str, held: &str, requested: &str) -> DeckError {
    DeckError::malformed_token(format!(
        "tried to get {} data from item {} which holds {} values",
        requested, item, held
    ))
}

/// Numeric data requested over symbolic UDA values.
pub fn symbolic_in_numeric(item: &str, name: &str) -> DeckError {
    DeckError::unsupported_conversion(format!(
        "cannot produce numeric data from symbolic quantity '{}' in item {}",
        name, item
    ))
}

/// Bulk extraction over a position with neither value nor default.
pub fn missing_value(item: &str, index: usize) -> DeckError {
    DeckError::missing_value(format!(
        "item {} has no value at position {}",
        item, index
    ))
}

// ==================== Keyword Errors ====================

/// Array access on a keyword that is not a single data item.
pub fn not_a_data_keyword(keyword: &str) -> DeckError {
    DeckError::shape(format!(
        "keyword {} is not a data keyword with exactly one record and one item",
        keyword
    ))
}

// ==================== Evaluation Errors ====================

/// Interpolation table name is not defined.
pub fn unknown_table(name: &str) -> DeckError {
    DeckError::unknown_name(format!("undefined UDT table '{}'", name))
}

/// Matcher query without a factory for the topology.
pub fn matcher_unavailable(kind: &str) -> DeckError {
    DeckError::capability_unavailable(format!(
        "{} matching is not available: no {} topology in this model",
        kind, kind
    ))
}
