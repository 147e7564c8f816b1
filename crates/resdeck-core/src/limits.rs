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

//! Resource limits for deck value parsing.

/// Configurable limits for token expansion.
///
/// A repeat count such as `100000000*` would otherwise allocate without bound,
/// so every expansion is checked against these values.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Limits {
    /// Maximum repeat count in an `N*value` token (default: 1M).
    pub max_repeat_count: usize,
    /// Maximum number of values produced for a single record (default: 100M).
    pub max_record_values: usize,
    /// Maximum token length in bytes (default: 1MB).
    pub max_token_length: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_repeat_count: 1_000_000,
            max_record_values: 100_000_000,
            max_token_length: 1024 * 1024, // 1MB
        }
    }
}

impl Limits {
    /// Create limits with no restrictions (for testing).
    pub fn unlimited() -> Self {
        Self {
            max_repeat_count: usize::MAX,
            max_record_values: usize::MAX,
            max_token_length: usize::MAX,
        }
    }
}
