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

//! Parse options for building keywords from tokens.

use crate::limits::Limits;

/// Options controlling token expansion and keyword construction.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseOptions {
    /// Resource limits.
    pub limits: Limits,
    /// Strip one pair of enclosing single quotes from plain string tokens.
    /// Raw string items always keep their quotes.
    pub strip_quotes: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            limits: Limits::default(),
            strip_quotes: true,
        }
    }
}

impl ParseOptions {
    /// Create a new builder for ParseOptions.
    ///
    /// # Examples
    ///
    /// ```text
    /// let opts = ParseOptions::builder()
    ///     .max_repeat_count(10_000)
    ///     .strip_quotes(false)
    ///     .build();
    /// ```
    pub fn builder() -> ParseOptionsBuilder {
        ParseOptionsBuilder::new()
    }
}

/// Builder for ergonomic construction of ParseOptions.
#[derive(Debug, Clone)]
pub struct ParseOptionsBuilder {
    limits: Limits,
    strip_quotes: bool,
}

impl ParseOptionsBuilder {
    /// Create a new builder with default options.
    pub fn new() -> Self {
        Self {
            limits: Limits::default(),
            strip_quotes: true,
        }
    }

    /// Replace all limits at once.
    pub fn limits(mut self, limits: Limits) -> Self {
        self.limits = limits;
        self
    }

    /// Set the maximum repeat count in an `N*value` token.
    ///
    /// # Parameters
    ///
    /// - `count`: Maximum repeat count (default: 1M)
    pub fn max_repeat_count(mut self, count: usize) -> Self {
        self.limits.max_repeat_count = count;
        self
    }

    /// Set the maximum number of values in one record.
    ///
    /// # Parameters
    ///
    /// - `count`: Maximum values per record (default: 100M)
    pub fn max_record_values(mut self, count: usize) -> Self {
        self.limits.max_record_values = count;
        self
    }

    /// Set the maximum token length in bytes.
    pub fn max_token_length(mut self, length: usize) -> Self {
        self.limits.max_token_length = length;
        self
    }

    /// Set whether plain string tokens lose their enclosing quotes.
    pub fn strip_quotes(mut self, strip: bool) -> Self {
        self.strip_quotes = strip;
        self
    }

    /// Build the ParseOptions.
    pub fn build(self) -> ParseOptions {
        ParseOptions {
            limits: self.limits,
            strip_quotes: self.strip_quotes,
        }
    }
}

impl Default for ParseOptionsBuilder {
    fn default() -> Self {
        Self::new()
    }
}
