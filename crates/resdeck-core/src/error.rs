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

//! Error types for deck value parsing and UDQ evaluation.

use std::fmt;
use thiserror::Error;

/// The kind of error that occurred.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeckErrorKind {
    /// Malformed repeat count or a value that cannot live in the requested item type.
    MalformedToken,
    /// Numeric data requested from a symbolic UDA value.
    UnsupportedConversion,
    /// Unknown interpolation table or other named collaborator entry.
    UnknownName,
    /// Matcher query issued without a matcher factory.
    CapabilityUnavailable,
    /// Record longer than its schema, or keyword is not a single data item.
    Shape,
    /// Bulk extraction over a position without a value or default.
    MissingValue,
    /// Unknown or non-composable dimension.
    Dimension,
    /// Configured limit exceeded.
    Limit,
}

impl fmt::Display for DeckErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedToken => write!(f, "MalformedToken"),
            Self::UnsupportedConversion => write!(f, "UnsupportedConversion"),
            Self::UnknownName => write!(f, "UnknownName"),
            Self::CapabilityUnavailable => write!(f, "CapabilityUnavailable"),
            Self::Shape => write!(f, "ShapeError"),
            Self::MissingValue => write!(f, "MissingValue"),
            Self::Dimension => write!(f, "DimensionError"),
            Self::Limit => write!(f, "LimitExceeded"),
        }
    }
}

/// An error raised by the deck value engine.
#[derive(Debug, Clone, Error)]
#[error("{kind}: {message}")]
pub struct DeckError {
    /// The kind of error.
    pub kind: DeckErrorKind,
    /// Human-readable error message.
    pub message: String,
    /// Additional context (e.g., "in keyword WCONPROD record 2").
    pub context: Option<String>,
}

impl DeckError {
    /// Create a new error.
    pub fn new(kind: DeckErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            context: None,
        }
    }

    /// Add context information.
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    // Convenience constructors for each error kind
    pub fn malformed_token(message: impl Into<String>) -> Self {
        Self::new(DeckErrorKind::MalformedToken, message)
    }

    pub fn unsupported_conversion(message: impl Into<String>) -> Self {
        Self::new(DeckErrorKind::UnsupportedConversion, message)
    }

    pub fn unknown_name(message: impl Into<String>) -> Self {
        Self::new(DeckErrorKind::UnknownName, message)
    }

    pub fn capability_unavailable(message: impl Into<String>) -> Self {
        Self::new(DeckErrorKind::CapabilityUnavailable, message)
    }

    pub fn shape(message: impl Into<String>) -> Self {
        Self::new(DeckErrorKind::Shape, message)
    }

    pub fn missing_value(message: impl Into<String>) -> Self {
        Self::new(DeckErrorKind::MissingValue, message)
    }

    pub fn dimension(message: impl Into<String>) -> Self {
        Self::new(DeckErrorKind::Dimension, message)
    }

    pub fn limit(message: impl Into<String>) -> Self {
        Self::new(DeckErrorKind::Limit, message)
    }
}

/// Result type for deck operations.
pub type DeckResult<T> = Result<T, DeckError>;
