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

//! Value types for deck items.

use crate::error::{DeckError, DeckResult};
use crate::units::Dimension;

/// A scalar value in a deck record.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScalarValue {
    /// Integer value.
    Int(i64),
    /// Floating-point value.
    Double(f64),
    /// String value (quotes already stripped).
    Str(String),
    /// String value kept verbatim, quotes included.
    RawStr(String),
}

impl ScalarValue {
    pub fn is_int(&self) -> bool {
        matches!(self, Self::Int(_))
    }

    pub fn is_double(&self) -> bool {
        matches!(self, Self::Double(_))
    }

    /// Returns true for both plain and raw strings.
    pub fn is_string(&self) -> bool {
        matches!(self, Self::Str(_) | Self::RawStr(_))
    }

    /// Try to get the value as an integer.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Try to get the value as a double. Integers widen.
    pub fn as_double(&self) -> Option<f64> {
        match self {
            Self::Double(n) => Some(*n),
            Self::Int(n) => Some(*n as f64),
            _ => None,
        }
    }

    /// Try to get the value as a string. Raw strings read the same way.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) | Self::RawStr(s) => Some(s),
            _ => None,
        }
    }
}

impl std::fmt::Display for ScalarValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Int(n) => write!(f, "{}", n),
            Self::Double(n) => write!(f, "{}", n),
            Self::Str(s) | Self::RawStr(s) => write!(f, "{}", s),
        }
    }
}

/// A user-defined argument: a literal number or the name of a UDQ/summary key.
///
/// The literal's dimension is the unit it was written in, not yet converted.
/// A symbolic value carries the item's default dimension.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum UdaValue {
    Literal { value: f64, dim: Dimension },
    Symbolic { name: String, dim: Dimension },
}

impl UdaValue {
    pub fn literal(value: f64, dim: Dimension) -> Self {
        Self::Literal { value, dim }
    }

    pub fn symbolic(name: impl Into<String>, dim: Dimension) -> Self {
        Self::Symbolic {
            name: name.into(),
            dim,
        }
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, Self::Literal { .. })
    }

    pub fn as_double(&self) -> Option<f64> {
        match self {
            Self::Literal { value, .. } => Some(*value),
            Self::Symbolic { .. } => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Symbolic { name, .. } => Some(name),
            Self::Literal { .. } => None,
        }
    }

    pub fn dimension(&self) -> &Dimension {
        match self {
            Self::Literal { dim, .. } | Self::Symbolic { dim, .. } => dim,
        }
    }

    /// The literal in SI units.
    pub fn to_si(&self) -> DeckResult<f64> {
        match self {
            Self::Literal { value, dim } => Ok(dim.to_si(*value)),
            Self::Symbolic { name, .. } => Err(DeckError::unsupported_conversion(format!(
                "cannot produce numeric data from symbolic quantity '{}'",
                name
            ))),
        }
    }
}

impl std::fmt::Display for UdaValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Literal { value, .. } => write!(f, "UDAValue(value = {})", value),
            Self::Symbolic { name, .. } => write!(f, "UDAValue(value = {})", name),
        }
    }
}

/// One value supplied to a record, before it is placed into an item.
#[derive(Debug, Clone, PartialEq)]
pub enum DeckValue {
    Int(i64),
    Double(f64),
    Str(String),
    Uda(UdaValue),
    /// Apply the item's schema default at this position.
    Default,
}

impl DeckValue {
    pub fn is_default(&self) -> bool {
        matches!(self, Self::Default)
    }

    pub(crate) fn type_name(&self) -> &'static str {
        match self {
            Self::Int(_) => "int",
            Self::Double(_) => "double",
            Self::Str(_) => "string",
            Self::Uda(_) => "UDA",
            Self::Default => "default",
        }
    }
}

impl From<i64> for DeckValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<f64> for DeckValue {
    fn from(value: f64) -> Self {
        Self::Double(value)
    }
}

impl From<&str> for DeckValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<UdaValue> for DeckValue {
    fn from(value: UdaValue) -> Self {
        Self::Uda(value)
    }
}

/// True iff `s` is non-empty and every character is an ASCII decimal digit.
///
/// No sign, decimal point or exponent is accepted, so `"3"` passes while
/// `"-3"` and `"3.0"` do not.
pub fn is_int(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}
