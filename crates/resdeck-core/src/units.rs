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

//! Physical dimensions and unit systems.
//!
//! A [`Dimension`] converts between a value expressed in a deck's unit
//! system ("raw") and the canonical SI representation used for computation:
//!
//! ```text
//! si  = raw * si_scaling + si_offset
//! raw = (si - si_offset) / si_scaling
//! ```
//!
//! A [`UnitSystem`] resolves dimension expressions such as `Length`,
//! `LiquidSurfaceVolume/Time` or `Length*Length` into a [`Dimension`].

use crate::error::{DeckError, DeckResult};
use std::fmt;

/// A physical dimension with its conversion to SI units.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Dimension {
    name: String,
    si_scaling: f64,
    si_offset: f64,
}

impl Dimension {
    /// Create a dimension from its SI scaling and offset.
    pub fn new(name: impl Into<String>, si_scaling: f64, si_offset: f64) -> Self {
        Self {
            name: name.into(),
            si_scaling,
            si_offset,
        }
    }

    /// The identity dimension.
    pub fn dimensionless() -> Self {
        Self::new("1", 1.0, 0.0)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn si_scaling(&self) -> f64 {
        self.si_scaling
    }

    pub fn si_offset(&self) -> f64 {
        self.si_offset
    }

    /// Convert a raw value to SI.
    pub fn to_si(&self, raw: f64) -> f64 {
        raw * self.si_scaling + self.si_offset
    }

    /// Convert an SI value back to the raw unit.
    pub fn from_si(&self, si: f64) -> f64 {
        (si - self.si_offset) / self.si_scaling
    }

    /// Offset dimensions (e.g. Celsius) cannot be multiplied or divided.
    pub fn is_compositable(&self) -> bool {
        self.si_offset == 0.0
    }

    pub fn is_dimensionless(&self) -> bool {
        self.si_scaling == 1.0 && self.si_offset == 0.0
    }
}

impl Default for Dimension {
    fn default() -> Self {
        Self::dimensionless()
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// The unit system a deck is written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum UnitSystem {
    Metric,
    Field,
    Lab,
    /// Values already in SI; every dimension is the identity.
    Input,
}

const PSI: f64 = 6894.757293168361;
const STB: f64 = 0.158987294928;
const CUBIC_FOOT: f64 = 0.028316846592;
const DARCY: f64 = 9.869233e-13;

impl UnitSystem {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Metric => "METRIC",
            Self::Field => "FIELD",
            Self::Lab => "LAB",
            Self::Input => "INPUT",
        }
    }

    /// Look up a deck unit-system keyword (`METRIC`, `FIELD`, `LAB`, `INPUT`).
    pub fn from_keyword(name: &str) -> Option<Self> {
        match name {
            "METRIC" => Some(Self::Metric),
            "FIELD" => Some(Self::Field),
            "LAB" => Some(Self::Lab),
            "INPUT" => Some(Self::Input),
            _ => None,
        }
    }

    /// SI scaling and offset of a base dimension.
    fn base(&self, name: &str) -> Option<(f64, f64)> {
        if name == "1" {
            return Some((1.0, 0.0));
        }

        let entry = match self {
            Self::Metric => match name {
                "Length" => (1.0, 0.0),
                "Time" => (86_400.0, 0.0),
                "Mass" => (1.0, 0.0),
                "Pressure" => (1.0e5, 0.0),
                "Temperature" => (1.0, 273.15),
                "AbsoluteTemperature" => (1.0, 0.0),
                "LiquidSurfaceVolume" | "GasSurfaceVolume" | "ReservoirVolume" => (1.0, 0.0),
                "Density" => (1.0, 0.0),
                "Viscosity" => (1.0e-3, 0.0),
                "Permeability" => (DARCY * 1.0e-3, 0.0),
                _ => return None,
            },
            Self::Field => match name {
                "Length" => (0.3048, 0.0),
                "Time" => (86_400.0, 0.0),
                "Mass" => (0.453_592_37, 0.0),
                "Pressure" => (PSI, 0.0),
                "Temperature" => (5.0 / 9.0, 459.67 * 5.0 / 9.0),
                "AbsoluteTemperature" => (5.0 / 9.0, 0.0),
                "LiquidSurfaceVolume" | "ReservoirVolume" => (STB, 0.0),
                "GasSurfaceVolume" => (1000.0 * CUBIC_FOOT, 0.0),
                "Density" => (0.453_592_37 / CUBIC_FOOT, 0.0),
                "Viscosity" => (1.0e-3, 0.0),
                "Permeability" => (DARCY * 1.0e-3, 0.0),
                _ => return None,
            },
            Self::Lab => match name {
                "Length" => (0.01, 0.0),
                "Time" => (3600.0, 0.0),
                "Mass" => (1.0e-3, 0.0),
                "Pressure" => (101_325.0, 0.0),
                "Temperature" => (1.0, 273.15),
                "AbsoluteTemperature" => (1.0, 0.0),
                "LiquidSurfaceVolume" | "GasSurfaceVolume" | "ReservoirVolume" => (1.0e-6, 0.0),
                "Density" => (1000.0, 0.0),
                "Viscosity" => (1.0e-3, 0.0),
                "Permeability" => (DARCY * 1.0e-3, 0.0),
                _ => return None,
            },
            Self::Input => match name {
                "Length" | "Time" | "Mass" | "Pressure" | "Temperature"
                | "AbsoluteTemperature" | "LiquidSurfaceVolume" | "GasSurfaceVolume"
                | "ReservoirVolume" | "Density" | "Viscosity" | "Permeability" => (1.0, 0.0),
                _ => return None,
            },
        };

        Some(entry)
    }

    /// Resolve a dimension expression like `LiquidSurfaceVolume/Time`.
    ///
    /// The part before the first `/` is the numerator; every `/`-separated
    /// part after it divides. Each part may be a `*`-product of base names.
    pub fn parse(&self, expr: &str) -> DeckResult<Dimension> {
        let expr = expr.trim();
        let mut parts = expr.split('/');
        let numerator = parts.next().unwrap_or("");
        let denominators: Vec<&str> = parts.collect();

        let factor_count = numerator.split('*').count()
            + denominators
                .iter()
                .map(|d| d.split('*').count())
                .sum::<usize>();

        if factor_count == 1 {
            let (scaling, offset) = self.lookup(expr)?;
            return Ok(Dimension::new(expr, scaling, offset));
        }

        let mut scaling = self.product(numerator, expr)?;
        for denominator in denominators {
            scaling /= self.product(denominator, expr)?;
        }

        Ok(Dimension::new(expr, scaling, 0.0))
    }

    fn lookup(&self, name: &str) -> DeckResult<(f64, f64)> {
        self.base(name.trim()).ok_or_else(|| {
            DeckError::dimension(format!(
                "unknown dimension '{}' in unit system {}",
                name.trim(),
                self.name()
            ))
        })
    }

    fn product(&self, factors: &str, expr: &str) -> DeckResult<f64> {
        let mut scaling = 1.0;
        for factor in factors.split('*') {
            let (s, offset) = self.lookup(factor)?;
            if offset != 0.0 {
                return Err(DeckError::dimension(format!(
                    "dimension '{}' has an offset and cannot be composed in '{}'",
                    factor.trim(),
                    expr
                )));
            }
            scaling *= s;
        }
        Ok(scaling)
    }
}

impl fmt::Display for UnitSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
