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

//! User defined tables (UDT): one-dimensional interpolation tables that
//! UDQ formulas look up by name.

use resdeck_core::{DeckError, DeckResult};
use std::cmp::Ordering;

/// How a table evaluates between and beyond its points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum UdtInterpolation {
    /// `NV`: value of the closest point; ties take the lower point.
    NearestNeighbour,
    /// `LC`: linear inside the range, end values outside.
    LinearClamp,
    /// `LL`: linear everywhere, extending the end segments.
    LinearExtrapolate,
}

impl UdtInterpolation {
    pub fn from_keyword(code: &str) -> Option<Self> {
        match code {
            "NV" => Some(Self::NearestNeighbour),
            "LC" => Some(Self::LinearClamp),
            "LL" => Some(Self::LinearExtrapolate),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Udt {
    x: Vec<f64>,
    y: Vec<f64>,
    interpolation: UdtInterpolation,
}

impl Udt {
    /// `x` must be non-empty, strictly increasing and as long as `y`.
    pub fn new(x: Vec<f64>, y: Vec<f64>, interpolation: UdtInterpolation) -> DeckResult<Self> {
        if x.is_empty() || x.len() != y.len() {
            return Err(DeckError::shape(format!(
                "UDT needs matching non-empty point lists, got {} x and {} y values",
                x.len(),
                y.len()
            )));
        }

        if x.windows(2).any(|w| w[0].partial_cmp(&w[1]) != Some(Ordering::Less)) {
            return Err(DeckError::shape("UDT x values must be strictly increasing"));
        }

        Ok(Self { x, y, interpolation })
    }

    pub fn interpolation(&self) -> UdtInterpolation {
        self.interpolation
    }

    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.x.iter().copied().zip(self.y.iter().copied())
    }

    pub fn eval(&self, x: f64) -> f64 {
        let n = self.x.len();
        if n == 1 {
            return self.y[0];
        }

        // First index with self.x[i] > x.
        let upper = self.x.partition_point(|&xi| xi <= x);

        match self.interpolation {
            UdtInterpolation::NearestNeighbour => {
                if upper == 0 {
                    return self.y[0];
                }
                if upper == n {
                    return self.y[n - 1];
                }
                let lower = upper - 1;
                if x - self.x[lower] <= self.x[upper] - x {
                    self.y[lower]
                } else {
                    self.y[upper]
                }
            }
            UdtInterpolation::LinearClamp => {
                if upper == 0 {
                    self.y[0]
                } else if upper == n {
                    self.y[n - 1]
                } else {
                    self.linear(upper - 1, x)
                }
            }
            UdtInterpolation::LinearExtrapolate => {
                let segment = upper.clamp(1, n - 1) - 1;
                self.linear(segment, x)
            }
        }
    }

    fn linear(&self, i: usize, x: f64) -> f64 {
        let (x0, x1) = (self.x[i], self.x[i + 1]);
        let (y0, y1) = (self.y[i], self.y[i + 1]);
        y0 + (y1 - y0) * (x - x0) / (x1 - x0)
    }
}
