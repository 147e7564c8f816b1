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

//! UDQ evaluation parameters (the `UDQPARAM` keyword).

/// Parameters shared by every UDQ evaluation of a run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UdqParams {
    /// Seed for the random number functions.
    pub random_seed: i64,
    /// Magnitude bound of values a UDQ may take.
    pub random_range: f64,
    /// Value stored for entities a UDQ leaves undefined.
    pub undefined_value: f64,
    /// Relative tolerance of the comparison operators.
    pub cmp_epsilon: f64,
}

impl Default for UdqParams {
    fn default() -> Self {
        Self {
            random_seed: 1,
            random_range: 1.0e20,
            undefined_value: 0.0,
            cmp_epsilon: 1.0e-4,
        }
    }
}

impl UdqParams {
    pub fn builder() -> UdqParamsBuilder {
        UdqParamsBuilder::new()
    }

    /// Equality within the relative comparison tolerance.
    pub fn approx_eq(&self, a: f64, b: f64) -> bool {
        if a == b {
            return true;
        }
        (a - b).abs() <= self.cmp_epsilon * a.abs().max(b.abs())
    }
}

/// Builder for [`UdqParams`].
#[derive(Debug, Clone, Default)]
pub struct UdqParamsBuilder {
    params: UdqParams,
}

impl UdqParamsBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn random_seed(mut self, seed: i64) -> Self {
        self.params.random_seed = seed;
        self
    }

    pub fn random_range(mut self, range: f64) -> Self {
        self.params.random_range = range;
        self
    }

    pub fn undefined_value(mut self, value: f64) -> Self {
        self.params.undefined_value = value;
        self
    }

    pub fn cmp_epsilon(mut self, epsilon: f64) -> Self {
        self.params.cmp_epsilon = epsilon;
        self
    }

    pub fn build(self) -> UdqParams {
        self.params
    }
}
