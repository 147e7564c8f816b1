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

//! Property-based tests for unit conversion round trips.

use proptest::prelude::*;
use resdeck_core::UnitSystem;

const DIMENSIONS: &[&str] = &[
    "1",
    "Length",
    "Time",
    "Mass",
    "Pressure",
    "Temperature",
    "AbsoluteTemperature",
    "LiquidSurfaceVolume",
    "GasSurfaceVolume",
    "ReservoirVolume",
    "Density",
    "Viscosity",
    "Permeability",
    "LiquidSurfaceVolume/Time",
    "GasSurfaceVolume/LiquidSurfaceVolume",
    "Pressure*Time/Length",
];

fn system() -> impl Strategy<Value = UnitSystem> {
    prop::sample::select(vec![
        UnitSystem::Metric,
        UnitSystem::Field,
        UnitSystem::Lab,
        UnitSystem::Input,
    ])
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(1000))]

    /// Property: from_si(to_si(v)) reproduces v within tolerance.
    #[test]
    fn prop_si_round_trip(
        system in system(),
        dim in prop::sample::select(DIMENSIONS.to_vec()),
        value in -1.0e6_f64..1.0e6
    ) {
        let d = system.parse(dim).unwrap();
        let back = d.from_si(d.to_si(value));
        let tolerance = 1e-9 * value.abs().max(1.0);
        prop_assert!((back - value).abs() <= tolerance, "{} {} {} -> {}", system, dim, value, back);
    }

    /// Property: Input units are the identity.
    #[test]
    fn prop_input_is_identity(
        dim in prop::sample::select(DIMENSIONS.to_vec()),
        value in -1.0e6_f64..1.0e6
    ) {
        let d = UnitSystem::Input.parse(dim).unwrap();
        prop_assert_eq!(d.to_si(value), value);
    }
}
