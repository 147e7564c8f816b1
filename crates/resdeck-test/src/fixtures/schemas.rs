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

//! Keyword schemas modelled on common deck keywords.

use resdeck_core::{DefaultValue, ItemSchema, KeywordSchema, RecordSchema};

/// Production well controls. Rate items accept UDA values.
///
/// Items: WELL, STATUS (default OPEN), CMODE, ORAT, WRAT, GRAT, LRAT, RESV, BHP.
pub fn wconprod() -> KeywordSchema {
    let uda = |name: &str, dimension: &str| {
        ItemSchema::uda(name)
            .with_dimension(dimension)
            .with_default(DefaultValue::Double(1.0e20))
    };

    KeywordSchema::new(
        "WCONPROD",
        vec![RecordSchema::new(vec![
            ItemSchema::string("WELL"),
            ItemSchema::string("STATUS").with_default(DefaultValue::String("OPEN".to_string())),
            ItemSchema::string("CMODE"),
            uda("ORAT", "LiquidSurfaceVolume/Time"),
            uda("WRAT", "LiquidSurfaceVolume/Time"),
            uda("GRAT", "GasSurfaceVolume/Time"),
            uda("LRAT", "LiquidSurfaceVolume/Time"),
            uda("RESV", "ReservoirVolume/Time"),
            uda("BHP", "Pressure").with_default(DefaultValue::Double(1.01325)),
        ])],
    )
}

/// Well specification: names, group, location and reference depth.
pub fn welspecs() -> KeywordSchema {
    KeywordSchema::new(
        "WELSPECS",
        vec![RecordSchema::new(vec![
            ItemSchema::string("WELL"),
            ItemSchema::string("GROUP"),
            ItemSchema::int("HEAD_I"),
            ItemSchema::int("HEAD_J"),
            ItemSchema::double("REF_DEPTH").with_dimension("Length"),
            ItemSchema::string("PHASE"),
            ItemSchema::raw_string("PATTERN").with_default(DefaultValue::String("'*'".to_string())),
        ])],
    )
}

/// Cell porosity, one dimensionless value per cell.
pub fn poro() -> KeywordSchema {
    KeywordSchema::data("PORO", ItemSchema::double("data").with_dimension("1"))
}

/// Initial cell pressure.
pub fn pressure() -> KeywordSchema {
    KeywordSchema::data("PRESSURE", ItemSchema::double("data").with_dimension("Pressure"))
}

/// Fluid-in-place region of every cell.
pub fn fipnum() -> KeywordSchema {
    KeywordSchema::data("FIPNUM", ItemSchema::int("data"))
}
