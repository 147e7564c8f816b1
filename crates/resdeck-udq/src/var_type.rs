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

//! Classification of UDQ keywords by the entity they range over.

use std::fmt;

/// Entity kind a UDQ ranges over, from the first letter of its name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum UdqVarType {
    None,
    Scalar,
    Field,
    Well,
    Group,
    Segment,
    Region,
    Connection,
    Aquifer,
    Block,
}

impl UdqVarType {
    /// Classify a UDQ keyword such as `WUOPRL` or `FU_TOTAL`.
    ///
    /// Names that are not UDQ keywords (second letter not `U`) give `None`.
    pub fn from_keyword(name: &str) -> Self {
        let mut chars = name.chars();
        let (Some(first), Some('U')) = (chars.next(), chars.next()) else {
            return Self::None;
        };

        match first {
            'W' => Self::Well,
            'G' => Self::Group,
            'S' => Self::Segment,
            'R' => Self::Region,
            'F' => Self::Field,
            'C' => Self::Connection,
            'A' => Self::Aquifer,
            'B' => Self::Block,
            _ => Self::None,
        }
    }

    /// One value for the whole model rather than one per entity.
    pub fn is_scalar(&self) -> bool {
        matches!(self, Self::Scalar | Self::Field)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::None => "NONE",
            Self::Scalar => "SCALAR",
            Self::Field => "FIELD_VAR",
            Self::Well => "WELL_VAR",
            Self::Group => "GROUP_VAR",
            Self::Segment => "SEGMENT_VAR",
            Self::Region => "REGION_VAR",
            Self::Connection => "CONNECTION_VAR",
            Self::Aquifer => "AQUIFER_VAR",
            Self::Block => "BLOCK_VAR",
        }
    }
}

impl fmt::Display for UdqVarType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
