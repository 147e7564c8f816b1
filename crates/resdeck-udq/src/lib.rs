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

//! User defined quantity (UDQ) evaluation support.
//!
//! The [`UdqContext`] is the environment a UDQ formula evaluator works
//! against during one report step. It resolves scoped variables, enumerates
//! wells, groups, segments and regions, and writes results back to the
//! persistent [`UdqState`] and the live [`SummaryState`].
//!
//! # Example
//!
//! ```
//! use resdeck_udq::{
//!     GroupOrder, MatcherFactories, SummaryState, UdqContext, UdqFunctionTable, UdqSet,
//!     UdqState, WellMatcher,
//! };
//! use std::collections::HashMap;
//!
//! let table = UdqFunctionTable::default();
//! let wells = WellMatcher::new(["PROD1", "PROD2", "INJ1"]);
//! let groups = GroupOrder::new(["PLAT-A"]);
//! let tables = HashMap::new();
//! let mut summary = SummaryState::new();
//! let mut state = UdqState::new(table.params().undefined_value);
//!
//! summary.update_well_var("PROD1", "WOPR", 120.0);
//!
//! let mut ctx = UdqContext::new(
//!     &table,
//!     &wells,
//!     &groups,
//!     &tables,
//!     MatcherFactories::new(),
//!     &mut summary,
//!     &mut state,
//! );
//!
//! assert_eq!(ctx.get_well_var("PROD1", "WOPR"), Some(120.0));
//! assert_eq!(ctx.get_well_var("PROD2", "WOPR"), None);
//!
//! let producers = ctx.wells_matching("PROD*")?;
//! ctx.update_assign("WUFLAG", &UdqSet::wells("WUFLAG", &producers, Some(1.0)));
//! assert_eq!(ctx.get_well_var("PROD2", "WUFLAG"), Some(1.0));
//! # Ok::<(), resdeck_udq::DeckError>(())
//! ```

mod context;
mod function;
mod group;
pub mod keys;
mod params;
mod region;
mod segment;
mod set;
mod state;
mod summary;
mod udt;
mod var_type;
mod well;

pub use context::{MatcherFactories, UdqContext};
pub use function::{UdqFunctionCategory, UdqFunctionTable};
pub use group::{GroupOrder, FIELD_GROUP};
pub use params::{UdqParams, UdqParamsBuilder};
pub use region::{
    region_set_of, RegionDescriptor, RegionSetMatchResult, RegionSetMatcher, RegionTopology,
    DEFAULT_REGION_SET,
};
pub use segment::{SegmentDescriptor, SegmentMatcher, SegmentSet, SegmentTopology};
pub use set::{UdqEntity, UdqScalar, UdqSet};
pub use state::UdqState;
pub use summary::SummaryState;
pub use udt::{Udt, UdtInterpolation};
pub use var_type::UdqVarType;
pub use well::WellMatcher;

pub use resdeck_core::{DeckError, DeckErrorKind, DeckResult};
