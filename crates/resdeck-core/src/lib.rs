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

//! Typed value model for reservoir simulation decks.
//!
//! This crate turns raw deck tokens into typed, unit-aware values:
//!
//! - [`ScalarValue`], [`UdaValue`] and [`DeckValue`] describe single values
//! - [`UnitSystem`] and [`Dimension`] convert between deck units and SI
//! - [`expand_token`] and [`expand_record`] implement the `N*value` repeat syntax
//! - [`DeckKeyword`], [`DeckRecord`] and [`DeckItem`] hold a parsed keyword
//! - [`Pattern`] matches entity names against shell-style wildcards
//!
//! # Example
//!
//! ```
//! use resdeck_core::{DeckKeyword, ItemSchema, KeywordSchema, ParseOptions, UnitSystem};
//!
//! let item = ItemSchema::double("data").with_dimension("Pressure");
//! let schema = KeywordSchema::data("PRESSURE", item);
//! let keyword = DeckKeyword::from_tokens(
//!     &schema,
//!     &[vec!["3*250"]],
//!     &UnitSystem::Metric,
//!     &UnitSystem::Metric,
//!     &ParseOptions::default(),
//! )?;
//!
//! assert_eq!(keyword.raw_data()?, vec![250.0; 3]);
//! assert_eq!(keyword.si_data()?, vec![2.5e7; 3]);
//! # Ok::<(), resdeck_core::DeckError>(())
//! ```

mod deck;
mod error;
pub mod errors;
mod expand;
mod limits;
mod options;
pub mod pattern;
mod schema;
pub mod units;
mod value;

pub use deck::{DeckItem, DeckKeyword, DeckRecord, ValueStatus};
pub use error::{DeckError, DeckErrorKind, DeckResult};
pub use expand::{expand_record, expand_token, ExpansionContext, RepeatToken};
pub use limits::Limits;
pub use options::{ParseOptions, ParseOptionsBuilder};
pub use pattern::{is_wildcard, Pattern};
pub use schema::{DefaultValue, ItemSchema, ItemSize, ItemType, KeywordSchema, RecordSchema};
pub use units::{Dimension, UnitSystem};
pub use value::{is_int, DeckValue, ScalarValue, UdaValue};
