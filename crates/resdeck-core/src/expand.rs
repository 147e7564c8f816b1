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

//! Repeat-count expansion and value inference for deck tokens.
//!
//! A token is either a plain value (`3`, `2.5`, `'OPEN'`, `FU_RATE`) or a
//! repeat token `<count>*<value>`:
//!
//! - `3*5` is three copies of `5`
//! - `2*` is two defaults
//! - `*` is one default
//! - `*7` is one copy of `7`
//!
//! Inference is driven entirely by the [`ItemSchema`] of the target item and
//! knows nothing about keywords; [`expand_record`] walks a record's schema to
//! place repetitions that span several items.

use crate::error::DeckResult;
use crate::errors::messages;
use crate::limits::Limits;
use crate::options::ParseOptions;
use crate::schema::{ItemSchema, ItemSize, ItemType, RecordSchema};
use crate::units::{Dimension, UnitSystem};
use crate::value::{is_int, DeckValue, UdaValue};

/// A token split into its repeat count and value part.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RepeatToken<'t> {
    /// Number of repetitions (1 for plain tokens).
    pub count: usize,
    /// Value text; `None` means "use the default".
    pub value: Option<&'t str>,
    /// Whether the token used `*` syntax.
    pub repeated: bool,
}

impl<'t> RepeatToken<'t> {
    /// Split a raw token.
    ///
    /// The count must pass [`is_int`]; an empty count means 1.
    pub fn parse(token: &'t str, limits: &Limits) -> DeckResult<Self> {
        if token.len() > limits.max_token_length {
            return Err(messages::token_too_long(token.len(), limits.max_token_length));
        }

        // A quoted token such as 'P*' is a single value, never a repetition
        let star = if token.starts_with('\'') {
            None
        } else {
            token.find('*')
        };

        let Some(star) = star else {
            return Ok(Self {
                count: 1,
                value: Some(token),
                repeated: false,
            });
        };

        let count_str = &token[..star];
        let count = if count_str.is_empty() {
            1
        } else if is_int(count_str) {
            count_str
                .parse::<usize>()
                .map_err(|_| messages::invalid_repeat_count(token))?
        } else {
            return Err(messages::invalid_repeat_count(token));
        };

        if count > limits.max_repeat_count {
            return Err(messages::repeat_count_too_large(count, limits.max_repeat_count));
        }

        let value_str = &token[star + 1..];
        Ok(Self {
            count,
            value: (!value_str.is_empty()).then_some(value_str),
            repeated: true,
        })
    }
}

/// Context for inferring values against one item schema.
pub struct ExpansionContext<'a> {
    /// Target item metadata.
    pub item: &'a ItemSchema,
    /// Parse options (limits, quote handling).
    pub options: &'a ParseOptions,
    /// Item dimension in the active unit system, resolved once for UDA items.
    uda_dim: Option<Dimension>,
}

impl<'a> ExpansionContext<'a> {
    /// Create a context for `item`, resolving its dimension in `active` when it is a UDA.
    pub fn new(
        item: &'a ItemSchema,
        active: &UnitSystem,
        options: &'a ParseOptions,
    ) -> DeckResult<Self> {
        let uda_dim = if item.is_uda() {
            Some(item.resolve_dimension(active)?)
        } else {
            None
        };

        Ok(Self {
            item,
            options,
            uda_dim,
        })
    }

    /// Infer the single value a split token stands for.
    pub fn infer(&self, token: &RepeatToken<'_>) -> DeckResult<DeckValue> {
        match token.value {
            None => Ok(DeckValue::Default),
            Some(s) if token.repeated => Ok(self.infer_repeated(s)),
            Some(s) => Ok(self.infer_plain(s)),
        }
    }

    /// Plain token: the declared type decides.
    fn infer_plain(&self, s: &str) -> DeckValue {
        match self.item.kind {
            ItemType::Int => match s.parse::<i64>() {
                Ok(n) => DeckValue::Int(n),
                Err(_) => DeckValue::Str(s.to_string()),
            },
            ItemType::Double => match try_parse_double(s) {
                Some(f) => DeckValue::Double(f),
                None => DeckValue::Str(s.to_string()),
            },
            ItemType::Uda => self.infer_uda(s),
            ItemType::String => DeckValue::Str(self.unquote(s).to_string()),
            ItemType::RawString => DeckValue::Str(s.to_string()),
        }
    }

    /// Value part of a repeat token: digit-only text is an integer, other
    /// numeric text a double, anything else stays a string.
    fn infer_repeated(&self, s: &str) -> DeckValue {
        match self.item.kind {
            ItemType::Uda => self.infer_uda(s),
            ItemType::String => DeckValue::Str(self.unquote(s).to_string()),
            ItemType::RawString => DeckValue::Str(s.to_string()),
            ItemType::Int | ItemType::Double => {
                if is_int(s) {
                    if let Ok(n) = s.parse::<i64>() {
                        return DeckValue::Int(n);
                    }
                }
                match try_parse_double(s) {
                    Some(f) => DeckValue::Double(f),
                    None => DeckValue::Str(s.to_string()),
                }
            }
        }
    }

    fn infer_uda(&self, s: &str) -> DeckValue {
        let dim = self.uda_dim.clone().unwrap_or_default();
        match try_parse_double(s) {
            Some(f) => DeckValue::Uda(UdaValue::literal(f, dim)),
            None => DeckValue::Uda(UdaValue::symbolic(self.unquote(s), dim)),
        }
    }

    fn unquote<'s>(&self, s: &'s str) -> &'s str {
        if self.options.strip_quotes {
            strip_quotes(s)
        } else {
            s
        }
    }
}

/// Expand one token into the values it stands for.
///
/// Nothing is produced when the token is malformed.
pub fn expand_token(token: &str, ctx: &ExpansionContext<'_>) -> DeckResult<Vec<DeckValue>> {
    let split = RepeatToken::parse(token, &ctx.options.limits)?;
    let value = ctx.infer(&split)?;
    Ok(vec![value; split.count])
}

/// Expand every token of one record against its schema.
///
/// Repetitions advance through `Single` items one at a time; an `All` item
/// absorbs every remaining repetition.
pub fn expand_record(
    tokens: &[&str],
    schema: &RecordSchema,
    active: &UnitSystem,
    options: &ParseOptions,
) -> DeckResult<Vec<DeckValue>> {
    let limits = &options.limits;
    let mut values = Vec::new();
    let mut index = 0;

    for token in tokens {
        let split = RepeatToken::parse(token, limits)?;
        let mut remaining = split.count;

        while remaining > 0 {
            let item = schema
                .get(index)
                .ok_or_else(|| messages::too_many_values(schema.len()))?;
            let value = ExpansionContext::new(item, active, options)?.infer(&split)?;

            let take = match item.size {
                ItemSize::Single => {
                    index += 1;
                    1
                }
                ItemSize::All => remaining,
            };

            if values.len().saturating_add(take) > limits.max_record_values {
                return Err(messages::record_too_large(limits.max_record_values));
            }

            values.extend(std::iter::repeat(value).take(take));
            remaining -= take;
        }
    }

    Ok(values)
}

/// Parse a finite double. `inf` and `nan` spellings are not numeric in a deck.
fn try_parse_double(s: &str) -> Option<f64> {
    s.parse::<f64>().ok().filter(|f| f.is_finite())
}

/// Remove one pair of enclosing single quotes.
fn strip_quotes(s: &str) -> &str {
    if s.len() >= 2 && s.starts_with('\'') && s.ends_with('\'') {
        &s[1..s.len() - 1]
    } else {
        s
    }
}
