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

//! Names of the functions and operators UDQ formulas may use.

use crate::params::UdqParams;
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UdqFunctionCategory {
    /// Reduces a set to one value (`SUM`, `MAX`, ...).
    Scalar,
    /// Applies to each element (`ABS`, `LOG`, ...).
    Unary,
    /// Combines two sets element by element (`+`, `UMAX`, ...).
    Binary,
    /// Element-wise comparison, within the configured tolerance.
    Comparison,
}

const SCALAR: &[&str] = &[
    "SUM", "AVEA", "AVEG", "AVEH", "MAX", "MIN", "NORM1", "NORM2", "NORMI", "PROD",
];

const UNARY: &[&str] = &[
    "ABS", "DEF", "EXP", "IDV", "LN", "LOG", "NINT", "RANDN", "RANDU", "RRNDN", "RRNDU", "SORTA",
    "SORTD", "UNDEF",
];

const BINARY: &[&str] = &["+", "-", "*", "/", "^", "UADD", "UMAX", "UMIN", "UMUL"];

const COMPARISON: &[&str] = &["==", "!=", "<", "<=", ">", ">="];

/// The builtin function table together with the run's UDQ parameters.
#[derive(Debug, Clone)]
pub struct UdqFunctionTable {
    params: UdqParams,
    functions: HashMap<&'static str, UdqFunctionCategory>,
}

impl Default for UdqFunctionTable {
    fn default() -> Self {
        Self::new(UdqParams::default())
    }
}

impl UdqFunctionTable {
    pub fn new(params: UdqParams) -> Self {
        let categories = [
            (SCALAR, UdqFunctionCategory::Scalar),
            (UNARY, UdqFunctionCategory::Unary),
            (BINARY, UdqFunctionCategory::Binary),
            (COMPARISON, UdqFunctionCategory::Comparison),
        ];

        let functions = categories
            .iter()
            .flat_map(|(names, category)| names.iter().map(move |n| (*n, *category)))
            .collect();

        Self { params, functions }
    }

    pub fn params(&self) -> &UdqParams {
        &self.params
    }

    pub fn has_function(&self, name: &str) -> bool {
        self.functions.contains_key(name)
    }

    pub fn category(&self, name: &str) -> Option<UdqFunctionCategory> {
        self.functions.get(name).copied()
    }

    /// Function names of `category`, sorted.
    pub fn names(&self, category: UdqFunctionCategory) -> Vec<&'static str> {
        let mut names: Vec<_> = self
            .functions
            .iter()
            .filter(|(_, c)| **c == category)
            .map(|(n, _)| *n)
            .collect();
        names.sort_unstable();
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_lookup() {
        let table = UdqFunctionTable::default();
        assert_eq!(table.category("SUM"), Some(UdqFunctionCategory::Scalar));
        assert_eq!(table.category("LOG"), Some(UdqFunctionCategory::Unary));
        assert_eq!(table.category("UMAX"), Some(UdqFunctionCategory::Binary));
        assert_eq!(table.category(">="), Some(UdqFunctionCategory::Comparison));
        assert!(!table.has_function("sum"));
        assert!(!table.has_function("WOPR"));
    }

    #[test]
    fn test_names_by_category() {
        let table = UdqFunctionTable::default();
        assert_eq!(table.names(UdqFunctionCategory::Comparison).len(), 6);
        assert!(table.names(UdqFunctionCategory::Scalar).contains(&"NORM2"));
    }

    #[test]
    fn test_params_kept() {
        let params = UdqParams::builder().undefined_value(-5.0).build();
        let table = UdqFunctionTable::new(params.clone());
        assert_eq!(table.params(), &params);
    }
}
