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

//! Shell-style wildcard patterns over entity names.
//!
//! `*` matches any run of characters and `?` a single character. Patterns
//! are anchored at both ends and case-sensitive.

use crate::error::{DeckError, DeckResult};
use regex::Regex;

/// True when `text` contains a wildcard character.
pub fn is_wildcard(text: &str) -> bool {
    text.contains(['*', '?'])
}

/// A compiled wildcard pattern.
#[derive(Debug, Clone)]
pub struct Pattern {
    text: String,
    regex: Regex,
}

impl Pattern {
    pub fn new(text: &str) -> DeckResult<Self> {
        let mut source = String::with_capacity(text.len() + 8);
        source.push('^');
        for c in text.chars() {
            match c {
                '*' => source.push_str(".*"),
                '?' => source.push('.'),
                other => source.push_str(&regex::escape(other.encode_utf8(&mut [0; 4]))),
            }
        }
        source.push('$');

        let regex = Regex::new(&source).map_err(|e| {
            DeckError::malformed_token(format!("invalid pattern '{}': {}", text, e))
        })?;

        Ok(Self {
            text: text.to_string(),
            regex,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn is_wildcard(&self) -> bool {
        is_wildcard(&self.text)
    }

    pub fn matches(&self, name: &str) -> bool {
        self.regex.is_match(name)
    }

    /// Names from `names` that match, in their original order.
    pub fn filter<'n, S: AsRef<str>>(&self, names: &'n [S]) -> Vec<&'n str> {
        names
            .iter()
            .map(AsRef::as_ref)
            .filter(|name| self.matches(name))
            .collect()
    }
}

impl PartialEq for Pattern {
    fn eq(&self, other: &Self) -> bool {
        self.text == other.text
    }
}

impl Eq for Pattern {}

impl std::fmt::Display for Pattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_wildcard() {
        assert!(is_wildcard("P*"));
        assert!(is_wildcard("P?"));
        assert!(!is_wildcard("PROD1"));
        assert!(!is_wildcard(""));
    }

    #[test]
    fn test_star_matches_any_suffix() {
        let p = Pattern::new("P*").unwrap();
        assert!(p.matches("P"));
        assert!(p.matches("PROD1"));
        assert!(!p.matches("INJ1"));
        assert!(!p.matches("XP1"));
    }

    #[test]
    fn test_question_mark_matches_one() {
        let p = Pattern::new("OP_?").unwrap();
        assert!(p.matches("OP_1"));
        assert!(!p.matches("OP_"));
        assert!(!p.matches("OP_10"));
    }

    #[test]
    fn test_literal_is_exact() {
        let p = Pattern::new("W.1").unwrap();
        assert!(p.matches("W.1"));
        assert!(!p.matches("WX1"));
        assert!(!p.is_wildcard());
    }

    #[test]
    fn test_case_sensitive() {
        let p = Pattern::new("prod*").unwrap();
        assert!(!p.matches("PROD1"));
    }

    #[test]
    fn test_filter_keeps_order() {
        let names = vec!["P2", "I1", "P1", "P10"];
        let p = Pattern::new("P*").unwrap();
        assert_eq!(p.filter(&names), vec!["P2", "P1", "P10"]);
    }
}
