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

//! Example demonstrating custom expansion limits.
//!
//! Shows how repeat-count and record-size limits apply when building
//! keywords from untrusted deck input.

use resdeck_core::{DeckKeyword, ItemSchema, KeywordSchema, Limits, ParseOptions, UnitSystem};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("ResDeck Custom Limits Example\n");

    let poro = KeywordSchema::data("PORO", ItemSchema::double("data").with_dimension("1"));

    // Example 1: Default limits
    println!("1. Default Limits:");
    let defaults = Limits::default();
    println!("   max_repeat_count: {}", defaults.max_repeat_count);
    println!("   max_record_values: {}", defaults.max_record_values);
    println!("   max_token_length: {} bytes\n", defaults.max_token_length);

    let keyword = DeckKeyword::from_tokens(
        &poro,
        &[vec!["500*0.25", "0.3", "2*"]],
        &UnitSystem::Metric,
        &UnitSystem::Metric,
        &ParseOptions::default(),
    )?;
    println!("   PORO expanded to {} values\n", keyword.data_item()?.len());

    // Example 2: Conservative limits for untrusted input
    println!("2. Conservative Limits:");
    let options = ParseOptions::builder()
        .max_repeat_count(100)
        .max_record_values(1_000)
        .max_token_length(64)
        .build();

    match DeckKeyword::from_tokens(
        &poro,
        &[vec!["500*0.25"]],
        &UnitSystem::Metric,
        &UnitSystem::Metric,
        &options,
    ) {
        Ok(keyword) => println!("   Unexpectedly accepted {} values\n", keyword.data_item()?.len()),
        Err(e) => println!("   Rejected: {}\n", e),
    }

    // Example 3: Unlimited, for trusted synthetic grids
    println!("3. Unlimited Limits:");
    let options = ParseOptions::builder().limits(Limits::unlimited()).build();
    let keyword = DeckKeyword::from_tokens(
        &poro,
        &[vec!["2000000*0.2"]],
        &UnitSystem::Metric,
        &UnitSystem::Metric,
        &options,
    )?;
    println!("   PORO expanded to {} values", keyword.data_item()?.len());

    Ok(())
}
