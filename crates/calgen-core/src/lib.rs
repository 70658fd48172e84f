// Copyright 2025 Fernando Borretti
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! calgen-core: Core library for the calgen calendar generator.
//!
//! This library provides the pure, I/O-free parts:
//! - Parsing special-day files
//! - Easter and equinox/solstice dates
//! - Resolving special days to the dates of a given year
//! - Month page layout and language tables

pub mod easter;
pub mod error;
pub mod grid;
pub mod language;
pub mod parser;
pub mod range;
pub mod resolver;
pub mod season;
pub mod types;

// Re-exports for convenience
pub use easter::easter_sunday;
pub use error::{ErrorReport, Fallible, fail};
pub use grid::{DayCell, MonthGrid};
pub use language::Language;
pub use parser::{ParseError, parse_rule, parse_special_days};
pub use range::MonthRange;
pub use resolver::{Resolution, ResolveError, resolve, resolve_all};
pub use season::{Season, season_date};
pub use types::color::ColorCode;
pub use types::entry::ResolvedEntry;
pub use types::rule::{DateSpec, RawRule, Segment, SpecialDays};
