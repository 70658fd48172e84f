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

use std::error::Error;
use std::fmt::Display;
use std::fmt::Formatter;
use std::ops::RangeInclusive;

use chrono::Datelike;
use chrono::Duration;
use chrono::NaiveDate;

use crate::easter::FIRST_GREGORIAN_YEAR;
use crate::easter::easter_sunday;
use crate::season::season_date;
use crate::types::entry::ResolvedEntry;
use crate::types::rule::DateSpec;
use crate::types::rule::RawRule;
use crate::types::rule::SpecialDays;

/// Years every kind of rule can be resolved for.
pub const SUPPORTED_YEARS: RangeInclusive<i32> = FIRST_GREGORIAN_YEAR..=3000;

#[derive(Debug, Clone, PartialEq)]
pub enum ResolveError {
    /// The year is outside [`SUPPORTED_YEARS`].
    UnsupportedYear { year: i32 },
    /// The day does not exist in that month of that year, like `30.02`.
    InvalidDate {
        line_num: usize,
        day: u32,
        month: u32,
        year: i32,
    },
    /// An Easter offset lands in the previous or next year.
    OutOfYear {
        line_num: usize,
        offset_days: i64,
        year: i32,
    },
}

impl Display for ResolveError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ResolveError::UnsupportedYear { year } => write!(
                f,
                "Year {year} is not supported (must be between {} and {}).",
                SUPPORTED_YEARS.start(),
                SUPPORTED_YEARS.end()
            ),
            ResolveError::InvalidDate {
                line_num,
                day,
                month,
                year,
            } => write!(
                f,
                "Day {day} does not exist in month {month} of {year}. Line: {line_num}"
            ),
            ResolveError::OutOfYear {
                line_num,
                offset_days,
                year,
            } => write!(
                f,
                "Easter {offset_days:+} days falls outside of {year}. Line: {line_num}"
            ),
        }
    }
}

impl Error for ResolveError {}

pub fn check_year(year: i32) -> Result<(), ResolveError> {
    if SUPPORTED_YEARS.contains(&year) {
        Ok(())
    } else {
        Err(ResolveError::UnsupportedYear { year })
    }
}

/// The current year in the user's local time.
#[cfg(feature = "clock")]
pub fn current_year() -> i32 {
    chrono::Local::now().year()
}

/// Bind a rule to its date in `year`.
pub fn resolve(rule: &RawRule, year: i32) -> Result<ResolvedEntry, ResolveError> {
    check_year(year)?;
    let date: NaiveDate = match rule.date_spec {
        DateSpec::Absolute { day, month } => NaiveDate::from_ymd_opt(year, month, day).ok_or(
            ResolveError::InvalidDate {
                line_num: rule.line,
                day,
                month,
                year,
            },
        )?,
        DateSpec::EasterOffset { offset_days } => {
            let out_of_year = ResolveError::OutOfYear {
                line_num: rule.line,
                offset_days,
                year,
            };
            let easter = easter_sunday(year).ok_or(ResolveError::UnsupportedYear { year })?;
            let date = Duration::try_days(offset_days)
                .and_then(|offset| easter.checked_add_signed(offset))
                .ok_or(out_of_year.clone())?;
            if date.year() != year {
                return Err(out_of_year);
            }
            date
        }
        DateSpec::Season { kind } => {
            season_date(kind, year).ok_or(ResolveError::UnsupportedYear { year })?
        }
    };
    Ok(ResolvedEntry::new(date, rule.segments.clone()))
}

/// The special days of one year.
#[derive(Debug, Clone, PartialEq)]
pub struct Resolution {
    pub year: i32,
    /// In rule order.
    pub entries: Vec<ResolvedEntry>,
    /// Rules that have no date this year, in rule order.
    pub errors: Vec<ResolveError>,
}

impl Resolution {
    /// The entries falling in `month`, in rule order.
    pub fn in_month(&self, month: u32) -> impl Iterator<Item = &ResolvedEntry> {
        self.entries.iter().filter(move |e| e.month() == month)
    }
}

/// Resolve every rule for `year`. Rules without a date that year are
/// skipped and reported in [`Resolution::errors`]; only an unsupported year
/// fails the whole call.
pub fn resolve_all(days: &SpecialDays, year: i32) -> Result<Resolution, ResolveError> {
    check_year(year)?;
    let mut entries = Vec::with_capacity(days.len());
    let mut errors = Vec::new();
    for rule in days.rules() {
        match resolve(rule, year) {
            Ok(entry) => entries.push(entry),
            Err(e) => errors.push(e),
        }
    }
    Ok(Resolution {
        year,
        entries,
        errors,
    })
}
