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

//! The layout of a month page: weeks as rows, Monday first.

use std::array::from_fn;

use chrono::Datelike;
use chrono::NaiveDate;
use chrono::Weekday;

use crate::types::entry::ResolvedEntry;
use crate::types::rule::Segment;

pub const GRID_COLS: usize = 7;

/// A week row. Days before the first or after the last of the month are
/// `None`.
pub type Week = [Option<DayCell>; GRID_COLS];

#[derive(Clone, Debug, PartialEq)]
pub struct DayCell {
    pub date: NaiveDate,
    /// A holiday entry falls on this date.
    pub holiday: bool,
    /// Segments of all entries on this date, in entry order.
    pub segments: Vec<Segment>,
}

impl DayCell {
    fn new(date: NaiveDate) -> Self {
        DayCell {
            date,
            holiday: false,
            segments: Vec::new(),
        }
    }

    pub fn day(&self) -> u32 {
        self.date.day()
    }

    pub fn weekday(&self) -> Weekday {
        self.date.weekday()
    }

    /// Whether the day number is drawn in the holiday colour: holidays and
    /// Sundays.
    pub fn is_red(&self) -> bool {
        self.holiday || self.weekday() == Weekday::Sun
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct MonthGrid {
    year: i32,
    month: u32,
    weeks: Vec<Week>,
}

/// The number of days in `month` of `year`.
pub fn days_in_month(year: i32, month: u32) -> Option<u32> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let next = first.checked_add_months(chrono::Months::new(1))?;
    Some((next - first).num_days() as u32)
}

impl MonthGrid {
    /// Lay out `month` of `year`, placing the entries that fall in it.
    /// Entries for other months are ignored.
    pub fn new<'a>(
        year: i32,
        month: u32,
        entries: impl IntoIterator<Item = &'a ResolvedEntry>,
    ) -> Option<Self> {
        let first = NaiveDate::from_ymd_opt(year, month, 1)?;
        let count = days_in_month(year, month)? as usize;
        let mut days: Vec<Option<DayCell>> = first
            .iter_days()
            .take(count)
            .map(|date| Some(DayCell::new(date)))
            .collect();

        for entry in entries {
            if entry.date.year() != year || entry.month() != month {
                continue;
            }
            if let Some(Some(cell)) = days.get_mut(entry.day() as usize - 1) {
                cell.holiday |= entry.is_holiday();
                cell.segments.extend(entry.segments.iter().cloned());
            }
        }

        let lead = first.weekday().num_days_from_monday() as usize;
        let rows = (lead + count).div_ceil(GRID_COLS);
        let weeks = (0..rows)
            .map(|row| {
                from_fn(|col| {
                    let offset = (row * GRID_COLS + col).checked_sub(lead)?;
                    days.get_mut(offset)?.take()
                })
            })
            .collect();

        Some(MonthGrid { year, month, weeks })
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn weeks(&self) -> &[Week] {
        &self.weeks
    }

    /// All days of the month in order.
    pub fn days(&self) -> impl Iterator<Item = &DayCell> {
        self.weeks.iter().flatten().flatten()
    }

    pub fn day(&self, day: u32) -> Option<&DayCell> {
        self.days().find(|c| c.day() == day)
    }
}
