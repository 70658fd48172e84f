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

use chrono::Datelike;
use chrono::NaiveDate;
use serde::Serialize;

use crate::types::rule::Segment;

/// A rule bound to a concrete date in a given year.
#[derive(Clone, PartialEq, Eq, Debug, Serialize)]
pub struct ResolvedEntry {
    pub date: NaiveDate,
    pub segments: Vec<Segment>,
}

impl ResolvedEntry {
    pub fn new(date: NaiveDate, segments: Vec<Segment>) -> Self {
        ResolvedEntry { date, segments }
    }

    /// The month, 1 to 12.
    pub fn month(&self) -> u32 {
        self.date.month()
    }

    /// The day of the month, starting at 1.
    pub fn day(&self) -> u32 {
        self.date.day()
    }

    /// Whether a segment is in the holiday colour, which makes the whole
    /// date a red day.
    pub fn is_holiday(&self) -> bool {
        self.segments.iter().any(|s| s.color.is_holiday())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::color::ColorCode;

    #[test]
    fn test_is_holiday() {
        let date = NaiveDate::from_ymd_opt(2024, 12, 25).unwrap();
        let entry = ResolvedEntry::new(
            date,
            vec![
                Segment::new(ColorCode::DEFAULT, "Stephen"),
                Segment::new(ColorCode::HOLIDAY, "Christmas Day"),
            ],
        );
        assert!(entry.is_holiday());
        assert_eq!(entry.month(), 12);
        assert_eq!(entry.day(), 25);

        let entry = ResolvedEntry::new(date, vec![Segment::new(ColorCode::DEFAULT, "Stephen")]);
        assert!(!entry.is_holiday());
    }
}
