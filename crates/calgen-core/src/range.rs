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

use crate::error::ErrorReport;
use crate::error::Fallible;
use crate::error::fail;

/// The months to print, as given on the command line: `M` for a single
/// month, or `S-E` for a run of months. A run whose end is before its start
/// continues into the next year, so `11-2` is November to February.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct MonthRange {
    year: i32,
    start: u32,
    end: u32,
}

fn parse_month(s: &str) -> Fallible<u32> {
    let month: u32 = s
        .trim()
        .parse()
        .map_err(|_| ErrorReport::new(format!("invalid month: '{s}'.")))?;
    if !(1..=12).contains(&month) {
        return fail(format!("month out of range: {month}."));
    }
    Ok(month)
}

impl MonthRange {
    pub fn parse(year: i32, spec: &str) -> Fallible<Self> {
        match spec.split_once('-') {
            Some((start, end)) => Ok(MonthRange {
                year,
                start: parse_month(start)?,
                end: parse_month(end)?,
            }),
            None => {
                let month = parse_month(spec)?;
                Ok(MonthRange {
                    year,
                    start: month,
                    end: month,
                })
            }
        }
    }

    /// Whether the range continues into the next year.
    pub fn wraps(&self) -> bool {
        self.end < self.start
    }

    /// The `(year, month)` pairs in order.
    pub fn iter(&self) -> impl Iterator<Item = (i32, u32)> + use<> {
        let year = self.year;
        let (first, second) = if self.wraps() {
            (self.start..=12, 1..=self.end)
        } else {
            (self.start..=self.end, 1..=0)
        };
        first
            .map(move |m| (year, m))
            .chain(second.map(move |m| (year + 1, m)))
    }

    /// The years the range touches.
    pub fn years(&self) -> Vec<i32> {
        if self.wraps() {
            vec![self.year, self.year + 1]
        } else {
            vec![self.year]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single() -> Fallible<()> {
        let range = MonthRange::parse(2024, "3")?;
        assert_eq!(range.iter().collect::<Vec<_>>(), vec![(2024, 3)]);
        assert!(!range.wraps());
        assert_eq!(range.years(), vec![2024]);
        Ok(())
    }

    #[test]
    fn test_run() -> Fallible<()> {
        let range = MonthRange::parse(2024, "1-12")?;
        assert_eq!(range.iter().count(), 12);
        assert!(!range.wraps());
        assert_eq!(range.years(), vec![2024]);
        Ok(())
    }

    #[test]
    fn test_wrap_into_next_year() -> Fallible<()> {
        let range = MonthRange::parse(2024, "11-2")?;
        assert_eq!(
            range.iter().collect::<Vec<_>>(),
            vec![(2024, 11), (2024, 12), (2025, 1), (2025, 2)]
        );
        assert_eq!(range.years(), vec![2024, 2025]);
        Ok(())
    }

    #[test]
    fn test_invalid() {
        for spec in ["0", "13", "x", "1-", "-3", "1-13", ""] {
            assert!(MonthRange::parse(2024, spec).is_err(), "{spec}");
        }
    }
}
