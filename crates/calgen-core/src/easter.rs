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

//! Date of Easter Sunday in the Gregorian calendar.

use chrono::NaiveDate;

/// The first full year of the Gregorian calendar.
pub const FIRST_GREGORIAN_YEAR: i32 = 1583;

/// Easter Sunday of `year`, by the anonymous Gregorian algorithm
/// (Meeus/Jones/Butcher). Returns `None` before the Gregorian reform.
pub fn easter_sunday(year: i32) -> Option<NaiveDate> {
    if year < FIRST_GREGORIAN_YEAR {
        return None;
    }
    let a = year % 19;
    let b = year / 100;
    let c = year % 100;
    let d = b / 4;
    let e = b % 4;
    let f = (b + 8) / 25;
    let g = (b - f + 1) / 3;
    let h = (19 * a + b - d - g + 15) % 30;
    let i = c / 4;
    let k = c % 4;
    let l = (32 + 2 * e + 2 * i - h - k) % 7;
    let m = (a + 11 * h + 22 * l) / 451;
    let month = (h + l - 7 * m + 114) / 31;
    let day = (h + l - 7 * m + 114) % 31 + 1;
    NaiveDate::from_ymd_opt(year, month as u32, day as u32)
}

#[cfg(test)]
mod tests {
    use chrono::Datelike;
    use chrono::Weekday;

    use super::*;

    fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn test_known_years() {
        assert_eq!(easter_sunday(2024), Some(ymd(2024, 3, 31)));
        assert_eq!(easter_sunday(2025), Some(ymd(2025, 4, 20)));
        assert_eq!(easter_sunday(2005), Some(ymd(2005, 3, 27)));
        assert_eq!(easter_sunday(2000), Some(ymd(2000, 4, 23)));
        assert_eq!(easter_sunday(1961), Some(ymd(1961, 4, 2)));
        assert_eq!(easter_sunday(2038), Some(ymd(2038, 4, 25)));
    }

    #[test]
    fn test_extremes() {
        // Earliest and latest possible dates.
        assert_eq!(easter_sunday(2285), Some(ymd(2285, 3, 22)));
        assert_eq!(easter_sunday(1943), Some(ymd(1943, 4, 25)));
    }

    #[test]
    fn test_always_a_sunday_in_spring() {
        for year in FIRST_GREGORIAN_YEAR..=3000 {
            let date = easter_sunday(year).unwrap();
            assert_eq!(date.weekday(), Weekday::Sun);
            assert!(date >= ymd(year, 3, 22) && date <= ymd(year, 4, 25));
        }
    }

    #[test]
    fn test_before_gregorian_reform() {
        assert_eq!(easter_sunday(1582), None);
    }

    #[test]
    fn test_deterministic() {
        assert_eq!(easter_sunday(2024), easter_sunday(2024));
    }
}
