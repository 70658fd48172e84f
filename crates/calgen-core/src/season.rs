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

//! Approximate dates of the equinoxes and solstices.
//!
//! Follows Meeus, *Astronomical Algorithms*, chapter 27: a polynomial for the
//! mean instant (valid for the years 1000 to 3000) plus a 24-term periodic
//! correction. The result is accurate to about a minute, so the calendar date
//! is only wrong when the event falls within a minute or so of midnight UTC.
//! The difference between dynamical time and UT is ignored.

use std::ops::RangeInclusive;

use chrono::NaiveDate;

/// The years the mean-instant polynomials are valid for.
pub const SEASON_YEARS: RangeInclusive<i32> = 1000..=3000;

/// Julian day number of 0001-01-01 minus one.
const JDN_CE_OFFSET: i64 = 1721425;

/// An equinox or solstice, named for the northern hemisphere.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Season {
    SpringEquinox,
    SummerSolstice,
    AutumnEquinox,
    WinterSolstice,
}

impl Season {
    pub const ALL: [Season; 4] = [
        Season::SpringEquinox,
        Season::SummerSolstice,
        Season::AutumnEquinox,
        Season::WinterSolstice,
    ];

    /// The two-letter code used after `T` in special-day files.
    pub fn code(self) -> &'static str {
        match self {
            Season::SpringEquinox => "se",
            Season::SummerSolstice => "ss",
            Season::AutumnEquinox => "ae",
            Season::WinterSolstice => "ws",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Season::ALL.into_iter().find(|s| s.code() == code)
    }

    /// Coefficients of the mean-instant polynomial in millennia from 2000.
    fn mean_coefficients(self) -> [f64; 5] {
        match self {
            Season::SpringEquinox => [2451623.80984, 365242.37404, 0.05169, -0.00411, -0.00057],
            Season::SummerSolstice => [2451716.56767, 365241.62603, 0.00325, 0.00888, -0.00030],
            Season::AutumnEquinox => [2451810.21715, 365242.01767, -0.11575, 0.00337, 0.00078],
            Season::WinterSolstice => [2451900.05952, 365242.74049, -0.06223, -0.00823, 0.00032],
        }
    }
}

/// Periodic terms `(A, B, C)`: each contributes `A cos(B + C T)`, angles in
/// degrees.
const PERIODIC_TERMS: [(f64, f64, f64); 24] = [
    (485.0, 324.96, 1934.136),
    (203.0, 337.23, 32964.467),
    (199.0, 342.08, 20.186),
    (182.0, 27.85, 445267.112),
    (156.0, 73.14, 45036.886),
    (136.0, 171.52, 22518.443),
    (77.0, 222.54, 65928.934),
    (74.0, 296.72, 3034.906),
    (70.0, 243.58, 9037.513),
    (58.0, 119.81, 33718.147),
    (52.0, 297.17, 150.678),
    (50.0, 21.02, 2281.226),
    (45.0, 247.54, 29929.562),
    (44.0, 325.15, 31555.956),
    (29.0, 60.93, 4443.417),
    (18.0, 155.12, 67555.328),
    (17.0, 288.79, 4562.452),
    (16.0, 198.04, 62894.029),
    (14.0, 199.76, 31436.921),
    (12.0, 95.39, 14577.848),
    (12.0, 287.11, 31931.756),
    (12.0, 320.81, 34777.259),
    (9.0, 227.73, 1222.114),
    (8.0, 15.45, 16859.074),
];

/// The Julian Ephemeris Day of the event in `year`.
fn julian_ephemeris_day(kind: Season, year: i32) -> f64 {
    let y = (year as f64 - 2000.0) / 1000.0;
    let jde0 = kind
        .mean_coefficients()
        .iter()
        .rev()
        .fold(0.0, |acc, coefficient| acc * y + coefficient);
    let t = (jde0 - 2451545.0) / 36525.0;
    let w = (35999.373 * t - 2.47).to_radians();
    let delta_lambda = 1.0 + 0.0334 * w.cos() + 0.0007 * (2.0 * w).cos();
    let s: f64 = PERIODIC_TERMS
        .iter()
        .map(|(a, b, c)| a * (b + c * t).to_radians().cos())
        .sum();
    jde0 + 0.00001 * s / delta_lambda
}

/// The UTC calendar date of the equinox or solstice in `year`, or `None`
/// outside [`SEASON_YEARS`].
pub fn season_date(kind: Season, year: i32) -> Option<NaiveDate> {
    if !SEASON_YEARS.contains(&year) {
        return None;
    }
    let jde = julian_ephemeris_day(kind, year);
    let jdn = (jde + 0.5).floor() as i64;
    let days = i32::try_from(jdn - JDN_CE_OFFSET).ok()?;
    NaiveDate::from_num_days_from_ce_opt(days)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn test_codes() {
        for season in Season::ALL {
            assert_eq!(Season::from_code(season.code()), Some(season));
        }
        assert_eq!(Season::from_code("xx"), None);
        assert_eq!(Season::from_code("WS"), None);
    }

    #[test]
    fn test_2024() {
        assert_eq!(season_date(Season::SpringEquinox, 2024), Some(ymd(2024, 3, 20)));
        assert_eq!(season_date(Season::SummerSolstice, 2024), Some(ymd(2024, 6, 20)));
        assert_eq!(season_date(Season::AutumnEquinox, 2024), Some(ymd(2024, 9, 22)));
        assert_eq!(season_date(Season::WinterSolstice, 2024), Some(ymd(2024, 12, 21)));
    }

    #[test]
    fn test_published_tables() {
        let expected = [
            (2005, [(3, 20), (6, 21), (9, 22), (12, 21)]),
            (2006, [(3, 20), (6, 21), (9, 23), (12, 22)]),
            (2007, [(3, 21), (6, 21), (9, 23), (12, 22)]),
            (2008, [(3, 20), (6, 21), (9, 22), (12, 21)]),
            (2009, [(3, 20), (6, 21), (9, 22), (12, 21)]),
            (2025, [(3, 20), (6, 21), (9, 22), (12, 21)]),
        ];
        for (year, dates) in expected {
            for (season, (month, day)) in Season::ALL.into_iter().zip(dates) {
                assert_eq!(
                    season_date(season, year),
                    Some(ymd(year, month, day)),
                    "{season:?} {year}"
                );
            }
        }
    }

    #[test]
    fn test_out_of_range() {
        assert_eq!(season_date(Season::SpringEquinox, 999), None);
        assert_eq!(season_date(Season::SpringEquinox, 3001), None);
        assert!(season_date(Season::SpringEquinox, 1000).is_some());
        assert!(season_date(Season::WinterSolstice, 3000).is_some());
    }

    #[test]
    fn test_stays_in_season_month() {
        for year in 1600..=2400 {
            for (season, month) in Season::ALL.into_iter().zip([3, 6, 9, 12]) {
                let date = season_date(season, year).unwrap();
                assert_eq!(chrono::Datelike::month(&date), month, "{season:?} {year}");
            }
        }
    }
}
