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

use std::fmt::Display;
use std::fmt::Formatter;
use std::str::FromStr;

use chrono::Weekday;
use serde::Deserialize;

use crate::error::ErrorReport;

/// A language for page texts. Each language has its own special-day file.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, Deserialize)]
#[serde(try_from = "String")]
pub enum Language {
    Swedish,
    #[default]
    English,
    German,
}

const MONTHS_SV: [&str; 12] = [
    "Januari", "Februari", "Mars", "April", "Maj", "Juni", "Juli", "Augusti", "September",
    "Oktober", "November", "December",
];

const MONTHS_EN: [&str; 12] = [
    "January", "February", "March", "April", "May", "June", "July", "August", "September",
    "October", "November", "December",
];

const MONTHS_DE: [&str; 12] = [
    "Jänner", "Februar", "März", "April", "Mai", "Juni", "Juli", "August", "September",
    "Oktober", "November", "Dezember",
];

/// Monday first.
const WEEKDAYS_SV: [&str; 7] = [
    "Måndag", "Tisdag", "Onsdag", "Torsdag", "Fredag", "Lördag", "Söndag",
];

const WEEKDAYS_EN: [&str; 7] = [
    "Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday", "Sunday",
];

const WEEKDAYS_DE: [&str; 7] = [
    "Montag", "Dienstag", "Mittwoch", "Donnerstag", "Freitag", "Samstag", "Sonntag",
];

impl Language {
    pub const ALL: [Language; 3] = [Language::Swedish, Language::English, Language::German];

    pub fn code(self) -> &'static str {
        match self {
            Language::Swedish => "svSE",
            Language::English => "enUS",
            Language::German => "deDE",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Language::ALL.into_iter().find(|l| l.code() == code)
    }

    /// The name of the special-day file for this language, e.g.
    /// `days_enUS.txt`.
    pub fn days_file_name(self) -> String {
        format!("days_{}.txt", self.code())
    }

    /// The name of `month`, 1 to 12.
    pub fn month_name(self, month: u32) -> Option<&'static str> {
        let names = match self {
            Language::Swedish => &MONTHS_SV,
            Language::English => &MONTHS_EN,
            Language::German => &MONTHS_DE,
        };
        names.get(month.checked_sub(1)? as usize).copied()
    }

    pub fn weekday_name(self, weekday: Weekday) -> &'static str {
        let names = match self {
            Language::Swedish => &WEEKDAYS_SV,
            Language::English => &WEEKDAYS_EN,
            Language::German => &WEEKDAYS_DE,
        };
        names[weekday.num_days_from_monday() as usize]
    }
}

impl Display for Language {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for Language {
    type Err = ErrorReport;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Language::from_code(s).ok_or_else(|| {
            let known: Vec<&str> = Language::ALL.iter().map(|l| l.code()).collect();
            ErrorReport::new(format!(
                "unknown language '{s}' (expected one of: {}).",
                known.join(", ")
            ))
        })
    }
}

impl TryFrom<String> for Language {
    type Error = ErrorReport;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
