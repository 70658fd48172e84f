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

use serde::Serialize;

/// A colour code from a special-day file: a single digit in front of a
/// segment, like the `2` in `2:John's Birthday`.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default, Serialize)]
#[serde(into = "u8")]
pub struct ColorCode(u8);

/// How a colour code is drawn.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Style {
    pub name: &'static str,
    /// CSS hex colour.
    pub color: &'static str,
    pub italic: bool,
    pub bold: bool,
}

const fn style(name: &'static str, color: &'static str, italic: bool, bold: bool) -> Style {
    Style {
        name,
        color,
        italic,
        bold,
    }
}

const PALETTE: [Style; 10] = [
    style("black", "#000000", false, false),
    style("red", "#ff0000", false, false),
    style("cyan", "#00ffff", false, false),
    style("black italic", "#000000", true, false),
    style("blue", "#0000ff", false, false),
    style("green", "#008000", false, false),
    style("magenta", "#ff00ff", false, false),
    style("orange", "#ffa500", false, false),
    style("grey", "#808080", false, false),
    style("black bold", "#000000", false, true),
];

impl ColorCode {
    /// The default colour: black.
    pub const DEFAULT: ColorCode = ColorCode(0);

    /// Red. Also marks the date as a holiday.
    pub const HOLIDAY: ColorCode = ColorCode(1);

    /// Build a colour code from a digit character.
    pub fn from_digit(c: char) -> Option<Self> {
        c.to_digit(10).map(|d| ColorCode(d as u8))
    }

    pub fn value(self) -> u8 {
        self.0
    }

    pub fn is_holiday(self) -> bool {
        self == Self::HOLIDAY
    }

    pub fn style(self) -> Style {
        PALETTE[self.0 as usize]
    }
}

impl Display for ColorCode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<ColorCode> for u8 {
    fn from(code: ColorCode) -> u8 {
        code.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_digit() {
        assert_eq!(ColorCode::from_digit('0'), Some(ColorCode::DEFAULT));
        assert_eq!(ColorCode::from_digit('1'), Some(ColorCode::HOLIDAY));
        assert_eq!(ColorCode::from_digit('9').map(ColorCode::value), Some(9));
        assert_eq!(ColorCode::from_digit('a'), None);
    }

    #[test]
    fn test_every_digit_has_a_style() {
        for c in '0'..='9' {
            let code = ColorCode::from_digit(c).unwrap();
            assert!(code.style().color.starts_with('#'));
        }
    }

    #[test]
    fn test_documented_styles() {
        assert_eq!(ColorCode::DEFAULT.style().name, "black");
        assert_eq!(ColorCode::HOLIDAY.style().name, "red");
        assert_eq!(ColorCode::from_digit('2').unwrap().style().name, "cyan");
        assert!(ColorCode::from_digit('3').unwrap().style().italic);
        assert!(ColorCode::HOLIDAY.is_holiday());
        assert!(!ColorCode::DEFAULT.is_holiday());
    }
}
