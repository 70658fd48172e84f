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

use crate::season::Season;
use crate::types::color::ColorCode;

/// When a rule falls, before it is bound to a year.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum DateSpec {
    /// A fixed day, like `25.3`.
    Absolute { day: u32, month: u32 },
    /// A number of days before or after Easter Sunday, like `E-2`.
    EasterOffset { offset_days: i64 },
    /// An equinox or solstice, like `Tws`.
    Season { kind: Season },
}

impl Display for DateSpec {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            DateSpec::Absolute { day, month } => write!(f, "{day}.{month}"),
            DateSpec::EasterOffset { offset_days } => write!(f, "E{offset_days:+}"),
            DateSpec::Season { kind } => write!(f, "T{}", kind.code()),
        }
    }
}

/// One coloured line of text on a date.
#[derive(Clone, PartialEq, Eq, Debug, Serialize)]
pub struct Segment {
    pub color: ColorCode,
    pub text: String,
}

impl Segment {
    pub fn new(color: ColorCode, text: impl Into<String>) -> Self {
        Segment {
            color,
            text: text.into(),
        }
    }
}

/// A parsed line of a special-day file.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct RawRule {
    pub date_spec: DateSpec,
    /// Display order is insertion order.
    pub segments: Vec<Segment>,
    /// 1-based line number in the source file, 0 if the rule was not read
    /// from a file.
    pub line: usize,
}

/// The rules of one special-day file.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct SpecialDays {
    source: String,
    rules: Vec<RawRule>,
}

impl SpecialDays {
    pub fn new(source: impl Into<String>, rules: Vec<RawRule>) -> Self {
        SpecialDays {
            source: source.into(),
            rules,
        }
    }

    /// A set with no rules, for when no file is available.
    pub fn empty(source: impl Into<String>) -> Self {
        SpecialDays::new(source, Vec::new())
    }

    /// Where the rules were read from, for diagnostics.
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn rules(&self) -> &[RawRule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_spec_display() {
        let spec = DateSpec::Absolute { day: 25, month: 3 };
        assert_eq!(spec.to_string(), "25.3");
        let spec = DateSpec::EasterOffset { offset_days: -2 };
        assert_eq!(spec.to_string(), "E-2");
        let spec = DateSpec::EasterOffset { offset_days: 39 };
        assert_eq!(spec.to_string(), "E+39");
        let spec = DateSpec::Season {
            kind: Season::WinterSolstice,
        };
        assert_eq!(spec.to_string(), "Tws");
    }
}
