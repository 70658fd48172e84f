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

use crate::season::Season;
use crate::types::color::ColorCode;
use crate::types::rule::DateSpec;
use crate::types::rule::RawRule;
use crate::types::rule::Segment;
use crate::types::rule::SpecialDays;

/// Parse a single rule line, like `25.3 2:John's Birthday / Start of vacation!`.
pub fn parse_rule(line: &str) -> Result<RawRule, ParseError> {
    Parser::new("<input>").parse_rule(1, line)
}

/// Parse the content of a special-day file.
///
/// Malformed lines do not stop the parse: they are left out of the result
/// and returned alongside it, in file order.
///
/// # Arguments
/// * `source_path` - A reference path for error messages
/// * `text` - The file content
pub fn parse_special_days(source_path: &str, text: &str) -> (SpecialDays, Vec<ParseError>) {
    Parser::new(source_path).parse(text)
}

pub struct Parser {
    source_path: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ParseError {
    pub message: String,
    pub source_path: String,
    /// 1-based.
    pub line_num: usize,
    /// The offending line, trimmed.
    pub content: String,
}

impl ParseError {
    fn new(message: impl Into<String>, source_path: String, line_num: usize, content: &str) -> Self {
        ParseError {
            message: message.into(),
            source_path,
            line_num,
            content: content.to_string(),
        }
    }
}

impl Display for ParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} Line: '{}' Location: {}:{}",
            self.message, self.content, self.source_path, self.line_num
        )
    }
}

impl Error for ParseError {}

enum Line<'a> {
    /// An empty or whitespace-only line.
    Blank,
    /// A line starting with `#`.
    Comment,
    /// Anything else.
    Rule(&'a str),
}

impl<'a> Line<'a> {
    fn read(line: &'a str) -> Self {
        let line = line.trim();
        if line.is_empty() {
            Line::Blank
        } else if line.starts_with('#') {
            Line::Comment
        } else {
            Line::Rule(line)
        }
    }
}

/// Parse a date token: `DD.MM`, `E+N`/`E-N`, or `Tse`/`Tss`/`Tae`/`Tws`.
fn parse_date_spec(token: &str) -> Option<DateSpec> {
    if let Some(code) = token.strip_prefix('T') {
        let kind = Season::from_code(code)?;
        return Some(DateSpec::Season { kind });
    }
    if let Some(offset) = token.strip_prefix('E') {
        let (sign, digits) = match offset.split_at_checked(1)? {
            ("+", digits) => (1, digits),
            ("-", digits) => (-1, digits),
            _ => return None,
        };
        let days: i64 = parse_digits(digits, usize::MAX)?;
        return Some(DateSpec::EasterOffset {
            offset_days: sign * days,
        });
    }
    let (day, month) = token.split_once('.')?;
    let day: u32 = parse_digits(day, 2)?;
    let month: u32 = parse_digits(month, 2)?;
    if (1..=31).contains(&day) && (1..=12).contains(&month) {
        Some(DateSpec::Absolute { day, month })
    } else {
        None
    }
}

/// Parse a non-empty run of at most `max_len` ASCII digits.
fn parse_digits<T: std::str::FromStr>(s: &str, max_len: usize) -> Option<T> {
    if s.is_empty() || s.len() > max_len || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

/// Split an optional `<digit>:` colour prefix off a segment.
fn split_color(text: &str) -> (ColorCode, &str) {
    let mut chars = text.chars();
    match (chars.next(), chars.next()) {
        (Some(c), Some(':')) => match ColorCode::from_digit(c) {
            Some(color) => (color, text[2..].trim_start()),
            None => (ColorCode::DEFAULT, text),
        },
        _ => (ColorCode::DEFAULT, text),
    }
}

impl Parser {
    pub fn new(source_path: impl Into<String>) -> Self {
        Parser {
            source_path: source_path.into(),
        }
    }

    /// Parse all the rules in the given text.
    pub fn parse(&self, text: &str) -> (SpecialDays, Vec<ParseError>) {
        let text = text.strip_prefix('\u{feff}').unwrap_or(text);
        let mut rules = Vec::new();
        let mut errors = Vec::new();
        for (idx, line) in text.lines().enumerate() {
            match Line::read(line) {
                Line::Blank | Line::Comment => {}
                Line::Rule(line) => match self.parse_rule(idx + 1, line) {
                    Ok(rule) => rules.push(rule),
                    Err(e) => errors.push(e),
                },
            }
        }
        (SpecialDays::new(self.source_path.clone(), rules), errors)
    }

    /// Parse one rule line. `line_num` is 1-based.
    pub fn parse_rule(&self, line_num: usize, line: &str) -> Result<RawRule, ParseError> {
        let line = line.trim();
        let error = |message: String| ParseError::new(message, self.source_path.clone(), line_num, line);

        let mut tokens = line.split_whitespace();
        let token = tokens
            .next()
            .ok_or_else(|| error("Empty line.".to_string()))?;
        let date_spec =
            parse_date_spec(token).ok_or_else(|| error(format!("Unrecognized date '{token}'.")))?;

        let words: Vec<&str> = tokens.collect();
        if words.is_empty() {
            return Err(error("Missing text after the date.".to_string()));
        }

        // Words are whitespace-normalised, so a standalone `/` separates segments.
        let mut segments = Vec::new();
        for (idx, group) in words.split(|w| *w == "/").enumerate() {
            let text = group.join(" ");
            let (color, text) = split_color(&text);
            if text.is_empty() {
                return Err(error(format!("Segment {} is empty.", idx + 1)));
            }
            segments.push(Segment::new(color, text));
        }

        Ok(RawRule {
            date_spec,
            segments,
            line: line_num,
        })
    }
}
