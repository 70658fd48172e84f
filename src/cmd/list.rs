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

use calgen_core::Fallible;
use calgen_core::ResolvedEntry;
use calgen_core::Resolution;
use calgen_core::fail;
use calgen_core::resolver::check_year;
use clap::ValueEnum;

use crate::cmd::Loaded;
use crate::cmd::SourceOptions;
use crate::load::resolve_years;
use crate::render::text::segments_line;

#[derive(ValueEnum, Clone, Copy, PartialEq, Debug)]
pub enum ListFormat {
    /// One line per special day.
    Text,
    /// A JSON array of entries.
    Json,
}

impl Display for ListFormat {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ListFormat::Text => write!(f, "text"),
            ListFormat::Json => write!(f, "json"),
        }
    }
}

pub struct ListConfig {
    pub year: i32,
    /// Only list this month.
    pub month: Option<u32>,
    pub format: ListFormat,
    pub sources: SourceOptions,
}

fn format_entries(entries: &[&ResolvedEntry], format: ListFormat) -> Fallible<String> {
    match format {
        ListFormat::Json => {
            let mut json = serde_json::to_string_pretty(entries)?;
            json.push('\n');
            Ok(json)
        }
        ListFormat::Text => {
            let mut out = String::new();
            for entry in entries {
                let marker = if entry.is_holiday() { '*' } else { ' ' };
                out.push_str(&format!(
                    "{}{marker} {}\n",
                    entry.date.format("%Y-%m-%d"),
                    segments_line(&entry.segments)
                ));
            }
            Ok(out)
        }
    }
}

/// The entries of a resolution, optionally only one month, in rule order.
fn select(resolution: &Resolution, month: Option<u32>) -> Vec<&ResolvedEntry> {
    match month {
        Some(month) => resolution.in_month(month).collect(),
        None => resolution.entries.iter().collect(),
    }
}

/// Print the special days of a year in rule order.
pub fn list_special_days(config: ListConfig) -> Fallible<()> {
    check_year(config.year)?;
    if let Some(month) = config.month {
        if !(1..=12).contains(&month) {
            return fail(format!("month out of range: {month}."));
        }
    }
    let Loaded { days, .. } = config.sources.load()?;
    let resolutions = resolve_years(&days, &[config.year])?;
    let entries: Vec<&ResolvedEntry> = resolutions
        .iter()
        .flat_map(|r| select(r, config.month))
        .collect();
    print!("{}", format_entries(&entries, config.format)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use calgen_core::parse_special_days;
    use calgen_core::resolve_all;

    use super::*;

    fn make_resolution() -> Fallible<Resolution> {
        let text = "25.12 1:Christmas Day\nE-2 1:Good Friday / Bob\n25.3 2:John's Birthday\n";
        let (days, _) = parse_special_days("days.txt", text);
        Ok(resolve_all(&days, 2024)?)
    }

    #[test]
    fn test_text() -> Fallible<()> {
        let resolution = make_resolution()?;
        let out = format_entries(&select(&resolution, None), ListFormat::Text)?;
        assert_eq!(
            out,
            "2024-12-25* Christmas Day [red]\n2024-03-29* Good Friday [red] / Bob\n2024-03-25  John's Birthday [cyan]\n"
        );
        Ok(())
    }

    #[test]
    fn test_month_filter() -> Fallible<()> {
        let resolution = make_resolution()?;
        let entries = select(&resolution, Some(3));
        assert_eq!(entries.len(), 2);
        assert!(select(&resolution, Some(7)).is_empty());
        Ok(())
    }

    #[test]
    fn test_json() -> Fallible<()> {
        let resolution = make_resolution()?;
        let out = format_entries(&select(&resolution, Some(12)), ListFormat::Json)?;
        let value: serde_json::Value = serde_json::from_str(&out)?;
        assert_eq!(
            value,
            serde_json::json!([
                {
                    "date": "2024-12-25",
                    "segments": [{ "color": 1, "text": "Christmas Day" }]
                }
            ])
        );
        Ok(())
    }

    #[test]
    fn test_invalid_month() {
        let config = ListConfig {
            year: 2024,
            month: Some(13),
            format: ListFormat::Text,
            sources: SourceOptions::default(),
        };
        assert!(list_special_days(config).is_err());
    }
}
