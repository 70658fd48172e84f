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

use calgen_core::ColorCode;
use calgen_core::DayCell;
use calgen_core::Language;
use calgen_core::MonthGrid;
use calgen_core::Segment;
use chrono::Weekday;

use crate::render::Document;

/// Width of a day column.
const CELL: usize = 4;

fn weekday_header(language: Language) -> String {
    let mut line = String::new();
    let mut weekday = Weekday::Mon;
    for _ in 0..7 {
        let short: String = language.weekday_name(weekday).chars().take(2).collect();
        line.push_str(&format!("{short:>width$} ", width = CELL - 1));
        weekday = weekday.succ();
    }
    line.trim_end().to_string()
}

/// Red days are marked with a star after the number.
fn day_number(day: &DayCell) -> String {
    let marker = if day.is_red() { '*' } else { ' ' };
    format!("{:>width$}{marker}", day.day(), width = CELL - 1)
}

fn cell(cell: &Option<DayCell>) -> String {
    match cell {
        Some(day) => day_number(day),
        None => " ".repeat(CELL),
    }
}

fn segment(segment: &Segment) -> String {
    if segment.color == ColorCode::DEFAULT {
        segment.text.clone()
    } else {
        format!("{} [{}]", segment.text, segment.color.style().name)
    }
}

/// The segments of a day on one line, non-default colours named in brackets.
pub fn segments_line(segments: &[Segment]) -> String {
    let texts: Vec<String> = segments.iter().map(segment).collect();
    texts.join(" / ")
}

fn page(out: &mut String, language: Language, grid: &MonthGrid) {
    let month = language.month_name(grid.month()).unwrap_or_default();
    out.push_str(&format!("{month} {}\n\n", grid.year()));
    out.push_str(&weekday_header(language));
    out.push('\n');
    for week in grid.weeks() {
        let line: String = week.iter().map(cell).collect();
        out.push_str(line.trim_end());
        out.push('\n');
    }
    let annotated: Vec<&DayCell> = grid.days().filter(|c| !c.segments.is_empty()).collect();
    if !annotated.is_empty() {
        out.push('\n');
        for day in annotated {
            let line = format!("{}  {}\n", day_number(day), segments_line(&day.segments));
            out.push_str(&line);
        }
    }
}

pub fn render_text(document: &Document) -> String {
    let mut out = String::new();
    for (idx, grid) in document.pages.iter().enumerate() {
        if idx > 0 {
            out.push('\n');
        }
        page(&mut out, document.language, grid);
    }
    out
}

#[cfg(test)]
mod tests {
    use calgen_core::Fallible;
    use calgen_core::parse_special_days;
    use calgen_core::resolve_all;

    use super::*;
    use crate::config::Appearance;

    #[test]
    fn test_month() -> Fallible<()> {
        let (days, _) = parse_special_days(
            "days.txt",
            "E-2 1:Good Friday / Bob\n1.3 2:Spring\n30.02 Nonexistent\n",
        );
        let resolution = resolve_all(&days, 2024)?;
        let appearance = Appearance::default();
        let document = Document {
            language: Language::English,
            appearance: &appearance,
            pages: vec![MonthGrid::new(2024, 3, &resolution.entries).unwrap()],
        };
        let text = render_text(&document);
        let expected = "\
March 2024

 Mo  Tu  We  Th  Fr  Sa  Su
                  1   2   3*
  4   5   6   7   8   9  10*
 11  12  13  14  15  16  17*
 18  19  20  21  22  23  24*
 25  26  27  28  29* 30  31*

  1   Spring [cyan]
 29*  Good Friday [red] / Bob
";
        assert_eq!(text, expected);
        Ok(())
    }

    #[test]
    fn test_pages_separated_by_blank_line() {
        let appearance = Appearance::default();
        let document = Document {
            language: Language::German,
            appearance: &appearance,
            pages: vec![
                MonthGrid::new(2021, 1, []).unwrap(),
                MonthGrid::new(2021, 2, []).unwrap(),
            ],
        };
        let text = render_text(&document);
        assert!(text.starts_with("Jänner 2021\n\n Mo  Di  Mi  Do  Fr  Sa  So\n"));
        assert!(text.contains(" 31*\n\nFebruar 2021\n\n"));
        assert!(text.ends_with(" 22  23  24  25  26  27  28*\n"));
    }

    #[test]
    fn test_swedish_header() {
        assert_eq!(weekday_header(Language::Swedish), " Må  Ti  On  To  Fr  Lö  Sö");
    }
}
