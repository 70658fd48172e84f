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
use maud::DOCTYPE;
use maud::Markup;
use maud::PreEscaped;
use maud::html;

use crate::config::Appearance;
use crate::render::Document;

const WEEK: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

fn stylesheet(appearance: &Appearance) -> String {
    let red = ColorCode::HOLIDAY.style().color;
    format!(
        "@page {{ size: A4 landscape; margin: 10mm; }}
body {{ margin: 0; font-family: 'Bitstream Vera Sans', 'DejaVu Sans', sans-serif; }}
.page {{ height: 190mm; display: flex; flex-direction: column; page-break-after: always; break-after: page; }}
.page:last-child {{ page-break-after: auto; break-after: auto; }}
.header {{ display: flex; justify-content: space-between; padding: 0 5mm; font-size: 44pt; color: {title}; }}
.frame {{ flex: 1; display: flex; flex-direction: column; background: {frame}; border: 1px solid {frame_border}; border-radius: 5mm; padding: 5mm; }}
.weekdays, .week {{ display: grid; grid-template-columns: repeat(7, 1fr); gap: 2mm; }}
.weekdays {{ font-size: 16pt; margin-bottom: 2mm; color: {weekday}; }}
.weeks {{ flex: 1; display: grid; gap: 2mm; }}
.day {{ display: flex; background: {day}; border: 1px solid {day_border}; border-radius: 2mm; overflow: hidden; }}
.day.empty {{ visibility: hidden; }}
.num {{ font-size: 24pt; min-width: 1.4em; text-align: right; }}
.num.red {{ color: {red}; }}
.items {{ font-size: 8pt; padding: 1mm 1mm 0 1mm; }}
",
        title = appearance.title_color,
        weekday = appearance.weekday_color,
        frame_border = appearance.frame_border,
        frame = appearance.frame_background,
        day_border = appearance.day_border,
        day = appearance.day_background,
    )
}

fn segment_style(segment: &Segment) -> String {
    let style = segment.color.style();
    let mut css = format!("color: {};", style.color);
    if style.italic {
        css.push_str(" font-style: italic;");
    }
    if style.bold {
        css.push_str(" font-weight: bold;");
    }
    css
}

fn day_cell(cell: &Option<DayCell>) -> Markup {
    match cell {
        None => html! { div.day.empty {} },
        Some(cell) => html! {
            div.day {
                span.num.red[cell.is_red()] { (cell.day()) }
                @if !cell.segments.is_empty() {
                    div.items {
                        @for segment in &cell.segments {
                            div style=(segment_style(segment)) { (segment.text) }
                        }
                    }
                }
            }
        },
    }
}

fn page(language: Language, grid: &MonthGrid) -> Markup {
    let month = language.month_name(grid.month()).unwrap_or_default();
    html! {
        section.page {
            div.header {
                span.month { (month) }
                span.year { (grid.year()) }
            }
            div.frame {
                div.weekdays {
                    @for weekday in WEEK {
                        div { (language.weekday_name(weekday)) }
                    }
                }
                div.weeks style=(format!("grid-template-rows: repeat({}, 1fr);", grid.weeks().len())) {
                    @for week in grid.weeks() {
                        div.week {
                            @for cell in week {
                                (day_cell(cell))
                            }
                        }
                    }
                }
            }
        }
    }
}

pub fn render_html(document: &Document) -> Markup {
    let name = |grid: &MonthGrid| {
        let month = document.language.month_name(grid.month()).unwrap_or_default();
        format!("{month} {}", grid.year())
    };
    let title = match document.pages.as_slice() {
        [] => "calgen".to_string(),
        [only] => name(only),
        [first, .., last] => format!("{} - {}", name(first), name(last)),
    };
    html! {
        (DOCTYPE)
        html lang=(&document.language.code()[..2]) {
            head {
                meta charset="utf-8";
                title { (title) }
                style { (PreEscaped(stylesheet(document.appearance))) }
            }
            body {
                @for grid in &document.pages {
                    (page(document.language, grid))
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use calgen_core::Fallible;
    use calgen_core::parse_special_days;
    use calgen_core::resolve_all;

    use super::*;

    fn make_document<'a>(
        appearance: &'a Appearance,
        text: &str,
        months: &[u32],
    ) -> Fallible<Document<'a>> {
        let (days, _) = parse_special_days("days.txt", text);
        let resolution = resolve_all(&days, 2024)?;
        let pages = months
            .iter()
            .map(|&m| MonthGrid::new(2024, m, &resolution.entries).unwrap())
            .collect();
        Ok(Document {
            language: Language::English,
            appearance,
            pages,
        })
    }

    #[test]
    fn test_page() -> Fallible<()> {
        let appearance = Appearance::default();
        let document = make_document(&appearance, "E-2 1:Good Friday / 2:Bob\n", &[3])?;
        let html = render_html(&document).into_string();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<html lang=\"en\">"));
        assert!(html.contains("<span class=\"month\">March</span>"));
        assert!(html.contains("<span class=\"year\">2024</span>"));
        assert!(html.contains("<div>Monday</div>"));
        assert!(html.contains("<span class=\"num red\">29</span>"));
        assert!(html.contains("<span class=\"num\">28</span>"));
        assert!(html.contains("<div style=\"color: #ff0000;\">Good Friday</div>"));
        assert!(html.contains("<div style=\"color: #00ffff;\">Bob</div>"));
        assert_eq!(html.matches("<section class=\"page\">").count(), 1);
        assert!(html.contains("<title>March 2024</title>"));
        Ok(())
    }

    #[test]
    fn test_text_is_escaped() -> Fallible<()> {
        let appearance = Appearance::default();
        let document = make_document(&appearance, "1.3 <b>Tom & Jerry</b>\n", &[3])?;
        let html = render_html(&document).into_string();
        assert!(html.contains("&lt;b&gt;Tom &amp; Jerry&lt;/b&gt;"));
        Ok(())
    }

    #[test]
    fn test_italic_style() -> Fallible<()> {
        let appearance = Appearance::default();
        let document = make_document(&appearance, "1.3 3:Quiet\n", &[3])?;
        let html = render_html(&document).into_string();
        assert!(html.contains("style=\"color: #000000; font-style: italic;\""));
        Ok(())
    }

    #[test]
    fn test_one_section_per_month() -> Fallible<()> {
        let appearance = Appearance::default();
        let document = make_document(&appearance, "", &[1, 2, 3])?;
        let html = render_html(&document).into_string();
        assert_eq!(html.matches("<section class=\"page\">").count(), 3);
        assert!(html.contains("<title>January 2024 - March 2024</title>"));
        Ok(())
    }

    #[test]
    fn test_appearance_colors() -> Fallible<()> {
        let appearance = Appearance {
            weekday_color: "#0000aa".to_string(),
            frame_border: "#00aa00".to_string(),
            frame_background: "#123456".to_string(),
            day_border: "#aa0000".to_string(),
            ..Appearance::default()
        };
        let document = make_document(&appearance, "", &[3])?;
        let html = render_html(&document).into_string();
        assert!(html.contains("background: #123456; border: 1px solid #00aa00;"));
        assert!(html.contains("background: #ffffff; border: 1px solid #aa0000;"));
        assert!(html.contains("margin-bottom: 2mm; color: #0000aa;"));
        Ok(())
    }
}
