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

use std::fs::write;
use std::path::PathBuf;

use calgen_core::ErrorReport;
use calgen_core::Fallible;
use calgen_core::MonthGrid;
use calgen_core::MonthRange;
use calgen_core::resolver::check_year;

use crate::cmd::Loaded;
use crate::cmd::SourceOptions;
use crate::load::resolve_years;
use crate::render::Document;
use crate::render::OutputFormat;
use crate::render::render;

pub struct RenderConfig {
    pub year: i32,
    /// `M` or `S-E`.
    pub months: String,
    pub output: Option<PathBuf>,
    pub format: OutputFormat,
    pub sources: SourceOptions,
    /// Open the result in the default viewer.
    pub open: bool,
}

/// `2024-1-12.html` for `calgen render 2024 1-12`.
fn default_output(year: i32, months: &str, format: OutputFormat) -> PathBuf {
    PathBuf::from(format!("{year}-{months}.{}", format.extension()))
}

/// Render the pages and write them out. Returns the path written.
pub fn render_calendar(config: RenderConfig) -> Fallible<PathBuf> {
    let range = MonthRange::parse(config.year, &config.months)?;
    let years = range.years();
    for &year in &years {
        check_year(year)?;
    }

    let Loaded {
        config: settings,
        language,
        days,
    } = config.sources.load()?;
    let resolutions = resolve_years(&days, &years)?;

    let mut pages = Vec::new();
    for (year, month) in range.iter() {
        let resolution = resolutions
            .iter()
            .find(|r| r.year == year)
            .ok_or_else(|| ErrorReport::new(format!("no special days resolved for {year}.")))?;
        let grid = MonthGrid::new(year, month, &resolution.entries)
            .ok_or_else(|| ErrorReport::new(format!("invalid month: {year}-{month}.")))?;
        pages.push(grid);
    }
    let page_count = pages.len();

    let document = Document {
        language,
        appearance: &settings.appearance,
        pages,
    };
    let content = render(config.format, &document);

    let path = config
        .output
        .unwrap_or_else(|| default_output(config.year, &config.months, config.format));
    write(&path, content).map_err(|e| {
        ErrorReport::new(format!("unable to write {}: {e}", path.display()))
    })?;
    log::info!("Wrote {page_count} page(s) to {}", path.display());

    if config.open {
        open::that(&path).map_err(|e| {
            ErrorReport::new(format!("unable to open {}: {e}", path.display()))
        })?;
    }
    Ok(path)
}
