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

use std::fs::read;
use std::path::Path;

use calgen_core::ErrorReport;
use calgen_core::Fallible;
use calgen_core::fail;
use calgen_core::parse_special_days;
use calgen_core::resolve_all;
use calgen_core::resolver::current_year;

/// What is wrong with a special-day file.
pub struct CheckReport {
    /// Number of well-formed rules.
    pub rules: usize,
    /// Malformed lines, then rules without a date in the checked year.
    pub problems: Vec<String>,
}

pub fn check_text(source: &str, text: &str, year: i32) -> Fallible<CheckReport> {
    let (days, parse_errors) = parse_special_days(source, text);
    let resolution = resolve_all(&days, year)?;
    let problems = parse_errors
        .iter()
        .map(|e| e.to_string())
        .chain(resolution.errors.iter().map(|e| format!("{e} Location: {source}")))
        .collect();
    Ok(CheckReport {
        rules: days.len(),
        problems,
    })
}

/// Check a special-day file and print every problem.
pub fn check_days_file(path: &Path, year: Option<i32>) -> Fallible<()> {
    let bytes = read(path).map_err(|e| {
        ErrorReport::new(format!("unable to read {}: {e}", path.display()))
    })?;
    let text = String::from_utf8(bytes)?;
    let year = year.unwrap_or_else(current_year);
    let source = path.display().to_string();
    let CheckReport { rules, problems } = check_text(&source, &text, year)?;
    for problem in &problems {
        println!("{problem}");
    }
    if problems.is_empty() {
        println!("{source}: {rules} rules, no problems for {year}.");
        Ok(())
    } else {
        fail(format!("{} problem(s) found in {source}.", problems.len()))
    }
}
