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
use calgen_core::Language;
use calgen_core::Resolution;
use calgen_core::SpecialDays;
use calgen_core::parse_special_days;
use calgen_core::resolve_all;

/// Parse a special-day file from disk. Malformed lines are logged and
/// skipped.
pub fn read_special_days(path: &Path) -> Fallible<SpecialDays> {
    let bytes = read(path).map_err(|e| {
        ErrorReport::new(format!("unable to read {}: {e}", path.display()))
    })?;
    let text = String::from_utf8(bytes)?;
    let source = path.display().to_string();
    let (days, errors) = parse_special_days(&source, &text);
    for error in &errors {
        log::warn!("Skipping line: {error}");
    }
    log::info!("Loaded {} special days from {source}", days.len());
    Ok(days)
}

/// Load the special days to print.
///
/// An explicitly given file must exist. Otherwise the language's
/// `days_<code>.txt` is looked up in `directory`; if it is missing the pages
/// are printed without special days.
pub fn load_special_days(
    days: Option<&Path>,
    directory: &Path,
    language: Language,
) -> Fallible<SpecialDays> {
    if let Some(path) = days {
        return read_special_days(path);
    }
    let path = directory.join(language.days_file_name());
    if !path.is_file() {
        log::warn!(
            "Unable to open {}, continuing without special days.",
            path.display()
        );
        return Ok(SpecialDays::empty(path.display().to_string()));
    }
    read_special_days(&path)
}

/// Resolve the special days for each year, logging the rules that have no
/// date in that year.
pub fn resolve_years(days: &SpecialDays, years: &[i32]) -> Fallible<Vec<Resolution>> {
    let mut resolutions = Vec::with_capacity(years.len());
    for &year in years {
        let resolution = resolve_all(days, year)?;
        for error in &resolution.errors {
            log::warn!("Skipping special day from {}: {error}", days.source());
        }
        resolutions.push(resolution);
    }
    Ok(resolutions)
}

#[cfg(test)]
mod tests {
    use std::fs::write;

    use calgen_core::DateSpec;
    use calgen_core::Season;
    use tempfile::tempdir;

    use super::*;

    #[test]
    fn test_explicit_file() -> Fallible<()> {
        let dir = tempdir()?;
        let path = dir.path().join("mine.txt");
        write(&path, "25.3 John's Birthday\nnot a rule\nTws Winter Solstice\n")?;
        let days = load_special_days(Some(&path), Path::new("."), Language::English)?;
        assert_eq!(days.len(), 2);
        assert_eq!(
            days.rules()[1].date_spec,
            DateSpec::Season {
                kind: Season::WinterSolstice
            }
        );
        Ok(())
    }

    #[test]
    fn test_explicit_file_missing() {
        let result = load_special_days(
            Some(Path::new("./does-not-exist.txt")),
            Path::new("."),
            Language::English,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_language_file() -> Fallible<()> {
        let dir = tempdir()?;
        write(dir.path().join("days_svSE.txt"), "6.6 1:Sveriges nationaldag\n")?;
        let days = load_special_days(None, dir.path(), Language::Swedish)?;
        assert_eq!(days.len(), 1);
        Ok(())
    }

    #[test]
    fn test_language_file_missing() -> Fallible<()> {
        let dir = tempdir()?;
        let days = load_special_days(None, dir.path(), Language::German)?;
        assert!(days.is_empty());
        Ok(())
    }

    #[test]
    fn test_invalid_utf8() -> Fallible<()> {
        let dir = tempdir()?;
        let path = dir.path().join("latin1.txt");
        write(&path, b"6.6 S\xf6ndag\n")?;
        assert!(read_special_days(&path).is_err());
        Ok(())
    }

    #[test]
    fn test_resolve_years() -> Fallible<()> {
        let (days, _) = parse_special_days("days.txt", "29.2 Leap Day\n");
        let resolutions = resolve_years(&days, &[2024, 2025])?;
        assert_eq!(resolutions[0].entries.len(), 1);
        assert_eq!(resolutions[1].entries.len(), 0);
        assert_eq!(resolutions[1].errors.len(), 1);
        assert!(resolve_years(&days, &[1000]).is_err());
        Ok(())
    }

    #[test]
    fn test_shipped_files_are_clean() -> Fallible<()> {
        let files = [
            ("days_enUS.txt", include_str!("../days/days_enUS.txt")),
            ("days_svSE.txt", include_str!("../days/days_svSE.txt")),
            ("days_deDE.txt", include_str!("../days/days_deDE.txt")),
        ];
        for (name, text) in files {
            let (days, errors) = parse_special_days(name, text);
            assert!(errors.is_empty(), "{name}: {errors:?}");
            assert!(!days.is_empty());
            for year in 2000..=2100 {
                let resolution = resolve_all(&days, year)?;
                assert!(resolution.errors.is_empty(), "{name} {year}");
            }
        }
        Ok(())
    }
}
