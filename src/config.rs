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

use std::fs::read_to_string;
use std::path::Path;
use std::path::PathBuf;

use calgen_core::ErrorReport;
use calgen_core::Fallible;
use calgen_core::Language;
use calgen_core::fail;
use serde::Deserialize;

/// Settings read from the optional TOML configuration file.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub language: Language,
    /// Where to look for `days_<language>.txt`. Defaults to the current
    /// directory.
    pub days_directory: Option<PathBuf>,
    #[serde(default)]
    pub appearance: Appearance,
}

/// Page colours, as `#rrggbb`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Appearance {
    #[serde(default = "default_black")]
    pub title_color: String,
    #[serde(default = "default_black")]
    pub weekday_color: String,
    #[serde(default = "default_black")]
    pub frame_border: String,
    #[serde(default = "default_frame_background")]
    pub frame_background: String,
    #[serde(default = "default_black")]
    pub day_border: String,
    #[serde(default = "default_day_background")]
    pub day_background: String,
}

impl Default for Appearance {
    fn default() -> Self {
        Self {
            title_color: default_black(),
            weekday_color: default_black(),
            frame_border: default_black(),
            frame_background: default_frame_background(),
            day_border: default_black(),
            day_background: default_day_background(),
        }
    }
}

fn default_black() -> String {
    "#000000".to_string()
}

fn default_frame_background() -> String {
    "#87cefa".to_string()
}

fn default_day_background() -> String {
    "#ffffff".to_string()
}

fn is_hex_color(s: &str) -> bool {
    match s.strip_prefix('#') {
        Some(hex) => hex.len() == 6 && hex.bytes().all(|b| b.is_ascii_hexdigit()),
        None => false,
    }
}

impl Config {
    pub fn parse(text: &str) -> Fallible<Self> {
        let config: Config = toml::from_str(text)
            .map_err(|e| ErrorReport::new(format!("Failed to parse configuration: {e}")))?;
        let Appearance {
            title_color,
            weekday_color,
            frame_border,
            frame_background,
            day_border,
            day_background,
        } = &config.appearance;
        for color in [
            title_color,
            weekday_color,
            frame_border,
            frame_background,
            day_border,
            day_background,
        ] {
            if !is_hex_color(color) {
                return fail(format!("invalid colour '{color}', expected #rrggbb."));
            }
        }
        Ok(config)
    }

    pub fn days_directory(&self) -> &Path {
        self.days_directory.as_deref().unwrap_or(Path::new("."))
    }
}

/// Load the configuration file, or the defaults when no path is given.
pub fn load_config(path: Option<&Path>) -> Fallible<Config> {
    match path {
        Some(path) => {
            let text = read_to_string(path).map_err(|e| {
                ErrorReport::new(format!(
                    "unable to read configuration file {}: {e}",
                    path.display()
                ))
            })?;
            let config = Config::parse(&text)?;
            log::debug!("Loaded configuration from {}", path.display());
            Ok(config)
        }
        None => Ok(Config::default()),
    }
}
