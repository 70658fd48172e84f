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

pub mod check;
pub mod list;
pub mod render;

use std::path::PathBuf;

use calgen_core::Fallible;
use calgen_core::Language;
use calgen_core::SpecialDays;

use crate::config::Config;
use crate::config::load_config;
use crate::load::load_special_days;

/// Where the configuration and special days come from.
#[derive(Default)]
pub struct SourceOptions {
    /// Overrides the configured language.
    pub language: Option<Language>,
    /// An explicit special-day file, instead of the language's file.
    pub days: Option<PathBuf>,
    pub config: Option<PathBuf>,
}

pub struct Loaded {
    pub config: Config,
    pub language: Language,
    pub days: SpecialDays,
}

impl SourceOptions {
    pub fn load(&self) -> Fallible<Loaded> {
        let config = load_config(self.config.as_deref())?;
        let language = self.language.unwrap_or(config.language);
        let days = load_special_days(self.days.as_deref(), config.days_directory(), language)?;
        Ok(Loaded {
            config,
            language,
            days,
        })
    }
}
