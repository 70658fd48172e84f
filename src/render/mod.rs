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

pub mod html;
pub mod text;

use std::fmt::Display;
use std::fmt::Formatter;

use calgen_core::Language;
use calgen_core::MonthGrid;
use clap::ValueEnum;

use crate::config::Appearance;

#[derive(ValueEnum, Clone, Copy, PartialEq, Debug)]
pub enum OutputFormat {
    /// Printable HTML, one A4 landscape page per month.
    Html,
    /// Plain text.
    Text,
}

impl OutputFormat {
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Html => "html",
            OutputFormat::Text => "txt",
        }
    }
}

impl Display for OutputFormat {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Html => write!(f, "html"),
            OutputFormat::Text => write!(f, "text"),
        }
    }
}

/// Everything needed to draw a run of month pages.
pub struct Document<'a> {
    pub language: Language,
    pub appearance: &'a Appearance,
    pub pages: Vec<MonthGrid>,
}

pub fn render(format: OutputFormat, document: &Document) -> String {
    match format {
        OutputFormat::Html => html::render_html(document).into_string(),
        OutputFormat::Text => text::render_text(document),
    }
}
