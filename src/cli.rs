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

use std::path::PathBuf;

use calgen_core::Fallible;
use calgen_core::Language;
use clap::Args;
use clap::Parser;

use crate::cmd::SourceOptions;
use crate::cmd::check::check_days_file;
use crate::cmd::list::ListConfig;
use crate::cmd::list::ListFormat;
use crate::cmd::list::list_special_days;
use crate::cmd::render::RenderConfig;
use crate::cmd::render::render_calendar;
use crate::render::OutputFormat;

#[derive(Parser)]
#[command(version, about, long_about = None)]
enum Command {
    /// Render calendar pages.
    Render {
        /// The year of the first page.
        year: i32,
        /// A month (`3`) or a run of months (`1-12`). A run ending before it
        /// starts continues into the next year (`11-2`).
        months: String,
        /// Path to the output file. By default, `YEAR-MONTHS.html` (or `.txt`).
        #[arg(long)]
        output: Option<PathBuf>,
        /// Which output format to use.
        #[arg(long, default_value_t = OutputFormat::Html)]
        format: OutputFormat,
        /// Open the rendered file with the default application.
        #[arg(long)]
        open: bool,
        #[command(flatten)]
        sources: SourceArgs,
    },
    /// Print the special days of a year.
    List {
        year: i32,
        /// Only print this month.
        #[arg(long)]
        month: Option<u32>,
        /// Which output format to use.
        #[arg(long, default_value_t = ListFormat::Text)]
        format: ListFormat,
        #[command(flatten)]
        sources: SourceArgs,
    },
    /// Check a special-day file for malformed lines and impossible dates.
    Check {
        /// Path to the special-day file.
        file: PathBuf,
        /// The year to resolve dates for. By default, the current year.
        #[arg(long)]
        year: Option<i32>,
    },
}

#[derive(Args)]
struct SourceArgs {
    /// Language code: svSE, enUS or deDE. By default, the configured language.
    #[arg(long)]
    language: Option<Language>,
    /// Path to a special-day file. By default, `days_<language>.txt` in the
    /// configured days directory.
    #[arg(long)]
    days: Option<PathBuf>,
    /// Path to a TOML configuration file.
    #[arg(long)]
    config: Option<PathBuf>,
}

impl From<SourceArgs> for SourceOptions {
    fn from(args: SourceArgs) -> Self {
        SourceOptions {
            language: args.language,
            days: args.days,
            config: args.config,
        }
    }
}

pub fn entrypoint() -> Fallible<()> {
    let cli: Command = Command::parse();
    match cli {
        Command::Render {
            year,
            months,
            output,
            format,
            open,
            sources,
        } => {
            let config = RenderConfig {
                year,
                months,
                output,
                format,
                sources: sources.into(),
                open,
            };
            let path = render_calendar(config)?;
            println!("{}", path.display());
            Ok(())
        }
        Command::List {
            year,
            month,
            format,
            sources,
        } => list_special_days(ListConfig {
            year,
            month,
            format,
            sources: sources.into(),
        }),
        Command::Check { file, year } => check_days_file(&file, year),
    }
}
