// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

mod fixture;
mod report;

#[cfg(test)]
mod tests;

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use clap_verbosity_flag::{InfoLevel, Verbosity};
use color_eyre::{Result, eyre::Context};
use nonassoc_api::ListQuery;
use nonassoc_domain::EngineConfig;
use time::OffsetDateTime;
use tracing::level_filters::LevelFilter;
use tracing::{debug, error};
use tracing_log::AsTrace;

use crate::fixture::Fixture;
use crate::report::{build_detail, build_report, close};

/// Non-association viewer
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the fixture holding the user, key prisoner, non-associations
    /// and counterparts.
    #[arg(short, long)]
    input: PathBuf,

    /// Path to an engine configuration file. Defaults apply when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,

    #[command(flatten)]
    verbosity: Verbosity<InfoLevel>,
}

#[derive(Clone, Debug, Subcommand)]
enum Command {
    /// Show the key prisoner's non-associations
    #[command(visible_alias = "ls")]
    List(ListArgs),

    /// Show one non-association
    Show {
        /// The non-association id.
        id: i64,
    },

    /// Close a non-association as the fixture's user
    Close {
        /// The non-association id.
        id: i64,

        /// Why it is being closed.
        #[arg(short, long)]
        reason: String,
    },
}

#[derive(Clone, Debug, clap::Args)]
struct ListArgs {
    /// Tab to show: `open` or `closed`.
    #[arg(long)]
    tab: Option<String>,

    /// Field to order each group by, e.g. `LAST_NAME`.
    #[arg(long)]
    sort: Option<String>,

    /// Direction to order in: `ASC` or `DESC`.
    #[arg(long)]
    order: Option<String>,
}

impl ListArgs {
    fn query_pairs(&self) -> Vec<(&'static str, &str)> {
        [
            ("tab", self.tab.as_deref()),
            ("sort", self.sort.as_deref()),
            ("order", self.order.as_deref()),
        ]
        .into_iter()
        .filter_map(|(key, value)| value.map(|value| (key, value)))
        .collect()
    }
}

impl Args {
    async fn run(self) -> Result<String> {
        let config = load_config(self.config.as_deref())?;
        let fixture = load_fixture(&self.input)?;

        let output = match self.command {
            Command::List(list) => {
                let query = ListQuery::from_pairs(list.query_pairs())?;
                serde_json::to_string_pretty(&build_report(&fixture, &query, &config).await?)?
            }
            Command::Show { id } => {
                serde_json::to_string_pretty(&build_detail(&fixture, id, &config).await?)?
            }
            Command::Close { id, reason } => serde_json::to_string_pretty(&close(
                &fixture,
                id,
                &reason,
                OffsetDateTime::now_utc(),
                &config,
            )?)?,
        };
        Ok(output)
    }

    fn log_level(&self) -> LevelFilter {
        self.verbosity.log_level_filter().as_trace()
    }
}

fn load_config(path: Option<&Path>) -> Result<EngineConfig> {
    let Some(path) = path else {
        debug!("Using default engine configuration");
        return Ok(EngineConfig::default());
    };
    let json = std::fs::read_to_string(path)
        .wrap_err_with(|| format!("Failed to read config {}", path.display()))?;
    Ok(EngineConfig::from_json_str(&json)?)
}

fn load_fixture(path: &Path) -> Result<Fixture> {
    let json = std::fs::read_to_string(path)
        .wrap_err_with(|| format!("Failed to read fixture {}", path.display()))?;
    Fixture::from_json_str(&json).wrap_err_with(|| format!("Invalid fixture {}", path.display()))
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let args = Args::parse();
    tracing_subscriber::fmt()
        .with_max_level(args.log_level())
        .with_writer(std::io::stderr)
        .without_time()
        .init();

    match args.run().await {
        Ok(output) => println!("{output}"),
        Err(err) => {
            error!("{err:#}");
            std::process::exit(1);
        }
    }
    Ok(())
}
