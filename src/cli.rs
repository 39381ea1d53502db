use std::path::PathBuf;

use anyhow::Context;
use chrono::{Datelike, Local};
use clap::{Parser, Subcommand};

use civilite::Config;

#[derive(Parser)]
#[command(author, version, about, propagate_version = true)]
#[must_use]
pub struct Args {
    /// TOML file with the observer and the weekly occupancy schedule.
    ///
    /// The built-in Rochester parking lot schedule is used when omitted.
    #[clap(long, env = "CIVILITE_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

impl Args {
    pub fn load_config(&self) -> anyhow::Result<Config> {
        match &self.config {
            Some(path) => Config::load(path).with_context(|| {
                format!("failed to load the configuration from `{}`", path.display())
            }),
            None => Ok(Config::default()),
        }
    }
}

#[derive(Subcommand)]
pub enum Command {
    /// Print the weekly occupancy schedule.
    #[clap(name = "schedule")]
    Schedule,

    /// Write the daily sunsets and event types to a CSV file.
    #[clap(name = "sunsets")]
    Sunsets(YearArgs),

    /// Render the yearly lighting calendar.
    #[clap(name = "calendar")]
    Calendar(YearArgs),
}

#[derive(clap::Args)]
pub struct YearArgs {
    /// Year to compute, the current one by default.
    pub year: Option<i32>,

    /// Output file path, derived from the year when omitted.
    #[clap(long, short)]
    pub output: Option<PathBuf>,
}

impl YearArgs {
    pub fn year(&self) -> i32 {
        self.year.unwrap_or_else(|| Local::now().year())
    }

    pub fn output_or(&self, default_name: String) -> PathBuf {
        self.output.clone().unwrap_or_else(|| PathBuf::from(default_name))
    }
}
