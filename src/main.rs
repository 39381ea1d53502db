mod cli;

use std::{fs::File, io::BufWriter};

use anyhow::Context;
use clap::{crate_version, Parser};
use tracing::info;
use tracing_subscriber::EnvFilter;

use civilite::{build_year, render_calendar, write_csv};

use crate::cli::{Args, Command};

fn main() -> anyhow::Result<()> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .without_time()
        .compact()
        .init();
    info!(version = crate_version!(), "starting…");

    let args = Args::parse();
    let config = args.load_config()?;
    let schedule = config.schedule()?;
    info!(location = %config.observer.name, n_events = schedule.len(), "loaded the schedule");

    match &args.command {
        Command::Schedule => {
            println!("{schedule}");
        }

        Command::Sunsets(year_args) => {
            let year = year_args.year();
            let records = build_year(&schedule, &config.observer()?, year)?;
            let path = year_args.output_or(format!("sunsets_{year}.csv"));
            let file = File::create(&path)
                .with_context(|| format!("failed to create `{}`", path.display()))?;
            write_csv(&records, BufWriter::new(file))?;
            info!(path = %path.display(), "created the sunset schedule");
        }

        Command::Calendar(year_args) => {
            let year = year_args.year();
            let records = build_year(&schedule, &config.observer()?, year)?;
            let path = year_args.output_or(format!("lighting_calendar_{year}.txt"));
            std::fs::write(&path, render_calendar(&records, &schedule, year))
                .with_context(|| format!("failed to write `{}`", path.display()))?;
            info!(path = %path.display(), "created the calendar");
        }
    }

    info!("done!");
    Ok(())
}
