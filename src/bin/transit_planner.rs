use std::io;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use log::info;

use transit_planner::{
    julian_date_now, render_table, run_pipeline, to_calendar_date_time, write_csv, Catalog,
    JulianDate, PlannerConfig,
};

#[derive(Clone, ValueEnum)]
enum OutputFormat {
    Table,
    Csv,
}

#[derive(Parser)]
#[command(name = "transit_planner")]
#[command(about = "Predict exoplanet transits observable during a run of nights")]
struct Cli {
    /// Exoplanet catalog CSV (header row, planet name in column 0)
    catalog: PathBuf,

    /// TOML file overriding filter bounds and the observing plan
    #[arg(long)]
    config: Option<PathBuf>,

    /// Current time as a Julian Date (defaults to the system clock)
    #[arg(long)]
    now: Option<f64>,

    /// Start of the first observing session as a Julian Date
    #[arg(long)]
    first_night: Option<f64>,

    /// Number of observing nights
    #[arg(long)]
    nights: Option<usize>,

    /// Output format
    #[arg(long, value_enum, default_value = "table")]
    format: OutputFormat,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => PlannerConfig::load(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => PlannerConfig::default(),
    };
    if let Some(jd) = cli.first_night {
        config.observing.first_night_start = to_calendar_date_time(JulianDate(jd));
    }
    if let Some(nights) = cli.nights {
        config.observing.night_count = nights;
    }

    let now = cli.now.map(JulianDate).unwrap_or_else(julian_date_now);
    info!("Planning from {} ({})", now, to_calendar_date_time(now));

    let catalog = Catalog::from_path(&cli.catalog)
        .with_context(|| format!("Failed to read catalog {}", cli.catalog.display()))?;
    let report = run_pipeline(&catalog, &config, now)?;

    match cli.format {
        OutputFormat::Table => print!("{}", render_table(&report)),
        OutputFormat::Csv => write_csv(&report, io::stdout().lock())?,
    }
    Ok(())
}
