//! # superstore-bi
//!
//! Reshapes the Superstore transactions export into star schema tables and
//! forecasts daily sales.

mod pipeline;
mod plot;

use std::path::PathBuf;

use clap::Parser;
use data_facade::{ExportConfigBuilder, DEFAULT_INPUT_PATH};
use forecast_facade::ForecastConfig;
use tracing::error;
use tracing_subscriber::EnvFilter;

use pipeline::RunSettings;

#[derive(Parser, Debug)]
#[command(name = "superstore-bi")]
#[command(
    about = "Star schema export and sales forecast for the Superstore dataset",
    long_about = None
)]
struct Cli {
    /// Raw transactions file (Latin-1 CSV, 21 columns)
    #[arg(short, long, default_value = DEFAULT_INPUT_PATH)]
    input: PathBuf,

    /// Directory receiving the output tables
    #[arg(short, long, default_value = ".")]
    output_dir: PathBuf,

    /// Number of future month starts to forecast [default: 12]
    #[arg(long)]
    horizon: Option<usize>,

    /// JSON file with forecast settings
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Only export the star schema tables
    #[arg(long)]
    skip_forecast: bool,

    /// Draw the forecast in the terminal
    #[arg(long)]
    plot: bool,

    /// Debug logging (RUST_LOG takes precedence)
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn settings(&self) -> anyhow::Result<RunSettings> {
        let export = ExportConfigBuilder::new()
            .input(&self.input)
            .output_dir(&self.output_dir)
            .build();

        let forecast = if self.skip_forecast {
            None
        } else {
            let mut config = match &self.config {
                Some(path) => ForecastConfig::from_json_file(path)?,
                None => ForecastConfig::default(),
            };
            if let Some(horizon) = self.horizon {
                config.horizon = horizon;
            }
            config.validate()?;
            Some(config)
        };

        Ok(RunSettings {
            export,
            forecast,
            plot: self.plot,
        })
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = cli.settings().and_then(|settings| pipeline::run(&settings));
    if let Err(err) = result {
        error!("{:#}", err);
        std::process::exit(1);
    }

    Ok(())
}
