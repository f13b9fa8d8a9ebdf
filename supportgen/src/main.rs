use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, BufWriter};
use supportgen::{
    core::{config::Settings, env::Env, generator::RecordGenerator, logging},
    stream::records::write_batch,
};

/// Emits synthetic client-support records as newline-delimited JSON.
///
/// Set SUPPORTGEN_NULL_PROBABILITY and SUPPORTGEN_SEED in the environment
/// (or a .env file) to tune the output.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Number of records to generate; zero or less emits only the blank line
    #[arg(allow_negative_numbers = true)]
    count: i64,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    dotenvy::dotenv().ok();
    logging::init();

    let settings = Settings::from_env(&Env::real()).context("failed to load settings")?;
    tracing::debug!(?settings, "loaded settings");

    let mut generator = RecordGenerator::from_settings(&settings)?;

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    write_batch(&mut generator, u64::try_from(cli.count).unwrap_or(0), &mut out)?;

    Ok(())
}
