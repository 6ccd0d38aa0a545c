use std::path::PathBuf;

use chrono::NaiveDate;
use clap::Parser;
use nalgebra::DVector;

use holidayeffect::configuration::Configuration;
use holidayeffect::effect::holidayeffect::HolidayEffect;
use holidayeffect::manager::managererror::ManagerError;

/// Prints the contribution of every configured holiday effect on the given dates.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// JSON file declaring the time encoding and holiday effects
    #[arg(short, long)]
    config: PathBuf,

    /// Dates to evaluate, formatted as YYYY-MM-DD
    #[arg(short, long = "date", required = true, num_args = 1..)]
    dates: Vec<NaiveDate>,
}

fn main() -> Result<(), ManagerError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let config = Configuration::new();
    config.from_reader(&cli.config)?;

    let encoding = config.time_encoding();
    let t = DVector::from_vec(encoding.encode_all(&cli.dates));
    let effects = config.holiday_effects()?;

    for effect in effects.effects() {
        let out = effect.forward(&t);
        for (d, v) in cli.dates.iter().zip(out.iter()) {
            println!("{}, {}, {}", effect.name(), d, v);
        }
    }
    Ok(())
}
