mod budget;
mod categorize;
mod logging;
mod models;
mod run;
mod settings;
mod store;
mod ui;

use anyhow::{Context, Result};

use settings::Settings;
use store::Store;

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let settings = Settings::load(settings::config_path().as_deref())
        .context("Failed to load configuration")?;

    let interactive = args.len() == 1;
    if interactive {
        let log_path = get_log_path()?;
        logging::init(logging::LogTarget::File(&log_path), &settings.log_level)?;
    } else {
        logging::init(logging::LogTarget::Stderr, &settings.log_level)?;
    }
    tracing::info!(
        limit = %settings.monthly_limit,
        seed = settings.seed_demo_data,
        "starting finboard"
    );

    let mut store = open_store(&settings);

    if interactive {
        run::as_tui(&mut store, &settings)
    } else {
        run::as_cli(&args, &store)
    }
}

fn open_store(settings: &Settings) -> Store {
    if settings.seed_demo_data {
        Store::seeded(settings.monthly_limit)
    } else {
        Store::new(settings.monthly_limit)
    }
}

fn get_log_path() -> Result<std::path::PathBuf> {
    Ok(settings::data_dir()?.join("finboard.log"))
}
