use academic_planner::config::Config;
use academic_planner::logger::Logger;
use academic_planner::storage::JsonFileStore;
use academic_planner::ui;
use anyhow::{bail, Context, Result};

#[tokio::main]
async fn main() -> Result<()> {
    let mut args = std::env::args().skip(1);
    match args.next().as_deref() {
        None => {}
        Some("--generate-config") => {
            let path = Config::get_default_config_path()?;
            Config::generate_default_config(&path)?;
            return Ok(());
        }
        Some(other) => bail!("Unknown argument: {}", other),
    }

    let config = Config::load()?;
    let logger = Logger::from_config(&config.logging)?;
    if let Some(path) = logger.file_path() {
        logger.log(format!("Logging to {}", path.display()));
    }

    let data_dir = config.data_dir()?;
    let store = JsonFileStore::open(&data_dir)
        .with_context(|| format!("Failed to open data directory {}", data_dir.display()))?;

    ui::run_app(store, config, logger).await
}
