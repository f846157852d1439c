use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::store::DataStore;
use crate::ui::messages::{info, success};

/// Handle the `init` command
///
/// This initializes:
///  - the config directory and file (skipped in test mode)
///  - the data directory with header-only tables
pub fn handle(cli: &Cli) -> AppResult<()> {
    let data_dir = Config::init_all(cli.data_dir.clone(), cli.test)?;

    info("Initializing rPayroll…");
    if !cli.test {
        info(format!("Config file : {}", Config::config_file().display()));
    }
    info(format!("Data dir    : {}", data_dir.display()));

    let store = DataStore::open(&data_dir)?;
    store.log.record(
        "init",
        &data_dir.to_string_lossy(),
        "Data directory initialized",
    );

    success(format!("Data files ready in {}", data_dir.display()));
    Ok(())
}
