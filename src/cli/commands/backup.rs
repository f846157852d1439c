use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::backup::BackupLogic;
use crate::errors::AppResult;
use crate::store::DataStore;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Backup { file, compress } = cmd {
        let store = DataStore::open(cfg.data_path())?;
        BackupLogic::backup(&store, file, *compress)?;
    }

    Ok(())
}
