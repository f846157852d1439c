use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::store::DataStore;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        range,
        force,
    } = cmd
    {
        let store = DataStore::open(cfg.data_path())?;
        ExportLogic::export(&store, cfg, format, file, range, *force)?;
    }
    Ok(())
}
