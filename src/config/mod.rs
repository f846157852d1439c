use crate::errors::{AppError, AppResult};
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

pub mod migrate; // use submodule at src/config/migrate.rs

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_data_dir")]
    pub data_dir: String,
    #[serde(default)]
    pub company_name: String,
    #[serde(default = "default_report_title")]
    pub report_title: String,
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,
    #[serde(default = "default_thousands_separator")]
    pub thousands_separator: String,
    #[serde(default = "default_work_hours")]
    pub default_work_hours: u64,
    #[serde(default)]
    pub default_overtime_hours: u64,
    #[serde(default = "default_period_days")]
    pub default_period_days: u32,
}

fn default_data_dir() -> String {
    Config::config_dir().join("data").to_string_lossy().to_string()
}
fn default_report_title() -> String {
    "EMPLOYEE PAYROLL REPORT".to_string()
}
fn default_currency_symbol() -> String {
    "Rp".to_string()
}
fn default_thousands_separator() -> String {
    ".".to_string()
}
fn default_work_hours() -> u64 {
    8
}
fn default_period_days() -> u32 {
    30
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            company_name: String::new(),
            report_title: default_report_title(),
            currency_symbol: default_currency_symbol(),
            thousands_separator: default_thousands_separator(),
            default_work_hours: default_work_hours(),
            default_overtime_hours: 0,
            default_period_days: default_period_days(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform.
    /// `RPAYROLL_CONFIG_DIR` overrides it.
    pub fn config_dir() -> PathBuf {
        if let Ok(dir) = env::var("RPAYROLL_CONFIG_DIR") {
            return PathBuf::from(dir);
        }

        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("rpayroll")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".rpayroll")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rpayroll.conf")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
        serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("{}: {e}", path.display())))
    }

    pub fn save_to(&self, path: &Path) -> AppResult<()> {
        let yaml = serde_yaml::to_string(self).map_err(|_| AppError::ConfigSave)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, yaml).map_err(|_| AppError::ConfigSave)
    }

    /// Data directory with `~` expanded.
    pub fn data_path(&self) -> PathBuf {
        expand_tilde(&self.data_dir)
    }

    /// Title printed on exported reports.
    pub fn report_heading(&self) -> String {
        if self.company_name.trim().is_empty() {
            self.report_title.clone()
        } else {
            format!("{} - {}", self.report_title, self.company_name.trim())
        }
    }

    /// Initialize the configuration file. Returns the configured data
    /// directory.
    ///
    /// In test mode nothing is written: only the data directory is
    /// resolved.
    pub fn init_all(custom_data_dir: Option<String>, is_test: bool) -> AppResult<PathBuf> {
        let mut config = if Self::config_file().exists() {
            Self::load()?
        } else {
            Config::default()
        };

        // Data dir: user provided or default
        if let Some(custom) = custom_data_dir {
            let p = expand_tilde(&custom);
            let p = if p.is_absolute() {
                p
            } else {
                env::current_dir()?.join(p)
            };
            config.data_dir = p.to_string_lossy().to_string();
        }

        if !is_test {
            config.save_to(&Self::config_file())?;
        }

        Ok(config.data_path())
    }
}
