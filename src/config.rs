//! Runtime configuration.
//!
//! Settings come from the command line first, then the environment (a `.env`
//! file is loaded by `main`), then the defaults below.

use chrono::NaiveDate;
use std::path::{Path, PathBuf};

/// Environment variable naming the log4rs config file.
pub const LOG_CONFIG_ENV: &str = "NETCALC_LOG_CONFIG";

/// log4rs config file used when nothing else is given.
pub const DEFAULT_LOG_CONFIG: &str = "log4rs.yml";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Fixed-width table on stdout.
    #[default]
    Table,
    /// Pretty-printed JSON on stdout.
    Json,
}

/// Options shared by both calculators.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub format: OutputFormat,
    /// CSV file to write next to the stdout output, if any.
    pub csv_path: Option<PathBuf>,
    pub color: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            format: OutputFormat::Table,
            csv_path: None,
            color: true,
        }
    }
}

impl AppConfig {
    /// Build the config for one run.
    ///
    /// `csv` is `None` when no CSV is wanted, `Some(None)` for a dated default
    /// file name, `Some(Some(path))` for an explicit path.
    pub fn new(json: bool, csv: Option<Option<PathBuf>>, no_color: bool, kind: &str) -> AppConfig {
        let today = chrono::Local::now().date_naive();
        AppConfig {
            format: if json {
                OutputFormat::Json
            } else {
                OutputFormat::Table
            },
            csv_path: csv.map(|path| path.unwrap_or_else(|| default_csv_name(kind, today))),
            color: !no_color,
        }
    }

    /// Apply the colour setting to the `colored` crate.
    pub fn apply_color(&self) {
        if !self.color {
            colored::control::set_override(false);
        }
    }
}

/// Dated CSV name such as `network_calc_cidr_2024-05-01.csv`.
pub fn default_csv_name(kind: &str, date: NaiveDate) -> PathBuf {
    PathBuf::from(format!("network_calc_{kind}_{}.csv", date.format("%Y-%m-%d")))
}

/// Pick the log4rs config file: command line, then environment, then default.
pub fn log_config_path(cli: Option<&Path>) -> PathBuf {
    match cli {
        Some(path) => path.to_path_buf(),
        None => std::env::var(LOG_CONFIG_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_LOG_CONFIG)),
    }
}
