//! Support for application configuration options

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::error::{Result, TaskError};
use crate::storage::SaveFormat;

/// The name the app introduces itself with.
/// Feel free to override it before starting a session.
pub static APP_NAME: Lazy<Arc<Mutex<String>>> = Lazy::new(|| Arc::new(Mutex::new("Jotter".to_string())));

/// The save file that is used when nothing else is configured
pub static DEFAULT_DATA_FILE: Lazy<PathBuf> = Lazy::new(|| PathBuf::from("jotter.txt"));

/// The settings file that is looked for in the current directory
pub const SETTINGS_FILE: &str = "jotter.json";

/// Environment variable that overrides the configured save file
pub const DATA_FILE_ENV_VAR: &str = "JOTTER_DATA_FILE";


/// Where and how tasks are saved
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub data_file: PathBuf,
    pub format: SaveFormat,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            data_file: PathBuf::clone(&DEFAULT_DATA_FILE),
            format: SaveFormat::default(),
        }
    }
}

impl Settings {
    /// Read settings from a JSON file. Missing fields take their default values.
    pub fn from_file(path: &Path) -> Result<Self> {
        let file = std::fs::File::open(path).map_err(|err| TaskError::io(path, err))?;
        let settings = serde_json::from_reader(file)?;
        Ok(settings)
    }

    /// Resolve the settings of the app.
    ///
    /// The settings file is read if it exists (an invalid one is ignored with a warning),
    /// then the environment variable and finally the command-line save file override it.
    pub fn resolve(settings_file: &Path, data_file_arg: Option<PathBuf>) -> Self {
        let mut settings = if settings_file.exists() {
            match Self::from_file(settings_file) {
                Ok(s) => s,
                Err(err) => {
                    log::warn!("Invalid settings file: {}. Using default settings", err);
                    Self::default()
                }
            }
        } else {
            Self::default()
        };

        if let Some(path) = std::env::var_os(DATA_FILE_ENV_VAR) {
            settings.data_file = PathBuf::from(path);
        }
        if let Some(path) = data_file_arg {
            settings.data_file = path;
        }

        log::debug!("Using settings {:?}", settings);
        settings
    }
}
