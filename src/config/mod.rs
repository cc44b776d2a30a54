//! Display preferences loaded from `config.json` under the tracker home.
//!
//! Only presentation settings live here; activities are never written to
//! disk.

use std::{
    env,
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use dirs::home_dir;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::{Result, TrackerError};

const DEFAULT_DIR_NAME: &str = ".calorie_tracker";
const CONFIG_FILE: &str = "config.json";
const TMP_SUFFIX: &str = "tmp";
const HOME_ENV: &str = "CALORIE_TRACKER_HOME";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub color_output: bool,
    pub unit_label: String,
    pub empty_message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_filter: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            color_output: true,
            unit_label: "Calories".into(),
            empty_message: "No activities added yet...".into(),
            log_filter: None,
        }
    }
}

impl Config {
    fn validate(&self) -> Result<()> {
        if self.unit_label.trim().is_empty() {
            return Err(TrackerError::Config("unit_label cannot be empty".into()));
        }
        Ok(())
    }
}

/// Returns the tracker home, defaulting to `~/.calorie_tracker`.
pub fn app_data_dir() -> PathBuf {
    if let Some(custom) = env::var_os(HOME_ENV) {
        return PathBuf::from(custom);
    }
    home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DEFAULT_DIR_NAME)
}

pub struct ConfigManager {
    path: PathBuf,
}

impl ConfigManager {
    pub fn new() -> Self {
        Self::with_base_dir(app_data_dir())
    }

    pub fn with_base_dir(base: impl Into<PathBuf>) -> Self {
        Self {
            path: base.into().join(CONFIG_FILE),
        }
    }

    pub fn load(&self) -> Result<Config> {
        if !self.path.exists() {
            return Ok(Config::default());
        }
        let data = fs::read_to_string(&self.path)?;
        let config: Config = serde_json::from_str(&data)?;
        config.validate()?;
        info!(path = %self.path.display(), "loaded tracker configuration");
        Ok(config)
    }

    pub fn save(&self, config: &Config) -> Result<()> {
        config.validate()?;
        let json = serde_json::to_string_pretty(config)?;
        let tmp = tmp_path(&self.path);
        write_atomic(&tmp, &json)?;
        fs::rename(&tmp, &self.path)?;
        info!(path = %self.path.display(), "saved tracker configuration");
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_atomic(path: &Path, data: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}
