use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

pub mod check; // use submodule at src/config/check.rs

/// How boundary travel is generated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum TravelMode {
    /// Every non-home run gets travel days
    Auto,
    /// Only runs with at least one event flagged `include_travel`
    Manual,
    /// No travel days
    Off,
}

/// How a fresh RunID is generated at export time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RunIdStyle {
    /// `YYYY-MM-DD-NNN`
    Daily,
    /// `run-xxxxxxxx`
    Random,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_home_city")]
    pub home_city: String,
    #[serde(default = "default_work_start")]
    pub work_start_hour: u32,
    #[serde(default = "default_work_end")]
    pub work_end_hour: u32,
    #[serde(default = "default_hold_start")]
    pub hold_start_hour: u32,
    #[serde(default = "default_hold_end")]
    pub hold_end_hour: u32,
    #[serde(default = "default_travel_start")]
    pub travel_start_hour: u32,
    #[serde(default = "default_travel_end")]
    pub travel_end_hour: u32,
    #[serde(default = "default_travel_mode")]
    pub travel_mode: TravelMode,
    #[serde(default = "default_run_id_style")]
    pub run_id_style: RunIdStyle,
}

fn default_home_city() -> String {
    "Paris".to_string()
}
fn default_work_start() -> u32 {
    9
}
fn default_work_end() -> u32 {
    19
}
fn default_hold_start() -> u32 {
    10
}
fn default_hold_end() -> u32 {
    18
}
fn default_travel_start() -> u32 {
    8
}
fn default_travel_end() -> u32 {
    12
}
fn default_travel_mode() -> TravelMode {
    TravelMode::Auto
}
fn default_run_id_style() -> RunIdStyle {
    RunIdStyle::Daily
}

impl Default for Config {
    fn default() -> Self {
        Self {
            home_city: default_home_city(),
            work_start_hour: default_work_start(),
            work_end_hour: default_work_end(),
            hold_start_hour: default_hold_start(),
            hold_end_hour: default_hold_end(),
            travel_start_hour: default_travel_start(),
            travel_end_hour: default_travel_end(),
            travel_mode: default_travel_mode(),
            run_id_style: default_run_id_style(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            dirs::config_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("itinerary-ics")
        } else {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".itinerary-ics")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("itinerary-ics.conf")
    }

    /// Load configuration from `path`, or return defaults if the file does not exist.
    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path)?;
        let cfg: Config = serde_yaml::from_str(&content)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Load the configuration from the standard location.
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    /// Hours must be 0..=23 and the home city must not be blank.
    pub fn validate(&self) -> AppResult<()> {
        let hours = [
            ("work_start_hour", self.work_start_hour),
            ("work_end_hour", self.work_end_hour),
            ("hold_start_hour", self.hold_start_hour),
            ("hold_end_hour", self.hold_end_hour),
            ("travel_start_hour", self.travel_start_hour),
            ("travel_end_hour", self.travel_end_hour),
        ];

        for (name, h) in hours {
            if h > 23 {
                return Err(AppError::Config(format!(
                    "{name} must be between 0 and 23 (found {h})"
                )));
            }
        }

        if self.home_city.trim().is_empty() {
            return Err(AppError::Config("home_city must not be empty".into()));
        }

        Ok(())
    }

    /// Write this configuration as YAML to `path`, creating parent directories.
    pub fn save_to(&self, path: &Path) -> AppResult<()> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }

        let yaml = serde_yaml::to_string(self)?;
        let mut file = fs::File::create(path)?;
        file.write_all(yaml.as_bytes())?;
        Ok(())
    }
}
