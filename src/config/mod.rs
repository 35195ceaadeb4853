use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub database: String,
    #[serde(default = "default_max_session_hours")]
    pub max_session_hours: i64,
    #[serde(default = "default_seed_sample_data")]
    pub seed_sample_data: bool,
    #[serde(default = "default_chart_width")]
    pub chart_width: usize,
}

/// Widest progress chart, in columns.
pub const MAX_CHART_WIDTH: usize = 500;

fn default_max_session_hours() -> i64 {
    24
}
fn default_seed_sample_data() -> bool {
    true
}
fn default_chart_width() -> usize {
    50
}

impl Default for Config {
    fn default() -> Self {
        Self::with_database(Self::database_file())
    }
}

impl Config {
    fn with_database(db_path: PathBuf) -> Self {
        Self {
            database: db_path.to_string_lossy().to_string(),
            max_session_hours: default_max_session_hours(),
            seed_sample_data: default_seed_sample_data(),
            chart_width: default_chart_width(),
        }
    }

    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("codetracker")
        } else {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".codetracker")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("codetracker.conf")
    }

    /// Return the full path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("codetracker.sqlite")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        if path.exists() {
            let content = fs::read_to_string(path)?;
            let cfg: Self = serde_yaml::from_str(&content)?;
            cfg.checked()
        } else {
            Ok(Self::default())
        }
    }

    /// Reject values no session could satisfy and keep the chart drawable.
    pub fn checked(mut self) -> AppResult<Self> {
        if self.max_session_hours < 1 {
            return Err(AppError::Config(format!(
                "max_session_hours must be at least 1 (found {})",
                self.max_session_hours
            )));
        }
        self.chart_width = self.chart_width.clamp(1, MAX_CHART_WIDTH);
        Ok(self)
    }

    /// Initialize the configuration directory and file.
    ///
    /// Returns the database path the new configuration points to. In test
    /// mode the config file is left alone.
    pub fn init_all(custom_db: Option<&str>, is_test: bool) -> AppResult<PathBuf> {
        let dir = Self::config_dir();

        // DB name: user provided or default
        let db_path = match custom_db {
            Some(name) => {
                let p = Path::new(name);
                if p.is_absolute() || is_test {
                    p.to_path_buf()
                } else {
                    dir.join(p)
                }
            }
            None => dir.join("codetracker.sqlite"),
        };

        if !is_test {
            fs::create_dir_all(&dir)?;
            let config = Self::with_database(db_path.clone());
            let yaml = serde_yaml::to_string(&config)?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
        }

        if let Some(parent) = db_path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        Ok(db_path)
    }
}
