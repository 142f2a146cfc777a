use crate::core::tracker::DEFAULT_RATE;
use crate::errors::{AppError, AppResult};
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub database: String,
    #[serde(default = "default_currency")]
    pub currency: String,
    /// Rate used until one is stored with `myot rate <VALUE>`.
    #[serde(default = "default_rate")]
    pub default_rate: f64,
}

fn default_currency() -> String {
    "BHD".to_string()
}
fn default_rate() -> f64 {
    DEFAULT_RATE
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: Self::database_file().to_string_lossy().to_string(),
            currency: default_currency(),
            default_rate: default_rate(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory (`~/.myot`).
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".myot")
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("myot.conf")
    }

    /// Return the default path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("myot.sqlite")
    }

    /// Configured database path, resolved with [`Config::resolve_database`].
    pub fn database_path(&self) -> PathBuf {
        Self::resolve_database(&self.database)
    }

    /// `~/` is expanded and relative paths are taken from the current
    /// directory, for `init` and every other command alike.
    pub fn resolve_database(raw: &str) -> PathBuf {
        let p = expand_tilde(raw);
        if p.is_absolute() {
            return p;
        }
        std::env::current_dir().map(|cwd| cwd.join(&p)).unwrap_or(p)
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("{}: {e}", path.display())))
    }

    /// Create the config directory, the config file (unless `is_test`) and an
    /// empty database file. Returns the resolved database path.
    pub fn init_all(custom_db: Option<&str>, is_test: bool) -> AppResult<PathBuf> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        let db_path = match custom_db {
            Some(name) => Self::resolve_database(name),
            None => Self::database_file(),
        };

        if !is_test {
            let config = Config {
                database: db_path.to_string_lossy().to_string(),
                ..Config::default()
            };
            fs::write(Self::config_file(), serde_yaml::to_string(&config)?)?;
        }

        if let Some(parent) = db_path.parent() {
            fs::create_dir_all(parent)?;
        }
        if !db_path.exists() {
            fs::File::create(&db_path)?;
        }

        Ok(db_path)
    }
}
