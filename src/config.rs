use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::graph::SearchLimits;

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV: &str = "DEGREES_CONFIG";

/// Config file looked up in the current directory when `DEGREES_CONFIG` is unset.
pub const DEFAULT_CONFIG_FILE: &str = "degrees.toml";

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub degrees: DegreesConfig,
    #[serde(default)]
    pub search: SearchConfig,
}

/// Dataset location and logging
#[derive(Debug, Clone, Deserialize)]
pub struct DegreesConfig {
    /// Directory holding people.csv, movies.csv and stars.csv.
    #[serde(default = "default_dataset_dir")]
    pub dataset_dir: PathBuf,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for DegreesConfig {
    fn default() -> Self {
        Self {
            dataset_dir: default_dataset_dir(),
            log_level: default_log_level(),
        }
    }
}

/// Search tuning
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchConfig {
    /// Stop a search after expanding this many people. Unset = unlimited.
    #[serde(default)]
    pub max_expansions: Option<usize>,
}

fn default_dataset_dir() -> PathBuf {
    PathBuf::from("large")
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    /// Load configuration from file
    ///
    /// Loads environment variables from .env file (if present) before loading config.
    /// Looks for config file in this order:
    /// 1. Path specified in DEGREES_CONFIG environment variable (must exist)
    /// 2. ./degrees.toml in current directory (built-in defaults when absent)
    pub fn load() -> Result<Self> {
        let _ = dotenv::dotenv();

        match std::env::var(CONFIG_ENV) {
            Ok(path) => Self::from_file(Path::new(&path)),
            Err(_) => {
                let path = Path::new(DEFAULT_CONFIG_FILE);
                if path.exists() {
                    Self::from_file(path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    /// Parse and validate a specific config file
    pub fn from_file(path: &Path) -> Result<Self> {
        let config_str = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&config_str)
            .with_context(|| format!("Failed to parse {}", path.display()))?;

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values
    fn validate(&self) -> Result<()> {
        if self.degrees.dataset_dir.as_os_str().is_empty() {
            anyhow::bail!("degrees.dataset_dir must not be empty");
        }

        if self.search.max_expansions == Some(0) {
            anyhow::bail!("search.max_expansions must be greater than 0 when set");
        }

        Ok(())
    }

    /// Get dataset directory
    pub fn dataset_dir(&self) -> &Path {
        &self.degrees.dataset_dir
    }

    /// Search limits derived from the `[search]` section
    pub fn search_limits(&self) -> SearchLimits {
        SearchLimits {
            max_expansions: self.search.max_expansions,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::sync::Mutex;
    use tempfile::TempDir;

    /// Serialize config tests that mutate process-wide env so they don't race.
    static CONFIG_TEST_LOCK: Mutex<()> = Mutex::new(());

    fn with_config_env(config_path: Option<&Path>, f: impl FnOnce()) {
        let original = std::env::var(CONFIG_ENV).ok();
        match config_path {
            Some(p) => std::env::set_var(CONFIG_ENV, p),
            None => std::env::remove_var(CONFIG_ENV),
        }
        f();
        std::env::remove_var(CONFIG_ENV);
        if let Some(val) = original {
            std::env::set_var(CONFIG_ENV, val);
        }
    }

    /// Restores cwd when dropped (e.g. on panic).
    struct CwdGuard(PathBuf);
    impl Drop for CwdGuard {
        fn drop(&mut self) {
            let _ = std::env::set_current_dir(&self.0);
        }
    }

    #[test]
    fn test_config_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("degrees.toml");
        fs::write(
            &config_path,
            r#"
[degrees]
dataset_dir = "small"
log_level = "debug"

[search]
max_expansions = 5000
"#,
        )
        .unwrap();

        let config = Config::from_file(&config_path).unwrap();
        assert_eq!(config.dataset_dir(), Path::new("small"));
        assert_eq!(config.degrees.log_level, "debug");
        assert_eq!(config.search_limits(), SearchLimits::with_max_expansions(5000));
    }

    #[test]
    fn test_config_sections_are_optional() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("degrees.toml");
        fs::write(&config_path, "[search]\n").unwrap();

        let config = Config::from_file(&config_path).unwrap();
        assert_eq!(config.dataset_dir(), Path::new("large"));
        assert_eq!(config.degrees.log_level, "info");
        assert_eq!(config.search_limits(), SearchLimits::unlimited());
    }

    #[test]
    fn test_config_rejects_zero_budget() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("degrees.toml");
        fs::write(&config_path, "[search]\nmax_expansions = 0\n").unwrap();

        let err = Config::from_file(&config_path).unwrap_err();
        assert!(err.to_string().contains("max_expansions"));
    }

    #[test]
    fn test_config_load_from_env() {
        let _lock = CONFIG_TEST_LOCK.lock().unwrap();
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("custom.toml");
        fs::write(&config_path, "[degrees]\ndataset_dir = \"tiny\"\n").unwrap();

        with_config_env(Some(&config_path), || {
            let config = Config::load();
            assert!(config.is_ok(), "Config::load() failed: {:?}", config.err());
            assert_eq!(config.unwrap().dataset_dir(), Path::new("tiny"));
        });
    }

    #[test]
    fn test_config_invalid_path() {
        let _lock = CONFIG_TEST_LOCK.lock().unwrap();
        with_config_env(Some(Path::new("nonexistent.toml")), || {
            let config = Config::load();
            assert!(config.is_err());
        });
    }

    #[test]
    fn test_config_load_defaults_without_file() {
        let _lock = CONFIG_TEST_LOCK.lock().unwrap();
        let temp_dir = TempDir::new().unwrap();
        let _cwd = CwdGuard(std::env::current_dir().unwrap());
        std::env::set_current_dir(temp_dir.path()).unwrap();

        with_config_env(None, || {
            let config = Config::load().unwrap();
            assert_eq!(config.dataset_dir(), Path::new("large"));
            assert_eq!(config.degrees.log_level, "info");
            assert_eq!(config.search_limits(), SearchLimits::unlimited());
        });
    }
}
