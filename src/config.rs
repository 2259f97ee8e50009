use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use anyhow::{Context, Result};

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub two_sum: TwoSumConfig,

    #[serde(default)]
    pub lru: LruConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Default input for the Two Sum demo
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TwoSumConfig {
    #[serde(default = "default_nums")]
    pub nums: Vec<i64>,

    #[serde(default = "default_target")]
    pub target: i64,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LruConfig {
    /// Number of entries held before eviction
    #[serde(default = "default_capacity")]
    pub capacity: usize,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    /// Fallback filter when RUST_LOG is unset
    #[serde(default = "default_level")]
    pub level: String,

    #[serde(default)]
    pub output: LogOutput,
}

/// Where log events are written
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogOutput {
    Stdout,
    /// Keeps stdout free for results
    #[default]
    Stderr,
}

impl Default for TwoSumConfig {
    fn default() -> Self {
        Self {
            nums: default_nums(),
            target: default_target(),
        }
    }
}

impl Default for LruConfig {
    fn default() -> Self {
        Self {
            capacity: default_capacity(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            output: LogOutput::default(),
        }
    }
}

// Default functions for serde
fn default_nums() -> Vec<i64> { vec![2, 7, 11, 15] }
fn default_target() -> i64 { 9 }
fn default_capacity() -> usize { 3 }
fn default_level() -> String { "warn".to_string() }

impl Config {
    /// Load configuration from file, or use defaults if not found
    pub fn load() -> Result<Self> {
        let config_path = Path::new("config.yaml");

        if config_path.exists() {
            Self::load_from(config_path)
        } else {
            Ok(Config::default())
        }
    }

    /// Load configuration from a specific file path
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {:?}", path))?;
        let config: Config = serde_yaml::from_str(&contents)
            .with_context(|| format!("Failed to parse config from {:?}", path))?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.two_sum.nums, vec![2, 7, 11, 15]);
        assert_eq!(config.two_sum.target, 9);
        assert_eq!(config.lru.capacity, 3);
        assert_eq!(config.logging.output, LogOutput::Stderr);
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() -> Result<()> {
        let mut file = tempfile::NamedTempFile::new()?;
        writeln!(file, "two_sum:\n  target: 6\nlru:\n  capacity: 8")?;

        let config = Config::load_from(file.path())?;
        assert_eq!(config.two_sum.target, 6);
        assert_eq!(config.two_sum.nums, vec![2, 7, 11, 15]);
        assert_eq!(config.lru.capacity, 8);
        assert_eq!(config.logging.level, "warn");
        Ok(())
    }

    #[test]
    fn test_invalid_yaml_reports_path() -> Result<()> {
        let mut file = tempfile::NamedTempFile::new()?;
        writeln!(file, "two_sum: [not, a, map")?;

        let err = Config::load_from(file.path()).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config"));
        Ok(())
    }

    #[test]
    fn test_log_output_parsed() -> Result<()> {
        let mut file = tempfile::NamedTempFile::new()?;
        writeln!(file, "logging:\n  output: stdout")?;

        let config = Config::load_from(file.path())?;
        assert_eq!(config.logging.output, LogOutput::Stdout);
        Ok(())
    }

    #[test]
    fn test_unknown_log_output_rejected() -> Result<()> {
        let mut file = tempfile::NamedTempFile::new()?;
        writeln!(file, "logging:\n  output: stdot")?;

        let err = Config::load_from(file.path()).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config"));
        assert!(format!("{:#}", err).contains("stdot"));
        Ok(())
    }

    #[test]
    fn test_missing_file() {
        let err = Config::load_from(Path::new("does/not/exist.yaml")).unwrap_err();
        assert!(err.to_string().contains("Failed to read config"));
    }
}
