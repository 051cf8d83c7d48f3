//! Configuration for gradaco.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::{GradacoError, GradacoResult};

/// Main configuration for gradaco.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// General settings.
    #[serde(default)]
    pub general: GeneralConfig,

    /// Search settings.
    #[serde(default)]
    pub search: SearchConfig,
}

/// General settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Log format (text, json).
    #[serde(default = "default_log_format")]
    pub log_format: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_format: default_log_format(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "text".to_string()
}

/// Ant colony search settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SearchConfig {
    /// Minimum support a pattern needs to be a winner, in (0, 1].
    #[serde(default = "default_min_support")]
    pub min_support: f64,

    /// Fraction of pheromone removed from a failed direction, in (0, 1).
    #[serde(default = "default_evaporation_factor")]
    pub evaporation_factor: f64,

    /// Number of generations per run.
    #[serde(default = "default_max_iterations")]
    pub max_iterations: usize,

    /// Seed for the pattern generator. Entropy-seeded when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            min_support: default_min_support(),
            evaporation_factor: default_evaporation_factor(),
            max_iterations: default_max_iterations(),
            seed: None,
        }
    }
}

fn default_min_support() -> f64 {
    0.5
}

fn default_evaporation_factor() -> f64 {
    0.5
}

fn default_max_iterations() -> usize {
    10
}

impl SearchConfig {
    /// Creates search settings with the given threshold and defaults elsewhere.
    pub fn with_min_support(min_support: f64) -> Self {
        Self {
            min_support,
            ..Self::default()
        }
    }

    /// Checks every value is in range.
    pub fn validate(&self) -> GradacoResult<()> {
        if !(self.min_support > 0.0 && self.min_support <= 1.0) {
            return Err(GradacoError::config(format!(
                "min_support must be in (0, 1], got {}",
                self.min_support
            )));
        }
        if !(self.evaporation_factor > 0.0 && self.evaporation_factor < 1.0) {
            return Err(GradacoError::config(format!(
                "evaporation_factor must be in (0, 1), got {}",
                self.evaporation_factor
            )));
        }
        if self.max_iterations == 0 {
            return Err(GradacoError::config("max_iterations must be at least 1"));
        }
        Ok(())
    }
}

impl Config {
    /// Loads configuration from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> GradacoResult<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Saves configuration to a TOML file.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> GradacoResult<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Creates default configuration.
    pub fn default_config() -> Self {
        Self {
            general: GeneralConfig::default(),
            search: SearchConfig::default(),
        }
    }

    /// Validates all sections.
    pub fn validate(&self) -> GradacoResult<()> {
        match self.general.log_format.as_str() {
            "text" | "json" => {}
            other => {
                return Err(GradacoError::config(format!(
                    "log_format must be 'text' or 'json', got '{}'",
                    other
                )))
            }
        }
        self.search.validate()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::default_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.general.log_level, "info");
        assert_eq!(config.search.min_support, 0.5);
        assert_eq!(config.search.evaporation_factor, 0.5);
        assert_eq!(config.search.max_iterations, 10);
        assert!(config.search.seed.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: Config = toml::from_str("[search]\nmin_support = 0.8\n").unwrap();
        assert_eq!(config.search.min_support, 0.8);
        assert_eq!(config.search.max_iterations, 10);
        assert_eq!(config.general.log_format, "text");
    }

    #[test]
    fn test_rejects_threshold_out_of_range() {
        for bad in [0.0, -0.1, 1.01, f64::NAN] {
            let search = SearchConfig::with_min_support(bad);
            assert!(matches!(search.validate(), Err(GradacoError::Config(_))));
        }
        assert!(SearchConfig::with_min_support(1.0).validate().is_ok());
    }

    #[test]
    fn test_rejects_bad_evaporation_and_budget() {
        let mut search = SearchConfig::default();
        search.evaporation_factor = 1.0;
        assert!(search.validate().is_err());

        let mut search = SearchConfig::default();
        search.max_iterations = 0;
        assert!(search.validate().is_err());
    }

    #[test]
    fn test_rejects_unknown_log_format() {
        let mut config = Config::default();
        config.general.log_format = "yaml".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("gradaco.toml");

        let mut config = Config::default();
        config.search.seed = Some(7);
        config.search.min_support = 0.6;
        config.save(&path).unwrap();

        let loaded = Config::load(&path).unwrap();
        assert_eq!(loaded.search, config.search);
    }

    #[test]
    fn test_load_fails_on_invalid_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("gradaco.toml");
        std::fs::write(&path, "[search]\nmin_support = 1.5\n").unwrap();
        assert!(matches!(Config::load(&path), Err(GradacoError::Config(_))));
    }
}
