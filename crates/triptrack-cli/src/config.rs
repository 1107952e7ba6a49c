//! Configuration management for trip-tracker
//!
//! Config stored at: ~/.config/trip-tracker/config.json

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use triptrack_domain::model::TravelPolicy;
use triptrack_types::{ConfigError, OutputFormat, Result};

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Ledger CSV file override (optional)
    #[serde(default)]
    pub data_file: Option<PathBuf>,

    /// Travel policy parameters and the authorized-email list
    #[serde(default)]
    pub policy: TravelPolicy,

    /// Default output format (json, table)
    #[serde(default)]
    pub output_format: OutputFormat,
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or(ConfigError::NotFound)?
            .join("trip-tracker");
        Ok(config_dir)
    }

    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.json"))
    }

    /// Get the ledger CSV file path
    pub fn data_file(&self) -> Result<PathBuf> {
        if let Some(ref path) = self.data_file {
            return Ok(path.clone());
        }

        let data_file = dirs::data_dir()
            .ok_or(ConfigError::NotFound)?
            .join("trip-tracker")
            .join("employees.csv");
        Ok(data_file)
    }

    /// Load config from file, or create default
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;

        if path.exists() {
            let content = std::fs::read_to_string(&path)?;
            let config: Config = serde_json::from_str(&content)
                .map_err(|e| ConfigError::ParseError(e.to_string()))?;
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    /// Save config to file
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&path, content)?;
        Ok(())
    }
}

impl std::fmt::Display for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Trip Tracker Configuration")?;
        writeln!(f, "==========================")?;
        writeln!(f)?;
        writeln!(
            f,
            "Ledger file:       {}",
            self.data_file()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|_| "(error)".to_string())
        )?;
        writeln!(f, "Policy start:      {}", self.policy.start_date)?;
        writeln!(f, "Policy limit:      {} days", self.policy.limit_days)?;
        writeln!(f, "Warn threshold:    {} days", self.policy.warn_threshold_days)?;
        if self.policy.authorized_emails.is_empty() {
            writeln!(f, "Authorized emails: (unrestricted)")?;
        } else {
            writeln!(
                f,
                "Authorized emails: {}",
                self.policy.authorized_emails.join(", ")
            )?;
        }
        writeln!(f, "Output format:     {}", self.output_format)?;

        if let Ok(path) = Self::config_path() {
            writeln!(f)?;
            writeln!(f, "Config file:       {}", path.display())?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_policy() {
        let config = Config::default();
        assert_eq!(config.policy.limit_days, 250);
        assert!(config.policy.authorized_emails.is_empty());
        assert_eq!(config.output_format, OutputFormat::Table);
    }

    #[test]
    fn test_config_deserializes_with_missing_fields() {
        let config: Config = serde_json::from_str("{}").unwrap();
        assert_eq!(config.policy.limit_days, 250);
        assert!(config.data_file.is_none());
    }
}
