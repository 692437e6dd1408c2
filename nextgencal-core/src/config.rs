//! Global nextgencal configuration.

use std::path::PathBuf;

use config::{Config, File};
use serde::{Deserialize, Serialize};

use crate::error::{NextgencalError, NextgencalResult};

static DEFAULT_EXPORT_DIR: &str = "~/Downloads";

fn default_export_dir() -> PathBuf {
    PathBuf::from(DEFAULT_EXPORT_DIR)
}

fn is_default_export_dir(p: &PathBuf) -> bool {
    *p == default_export_dir()
}

/// Global configuration at ~/.config/nextgencal/config.toml
#[derive(Serialize, Deserialize, Clone)]
pub struct NextgencalConfig {
    /// Where generated .ics files are written.
    #[serde(
        default = "default_export_dir",
        skip_serializing_if = "is_default_export_dir"
    )]
    pub export_dir: PathBuf,

    /// Where the stored event list lives. Defaults to the platform data dir.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,
}

impl NextgencalConfig {
    pub fn load() -> NextgencalResult<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            Self::create_default_config(&config_path)?;
        }

        let config: NextgencalConfig = Config::builder()
            .add_source(File::from(config_path).required(false))
            .build()
            .map_err(|e| NextgencalError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| NextgencalError::Config(e.to_string()))?;

        Ok(config)
    }

    pub fn config_path() -> NextgencalResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| NextgencalError::Config("Could not determine config directory".into()))?
            .join("nextgencal");

        Ok(config_dir.join("config.toml"))
    }

    /// The export directory with `~` expanded.
    pub fn export_path(&self) -> PathBuf {
        let expanded = shellexpand::tilde(&self.export_dir.to_string_lossy()).into_owned();
        PathBuf::from(expanded)
    }

    /// The data directory with `~` expanded, falling back to the platform
    /// data dir when not configured.
    pub fn data_path(&self) -> NextgencalResult<PathBuf> {
        if let Some(dir) = &self.data_dir {
            let expanded = shellexpand::tilde(&dir.to_string_lossy()).into_owned();
            return Ok(PathBuf::from(expanded));
        }

        let base = dirs::data_dir().ok_or_else(|| {
            NextgencalError::Config("Could not determine data directory".into())
        })?;

        Ok(base.join("nextgencal"))
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &std::path::Path) -> NextgencalResult<()> {
        let contents = format!(
            "\
# nextgencal configuration

# Where exported .ics files are saved:
# export_dir = \"{}\"

# Where the stored event list lives:
# data_dir = \"~/.nextgencal\"
",
            DEFAULT_EXPORT_DIR
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                NextgencalError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| NextgencalError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_file_parses_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        NextgencalConfig::create_default_config(&path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let config: NextgencalConfig = toml::from_str(&content).unwrap();
        assert_eq!(config.export_dir, PathBuf::from("~/Downloads"));
        assert!(config.data_dir.is_none());
    }

    #[test]
    fn default_values_are_not_serialized() {
        let config = NextgencalConfig {
            export_dir: default_export_dir(),
            data_dir: None,
        };

        assert_eq!(toml::to_string_pretty(&config).unwrap(), "");
    }

    #[test]
    fn export_path_expands_tilde() {
        let config = NextgencalConfig {
            export_dir: PathBuf::from("~/exports"),
            data_dir: None,
        };

        let expanded = config.export_path();
        assert!(!expanded.to_string_lossy().contains('~'));
        assert!(expanded.ends_with("exports"));
    }

    #[test]
    fn data_path_prefers_configured_dir() {
        let config = NextgencalConfig {
            export_dir: default_export_dir(),
            data_dir: Some(PathBuf::from("/tmp/nextgencal-data")),
        };

        assert_eq!(
            config.data_path().unwrap(),
            PathBuf::from("/tmp/nextgencal-data")
        );
    }
}
