//! Configuration module for vfsys.

use serde::Deserialize;
use std::path::Path;

use crate::datetime::{is_known_timezone, is_valid_format, DEFAULT_FORMAT, LOCAL_TIMEZONE};
use crate::{Result, VfsError};

/// Interactive shell configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ShellConfig {
    /// Prompt printed before each command.
    #[serde(default = "default_prompt")]
    pub prompt: String,
    /// Timezone for displaying creation times ("Local", "UTC", "Asia/Taipei", ...).
    #[serde(default = "default_timezone")]
    pub timezone: String,
    /// strftime format for creation times in listings.
    #[serde(default = "default_datetime_format")]
    pub datetime_format: String,
}

fn default_prompt() -> String {
    "# ".to_string()
}

fn default_timezone() -> String {
    LOCAL_TIMEZONE.to_string()
}

fn default_datetime_format() -> String {
    DEFAULT_FORMAT.to_string()
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            prompt: default_prompt(),
            timezone: default_timezone(),
            datetime_format: default_datetime_format(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Path to the log file. Empty means console (stderr) only.
    #[serde(default)]
    pub file: String,
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: String::new(),
        }
    }
}

/// Main configuration structure.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    /// Shell configuration.
    #[serde(default)]
    pub shell: ShellConfig,
    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(VfsError::Io)?;
        Self::parse(&content)
    }

    /// Load configuration from a TOML file and apply environment variable overrides.
    pub fn load_with_env<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Parse configuration from a TOML string.
    pub fn parse(s: &str) -> Result<Self> {
        toml::from_str(s).map_err(|e| VfsError::Config(format!("config parse error: {e}")))
    }

    /// Apply environment variable overrides to the configuration.
    ///
    /// Supported environment variables:
    /// - `VFSYS_TIMEZONE`: Override the display timezone
    /// - `VFSYS_LOG_LEVEL`: Override the log level
    pub fn apply_env_overrides(&mut self) {
        if let Ok(timezone) = std::env::var("VFSYS_TIMEZONE") {
            if !timezone.is_empty() {
                self.shell.timezone = timezone;
            }
        }
        if let Ok(level) = std::env::var("VFSYS_LOG_LEVEL") {
            if !level.is_empty() {
                self.logging.level = level;
            }
        }
    }

    /// Validate the configuration.
    ///
    /// Returns an error if:
    /// - The timezone is neither `Local` nor a known IANA name
    /// - The datetime format is empty or uses an unknown specifier
    pub fn validate(&self) -> Result<()> {
        if !is_known_timezone(&self.shell.timezone) {
            return Err(VfsError::Config(format!(
                "unknown timezone: {}",
                self.shell.timezone
            )));
        }
        if self.shell.datetime_format.is_empty() {
            return Err(VfsError::Config(
                "datetime_format cannot be empty".to_string(),
            ));
        }
        if !is_valid_format(&self.shell.datetime_format) {
            return Err(VfsError::Config(format!(
                "invalid datetime_format: {}",
                self.shell.datetime_format
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = Config::default();

        assert_eq!(config.shell.prompt, "# ");
        assert_eq!(config.shell.timezone, "Local");
        assert_eq!(config.shell.datetime_format, "%Y-%m-%d %H:%M:%S");

        assert_eq!(config.logging.level, "warn");
        assert!(config.logging.file.is_empty());
    }

    #[test]
    fn test_parse_full_config() {
        let toml = r#"
[shell]
prompt = "vfs> "
timezone = "Asia/Taipei"
datetime_format = "%Y/%m/%d %H:%M"

[logging]
level = "debug"
file = "logs/vfsys.log"
"#;

        let config = Config::parse(toml).unwrap();

        assert_eq!(config.shell.prompt, "vfs> ");
        assert_eq!(config.shell.timezone, "Asia/Taipei");
        assert_eq!(config.shell.datetime_format, "%Y/%m/%d %H:%M");
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.file, "logs/vfsys.log");
    }

    #[test]
    fn test_parse_partial_config() {
        let toml = r#"
[shell]
timezone = "UTC"
"#;

        let config = Config::parse(toml).unwrap();

        assert_eq!(config.shell.timezone, "UTC");
        // Defaults for the rest
        assert_eq!(config.shell.prompt, "# ");
        assert_eq!(config.logging.level, "warn");
    }

    #[test]
    fn test_parse_empty_config() {
        let config = Config::parse("").unwrap();
        assert_eq!(config.shell.prompt, "# ");
        assert_eq!(config.shell.timezone, "Local");
    }

    #[test]
    fn test_parse_invalid_config() {
        let result = Config::parse("[shell\nprompt = ");

        assert!(result.is_err());
        if let Err(VfsError::Config(msg)) = result {
            assert!(msg.contains("config parse error"));
        } else {
            panic!("Expected Config error");
        }
    }

    #[test]
    fn test_load_nonexistent_file() {
        let result = Config::load("nonexistent.toml");

        assert!(result.is_err());
        assert!(matches!(result, Err(VfsError::Io(_))));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[shell]\nprompt = \"$ \"").unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.shell.prompt, "$ ");
    }

    #[test]
    fn test_apply_env_overrides() {
        // Save original values if they exist
        let original_tz = std::env::var("VFSYS_TIMEZONE").ok();
        let original_level = std::env::var("VFSYS_LOG_LEVEL").ok();

        std::env::set_var("VFSYS_TIMEZONE", "Europe/Paris");
        std::env::set_var("VFSYS_LOG_LEVEL", "");

        let mut config = Config::default();
        config.apply_env_overrides();
        assert_eq!(config.shell.timezone, "Europe/Paris");
        // Empty value leaves the setting alone
        assert_eq!(config.logging.level, "warn");

        // Restore original values
        match original_tz {
            Some(v) => std::env::set_var("VFSYS_TIMEZONE", v),
            None => std::env::remove_var("VFSYS_TIMEZONE"),
        }
        match original_level {
            Some(v) => std::env::set_var("VFSYS_LOG_LEVEL", v),
            None => std::env::remove_var("VFSYS_LOG_LEVEL"),
        }
    }

    #[test]
    fn test_validate_default() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_validate_unknown_timezone() {
        let mut config = Config::default();
        config.shell.timezone = "Mars/Olympus".to_string();

        let result = config.validate();
        assert!(matches!(result, Err(VfsError::Config(_))));
    }

    #[test]
    fn test_validate_empty_format() {
        let mut config = Config::default();
        config.shell.datetime_format = String::new();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_unknown_format_specifier() {
        let mut config = Config::default();
        config.shell.datetime_format = "%Q".to_string();

        let result = config.validate();
        if let Err(VfsError::Config(msg)) = result {
            assert_eq!(msg, "invalid datetime_format: %Q");
        } else {
            panic!("Expected Config error");
        }
    }
}
