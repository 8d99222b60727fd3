use config::{Config, ConfigError, Environment, File};
use log::LevelFilter;
use serde::Deserialize;

pub const DEFAULT_CONFIG_PATH: &str = "config/config.yaml";
pub const DEFAULT_PATTERN: &str = "{d(%Y-%m-%d %H:%M:%S)} [{l}] {t} - {m}{n}";

#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    pub log_level: String,
    pub log_to_file: bool,
    pub log_file: String,
    pub pattern: String,
}

impl LogConfig {
    pub fn level_filter(&self) -> LevelFilter {
        match self.log_level.to_lowercase().as_str() {
            "off" => LevelFilter::Off,
            "trace" => LevelFilter::Trace,
            "debug" => LevelFilter::Debug,
            "info" => LevelFilter::Info,
            "warn" | "warning" => LevelFilter::Warn,
            "error" => LevelFilter::Error,
            _ => LevelFilter::Info, // Default to Info
        }
    }
}

pub fn load_config() -> Result<LogConfig, ConfigError> {
    load_config_from(DEFAULT_CONFIG_PATH)
}

/// Defaults, then the (optional) file at `path`, then `BUFLOG_*` environment variables.
pub fn load_config_from(path: &str) -> Result<LogConfig, ConfigError> {
    let s = Config::builder()
        // Set defaults
        .set_default("log_level", "info")?
        .set_default("log_to_file", false)?
        .set_default("log_file", "log/buflog.log")?
        .set_default("pattern", DEFAULT_PATTERN)?
        // Add configuration from a file
        .add_source(File::with_name(path).required(false))
        // Add configuration from environment variables
        .add_source(Environment::with_prefix("BUFLOG"))
        .build()?;

    s.try_deserialize()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with_level(level: &str) -> LogConfig {
        LogConfig {
            log_level: level.to_string(),
            log_to_file: false,
            log_file: String::new(),
            pattern: DEFAULT_PATTERN.to_string(),
        }
    }

    #[test]
    fn test_level_filter_parsing() {
        assert_eq!(config_with_level("DEBUG").level_filter(), LevelFilter::Debug);
        assert_eq!(config_with_level("warning").level_filter(), LevelFilter::Warn);
        assert_eq!(config_with_level("off").level_filter(), LevelFilter::Off);
        assert_eq!(config_with_level("verbose").level_filter(), LevelFilter::Info);
    }

    #[test]
    fn test_defaults_without_file() {
        let config = load_config_from("does/not/exist.yaml").unwrap();
        assert_eq!(config.log_file, "log/buflog.log");
        assert_eq!(config.pattern, DEFAULT_PATTERN);
        assert!(!config.log_to_file);
    }

    #[test]
    fn test_default_pattern_shows_target() {
        // Notice and critical lines differ from info and error only by target.
        let config = load_config_from("does/not/exist.yaml").unwrap();
        assert!(config.pattern.contains("{t}"));
    }

    #[test]
    fn test_file_overrides_defaults() {
        let dir = std::env::temp_dir().join(format!("buflog_cfg_{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("config.yaml");
        std::fs::write(&path, "log_level: debug\nlog_file: /tmp/other.log\n").unwrap();

        let config = load_config_from(path.to_str().unwrap()).unwrap();
        assert_eq!(config.level_filter(), LevelFilter::Debug);
        assert_eq!(config.log_file, "/tmp/other.log");

        std::fs::remove_dir_all(&dir).unwrap();
    }
}
