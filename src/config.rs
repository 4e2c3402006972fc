use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::Deserialize;

/// Log file used when no path is configured. It is opened in append mode.
pub const DEFAULT_LOG_FILE: &str = "packets.log";

#[derive(Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub logger: LoggerConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    /// Include non-public fields in dumps
    #[serde(rename = "private_fields")]
    pub log_private_fields: bool,

    /// Echo every dump to stdout
    #[serde(rename = "console")]
    pub log_console: bool,

    #[serde(rename = "path")]
    pub target: LogTarget,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            log_private_fields: false,
            log_console: true,
            target: LogTarget::Default,
        }
    }
}

impl LoggerConfig {
    pub fn with_private_fields(mut self, log_private_fields: bool) -> Self {
        self.log_private_fields = log_private_fields;
        self
    }

    pub fn with_console(mut self, log_console: bool) -> Self {
        self.log_console = log_console;
        self
    }

    pub fn with_target(mut self, target: LogTarget) -> Self {
        self.target = target;
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "Option<PathBuf>")]
pub enum LogTarget {
    /// `packets.log` in the working directory, appended to.
    #[default]
    Default,
    /// An explicit file, truncated when the logger opens it.
    File(PathBuf),
}

impl LogTarget {
    pub fn path(&self) -> &Path {
        match self {
            Self::Default => Path::new(DEFAULT_LOG_FILE),
            Self::File(path) => path,
        }
    }

    pub fn appends(&self) -> bool {
        matches!(self, Self::Default)
    }
}

impl From<Option<PathBuf>> for LogTarget {
    fn from(path: Option<PathBuf>) -> Self {
        match path {
            Some(path) => Self::File(path),
            None => Self::Default,
        }
    }
}

pub fn load(config_file: &Path) -> anyhow::Result<Config> {
    let config = fs::read_to_string(config_file)?;
    Ok(toml::from_str::<Config>(&config)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = LoggerConfig::default();

        assert!(!config.log_private_fields);
        assert!(config.log_console);
        assert_eq!(config.target.path(), Path::new("packets.log"));
        assert!(config.target.appends());
    }

    #[test]
    fn explicit_path_truncates() {
        let target = LogTarget::File("session.log".into());

        assert_eq!(target.path(), Path::new("session.log"));
        assert!(!target.appends());
    }

    #[test]
    fn parses_logger_table() {
        let config: Config = toml::from_str(
            r#"
            [logger]
            path = "session.log"
            private_fields = true
            console = false
            "#,
        )
        .unwrap();

        assert_eq!(
            config.logger,
            LoggerConfig::default()
                .with_private_fields(true)
                .with_console(false)
                .with_target(LogTarget::File("session.log".into()))
        );
    }

    #[test]
    fn missing_keys_fall_back_to_defaults() {
        let config: Config = toml::from_str("[logger]\nprivate_fields = true\n").unwrap();
        assert_eq!(config.logger.target, LogTarget::Default);
        assert!(config.logger.log_console);

        let empty: Config = toml::from_str("").unwrap();
        assert_eq!(empty.logger, LoggerConfig::default());
    }

    #[test]
    fn load_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pktlog.toml");
        fs::write(&path, "[logger]\nconsole = false\n").unwrap();

        let config = load(&path).unwrap();
        assert!(!config.logger.log_console);
        assert!(load(&dir.path().join("missing.toml")).is_err());
    }
}
