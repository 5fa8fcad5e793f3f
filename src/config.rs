use crate::difficulty::Difficulty;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Program configuration read from a configuration file
#[derive(Clone, Copy, Deserialize, Debug, Default, Eq, PartialEq)]
#[serde(default, rename_all = "kebab-case")]
pub(crate) struct Config {
    /// Difficulty that new games start out at
    pub(crate) difficulty: Difficulty,
}

impl Config {
    /// Return the default configuration file path
    pub(crate) fn default_path() -> Result<PathBuf, ConfigError> {
        dirs::config_local_dir()
            .map(|p| p.join("gridsnake").join("config.toml"))
            .ok_or(ConfigError::NoPath)
    }

    /// Read configuration from a file on disk.  If the file does not exist and
    /// `allow_missing` is true, a default `Config` value is returned.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the file could not be read or if the file's contents
    /// could not be deserialized.
    pub(crate) fn load(path: &Path, allow_missing: bool) -> Result<Config, ConfigError> {
        let content = match fs_err::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound && allow_missing => {
                return Ok(Config::default())
            }
            Err(e) => return Err(ConfigError::Read(e)),
        };
        toml::from_str(&content).map_err(Into::into)
    }
}

#[derive(Debug, Error)]
pub(crate) enum ConfigError {
    #[error("failed to determine path to local configuration directory")]
    NoPath,
    #[error("failed to read configuration file")]
    Read(#[from] std::io::Error),
    #[error("failed to parse configuration file")]
    Parse(#[from] toml::de::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn load_difficulty() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "difficulty = \"hard\"").unwrap();
        file.flush().unwrap();
        let config = Config::load(file.path(), false).unwrap();
        assert_eq!(
            config,
            Config {
                difficulty: Difficulty::Hard
            }
        );
    }

    #[test]
    fn load_empty() {
        let file = NamedTempFile::new().unwrap();
        let config = Config::load(file.path(), false).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn load_missing_allowed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let config = Config::load(&path, true).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn load_missing_denied() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        assert!(matches!(
            Config::load(&path, false),
            Err(ConfigError::Read(_))
        ));
    }

    #[test]
    fn load_invalid_difficulty() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "difficulty = \"nightmare\"").unwrap();
        file.flush().unwrap();
        assert!(matches!(
            Config::load(file.path(), false),
            Err(ConfigError::Parse(_))
        ));
    }
}
