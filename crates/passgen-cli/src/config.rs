use std::path::{Path, PathBuf};

use passgen_options::RawOptions;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while reading `passgen.toml`.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    Toml {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Contents of `passgen.toml`.
///
/// ```toml
/// max_attempts = 100000
/// dictionary = "/usr/share/dict/words"
///
/// [options]
/// type = "words"
/// max_length = 5
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PassgenConfig {
    pub options: RawOptions,
    pub dictionary: Option<PathBuf>,
    pub max_attempts: Option<u64>,
}

impl PassgenConfig {
    pub fn from_toml_str(content: &str, path: &Path) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|source| ConfigError::Toml {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content, path)
    }

    /// Load `path` when given, otherwise fall back to defaults.
    pub fn load_optional(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_config() {
        let config = PassgenConfig::from_toml_str(
            r#"
            max_attempts = 500
            dictionary = "words.txt"

            [options]
            type = "words"
            min_length = 3
            uppercase = true
            separator = "."
            "#,
            Path::new("passgen.toml"),
        )
        .expect("parse config");

        assert_eq!(config.max_attempts, Some(500));
        assert_eq!(config.dictionary, Some(PathBuf::from("words.txt")));
        assert_eq!(config.options.kind.as_deref(), Some("words"));
        assert_eq!(config.options.min_length, Some(3));
        assert_eq!(config.options.uppercase, Some(true));
        assert_eq!(config.options.separator.as_deref(), Some("."));
    }

    #[test]
    fn empty_config_is_default() {
        let config = PassgenConfig::from_toml_str("", Path::new("passgen.toml")).expect("parse");
        assert_eq!(config, PassgenConfig::default());
    }

    #[test]
    fn type_mismatch_is_a_parse_error() {
        let result = PassgenConfig::from_toml_str(
            "[options]\nmin_length = \"eight\"\n",
            Path::new("passgen.toml"),
        );
        assert!(matches!(result, Err(ConfigError::Toml { .. })));
    }

    #[test]
    fn missing_file_is_reported_with_path() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("absent.toml");
        let err = PassgenConfig::load(&path).expect_err("missing config");
        assert!(err.to_string().contains("absent.toml"));
    }
}
