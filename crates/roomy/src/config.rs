//! Loading breakpoint tables from YAML or JSON.
//!
//! A config document is a mapping from lowercase tier name to minimum width.
//! Tiers left out keep their default threshold:
//!
//! ```yaml
//! sm: 320
//! md: 480
//! ```

use std::path::Path;

use crate::breakpoint::Breakpoints;
use crate::error::ConfigError;

impl Breakpoints {
    /// Parses a table from YAML.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] for malformed documents, unknown tier
    /// names, or a table that is not strictly ascending.
    pub fn from_yaml_str(source: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(source)?)
    }

    /// Parses a table from JSON.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Json`] for the same conditions as
    /// [`Breakpoints::from_yaml_str`].
    pub fn from_json_str(source: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(source)?)
    }

    /// Reads a table from a file, as JSON if the extension is `.json` and
    /// as YAML otherwise.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, and otherwise
    /// the errors of [`Breakpoints::from_json_str`] or
    /// [`Breakpoints::from_yaml_str`].
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        if is_json {
            Self::from_json_str(&source)
        } else {
            Self::from_yaml_str(&source)
        }
    }
}
