//! Analysis configuration.
//!
//! A plain value loaded once (from JSON or CLI flags) and passed by
//! reference to [`crate::analysis::analyze`].

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::shadow::FunctionRole;
use crate::{Error, Result};

/// How reports are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(Error::InvalidConfig(format!("unknown output format '{other}'"))),
        }
    }
}

/// What an analysis reports and how.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Roles to report, in output order.
    pub roles: Vec<FunctionRole>,
    /// Show the Socionics code and, with `compare_to`, the relation.
    pub show_socionics: bool,
    /// Type to compute the intertype relation against.
    pub compare_to: Option<String>,
    pub format: OutputFormat,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            roles: FunctionRole::ALL.to_vec(),
            show_socionics: false,
            compare_to: None,
            format: OutputFormat::Text,
        }
    }
}

impl AnalysisConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from a JSON file. Missing or malformed files are startup errors.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)?;
        let config = Self::from_json_str(&raw)?;
        info!(path = %path.display(), "loaded analysis config");
        Ok(config)
    }

    pub fn with_roles(mut self, roles: impl IntoIterator<Item = FunctionRole>) -> Self {
        self.roles = roles.into_iter().collect();
        self
    }

    pub fn with_socionics(mut self, compare_to: Option<String>) -> Self {
        self.show_socionics = true;
        self.compare_to = compare_to;
        self
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    fn validate(&self) -> Result<()> {
        if self.roles.is_empty() {
            return Err(Error::InvalidConfig("at least one role must be selected".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_reports_all_roles() {
        let config = AnalysisConfig::default();
        assert_eq!(config.roles, FunctionRole::ALL);
        assert!(!config.show_socionics);
        assert_eq!(config.format, OutputFormat::Text);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config = AnalysisConfig::from_json_str(
            r#"{"roles": ["superego", "ego"], "show_socionics": true, "compare_to": "ENTP"}"#,
        )
        .unwrap();
        assert_eq!(config.roles, [FunctionRole::Superego, FunctionRole::Ego]);
        assert!(config.show_socionics);
        assert_eq!(config.compare_to.as_deref(), Some("ENTP"));
        assert_eq!(config.format, OutputFormat::Text);
    }

    #[test]
    fn test_rejects_unknown_role() {
        let err = AnalysisConfig::from_json_str(r#"{"roles": ["persona"]}"#).unwrap_err();
        assert!(matches!(err, Error::Serialization(_)));
    }

    #[test]
    fn test_rejects_empty_roles() {
        let err = AnalysisConfig::from_json_str(r#"{"roles": []}"#).unwrap_err();
        assert!(matches!(err, Error::InvalidConfig(_)));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = AnalysisConfig::from_json_file("/nonexistent/eidon.json").unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_output_format_parse() {
        assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert!("yaml".parse::<OutputFormat>().is_err());
    }
}
