//! YAML configuration file support.
//!
//! All stage settings live in one file and are validated once at load
//! time, including compilation of every configured pattern. Sections that
//! are left out take their defaults, so a file can override just the parts
//! it cares about.
//!
//! ## Example YAML Configuration
//!
//! ```yaml
//! version: "1.0"
//! name: "structural submittals"
//!
//! canonical:
//!   version: 1
//!   normalize_unicode: true
//!
//! matcher:
//!   keywords:
//!     - "Engineer of Record"
//!     - "Sealed by"
//!   patterns:
//!     - '\bengineer\s+of\s+record\b'
//!
//! scoring:
//!   anchors: ["seal", "stamp", "licensed"]
//!   negations: ["not required"]
//!   proximity_window: 300
//!
//! snippet_window: 400
//! ```

use std::fs;
use std::path::Path;

use canonical::CanonicalizeConfig;
use matcher::{MatchConfig, MatchEngine, ScoringConfig};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::analyzer::{AnalysisConfig, DEFAULT_SNIPPET_WINDOW};

/// Errors that can occur when loading YAML configuration files
#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    #[error("failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("validation error: {0}")]
    Validation(String),

    #[error("unsupported config version: {0}")]
    UnsupportedVersion(String),
}

/// Top-level YAML configuration for the scanner.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub struct SealscanConfig {
    /// Configuration format version
    pub version: String,

    /// Optional configuration name/description
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub canonical: CanonicalizeConfig,

    /// Keyword and pattern vocabulary
    #[serde(default)]
    pub matcher: MatchConfig,

    #[serde(default)]
    pub scoring: ScoringConfig,

    /// Context kept on each side of a match, in characters
    #[serde(default = "default_snippet_window")]
    pub snippet_window: usize,
}

impl SealscanConfig {
    /// Load a YAML configuration file from the given path
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigLoadError> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse YAML configuration from a string
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigLoadError> {
        let config: SealscanConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigLoadError> {
        match self.version.as_str() {
            "1.0" | "1" => Ok(()),
            v => Err(ConfigLoadError::UnsupportedVersion(v.to_string())),
        }?;

        self.canonical
            .validate()
            .map_err(|err| ConfigLoadError::Validation(format!("canonical: {err}")))?;
        // Building the engine compiles every pattern, so regex errors surface
        // here instead of on the first document.
        MatchEngine::new(&self.matcher)
            .map_err(|err| ConfigLoadError::Validation(format!("matcher: {err}")))?;
        self.scoring
            .validate()
            .map_err(|err| ConfigLoadError::Validation(format!("scoring: {err}")))?;

        Ok(())
    }

    /// The analyzer settings described by this file.
    pub fn analysis(&self) -> AnalysisConfig {
        AnalysisConfig {
            canonical: self.canonical.clone(),
            matcher: self.matcher.clone(),
            scoring: self.scoring.clone(),
            snippet_window: self.snippet_window,
        }
    }
}

impl Default for SealscanConfig {
    fn default() -> Self {
        Self {
            version: "1.0".to_string(),
            name: None,
            canonical: CanonicalizeConfig::default(),
            matcher: MatchConfig::default(),
            scoring: ScoringConfig::default(),
            snippet_window: DEFAULT_SNIPPET_WINDOW,
        }
    }
}

fn default_snippet_window() -> usize {
    DEFAULT_SNIPPET_WINDOW
}
