use thiserror::Error;

/// Errors produced while validating canonicalizer configuration.
///
/// Canonicalizing text itself never fails; only configuration is checked.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CanonicalError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
