//! Configuration types for the canonicalizer.
//!
//! [`CanonicalizeConfig`] controls how raw page text is turned into the
//! canonical source and the whitespace-collapsed search text.
//!
//! # Versioning
//!
//! The `version` field tracks behavior changes. Any change that moves a
//! character in the normalized text (and therefore every downstream offset)
//! must come with a version bump so stored match positions can be tied to
//! the canonicalization that produced them.
//!
//! # Examples
//!
//! ```rust
//! use canonical::CanonicalizeConfig;
//!
//! let config = CanonicalizeConfig::default();
//! assert_eq!(config.version, 1);
//! assert!(config.normalize_unicode);
//! assert!(config.validate().is_ok());
//! ```

use serde::{Deserialize, Serialize};

use crate::error::CanonicalError;

/// Configuration for the canonicalizer.
///
/// Cheap to clone and serde-friendly so it can be embedded in the YAML
/// configuration of the whole scanner.
///
/// ```json
/// {
///   "version": 1,
///   "normalize_unicode": true
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct CanonicalizeConfig {
    /// Version of the canonicalization behavior.
    ///
    /// Must be >= 1; version 0 is reserved and rejected by
    /// [`validate`](Self::validate).
    pub version: u32,

    /// If true, apply Unicode NFKC normalization before anything else.
    ///
    /// NFKC folds compatibility forms that PDF text extraction produces all
    /// the time: ligatures (`ﬁ` → `fi`), full-width digits, non-breaking
    /// spaces, and decomposed accents. Without it a phrase such as
    /// "Certiﬁed" never matches the keyword "Certified".
    ///
    /// Only disable when the caller has already normalized the text.
    pub normalize_unicode: bool,
}

impl CanonicalizeConfig {
    /// Validate the configuration once, at load time.
    pub fn validate(&self) -> Result<(), CanonicalError> {
        if self.version == 0 {
            return Err(CanonicalError::InvalidConfig(
                "config version must be >= 1".into(),
            ));
        }
        Ok(())
    }
}

impl Default for CanonicalizeConfig {
    /// Version 1 with NFKC normalization enabled.
    fn default() -> Self {
        Self {
            version: 1,
            normalize_unicode: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(CanonicalizeConfig::default().validate().is_ok());
    }

    #[test]
    fn version_zero_rejected() {
        let cfg = CanonicalizeConfig {
            version: 0,
            ..Default::default()
        };
        assert!(matches!(
            cfg.validate(),
            Err(CanonicalError::InvalidConfig(_))
        ));
    }
}
