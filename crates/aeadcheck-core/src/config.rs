//! Run configuration: suite name, feature-set filtering, and per-call
//! settings, loaded from a YAML file:
//!
//! ```yaml
//! suite: aead-verify
//! features:
//!   ccm: true
//!   aes192: false
//! settings:
//!   timeout_seconds: 10
//! vectors: vectors/extra.yaml
//! ```
//!
//! Every field has a default so a run with no config file exercises the
//! builtin table with all features enabled.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::errors::RunError;
use crate::model::{AlgorithmFamily, TestVector};

/// Capability toggles deciding which vectors a run exercises. This replaces
/// compile-time exclusion of vectors: filtering is a runtime decision against
/// the provider's configured capabilities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeatureSet {
    pub ccm: bool,
    pub gcm: bool,
    pub aes128: bool,
    pub aes192: bool,
    pub aes256: bool,
}

impl Default for FeatureSet {
    fn default() -> Self {
        Self {
            ccm: true,
            gcm: true,
            aes128: true,
            aes192: true,
            aes256: true,
        }
    }
}

impl FeatureSet {
    /// A vector's requirements are derived from its fields rather than
    /// tagged redundantly: the algorithm family plus the key-size class.
    /// Key lengths outside the AES classes are not gated here; the provider
    /// rejects them itself.
    pub fn supports(&self, vector: &TestVector) -> bool {
        let family_ok = match vector.algorithm.family() {
            AlgorithmFamily::Ccm => self.ccm,
            AlgorithmFamily::Gcm => self.gcm,
        };
        let key_ok = match vector.key_data.len() {
            16 => self.aes128,
            24 => self.aes192,
            32 => self.aes256,
            _ => true,
        };
        family_ok && key_ok
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Per-provider-call timeout; elapsed calls are recorded as errors.
    pub timeout_seconds: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    pub suite: String,
    pub features: FeatureSet,
    pub settings: Settings,
    /// Optional external vector file; the builtin table is used when absent.
    pub vectors: Option<PathBuf>,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            suite: "aead-verify".into(),
            features: FeatureSet::default(),
            settings: Settings::default(),
            vectors: None,
        }
    }
}

impl RunConfig {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let display = path.display().to_string();
        let raw = std::fs::read_to_string(path)
            .map_err(|e| RunError::missing_config(&display, e.to_string()))?;
        let cfg: RunConfig = serde_yaml::from_str(&raw)
            .map_err(|e| RunError::config_parse(Some(display), e.to_string()))?;
        Ok(cfg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store;
    use std::io::Write;

    #[test]
    fn default_feature_set_enables_everything() {
        let fs = FeatureSet::default();
        for v in store::builtin::vectors() {
            assert!(fs.supports(&v), "default features must select {}", v.id);
        }
    }

    #[test]
    fn disabling_ccm_filters_ccm_vectors_only() {
        let fs = FeatureSet {
            ccm: false,
            ..FeatureSet::default()
        };
        for v in store::builtin::vectors() {
            let expect = v.algorithm.family() != AlgorithmFamily::Ccm;
            assert_eq!(fs.supports(&v), expect, "vector {}", v.id);
        }
    }

    #[test]
    fn disabling_aes128_filters_by_key_class() {
        let fs = FeatureSet {
            aes128: false,
            ..FeatureSet::default()
        };
        for v in store::builtin::vectors() {
            // The whole builtin table is 16-byte keyed.
            assert!(!fs.supports(&v));
        }
    }

    #[test]
    fn config_parses_partial_yaml_with_defaults() {
        let cfg: RunConfig =
            serde_yaml::from_str("suite: smoke\nfeatures:\n  gcm: false\n").expect("parse");
        assert_eq!(cfg.suite, "smoke");
        assert!(!cfg.features.gcm);
        assert!(cfg.features.ccm);
        assert_eq!(cfg.settings.timeout_seconds, None);
        assert!(cfg.vectors.is_none());
    }

    #[test]
    fn load_reports_missing_and_malformed_files() {
        use crate::errors::{RunError, RunErrorKind};

        let err = RunConfig::load(Path::new("/nonexistent/aeadcheck.yaml"))
            .expect_err("missing file must fail");
        assert_eq!(
            RunError::from_anyhow(&err).kind,
            RunErrorKind::MissingConfig
        );

        let mut f = tempfile::NamedTempFile::new().expect("tempfile");
        writeln!(f, "suite: [unclosed").expect("write");
        let err = RunConfig::load(f.path()).expect_err("malformed yaml must fail");
        assert_eq!(RunError::from_anyhow(&err).kind, RunErrorKind::ConfigParse);
    }
}
