//! Shared loading logic for the subcommands: config resolution, vector
//! store resolution, and provider selection.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use aeadcheck_core::config::RunConfig;
use aeadcheck_core::errors::RunError;
use aeadcheck_core::providers::rustcrypto::RustCryptoProvider;
use aeadcheck_core::providers::AeadProvider;
use aeadcheck_core::store::VectorStore;

const DEFAULT_CONFIG: &str = "aeadcheck.yaml";

/// An explicit --config must exist; without one, `aeadcheck.yaml` is used
/// when present and built-in defaults otherwise.
pub(crate) fn load_run_config(explicit: Option<&Path>) -> anyhow::Result<RunConfig> {
    match explicit {
        Some(path) => RunConfig::load(path),
        None => {
            let fallback = Path::new(DEFAULT_CONFIG);
            if fallback.exists() {
                RunConfig::load(fallback)
            } else {
                Ok(RunConfig::default())
            }
        }
    }
}

/// Vector precedence: --vectors flag, then the config's `vectors` entry,
/// then the builtin table.
pub(crate) fn resolve_store(
    cfg: &RunConfig,
    flag: Option<&PathBuf>,
) -> anyhow::Result<VectorStore> {
    match flag.or(cfg.vectors.as_ref()) {
        Some(path) => VectorStore::from_path(path),
        None => Ok(VectorStore::builtin()),
    }
}

pub(crate) fn resolve_provider(name: &str) -> anyhow::Result<Arc<dyn AeadProvider>> {
    match name {
        "rustcrypto" => Ok(Arc::new(RustCryptoProvider::new())),
        other => Err(RunError::invalid_args(format!(
            "unknown provider '{}' (available: rustcrypto)",
            other
        ))
        .into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn missing_explicit_config_fails() {
        assert!(load_run_config(Some(Path::new("/nonexistent/cfg.yaml"))).is_err());
    }

    #[test]
    fn absent_config_falls_back_to_defaults() {
        let cfg = load_run_config(None).expect("defaults");
        assert_eq!(cfg.suite, "aead-verify");
    }

    #[test]
    fn vectors_flag_overrides_config_entry() {
        let mut f = tempfile::Builder::new()
            .suffix(".yaml")
            .tempfile()
            .expect("tempfile");
        let file = serde_yaml::to_string(&serde_json::json!({ "vectors": [] })).expect("yaml");
        f.write_all(file.as_bytes()).expect("write");

        let cfg = RunConfig {
            vectors: Some(PathBuf::from("/nonexistent/vectors.yaml")),
            ..RunConfig::default()
        };
        let store = resolve_store(&cfg, Some(&f.path().to_path_buf())).expect("flag wins");
        assert!(store.is_empty());
    }

    #[test]
    fn unknown_provider_is_invalid_args() {
        assert!(resolve_provider("softhsm").is_err());
        assert!(resolve_provider("rustcrypto").is_ok());
    }
}
