//! End-to-end run of the builtin vector table against the RustCrypto
//! provider: every embedded fixture must pass, including the deliberate
//! error-path vectors whose expectations encode the rejection.

use std::sync::Arc;

use aeadcheck_core::config::{FeatureSet, RunConfig};
use aeadcheck_core::engine::Runner;
use aeadcheck_core::model::VectorStatus;
use aeadcheck_core::providers::rustcrypto::RustCryptoProvider;
use aeadcheck_core::store::VectorStore;

#[tokio::test]
async fn builtin_table_passes_against_rustcrypto() {
    let cfg = RunConfig::default();
    let store = VectorStore::builtin();
    let runner = Runner::new(Arc::new(RustCryptoProvider::new()));

    let artifacts = runner.run_suite(&cfg, &store).await.expect("run");

    assert_eq!(artifacts.results.len(), 5);
    for row in &artifacts.results {
        assert_eq!(
            row.status,
            VectorStatus::Pass,
            "vector {} failed: {}",
            row.id,
            row.message
        );
    }
    assert!(artifacts.counts.all_passed());
    assert_eq!(artifacts.counts.passed, 5);
}

#[tokio::test]
async fn ccm_disabled_run_skips_ccm_and_passes_gcm() {
    let cfg = RunConfig {
        features: FeatureSet {
            ccm: false,
            ..FeatureSet::default()
        },
        ..RunConfig::default()
    };
    let store = VectorStore::builtin();
    let runner = Runner::new(Arc::new(RustCryptoProvider::new()));

    let artifacts = runner.run_suite(&cfg, &store).await.expect("run");

    assert_eq!(artifacts.counts.skipped, 4);
    assert_eq!(artifacts.counts.passed, 1);
    assert!(artifacts.counts.all_passed());

    let gcm = artifacts
        .results
        .iter()
        .find(|r| r.id == "gcm_aes128_basic")
        .expect("gcm row");
    assert_eq!(gcm.status, VectorStatus::Pass);
}

#[tokio::test]
async fn repeated_runs_yield_identical_outcomes() {
    let cfg = RunConfig::default();
    let store = VectorStore::builtin();
    let runner = Runner::new(Arc::new(RustCryptoProvider::new()));

    let first = runner.run_suite(&cfg, &store).await.expect("first run");
    let second = runner.run_suite(&cfg, &store).await.expect("second run");

    assert_eq!(first.counts, second.counts);
    for (a, b) in first.results.iter().zip(second.results.iter()) {
        assert_eq!(a.id, b.id);
        assert_eq!(a.status, b.status);
        assert_eq!(a.message, b.message);
    }
}
