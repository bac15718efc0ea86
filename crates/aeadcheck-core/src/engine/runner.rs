//! The conformance runner: drives each vector through the provider's
//! verify capability in two phases and asserts the outcome of both.
//!
//! Execution is sequential and isolated. Each phase is an independent
//! provider call against a fresh key import; nothing carries over from one
//! vector to the next, so a failing vector can never influence a later one.

use std::sync::Arc;
use std::time::Instant;
use tokio::time::{timeout, Duration};
use tracing::{debug, warn};

use crate::config::RunConfig;
use crate::errors::RunError;
use crate::model::{TestVector, VectorResultRow, VerifyStatus};
use crate::providers::{AeadProvider, VerifyOutcome, VerifyRequest};
use crate::report::{ReportCounts, RunArtifacts};
use crate::store::VectorStore;

#[derive(Debug, Clone)]
pub struct RunPolicy {
    /// Upper bound on a single provider call; an elapsed call is recorded
    /// as an error for that vector and the run continues.
    pub call_timeout: Duration,
}

impl Default for RunPolicy {
    fn default() -> Self {
        Self {
            call_timeout: Duration::from_secs(30),
        }
    }
}

pub struct Runner {
    pub provider: Arc<dyn AeadProvider>,
    pub policy: RunPolicy,
}

impl Runner {
    pub fn new(provider: Arc<dyn AeadProvider>) -> Self {
        Self {
            provider,
            policy: RunPolicy::default(),
        }
    }

    pub fn with_policy(provider: Arc<dyn AeadProvider>, policy: RunPolicy) -> Self {
        Self { provider, policy }
    }

    /// Run every vector in the store, reporting feature-excluded vectors as
    /// skipped rows. Rows are returned sorted by vector id for
    /// deterministic output.
    pub async fn run_suite(
        &self,
        cfg: &RunConfig,
        store: &VectorStore,
    ) -> anyhow::Result<RunArtifacts> {
        let mut rows = Vec::with_capacity(store.len());
        for vector in store.iter() {
            if !cfg.features.supports(vector) {
                debug!(vector = %vector.id, "excluded by feature set");
                rows.push(VectorResultRow::skipped(vector, "disabled by feature set"));
                continue;
            }
            rows.push(self.run_vector(vector).await);
        }

        rows.sort_by(|a, b| a.id.cmp(&b.id));
        let counts = ReportCounts::from_rows(&rows);
        Ok(RunArtifacts {
            suite: cfg.suite.clone(),
            results: rows,
            counts,
        })
    }

    /// Run one vector in isolation. Never panics and never propagates a
    /// provider failure: every outcome becomes a row.
    pub async fn run_vector(&self, vector: &TestVector) -> VectorResultRow {
        let started = Instant::now();
        let mut row = match self.run_phases(vector).await {
            Ok(row) => row,
            Err(e) => {
                warn!(vector = %vector.id, error = %e, "provider call failed");
                VectorResultRow::error(vector, e.to_string())
            }
        };
        row.duration_ms = Some(started.elapsed().as_millis() as u64);
        debug!(vector = %vector.id, status = ?row.status, "vector finished");
        row
    }

    async fn run_phases(&self, vector: &TestVector) -> anyhow::Result<VectorResultRow> {
        let phase1 = self
            .call(VerifyRequest::bounded(vector), "phase 1")
            .await?;
        if phase1.status != vector.expected_status_phase1 {
            return Ok(VectorResultRow::fail(
                vector,
                format!(
                    "phase 1: expected {}, got {}",
                    vector.expected_status_phase1, phase1.status
                ),
                Self::phase_details(vector, Some(&phase1), None),
            ));
        }

        let phase2 = self.call(VerifyRequest::full(vector), "phase 2").await?;
        if phase2.status != vector.expected_status_phase2 {
            return Ok(VectorResultRow::fail(
                vector,
                format!(
                    "phase 2: expected {}, got {}",
                    vector.expected_status_phase2, phase2.status
                ),
                Self::phase_details(vector, Some(&phase1), Some(&phase2)),
            ));
        }
        if phase2.status == VerifyStatus::Success && phase2.plaintext != vector.plaintext {
            return Ok(VectorResultRow::fail(
                vector,
                format!(
                    "phase 2: plaintext mismatch (expected {} bytes, got {} bytes)",
                    vector.plaintext.len(),
                    phase2.plaintext.len()
                ),
                serde_json::json!({
                    "expected_plaintext": hex::encode(&vector.plaintext),
                    "actual_plaintext": hex::encode(&phase2.plaintext),
                }),
            ));
        }

        Ok(VectorResultRow::pass(
            vector,
            Self::phase_details(vector, Some(&phase1), Some(&phase2)),
        ))
    }

    async fn call(&self, req: VerifyRequest, phase: &str) -> anyhow::Result<VerifyOutcome> {
        match timeout(self.policy.call_timeout, self.provider.verify(&req)).await {
            Ok(res) => res,
            Err(_) => Err(RunError::provider_timeout(format!(
                "timeout: {} did not complete within {}s",
                phase,
                self.policy.call_timeout.as_secs_f64()
            ))
            .into()),
        }
    }

    fn phase_details(
        vector: &TestVector,
        phase1: Option<&VerifyOutcome>,
        phase2: Option<&VerifyOutcome>,
    ) -> serde_json::Value {
        serde_json::json!({
            "algorithm": vector.algorithm.to_string(),
            "phase1": {
                "expected": vector.expected_status_phase1,
                "actual": phase1.map(|o| o.status),
            },
            "phase2": {
                "expected": vector.expected_status_phase2,
                "actual": phase2.map(|o| o.status),
            },
        })
    }
}
