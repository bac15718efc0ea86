//! Machine-readable summary.json for CI gates.
//!
//! Downstream consumers branch on `(reason_code_version, reason_code)`
//! rather than on exit codes or display strings.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::report::ReportCounts;

/// Current schema version for summary.json.
pub const SCHEMA_VERSION: u32 = 1;

/// Reason code registry version.
pub const REASON_CODE_VERSION: u32 = 1;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Summary {
    pub schema_version: u32,
    pub reason_code_version: u32,

    /// Exit code: 0=pass, 1=vector failure, 2=config error.
    pub exit_code: i32,

    /// Stable machine-readable reason code (empty on success).
    pub reason_code: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    /// Suggested next step when exit_code != 0.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_step: Option<String>,

    pub provenance: Provenance,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub results: Option<ResultsSummary>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Provenance {
    /// Tool version that produced this run.
    pub aeadcheck_version: String,
    /// Name of the AEAD provider under test.
    pub provider: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResultsSummary {
    pub passed: usize,
    pub failed: usize,
    pub skipped: usize,
    pub errored: usize,
    pub total: usize,
}

impl Summary {
    pub fn success(version: &str, provider: &str) -> Self {
        Self {
            schema_version: SCHEMA_VERSION,
            reason_code_version: REASON_CODE_VERSION,
            exit_code: 0,
            reason_code: String::new(),
            message: Some("All vectors passed".into()),
            next_step: None,
            provenance: Provenance {
                aeadcheck_version: version.into(),
                provider: provider.into(),
            },
            results: None,
        }
    }

    pub fn failure(
        exit_code: i32,
        reason_code: &str,
        message: &str,
        next_step: &str,
        version: &str,
        provider: &str,
    ) -> Self {
        Self {
            schema_version: SCHEMA_VERSION,
            reason_code_version: REASON_CODE_VERSION,
            exit_code,
            reason_code: reason_code.into(),
            message: Some(message.into()),
            next_step: Some(next_step.into()),
            provenance: Provenance {
                aeadcheck_version: version.into(),
                provider: provider.into(),
            },
            results: None,
        }
    }

    pub fn with_results(mut self, counts: &ReportCounts) -> Self {
        self.results = Some(ResultsSummary {
            passed: counts.passed,
            failed: counts.failed,
            skipped: counts.skipped,
            errored: counts.errored,
            total: counts.total,
        });
        self
    }
}

pub fn write_summary(summary: &Summary, out: &Path) -> anyhow::Result<()> {
    std::fs::write(out, serde_json::to_string_pretty(summary)?)?;
    Ok(())
}
