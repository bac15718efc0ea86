pub mod console;
pub mod json;
pub mod summary;

use serde::{Deserialize, Serialize};

use crate::model::{VectorResultRow, VectorStatus};

/// Everything a finished run produced, in deterministic (id-sorted) order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunArtifacts {
    pub suite: String,
    pub results: Vec<VectorResultRow>,
    pub counts: ReportCounts,
}

/// Aggregate outcome counters for a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportCounts {
    pub passed: usize,
    pub failed: usize,
    pub skipped: usize,
    pub errored: usize,
    pub total: usize,
}

impl ReportCounts {
    pub fn from_rows(rows: &[VectorResultRow]) -> Self {
        let mut counts = Self {
            total: rows.len(),
            ..Self::default()
        };
        for row in rows {
            match row.status {
                VectorStatus::Pass => counts.passed += 1,
                VectorStatus::Fail => counts.failed += 1,
                VectorStatus::Skipped => counts.skipped += 1,
                VectorStatus::Error => counts.errored += 1,
            }
        }
        counts
    }

    pub fn all_passed(&self) -> bool {
        self.failed == 0 && self.errored == 0
    }
}
