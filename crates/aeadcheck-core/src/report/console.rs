//! Human-oriented run output, written to stderr.

use crate::model::{VectorResultRow, VectorStatus};
use crate::report::ReportCounts;

pub fn print_summary(results: &[VectorResultRow]) {
    eprintln!();
    for r in results {
        let duration = r
            .duration_ms
            .map(|d| format!("({:.1}s)", d as f64 / 1000.0))
            .unwrap_or_default();
        match r.status {
            VectorStatus::Pass => {
                eprintln!("✅ {:<28} {}  {}", r.id, r.description, duration);
            }
            VectorStatus::Skipped => {
                eprintln!("⏭️  {:<28} {}", r.id, r.message);
            }
            VectorStatus::Fail => {
                eprintln!("❌ {:<28} {}  {}", r.id, r.message, duration);
                if let Some(expected) = r.details.pointer("/phase1/expected") {
                    if let Some(actual) = r.details.pointer("/phase1/actual") {
                        eprintln!("      phase 1: expected {} got {}", expected, actual);
                    }
                }
            }
            VectorStatus::Error => {
                eprintln!("💥 {:<28} ERROR: {}", r.id, r.message);
            }
        }
    }

    let counts = ReportCounts::from_rows(results);
    eprintln!("\n━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    eprintln!(
        "Summary: {} passed, {} failed, {} skipped, {} error",
        counts.passed, counts.failed, counts.skipped, counts.errored
    );
}
