use crate::report::RunArtifacts;
use std::path::Path;

pub fn write_json(artifacts: &RunArtifacts, out: &Path) -> anyhow::Result<()> {
    std::fs::write(out, serde_json::to_string_pretty(artifacts)?)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::ReportCounts;

    #[test]
    fn written_file_parses_back() {
        let artifacts = RunArtifacts {
            suite: "aead-verify".into(),
            results: vec![],
            counts: ReportCounts::default(),
        };
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("run.json");
        write_json(&artifacts, &path).expect("write");

        let raw = std::fs::read_to_string(&path).expect("read");
        let v: serde_json::Value = serde_json::from_str(&raw).expect("parse");
        assert_eq!(v["suite"], "aead-verify");
        assert!(v["results"].is_array());
    }
}
