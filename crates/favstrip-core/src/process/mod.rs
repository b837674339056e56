//! Per-file rewrite and the sequential run over all candidates.
//!
//! Each file is read, filtered and written back before the next one is
//! touched. A failure is recorded on that file's outcome and the run moves on.

mod error;
mod file;

pub use error::ProcessError;
pub use file::{process_file, FileReport};

use anyhow::{Context, Result};

use crate::config::StripConfig;
use crate::discover;
use crate::report::{FileOutcome, RunReport};

/// Rewrite every file matching the configured pattern and collect the outcomes.
///
/// `on_outcome` sees each outcome as soon as its file is done, so a report
/// can be streamed while the run is still going. Only discovery errors (a
/// malformed pattern) and errors from `on_outcome` fail the run itself.
pub fn run<F>(cfg: &StripConfig, mut on_outcome: F) -> Result<RunReport>
where
    F: FnMut(&FileOutcome) -> std::io::Result<()>,
{
    let candidates = discover::candidate_files(&cfg.docs_dir, &cfg.pattern)
        .with_context(|| format!("failed to list files in {}", cfg.docs_dir.display()))?;
    tracing::info!(
        dir = %cfg.docs_dir.display(),
        pattern = %cfg.pattern,
        count = candidates.len(),
        "starting run"
    );

    let mut report = RunReport::default();
    for path in candidates {
        let result = process_file(&path, &cfg.marker);
        if let Err(e) = &result {
            tracing::warn!(path = %path.display(), "failed: {}", e);
        }
        let outcome = FileOutcome { path, result };
        on_outcome(&outcome).context("failed to write report line")?;
        report.push(outcome);
    }

    tracing::info!(
        processed = report.processed_count(),
        failed = report.failed_count(),
        "run finished"
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn run_rewrites_matching_files_and_skips_others() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("a.html"), "<link href=\"favicon.ico\">\nA\n").unwrap();
        fs::write(dir.path().join("b.txt"), "favicon.ico\nB\n").unwrap();

        let cfg = StripConfig {
            docs_dir: dir.path().to_path_buf(),
            ..StripConfig::default()
        };
        let mut seen = Vec::new();
        let report = run(&cfg, |o| {
            seen.push(o.line());
            Ok(())
        })
        .unwrap();

        assert_eq!(seen, vec!["Processed: a.html".to_string()]);
        assert_eq!(report.outcomes().len(), 1);
        assert_eq!(report.processed_count(), 1);
        assert_eq!(fs::read_to_string(dir.path().join("a.html")).unwrap(), "A");
        assert_eq!(fs::read_to_string(dir.path().join("b.txt")).unwrap(), "favicon.ico\nB\n");
    }

    #[test]
    fn run_uses_configured_marker_and_pattern() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("p.htm"), "keep\n<meta name=\"robots\">\n").unwrap();

        let cfg = StripConfig {
            docs_dir: dir.path().to_path_buf(),
            pattern: "*.htm".to_string(),
            marker: "robots".to_string(),
        };
        let report = run(&cfg, |_| Ok(())).unwrap();

        assert_eq!(report.processed_count(), 1);
        assert_eq!(fs::read_to_string(dir.path().join("p.htm")).unwrap(), "keep");
    }

    #[test]
    fn run_reports_directory_as_read_failure_and_continues() {
        let dir = tempfile::tempdir().unwrap();
        let folder = dir.path().join("a-folder.html");
        fs::create_dir(&folder).unwrap();
        fs::write(dir.path().join("b.html"), "favicon.ico\nB").unwrap();

        let cfg = StripConfig {
            docs_dir: dir.path().to_path_buf(),
            ..StripConfig::default()
        };
        let report = run(&cfg, |_| Ok(())).unwrap();

        assert_eq!(report.failed_count(), 1);
        assert!(matches!(report.outcomes()[0].result, Err(ProcessError::Read(_))));
        assert_eq!(report.outcomes()[0].path, folder);
        assert_eq!(fs::read_to_string(dir.path().join("b.html")).unwrap(), "B");
    }

    #[test]
    fn run_stops_when_report_sink_fails() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("a.html"), "x").unwrap();
        fs::write(dir.path().join("b.html"), "favicon.ico\ny").unwrap();

        let cfg = StripConfig {
            docs_dir: dir.path().to_path_buf(),
            ..StripConfig::default()
        };
        let err = run(&cfg, |_| {
            Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed"))
        })
        .unwrap_err();

        assert!(format!("{err:#}").contains("failed to write report line"));
        assert_eq!(fs::read_to_string(dir.path().join("b.html")).unwrap(), "favicon.ico\ny");
    }

    #[test]
    fn run_rejects_bad_pattern() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = StripConfig {
            docs_dir: dir.path().to_path_buf(),
            pattern: "[".to_string(),
            ..StripConfig::default()
        };
        let err = run(&cfg, |_| Ok(())).unwrap_err();
        assert!(format!("{err:#}").contains("invalid glob pattern"));
    }
}
