//! `favstrip run` – strip marker lines from every matching file.

use anyhow::Result;
use favstrip_core::config::StripConfig;
use favstrip_core::process;
use favstrip_core::report;
use std::io::{self, Write};

/// Process all candidates, printing each file's line as soon as it is done,
/// then the summary line. Per-file failures are reported, not returned.
pub fn run_strip(cfg: &StripConfig) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let report = process::run(cfg, |outcome| {
        outcome.write_line(&mut out)?;
        out.flush()
    })?;
    report::write_summary(&mut out)?;
    out.flush()?;

    if report.failed_count() > 0 {
        tracing::warn!(
            "{} of {} file(s) failed",
            report.failed_count(),
            report.outcomes().len()
        );
    }
    tracing::info!("removed {} line(s)", report.lines_removed());
    Ok(())
}
