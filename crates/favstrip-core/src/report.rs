//! Console report for a run: one line per file, then a fixed summary line.

use std::io::{self, Write};
use std::path::PathBuf;

use crate::process::{FileReport, ProcessError};

/// Printed after every candidate has been attempted, whatever the outcomes.
pub const SUMMARY_LINE: &str = "Favicon references removed from all HTML files!";

/// Outcome of one candidate file.
#[derive(Debug)]
pub struct FileOutcome {
    pub path: PathBuf,
    pub result: Result<FileReport, ProcessError>,
}

impl FileOutcome {
    /// The console line for this file (no trailing newline).
    pub fn line(&self) -> String {
        match &self.result {
            Ok(report) => format!("Processed: {}", report.name),
            Err(e) => format!("Error processing {}: {}", self.path.display(), e),
        }
    }

    /// Write [`FileOutcome::line`] followed by a newline.
    pub fn write_line<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "{}", self.line())
    }
}

/// Write [`SUMMARY_LINE`] followed by a newline.
pub fn write_summary<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", SUMMARY_LINE)
}

/// All outcomes of a run, in enumeration order.
#[derive(Debug, Default)]
pub struct RunReport {
    outcomes: Vec<FileOutcome>,
}

impl RunReport {
    pub fn push(&mut self, outcome: FileOutcome) {
        self.outcomes.push(outcome);
    }

    pub fn outcomes(&self) -> &[FileOutcome] {
        &self.outcomes
    }

    pub fn processed_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.result.is_ok()).count()
    }

    pub fn failed_count(&self) -> usize {
        self.outcomes.len() - self.processed_count()
    }

    /// Total marker lines removed across successfully processed files.
    pub fn lines_removed(&self) -> usize {
        self.outcomes
            .iter()
            .filter_map(|o| o.result.as_ref().ok())
            .map(|r| r.lines_removed)
            .sum()
    }

    /// Write every per-file line, then the summary line.
    pub fn render<W: Write>(&self, out: &mut W) -> io::Result<()> {
        for outcome in &self.outcomes {
            outcome.write_line(out)?;
        }
        write_summary(out)
    }
}
