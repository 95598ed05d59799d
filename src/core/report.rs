//! Filepath: src/core/report.rs
//! Progress and warning sink for a migration run.
//!
//! The driver and [`Migrator`](crate::core::migrate::Migrator) only talk to
//! the [`Reporter`] trait; the console rendering lives here so the rewrite
//! logic can be exercised without capturing stdout.

use std::io::{self, Write};
use std::path::Path;

use itertools::Itertools;
use owo_colors::{OwoColorize, Style};

use crate::core::migrate::{MigrationOutcome, OutcomeStatus, Summary};

/// Receives run events in order:
/// `run_started`, then per file `file_started`, `unmapped_icon`*,
/// `file_finished`, and finally `run_finished`.
pub trait Reporter {
    fn run_started(&mut self, candidates: usize);

    /// A file with an icon-library import is about to be rewritten.
    fn file_started(&mut self, path: &Path, icons: &[String]);

    /// An imported name has no `ICONS.*` mapping; its call sites stay as is.
    fn unmapped_icon(&mut self, path: &Path, icon: &str);

    fn file_finished(&mut self, outcome: &MigrationOutcome);

    fn run_finished(&mut self, summary: &Summary);
}

/// Human-readable console output.
pub struct ConsoleReporter<W: Write> {
    out: W,
    quiet: bool,
    color: bool,
}

impl ConsoleReporter<io::Stdout> {
    pub fn stdout(quiet: bool, color: bool) -> Self {
        Self::new(io::stdout(), quiet, color)
    }
}

impl<W: Write> ConsoleReporter<W> {
    pub fn new(out: W, quiet: bool, color: bool) -> Self {
        Self { out, quiet, color }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn paint(&self, text: &str, style: Style) -> String {
        if self.color {
            text.style(style).to_string()
        } else {
            text.to_string()
        }
    }

    // Console output is best-effort; a closed pipe must not fail the run.
    fn line(&mut self, text: &str) {
        let _ = writeln!(self.out, "{text}");
    }
}

impl<W: Write> Reporter for ConsoleReporter<W> {
    fn run_started(&mut self, candidates: usize) {
        if self.quiet {
            return;
        }
        let msg = format!("Starting icon migration for {candidates} files...");
        let msg = self.paint(&msg, Style::new().bold());
        self.line(&msg);
    }

    fn file_started(&mut self, path: &Path, icons: &[String]) {
        if self.quiet {
            return;
        }
        let header = self.paint(&format!("Migrating: {}", path.display()), Style::new().cyan());
        self.line("");
        self.line(&header);
        self.line(&format!("   Icons: {}", icons.iter().join(", ")));
    }

    fn unmapped_icon(&mut self, _path: &Path, icon: &str) {
        if self.quiet {
            return;
        }
        let msg = format!("   Warning: no mapping for icon '{icon}'");
        let msg = self.paint(&msg, Style::new().yellow());
        self.line(&msg);
    }

    fn file_finished(&mut self, outcome: &MigrationOutcome) {
        match &outcome.status {
            OutcomeStatus::NoImport => {}
            OutcomeStatus::Migrated if self.quiet => {}
            OutcomeStatus::Migrated => match &outcome.preview {
                Some(diff) => {
                    let msg = self.paint("   Would migrate (dry run)", Style::new().green());
                    self.line(&msg);
                    for diff_line in diff.lines() {
                        let styled = match diff_line.chars().next() {
                            Some('+') if !diff_line.starts_with("+++") => {
                                self.paint(diff_line, Style::new().green())
                            }
                            Some('-') if !diff_line.starts_with("---") => {
                                self.paint(diff_line, Style::new().red())
                            }
                            _ => diff_line.to_string(),
                        };
                        self.line(&format!("   {styled}"));
                    }
                }
                None => {
                    let msg = self.paint("   Migrated successfully", Style::new().green());
                    self.line(&msg);
                }
            },
            OutcomeStatus::Unchanged if self.quiet => {}
            OutcomeStatus::Unchanged => {
                let msg = self.paint("   No changes made", Style::new().yellow());
                self.line(&msg);
            }
            OutcomeStatus::Failed(message) => {
                // Errors are shown even in quiet mode
                let msg = if self.quiet {
                    format!("Error: {}: {message}", outcome.path.display())
                } else {
                    format!("   Error: {message}")
                };
                let msg = self.paint(&msg, Style::new().red());
                self.line(&msg);
            }
        }
    }

    fn run_finished(&mut self, summary: &Summary) {
        let done = format!("Migration complete! {} files scanned", summary.candidates);
        let done = self.paint(&done, Style::new().green().bold());
        if !self.quiet {
            self.line("");
        }
        self.line(&done);
        self.line(&format!(
            "   Migrated: {}/{} files",
            summary.migrated, summary.candidates
        ));
    }
}
