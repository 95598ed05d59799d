//! Filepath: src/core/migrate.rs
//! Per-file migration and the directory driver.
//!
//! A run is strictly sequential: discover candidates, then migrate each file
//! in walker order. Only a missing input path aborts the run; every per-file
//! failure is captured in its [`MigrationOutcome`] and the run moves on.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use similar::TextDiff;
use tracing::{debug, instrument, warn};

use crate::cli::{AppContext, MigrateArgs};
use crate::core::imports::ImportRewriter;
use crate::core::report::{ConsoleReporter, Reporter};
use crate::core::usage::rewrite_usages;
use crate::infra::config::{Config, load_config};
use crate::infra::io::{file_contains, write_atomic};
use crate::infra::walk::FileWalker;

/// Migration errors
#[derive(Debug, thiserror::Error)]
pub enum MigrateError {
    #[error("Path does not exist: {}", .0.display())]
    PathNotFound(PathBuf),
    #[error("Failed to read {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to write {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: anyhow::Error,
    },
    #[error("Invalid match pattern: {0}")]
    Pattern(#[from] regex::Error),
}

/// How a single file ended up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutcomeStatus {
    /// No icon-library import; not attempted
    NoImport,
    /// Text changed and was written (or would be, in dry-run mode)
    Migrated,
    /// Import present but the rewrite produced identical text
    Unchanged,
    /// Read, transform, or write failed; message carries the error chain
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MigrationOutcome {
    pub path: PathBuf,
    /// Names listed in the icon-library import, as written
    pub icons: Vec<String>,
    /// Subset of `icons` with no `ICONS.*` mapping
    pub unmapped: Vec<String>,
    pub status: OutcomeStatus,
    /// Unified diff, only in dry-run mode
    pub preview: Option<String>,
}

impl MigrationOutcome {
    fn new(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
            icons: Vec::new(),
            unmapped: Vec::new(),
            status: OutcomeStatus::NoImport,
            preview: None,
        }
    }

    pub fn changed(&self) -> bool {
        self.status == OutcomeStatus::Migrated
    }

    pub fn error(&self) -> Option<&str> {
        match &self.status {
            OutcomeStatus::Failed(message) => Some(message),
            _ => None,
        }
    }
}

/// Run totals; `candidates` is the denominator of the migrated ratio.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub candidates: usize,
    pub migrated: usize,
    pub unchanged: usize,
    pub skipped: usize,
    pub failed: usize,
}

impl Summary {
    pub fn record(&mut self, outcome: &MigrationOutcome) {
        match outcome.status {
            OutcomeStatus::NoImport => self.skipped += 1,
            OutcomeStatus::Migrated => self.migrated += 1,
            OutcomeStatus::Unchanged => self.unchanged += 1,
            OutcomeStatus::Failed(_) => self.failed += 1,
        }
    }
}

/// Result of the pure text transform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextMigration {
    pub icons: Vec<String>,
    pub unmapped: Vec<String>,
    pub text: String,
}

/// Rewrites one file at a time for a given icon-library module.
pub struct Migrator {
    imports: ImportRewriter,
    dry_run: bool,
}

impl Migrator {
    pub fn new(source_module: &str) -> Result<Self, MigrateError> {
        Ok(Self {
            imports: ImportRewriter::new(source_module)?,
            dry_run: false,
        })
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Transform file text without touching disk.
    ///
    /// Returns `Ok(None)` when the text has no icon-library import. Usage
    /// passes run once per imported name, each on the previous output.
    pub fn migrate_text(&self, text: &str) -> Result<Option<TextMigration>, MigrateError> {
        let Some(import) = self.imports.extract(text) else {
            return Ok(None);
        };
        let icons: Vec<String> = import.names.iter().map(|n| n.to_string()).collect();

        let mut current = self.imports.rewrite(text).into_owned();
        let mut unmapped = Vec::new();

        for icon in &icons {
            match rewrite_usages(&current, icon)? {
                Some(next) => current = next,
                None => unmapped.push(icon.clone()),
            }
        }

        Ok(Some(TextMigration { icons, unmapped, text: current }))
    }

    /// Migrate one file end to end, reporting progress through `reporter`.
    #[instrument(skip(self, reporter), fields(dry_run = self.dry_run))]
    pub fn migrate_file(&self, path: &Path, reporter: &mut dyn Reporter) -> MigrationOutcome {
        let mut outcome = MigrationOutcome::new(path);

        let original = match std::fs::read_to_string(path) {
            Ok(text) => text,
            Err(source) => {
                let err = MigrateError::Read { path: path.to_path_buf(), source };
                outcome.status = OutcomeStatus::Failed(format!("{:#}", anyhow::Error::from(err)));
                reporter.file_finished(&outcome);
                return outcome;
            }
        };

        let migration = match self.migrate_text(&original) {
            Ok(Some(m)) => m,
            Ok(None) => {
                debug!("no icon-library import");
                reporter.file_finished(&outcome);
                return outcome;
            }
            Err(err) => {
                outcome.status = OutcomeStatus::Failed(format!("{:#}", anyhow::Error::from(err)));
                reporter.file_finished(&outcome);
                return outcome;
            }
        };

        outcome.icons = migration.icons;
        outcome.unmapped = migration.unmapped;
        reporter.file_started(path, &outcome.icons);
        for icon in &outcome.unmapped {
            warn!(icon = %icon, "no ICONS mapping; call sites left unchanged");
            reporter.unmapped_icon(path, icon);
        }

        if migration.text == original {
            outcome.status = OutcomeStatus::Unchanged;
        } else if self.dry_run {
            outcome.preview = Some(unified_diff(path, &original, &migration.text));
            outcome.status = OutcomeStatus::Migrated;
        } else {
            match write_atomic(path, migration.text.as_bytes()) {
                Ok(()) => outcome.status = OutcomeStatus::Migrated,
                Err(source) => {
                    let err = MigrateError::Write { path: path.to_path_buf(), source };
                    outcome.status =
                        OutcomeStatus::Failed(format!("{:#}", anyhow::Error::from(err)));
                }
            }
        }

        reporter.file_finished(&outcome);
        outcome
    }
}

fn unified_diff(path: &Path, old: &str, new: &str) -> String {
    let name = path.display().to_string();
    TextDiff::from_lines(old, new)
        .unified_diff()
        .context_radius(1)
        .header(&name, &name)
        .to_string()
}

/// Resolve the candidate list for `root`.
///
/// A file is its own sole candidate. A directory is walked for configured
/// extensions and pre-filtered by a raw substring search for the module
/// specifier, so non-matching files are never parsed.
pub fn discover_candidates(root: &Path, config: &Config) -> Result<Vec<PathBuf>> {
    if !root.exists() {
        return Err(MigrateError::PathNotFound(root.to_path_buf()).into());
    }

    if root.is_file() {
        return Ok(vec![root.to_path_buf()]);
    }

    let walker = FileWalker::new(&config.ignore_patterns)
        .context("Invalid ignore pattern")?
        .with_extensions(&config.extensions)
        .with_include_hidden(config.include_hidden)
        .with_follow_symlinks(config.follow_symlinks)
        .with_respect_gitignore(config.respect_gitignore);

    let needle = config.source_module.as_str();
    let candidates = walker.walk_with_filter(root, |path| match file_contains(path, needle) {
        Ok(hit) => hit,
        Err(err) => {
            warn!(path = %path.display(), "skipping unreadable file: {err:#}");
            false
        }
    });

    debug!(count = candidates.len(), root = %root.display(), "discovered candidates");
    Ok(candidates)
}

/// Migrate every candidate sequentially and return the totals.
pub fn migrate_all(
    candidates: &[PathBuf],
    migrator: &Migrator,
    reporter: &mut dyn Reporter,
) -> Summary {
    let mut summary = Summary { candidates: candidates.len(), ..Summary::default() };

    reporter.run_started(candidates.len());
    for path in candidates {
        let outcome = migrator.migrate_file(path, reporter);
        summary.record(&outcome);
    }
    reporter.run_finished(&summary);

    summary
}

/// CLI entry point.
pub fn run(args: MigrateArgs, ctx: &AppContext) -> Result<()> {
    let config = load_config()?.merge_args(&args);

    if args.print_config {
        print!("{}", config.to_toml()?);
        return Ok(());
    }

    let Some(raw) = args.path.as_ref() else {
        anyhow::bail!("Usage: icon-migrate <FILE_OR_DIRECTORY>");
    };
    let root = expand_path(raw);

    let candidates = discover_candidates(&root, &config)?;
    let migrator = Migrator::new(&config.source_module)?.with_dry_run(ctx.dry_run);
    let mut reporter = ConsoleReporter::stdout(ctx.quiet, !ctx.no_color);

    migrate_all(&candidates, &migrator, &mut reporter);
    Ok(())
}

/// Expand `~` and `$VAR` in a user-supplied path; unexpandable input is kept.
fn expand_path(raw: &Path) -> PathBuf {
    let text = raw.to_string_lossy();
    match shellexpand::full(&text) {
        Ok(expanded) => PathBuf::from(expanded.as_ref()),
        Err(_) => raw.to_path_buf(),
    }
}
