//! **icon-migrate** - Codemod that moves lucide-react icon usage onto the centralized `Icon` component
//!
//! Sequential, regex-driven rewrite of the icon import and of each recognized call site,
//! with Tailwind size classes translated into the `size` prop.

/// Command-line interface with clap integration
pub mod cli;

/// Rewrite pipeline - lookup tables, rewriters, and the per-file driver
pub mod core {
    /// lucide-react name → `ICONS.*` constant table
    pub mod icons;

    /// Tailwind `h-N w-N` size token classification
    pub mod size;
    pub use size::IconSize;

    /// Icon-library import detection and replacement
    pub mod imports;
    pub use imports::{IconImport, ImportRewriter};

    /// Call-site rewriting per imported icon
    pub mod usage;
    pub use usage::rewrite_usages;

    /// Per-file orchestration and the directory driver
    pub mod migrate;
    pub use migrate::{MigrateError, MigrationOutcome, Migrator, OutcomeStatus, Summary, run};

    /// Injectable progress/warning reporting
    pub mod report;
    pub use report::{ConsoleReporter, Reporter};
}

/// Infrastructure - Configuration, I/O, and directory walking
pub mod infra {
    /// Configuration loading with TOML/YAML/JSON files and env overrides
    pub mod config;
    pub use config::{Config, load_config};

    /// Pre-filter reads (memory-mapped for large files) and atomic writes
    pub mod io;
    pub use io::{file_contains, write_atomic};

    /// Gitignore-aware directory walking with extension filtering
    pub mod walk;
    pub use walk::FileWalker;
}

// Strategic re-exports for clean CLI interface
pub use crate::cli::{AppContext, Cli, MigrateArgs};
pub use crate::core::{MigrationOutcome, Migrator, Reporter, Summary};
pub use crate::infra::{Config, FileWalker, load_config};
