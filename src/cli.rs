use clap::{Args, Parser};
use std::path::PathBuf;

/// Shared application context for global flags
#[derive(Clone, Debug, Default)]
pub struct AppContext {
    pub quiet: bool,    // --quiet
    pub no_color: bool, // --no-color
    pub dry_run: bool,  // --dry-run
}

#[derive(Parser, Debug)]
#[command(name = "icon-migrate")]
#[command(
    about = "Migrate lucide-react icon imports to the centralized Icon component"
)]
#[command(version, long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub args: MigrateArgs,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Only print errors and the final summary
    #[arg(long)]
    pub quiet: bool,

    /// Show the diff for each file without writing anything
    #[arg(long)]
    pub dry_run: bool,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub fn context(&self) -> AppContext {
        AppContext {
            quiet: self.quiet,
            no_color: self.no_color,
            dry_run: self.dry_run,
        }
    }
}

#[derive(Args, Debug, Clone, Default)]
pub struct MigrateArgs {
    /// File or directory to migrate
    #[arg(value_name = "FILE_OR_DIRECTORY")]
    pub path: Option<PathBuf>,

    /// Additional file extensions to scan in directory mode (default: tsx)
    #[arg(long)]
    pub ext: Vec<String>,

    /// Additional glob patterns to ignore
    #[arg(short, long)]
    pub ignore: Vec<String>,

    /// Icon library module specifier to migrate away from
    #[arg(long, value_name = "MODULE")]
    pub source_module: Option<String>,

    /// Skip files excluded by .gitignore / .ignore files
    #[arg(long)]
    pub respect_gitignore: bool,

    /// Print the effective configuration as TOML and exit
    #[arg(long)]
    pub print_config: bool,
}
