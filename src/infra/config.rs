use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::cli::MigrateArgs;

/// Config file names searched in the working directory, first hit wins.
const CONFIG_FILES: [&str; 4] = [
    "icon-migrate.toml",
    ".icon-migrate.toml",
    "icon-migrate.yaml",
    "icon-migrate.json",
];

/// Environment prefix, e.g. `ICON_MIGRATE__SOURCE_MODULE=lucide-solid`.
const ENV_PREFIX: &str = "ICON_MIGRATE";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config
{
    /// Ignore globs applied during directory walks; empty walks everything
    pub ignore_patterns: Vec<String>,

    /// File extensions scanned in directory mode
    pub extensions: Vec<String>,

    /// Module specifier of the icon library being migrated away from
    pub source_module: String,

    /// Walk dotfiles and dot-directories
    pub include_hidden: bool,

    /// Follow symbolic links while walking
    pub follow_symlinks: bool,

    /// Honor .gitignore / .ignore files while walking
    pub respect_gitignore: bool,
}

impl Default for Config
{
    fn default() -> Self
    {
        Self {
            ignore_patterns: Vec::new(),
            extensions: vec!["tsx".to_string()],
            source_module: "lucide-react".to_string(),
            include_hidden: true,
            follow_symlinks: false,
            respect_gitignore: false,
        }
    }
}

impl Config
{
    /// Fold command-line overrides into the loaded config.
    /// List flags extend, scalar flags replace.
    pub fn merge_args(
        mut self,
        args: &MigrateArgs,
    ) -> Self
    {
        self.ignore_patterns
            .extend(args.ignore.iter().cloned());

        for ext in &args.ext
        {
            if !self.extensions.contains(ext)
            {
                self.extensions.push(ext.clone());
            }
        }

        if let Some(module) = &args.source_module
        {
            self.source_module = module.clone();
        }

        if args.respect_gitignore
        {
            self.respect_gitignore = true;
        }

        self
    }

    pub fn to_toml(&self) -> Result<String>
    {
        toml::to_string_pretty(self).context("Failed to serialize config")
    }
}

/// Load config from the working directory plus `ICON_MIGRATE__*` env vars.
pub fn load_config() -> Result<Config>
{
    load_config_from(Path::new("."))
}

pub fn load_config_from(dir: &Path) -> Result<Config>
{
    let mut builder = config::Config::builder();

    for name in &CONFIG_FILES
    {
        let path = dir.join(name);
        if path.exists()
        {
            builder = builder.add_source(config::File::from(path));
            break;
        }
    }

    builder = builder.add_source(
        config::Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("__")
            .list_separator(",")
            .with_list_parse_key("ignore_patterns")
            .with_list_parse_key("extensions")
            .try_parsing(true),
    );

    let cfg = builder
        .build()
        .context("Failed to load configuration")?;
    let parsed: Config = cfg
        .try_deserialize()
        .context("Failed to parse configuration")?;

    Ok(parsed)
}

#[cfg(test)]
mod tests
{
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn defaults_target_lucide_tsx()
    {
        let cfg = Config::default();
        assert_eq!(cfg.source_module, "lucide-react");
        assert_eq!(cfg.extensions, vec!["tsx".to_string()]);
        assert!(cfg.ignore_patterns.is_empty());
        assert!(!cfg.respect_gitignore);
    }

    #[test]
    fn partial_file_keeps_other_defaults() -> Result<()>
    {
        let tmp = TempDir::new()?;
        fs::write(
            tmp.path()
                .join("icon-migrate.toml"),
            "extensions = [\"tsx\", \"jsx\"]\n",
        )?;

        let cfg = load_config_from(tmp.path())?;
        assert_eq!(cfg.extensions, vec!["tsx".to_string(), "jsx".to_string()]);
        assert_eq!(cfg.source_module, "lucide-react");
        Ok(())
    }

    #[test]
    fn empty_dir_yields_defaults() -> Result<()>
    {
        let tmp = TempDir::new()?;
        let cfg = load_config_from(tmp.path())?;
        assert_eq!(cfg.ignore_patterns, Config::default().ignore_patterns);
        Ok(())
    }

    #[test]
    fn toml_round_trip_is_loadable() -> Result<()>
    {
        let tmp = TempDir::new()?;
        let mut cfg = Config::default();
        cfg.source_module = "lucide-react/dist/esm".to_string();
        fs::write(
            tmp.path()
                .join(".icon-migrate.toml"),
            cfg.to_toml()?,
        )?;

        assert_eq!(load_config_from(tmp.path())?, cfg);
        Ok(())
    }

    #[test]
    fn cli_args_extend_and_override()
    {
        let args = MigrateArgs {
            path: None,
            ext: vec!["jsx".to_string(), "tsx".to_string()],
            ignore: vec!["**/legacy".to_string()],
            source_module: Some("lucide-solid".to_string()),
            respect_gitignore: true,
            print_config: false,
        };

        let cfg = Config::default().merge_args(&args);
        assert_eq!(cfg.extensions, vec!["tsx".to_string(), "jsx".to_string()]);
        assert!(
            cfg.ignore_patterns
                .contains(&"**/legacy".to_string())
        );
        assert_eq!(cfg.source_module, "lucide-solid");
        assert!(cfg.respect_gitignore);
    }
}
