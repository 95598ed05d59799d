//! Filepath: src/infra/walk.rs
//! Candidate discovery for migration runs.
//! - Respects .gitignore, .git/info/exclude, and global gitignore (toggleable)
//! - Extra ignore globs (early prune + late filter)
//! - Extension filter (e.g., "tsx")
//! - Optional hidden file policy and symlink following
//! - Deterministic ordering so runs and tests are stable
//!
//! Backed by ripgrep's `ignore` crate and `globset`.

use std::path::{Path, PathBuf};

use anyhow::Result;
use globset::{Glob, GlobSet, GlobSetBuilder};
use ignore::{DirEntry, WalkBuilder};
use tracing::debug;

/// Gitignore-aware walker with extra ignore globs and an extension filter.
/// Extra globs are applied in two places:
///   1) Early: prune directories during traversal (filter_entry).
///   2) Late: filter out files that still slipped through.
pub struct FileWalker
{
    /// Compiled set of additional ignore patterns
    ignore_patterns: GlobSet,

    /// Accepted extensions without the dot; empty accepts everything
    extensions: Vec<String>,

    /// Include hidden (dot) files; default true
    include_hidden: bool,

    /// Follow symbolic links; default false
    follow_symlinks: bool,

    /// Honor .gitignore and friends; default true
    respect_gitignore: bool,
}

impl FileWalker
{
    /// Build a walker with additional ignore patterns (e.g., "**/node_modules",
    /// "**/*.stories.tsx"). Patterns match on (relative) paths.
    pub fn new(additional_ignores: &[String]) -> Result<Self>
    {
        let mut builder = GlobSetBuilder::new();

        for pattern in additional_ignores
        {
            builder.add(Glob::new(pattern)?);
        }

        Ok(Self {
            ignore_patterns: builder.build()?,
            extensions: Vec::new(),
            include_hidden: true,
            follow_symlinks: false,
            respect_gitignore: true,
        })
    }

    /// Restrict results to files with one of these extensions.
    /// A leading dot is tolerated (`".tsx"` == `"tsx"`).
    pub fn with_extensions(
        mut self,
        extensions: &[String],
    ) -> Self
    {
        self.extensions = extensions
            .iter()
            .map(|e| {
                e.trim_start_matches('.')
                    .to_string()
            })
            .filter(|e| !e.is_empty())
            .collect();
        self
    }

    /// Include or exclude hidden files (dotfiles).
    pub fn with_include_hidden(
        mut self,
        include_hidden: bool,
    ) -> Self
    {
        self.include_hidden = include_hidden;
        self
    }

    /// Follow or skip symbolic links (default false).
    pub fn with_follow_symlinks(
        mut self,
        follow: bool,
    ) -> Self
    {
        self.follow_symlinks = follow;
        self
    }

    /// Honor or bypass ignore files (default honor).
    pub fn with_respect_gitignore(
        mut self,
        respect: bool,
    ) -> Self
    {
        self.respect_gitignore = respect;
        self
    }

    fn build_walk(
        &self,
        root: &Path,
    ) -> WalkBuilder
    {
        let mut b = WalkBuilder::new(root);

        // WalkBuilder::hidden(true) *skips* dotfiles
        b.hidden(!self.include_hidden);

        b.git_ignore(self.respect_gitignore);
        b.git_global(self.respect_gitignore);
        b.git_exclude(self.respect_gitignore);
        b.ignore(self.respect_gitignore);
        b.parents(self.respect_gitignore);

        b.follow_links(self.follow_symlinks);

        // Early directory pruning using extra ignores.
        let extra = self
            .ignore_patterns
            .clone();
        b.filter_entry(move |ent: &DirEntry| {
            let is_dir = ent
                .file_type()
                .map(|ft| ft.is_dir())
                .unwrap_or(false);

            !(is_dir && ent.depth() > 0 && extra.is_match(ent.path()))
        });

        b
    }

    fn has_accepted_extension(
        &self,
        path: &Path,
    ) -> bool
    {
        if self
            .extensions
            .is_empty()
        {
            return true;
        }

        path.extension()
            .and_then(|e| e.to_str())
            .is_some_and(|ext| {
                self.extensions
                    .iter()
                    .any(|want| want == ext)
            })
    }

    /// Traverse files under `root`, respecting ignore rules, extra globs and
    /// the extension filter. Returns a **sorted** list of file paths.
    pub fn walk_files<P: AsRef<Path>>(
        &self,
        root: P,
    ) -> Vec<PathBuf>
    {
        let root_path = root.as_ref();
        let walker = self
            .build_walk(root_path)
            .build();

        let mut out: Vec<PathBuf> = walker
            .filter_map(|res| match res
            {
                Ok(entry) => Some(entry),
                Err(err) =>
                {
                    debug!("skipping unreadable entry: {err}");
                    None
                }
            })
            .filter(|entry| {
                entry
                    .file_type()
                    .is_some_and(|ft| ft.is_file())
            })
            .map(|entry| entry.into_path())
            .filter(|abs| self.has_accepted_extension(abs))
            // Late file-level extra ignore filtering using RELATIVE path
            .filter(|abs| {
                let rel = abs
                    .strip_prefix(root_path)
                    .unwrap_or(abs);
                !self
                    .ignore_patterns
                    .is_match(rel)
            })
            .collect();

        out.sort();

        out
    }

    /// Traverse and then apply a caller-provided filter predicate.
    /// This runs after ignore and extension filtering.
    pub fn walk_with_filter<P, F>(
        &self,
        root: P,
        filter: F,
    ) -> Vec<PathBuf>
    where
        P: AsRef<Path>,
        F: Fn(&Path) -> bool,
    {
        self.walk_files(root)
            .into_iter()
            .filter(|p| filter(p))
            .collect()
    }
}
