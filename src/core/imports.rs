//! Filepath: src/core/imports.rs
//! Detection and replacement of the icon-library import statement.
//!
//! Only the first `import { .. } from '<module>'` is considered; a file is
//! expected to carry at most one.

use std::borrow::Cow;

use regex::Regex;

use crate::core::migrate::MigrateError;

/// Statements that replace the icon-library import.
pub const REPLACEMENT_IMPORTS: &str =
    "import { Icon } from '@/components/ui/icons';\nimport { ICONS } from '@/lib/config/icons';";

/// A matched icon-library import.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconImport<'a> {
    /// Imported names in source order, trimmed
    pub names: Vec<&'a str>,

    /// Exact statement text as matched (including an optional `;`)
    pub statement: &'a str,
}

/// Finds and swaps the named-import statement for one module specifier.
#[derive(Debug, Clone)]
pub struct ImportRewriter {
    pattern: Regex,
}

impl ImportRewriter {
    pub fn new(module: &str) -> Result<Self, MigrateError> {
        let source = format!(
            r#"import\s+\{{([^}}]+)\}}\s+from\s+['"]{}['"];?"#,
            regex::escape(module)
        );
        let pattern = Regex::new(&source)?;
        Ok(Self { pattern })
    }

    /// Locate the first import from the module and list its names.
    ///
    /// Empty segments (a trailing comma in a multi-line list) are dropped.
    /// Returns `None` when there is no such import or it names nothing.
    pub fn extract<'a>(&self, text: &'a str) -> Option<IconImport<'a>> {
        let caps = self.pattern.captures(text)?;
        let statement = caps.get(0)?.as_str();
        let names: Vec<&str> = caps
            .get(1)?
            .as_str()
            .split(',')
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .collect();

        if names.is_empty() {
            return None;
        }

        Some(IconImport { names, statement })
    }

    /// Replace the import statement with [`REPLACEMENT_IMPORTS`].
    ///
    /// Every literal copy of the matched statement is replaced.
    pub fn rewrite<'a>(&self, text: &'a str) -> Cow<'a, str> {
        match self.extract(text) {
            Some(import) => Cow::Owned(text.replace(import.statement, REPLACEMENT_IMPORTS)),
            None => Cow::Borrowed(text),
        }
    }
}
