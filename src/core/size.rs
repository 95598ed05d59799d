//! Filepath: src/core/size.rs
//! Tailwind `h-N w-N` size tokens → `<Icon size=..>` values.
//!
//! Classification is total: any token the table does not know falls back
//! to `md`, so an odd size never blocks a migration.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

/// First height/width pair inside a class list.
static SIZE_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"h-[0-9.]+ w-[0-9.]+").expect("valid size token regex"));

/// Same pair plus trailing whitespace, for stripping from the class list.
static SIZE_TOKEN_WS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"h-[0-9.]+ w-[0-9.]+\s*").expect("valid size strip regex"));

/// Value of the `size` prop on the target `Icon` component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IconSize {
    Xs,
    Sm,
    #[default]
    Md,
    Lg,
    Xl,
    /// Explicit pixel size, rendered as a JSX expression
    Pixels(u32),
}

impl fmt::Display for IconSize {
    /// Render as a JSX attribute value, quotes/braces included.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IconSize::Xs => f.write_str("\"xs\""),
            IconSize::Sm => f.write_str("\"sm\""),
            IconSize::Md => f.write_str("\"md\""),
            IconSize::Lg => f.write_str("\"lg\""),
            IconSize::Xl => f.write_str("\"xl\""),
            IconSize::Pixels(px) => write!(f, "{{{px}}}"),
        }
    }
}

/// Map a normalized size token (e.g. `"h-4 w-4"`) to an icon size.
pub fn classify(token: &str) -> IconSize {
    match token {
        "h-3 w-3" => IconSize::Xs,
        "h-3.5 w-3.5" => IconSize::Pixels(14),
        "h-4 w-4" => IconSize::Sm,
        "h-5 w-5" => IconSize::Md,
        "h-6 w-6" => IconSize::Lg,
        "h-8 w-8" => IconSize::Xl,
        _ => IconSize::default(),
    }
}

/// Pull the size token out of a `className` value.
///
/// Returns the classified size and the remaining classes (trimmed). Every
/// size-shaped pair is removed, but only the first one decides the size.
/// Without a token the size is the default and the classes are kept.
pub fn split_size_token(classes: &str) -> (IconSize, String) {
    match SIZE_TOKEN.find(classes) {
        Some(token) => {
            let size = classify(token.as_str());
            let rest = SIZE_TOKEN_WS.replace_all(classes, "");
            (size, rest.trim().to_string())
        }
        None => (IconSize::default(), classes.trim().to_string()),
    }
}
