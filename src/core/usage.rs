//! Filepath: src/core/usage.rs
//! Call-site rewriting for a single imported icon.
//!
//! Two shapes are recognized, applied as two sequential passes:
//!   1) `<Name className="..." />` (or `>`), size pulled from the classes
//!   2) `<Name />`, always the default size
//!
//! Pass 1 must run first; the bare pattern would otherwise be tried against
//! attributed tags. Any other shape (spread props, extra attributes,
//! expression classNames) is left as written.

use regex::{Captures, NoExpand, Regex};

use crate::core::icons;
use crate::core::migrate::MigrateError;
use crate::core::size::{IconSize, split_size_token};

/// Rewrite every recognized call site of `name` in `text`.
///
/// Returns `Ok(None)` when `name` has no `ICONS.*` mapping; the caller
/// reports it and keeps the text as is.
pub fn rewrite_usages(
    text: &str,
    name: &str,
) -> Result<Option<String>, MigrateError> {
    let Some(constant) = icons::lookup(name) else {
        return Ok(None);
    };
    let escaped = regex::escape(name);

    let attributed = Regex::new(&format!(r#"<{escaped}\s+className="([^"]*)"(\s*/?>)"#))?;
    let bare = Regex::new(&format!(r"<{escaped}\s*/>"))?;

    let pass1 = attributed.replace_all(text, |caps: &Captures<'_>| {
        let (size, rest) = split_size_token(&caps[1]);
        let closing = &caps[2];
        render_icon(constant, size, &rest, closing)
    });

    let bare_icon = format!("<Icon name={{{constant}}} size={} />", IconSize::Md);
    let pass2 = bare.replace_all(&pass1, NoExpand(&bare_icon));

    Ok(Some(pass2.into_owned()))
}

fn render_icon(
    constant: &str,
    size: IconSize,
    classes: &str,
    closing: &str,
) -> String {
    if classes.is_empty() {
        format!("<Icon name={{{constant}}} size={size}{closing}")
    } else {
        format!("<Icon name={{{constant}}} size={size} className=\"{classes}\"{closing}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rewrite(text: &str, name: &str) -> String {
        rewrite_usages(text, name).unwrap().unwrap()
    }

    #[test]
    fn bare_usage_gets_default_size() {
        let out = rewrite("<div><X /></div>", "X");
        assert_eq!(out, r#"<div><Icon name={ICONS.CLOSE} size="md" /></div>"#);

        let tight = rewrite("<X/>", "X");
        assert_eq!(tight, r#"<Icon name={ICONS.CLOSE} size="md" />"#);
    }

    #[test]
    fn sized_usage_with_extra_classes() {
        let out = rewrite(r#"<Loader2 className="h-4 w-4 animate-spin" />"#, "Loader2");
        assert_eq!(
            out,
            r#"<Icon name={ICONS.LOADING} size="sm" className="animate-spin" />"#
        );
    }

    #[test]
    fn size_only_class_drops_attribute() {
        let out = rewrite(r#"<HelpCircle className="h-5 w-5"/>"#, "HelpCircle");
        assert_eq!(out, r#"<Icon name={ICONS.HELP} size="md"/>"#);
    }

    #[test]
    fn pixel_size_and_open_tag_are_preserved() {
        let out = rewrite(r#"<Check className="h-3.5 w-3.5">"#, "Check");
        assert_eq!(out, r#"<Icon name={ICONS.CHECK} size={14}>"#);
    }

    #[test]
    fn classes_without_size_keep_default() {
        let out = rewrite(r#"<Plus className="mr-2" />"#, "Plus");
        assert_eq!(out, r#"<Icon name={ICONS.PLUS} size="md" className="mr-2" />"#);
    }

    #[test]
    fn prefix_names_do_not_collide() {
        let text = r#"<Check /> <CheckCircle className="h-6 w-6" />"#;
        let out = rewrite(text, "Check");
        assert_eq!(
            out,
            r#"<Icon name={ICONS.CHECK} size="md" /> <CheckCircle className="h-6 w-6" />"#
        );
    }

    #[test]
    fn unsupported_shapes_are_left_alone() {
        let text = "<X {...props} />\n<X className=\"h-4 w-4\" aria-hidden />\n<X className={cn('a')} />";
        let out = rewrite(text, "X");
        assert_eq!(out, text);
    }

    #[test]
    fn unmapped_name_returns_none() {
        assert!(rewrite_usages("<Rocket />", "Rocket").unwrap().is_none());
    }
}
