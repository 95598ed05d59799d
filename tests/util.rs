//! Shared test utilities for integration tests
//!
//! Builds small Next.js-style component trees with and without
//! lucide-react imports.

#![allow(dead_code)]

use assert_fs::prelude::*;

pub const CLOSE_BUTTON: &str = r#"import { X } from 'lucide-react';

export function CloseButton() {
  return <X />;
}
"#;

pub const SPINNER: &str = r#"import { Loader2, Rocket } from "lucide-react";

export function Spinner() {
  return <Loader2 className="h-4 w-4 animate-spin" />;
}

export const Launch = () => <Rocket />;
"#;

pub const PLAIN: &str = r#"export function Card({ children }: { children: React.ReactNode }) {
  return <div className="rounded border">{children}</div>;
}
"#;

/// Create a project with `matching` lucide-react components and
/// `plain` components that never mention the icon library.
pub fn make_project(matching: usize, plain: usize) -> assert_fs::TempDir
{
    let tmp = assert_fs::TempDir::new().expect("tempdir");

    for i in 0..matching
    {
        let body = if i % 2 == 0 { CLOSE_BUTTON } else { SPINNER };
        tmp.child(format!("components/icons/icon_{i}.tsx"))
            .write_str(body)
            .expect("write matching");
    }

    for i in 0..plain
    {
        tmp.child(format!("components/plain_{i}.tsx"))
            .write_str(PLAIN)
            .expect("write plain");
    }

    // Same specifier, wrong extension: never a candidate
    tmp.child("lib/icons.ts")
        .write_str(CLOSE_BUTTON)
        .expect("write ts");

    tmp
}
