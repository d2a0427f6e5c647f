//! Annotated localization output.
//!
//! Takes the original `i18n/default.json` text and a finished registry
//! and appends ` //<name>` to every line containing a known placeholder
//! key. The original file is never modified; the annotated copy is
//! written alongside it.

use std::path::{Path, PathBuf};

use crate::registry::KeyNameRegistry;

/// The localization file expected under the selected folder.
pub const LOCALE_FILE: &str = "i18n/default.json";
/// The annotated copy written next to it.
pub const ANNOTATED_FILE: &str = "i18n/default_with_comments.json";

pub fn locale_path(root: &Path) -> PathBuf {
    root.join("i18n").join("default.json")
}

pub fn annotated_path(root: &Path) -> PathBuf {
    root.join("i18n").join("default_with_comments.json")
}

/// Produce the annotated copy of the localization text.
///
/// Line count and order are preserved exactly; only trailing content ever
/// changes. Per line, in order:
///
/// 1. With `skip_commented` set, a line already containing `//` passes
///    through untouched.
/// 2. Otherwise the first registry entry (first-association order) whose
///    key occurs as a literal substring of the line contributes an
///    appended ` //<name>`; without a match the line passes through.
///
/// Line endings are normalized to `\n`.
pub fn annotate(text: &str, registry: &KeyNameRegistry, skip_commented: bool) -> String {
    let mut out = String::with_capacity(text.len());

    for line in text.lines() {
        out.push_str(line);
        if !(skip_commented && line.contains("//")) {
            if let Some((_, name)) = registry.iter().find(|(key, _)| line.contains(key)) {
                out.push_str(" //");
                out.push_str(name);
            }
        }
        out.push('\n');
    }

    out
}
