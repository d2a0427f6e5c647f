use std::path::{Path, PathBuf};

use colored::Colorize;
use glob::Pattern;
use walkdir::WalkDir;

/// Check if a pattern contains glob wildcards (* or ?).
/// Patterns without wildcards are treated as literal directory paths.
fn is_glob_pattern(pattern: &str) -> bool {
    pattern.contains('*') || pattern.contains('?')
}

/// Recursively collect the `.json` content files under `base_dir`.
///
/// The localization file itself is not excluded; if it sits under the
/// root it gets scanned like any other content file, which is harmless.
/// The result is sorted lexicographically by path so a run is
/// reproducible regardless of directory iteration order.
pub fn collect_content_files(
    base_dir: &Path,
    ignore_patterns: &[String],
    verbose: bool,
) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = Vec::new();

    // Separate ignore patterns into literal paths and glob patterns
    let mut literal_ignore_paths: Vec<PathBuf> = Vec::new();
    let mut glob_patterns: Vec<Pattern> = Vec::new();

    for p in ignore_patterns {
        if is_glob_pattern(p) {
            match Pattern::new(p) {
                Ok(pattern) => glob_patterns.push(pattern),
                Err(e) => {
                    if verbose {
                        eprintln!(
                            "{} Invalid ignore pattern '{}': {}",
                            "warning:".bold().yellow(),
                            p,
                            e
                        );
                    }
                }
            }
        } else {
            // Literal path mode: anchor under the base directory for prefix matching
            literal_ignore_paths.push(base_dir.join(p));
        }
    }

    for entry in WalkDir::new(base_dir) {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                if verbose {
                    eprintln!("{} Cannot access path: {}", "warning:".bold().yellow(), e);
                }
                continue;
            }
        };
        let path = entry.path();

        if literal_ignore_paths
            .iter()
            .any(|ignore_path| path.starts_with(ignore_path))
        {
            continue;
        }

        if glob_patterns
            .iter()
            .any(|p| p.matches(&path.to_string_lossy()))
        {
            continue;
        }

        if path.is_file() && is_content_file(path) {
            files.push(path.to_path_buf());
        }
    }

    files.sort();
    files
}

fn is_content_file(path: &Path) -> bool {
    matches!(path.extension().and_then(|e| e.to_str()), Some("json"))
}
