//! Run orchestration: file loop, rule application, progress.
//!
//! One sequential pass over the discovered files, applying every enabled
//! extraction rule to each file's text and accumulating associations in
//! a single registry. Progress and log events go through a [`ProgressSink`]
//! so the scanning work stays decoupled from whatever front end renders
//! it; the CLI runs this on a worker thread behind an mpsc channel.

use std::{fs, path::PathBuf};

use crate::{config::Config, registry::KeyNameRegistry, rules};

/// Receiver for the worker's progress and log notifications.
pub trait ProgressSink {
    /// Files completed so far, as an integer percentage (floor) of the
    /// total. Never called when the file list is empty.
    fn progress(&mut self, percent: u8);

    /// Free-text log line: one per file processed, one per skipped
    /// unreadable file, and a final dump of the resolved mapping.
    fn log(&mut self, message: &str);
}

/// Resolve the speaker name for every placeholder key found in `files`.
///
/// Files are processed in the given order; the caller provides them
/// lexicographically sorted so runs are reproducible. A file that cannot
/// be read is logged and skipped, the run continues. The configuration is
/// an immutable snapshot for the whole run.
pub fn resolve(files: &[PathBuf], config: &Config, sink: &mut dyn ProgressSink) -> KeyNameRegistry {
    let mut registry = KeyNameRegistry::new();
    let total = files.len();

    for (index, path) in files.iter().enumerate() {
        sink.log(&format!("Processing file: {}", path.display()));

        match fs::read_to_string(path) {
            Ok(text) => rules::apply_enabled(&text, config, &mut registry),
            Err(err) => {
                sink.log(&format!("Skipping {}: {}", path.display(), err));
            }
        }

        sink.progress(((index + 1) * 100 / total) as u8);
    }

    sink.log(&format!(
        "Resolved {} key(s): {}",
        registry.len(),
        registry.dump()
    ));
    registry
}
