//! Terminal rendering of worker events.
//!
//! This module is separate from the core library logic so svi18n can be
//! used as a library without printing side effects. The worker thread
//! pushes [`WorkerEvent`]s through an mpsc channel; the front end drains
//! the channel and decides how to render them.

use std::sync::mpsc::{Receiver, Sender};

use colored::Colorize;

use crate::resolver::ProgressSink;

/// Success mark for consistent output formatting
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// One notification from the background scanning unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkerEvent {
    /// Integer percentage of files completed, 0-100.
    Progress(u8),
    /// Free-text log line.
    Log(String),
}

/// [`ProgressSink`] that forwards events over a channel to the front end.
///
/// Send failures are ignored: a disconnected receiver just means nobody
/// is rendering anymore, which must not abort the scan.
pub struct ChannelSink {
    tx: Sender<WorkerEvent>,
}

impl ChannelSink {
    pub fn new(tx: Sender<WorkerEvent>) -> Self {
        Self { tx }
    }
}

impl ProgressSink for ChannelSink {
    fn progress(&mut self, percent: u8) {
        let _ = self.tx.send(WorkerEvent::Progress(percent));
    }

    fn log(&mut self, message: &str) {
        let _ = self.tx.send(WorkerEvent::Log(message.to_string()));
    }
}

/// Drain the event channel until the worker hangs up.
///
/// Progress is rendered as an in-place percentage on stderr; log lines
/// are shown only when verbose (they name every processed file, which is
/// noise for large packs). The final newline closes the progress line.
pub fn render_events(rx: &Receiver<WorkerEvent>, verbose: bool) {
    let mut rendered_progress = false;

    for event in rx.iter() {
        match event {
            WorkerEvent::Progress(percent) => {
                if !verbose {
                    eprint!("\r{} {}%", "scanning".dimmed(), percent);
                    rendered_progress = true;
                }
            }
            WorkerEvent::Log(message) => {
                if verbose {
                    eprintln!("{}", message.dimmed());
                }
            }
        }
    }

    if rendered_progress {
        eprintln!();
    }
}

/// Print the end-of-run summary line.
pub fn print_success(files_scanned: usize, keys_resolved: usize, output: &str) {
    println!(
        "{} {}",
        SUCCESS_MARK.green(),
        format!(
            "Scanned {} content {}, resolved {} {} -> {}",
            files_scanned,
            if files_scanned == 1 { "file" } else { "files" },
            keys_resolved,
            if keys_resolved == 1 { "key" } else { "keys" },
            output
        )
        .green()
    );
}
