//! Command dispatch for the svi18n CLI.

use std::{fs, path::Path, sync::mpsc, thread};

use anyhow::{Context, Result};

use super::{
    args::{AnnotateCommand, Arguments, Command},
    exit_status::ExitStatus,
};
use crate::{
    annotate,
    config::{self, CONFIG_FILE_NAME, Config},
    reporter::{self, ChannelSink},
    resolver, scanner,
};

pub fn run(Arguments { command }: Arguments) -> Result<ExitStatus> {
    match command {
        Some(Command::Annotate(cmd)) => annotate_pack(cmd),
        Some(Command::Init) => {
            init()?;
            Ok(ExitStatus::Success)
        }
        None => {
            anyhow::bail!("No command provided. Use --help to see available commands.")
        }
    }
}

/// The annotate run: discover content files, resolve speaker names on a
/// worker thread, then write the annotated localization copy.
fn annotate_pack(cmd: AnnotateCommand) -> Result<ExitStatus> {
    let verbose = cmd.verbose;
    let config = effective_config(&cmd)?;
    let root = cmd.path;

    // The localization file is required up front; without it there is
    // nothing to annotate and the worker never starts.
    let locale_path = annotate::locale_path(&root);
    if !locale_path.exists() {
        anyhow::bail!("{} not found in {}", annotate::LOCALE_FILE, root.display());
    }
    let locale_text = fs::read_to_string(&locale_path)
        .with_context(|| format!("Failed to read {}", locale_path.display()))?;

    let files = scanner::collect_content_files(&root, &config.ignores, verbose);
    let total = files.len();

    // Scanning runs as one sequential unit on a worker thread; the main
    // thread only renders the progress and log events it sends back.
    let (tx, rx) = mpsc::channel();
    let worker_config = config.clone();
    let worker = thread::spawn(move || {
        let mut sink = ChannelSink::new(tx);
        resolver::resolve(&files, &worker_config, &mut sink)
    });
    reporter::render_events(&rx, verbose);
    let registry = worker
        .join()
        .map_err(|_| anyhow::anyhow!("scan worker panicked"))?;

    let annotated = annotate::annotate(&locale_text, &registry, config.skip_commented_lines);
    let output_path = annotate::annotated_path(&root);
    fs::write(&output_path, annotated)
        .with_context(|| format!("Failed to write {}", output_path.display()))?;

    reporter::print_success(total, registry.len(), annotate::ANNOTATED_FILE);
    Ok(ExitStatus::Success)
}

/// Start from the config file's baseline; CLI flags can only enable.
fn effective_config(cmd: &AnnotateCommand) -> Result<Config> {
    let mut config = config::load_config(&cmd.path)?.config;
    config.include_events |= cmd.events;
    config.include_message |= cmd.message;
    config.include_characters_dialogue |= cmd.characters_dialogue;
    config.include_strings_schedules |= cmd.strings_schedules;
    config.skip_commented_lines |= cmd.skip_commented;
    Ok(config)
}

fn init() -> Result<()> {
    let config_path = Path::new(CONFIG_FILE_NAME);
    if config_path.exists() {
        anyhow::bail!("{} already exists", CONFIG_FILE_NAME);
    }

    fs::write(config_path, config::default_config_json()?)?;
    Ok(())
}
