//! CLI argument definitions using clap.
//!
//! This module defines the command-line interface structure for svi18n.
//! It uses clap's derive API for declarative argument parsing.
//!
//! ## Commands
//!
//! - `annotate`: resolve speaker names and write the annotated i18n copy
//! - `init`: initialize svi18n configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }
}

#[derive(Debug, Args)]
pub struct AnnotateCommand {
    /// Root folder of the content pack (must contain i18n/default.json)
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Scan event idioms (speak, dialogue, textAboveHead, dialogueWarpOut)
    #[arg(long)]
    pub events: bool,

    /// Associate generic `message` matches with the "message" name
    #[arg(long)]
    pub message: bool,

    /// Scan Characters/Dialogue/ Target blocks
    #[arg(long)]
    pub characters_dialogue: bool,

    /// Scan Strings/schedules/ Target blocks
    #[arg(long)]
    pub strings_schedules: bool,

    /// Don't add comments to lines with existing comments
    #[arg(long)]
    pub skip_commented: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Annotate i18n/default.json with speaker names resolved from content files
    Annotate(AnnotateCommand),
    /// Initialize a new .svi18nrc.json configuration file
    Init,
}
