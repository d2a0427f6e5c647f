//! svi18n - speaker-name annotator for Stardew Valley i18n files
//!
//! svi18n is a CLI tool and library that resolves which character (or UI
//! context) each `{{i18n:KEY}}` placeholder in a Content Patcher pack
//! belongs to, then writes a copy of `i18n/default.json` where every
//! translatable line carries an inline `//<name>` comment. Translators
//! see at a glance who speaks each string.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (user-facing commands)
//! - `config`: Configuration file loading and parsing
//! - `scanner`: Recursive content file discovery
//! - `rules`: Extraction rules (inline idioms and Entries-block scanning)
//! - `registry`: Accumulating key-to-speaker mapping
//! - `resolver`: Per-run orchestration and progress reporting
//! - `annotate`: Annotated localization output
//! - `reporter`: Terminal rendering of worker events

pub mod annotate;
pub mod cli;
pub mod config;
pub mod registry;
pub mod reporter;
pub mod resolver;
pub mod rules;
pub mod scanner;
