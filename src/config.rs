use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result};
use glob::Pattern;
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE_NAME: &str = ".svi18nrc.json";

/// Run configuration: which extraction rules are enabled, whether
/// already-commented lines are left alone, and which paths to skip
/// during discovery.
///
/// Loaded from `.svi18nrc.json` when present; every field has a default
/// so a partial file is fine. CLI flags can switch rules on top of the
/// file's baseline but never off.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Associate `message` idiom matches with the generic sentinel name.
    #[serde(default)]
    pub include_message: bool,
    /// Scan `Characters/Dialogue/` Target blocks.
    #[serde(default)]
    pub include_characters_dialogue: bool,
    /// Scan `Strings/schedules/` Target blocks.
    #[serde(default)]
    pub include_strings_schedules: bool,
    /// Scan event idioms (speak, dialogue, textAboveHead, dialogueWarpOut).
    #[serde(default)]
    pub include_events: bool,
    /// Leave lines that already carry a `//` comment untouched.
    #[serde(default)]
    pub skip_commented_lines: bool,
    /// Paths to exclude from content discovery. Entries with `*` or `?`
    /// are glob patterns; anything else is a literal directory prefix.
    #[serde(default)]
    pub ignores: Vec<String>,
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error if any glob patterns in `ignores` are invalid.
    /// Entries without wildcards are literal paths and always valid.
    pub fn validate(&self) -> Result<()> {
        for pattern in &self.ignores {
            if pattern.contains('*') || pattern.contains('?') {
                Pattern::new(pattern).with_context(|| {
                    format!("Invalid glob pattern in 'ignores': \"{}\"", pattern)
                })?;
            }
        }

        Ok(())
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            Ok(ConfigLoadResult {
                config,
                from_file: true,
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            from_file: false,
        }),
    }
}
