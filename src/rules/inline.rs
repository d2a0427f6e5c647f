//! Inline extraction rules.
//!
//! Event scripts embed dialogue commands as plain text inside JSON string
//! values, so the placeholder usually arrives wrapped in escaped quotes:
//!
//! ```text
//! speak Lewis \"{{i18n:Lewis.greeting}}\"
//! ```
//!
//! Matching is pattern search over the whole file text, not parsing:
//! keywords are case-insensitive, and stray quote or backslash characters
//! around the placeholder are tolerated without having to balance.

use regex::Regex;

use super::{Extract, TOKEN, Toggle};
use crate::registry::{KeyNameRegistry, MESSAGE_NAME};

/// How a match turns into a registry write.
#[derive(Debug, Clone, Copy)]
enum Association {
    /// First capture is the speaker, second is the key.
    SpeakerAndKey,
    /// Single key capture, associated with a fixed name.
    Fixed(&'static str),
}

/// A rule matching one dialogue-command idiom on a single statement.
#[derive(Debug)]
pub struct InlineRule {
    name: &'static str,
    toggle: Toggle,
    pattern: Regex,
    association: Association,
}

impl InlineRule {
    pub fn speak() -> Self {
        Self::command("speak")
    }

    pub fn dialogue() -> Self {
        Self::command("dialogue")
    }

    pub fn text_above_head() -> Self {
        Self::command("textAboveHead")
    }

    pub fn dialogue_warp_out() -> Self {
        Self::command("dialogueWarpOut")
    }

    /// Generic UI messages carry no speaker of their own; every match is
    /// associated with the `"message"` sentinel.
    pub fn message() -> Self {
        let pattern = Regex::new(&format!(
            r#"(?i)message\s+[\\"]*\s*\{{\{{i18n:({TOKEN})\}}\}}"#
        ))
        .unwrap();
        Self {
            name: "message",
            toggle: Toggle::Message,
            pattern,
            association: Association::Fixed(MESSAGE_NAME),
        }
    }

    /// A `<keyword> <speaker> "{{i18n:KEY}}"` command shape.
    fn command(keyword: &'static str) -> Self {
        let pattern = Regex::new(&format!(
            r#"(?i){keyword}\s+({TOKEN})\s+[\\"]*\s*\{{\{{i18n:({TOKEN})\}}\}}"#
        ))
        .unwrap();
        Self {
            name: keyword,
            toggle: Toggle::Events,
            pattern,
            association: Association::SpeakerAndKey,
        }
    }
}

impl Extract for InlineRule {
    fn name(&self) -> &'static str {
        self.name
    }

    fn toggle(&self) -> Toggle {
        self.toggle
    }

    fn extract(&self, text: &str, registry: &mut KeyNameRegistry) {
        for caps in self.pattern.captures_iter(text) {
            match self.association {
                Association::SpeakerAndKey => registry.set(&caps[2], &caps[1]),
                Association::Fixed(name) => registry.set(&caps[1], name),
            }
        }
    }
}
