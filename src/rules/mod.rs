//! Extraction rules for resolving speaker names.
//!
//! A rule recognizes one textual idiom in Content Patcher JSON and writes
//! `placeholder key -> speaker name` associations into the shared
//! registry. There are two shapes:
//!
//! - `inline`: a single event statement carries both the speaker and the
//!   placeholder (speak, dialogue, textAboveHead, dialogueWarpOut,
//!   message).
//! - `block`: a `"Target"` marker declares the speaker for a whole
//!   brace-delimited `"Entries"` section; every placeholder inside
//!   belongs to that speaker.
//!
//! The rules form one fixed table, applied in table order to every file.
//! Because the registry is last-write-wins, table order is part of the
//! observable behavior and must not change casually.

use std::sync::LazyLock;

use enum_dispatch::enum_dispatch;

use crate::{config::Config, registry::KeyNameRegistry};

pub mod block;
pub mod inline;

pub use block::BlockRule;
pub use inline::InlineRule;

/// Character class for placeholder keys and speaker tokens.
pub(crate) const TOKEN: &str = "[A-Za-z0-9_.-]+";

/// Which configuration flag enables a rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toggle {
    Events,
    Message,
    CharactersDialogue,
    StringsSchedules,
}

impl Toggle {
    pub fn enabled(self, config: &Config) -> bool {
        match self {
            Toggle::Events => config.include_events,
            Toggle::Message => config.include_message,
            Toggle::CharactersDialogue => config.include_characters_dialogue,
            Toggle::StringsSchedules => config.include_strings_schedules,
        }
    }
}

/// One extraction rule, applied to a whole file's text.
#[enum_dispatch]
pub trait Extract {
    /// Stable rule identifier for logs and tests.
    fn name(&self) -> &'static str;

    /// The configuration flag gating this rule.
    fn toggle(&self) -> Toggle;

    /// Scan `text` and write every association found into `registry`.
    fn extract(&self, text: &str, registry: &mut KeyNameRegistry);
}

/// Tagged rule variants, dispatched through [`Extract`].
#[enum_dispatch(Extract)]
#[derive(Debug)]
pub enum ExtractionRule {
    Inline(InlineRule),
    Block(BlockRule),
}

static RULES: LazyLock<Vec<ExtractionRule>> = LazyLock::new(|| {
    vec![
        InlineRule::speak().into(),
        InlineRule::dialogue().into(),
        InlineRule::text_above_head().into(),
        InlineRule::dialogue_warp_out().into(),
        InlineRule::message().into(),
        BlockRule::characters_dialogue().into(),
        BlockRule::strings_schedules().into(),
    ]
});

/// The fixed rule table, in application order.
pub fn rule_set() -> &'static [ExtractionRule] {
    &RULES
}

/// Apply every rule enabled by `config` against `text`, in table order.
pub fn apply_enabled(text: &str, config: &Config, registry: &mut KeyNameRegistry) {
    for rule in rule_set() {
        if rule.toggle().enabled(config) {
            rule.extract(text, registry);
        }
    }
}
