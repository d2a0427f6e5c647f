//! Structural block extraction.
//!
//! Content Patcher edits declare what they patch with a `"Target"` field
//! and put the payload in a brace-delimited `"Entries"` object. Every
//! placeholder inside that object belongs to the entity named by the
//! Target's trailing path segment:
//!
//! ```text
//! {
//!     "Action": "EditData",
//!     "Target": "Characters/Dialogue/Lewis",
//!     "Entries": {
//!         "Mon": "{{i18n:Lewis.Mon}}"
//!     }
//! }
//! ```
//!
//! The scanner is a line-oriented state machine, not a JSON parser. Brace
//! depth is counted textually, braces inside string payloads included; a
//! value like `"a { b"` perturbs the depth and can make a block end early
//! or late. That leniency is load-bearing: associations produced today
//! depend on it, so it stays.

use std::sync::LazyLock;

use regex::Regex;

use super::{Extract, TOKEN, Toggle};
use crate::registry::KeyNameRegistry;

static PLACEHOLDER_KEY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(&format!(r"\{{\{{i18n:({TOKEN})\}}\}}")).unwrap());

/// A rule associating every placeholder inside an `"Entries"` block with
/// the name captured from the enclosing `"Target"` marker.
#[derive(Debug)]
pub struct BlockRule {
    name: &'static str,
    toggle: Toggle,
    target: Regex,
    /// Character dialogue only: a Target line containing `rainy` names a
    /// weather variant, not a speaker, and must not arm a candidate.
    reject_rainy: bool,
}

impl BlockRule {
    pub fn characters_dialogue() -> Self {
        Self {
            name: "characters-dialogue",
            toggle: Toggle::CharactersDialogue,
            target: target_pattern("characters/dialogue"),
            reject_rainy: true,
        }
    }

    pub fn strings_schedules() -> Self {
        Self {
            name: "strings-schedules",
            toggle: Toggle::StringsSchedules,
            target: target_pattern("strings/schedules"),
            reject_rainy: false,
        }
    }
}

fn target_pattern(prefix: &str) -> Regex {
    Regex::new(&format!(r#""Target": "(?i:{prefix})/({TOKEN})","#)).unwrap()
}

fn net_braces(text: &str) -> i64 {
    text.matches('{').count() as i64 - text.matches('}').count() as i64
}

impl Extract for BlockRule {
    fn name(&self) -> &'static str {
        self.name
    }

    fn toggle(&self) -> Toggle {
        self.toggle
    }

    fn extract(&self, text: &str, registry: &mut KeyNameRegistry) {
        // Candidate speaker captured from the last qualifying Target line.
        let mut candidate: Option<String> = None;
        // Inside the Entries object, tracking its brace depth.
        let mut inside_entries = false;
        // Target seen, Entries marker not yet opened.
        let mut target_found = false;
        let mut depth: i64 = 0;
        // Trimmed lines accumulated since the candidate was armed.
        let mut buffer = String::new();

        for line in text.lines() {
            if let Some(caps) = self.target.captures(line) {
                if !(self.reject_rainy && line.contains("rainy")) {
                    // Re-arming silently replaces any pending candidate.
                    candidate = Some(caps[1].to_string());
                    inside_entries = false;
                    target_found = true;
                    buffer.clear();
                }
            }

            if candidate.is_none() {
                continue;
            }
            buffer.push_str(line.trim());

            if target_found
                && (buffer.contains("\"Entries\":") || buffer.contains("\"entries\":"))
            {
                depth = net_braces(&buffer);
                if depth > 0 {
                    inside_entries = true;
                    target_found = false;
                }
                continue;
            }

            if inside_entries {
                depth += net_braces(line);
                if depth == 0 {
                    // Block closed: everything accumulated since the
                    // Target line belongs to the candidate.
                    if let Some(name) = candidate.take() {
                        for caps in PLACEHOLDER_KEY.captures_iter(&buffer) {
                            registry.set(&caps[1], name.as_str());
                        }
                    }
                    inside_entries = false;
                    buffer.clear();
                }
            }
        }
        // EOF with an open block drops the candidate, no associations.
    }
}
