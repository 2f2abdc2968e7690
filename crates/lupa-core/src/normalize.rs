//! Dictionary construction from raw translation strings.
//!
//! The source data is not very uniform; the cleanup rules here smooth
//! out the known kinds of noise, and anything still unusual afterwards
//! is surfaced as a hard error rather than silently degrading the map.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::BuildError;

static GENDER_TAGS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\{[mfpns]\}").unwrap());
static PUNCTUATION: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[!¡¿?]").unwrap());
static PAREN_ASIDE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\(.*\)").unwrap());
static BRACKET_ASIDE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\[.*\]").unwrap());
static QUOTED_EXAMPLE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r#"".*""#).unwrap());

/// Characters a finished search term may contain: Latin letters with
/// the accents seen in the data, digits, and a few symbols.
static VALID_TERM: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^[a-z0-9àáâäæãåāèéêëēėęîïíīįìôöòóœøōõûüùúūñçčğ%ºªþșł&+\s\-./'´]+$").unwrap()
});

/// English word or phrase mapped to its normalized Spanish terms.
///
/// Immutable once built. A key may carry an empty term list when all of
/// its translations were discarded during cleanup; such keys still count
/// as known words, they just contribute nothing to the search map.
#[derive(Debug, Default)]
pub struct Dictionary {
    entries: HashMap<String, Vec<String>>,
}

impl Dictionary {
    pub fn get(&self, key: &str) -> Option<&[String]> {
        self.entries.get(key).map(Vec::as_slice)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Accumulates raw entries into a [`Dictionary`].
///
/// Raw entries sharing an English key concatenate their terms in source
/// order. Overrides are applied last and replace the derived terms for
/// the keys they define.
#[derive(Debug, Default)]
pub struct DictionaryBuilder {
    entries: HashMap<String, Vec<String>>,
}

impl DictionaryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clean one raw translation string and file its terms under
    /// `english`. The key is registered even when cleanup leaves no
    /// terms behind.
    pub fn add_raw(&mut self, english: &str, raw: &str) -> Result<(), BuildError> {
        let terms = candidate_terms(raw);
        for term in &terms {
            if !VALID_TERM.is_match(term) {
                return Err(BuildError::InvalidTerm {
                    term: term.clone(),
                    source_text: raw.to_owned(),
                    english: english.to_owned(),
                    codepoints: term.chars().map(|c| format!("{:x}", c as u32)).collect(),
                });
            }
        }
        self.entries.entry(english.to_owned()).or_default().extend(terms);
        Ok(())
    }

    /// Merge hand-curated entries on top of the derived ones.
    /// Last write wins on key collision.
    pub fn apply_overrides<I>(&mut self, overrides: I)
    where
        I: IntoIterator<Item = (String, Vec<String>)>,
    {
        for (english, terms) in overrides {
            self.entries.insert(english, terms);
        }
    }

    pub fn finish(self) -> Dictionary {
        Dictionary { entries: self.entries }
    }
}

/// Runs the cleanup sequence over one raw translation string and splits
/// it into candidate terms. Order matters: asides and quoted examples
/// are removed before the colon check, so a colon inside a removed
/// aside does not discard the string.
fn candidate_terms(raw: &str) -> Vec<String> {
    let text = GENDER_TAGS.replace_all(raw, "");
    let text = PUNCTUATION.replace_all(&text, "");
    let text = PAREN_ASIDE.replace_all(&text, "");
    let text = BRACKET_ASIDE.replace_all(&text, "");
    let text = QUOTED_EXAMPLE.replace_all(&text, "");

    // A remaining colon means a usage note; the dotted-circle glyph
    // marks entries that never clean up well. Both are unsalvageable.
    if text.contains(':') || text.contains('◌') {
        return Vec::new();
    }

    let text = text
        .replace("-\u{301}", "-") // stray combining acute after a hyphen
        .replace('\u{a0}', " ")
        .replace('\u{200e}', "");

    text.split([',', ';'])
        .map(str::trim)
        .filter(|term| !term.is_empty())
        .map(str::to_owned)
        .collect()
}
