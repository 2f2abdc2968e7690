//! Inverts the icon list into a Spanish term → icon set map.

use std::collections::{BTreeMap, BTreeSet, HashSet};

use crate::error::BuildError;
use crate::normalize::Dictionary;
use crate::resolve::resolve;

/// Spanish search term to the icons relevant for it. BTree collections
/// keep serialization deterministic: identical inputs produce
/// byte-identical JSON.
pub type SearchMap = BTreeMap<String, BTreeSet<String>>;

/// Builds the search map from the icon list and the finished dictionary.
///
/// Each icon contributes its hyphen-separated words plus a variant with
/// only the first hyphen turned into a space, so that multi-word
/// dictionary keys like "air freshener" can match. Every icon is also
/// registered under its own literal name so it is always searchable.
pub fn build_search_map(
    icons: &[String],
    dictionary: &Dictionary,
    ignore: &HashSet<String>,
) -> Result<SearchMap, BuildError> {
    let mut search = SearchMap::new();
    for icon in icons {
        for term in icon_terms(icon) {
            let key = resolve(&term, dictionary);
            match dictionary.get(&key) {
                Some(spanish_terms) => {
                    for spanish in spanish_terms {
                        search.entry(spanish.clone()).or_default().insert(icon.clone());
                    }
                }
                None => {
                    if is_fatal_miss(&key, ignore) {
                        return Err(BuildError::UnresolvedTerm { term: key, icon: icon.clone() });
                    }
                    // multi-word phrase, 1-letter word, number, or
                    // explicitly ignorable: contributes nothing
                }
            }
        }
        search.entry(icon.clone()).or_default().insert(icon.clone());
    }
    Ok(search)
}

/// The words of an icon name, plus the name with its first hyphen
/// replaced by a space. For hyphen-free names the extra term is just
/// the name again, which is harmless.
fn icon_terms(icon: &str) -> Vec<String> {
    let mut terms: Vec<String> = icon.split('-').map(str::to_owned).collect();
    terms.push(icon.replacen('-', " ", 1));
    terms
}

/// An unknown term only halts the build when it plausibly should have
/// been translatable: a single word, longer than one character, with no
/// digits, and not on the ignore list.
fn is_fatal_miss(term: &str, ignore: &HashSet<String>) -> bool {
    !term.chars().any(char::is_whitespace)
        && term.chars().count() > 1
        && !term.chars().any(|c| c.is_ascii_digit())
        && !ignore.contains(term)
}
