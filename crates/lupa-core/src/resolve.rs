//! Suffix-fallback lookup for English terms.

use crate::normalize::Dictionary;

/// Finds the dictionary key to use for `term`.
///
/// Rules are tried in a fixed order, each against the original term,
/// and the first one whose result is a known key wins. When nothing
/// matches the input comes back unchanged and the caller decides what
/// an unknown term means.
///
/// The trailing-`s` rule runs before the trailing-`es` rule and can
/// land on a semantically wrong key (e.g. a word where only `es` should
/// come off). That order is load-bearing for the published map; do not
/// reorder without regenerating and reviewing the output.
pub fn resolve(term: &str, dictionary: &Dictionary) -> String {
    if dictionary.contains(term) {
        return term.to_owned();
    }
    if let Some(stem) = term.strip_suffix("ing") {
        if dictionary.contains(stem) {
            return stem.to_owned();
        }
        // gerunds of silent-e verbs: biking -> bike
        let with_e = format!("{stem}e");
        if dictionary.contains(&with_e) {
            return with_e;
        }
    }
    if let Some(stem) = term.strip_suffix('s') {
        if dictionary.contains(stem) {
            return stem.to_owned();
        }
    }
    if let Some(stem) = term.strip_suffix("es") {
        if dictionary.contains(stem) {
            return stem.to_owned();
        }
    }
    term.to_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::DictionaryBuilder;

    fn dictionary_of(keys: &[&str]) -> Dictionary {
        let mut builder = DictionaryBuilder::new();
        for key in keys {
            builder.add_raw(key, "x").expect("clean input");
        }
        builder.finish()
    }

    #[test]
    fn exact_match_wins() {
        let dictionary = dictionary_of(&["glasses", "glass"]);
        assert_eq!(resolve("glasses", &dictionary), "glasses");
    }

    #[test]
    fn strips_plural_s() {
        let dictionary = dictionary_of(&["box"]);
        assert_eq!(resolve("boxes", &dictionary), "box");
    }

    #[test]
    fn strips_ing() {
        let dictionary = dictionary_of(&["park"]);
        assert_eq!(resolve("parking", &dictionary), "park");
    }

    #[test]
    fn restores_silent_e_after_ing() {
        let dictionary = dictionary_of(&["bike"]);
        assert_eq!(resolve("biking", &dictionary), "bike");
    }

    #[test]
    fn strips_es_when_s_alone_misses() {
        let dictionary = dictionary_of(&["branch"]);
        assert_eq!(resolve("branches", &dictionary), "branch");
    }

    #[test]
    fn unknown_terms_come_back_unchanged() {
        let dictionary = dictionary_of(&[]);
        assert_eq!(resolve("xyz", &dictionary), "xyz");
    }
}
