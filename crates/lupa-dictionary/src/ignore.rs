//! English terms with no proper Spanish translation. A Spanish speaker
//! searching for these will type the same word, and the icon's own name
//! already covers that, so they are exempt from the unresolved-term
//! error.

use std::collections::HashSet;

pub const UNTRANSLATED: &[&str] = &[
    "africa",
    "americas",
    "asia",
    "csv",
    "david",
    "ethernet",
    "futbol",
    "gopuram",
    "jedi",
    "kaaba",
    "khanda",
    "lira",
    "martini",
    "md",
    "nib",
    "ninja",
    "ol",
    "om",
    "pdf",
    "quidditch",
    "rss",
    "sd",
    "sim",
    "sms",
    "stroopwafel",
    "tenge",
    "terminal",
    "torii",
    "tty",
    "ul",
    "venus",
    "vihara",
    "whills",
    "wifi",
    "yang",
    "yin",
];

pub fn terms() -> HashSet<String> {
    UNTRANSLATED.iter().map(|t| (*t).to_owned()).collect()
}
