use thiserror::Error;

/// Fatal build failures. Every variant aborts the whole run before any
/// output is written; bad data is fixed by a human, not worked around.
#[derive(Debug, Error)]
pub enum BuildError {
    /// A translation fragment survived cleanup but contains characters
    /// outside the allowed set. Code points are listed in hex so that
    /// invisible characters can be identified.
    #[error(
        "bad term <{term}> from <{source_text}> under <{english}>, code points [{}]",
        codepoints.join(", ")
    )]
    InvalidTerm {
        term: String,
        // named `source_text` because thiserror reserves the name `source`
        source_text: String,
        english: String,
        codepoints: Vec<String>,
    },

    /// An icon-derived English term has no dictionary match after all
    /// fallbacks. Add it to the override table or the ignore list.
    #[error("no translation for {term} in {icon}")]
    UnresolvedTerm { term: String, icon: String },

    /// Icons that never appear anywhere in the final map.
    #[error("some icons did not receive translations: {}", icons.join(", "))]
    MissingIcons { icons: Vec<String> },
}
