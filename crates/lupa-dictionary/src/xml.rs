//! Parsing of the English-Spanish dictionary source.
//!
//! The source document groups word entries by first letter:
//!
//! ```xml
//! <dic>
//!   <l><w><c>abbey</c><d>abadía</d></w> ...</l>
//!   <l><w><c>bank</c><d>banco, orilla</d></w> ...</l>
//! </dic>
//! ```
//!
//! The letter grouping carries no information we need, so entries are
//! flattened into one list. Entries without a translation text are kept
//! with `spanish: None` and skipped by the caller.

use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Deserialize)]
struct Dic {
    #[serde(rename = "l", default)]
    groups: Vec<LetterGroup>,
}

#[derive(Debug, Deserialize)]
struct LetterGroup {
    #[serde(rename = "w", default)]
    words: Vec<WordEntry>,
}

/// One raw dictionary entry: an English key and, usually, a Spanish
/// translation string with several comma-separated variants.
#[derive(Debug, Clone, Deserialize)]
pub struct WordEntry {
    #[serde(rename = "c")]
    pub english: String,
    #[serde(rename = "d", default)]
    pub spanish: Option<String>,
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("malformed dictionary XML: {0}")]
    Xml(#[from] quick_xml::DeError),
}

/// Parses the dictionary document and flattens its letter groups.
pub fn parse_entries(xml: &str) -> Result<Vec<WordEntry>, LoadError> {
    let dic: Dic = quick_xml::de::from_str(xml)?;
    Ok(dic.groups.into_iter().flat_map(|group| group.words).collect())
}
