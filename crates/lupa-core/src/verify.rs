//! Post-build coverage check.

use std::collections::HashSet;

use crate::aggregate::SearchMap;
use crate::error::BuildError;

/// Every input icon must be referenced somewhere in the map values.
/// Orphans mean the aggregation silently dropped icons, which is a bug
/// or a data defect either way.
pub fn verify_coverage(search: &SearchMap, icons: &[String]) -> Result<(), BuildError> {
    let found: HashSet<&String> = search.values().flatten().collect();
    let mut missing: Vec<String> = icons
        .iter()
        .filter(|icon| !found.contains(icon))
        .cloned()
        .collect();
    if missing.is_empty() {
        return Ok(());
    }
    missing.sort();
    missing.dedup();
    Err(BuildError::MissingIcons { icons: missing })
}
