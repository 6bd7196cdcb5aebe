//! Catalog loading utilities
//!
//! Turns raw records (embedded or read from a file) into word families.
//!
//! File format:
//! ```text
//! # comment
//! [level1]
//! beauty | BEAUTY | BEAUTIFY | BEAUTIFUL | BEAUTIFULLY
//! [level3]
//! patient | PATIENCE | PATIENT | IMPATIENT | IMPATIENTLY | Requires negative prefix | adjective
//! ```

use super::Catalog;
use crate::core::{GameError, Tier, WordFamily};
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use tracing::{info, warn};

/// Load a catalog from a file
///
/// # Errors
///
/// Returns an error if the file cannot be read, a record is malformed, a section
/// header names an unknown tier, or a tier ends up with no families.
///
/// # Examples
/// ```no_run
/// use word_family::catalog::loader::load_from_file;
///
/// let catalog = load_from_file("families.txt").unwrap();
/// println!("Loaded {} families", catalog.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Catalog> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read catalog file {}", path.display()))?;

    let catalog = parse_catalog(&content)
        .with_context(|| format!("invalid catalog file {}", path.display()))?;

    info!(path = %path.display(), families = catalog.len(), "loaded catalog");
    Ok(catalog)
}

/// Parse a sectioned catalog
///
/// # Errors
///
/// See [`load_from_file`].
pub fn parse_catalog(content: &str) -> Result<Catalog, GameError> {
    let mut tiers: [Vec<WordFamily>; 3] = Default::default();
    let mut current: Option<Tier> = None;

    for (index, line) in content.lines().enumerate() {
        let line_number = index + 1;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        if let Some(header) = trimmed
            .strip_prefix('[')
            .and_then(|rest| rest.strip_suffix(']'))
        {
            let tier = header.parse().map_err(|e: GameError| GameError::InvalidRecord {
                line: line_number,
                reason: e.to_string(),
            })?;
            current = Some(tier);
            continue;
        }

        let tier = current.ok_or_else(|| GameError::InvalidRecord {
            line: line_number,
            reason: "record appears before any [levelN] section".to_string(),
        })?;
        tiers[tier.number() - 1].push(WordFamily::from_record(trimmed, line_number)?);
    }

    let [level1, level2, level3] = tiers;
    Catalog::from_tiers(level1, level2, level3)
}

/// Convert embedded records to word families
///
/// Comment and blank lines are skipped; malformed records are logged and skipped.
///
/// # Examples
/// ```
/// use word_family::catalog::loader::families_from_slice;
/// use word_family::catalog::LEVEL1;
///
/// let families = families_from_slice(LEVEL1);
/// assert_eq!(families.len(), LEVEL1.len());
/// ```
#[must_use]
pub fn families_from_slice(slice: &[&str]) -> Vec<WordFamily> {
    slice
        .iter()
        .enumerate()
        .map(|(i, record)| (i + 1, record.trim()))
        .filter(|(_, record)| !record.is_empty() && !record.starts_with('#'))
        .filter_map(|(line, record)| match WordFamily::from_record(record, line) {
            Ok(family) => Some(family),
            Err(err) => {
                warn!(%err, "skipping word-family record");
                None
            }
        })
        .collect()
}
