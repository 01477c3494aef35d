//! Subnet mask to CIDR suffix translation.
//!
//! The table is total over the 25 valid dotted-decimal masks (`/8`
//! through `/32`). Lookup has no default: an unrecognized mask means the
//! export violates an assumption, and guessing a suffix could produce an
//! incorrect firewall rule, so callers must treat a miss as fatal.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

/// One dotted-decimal subnet mask and its CIDR suffix.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MaskEntry {
    pub dotted: String,
    pub cidr: String,
}

#[derive(Debug, Deserialize)]
struct MaskFile {
    mask: Vec<MaskEntry>,
}

/// Errors returned when loading mask-table files.
#[derive(Debug, Error)]
pub enum MaskLoadError {
    #[error("failed to read mask table {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("failed to parse mask table {path}: {source}")]
    Parse {
        path: String,
        source: toml::de::Error,
    },
    #[error("mask table {path} defines no masks")]
    Empty { path: String },
}

/// Read-only mapping from dotted-decimal subnet masks to CIDR suffixes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaskTable {
    entries: BTreeMap<String, String>,
}

impl MaskTable {
    /// CIDR suffix for a dotted-decimal mask, if the table defines one.
    pub fn cidr_suffix(&self, mask: &str) -> Option<&str> {
        self.entries.get(mask).map(String::as_str)
    }

    /// Number of masks the table defines.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when the table defines no masks.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<MaskEntry> for MaskTable {
    fn from_iter<I: IntoIterator<Item = MaskEntry>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|entry| (entry.dotted, entry.cidr))
                .collect(),
        }
    }
}

/// Load a mask table from a TOML file.
pub fn load_mask_table(path: &Path) -> Result<MaskTable, MaskLoadError> {
    let raw = fs::read_to_string(path).map_err(|source| MaskLoadError::Io {
        path: path.display().to_string(),
        source,
    })?;

    parse_mask_table(&raw, path.display().to_string())
}

/// Built-in mask table covering `/8` through `/32`.
pub fn default_mask_table() -> MaskTable {
    let embedded = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/masks/masks.toml"));
    match parse_mask_table(embedded, "embedded masks".to_string()) {
        Ok(table) => table,
        Err(_) => fallback_mask_entries().into_iter().collect(),
    }
}

fn parse_mask_table(raw: &str, path: String) -> Result<MaskTable, MaskLoadError> {
    let parsed: MaskFile =
        toml::from_str(raw).map_err(|source| MaskLoadError::Parse { path: path.clone(), source })?;
    if parsed.mask.is_empty() {
        return Err(MaskLoadError::Empty { path });
    }
    Ok(parsed.mask.into_iter().collect())
}

fn fallback_mask_entries() -> Vec<MaskEntry> {
    (8..=32u32)
        .map(|prefix| {
            let bits = u32::MAX << (32 - prefix);
            MaskEntry {
                dotted: format!(
                    "{}.{}.{}.{}",
                    bits >> 24,
                    (bits >> 16) & 0xff,
                    (bits >> 8) & 0xff,
                    bits & 0xff
                ),
                cidr: format!("/{prefix}"),
            }
        })
        .collect()
}
