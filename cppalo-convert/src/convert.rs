//! Per-category normalization and directive emission.
//!
//! Each classified subset is walked in source order and every record
//! ends up as exactly one of: an accepted `set` command, or a diversion
//! routed to that category's review channel. Unknown subnet masks abort
//! the category run instead of producing a per-row skip.

use std::fmt::{self, Display, Formatter};

use serde::Serialize;
use thiserror::Error;

use crate::classify::{HostRecord, NetworkRecord, ServiceRecord};
use crate::masks::MaskTable;

/// Longest address string still plausible as a single dotted quad.
///
/// SmartConsole flattens multi-value and range fields into one cell;
/// anything longer than this is diverted for human review instead of
/// being emitted as a directive.
pub const MAX_ADDRESS_LEN: usize = 20;

/// Service protocol tag, supplied by the caller per conversion run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Protocol {
    Tcp,
    Udp,
}

impl Protocol {
    pub fn as_str(self) -> &'static str {
        match self {
            Protocol::Tcp => "tcp",
            Protocol::Udp => "udp",
        }
    }
}

impl Display for Protocol {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors that abort a category's conversion run.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// The mask has no CIDR translation. There is no normalization path
    /// for non-standard or wildcard masks, so the run stops here.
    #[error("row {index}: subnet mask '{mask}' has no CIDR translation")]
    UnknownMask { index: usize, mask: String },
}

/// A row diverted to the review channel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diversion {
    /// 0-based data-row index in the source table.
    pub index: usize,
    pub name: String,
    pub address: String,
}

impl Diversion {
    /// Review-channel line for this row.
    pub fn render(&self) -> String {
        format!("{}: {} {}", self.index, self.name, self.address)
    }
}

/// Outcome of one category's conversion run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CategoryConversion {
    /// Accepted set commands, in source row order.
    pub directives: Vec<String>,
    /// Rows diverted for review, in source row order.
    pub diversions: Vec<Diversion>,
}

/// Trim a raw object name and collapse internal whitespace runs to
/// single underscores: `"  Sales  Net "` becomes `Sales_Net`.
pub fn normalize_name(raw: &str) -> String {
    raw.split_whitespace().collect::<Vec<_>>().join("_")
}

/// Convert host objects.
///
/// Host names are emitted exactly as exported; only network and service
/// names pass through [`normalize_name`].
pub fn convert_hosts(records: &[HostRecord]) -> CategoryConversion {
    let mut out = CategoryConversion::default();

    for record in records {
        if record.address.len() > MAX_ADDRESS_LEN {
            out.diversions.push(Diversion {
                index: record.index,
                name: record.name.clone(),
                address: record.address.clone(),
            });
            continue;
        }

        out.directives.push(format!(
            "set address {} ip-netmask {}/32",
            record.name, record.address
        ));
    }

    out
}

/// Convert network objects against the mask table.
///
/// The mask is translated before the address-length check so an
/// unrecognized mask fails the run even on rows that would otherwise be
/// diverted.
pub fn convert_networks(
    records: &[NetworkRecord],
    masks: &MaskTable,
) -> Result<CategoryConversion, ConvertError> {
    let mut out = CategoryConversion::default();

    for record in records {
        let name = normalize_name(&record.name);
        let cidr = masks
            .cidr_suffix(&record.mask)
            .ok_or_else(|| ConvertError::UnknownMask {
                index: record.index,
                mask: record.mask.clone(),
            })?;

        if record.address.len() > MAX_ADDRESS_LEN {
            out.diversions.push(Diversion {
                index: record.index,
                name,
                address: record.address.clone(),
            });
            continue;
        }

        out.directives.push(format!(
            "set address {name} ip-netmask {}{cidr}",
            record.address
        ));
    }

    Ok(out)
}

/// Convert one protocol's service objects.
///
/// No length diversion applies; every classified service row is valid.
pub fn convert_services(records: &[ServiceRecord], protocol: Protocol) -> CategoryConversion {
    let mut out = CategoryConversion::default();

    for record in records {
        out.directives.push(format!(
            "set service {} protocol {protocol} port {}",
            normalize_name(&record.name),
            record.port
        ));
    }

    out
}
