//! Row classification: partition raw export rows into object categories.
//!
//! Classification is pure, order-preserving filtering over a parsed
//! table. Each predicate tests field presence only; no row is mutated
//! and no row can land in more than one address subset.

use csv_table_core::{Row, Table};
use thiserror::Error;

/// Marker Check Point service exports write for "no value here".
///
/// Address exports leave absent cells truly empty; only service tables
/// use the literal marker, and the two rules must not be conflated.
const NOT_AVAILABLE: &str = "N/A";

pub const NAME_COLUMN: &str = "Name";
pub const IPV4_COLUMN: &str = "IPv4";
pub const MASK_COLUMN: &str = "Mask";
pub const PORT_COLUMN: &str = "Port";

/// Errors returned when a source table cannot be classified.
#[derive(Debug, Error)]
pub enum ClassifyError {
    /// The table header does not declare a column the category needs.
    #[error("source table is missing required column '{0}'")]
    MissingColumn(String),
}

/// Absence rule applied when testing a cell for a usable value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AbsenceRule {
    /// Only an empty cell counts as absent (address exports).
    EmptyOnly,
    /// An empty cell or the literal `N/A` marker counts as absent
    /// (service exports).
    EmptyOrMarker,
}

/// True when the cell holds a usable value under the given rule.
pub fn has_value(cell: &str, rule: AbsenceRule) -> bool {
    match rule {
        AbsenceRule::EmptyOnly => !cell.is_empty(),
        AbsenceRule::EmptyOrMarker => !cell.is_empty() && cell != NOT_AVAILABLE,
    }
}

/// A host object row: an address with no mask, implicitly /32.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostRecord {
    /// 0-based data-row index in the source table.
    pub index: usize,
    pub name: String,
    pub address: String,
}

/// A network object row: an address plus a dotted-decimal subnet mask.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkRecord {
    pub index: usize,
    pub name: String,
    pub address: String,
    pub mask: String,
}

/// A service object row. The protocol is not in the export; it arrives
/// as a separate parameter at conversion time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceRecord {
    pub index: usize,
    pub name: String,
    pub port: String,
}

/// Rows with an IPv4 address and no mask, in source order.
pub fn host_objects(table: &Table) -> Result<Vec<HostRecord>, ClassifyError> {
    require_columns(table, &[NAME_COLUMN, IPV4_COLUMN, MASK_COLUMN])?;

    Ok(table
        .iter()
        .filter_map(|row| {
            let address = cell(&row, IPV4_COLUMN);
            let mask = cell(&row, MASK_COLUMN);
            let is_host = has_value(address, AbsenceRule::EmptyOnly)
                && !has_value(mask, AbsenceRule::EmptyOnly);
            is_host.then(|| HostRecord {
                index: row.index(),
                name: cell(&row, NAME_COLUMN).to_string(),
                address: address.to_string(),
            })
        })
        .collect())
}

/// Rows with both an IPv4 address and a subnet mask, in source order.
pub fn network_objects(table: &Table) -> Result<Vec<NetworkRecord>, ClassifyError> {
    require_columns(table, &[NAME_COLUMN, IPV4_COLUMN, MASK_COLUMN])?;

    Ok(table
        .iter()
        .filter_map(|row| {
            let address = cell(&row, IPV4_COLUMN);
            let mask = cell(&row, MASK_COLUMN);
            let is_network = has_value(address, AbsenceRule::EmptyOnly)
                && has_value(mask, AbsenceRule::EmptyOnly);
            is_network.then(|| NetworkRecord {
                index: row.index(),
                name: cell(&row, NAME_COLUMN).to_string(),
                address: address.to_string(),
                mask: mask.to_string(),
            })
        })
        .collect())
}

/// Rows with a usable port, honoring the `N/A` marker service exports use.
pub fn service_objects(table: &Table) -> Result<Vec<ServiceRecord>, ClassifyError> {
    require_columns(table, &[NAME_COLUMN, PORT_COLUMN])?;

    Ok(table
        .iter()
        .filter_map(|row| {
            let port = cell(&row, PORT_COLUMN);
            has_value(port, AbsenceRule::EmptyOrMarker).then(|| ServiceRecord {
                index: row.index(),
                name: cell(&row, NAME_COLUMN).to_string(),
                port: port.to_string(),
            })
        })
        .collect())
}

fn require_columns(table: &Table, columns: &[&str]) -> Result<(), ClassifyError> {
    for column in columns {
        if !table.has_column(column) {
            return Err(ClassifyError::MissingColumn((*column).to_string()));
        }
    }
    Ok(())
}

fn cell<'a>(row: &Row<'a>, column: &str) -> &'a str {
    row.get(column).unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::{host_objects, network_objects, service_objects, ClassifyError};
    use csv_table_core::parse;

    fn address_table() -> csv_table_core::Table {
        parse(
            b"Name,IPv4,Mask,Port\n\
              WebSrv,10.0.0.5,,\n\
              Corp Net,10.1.0.0,255.255.255.0,\n\
              Orphan,,,80\n\
              Legacy Host,N/A,,\n",
        )
        .expect("table should parse")
    }

    #[test]
    fn address_subsets_are_disjoint_and_ordered() {
        let table = address_table();
        let hosts = host_objects(&table).expect("classify hosts");
        let networks = network_objects(&table).expect("classify networks");

        let host_indices: Vec<usize> = hosts.iter().map(|h| h.index).collect();
        let network_indices: Vec<usize> = networks.iter().map(|n| n.index).collect();
        assert_eq!(host_indices, vec![0, 3]);
        assert_eq!(network_indices, vec![1]);
        assert!(host_indices.iter().all(|i| !network_indices.contains(i)));
    }

    #[test]
    fn rows_without_address_are_excluded_from_both_subsets() {
        let table = address_table();
        let hosts = host_objects(&table).expect("classify hosts");
        let networks = network_objects(&table).expect("classify networks");

        assert!(hosts.iter().all(|h| h.name != "Orphan"));
        assert!(networks.iter().all(|n| n.name != "Orphan"));
    }

    #[test]
    fn na_marker_is_a_plain_value_for_address_classification() {
        let table = address_table();
        let hosts = host_objects(&table).expect("classify hosts");

        let legacy = hosts
            .iter()
            .find(|h| h.name == "Legacy Host")
            .expect("N/A address row should still classify as a host");
        assert_eq!(legacy.address, "N/A");
    }

    #[test]
    fn na_marker_counts_as_absent_for_service_classification() {
        let table = parse(b"Name,Port\nHTTP,80\nLegacy App,N/A\nBlank,\n")
            .expect("table should parse");
        let services = service_objects(&table).expect("classify services");

        assert_eq!(services.len(), 1);
        assert_eq!(services[0].name, "HTTP");
        assert_eq!(services[0].port, "80");
    }

    #[test]
    fn missing_column_is_a_typed_error() {
        let table = parse(b"Name,Port\nHTTP,80\n").expect("table should parse");
        let err = host_objects(&table).expect_err("should fail without IPv4 column");
        match err {
            ClassifyError::MissingColumn(column) => assert_eq!(column, "IPv4"),
        }
    }
}
