//! Classification census over a single export table.
//!
//! Useful before a conversion run to see how rows will partition and how
//! many fall outside every category.

use csv_table_core::Table;
use serde::Serialize;

use crate::classify::{host_objects, network_objects, service_objects, ClassifyError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct InspectReport {
    /// Data rows in the table.
    pub rows: usize,
    pub hosts: usize,
    pub networks: usize,
    pub services: usize,
    /// Rows excluded from every category.
    pub unclassified: usize,
}

/// Census of an address-object export (`Name, IPv4, Mask` columns).
pub fn build_address_report(table: &Table) -> Result<InspectReport, ClassifyError> {
    let hosts = host_objects(table)?.len();
    let networks = network_objects(table)?.len();

    Ok(InspectReport {
        rows: table.len(),
        hosts,
        networks,
        services: 0,
        unclassified: table.len() - hosts - networks,
    })
}

/// Census of a protocol-specific service export (`Name, Port` columns).
pub fn build_service_report(table: &Table) -> Result<InspectReport, ClassifyError> {
    let services = service_objects(table)?.len();

    Ok(InspectReport {
        rows: table.len(),
        hosts: 0,
        networks: 0,
        services,
        unclassified: table.len() - services,
    })
}

#[cfg(test)]
mod tests {
    use super::{build_address_report, build_service_report};
    use csv_table_core::parse;

    #[test]
    fn address_census_counts_every_row_once() {
        let table = parse(
            b"Name,IPv4,Mask,Port\n\
              WebSrv,10.0.0.5,,\n\
              Corp Net,10.1.0.0,255.255.255.0,\n\
              Orphan,,,80\n",
        )
        .expect("table should parse");

        let report = build_address_report(&table).expect("census should build");
        assert_eq!(report.rows, 3);
        assert_eq!(report.hosts, 1);
        assert_eq!(report.networks, 1);
        assert_eq!(report.unclassified, 1);
        assert_eq!(report.hosts + report.networks + report.unclassified, report.rows);
    }

    #[test]
    fn service_census_applies_the_marker_rule() {
        let table = parse(b"Name,Port\nHTTP,80\nLegacy App,N/A\n").expect("table should parse");

        let report = build_service_report(&table).expect("census should build");
        assert_eq!(report.rows, 2);
        assert_eq!(report.services, 1);
        assert_eq!(report.unclassified, 1);
    }
}
