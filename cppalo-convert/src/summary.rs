use serde::Serialize;

use crate::convert::CategoryConversion;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ConversionSummary {
    pub hosts: usize,
    pub hosts_diverted: usize,
    pub networks: usize,
    pub networks_diverted: usize,
    pub tcp_services: usize,
    pub udp_services: usize,
}

pub fn summarize(
    hosts: &CategoryConversion,
    networks: &CategoryConversion,
    tcp: Option<&CategoryConversion>,
    udp: Option<&CategoryConversion>,
) -> ConversionSummary {
    ConversionSummary {
        hosts: hosts.directives.len(),
        hosts_diverted: hosts.diversions.len(),
        networks: networks.directives.len(),
        networks_diverted: networks.diversions.len(),
        tcp_services: tcp.map(|run| run.directives.len()).unwrap_or(0),
        udp_services: udp.map(|run| run.directives.len()).unwrap_or(0),
    }
}

pub fn render(summary: ConversionSummary) -> String {
    format!(
        "convert_summary hosts={} hosts_diverted={} networks={} networks_diverted={} tcp_services={} udp_services={}",
        summary.hosts,
        summary.hosts_diverted,
        summary.networks,
        summary.networks_diverted,
        summary.tcp_services,
        summary.udp_services
    )
}
