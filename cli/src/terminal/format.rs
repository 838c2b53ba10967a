use std::net::IpAddr;

use colored::*;
use hostcheck_common::outcome::ProbeResult;
use hostcheck_common::report::ReportEvent;

use crate::terminal::colors;

/// Renders an event for the terminal.
///
/// Only adds color: with colors disabled the result is exactly the
/// event's plain text.
pub fn colorize(event: &ReportEvent<'_>) -> String {
    match event {
        ReportEvent::TargetHeader(target) => format!(
            "{}: {}",
            target.label().bold(),
            target.name.color(colors::PRIMARY)
        ),
        ReportEvent::NameProbe(target, probe) => format!(
            "Ping to {} {}: {}",
            target.label().to_lowercase(),
            target.name.color(colors::PRIMARY),
            status(probe)
        ),
        ReportEvent::Address(ip) => format!("  {}", address(ip)),
        ReportEvent::AddressProbe(probe) => format!(
            "  Ping to {}: {}",
            probe.endpoint.color(colors::PRIMARY),
            status(probe)
        ),
        ReportEvent::Separator => event.to_string().color(colors::SEPARATOR).to_string(),
        ReportEvent::Summary { passed } => {
            let color = if *passed { colors::SUCCESS } else { colors::FAILURE };
            event.to_string().color(color).bold().to_string()
        }
        _ => event.to_string(),
    }
}

fn status(probe: &ProbeResult) -> ColoredString {
    if probe.success {
        probe.status().color(colors::SUCCESS)
    } else {
        probe.status().color(colors::FAILURE).bold()
    }
}

fn address(ip: &IpAddr) -> ColoredString {
    match ip {
        IpAddr::V4(ipv4_addr) => ipv4_addr.to_string().color(colors::IPV4_ADDR),
        IpAddr::V6(ipv6_addr) => ipv6_addr.to_string().color(colors::IPV6_ADDR),
    }
}
