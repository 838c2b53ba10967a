//! # Report Events
//!
//! The check driver does not print. It emits [`ReportEvent`]s in probe order
//! and lets a [`ReportWriter`] decide how they reach the user. Every event
//! renders to exactly one line of plain text through [`fmt::Display`].

use std::fmt;
use std::net::IpAddr;

use crate::outcome::ProbeResult;
use crate::network::target::Target;

pub const SEPARATOR_WIDTH: usize = 50;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportEvent<'a> {
    /// `Hostname: host.local`
    TargetHeader(&'a Target),
    /// `Ping to hostname host.local: successful`
    NameProbe(&'a Target, &'a ProbeResult),
    /// `IP addresses for host.local:`
    AddressesHeader(&'a Target),
    /// `  192.168.1.5`
    Address(IpAddr),
    /// `No IP addresses found for host.local`
    NoAddresses(&'a Target),
    /// `Pinging IP addresses for host.local:`
    AddressProbesHeader(&'a Target),
    /// `  Ping to 192.168.1.5: failed`
    AddressProbe(&'a ProbeResult),
    /// `FQDN is the same as hostname: host.local`
    SameAsHostname(&'a Target),
    Separator,
    Blank,
    Summary { passed: bool },
}

impl fmt::Display for ReportEvent<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportEvent::TargetHeader(target) => write!(f, "{}: {}", target.label(), target),
            ReportEvent::NameProbe(target, probe) => write!(
                f,
                "Ping to {} {}: {}",
                target.label().to_lowercase(),
                target,
                probe.status()
            ),
            ReportEvent::AddressesHeader(target) => write!(f, "IP addresses for {target}:"),
            ReportEvent::Address(ip) => write!(f, "  {ip}"),
            ReportEvent::NoAddresses(target) => write!(f, "No IP addresses found for {target}"),
            ReportEvent::AddressProbesHeader(target) => {
                write!(f, "Pinging IP addresses for {target}:")
            }
            ReportEvent::AddressProbe(probe) => {
                write!(f, "  Ping to {}: {}", probe.endpoint, probe.status())
            }
            ReportEvent::SameAsHostname(fqdn) => write!(f, "FQDN is the same as hostname: {fqdn}"),
            ReportEvent::Separator => f.write_str(&"=".repeat(SEPARATOR_WIDTH)),
            ReportEvent::Blank => Ok(()),
            ReportEvent::Summary { passed: true } => f.write_str("All checks passed."),
            ReportEvent::Summary { passed: false } => {
                f.write_str("Some checks failed. Exiting with status code 1.")
            }
        }
    }
}

/// Destination for report events.
pub trait ReportWriter {
    fn emit(&mut self, event: ReportEvent<'_>);
}

/// Keeps every rendered line in memory.
#[derive(Debug, Default)]
pub struct LineRecorder {
    pub lines: Vec<String>,
}

impl LineRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(&self, line: &str) -> usize {
        self.lines.iter().filter(|l| *l == line).count()
    }

    pub fn contains(&self, line: &str) -> bool {
        self.count(line) > 0
    }
}

impl ReportWriter for LineRecorder {
    fn emit(&mut self, event: ReportEvent<'_>) {
        self.lines.push(event.to_string());
    }
}
