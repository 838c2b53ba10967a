//! Results of a check run, from a single ping up to the whole report.

use crate::network::address::AddressSet;
use crate::network::target::Target;

/// Outcome of one ping against one endpoint (a name or an address).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeResult {
    pub endpoint: String,
    pub success: bool,
}

impl ProbeResult {
    pub fn new(endpoint: impl Into<String>, success: bool) -> Self {
        Self {
            endpoint: endpoint.into(),
            success,
        }
    }

    pub fn status(&self) -> &'static str {
        if self.success { "successful" } else { "failed" }
    }
}

/// Everything that was learned about one target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetOutcome {
    pub target: Target,
    pub name_probe: ProbeResult,
    pub addresses: AddressSet,
    pub address_probes: Vec<ProbeResult>,
}

impl TargetOutcome {
    /// A target passes when its name answered, it resolved to at least one
    /// address, and every one of those addresses answered.
    pub fn passed(&self) -> bool {
        self.name_probe.success
            && !self.addresses.is_empty()
            && self.address_probes.iter().all(|probe| probe.success)
    }
}

/// Aggregate of every target processed in a run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckReport {
    pub outcomes: Vec<TargetOutcome>,
}

impl CheckReport {
    pub fn passed(&self) -> bool {
        self.outcomes.iter().all(TargetOutcome::passed)
    }

    /// Process exit status for this report.
    pub fn exit_status(&self) -> u8 {
        if self.passed() { 0 } else { 1 }
    }
}
