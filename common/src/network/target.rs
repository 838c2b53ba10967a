//! # Check Targets
//!
//! The two names a machine is known by: its local hostname and its fully
//! qualified domain name. Both are read once at startup and never change
//! during a run.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetKind {
    Hostname,
    Fqdn,
}

impl TargetKind {
    pub fn label(&self) -> &'static str {
        match self {
            TargetKind::Hostname => "Hostname",
            TargetKind::Fqdn => "FQDN",
        }
    }
}

/// A labelled DNS name to check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    pub kind: TargetKind,
    pub name: String,
}

impl Target {
    pub fn new(kind: TargetKind, name: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
        }
    }

    pub fn label(&self) -> &'static str {
        self.kind.label()
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// Hostname and FQDN of the local machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub hostname: Target,
    pub fqdn: Target,
}

impl Identity {
    pub fn new(hostname: impl Into<String>, fqdn: impl Into<String>) -> Self {
        Self {
            hostname: Target::new(TargetKind::Hostname, hostname),
            fqdn: Target::new(TargetKind::Fqdn, fqdn),
        }
    }

    /// True when the FQDN is textually identical to the hostname.
    pub fn fqdn_is_hostname(&self) -> bool {
        self.hostname.name == self.fqdn.name
    }
}
