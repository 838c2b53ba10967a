//! # Host Check Service
//!
//! Implements the "is this machine reachable under its own names" use case.
//!
//! For each target the service pings the name, resolves it, and pings every
//! address it resolved to, strictly one after another. Progress is reported
//! as [`ReportEvent`]s in probe order; the returned [`CheckReport`] carries
//! the pass/fail verdict.

use tracing::{info, instrument};

use hostcheck_common::network::target::{Identity, Target};
use hostcheck_common::outcome::{CheckReport, ProbeResult, TargetOutcome};
use hostcheck_common::probing::Prober;
use hostcheck_common::report::{ReportEvent, ReportWriter};
use hostcheck_common::resolving::NameResolver;

/// Application Service for host checks.
///
/// Orchestrates a run by:
/// 1. delegating name lookups to the [`NameResolver`] trait.
/// 2. delegating pings to the [`Prober`] trait.
pub struct CheckService {
    resolver: Box<dyn NameResolver>,
    prober: Box<dyn Prober>,
}

impl CheckService {
    pub fn new(resolver: Box<dyn NameResolver>, prober: Box<dyn Prober>) -> Self {
        Self { resolver, prober }
    }

    /// Checks the hostname, then the FQDN unless it is the same name.
    pub async fn run(&self, identity: &Identity, out: &mut dyn ReportWriter) -> CheckReport {
        let mut report = CheckReport::default();

        report.outcomes.push(self.check_target(&identity.hostname, out).await);

        out.emit(ReportEvent::Blank);
        out.emit(ReportEvent::Separator);
        out.emit(ReportEvent::Blank);

        if identity.fqdn_is_hostname() {
            out.emit(ReportEvent::SameAsHostname(&identity.fqdn));
        } else {
            report.outcomes.push(self.check_target(&identity.fqdn, out).await);
        }

        let passed = report.passed();
        let passing = report.outcomes.iter().filter(|o| o.passed()).count();
        info!("{passing} of {} targets passed", report.outcomes.len());

        out.emit(ReportEvent::Blank);
        out.emit(ReportEvent::Summary { passed });
        report
    }

    /// Runs every probe for one target.
    ///
    /// An empty address set stops the target early and counts as a failure.
    #[instrument(skip_all, fields(label = target.label(), name = %target.name))]
    pub async fn check_target(&self, target: &Target, out: &mut dyn ReportWriter) -> TargetOutcome {
        out.emit(ReportEvent::TargetHeader(target));

        let name_probe = ProbeResult::new(&target.name, self.prober.probe(&target.name).await);
        out.emit(ReportEvent::NameProbe(target, &name_probe));
        out.emit(ReportEvent::Blank);

        let addresses = self.resolver.resolve(&target.name).await;
        let mut outcome = TargetOutcome {
            target: target.clone(),
            name_probe,
            addresses,
            address_probes: Vec::new(),
        };

        if outcome.addresses.is_empty() {
            out.emit(ReportEvent::NoAddresses(target));
            return outcome;
        }

        out.emit(ReportEvent::AddressesHeader(target));
        for ip in &outcome.addresses {
            out.emit(ReportEvent::Address(*ip));
        }

        out.emit(ReportEvent::Blank);
        out.emit(ReportEvent::AddressProbesHeader(target));
        for ip in &outcome.addresses {
            let endpoint = ip.to_string();
            let success = self.prober.probe(&endpoint).await;
            let probe = ProbeResult::new(endpoint, success);
            out.emit(ReportEvent::AddressProbe(&probe));
            outcome.address_probes.push(probe);
        }

        outcome
    }
}
