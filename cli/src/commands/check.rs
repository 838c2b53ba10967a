use std::process::ExitCode;

use anyhow::Context;
use tracing::info;

use crate::terminal::print::ConsoleReport;
use hostcheck_common::network::target::Identity;
use hostcheck_common::system::IdentityRepository;
use hostcheck_core::checks::CheckService;
use hostcheck_core::prober::PingProber;
use hostcheck_core::resolver::DnsResolver;
use hostcheck_core::system::SystemRepo;

pub async fn check() -> anyhow::Result<ExitCode> {
    // FQDN discovery does blocking reverse lookups
    let identity: Identity = tokio::task::spawn_blocking(|| read_identity(&SystemRepo)).await??;
    info!("hostname {} / fqdn {}", identity.hostname, identity.fqdn);

    let service = CheckService::new(Box::new(DnsResolver), Box::new(PingProber::default()));
    let report = service.run(&identity, &mut ConsoleReport).await;

    Ok(ExitCode::from(report.exit_status()))
}

fn read_identity(repo: &dyn IdentityRepository) -> anyhow::Result<Identity> {
    let hostname = repo.hostname().context("reading the local hostname")?;
    let fqdn = repo.fqdn().context("resolving the local FQDN")?;
    Ok(Identity::new(hostname, fqdn))
}
