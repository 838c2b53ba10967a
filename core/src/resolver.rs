use std::net::IpAddr;

use async_trait::async_trait;
use tracing::debug;

use hostcheck_common::network::address::AddressSet;
use hostcheck_common::resolving::NameResolver;

/// Resolves names through the system resolver (`getaddrinfo`).
#[derive(Debug, Default, Clone, Copy)]
pub struct DnsResolver;

#[async_trait]
impl NameResolver for DnsResolver {
    async fn resolve(&self, name: &str) -> AddressSet {
        let owned = name.to_string();
        let lookup = tokio::task::spawn_blocking(move || dns_lookup::lookup_host(&owned)).await;

        let ips: Vec<IpAddr> = match lookup {
            Ok(Ok(ips)) => ips,
            Ok(Err(e)) => {
                debug!("{name} did not resolve: {e}");
                return AddressSet::new();
            }
            Err(e) => {
                debug!("lookup task for {name} did not finish: {e}");
                return AddressSet::new();
            }
        };

        let addresses: AddressSet = ips.into_iter().collect();
        debug!("{name} resolved to {} unique addresses", addresses.len());
        addresses
    }
}
