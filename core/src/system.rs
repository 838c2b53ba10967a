use std::net::IpAddr;

use tracing::debug;

use hostcheck_common::error::IdentityError;
use hostcheck_common::system::IdentityRepository;

/// Reads the machine identity from the operating system.
pub struct SystemRepo;

impl IdentityRepository for SystemRepo {
    fn hostname(&self) -> Result<String, IdentityError> {
        let hostname = hostname::get()
            .map_err(IdentityError::Hostname)?
            .to_string_lossy()
            .into_owned();

        if hostname.is_empty() {
            return Err(IdentityError::EmptyHostname);
        }
        Ok(hostname)
    }

    fn fqdn(&self) -> Result<String, IdentityError> {
        let hostname = self.hostname()?;
        let candidates = reverse_names(&hostname);
        Ok(pick_fqdn(&hostname, candidates))
    }
}

/// Resolves `hostname` forward and every resulting address back to a name.
///
/// Lookup errors are swallowed; they only shorten the candidate list.
fn reverse_names(hostname: &str) -> Vec<String> {
    let ips: Vec<IpAddr> = match dns_lookup::lookup_host(hostname) {
        Ok(ips) => ips,
        Err(e) => {
            debug!("forward lookup of {hostname} failed: {e}");
            return Vec::new();
        }
    };

    ips.iter()
        .filter_map(|ip| match dns_lookup::lookup_addr(ip) {
            Ok(name) => Some(name),
            Err(e) => {
                debug!("reverse lookup of {ip} failed: {e}");
                None
            }
        })
        .collect()
}

/// Picks the first candidate that looks fully qualified, falling back to the hostname.
///
/// A candidate qualifies when it contains a dot and is not just an address
/// in text form (reverse lookups answer with the numeric form when no PTR exists).
pub fn pick_fqdn<I>(hostname: &str, candidates: I) -> String
where
    I: IntoIterator<Item = String>,
{
    candidates
        .into_iter()
        .find(|name| name.contains('.') && name.parse::<IpAddr>().is_err())
        .unwrap_or_else(|| hostname.to_string())
}
