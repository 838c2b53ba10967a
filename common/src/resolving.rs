use async_trait::async_trait;

use crate::network::address::AddressSet;

/// Forward resolution of a DNS name to every address it maps to.
#[async_trait]
pub trait NameResolver: Send + Sync {
    /// Returns the unique IPv4 and IPv6 addresses of `name`.
    ///
    /// A name that does not resolve yields an empty set, not an error.
    async fn resolve(&self, name: &str) -> AddressSet;
}
