use std::net::IpAddr;

/// The unique addresses a name resolved to, IPv4 and IPv6 mixed.
///
/// Keeps the order in which addresses were first seen so that probing
/// follows the resolver's output. Duplicates are dropped on insertion.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressSet {
    addrs: Vec<IpAddr>,
}

impl AddressSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `ip` unless it is already present. Returns whether it was added.
    pub fn insert(&mut self, ip: IpAddr) -> bool {
        if self.addrs.contains(&ip) {
            return false;
        }
        self.addrs.push(ip);
        true
    }

    pub fn contains(&self, ip: &IpAddr) -> bool {
        self.addrs.contains(ip)
    }

    pub fn len(&self) -> usize {
        self.addrs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.addrs.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, IpAddr> {
        self.addrs.iter()
    }
}

impl FromIterator<IpAddr> for AddressSet {
    fn from_iter<I: IntoIterator<Item = IpAddr>>(iter: I) -> Self {
        let mut set = AddressSet::new();
        for ip in iter {
            set.insert(ip);
        }
        set
    }
}

impl<'a> IntoIterator for &'a AddressSet {
    type Item = &'a IpAddr;
    type IntoIter = std::slice::Iter<'a, IpAddr>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
