use crate::error::IdentityError;

/// Defines the contract for reading the identity of the local machine.
pub trait IdentityRepository {
    /// The short, locally configured name of the machine.
    fn hostname(&self) -> Result<String, IdentityError>;

    /// The fully qualified name. Equal to the hostname when no domain applies.
    fn fqdn(&self) -> Result<String, IdentityError>;
}
