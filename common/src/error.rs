use std::io;

use thiserror::Error;

/// Failures while asking the OS who this machine is.
///
/// These are the only fatal errors of a run: without a hostname there is
/// nothing to check.
#[derive(Debug, Error)]
pub enum IdentityError {
    #[error("failed to read the local hostname")]
    Hostname(#[source] io::Error),
    #[error("the local hostname is empty")]
    EmptyHostname,
}
