//! # Reachability Prober
//!
//! Pings go through the platform `ping` binary rather than raw ICMP sockets,
//! so no privileges are needed. The only platform difference is the flag
//! that limits the echo count, which is kept in [`COUNT_FLAGS`].

use std::io;
use std::process::{ExitStatus, Stdio};

use async_trait::async_trait;
use thiserror::Error;
use tokio::process::Command;
use tracing::{debug, error};

use hostcheck_common::probing::Prober;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OsFamily {
    Windows,
    Unix,
}

impl OsFamily {
    pub fn current() -> Self {
        if cfg!(windows) { OsFamily::Windows } else { OsFamily::Unix }
    }
}

/// Echo-count flag per OS family.
pub const COUNT_FLAGS: &[(OsFamily, &str)] = &[(OsFamily::Windows, "-n"), (OsFamily::Unix, "-c")];

const ECHO_COUNT: &str = "1";

#[derive(Debug, Error)]
pub enum ProbeError {
    #[error("failed to launch {program}: {source}")]
    Launch {
        program: String,
        #[source]
        source: io::Error,
    },
}

/// How to invoke a single-echo ping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PingCommand {
    program: String,
    count_flag: &'static str,
}

impl PingCommand {
    pub fn for_family(family: OsFamily) -> Self {
        let count_flag = COUNT_FLAGS
            .iter()
            .find(|(f, _)| *f == family)
            .map(|(_, flag)| *flag)
            .unwrap_or("-c");

        Self {
            program: String::from("ping"),
            count_flag,
        }
    }

    /// Replaces the executable, keeping the arguments.
    pub fn with_program(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn args(&self, target: &str) -> [String; 3] {
        [
            self.count_flag.to_string(),
            ECHO_COUNT.to_string(),
            target.to_string(),
        ]
    }
}

impl Default for PingCommand {
    fn default() -> Self {
        Self::for_family(OsFamily::current())
    }
}

/// [`Prober`] backed by an external ping process.
#[derive(Debug, Clone, Default)]
pub struct PingProber {
    command: PingCommand,
}

impl PingProber {
    pub fn new(command: PingCommand) -> Self {
        Self { command }
    }

    async fn run(&self, target: &str) -> Result<ExitStatus, ProbeError> {
        let args = self.command.args(target);
        debug!("running {} {}", self.command.program(), args.join(" "));

        Command::new(self.command.program())
            .args(&args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .await
            .map_err(|source| ProbeError::Launch {
                program: self.command.program().to_string(),
                source,
            })
    }
}

#[async_trait]
impl Prober for PingProber {
    async fn probe(&self, target: &str) -> bool {
        match self.run(target).await {
            Ok(status) => {
                debug!("ping {target} exited with {status}");
                status.success()
            }
            Err(e) => {
                error!("Error pinging {target}: {e}");
                false
            }
        }
    }
}
