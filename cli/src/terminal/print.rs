use std::io::{self, IsTerminal, Write};

use hostcheck_common::config::Config;
use hostcheck_common::report::{ReportEvent, ReportWriter};

use crate::terminal::format;

pub fn initialize(cfg: &Config) {
    if cfg.no_color || !io::stdout().is_terminal() {
        colored::control::set_override(false);
    }
}

/// Writes the report to stdout, one line per event.
pub struct ConsoleReport;

impl ReportWriter for ConsoleReport {
    fn emit(&mut self, event: ReportEvent<'_>) {
        let mut stdout = io::stdout().lock();
        // a closed pipe must not turn a finished check into a panic
        let _ = writeln!(stdout, "{}", format::colorize(&event));
    }
}
