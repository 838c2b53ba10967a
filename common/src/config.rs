pub struct Config {
    /// Prints the report without ANSI colors.
    ///
    /// Colors are also dropped when stdout is not a terminal.
    pub no_color: bool,
    /// How chatty diagnostics on stderr are. `0` keeps warnings and errors only.
    pub verbosity: u8,
}
