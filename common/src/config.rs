use std::path::PathBuf;

/// Data file used when none is given on the command line.
pub const DEFAULT_DATA_FILE: &str = "data.json";

pub struct Config {
    /// Where the registry is loaded from and saved to.
    pub data_file: PathBuf,
    /// Suppresses the banner and section headers.
    ///
    /// Does not silence menu output or warnings.
    pub quiet: u8,
    /// Number of `-v` flags given.
    pub verbosity: u8,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
            quiet: 0,
            verbosity: 0,
        }
    }
}

impl Config {
    /// Log filter directive matching the requested verbosity.
    ///
    /// Plain program output is always let through.
    pub fn log_directive(&self) -> String {
        let level: &str = match self.verbosity {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };
        format!("{level},roster::print=info,roster::success=info")
    }
}
