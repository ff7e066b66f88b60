//! Common utilities
//!
//! Status reporting on stderr. stdout is reserved for machine-readable output.

use colored::Colorize;
use std::io::IsTerminal;

/// How much status output to print
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum Verbosity {
    Quiet,
    #[default]
    Normal,
    Verbose,
}

impl Verbosity {
    /// Resolve the `--quiet` / `--verbose` pair; quiet wins
    pub fn from_flags(quiet: bool, verbose: bool) -> Self {
        if quiet {
            Verbosity::Quiet
        } else if verbose {
            Verbosity::Verbose
        } else {
            Verbosity::Normal
        }
    }
}

/// Prints status lines to stderr according to the verbosity level
#[derive(Debug, Clone, Copy, Default)]
pub struct Reporter {
    verbosity: Verbosity,
}

impl Reporter {
    pub fn new(verbosity: Verbosity, color: bool) -> Self {
        if !color || !std::io::stderr().is_terminal() {
            colored::control::set_override(false);
        }
        Self { verbosity }
    }

    /// Reporter that prints nothing
    #[cfg(test)]
    pub fn silent() -> Self {
        Self {
            verbosity: Verbosity::Quiet,
        }
    }

    /// Progress line, shown unless quiet
    pub fn status(&self, message: impl AsRef<str>) {
        if self.verbosity >= Verbosity::Normal {
            eprintln!("{}", message.as_ref());
        }
    }

    /// Highlighted progress line for a completed output file
    pub fn done(&self, message: impl AsRef<str>) {
        if self.verbosity >= Verbosity::Normal {
            eprintln!("{} {}", "✓".green(), message.as_ref());
        }
    }

    /// Detail line, shown only in verbose mode
    pub fn detail(&self, message: impl AsRef<str>) {
        if self.verbosity >= Verbosity::Verbose {
            eprintln!("  {}", message.as_ref().dimmed());
        }
    }

    /// Non-fatal warning, shown unless quiet
    pub fn warn(&self, message: impl AsRef<str>) {
        if self.verbosity >= Verbosity::Normal {
            eprintln!("{} {}", "warning:".yellow().bold(), message.as_ref());
        }
    }
}
