//! Diagnostics on stderr
//!
//! stdout is reserved for rendered result sets, so progress lines, warnings and
//! run summaries go through a Reporter gated by the global --quiet/--verbose flags.

use colored::Colorize;

use crate::core::file_reader::FileWarning;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum Verbosity {
    Quiet,
    #[default]
    Normal,
    Verbose,
}

impl Verbosity {
    /// --quiet wins over --verbose
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

#[derive(Debug, Clone, Copy, Default)]
pub struct Reporter {
    verbosity: Verbosity,
}

impl Reporter {
    pub fn new(verbosity: Verbosity, color: bool) -> Self {
        if !color {
            colored::control::set_override(false);
        }
        Self { verbosity }
    }

    /// Per-file progress, shown only with --verbose
    pub fn detail(&self, message: impl AsRef<str>) {
        if self.verbosity >= Verbosity::Verbose {
            eprintln!("  {}", message.as_ref().dimmed());
        }
    }

    /// Run summary
    pub fn info(&self, message: impl AsRef<str>) {
        if self.verbosity >= Verbosity::Normal {
            eprintln!("{} {}", "✓".green().bold(), message.as_ref());
        }
    }

    pub fn warn(&self, warning: &FileWarning) {
        if self.verbosity >= Verbosity::Normal {
            eprintln!("{}", format_warning(warning));
        }
    }
}

pub fn format_warning(warning: &FileWarning) -> String {
    let mut line = format!(
        "{} [{}] {}",
        "warning:".yellow().bold(),
        warning.code.as_str(),
        warning.message
    );
    if let Some(path) = &warning.path {
        line.push_str(&format!(" ({})", path));
    }
    line
}
