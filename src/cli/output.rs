//! Colored status lines for stderr
//!
//! NO_COLOR, CLICOLOR and CLICOLOR_FORCE are honored by the colored crate.

use colored::Colorize;

/// Red bold "error:" prefix
pub fn error(msg: &(impl std::fmt::Display + ?Sized)) {
    eprintln!("{}: {}", "error".red().bold(), msg);
}

/// Yellow "Warning:" prefix
pub fn warning(msg: &(impl std::fmt::Display + ?Sized)) {
    eprintln!("{}: {}", "Warning".yellow(), msg);
}
