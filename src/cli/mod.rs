//! CLI module for the goc translator
//!
//! This module provides the command-line interface.
//!
//! ## Usage
//!
//! - `goc <file>` - translate a Go-subset file to C on stdout
//! - `goc <file> -o out.c` - write the C text to a file
//! - `goc --ast <file>` - dump the parsed tree before the C text
//! - `goc --tokens <file>` - dump the token stream (debug)
//!
//! ## Design
//!
//! The CLI uses clap for argument parsing with derive macros.
//! Command functions return `CliResult<T>` instead of calling `process::exit`.
//! Only the top-level `run()` function handles errors and exits.

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod commands;

use std::fmt;
use std::path::PathBuf;
use std::process;

use clap::Parser;

use crate::emit::EmitConfig;

// ============================================================================
// CLI Error handling
// ============================================================================

/// Exit code for CLI operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCode(pub i32);

impl ExitCode {
    pub const SUCCESS: ExitCode = ExitCode(0);
    pub const FAILURE: ExitCode = ExitCode(1);
}

/// Error type for CLI operations.
///
/// Contains a user-facing message and an exit code. The CLI entry point
/// catches these errors, prints the message, and exits with the code.
#[derive(Debug)]
pub struct CliError {
    /// User-facing error message (already formatted for display)
    pub message: String,
    /// Exit code to return to the shell
    pub exit_code: ExitCode,
}

impl CliError {
    /// Create a new CLI error with a message and exit code.
    pub fn new(message: impl Into<String>, exit_code: ExitCode) -> Self {
        Self {
            message: message.into(),
            exit_code,
        }
    }

    /// Create a failure error (exit code 1).
    pub fn failure(message: impl Into<String>) -> Self {
        Self::new(message, ExitCode::FAILURE)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

const VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================================================
// Clap CLI definition
// ============================================================================

/// Translate a subset of Go into C source
#[derive(Parser, Debug)]
#[command(name = "goc")]
#[command(version = VERSION)]
#[command(about = "Translate a subset of Go into C source", long_about = None)]
pub struct Cli {
    /// Go source file to translate
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Print the parsed syntax tree before the C output
    #[arg(long)]
    pub ast: bool,

    /// Print the token stream instead of translating (debug)
    #[arg(long, conflicts_with_all = ["ast", "output"])]
    pub tokens: bool,

    /// Write the C output to FILE instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Spaces per indentation level in the C output
    #[arg(long, value_name = "N", default_value_t = 4)]
    pub indent_width: usize,
}

impl Cli {
    /// Emission settings selected on the command line.
    pub fn emit_config(&self) -> EmitConfig {
        EmitConfig::new().with_indent_width(self.indent_width)
    }
}

// ============================================================================
// CLI entry point
// ============================================================================

/// Main CLI entry point.
///
/// This is the only place where `process::exit` is called. All command
/// implementations return `CliResult` and errors are handled here.
pub fn run() {
    let cli = Cli::parse();

    match execute(cli) {
        Ok(exit_code) => {
            if exit_code.0 != 0 {
                process::exit(exit_code.0);
            }
        }
        Err(e) => {
            if !e.message.is_empty() {
                eprintln!("{}", e.message);
            }
            process::exit(e.exit_code.0);
        }
    }
}

/// Execute the CLI command and return result.
pub fn execute(cli: Cli) -> CliResult<ExitCode> {
    if cli.tokens {
        return commands::dump_tokens(&cli.file);
    }

    let options = commands::TranslateOptions {
        dump_ast: cli.ast,
        output: cli.output.clone(),
        config: cli.emit_config(),
    };
    commands::translate_file(&cli.file, &options)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_file() {
        let cli = Cli::try_parse_from(["goc", "main.go"]).unwrap();
        assert_eq!(cli.file, PathBuf::from("main.go"));
        assert!(!cli.ast);
        assert!(!cli.tokens);
        assert!(cli.output.is_none());
        assert_eq!(cli.indent_width, 4);
    }

    #[test]
    fn test_cli_requires_file() {
        assert!(Cli::try_parse_from(["goc"]).is_err());
    }

    #[test]
    fn test_cli_parse_ast_and_output() {
        let cli = Cli::try_parse_from(["goc", "--ast", "main.go", "-o", "main.c"]).unwrap();
        assert!(cli.ast);
        assert_eq!(cli.output, Some(PathBuf::from("main.c")));
    }

    #[test]
    fn test_cli_parse_indent_width() {
        let cli = Cli::try_parse_from(["goc", "--indent-width", "2", "main.go"]).unwrap();
        assert_eq!(cli.emit_config().indent_width, 2);
    }

    #[test]
    fn test_cli_tokens_conflicts_with_output() {
        assert!(Cli::try_parse_from(["goc", "--tokens", "main.go", "-o", "x.c"]).is_err());
        let cli = Cli::try_parse_from(["goc", "--tokens", "main.go"]).unwrap();
        assert!(cli.tokens);
    }

    #[test]
    fn test_execute_missing_file_fails() {
        let cli = Cli::try_parse_from(["goc", "definitely/not/here.go"]).unwrap();
        let err = execute(cli).unwrap_err();
        assert_eq!(err.exit_code, ExitCode::FAILURE);
        assert!(err.message.contains("Cannot access file"));
    }
}
