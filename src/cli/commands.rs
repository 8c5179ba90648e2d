//! CLI command implementations
//!
//! All command functions return `CliResult<ExitCode>` instead of calling
//! `process::exit`. Error handling and exits happen in the top-level `run()`.

use std::fs;
use std::path::{Path, PathBuf};

use goc_syntax::diagnostics::{self, CompileError};
use goc_syntax::{lexer, parser};

use super::{CliError, CliResult, ExitCode};
use crate::emit::{self, EmitConfig};

/// Maximum source file size (100 MB)
///
/// Files larger than this are rejected to prevent out-of-memory conditions
/// during translation.
const MAX_SOURCE_SIZE: u64 = 100 * 1024 * 1024;

/// Settings for [`translate_file`].
#[derive(Debug, Clone, Default)]
pub struct TranslateOptions {
    /// Print the parsed tree (`Debug` pretty form) to stdout first.
    pub dump_ast: bool,
    /// Write the C text here instead of stdout.
    pub output: Option<PathBuf>,
    pub config: EmitConfig,
}

/// Read source file contents.
///
/// ## Errors
///
/// Returns an error if:
/// - The file cannot be read (I/O error)
/// - The file exceeds `MAX_SOURCE_SIZE` (100 MB)
pub fn read_source(file_path: &Path) -> CliResult<String> {
    let shown = file_path.display();
    let metadata =
        fs::metadata(file_path).map_err(|e| CliError::failure(format!("Cannot access file '{}': {}", shown, e)))?;

    if metadata.len() > MAX_SOURCE_SIZE {
        return Err(CliError::failure(format!(
            "Source file '{}' is too large ({} bytes, max {} bytes)",
            shown,
            metadata.len(),
            MAX_SOURCE_SIZE
        )));
    }

    fs::read_to_string(file_path).map_err(|e| CliError::failure(format!("Error reading file '{}': {}", shown, e)))
}

/// Render every error with source context into one CLI error.
fn diagnostics_error(file_path: &Path, source: &str, errs: &[CompileError]) -> CliError {
    let name = file_path.to_string_lossy();
    let mut msg = String::new();
    for err in errs {
        msg.push_str(&diagnostics::format_error(&name, source, err));
    }
    CliError::failure(msg.trim_end())
}

/// Lex and display tokens.
pub fn dump_tokens(file_path: &Path) -> CliResult<ExitCode> {
    let source = read_source(file_path)?;
    let tokens = lexer::lex(&source).map_err(|errs| diagnostics_error(file_path, &source, &errs))?;

    for tok in &tokens {
        println!("{:?}", tok);
    }
    Ok(ExitCode::SUCCESS)
}

/// Translate `source` to C, optionally dumping the tree first.
///
/// Split from [`translate_file`] so the whole pipeline can be driven without touching the disk.
pub fn translate_source(file_path: &Path, source: &str, options: &TranslateOptions) -> CliResult<String> {
    let tokens = lexer::lex(source).map_err(|errs| diagnostics_error(file_path, source, &errs))?;
    let ast = parser::parse(&tokens).map_err(|errs| diagnostics_error(file_path, source, &errs))?;

    if options.dump_ast {
        println!("{:#?}", ast);
    }

    emit::emit_source_file(&ast, options.config.clone())
        .map_err(|err| diagnostics_error(file_path, source, &[CompileError::from(err)]))
}

/// Translate a file and write the C text to stdout or `options.output`.
pub fn translate_file(file_path: &Path, options: &TranslateOptions) -> CliResult<ExitCode> {
    let source = read_source(file_path)?;
    let c_code = translate_source(file_path, &source, options)?;

    match &options.output {
        Some(out) => {
            fs::write(out, &c_code)
                .map_err(|e| CliError::failure(format!("Error writing '{}': {}", out.display(), e)))?;
            tracing::info!(output = %out.display(), bytes = c_code.len(), "wrote C output");
        }
        None => print!("{}", c_code),
    }
    Ok(ExitCode::SUCCESS)
}
