//! Command handlers for the Kite CLI.
//!
//! Each submodule implements one CLI command. Shared pieces (the error type
//! and token printing) live here in the module root.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use kite_lexer::{LexError, Scanner};
use thiserror::Error;

mod lex;
mod repl;

pub use lex::lex_file;
pub use repl::{run_repl, ReplConfig};

/// Failure of a CLI command.
///
/// Illegal characters are not command failures; they are reported through
/// [`LexSummary::errors`].
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("{}", read_error_message(.path, .source))]
    ReadFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("unknown option '{0}'")]
    UnknownOption(String),
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

fn read_error_message(path: &Path, err: &io::Error) -> String {
    let path = path.display();
    match err.kind() {
        io::ErrorKind::NotFound => format!("cannot find file '{path}'"),
        io::ErrorKind::PermissionDenied => format!("permission denied reading '{path}'"),
        _ => format!("error reading '{path}': {err}"),
    }
}

/// Outcome of scanning one source to exhaustion.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LexSummary {
    /// Tokens produced before end of input.
    pub tokens: usize,
    /// One entry per illegal character, in source order.
    pub errors: Vec<LexError>,
}

/// Scan `source` and write one line per token, ending with `eof`.
pub fn write_tokens(source: &[u8], out: &mut impl Write) -> io::Result<LexSummary> {
    let mut scanner = Scanner::new(source);
    let mut summary = LexSummary::default();
    loop {
        let tok = scanner.next_token();
        writeln!(out, "{tok}")?;
        if tok.is_eof() {
            return Ok(summary);
        }
        summary.tokens += 1;
        summary.errors.extend(tok.error());
    }
}
