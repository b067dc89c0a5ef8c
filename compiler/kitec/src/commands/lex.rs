//! `kite lex <file>`: tokenize a file and print every token.

use std::io::Write;
use std::path::Path;

use tracing::info;

use super::{write_tokens, CommandError, LexSummary};

/// Read `path` as raw bytes and write its token listing to `out`.
///
/// The file does not need to be valid UTF-8; bytes the scanner does not
/// recognize come back as [`LexSummary::errors`].
pub fn lex_file(path: &Path, out: &mut impl Write) -> Result<LexSummary, CommandError> {
    let source = std::fs::read(path).map_err(|source| CommandError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;
    info!(path = %path.display(), bytes = source.len(), "lexing file");
    let summary = write_tokens(&source, out)?;
    info!(
        tokens = summary.tokens,
        errors = summary.errors.len(),
        "lexed file"
    );
    Ok(summary)
}
