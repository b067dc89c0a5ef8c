//! Interactive prompt: scan each input line and print its tokens.

use std::io::{BufRead, Write};

use tracing::debug;

use super::{write_tokens, CommandError};

/// Options for [`run_repl`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReplConfig {
    /// Printed before every line is read.
    pub prompt: String,
}

impl Default for ReplConfig {
    fn default() -> Self {
        Self {
            prompt: ">> ".to_string(),
        }
    }
}

impl ReplConfig {
    /// Parse `kite repl` options.
    ///
    /// Accepts `--prompt=<text>`; anything else is rejected.
    pub fn from_args(args: &[String]) -> Result<Self, CommandError> {
        let mut config = Self::default();
        for arg in args {
            if let Some(prompt) = arg.strip_prefix("--prompt=") {
                config.prompt = prompt.to_string();
            } else {
                return Err(CommandError::UnknownOption(arg.clone()));
            }
        }
        Ok(config)
    }
}

/// Read lines from `input` until it is exhausted, printing the tokens of
/// each line to `output`.
///
/// Every line is scanned on its own, so positions restart at `1:1`.
pub fn run_repl(
    mut input: impl BufRead,
    mut output: impl Write,
    config: &ReplConfig,
) -> Result<(), CommandError> {
    let mut line = Vec::new();
    loop {
        write!(output, "{}", config.prompt)?;
        output.flush()?;

        line.clear();
        if input.read_until(b'\n', &mut line)? == 0 {
            // Leave the terminal on a fresh line after Ctrl-D.
            writeln!(output)?;
            return Ok(());
        }

        let summary = write_tokens(&line, &mut output)?;
        debug!(
            tokens = summary.tokens,
            errors = summary.errors.len(),
            "scanned line"
        );
    }
}
