//! Driver session.
//!
//! A session owns the diagnostic handler for a run. In file mode one scan
//! fills it; in prompt mode it is reported and reset after every line, so an
//! error on one line never affects the next.

use std::io::{BufRead, Write};
use std::path::Path;

use lox_lex::{Scanner, Token};
use lox_util::Handler;
use tracing::{debug, info};

use crate::error::{DriverError, Result};
use crate::{Config, EmitFormat, ExitStatus};

/// Prompt printed before each line in interactive mode.
pub const PROMPT: &str = "> ";

/// State for one driver run
pub struct Session {
    config: Config,
    diagnostics: Handler,
}

impl Session {
    /// Creates a session with an empty diagnostic handler.
    pub fn new(config: Config) -> Self {
        Self {
            config,
            diagnostics: Handler::new(),
        }
    }

    /// The configuration this session runs with.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Diagnostics recorded so far.
    pub fn diagnostics(&self) -> &Handler {
        &self.diagnostics
    }

    /// Runs the configured script, or the prompt when there is none.
    ///
    /// `input` is only read in prompt mode.
    pub fn run<R, W, E>(&self, input: R, out: &mut W, err: &mut E) -> Result<ExitStatus>
    where
        R: BufRead,
        W: Write,
        E: Write,
    {
        match &self.config.script {
            Some(path) => self.run_file(path, out, err),
            None => self.run_prompt(input, out, err),
        }
    }

    /// Scans the file at `path`, prints its tokens and reports diagnostics.
    ///
    /// Returns [`ExitStatus::DataError`] if any lexical error was found.
    pub fn run_file<W: Write, E: Write>(
        &self,
        path: &Path,
        out: &mut W,
        err: &mut E,
    ) -> Result<ExitStatus> {
        info!(path = %path.display(), "scanning script");
        let source = std::fs::read_to_string(path).map_err(|source| DriverError::ReadScript {
            path: path.to_path_buf(),
            source,
        })?;

        self.run_source(&source, out)?;
        self.diagnostics.report(err)?;

        if self.diagnostics.has_errors() {
            debug!(errors = self.diagnostics.error_count(), "script had lexical errors");
            Ok(ExitStatus::DataError)
        } else {
            Ok(ExitStatus::Success)
        }
    }

    /// Reads lines from `input` until end of input, scanning each one.
    ///
    /// Lexical errors are reported after the line they occur on and do not
    /// end the session.
    pub fn run_prompt<R: BufRead, W: Write, E: Write>(
        &self,
        mut input: R,
        out: &mut W,
        err: &mut E,
    ) -> Result<ExitStatus> {
        info!("starting interactive prompt");
        let mut line = String::new();

        loop {
            write!(out, "{}", PROMPT)?;
            out.flush()?;

            line.clear();
            if input.read_line(&mut line)? == 0 {
                writeln!(out)?;
                break;
            }

            // The terminator is not part of the entered line.
            self.run_source(line.trim_end_matches(['\n', '\r']), out)?;
            self.diagnostics.report(err)?;
            self.diagnostics.reset();
        }

        Ok(ExitStatus::Success)
    }

    /// Scans `source` into the session handler and prints the tokens.
    pub fn run_source<W: Write>(&self, source: &str, out: &mut W) -> Result<()> {
        let tokens = self.scan(source);
        emit_tokens(&tokens, self.config.emit, out)
    }

    /// Scans `source` with this session's scanner options.
    pub fn scan(&self, source: &str) -> Vec<Token> {
        let tokens =
            Scanner::with_config(source, &self.diagnostics, self.config.scan).scan_tokens();
        debug!(tokens = tokens.len(), "scanned source");
        tokens
    }
}

/// Writes `tokens` to `out` in the given format.
pub fn emit_tokens<W: Write>(tokens: &[Token], format: EmitFormat, out: &mut W) -> Result<()> {
    match format {
        EmitFormat::Tokens => {
            for token in tokens {
                writeln!(out, "{}", token)?;
            }
        },
        EmitFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, tokens)?;
            writeln!(out)?;
        },
        EmitFormat::None => {},
    }
    Ok(())
}
