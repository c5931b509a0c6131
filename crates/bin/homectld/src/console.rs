//! Operator console: status lines on stdout, failures on stderr, and the
//! interactive password prompt.

use std::future::Future;
use std::io::{self, Stderr, Stdout, Write};
use std::sync::{Mutex, PoisonError};

use tokio::io::{AsyncBufReadExt as _, BufReader, Lines, Stdin};

use homectl_app::ports::StatusSink;

/// [`StatusSink`] writing status lines to `out` and failures to `err`.
///
/// A failed write is logged and dropped; a closed stream never stops the run.
pub struct LineSink<O, E> {
    out: Mutex<O>,
    err: Mutex<E>,
}

/// Sink bound to the process's standard streams.
pub type ConsoleSink = LineSink<Stdout, Stderr>;

impl ConsoleSink {
    #[must_use]
    pub fn stdio() -> Self {
        Self::new(io::stdout(), io::stderr())
    }
}

impl<O, E> LineSink<O, E> {
    pub fn new(out: O, err: E) -> Self {
        Self {
            out: Mutex::new(out),
            err: Mutex::new(err),
        }
    }

    /// Give back the underlying writers.
    pub fn into_inner(self) -> (O, E) {
        (
            self.out.into_inner().unwrap_or_else(PoisonError::into_inner),
            self.err.into_inner().unwrap_or_else(PoisonError::into_inner),
        )
    }
}

fn write_line(writer: &Mutex<impl Write>, stream: &'static str, line: &str) {
    let mut writer = writer.lock().unwrap_or_else(PoisonError::into_inner);
    if let Err(err) = writeln!(writer, "{line}").and_then(|()| writer.flush()) {
        tracing::warn!(stream, error = %err, "failed to write console line");
    }
}

impl<O, E> StatusSink for LineSink<O, E>
where
    O: Write + Send,
    E: Write + Send,
{
    fn emit(&self, line: &str) {
        write_line(&self.out, "stdout", line);
    }

    fn emit_error(&self, line: &str) {
        write_line(&self.err, "stderr", line);
    }
}

/// Source of the password typed for a login attempt.
pub trait PasswordPrompt {
    /// Ask for `username`'s password and return the first whitespace
    /// separated token typed. Returns an empty string when nothing can be
    /// read.
    fn read_password(&mut self, username: &str) -> impl Future<Output = String> + Send;
}

/// Reads passwords from standard input.
pub struct StdinPrompt {
    lines: Lines<BufReader<Stdin>>,
}

impl Default for StdinPrompt {
    fn default() -> Self {
        Self::new()
    }
}

impl StdinPrompt {
    #[must_use]
    pub fn new() -> Self {
        Self {
            lines: BufReader::new(tokio::io::stdin()).lines(),
        }
    }
}

impl PasswordPrompt for StdinPrompt {
    async fn read_password(&mut self, username: &str) -> String {
        {
            let mut stdout = io::stdout().lock();
            let prompted = write!(stdout, "Enter password for {username}: ").and_then(|()| stdout.flush());
            if let Err(err) = prompted {
                tracing::warn!(error = %err, "failed to write password prompt");
            }
        }
        match self.lines.next_line().await {
            Ok(Some(line)) => first_token(&line),
            Ok(None) => {
                tracing::warn!("standard input closed before a password was entered");
                String::new()
            }
            Err(err) => {
                tracing::warn!(error = %err, "failed to read password");
                String::new()
            }
        }
    }
}

fn first_token(line: &str) -> String {
    line.split_whitespace().next().unwrap_or_default().to_string()
}
