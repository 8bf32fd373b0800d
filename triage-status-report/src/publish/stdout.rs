//! Dry-run sink.

use super::{MessageSink, PublishError, PublishOutcome};
use std::io::{self, Write};
use tracing::debug;

/// Writes the report verbatim instead of sending it anywhere.
#[derive(Debug)]
pub struct StdoutSink<W = io::Stdout> {
    writer: W,
}

impl StdoutSink {
    /// Creates a sink writing to standard output.
    #[must_use]
    pub fn stdout() -> Self {
        Self {
            writer: io::stdout(),
        }
    }
}

impl<W: Write> StdoutSink<W> {
    /// Creates a sink writing to `writer`.
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Returns the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> MessageSink for StdoutSink<W> {
    async fn publish(&mut self, text: &str) -> Result<PublishOutcome, PublishError> {
        debug!(bytes = text.len(), "Dry run, printing report");
        self.writer.write_all(text.as_bytes())?;
        self.writer.flush()?;
        Ok(PublishOutcome::Printed)
    }
}
