//! Line-oriented terminal I/O.

use std::io::{self, BufRead, Write};
use tracing::{debug, instrument};

/// Pairs an input source with an output sink.
///
/// Generic so tests can drive a session from an in-memory script.
#[derive(Debug)]
pub struct Console<R, W> {
    reader: R,
    writer: W,
}

impl Console<io::StdinLock<'static>, io::Stdout> {
    /// Console bound to the process stdin and stdout.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Creates a console over the given reader and writer.
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Prints one line.
    pub fn say(&mut self, line: impl AsRef<str>) -> io::Result<()> {
        writeln!(self.writer, "{}", line.as_ref())
    }

    /// Prints `prompt` without a newline and reads the answer.
    ///
    /// The line terminator is stripped. Returns `None` at end of input.
    #[instrument(skip(self))]
    pub fn ask(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.writer, "{}", prompt)?;
        self.writer.flush()?;

        let mut bytes = Vec::new();
        if self.reader.read_until(b'\n', &mut bytes)? == 0 {
            debug!("End of input");
            return Ok(None);
        }
        // Undecodable bytes become U+FFFD and fail parsing like any other typo.
        let line = String::from_utf8(bytes).unwrap_or_else(|err| {
            debug!(error = %err, "Input is not valid UTF-8");
            String::from_utf8_lossy(err.as_bytes()).into_owned()
        });
        let trimmed = line.strip_suffix('\n').unwrap_or(&line);
        let trimmed = trimmed.strip_suffix('\r').unwrap_or(trimmed);
        Ok(Some(trimmed.to_string()))
    }

    /// Consumes the console, returning the writer.
    pub fn into_writer(self) -> W {
        self.writer
    }
}
