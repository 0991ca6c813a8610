use std::io::{BufWriter, Stdout, Write};

use embedded_io::ErrorType;

/// Buffered stdout exposed as an `embedded_io` sink.
pub struct StdoutWriter {
    out: BufWriter<Stdout>,
}

impl StdoutWriter {
    pub fn new() -> Self {
        StdoutWriter {
            out: BufWriter::new(std::io::stdout()),
        }
    }
}

impl Default for StdoutWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl ErrorType for StdoutWriter {
    type Error = std::io::Error;
}

impl embedded_io::Write for StdoutWriter {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.out.write(buf)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.out.flush()
    }
}
