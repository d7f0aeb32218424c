//! NDJSON (newline-delimited JSON) stream sink.
//!
//! Each person is serialized directly to the writer without an intermediate
//! `String`.
//!
//! ```ignore
//! let mut sink = NdjsonSink::new(io::stdout().lock());
//! sink.write_all(&people)?;
//! let rows = sink.finish()?;
//! ```

use kin_core::Person;
use serde::Serialize;
use std::io::{self, BufWriter, Write};

/// Buffered NDJSON writer, one person per line.
pub struct NdjsonSink<W: Write> {
    writer: BufWriter<W>,
    rows_written: usize,
}

impl<W: Write> NdjsonSink<W> {
    /// Create a sink wrapping any writer (file, Vec<u8>, etc.).
    pub fn new(writer: W) -> Self {
        Self {
            writer: BufWriter::with_capacity(64 * 1024, writer),
            rows_written: 0,
        }
    }

    /// Write one person as a single JSON line.
    pub fn write_person<H: Serialize>(&mut self, person: &Person<H>) -> io::Result<()> {
        serde_json::to_writer(&mut self.writer, person).map_err(io::Error::other)?;
        self.writer.write_all(b"\n")?;
        self.rows_written += 1;
        Ok(())
    }

    /// Write every person, in slice order.
    pub fn write_all<H: Serialize>(&mut self, people: &[Person<H>]) -> io::Result<()> {
        for person in people {
            self.write_person(person)?;
        }
        Ok(())
    }

    /// Flush and return how many rows were written.
    pub fn finish(mut self) -> io::Result<usize> {
        self.writer.flush()?;
        Ok(self.rows_written)
    }

    /// Number of rows written so far.
    pub fn rows_written(&self) -> usize {
        self.rows_written
    }
}
