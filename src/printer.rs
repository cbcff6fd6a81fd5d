//! Single-line status output.

use std::io::{self, Write};

/// Writes status lines over one another on a single console line.
///
/// Each new line is preceded by a carriage return and padded with spaces out
/// to the width of the previous one, so no stale characters survive a redraw.
/// A `Printer` owns its stream; two printers sharing one terminal will
/// interleave unpredictably.
pub struct Printer<W> {
    out: W,
    /// Width, in characters, of the last line printed.
    last_len: usize,
}

impl<W: Write> Printer<W> {
    /// A printer over the given stream, with nothing printed yet.
    pub fn new(out: W) -> Printer<W> {
        Printer { out, last_len: 0 }
    }

    /// Overwrite the current line with `line` and flush.
    pub fn print_status(&mut self, line: &str) -> io::Result<()> {
        let len = line.chars().count();
        let pad = self.last_len.saturating_sub(len);

        // A failed write may leave either line partly on screen.
        self.last_len = self.last_len.max(len);

        write!(self.out, "\r{}{:pad$}", line, "", pad = pad)?;
        self.out.flush()?;
        self.last_len = len;
        Ok(())
    }

    /// Blank out the current line and return the cursor to its start.
    pub fn clear(&mut self) -> io::Result<()> {
        self.print_status("")?;
        self.out.write_all(b"\r")?;
        self.out.flush()
    }

    /// End the current line so later output starts fresh.
    pub fn newline(&mut self) -> io::Result<()> {
        self.out.write_all(b"\n")?;
        self.out.flush()?;
        self.last_len = 0;
        Ok(())
    }

    /// Width of the last line printed.
    pub fn last_len(&self) -> usize {
        self.last_len
    }

    /// The underlying stream.
    pub fn get_ref(&self) -> &W {
        &self.out
    }

    /// Give back the underlying stream.
    pub fn into_inner(self) -> W {
        self.out
    }
}
