use std::io::{self, BufRead, Write};
use zeroize::Zeroizing;

// Large enough that typical secrets never force the read buffer to reallocate.
const SECRET_BUFFER: usize = 256;

/// Line-oriented console over any reader and writer.
pub struct Console<R, W> {
    input: R,
    out: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub const fn new(input: R, out: W) -> Self {
        Self { input, out }
    }

    /// Print `label` without a newline and read one trimmed line.
    /// Returns `None` at end of input.
    ///
    /// # Errors
    /// Propagates read and write failures.
    pub fn prompt(&mut self, label: &str) -> io::Result<Option<String>> {
        write!(self.out, "{label}")?;
        self.out.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Like [`Console::prompt`], with end of input read as an empty line.
    ///
    /// # Errors
    /// Propagates read and write failures.
    pub fn prompt_or_empty(&mut self, label: &str) -> io::Result<String> {
        Ok(self.prompt(label)?.unwrap_or_default())
    }

    /// Like [`Console::prompt_or_empty`], but the line buffer and the returned
    /// value are wiped when dropped.
    ///
    /// # Errors
    /// Propagates read and write failures.
    pub fn prompt_secret(&mut self, label: &str) -> io::Result<Zeroizing<String>> {
        write!(self.out, "{label}")?;
        self.out.flush()?;
        let mut line = Zeroizing::new(String::with_capacity(SECRET_BUFFER));
        self.input.read_line(&mut line)?;
        Ok(Zeroizing::new(line.trim().to_string()))
    }

    /// # Errors
    /// Propagates write failures.
    pub fn say(&mut self, line: &str) -> io::Result<()> {
        writeln!(self.out, "{line}")
    }

    pub fn into_parts(self) -> (R, W) {
        (self.input, self.out)
    }
}
