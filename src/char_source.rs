use crate::source::CodeSource;
use log::trace;
use std::io::{self, BufRead, BufReader, Read};

/// Adapts any [`BufRead`] into a [`CodeSource`].
///
/// Input is pulled one line at a time into an internal string, so character
/// reads and line reads can be mixed freely: a line read after some character
/// reads returns whatever is left of the current line.
pub struct CharSource<R> {
    reader: R,
    line: String,
    pos: usize,
}

impl<R: Read> CharSource<BufReader<R>> {
    /// Wraps a plain reader in a [`BufReader`] first.
    pub fn new(reader: R) -> Self {
        Self::from_buf_read(BufReader::with_capacity(4096, reader))
    }
}

impl<R: BufRead> CharSource<R> {
    pub fn from_buf_read(reader: R) -> Self {
        Self {
            reader,
            line: String::new(),
            pos: 0,
        }
    }

    /// Returns the wrapped reader. Any part of the current line that has not
    /// been read yet is dropped.
    pub fn into_inner(self) -> R {
        self.reader
    }

    // Returns false once the underlying reader is exhausted.
    fn fill_line_if_needed(&mut self) -> io::Result<bool> {
        while self.pos >= self.line.len() {
            self.line.clear();
            self.pos = 0;
            let bytes_read = self.reader.read_line(&mut self.line)?;
            if bytes_read == 0 {
                return Ok(false);
            }
            trace!("buffered line of {} bytes", bytes_read);
        }
        Ok(true)
    }
}

impl<R: BufRead> CodeSource for CharSource<R> {
    fn read_code(&mut self) -> io::Result<Option<u32>> {
        if !self.fill_line_if_needed()? {
            return Ok(None);
        }
        let Some(c) = self.line[self.pos..].chars().next() else {
            return Ok(None);
        };
        self.pos += c.len_utf8();
        Ok(Some(u32::from(c)))
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        if !self.fill_line_if_needed()? {
            return Ok(None);
        }
        let mut rest = self.line.split_off(self.pos);
        self.line.clear();
        self.pos = 0;
        strip_line_ending(&mut rest);
        Ok(Some(rest))
    }
}

fn strip_line_ending(line: &mut String) {
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
}
