// output_writer.rs
use std::io::{self, Write};

/// Writes read results one per line.
pub struct OutputWriter<W: Write> {
    writer: W,
    encode_buf: [u8; 4],
}

impl<W: Write> OutputWriter<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            encode_buf: [0u8; 4],
        }
    }

    pub fn write_char(&mut self, c: char) -> io::Result<()> {
        let encoded = c.encode_utf8(&mut self.encode_buf);
        self.writer.write_all(encoded.as_bytes())?;
        self.writer.write_all(b"\n")
    }

    pub fn write_code(&mut self, code: u32) -> io::Result<()> {
        writeln!(self.writer, "{}", code)
    }

    pub fn write_line(&mut self, line: &str) -> io::Result<()> {
        self.writer.write_all(line.as_bytes())?;
        self.writer.write_all(b"\n")
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }

    #[cfg(test)]
    fn into_inner(self) -> W {
        self.writer
    }
}
