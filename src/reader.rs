use crate::error::{ReaderError, Result};
use crate::source::CodeSource;
use log::{debug, trace};

/// Highest code discarded by default. Everything at or below it is treated as
/// a control character.
pub const DEFAULT_THRESHOLD: u32 = 30;

/// How a valid code is turned into a `char`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CharMode {
    /// The code point becomes the character unchanged.
    #[default]
    Widen,
    /// Only the low 8 bits are kept, and the byte is widened back as Latin-1.
    /// Codes above 255 lose information.
    Latin1,
}

impl CharMode {
    fn to_char(self, code: u32) -> char {
        match self {
            CharMode::Widen => char::from_u32(code).unwrap_or(char::REPLACEMENT_CHARACTER),
            CharMode::Latin1 => char::from(code as u8),
        }
    }
}

/// Reads characters, codes and lines from a [`CodeSource`], silently skipping
/// every code at or below the threshold.
///
/// Line reads are not filtered.
///
/// ```
/// use filtered_code_reader::{CharSource, FilteredReader};
/// use std::io::Cursor;
///
/// let mut reader = FilteredReader::new(CharSource::new(Cursor::new("\tA\nB")));
/// assert_eq!(reader.read_char().unwrap(), 'A');
/// assert_eq!(reader.read_char().unwrap(), 'B');
/// ```
pub struct FilteredReader<S> {
    source: S,
    threshold: u32,
    char_mode: CharMode,
}

impl<S: CodeSource> FilteredReader<S> {
    /// Creates a reader with the default threshold and [`CharMode::Widen`].
    pub fn new(source: S) -> FilteredReader<S> {
        FilteredReader::builder(source).build()
    }

    /// Returns a [`FilteredReaderBuilder`] for configuring a new `FilteredReader`.
    pub fn builder(source: S) -> FilteredReaderBuilder<S> {
        FilteredReaderBuilder {
            source,
            threshold: DEFAULT_THRESHOLD,
            char_mode: CharMode::default(),
        }
    }
}

/// A builder for constructing a [`FilteredReader`] with custom settings.
#[must_use]
pub struct FilteredReaderBuilder<S> {
    source: S,
    threshold: u32,
    char_mode: CharMode,
}

impl<S: CodeSource> FilteredReaderBuilder<S> {
    /// Sets the highest code that is discarded. Defaults to [`DEFAULT_THRESHOLD`].
    pub fn threshold(mut self, threshold: u32) -> Self {
        self.threshold = threshold;
        self
    }

    /// Sets how codes become characters. Defaults to [`CharMode::Widen`].
    pub fn char_mode(mut self, char_mode: CharMode) -> Self {
        self.char_mode = char_mode;
        self
    }

    pub fn build(self) -> FilteredReader<S> {
        FilteredReader {
            source: self.source,
            threshold: self.threshold,
            char_mode: self.char_mode,
        }
    }
}

impl<S> FilteredReader<S> {
    pub fn threshold(&self) -> u32 {
        self.threshold
    }

    pub fn char_mode(&self) -> CharMode {
        self.char_mode
    }

    pub fn get_ref(&self) -> &S {
        &self.source
    }

    pub fn get_mut(&mut self) -> &mut S {
        &mut self.source
    }

    /// Unwraps the reader, returning the source. Closing it is up to the caller.
    pub fn into_inner(self) -> S {
        self.source
    }
}

impl<S: CodeSource> FilteredReader<S> {
    /// Reads raw codes until one is above the threshold.
    ///
    /// # Errors
    ///
    /// [`ReaderError::EndOfStream`] if the source runs out first.
    fn next_valid_code(&mut self) -> Result<u32> {
        loop {
            match self.source.read_code()? {
                Some(code) if code > self.threshold => return Ok(code),
                Some(code) => trace!("discarding code {}", code),
                None => return Err(ReaderError::EndOfStream),
            }
        }
    }

    /// Reads the next valid code and converts it according to the [`CharMode`].
    pub fn read_char(&mut self) -> Result<char> {
        let code = self.next_valid_code()?;
        Ok(self.char_mode.to_char(code))
    }

    /// Reads exactly `count` valid characters.
    pub fn read_chars(&mut self, count: usize) -> Result<Vec<char>> {
        debug!("reading {} chars", count);
        (0..count).map(|_| self.read_char()).collect()
    }

    /// Fills `buffer[offset..offset + count]` with valid characters.
    ///
    /// The range is checked before anything is read, and the buffer is only
    /// written once every character has been read.
    pub fn read_chars_into(&mut self, buffer: &mut [char], offset: usize, count: usize) -> Result<()> {
        let range = check_bounds(buffer.len(), offset, count)?;
        let chars = self.read_chars(count)?;
        buffer[range].copy_from_slice(&chars);
        Ok(())
    }

    /// Reads one valid character into `buffer[offset]`.
    pub fn read_char_at(&mut self, buffer: &mut [char], offset: usize) -> Result<()> {
        self.read_chars_into(buffer, offset, 1)
    }

    /// Reads the next valid code as is.
    pub fn read_code(&mut self) -> Result<u32> {
        self.next_valid_code()
    }

    /// Reads exactly `count` valid codes.
    pub fn read_codes(&mut self, count: usize) -> Result<Vec<u32>> {
        debug!("reading {} codes", count);
        (0..count).map(|_| self.next_valid_code()).collect()
    }

    /// Fills `buffer[offset..offset + count]` with valid codes. Same contract as
    /// [`read_chars_into`](Self::read_chars_into).
    pub fn read_codes_into(&mut self, buffer: &mut [u32], offset: usize, count: usize) -> Result<()> {
        let range = check_bounds(buffer.len(), offset, count)?;
        let codes = self.read_codes(count)?;
        buffer[range].copy_from_slice(&codes);
        Ok(())
    }

    pub fn read_code_at(&mut self, buffer: &mut [u32], offset: usize) -> Result<()> {
        self.read_codes_into(buffer, offset, 1)
    }

    /// Reads the next line verbatim, without its terminator. `None` at end of
    /// stream.
    pub fn read_line(&mut self) -> Result<Option<String>> {
        Ok(self.source.read_line()?)
    }

    /// Reads `count` lines in order.
    ///
    /// # Errors
    ///
    /// [`ReaderError::EndOfStream`] if fewer than `count` lines remain.
    pub fn read_lines(&mut self, count: usize) -> Result<Vec<String>> {
        debug!("reading {} lines", count);
        (0..count)
            .map(|_| self.read_line()?.ok_or(ReaderError::EndOfStream))
            .collect()
    }

    /// Fills `buffer[offset..offset + count]` with line reads. A line past the
    /// end of the stream is stored as `None`.
    pub fn read_lines_into(
        &mut self,
        buffer: &mut [Option<String>],
        offset: usize,
        count: usize,
    ) -> Result<()> {
        let range = check_bounds(buffer.len(), offset, count)?;
        let lines = (0..count)
            .map(|_| self.read_line())
            .collect::<Result<Vec<_>>>()?;
        for (slot, line) in buffer[range].iter_mut().zip(lines) {
            *slot = line;
        }
        Ok(())
    }

    pub fn read_line_at(&mut self, buffer: &mut [Option<String>], offset: usize) -> Result<()> {
        self.read_lines_into(buffer, offset, 1)
    }
}

fn check_bounds(len: usize, offset: usize, count: usize) -> Result<std::ops::Range<usize>> {
    match offset.checked_add(count) {
        Some(end) if offset <= len && end <= len => Ok(offset..end),
        _ => Err(ReaderError::OutOfBounds { offset, count, len }),
    }
}
