use std::io;

/// A line-oriented input that hands out either one raw code or one whole line
/// at a time, both advancing the same cursor.
///
/// End of stream is `Ok(None)` for both methods.
pub trait CodeSource {
    /// Reads the next raw code (a Unicode scalar value), unfiltered.
    fn read_code(&mut self) -> io::Result<Option<u32>>;

    /// Reads the rest of the current line, or the next line, without its
    /// line terminator.
    fn read_line(&mut self) -> io::Result<Option<String>>;
}

impl<S: CodeSource + ?Sized> CodeSource for &mut S {
    fn read_code(&mut self) -> io::Result<Option<u32>> {
        (**self).read_code()
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        (**self).read_line()
    }
}
