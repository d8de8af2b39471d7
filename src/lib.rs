//! A reader that skips control characters.
//!
//! [`FilteredReader`] sits on top of a line-oriented source and only ever
//! yields characters or codes above a threshold (30 by default), discarding
//! tabs, newlines and the other low codes in between. Whole lines can be read
//! through the same reader and are passed through unfiltered.
//!
//! ```
//! use filtered_code_reader::{CharSource, FilteredReader};
//! use std::io::Cursor;
//!
//! let input = "4 2\n\nsecond line\n";
//! let mut reader = FilteredReader::new(CharSource::new(Cursor::new(input)));
//!
//! assert_eq!(reader.read_chars(3).unwrap(), vec!['4', ' ', '2']);
//! assert_eq!(reader.read_line().unwrap().as_deref(), Some(""));
//! assert_eq!(reader.read_line().unwrap().as_deref(), Some(""));
//! assert_eq!(reader.read_lines(1).unwrap(), vec!["second line"]);
//! ```
//!
//! - [`FilteredReader`] and [`FilteredReaderBuilder`]: the reader and its
//!   configuration.
//! - [`CodeSource`]: what the reader reads from.
//! - [`CharSource`]: a [`CodeSource`] over any [`BufRead`](std::io::BufRead).

mod char_source;
pub mod error;
mod reader;
mod source;

pub use char_source::CharSource;
pub use error::{ReaderError, Result};
pub use reader::{CharMode, FilteredReader, FilteredReaderBuilder, DEFAULT_THRESHOLD};
pub use source::CodeSource;
