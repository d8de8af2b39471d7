use clap::{Parser, ValueEnum};
use filtered_code_reader::{CharMode, CharSource, CodeSource, FilteredReader, DEFAULT_THRESHOLD};
use log::info;
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

mod output_writer;
use output_writer::OutputWriter;

/// Reads input while skipping control characters
#[derive(Parser)]
struct Args {
    /// Path to the input file (use "-" to read from stdin)
    input: Option<PathBuf>,

    /// What to read
    #[arg(long, value_enum, default_value_t = Mode::Chars)]
    mode: Mode,

    /// How many values to read
    #[arg(long, default_value_t = 1)]
    count: usize,

    /// Highest code that is skipped
    #[arg(long, default_value_t = DEFAULT_THRESHOLD)]
    threshold: u32,

    /// Keep only the low byte of each code when producing characters
    #[arg(long)]
    latin1: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Mode {
    Chars,
    Codes,
    Lines,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = Args::parse();
    let input: Box<dyn Read> = match args.input.as_ref().and_then(|p| p.to_str()) {
        Some("-") | None => Box::new(io::stdin()),
        Some(path_str) => Box::new(fs::File::open(path_str)?),
    };
    let char_mode = if args.latin1 {
        CharMode::Latin1
    } else {
        CharMode::Widen
    };
    let mut reader = FilteredReader::builder(CharSource::new(input))
        .threshold(args.threshold)
        .char_mode(char_mode)
        .build();
    info!(
        "reading {} {:?} with threshold {}",
        args.count, args.mode, args.threshold
    );

    let stdout = io::stdout();
    let mut output = OutputWriter::new(stdout.lock());
    run(&mut reader, &mut output, args.mode, args.count)?;
    output.flush()?;
    Ok(())
}

fn run<S, W>(
    reader: &mut FilteredReader<S>,
    output: &mut OutputWriter<W>,
    mode: Mode,
    count: usize,
) -> Result<(), Box<dyn std::error::Error>>
where
    S: CodeSource,
    W: io::Write,
{
    match mode {
        Mode::Chars => {
            for c in reader.read_chars(count)? {
                output.write_char(c)?;
            }
        }
        Mode::Codes => {
            for code in reader.read_codes(count)? {
                output.write_code(code)?;
            }
        }
        Mode::Lines => {
            for line in reader.read_lines(count)? {
                output.write_line(&line)?;
            }
        }
    }
    Ok(())
}
