//! Stream-wrapping filter: standard input to standard output.
//!
//! One optional positional argument sets the line width. Anything that does
//! not yield a positive width falls back to the default width instead of
//! failing.

use std::io::{self, BufWriter};

use anyhow::Result;
use clap::Parser;
use linefold::{DEFAULT_WIDTH, FoldOptions, LineFolder, ReadSource, WriteSink};

/// Reflow standard input into lines of bounded width.
#[derive(Debug, Parser)]
#[command(name = "linefold", version, about)]
struct Args {
    /// Target line width; unparsable or zero values fall back to 80.
    width: Option<String>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let width = args.width.as_deref().map_or(DEFAULT_WIDTH, parse_width);

    let stdin = io::stdin().lock();
    let stdout = BufWriter::new(io::stdout().lock());
    let mut folder = LineFolder::new(
        ReadSource::new(stdin),
        WriteSink::new(stdout),
        FoldOptions::new(width),
    );
    folder.fold()?;

    Ok(())
}

/// Lenient width parsing: skip anything before the first digit, read the
/// digit run, and treat zero or digitless input as the default width.
fn parse_width(arg: &str) -> usize {
    let digits: String = arg
        .chars()
        .skip_while(|c| !c.is_ascii_digit())
        .take_while(char::is_ascii_digit)
        .collect();

    match digits.parse::<usize>() {
        Ok(width) if width > 0 => width,
        _ => {
            tracing::warn!(arg, "no usable width in argument, using {}", DEFAULT_WIDTH);
            DEFAULT_WIDTH
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{DEFAULT_WIDTH, parse_width};

    #[test]
    fn plain_number() {
        assert_eq!(parse_width("72"), 72);
    }

    #[test]
    fn skips_leading_noise() {
        assert_eq!(parse_width("-w72"), 72);
    }

    #[test]
    fn stops_at_the_first_non_digit() {
        assert_eq!(parse_width("12x9"), 12);
    }

    #[test]
    fn zero_means_default() {
        assert_eq!(parse_width("0"), DEFAULT_WIDTH);
    }

    #[test]
    fn digitless_means_default() {
        assert_eq!(parse_width("wide"), DEFAULT_WIDTH);
    }

    #[test]
    fn overflow_means_default() {
        assert_eq!(parse_width("99999999999999999999999"), DEFAULT_WIDTH);
    }
}
