//! File dumper: copy the named files to standard output in order.
//!
//! `-` (or no arguments at all) reads standard input. An unreadable file is
//! reported on stderr and skipped; the remaining files are still dumped.

use std::{
    fs::File,
    io::{self, Read, Write},
    path::PathBuf,
};

use anyhow::Result;
use clap::Parser;

/// Concatenate files to standard output.
#[derive(Debug, Parser)]
#[command(name = "linecat", version, about)]
struct Args {
    /// Files to dump in order; `-` means standard input.
    files: Vec<PathBuf>,
}

const BUF_LEN: usize = 512;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let mut stdout = io::stdout().lock();

    if args.files.is_empty() {
        dump(&mut io::stdin().lock(), &mut stdout)?;
    } else {
        for path in &args.files {
            if path.as_os_str() == "-" {
                dump(&mut io::stdin().lock(), &mut stdout)?;
                continue;
            }
            match File::open(path) {
                Ok(mut file) => dump(&mut file, &mut stdout)?,
                Err(error) => {
                    tracing::warn!(path = %path.display(), %error, "skipping unreadable file");
                }
            }
        }
    }

    stdout.flush()?;
    Ok(())
}

/// Copy `reader` to `writer` in fixed-size chunks.
fn dump(reader: &mut impl Read, writer: &mut impl Write) -> Result<()> {
    let mut buf = [0u8; BUF_LEN];
    loop {
        let count = match reader.read(&mut buf) {
            Ok(0) => return Ok(()),
            Ok(count) => count,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e.into()),
        };
        writer.write_all(&buf[..count])?;
    }
}
