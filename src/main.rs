//! Compress a text file line by line into stretch records on stdout.

use std::ffi::OsString;
use std::fs::File;
use std::io::{self, BufReader, BufWriter};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use diffcompress::{compress_stream, logging, EncoderConfig};
use tracing::debug;

#[derive(Parser)]
#[command(name = "diffcompress")]
#[command(disable_help_flag = true, disable_version_flag = true)]
#[command(about = "Nibble-pack each line of a file into stretch records on stdout")]
#[command(after_help = "OUTPUT:\n  \
    Binary records, one sequence per input line, concatenated without separators.\n  \
    Set RUST_LOG to see diagnostics on stderr.")]
struct Args {
    /// Input file; each line is encoded without its trailing newline
    #[arg(allow_hyphen_values = true)]
    input: PathBuf,
}

fn main() -> ExitCode {
    let _ = logging::init_tracing(false);

    let mut argv: Vec<OsString> = std::env::args_os().collect();
    if argv.len() != 2 {
        eprintln!("Error: accepts only one argument");
        return ExitCode::from(1);
    }
    // The single argument is always the path, even if it looks like a flag.
    argv.insert(1, OsString::from("--"));

    let args = match Args::try_parse_from(argv) {
        Ok(args) => args,
        Err(e) => {
            debug!(error = %e, "argument parsing failed");
            eprintln!("Error: accepts only one argument");
            return ExitCode::from(1);
        }
    };

    let file = match File::open(&args.input) {
        Ok(file) => file,
        Err(e) => {
            debug!(path = %args.input.display(), error = %e, "cannot open input");
            std::process::exit(e.raw_os_error().unwrap_or(1));
        }
    };

    let stdout = BufWriter::new(io::stdout().lock());
    match compress_stream(BufReader::new(file), stdout, EncoderConfig::default()) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::from(1)
        }
    }
}
