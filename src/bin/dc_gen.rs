//! Generate synthetic FASTQ-style quality lines for diffcompress.

use anyhow::{ensure, Context, Result};
use clap::Parser;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

/// Offset added to phred scores to make them printable
const PHRED_OFFSET: u8 = 33;
const MIN_PHRED: i32 = 2;
const MAX_PHRED: i32 = 41;

#[derive(Parser)]
#[command(name = "dc-gen")]
#[command(about = "Generate synthetic quality lines (phred+33) for diffcompress")]
#[command(after_help = "MODEL:\n  \
    Each line is a random walk over phred scores 2-41 starting near --base.\n  \
    Every step moves by at most --spread; with --dropouts probability a\n  \
    score falls to 2 for one position, which forces a stretch break.")]
struct Args {
    /// Output file path
    output: PathBuf,

    /// Number of lines to generate
    #[arg(short, long, default_value = "1000")]
    lines: usize,

    /// Length of each line
    #[arg(long, default_value = "150")]
    length: usize,

    /// Starting phred score
    #[arg(long, default_value = "37")]
    base: i32,

    /// Largest step between neighbouring scores
    #[arg(long, default_value = "3")]
    spread: i32,

    /// Probability (0.0-1.0) of a single-position quality dropout
    #[arg(long, default_value = "0.01")]
    dropouts: f64,

    /// Seed for reproducible output
    #[arg(long)]
    seed: Option<u64>,
}

fn generate_line<R: Rng>(rng: &mut R, args: &Args, line: &mut Vec<u8>) {
    line.clear();
    let mut score = args.base.clamp(MIN_PHRED, MAX_PHRED);
    for _ in 0..args.length {
        let emitted = if rng.random_bool(args.dropouts) {
            MIN_PHRED
        } else {
            score = (score + rng.random_range(-args.spread..=args.spread)).clamp(MIN_PHRED, MAX_PHRED);
            score
        };
        line.push(PHRED_OFFSET + emitted as u8);
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    ensure!((0.0..=1.0).contains(&args.dropouts), "--dropouts must be within 0.0-1.0");
    ensure!(args.spread >= 0, "--spread must not be negative");

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let file = File::create(&args.output)
        .with_context(|| format!("failed to create {}", args.output.display()))?;
    let mut out = BufWriter::new(file);

    let mut line = Vec::with_capacity(args.length + 1);
    let mut encoded_bytes = 0;
    for _ in 0..args.lines {
        generate_line(&mut rng, &args, &mut line);
        encoded_bytes += diffcompress::encoded_len(&line);
        line.push(b'\n');
        out.write_all(&line)?;
    }
    out.flush()?;

    let raw_bytes = args.lines * args.length;
    println!("Generated {} lines of {} scores", args.lines, args.length);
    println!("Output: {} ({} bytes)", args.output.display(), raw_bytes + args.lines);
    if encoded_bytes > 0 {
        println!("Expected encoded size: {encoded_bytes} bytes ({:.2}x)", raw_bytes as f64 / encoded_bytes as f64);
    }
    Ok(())
}
