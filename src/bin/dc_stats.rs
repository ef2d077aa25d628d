//! Report how well a file compresses with diffcompress.
//!
//! Encodes every line without writing the records anywhere, then prints a
//! summary: sizes, stretch counts, aliased headers and a stretch-length
//! histogram. Optionally decodes each line to check the round trip.

use anyhow::{bail, Context, Result};
use clap::Parser;
use diffcompress::{decode, logging, Encoder, EncoderConfig, LineReader, RunSummary};
use serde::Serialize;
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;
use tracing::{debug, info};

#[derive(Parser)]
#[command(name = "dc-stats")]
#[command(about = "Analyze how a file compresses with diffcompress")]
struct Args {
    /// Input file
    input: PathBuf,

    /// Print the summary as JSON
    #[arg(long)]
    json: bool,

    /// Fail on stretch minimums that do not fit the header
    #[arg(long)]
    strict: bool,

    /// Decode every line and check it matches the input
    #[arg(long)]
    verify: bool,

    /// Verbose logging on stderr
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Serialize)]
struct Report {
    #[serde(flatten)]
    summary: RunSummary,
    ratio: f64,
    mean_stretch_len: f64,
    /// Lines checked by --verify (lines with aliased headers are skipped)
    verified_lines: u64,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let _ = logging::init_tracing(args.verbose);

    let config = if args.strict { EncoderConfig::strict() } else { EncoderConfig::default() };
    let file = File::open(&args.input).with_context(|| format!("failed to open {}", args.input.display()))?;
    let mut lines = LineReader::new(BufReader::new(file));
    let mut encoder = Encoder::with_config(config);
    let mut summary = RunSummary::default();
    let mut verified_lines = 0;

    info!(path = %args.input.display(), strict = args.strict, "analyzing");
    while let Some((line_no, line)) = lines.next_line() {
        let encoded = encoder.encode_line(line).with_context(|| format!("line {line_no}"))?;
        summary.add_encoded(&encoded);

        if args.verify && encoded.summary.is_lossless() {
            let decoded = decode(encoded.bytes).with_context(|| format!("line {line_no}: decode failed"))?;
            if decoded != line {
                bail!("line {line_no}: round trip mismatch");
            }
            verified_lines += 1;
        }
    }
    debug!(lines = summary.lines, "done");

    let report = Report {
        ratio: summary.ratio(),
        mean_stretch_len: summary.mean_stretch_len(),
        summary,
        verified_lines,
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_text(&report, args.verify);
    }
    Ok(())
}

fn print_text(report: &Report, verify: bool) {
    let s = &report.summary;
    println!("Lines:            {}", s.lines);
    println!("Input bytes:      {}", s.input_bytes);
    println!("Encoded bytes:    {}", s.encoded_bytes);
    println!("Ratio:            {:.3}", report.ratio);
    println!("Stretches:        {}", s.stretches);
    println!("Records:          {}", s.records);
    println!("Mean stretch len: {:.1}", report.mean_stretch_len);
    println!("Aliased records:  {} (in {} lines)", s.aliased_records, s.aliased_lines);
    if verify {
        println!("Verified lines:   {}", report.verified_lines);
    }

    if s.stretch_lengths.is_empty() {
        return;
    }
    println!();
    println!("Stretch length histogram:");
    let max = s.stretch_lengths.values().copied().max().unwrap_or(1);
    for (len, count) in &s.stretch_lengths {
        let bar = "#".repeat(((count * 40) / max) as usize);
        println!("{len:>5} {count:>10} {bar}");
    }
}
