//! huffrs CLI - Huffman file compression tool
//!
//! A command-line interface for the huffrs compression library.

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use clap::{Parser, Subcommand};

use huffrs::{FrequencyTable, HuffmanTree};

/// A minimal-dependency byte-level Huffman compression tool.
#[derive(Parser, Debug)]
#[command(name = "huffrs")]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Show verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compress a file
    Compress {
        /// Input file to compress
        #[arg(value_name = "INPUT")]
        input: PathBuf,

        /// Output path for the compressed file
        #[arg(value_name = "OUTPUT")]
        output: PathBuf,
    },
    /// Decompress a file
    Decompress {
        /// Compressed input file
        #[arg(value_name = "INPUT")]
        input: PathBuf,

        /// Output path for the reconstructed file
        #[arg(value_name = "OUTPUT")]
        output: PathBuf,
    },
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    match &args.command {
        Command::Compress { input, output } => {
            let data = fs::read(input)?;

            if args.verbose {
                print_diagnostics(&data);
            }

            let start = Instant::now();
            let compressed = huffrs::encode(&data)?;
            let elapsed = start.elapsed();

            fs::write(output, &compressed)?;
            report(&args, "Compressed", input, output, data.len(), compressed.len(), elapsed);
        }
        Command::Decompress { input, output } => {
            let data = fs::read(input)?;

            let start = Instant::now();
            let decompressed = huffrs::decode(&data)?;
            let elapsed = start.elapsed();

            fs::write(output, &decompressed)?;
            report(&args, "Decompressed", input, output, data.len(), decompressed.len(), elapsed);
        }
    }

    Ok(())
}

/// Print the frequency table and generated codes for a compression input.
fn print_diagnostics(data: &[u8]) {
    let frequencies = FrequencyTable::from_bytes(data);

    eprintln!("Byte frequencies:");
    for (byte, count) in frequencies.nonzero() {
        eprintln!("  0x{:02X} {}: {}", byte, printable(byte), count);
    }

    let Ok(tree) = HuffmanTree::from_frequencies(&frequencies) else {
        return;
    };

    eprintln!("Generated codes:");
    for (byte, code) in tree.code_table().iter() {
        let bits: String = code.iter().map(|&b| if b == 0 { '0' } else { '1' }).collect();
        eprintln!("  0x{:02X} {}: {}", byte, printable(byte), bits);
    }
}

fn printable(byte: u8) -> char {
    if byte.is_ascii_graphic() {
        byte as char
    } else {
        '.'
    }
}

fn report(
    args: &Args,
    action: &str,
    input: &PathBuf,
    output: &PathBuf,
    in_size: usize,
    out_size: usize,
    elapsed: std::time::Duration,
) {
    let ratio = if in_size > 0 {
        (out_size as f64 / in_size as f64) * 100.0
    } else {
        0.0
    };

    if args.verbose {
        eprintln!("{}: {:?} -> {:?}", action, input, output);
        eprintln!("  Time: {:.2?}", elapsed);
        eprintln!(
            "  Size: {} -> {} ({:.1}%)",
            format_size(in_size as u64),
            format_size(out_size as u64),
            ratio
        );
    } else {
        println!(
            "{} -> {} ({:.1}%)",
            format_size(in_size as u64),
            format_size(out_size as u64),
            ratio
        );
    }
}

fn format_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;

    if bytes >= MB {
        format!("{:.2} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.2} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} B", bytes)
    }
}
