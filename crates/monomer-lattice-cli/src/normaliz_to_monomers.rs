//! Hilbert basis to monomer conversion CLI
//!
//! Usage: normaliz_to_monomers [options]
//!
//! Reads monomers.txt and hilbert_basis.txt and prints one group of
//! monomers per basis row.

mod logger;

use clap::Parser;
use monomer_lattice::app::decoder::{DecodeJob, run_decode};
use monomer_lattice::constants::{DEFAULT_BASIS_FILE, DEFAULT_MONOMERS_FILE};
use monomer_lattice::{BlankLines, DecodeOptions};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(version, about = "Print the monomer multisets named by a Hilbert basis")]
struct Args {
    /// Monomer definitions, one per line
    #[arg(short, long, default_value = DEFAULT_MONOMERS_FILE)]
    monomers: PathBuf,

    /// Hilbert basis matrix, one row per line
    #[arg(short, long, default_value = DEFAULT_BASIS_FILE)]
    basis: PathBuf,

    /// Reject basis rows with fewer columns than monomers
    #[arg(long)]
    strict: bool,

    /// Drop blank monomer lines so columns follow the encoder's numbering
    #[arg(long)]
    skip_blank: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let args = Args::parse();
    logger::init_logger(args.verbose);

    let job = DecodeJob {
        monomers_path: args.monomers,
        basis_path: args.basis,
        blank_lines: if args.skip_blank {
            BlankLines::Skip
        } else {
            BlankLines::Keep
        },
        options: DecodeOptions {
            strict: args.strict,
        },
    };

    match run_decode(&job) {
        Ok(output) => println!("{}", output.text),
        Err(e) if e.is_not_found() => {
            eprintln!("Error: {}. Please make sure both input files exist.", e);
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("An error occurred: {}", e);
            std::process::exit(1);
        }
    }
}
