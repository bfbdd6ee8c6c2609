//! Monomer to Normaliz conversion CLI
//!
//! Usage: monomers_to_normaliz [options]
//!
//! Reads monomers.txt and writes vectors.txt and eqs.in.
//! Example: monomers_to_normaliz --no-positive-singletons

mod logger;

use clap::Parser;
use monomer_lattice::SingletonConfig;
use monomer_lattice::app::encoder::{EncodeJob, run_encode};
use monomer_lattice::constants::{DEFAULT_EQS_FILE, DEFAULT_MONOMERS_FILE, DEFAULT_VECTORS_FILE};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(version, about = "Convert monomer definitions to a vector table and Normaliz input")]
struct Args {
    /// Monomer definitions, one per line
    #[arg(short, long, default_value = DEFAULT_MONOMERS_FILE)]
    input: PathBuf,

    /// Vector table output
    #[arg(long, default_value = DEFAULT_VECTORS_FILE)]
    vectors: PathBuf,

    /// Normaliz equation system output
    #[arg(long, default_value = DEFAULT_EQS_FILE)]
    eqs: PathBuf,

    /// Do not append negative singleton vectors
    #[arg(long)]
    no_negative_singletons: bool,

    /// Do not append positive singleton vectors
    #[arg(long)]
    no_positive_singletons: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let args = Args::parse();
    logger::init_logger(args.verbose);

    let job = EncodeJob {
        monomers_path: args.input,
        vectors_path: args.vectors,
        eqs_path: args.eqs,
        singletons: SingletonConfig {
            include_negative: !args.no_negative_singletons,
            include_positive: !args.no_positive_singletons,
        },
    };

    let summary = match run_encode(&job) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Error: {}", e);
            if e.is_not_found() {
                eprintln!("Make sure the monomer file exists.");
            }
            std::process::exit(1);
        }
    };

    println!(
        "Processing complete. Results written to {} and {}",
        job.vectors_path.display(),
        job.eqs_path.display()
    );
    println!("domains: {}", summary.num_domains);
    println!("monomers: {}", summary.num_monomers);
    println!("Included singleton types: {}", job.singletons.describe());
}
