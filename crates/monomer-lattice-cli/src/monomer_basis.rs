//! Hilbert basis solver CLI
//!
//! Usage: monomer_basis [options]
//!
//! Reads eqs.in and writes hilbert_basis.txt.
//! Example: monomer_basis --max-degree 6

mod logger;

use clap::Parser;
use monomer_lattice::app::solver::{SolveJob, run_solve};
use monomer_lattice::constants::{DEFAULT_BASIS_FILE, DEFAULT_EQS_FILE, DEFAULT_MAX_DEGREE};
use std::path::PathBuf;
use std::time::Instant;

#[derive(Debug, Parser)]
#[command(version, about = "Compute a degree-bounded Hilbert basis of a Normaliz equation system")]
struct Args {
    /// Normaliz equation system
    #[arg(short, long, default_value = DEFAULT_EQS_FILE)]
    input: PathBuf,

    /// Hilbert basis output
    #[arg(short, long, default_value = DEFAULT_BASIS_FILE)]
    output: PathBuf,

    /// Largest combination degree to explore
    #[arg(long, default_value_t = DEFAULT_MAX_DEGREE)]
    max_degree: u32,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let args = Args::parse();
    logger::init_logger(args.verbose);

    let job = SolveJob {
        eqs_path: args.input,
        basis_path: args.output,
        max_degree: args.max_degree,
    };

    let start = Instant::now();
    let summary = match run_solve(&job) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Error: {}", e);
            if e.is_not_found() {
                eprintln!("Run monomers_to_normaliz first to create the equation system.");
            }
            std::process::exit(1);
        }
    };

    println!(
        "Hilbert basis: {} elements written to {}",
        summary.basis_size,
        job.basis_path.display()
    );
    if summary.truncated {
        println!(
            "Warning: maximum degree ({}) reached; the basis may be incomplete.",
            job.max_degree
        );
    }
    println!(
        "generators: {}, equations: {}, max degree: {}",
        summary.num_generators, summary.num_equations, job.max_degree
    );
    println!("Solved in {:.2} seconds.", start.elapsed().as_secs_f64());
}
