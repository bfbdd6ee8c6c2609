//! Hilbert basis solving workflow
//!
//! Reads the equation system written by the encoder and writes the basis
//! matrix consumed by the decoder.

use crate::constants::{DEFAULT_BASIS_FILE, DEFAULT_EQS_FILE, DEFAULT_MAX_DEGREE};
use crate::domain::hilbert::HilbertSolver;
use crate::domain::normaliz_format::NormalizFormatError;
use crate::infra::basis_io::save_basis;
use crate::infra::normaliz_io::load_eqs_in;
use std::io;
use std::path::PathBuf;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Input/output locations and search depth
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SolveJob {
    pub eqs_path: PathBuf,
    pub basis_path: PathBuf,
    pub max_degree: u32,
}

impl Default for SolveJob {
    fn default() -> Self {
        Self {
            eqs_path: PathBuf::from(DEFAULT_EQS_FILE),
            basis_path: PathBuf::from(DEFAULT_BASIS_FILE),
            max_degree: DEFAULT_MAX_DEGREE,
        }
    }
}

/// Counts reported after a successful run
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SolveSummary {
    pub num_generators: usize,
    pub num_equations: usize,
    pub basis_size: usize,
    /// The degree limit stopped the search with candidates left
    pub truncated: bool,
}

/// Run the solving workflow
pub fn run_solve(job: &SolveJob) -> Result<SolveSummary, SolveError> {
    let system = load_eqs_in(&job.eqs_path).map_err(|source| SolveError::Input {
        path: job.eqs_path.clone(),
        source,
    })?;

    let generators = system.generators();
    debug!(
        generators = generators.len(),
        equations = system.num_equations(),
        max_degree = job.max_degree,
        "solving"
    );

    let completion = HilbertSolver::new(&generators, job.max_degree).solve_with_progress(
        |degree, candidates, found| {
            debug!(degree, candidates, found, "level done");
        },
    );
    if completion.truncated {
        warn!(
            max_degree = job.max_degree,
            "degree limit reached with candidates left; basis may be incomplete"
        );
    }
    let basis = completion.basis;

    save_basis(&job.basis_path, &basis).map_err(|source| SolveError::Output {
        path: job.basis_path.clone(),
        source,
    })?;
    info!(path = %job.basis_path.display(), elements = basis.len(), "wrote Hilbert basis");

    Ok(SolveSummary {
        num_generators: generators.len(),
        num_equations: system.num_equations(),
        basis_size: basis.len(),
        truncated: completion.truncated,
    })
}

/// Solving workflow errors
#[derive(Debug, Error)]
pub enum SolveError {
    #[error("{}: {source}", path.display())]
    Input {
        path: PathBuf,
        source: NormalizFormatError,
    },
    #[error("{}: {source}", path.display())]
    Output { path: PathBuf, source: io::Error },
}

impl SolveError {
    /// Whether the equation system file does not exist
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::Input {
                source: NormalizFormatError::Io(e),
                ..
            } if e.kind() == io::ErrorKind::NotFound
        )
    }
}
