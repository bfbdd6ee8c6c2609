//! Hilbert basis decoding workflow
//!
//! Reads monomer definitions and a Hilbert basis matrix and renders, for each
//! basis row, the monomers it names with their multiplicities.

use crate::constants::{DEFAULT_BASIS_FILE, DEFAULT_MONOMERS_FILE};
use crate::domain::basis::{BasisError, ColumnReport, DecodeOptions, decode_basis};
use crate::domain::monomer::{BlankLines, LineStyle};
use crate::infra::basis_io::load_basis;
use crate::infra::monomer_io::load_monomers_with;
use std::io;
use std::path::PathBuf;
use thiserror::Error;
use tracing::{debug, warn};

/// Input locations and decoding rules
#[derive(Clone, Debug)]
pub struct DecodeJob {
    pub monomers_path: PathBuf,
    pub basis_path: PathBuf,
    /// Keeping blank lines preserves raw line positions as column indices
    pub blank_lines: BlankLines,
    pub options: DecodeOptions,
}

impl Default for DecodeJob {
    fn default() -> Self {
        Self {
            monomers_path: PathBuf::from(DEFAULT_MONOMERS_FILE),
            basis_path: PathBuf::from(DEFAULT_BASIS_FILE),
            blank_lines: LineStyle::Decoder.default_blank_lines(),
            options: DecodeOptions::default(),
        }
    }
}

/// Rendered text and column bookkeeping of one run
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DecodeOutput {
    /// Groups separated by blank lines; empty if nothing decoded
    pub text: String,
    pub num_rows: usize,
    pub num_groups: usize,
    pub report: ColumnReport,
}

/// Run the decoding workflow
pub fn run_decode(job: &DecodeJob) -> Result<DecodeOutput, DecodeError> {
    let file = load_monomers_with(&job.monomers_path, LineStyle::Decoder, job.blank_lines)
        .map_err(|source| DecodeError::Monomers {
            path: job.monomers_path.clone(),
            source,
        })?;

    if job.blank_lines == BlankLines::Keep && file.blank_lines > 0 {
        warn!(
            blank = file.blank_lines,
            "monomer file has blank lines; they occupy basis columns"
        );
    }

    let rows = load_basis(&job.basis_path).map_err(|source| DecodeError::Basis {
        path: job.basis_path.clone(),
        source,
    })?;

    let decoded = decode_basis(&file.monomers, &rows, job.options).map_err(|source| {
        DecodeError::Basis {
            path: job.basis_path.clone(),
            source,
        }
    })?;

    let report = &decoded.report;
    if !report.short_rows.is_empty() {
        warn!(
            rows = report.short_rows.len(),
            monomers = report.monomer_count,
            "basis rows shorter than the monomer list"
        );
    }
    if !report.long_rows.is_empty() {
        debug!(
            rows = report.long_rows.len(),
            monomers = report.monomer_count,
            "ignored basis columns beyond the monomer list"
        );
    }
    debug!(
        rows = rows.len(),
        groups = decoded.groups.len(),
        empty = report.empty_rows.len(),
        "decoded basis"
    );

    Ok(DecodeOutput {
        text: decoded.render(),
        num_rows: rows.len(),
        num_groups: decoded.groups.len(),
        report: decoded.report,
    })
}

/// Decoding workflow errors
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("{}: {source}", path.display())]
    Monomers { path: PathBuf, source: io::Error },
    #[error("{}: {source}", path.display())]
    Basis { path: PathBuf, source: BasisError },
}

impl DecodeError {
    /// Whether one of the input files does not exist
    pub fn is_not_found(&self) -> bool {
        match self {
            Self::Monomers { source, .. } => source.kind() == io::ErrorKind::NotFound,
            Self::Basis {
                source: BasisError::Io(e),
                ..
            } => e.kind() == io::ErrorKind::NotFound,
            Self::Basis { .. } => false,
        }
    }
}
