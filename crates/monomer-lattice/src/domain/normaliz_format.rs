//! Normaliz equation system format (`eqs.in`)
//!
//! ```text
//! amb_space <N>
//! equations <M>
//! <M rows of N integers>
//! HilbertBasis
//! ```
//!
//! Each of the N columns is one generator vector (encoded monomers followed
//! by singletons); each of the M rows is one domain.

use crate::constants::{AMB_SPACE_TOKEN, EQUATIONS_TOKEN, HILBERT_BASIS_MARKER};
use crate::domain::matrix::{join_row, transpose};
use crate::domain::vector::Vector;
use thiserror::Error;

/// Homogeneous linear equation system `A x = 0`
///
/// Only built through [`EquationSystem::from_vectors`] and
/// [`EquationSystem::from_text`], so every row is `amb_space` wide.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EquationSystem {
    amb_space: usize,
    equations: Vec<Vector>,
}

impl EquationSystem {
    /// Build the system whose columns are `vectors`
    pub fn from_vectors(vectors: &[Vector]) -> Self {
        Self {
            amb_space: vectors.len(),
            equations: transpose(vectors),
        }
    }

    /// Number of unknowns (generator vectors)
    pub fn amb_space(&self) -> usize {
        self.amb_space
    }

    /// Equation rows, one per domain
    pub fn equations(&self) -> &[Vector] {
        &self.equations
    }

    /// Number of equations (domains)
    pub fn num_equations(&self) -> usize {
        self.equations.len()
    }

    /// Column vectors of the system, one per unknown
    pub fn generators(&self) -> Vec<Vector> {
        (0..self.amb_space)
            .map(|j| self.equations.iter().map(|row| row[j]).collect())
            .collect()
    }

    /// Serialize to the Normaliz input text
    pub fn to_text(&self) -> String {
        let mut text = format!(
            "{} {}\n{} {}\n",
            AMB_SPACE_TOKEN,
            self.amb_space,
            EQUATIONS_TOKEN,
            self.num_equations()
        );
        for row in &self.equations {
            text.push_str(&join_row(row));
            text.push('\n');
        }
        text.push_str(HILBERT_BASIS_MARKER);
        text.push('\n');
        text
    }

    /// Parse Normaliz input text written by [`EquationSystem::to_text`]
    ///
    /// Blank lines are skipped.
    pub fn from_text(text: &str) -> Result<Self, NormalizFormatError> {
        let mut lines = text
            .lines()
            .enumerate()
            .map(|(i, line)| (i + 1, line.trim()))
            .filter(|(_, line)| !line.is_empty());

        let amb_space = parse_header(lines.next(), AMB_SPACE_TOKEN)?;
        let num_equations = parse_header(lines.next(), EQUATIONS_TOKEN)?;

        let mut equations = Vec::with_capacity(num_equations);
        for row in 0..num_equations {
            let Some((line_no, line)) = lines.next() else {
                return Err(NormalizFormatError::RowCount {
                    expected: num_equations,
                    found: row,
                });
            };
            if line == HILBERT_BASIS_MARKER {
                return Err(NormalizFormatError::RowCount {
                    expected: num_equations,
                    found: row,
                });
            }
            let values = parse_row(line_no, line)?;
            if values.len() != amb_space {
                return Err(NormalizFormatError::RowWidth {
                    line: line_no,
                    expected: amb_space,
                    found: values.len(),
                });
            }
            equations.push(values);
        }

        match lines.next() {
            Some((_, HILBERT_BASIS_MARKER)) => {}
            Some((line_no, _)) => return Err(NormalizFormatError::MissingMarker { line: line_no }),
            None => return Err(NormalizFormatError::MissingMarker { line: 0 }),
        }

        Ok(Self {
            amb_space,
            equations,
        })
    }
}

fn parse_header(
    line: Option<(usize, &str)>,
    token: &'static str,
) -> Result<usize, NormalizFormatError> {
    let Some((line_no, line)) = line else {
        return Err(NormalizFormatError::MissingHeader(token));
    };

    let mut parts = line.split_whitespace();
    if parts.next() != Some(token) {
        return Err(NormalizFormatError::MissingHeader(token));
    }

    let value = parts.next().unwrap_or_default();
    let count = value.parse::<usize>().map_err(|_| NormalizFormatError::InvalidCount {
        line: line_no,
        token,
        value: value.to_string(),
    })?;

    if parts.next().is_some() {
        return Err(NormalizFormatError::InvalidCount {
            line: line_no,
            token,
            value: line.to_string(),
        });
    }

    Ok(count)
}

fn parse_row(line_no: usize, line: &str) -> Result<Vector, NormalizFormatError> {
    line.split_whitespace()
        .map(|value| {
            value.parse().map_err(|_| NormalizFormatError::InvalidInteger {
                line: line_no,
                value: value.to_string(),
            })
        })
        .collect()
}

/// Normaliz input format errors
#[derive(Debug, Error)]
pub enum NormalizFormatError {
    /// Expected header line is missing or out of place
    #[error("Missing `{0}` header")]
    MissingHeader(&'static str),
    /// Header count is not a non-negative integer
    #[error("Line {line}: invalid `{token}` count: {value:?}")]
    InvalidCount {
        line: usize,
        token: &'static str,
        value: String,
    },
    /// Matrix entry is not an integer
    #[error("Line {line}: invalid integer {value:?}")]
    InvalidInteger { line: usize, value: String },
    /// Matrix row does not have `amb_space` entries
    #[error("Line {line}: expected {expected} columns, found {found}")]
    RowWidth {
        line: usize,
        expected: usize,
        found: usize,
    },
    /// Fewer matrix rows than announced
    #[error("Expected {expected} equation rows, found {found}")]
    RowCount { expected: usize, found: usize },
    /// Terminal marker is missing (line 0 = end of input)
    #[error("Line {line}: expected `HilbertBasis` marker")]
    MissingMarker { line: usize },
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
