//! Hilbert basis decoding
//!
//! Every row of a Hilbert basis matrix is a multiplicity pattern over the
//! monomer list: column `i` counts how many copies of monomer `i` take part.
//! Decoding turns each row back into the monomers it names.

use crate::domain::vector::Vector;
use std::fmt;
use thiserror::Error;

/// Parse a Hilbert basis matrix, one row per line
///
/// Rows may have any length. A blank line yields an empty row so that row
/// numbers stay aligned with line numbers.
pub fn parse_basis(text: &str) -> Result<Vec<Vector>, BasisError> {
    text.lines()
        .enumerate()
        .map(|(i, line)| {
            line.split_whitespace()
                .map(|value| {
                    value.parse().map_err(|_| BasisError::InvalidInteger {
                        line: i + 1,
                        value: value.to_string(),
                    })
                })
                .collect()
        })
        .collect()
}

/// Decoding options
#[derive(Clone, Copy, Debug, Default)]
pub struct DecodeOptions {
    /// Reject rows with fewer columns than there are monomers
    pub strict: bool,
}

/// One monomer with its multiplicity inside a basis row
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BasisEntry<'a> {
    /// Monomer index (matrix column)
    pub column: usize,
    /// Strictly positive multiplicity
    pub count: i64,
    /// Normalized monomer text
    pub monomer: &'a str,
}

impl fmt::Display for BasisEntry<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x {}", self.count, self.monomer)
    }
}

/// The monomers named by one basis row
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BasisGroup<'a> {
    /// Row index in the basis matrix
    pub row: usize,
    /// Entries in column order, never empty
    pub entries: Vec<BasisEntry<'a>>,
}

impl fmt::Display for BasisGroup<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, entry) in self.entries.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", entry)?;
        }
        Ok(())
    }
}

/// How basis rows lined up with the monomer list
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ColumnReport {
    /// Number of monomers columns were matched against
    pub monomer_count: usize,
    /// Rows with fewer columns than monomers
    pub short_rows: Vec<usize>,
    /// Rows with trailing columns beyond the monomer count (ignored)
    pub long_rows: Vec<usize>,
    /// Rows without any positive entry (omitted from output)
    pub empty_rows: Vec<usize>,
}

/// Result of decoding a Hilbert basis
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DecodedBasis<'a> {
    pub groups: Vec<BasisGroup<'a>>,
    pub report: ColumnReport,
}

impl DecodedBasis<'_> {
    /// Groups separated by a blank line; empty if no row decoded to anything
    pub fn render(&self) -> String {
        self.groups
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}

/// Decode every basis row against the monomer list
///
/// Only strictly positive entries contribute. Columns beyond the monomer
/// count are ignored. Rows without any contribution are left out.
pub fn decode_basis<'a, S: AsRef<str>>(
    monomers: &'a [S],
    rows: &[Vector],
    options: DecodeOptions,
) -> Result<DecodedBasis<'a>, BasisError> {
    let monomer_count = monomers.len();
    let mut report = ColumnReport {
        monomer_count,
        ..ColumnReport::default()
    };
    let mut groups = Vec::new();

    for (row_index, row) in rows.iter().enumerate() {
        if row.len() < monomer_count {
            if options.strict {
                return Err(BasisError::RowTooShort {
                    row: row_index + 1,
                    expected: monomer_count,
                    found: row.len(),
                });
            }
            report.short_rows.push(row_index);
        } else if row.len() > monomer_count {
            report.long_rows.push(row_index);
        }

        let entries: Vec<BasisEntry<'a>> = row
            .iter()
            .zip(monomers)
            .enumerate()
            .filter(|(_, (count, _))| **count > 0)
            .map(|(column, (&count, monomer))| BasisEntry {
                column,
                count,
                monomer: monomer.as_ref(),
            })
            .collect();

        if entries.is_empty() {
            report.empty_rows.push(row_index);
        } else {
            groups.push(BasisGroup {
                row: row_index,
                entries,
            });
        }
    }

    Ok(DecodedBasis { groups, report })
}

/// Hilbert basis errors
#[derive(Debug, Error)]
pub enum BasisError {
    /// Matrix entry is not an integer
    #[error("Line {line}: invalid integer {value:?}")]
    InvalidInteger { line: usize, value: String },
    /// Row has fewer columns than monomers (strict mode)
    #[error("Row {row}: expected at least {expected} columns, found {found}")]
    RowTooShort {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
