//! Monomer encoding workflow
//!
//! Reads monomer definitions and writes the vector table and the Normaliz
//! equation system.

use crate::constants::{DEFAULT_EQS_FILE, DEFAULT_MONOMERS_FILE, DEFAULT_VECTORS_FILE};
use crate::domain::monomer::LineStyle;
use crate::domain::normaliz_format::EquationSystem;
use crate::domain::vector::{SingletonConfig, Vector, encode_monomers, singleton_vectors};
use crate::domain::vocabulary::Vocabulary;
use crate::infra::monomer_io::load_monomers;
use crate::infra::normaliz_io::save_eqs_in;
use crate::infra::vectors_io::save_vector_table;
use std::io;
use std::path::PathBuf;
use thiserror::Error;
use tracing::{debug, info};

/// Input and output locations plus singleton selection
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EncodeJob {
    pub monomers_path: PathBuf,
    pub vectors_path: PathBuf,
    pub eqs_path: PathBuf,
    pub singletons: SingletonConfig,
}

impl Default for EncodeJob {
    fn default() -> Self {
        Self {
            monomers_path: PathBuf::from(DEFAULT_MONOMERS_FILE),
            vectors_path: PathBuf::from(DEFAULT_VECTORS_FILE),
            eqs_path: PathBuf::from(DEFAULT_EQS_FILE),
            singletons: SingletonConfig::default(),
        }
    }
}

/// Vocabulary and vectors of one batch of monomers
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Encoding {
    pub vocabulary: Vocabulary,
    /// Encoded monomers followed by singleton vectors
    pub vectors: Vec<Vector>,
    pub num_monomers: usize,
}

impl Encoding {
    /// Encoded monomer vectors only
    pub fn monomer_vectors(&self) -> &[Vector] {
        &self.vectors[..self.num_monomers]
    }

    /// Singleton vectors only
    pub fn singleton_vectors(&self) -> &[Vector] {
        &self.vectors[self.num_monomers..]
    }

    /// Equation system whose columns are all vectors
    pub fn equation_system(&self) -> EquationSystem {
        EquationSystem::from_vectors(&self.vectors)
    }
}

/// Build the vocabulary and all vectors for a batch of normalized monomers
pub fn encode<S: AsRef<str>>(monomers: &[S], singletons: SingletonConfig) -> Encoding {
    let vocabulary = Vocabulary::from_monomers(monomers);
    let mut vectors = encode_monomers(monomers, &vocabulary);
    vectors.extend(singleton_vectors(vocabulary.len(), singletons));

    Encoding {
        vocabulary,
        vectors,
        num_monomers: monomers.len(),
    }
}

/// Counts reported after a successful run
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EncodeSummary {
    pub num_domains: usize,
    pub num_monomers: usize,
    pub num_vectors: usize,
}

/// Run the encoding workflow
pub fn run_encode(job: &EncodeJob) -> Result<EncodeSummary, EncodeError> {
    let file = load_monomers(&job.monomers_path, LineStyle::Encoder).map_err(|source| {
        EncodeError::Read {
            path: job.monomers_path.clone(),
            source,
        }
    })?;

    let encoding = encode(&file.monomers, job.singletons);
    debug!(
        domains = encoding.vocabulary.len(),
        monomers = encoding.num_monomers,
        singletons = encoding.singleton_vectors().len(),
        "encoded monomers"
    );

    save_vector_table(&job.vectors_path, &encoding.vocabulary, &encoding.vectors).map_err(
        |source| EncodeError::Write {
            path: job.vectors_path.clone(),
            source,
        },
    )?;
    info!(path = %job.vectors_path.display(), "wrote vector table");

    save_eqs_in(&job.eqs_path, &encoding.equation_system()).map_err(|source| {
        EncodeError::Write {
            path: job.eqs_path.clone(),
            source,
        }
    })?;
    info!(path = %job.eqs_path.display(), "wrote equation system");

    Ok(EncodeSummary {
        num_domains: encoding.vocabulary.len(),
        num_monomers: encoding.num_monomers,
        num_vectors: encoding.vectors.len(),
    })
}

/// Encoding workflow errors
#[derive(Debug, Error)]
pub enum EncodeError {
    #[error("{}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },
    #[error("{}: {source}", path.display())]
    Write { path: PathBuf, source: io::Error },
}

impl EncodeError {
    /// Whether the monomer file does not exist
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Read { source, .. } if source.kind() == io::ErrorKind::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_example() {
        let encoding = encode(&["a b a*"], SingletonConfig::default());

        assert_eq!(encoding.vocabulary.domains(), &["a", "b"]);
        assert_eq!(encoding.monomer_vectors(), &[vec![0, 1]]);
        assert_eq!(
            encoding.singleton_vectors(),
            &[vec![-1, 0], vec![1, 0], vec![0, -1], vec![0, 1]]
        );
    }

    #[test]
    fn test_encode_without_singletons() {
        let none = SingletonConfig {
            include_negative: false,
            include_positive: false,
        };
        let encoding = encode(&["x y", "y* z"], none);

        assert_eq!(encoding.vectors, vec![vec![1, 1, 0], vec![0, -1, 1]]);
        assert!(encoding.singleton_vectors().is_empty());
    }

    #[test]
    fn test_equation_system_shape() {
        let encoding = encode(&["a b", "c"], SingletonConfig::default());
        let system = encoding.equation_system();

        assert_eq!(system.amb_space(), 2 + 3 * 2);
        assert_eq!(system.num_equations(), 3);
    }

    #[test]
    fn test_default_job_paths() {
        let job = EncodeJob::default();
        assert_eq!(job.monomers_path, PathBuf::from("monomers.txt"));
        assert_eq!(job.vectors_path, PathBuf::from("vectors.txt"));
        assert_eq!(job.eqs_path, PathBuf::from("eqs.in"));
    }
}
