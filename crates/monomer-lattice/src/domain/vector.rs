//! Monomer vector encoding and singleton vectors

use crate::domain::DomainMap;
use crate::domain::monomer::domain_tokens;
use crate::domain::vocabulary::Vocabulary;

/// Signed domain counts in vocabulary order
pub type Vector = Vec<i64>;

/// Encode a normalized monomer as signed domain counts
///
/// A plain token adds 1 to its domain, a starred token subtracts 1.
/// Domains absent from `vocabulary` are dropped; the result always has
/// `vocabulary.len()` entries.
pub fn encode_monomer(monomer: &str, vocabulary: &Vocabulary) -> Vector {
    let mut counts: DomainMap<&str, i64> = DomainMap::default();
    for token in domain_tokens(monomer) {
        *counts.entry(token.base).or_insert(0) += token.sign;
    }

    vocabulary
        .domains()
        .iter()
        .map(|domain| counts.get(domain.as_str()).copied().unwrap_or(0))
        .collect()
}

/// Encode every monomer of a batch
pub fn encode_monomers<S: AsRef<str>>(monomers: &[S], vocabulary: &Vocabulary) -> Vec<Vector> {
    monomers
        .iter()
        .map(|monomer| encode_monomer(monomer.as_ref(), vocabulary))
        .collect()
}

/// Which unit vectors are appended after the encoded monomers
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SingletonConfig {
    /// Emit `-e_i` for every domain
    pub include_negative: bool,
    /// Emit `+e_i` for every domain
    pub include_positive: bool,
}

impl Default for SingletonConfig {
    fn default() -> Self {
        Self {
            include_negative: true,
            include_positive: true,
        }
    }
}

impl SingletonConfig {
    /// Number of singleton vectors emitted per domain (0, 1 or 2)
    pub fn per_domain(&self) -> usize {
        self.include_negative as usize + self.include_positive as usize
    }

    /// Human-readable list of the included singleton kinds
    pub fn describe(&self) -> String {
        let mut kinds = Vec::with_capacity(2);
        if self.include_negative {
            kinds.push("negative");
        }
        if self.include_positive {
            kinds.push("positive");
        }
        if kinds.is_empty() {
            return "none".to_string();
        }
        kinds.join(" and ")
    }
}

/// Generate unit vectors for every domain
///
/// For each domain index the negative vector precedes the positive one.
pub fn singleton_vectors(dimension: usize, config: SingletonConfig) -> Vec<Vector> {
    let mut vectors = Vec::with_capacity(dimension * config.per_domain());

    for i in 0..dimension {
        if config.include_negative {
            vectors.push(unit_vector(dimension, i, -1));
        }
        if config.include_positive {
            vectors.push(unit_vector(dimension, i, 1));
        }
    }

    vectors
}

fn unit_vector(dimension: usize, index: usize, value: i64) -> Vector {
    let mut vector = vec![0; dimension];
    vector[index] = value;
    vector
}
