//! Domain vocabulary
//!
//! The vocabulary is the ordered, deduplicated list of base domain names seen
//! across a batch of monomers. Order is first appearance, scanning monomers
//! top to bottom and tokens left to right.

use crate::domain::DomainMap;
use crate::domain::monomer::domain_tokens;

/// Ordered set of domain names with index lookup
#[derive(Clone, Debug, Default)]
pub struct Vocabulary {
    domains: Vec<String>,
    index: DomainMap<String, usize>,
}

impl Vocabulary {
    /// Create an empty vocabulary
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the vocabulary of a batch of normalized monomers
    pub fn from_monomers<S: AsRef<str>>(monomers: &[S]) -> Self {
        let mut vocabulary = Self::new();
        for monomer in monomers {
            for token in domain_tokens(monomer.as_ref()) {
                vocabulary.insert(token.base);
            }
        }
        vocabulary
    }

    /// Insert a domain if not yet present, returning its index
    pub fn insert(&mut self, domain: &str) -> usize {
        if let Some(&i) = self.index.get(domain) {
            return i;
        }
        let i = self.domains.len();
        self.domains.push(domain.to_string());
        self.index.insert(domain.to_string(), i);
        i
    }

    /// Index of a domain in vocabulary order
    pub fn index_of(&self, domain: &str) -> Option<usize> {
        self.index.get(domain).copied()
    }

    /// Domain names in vocabulary order
    pub fn domains(&self) -> &[String] {
        &self.domains
    }

    pub fn len(&self) -> usize {
        self.domains.len()
    }

    pub fn is_empty(&self) -> bool {
        self.domains.is_empty()
    }
}

impl PartialEq for Vocabulary {
    fn eq(&self, other: &Self) -> bool {
        self.domains == other.domains
    }
}

impl Eq for Vocabulary {}

impl<S: AsRef<str>> FromIterator<S> for Vocabulary {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut vocabulary = Self::new();
        for domain in iter {
            vocabulary.insert(domain.as_ref());
        }
        vocabulary
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_appearance_order() {
        let vocabulary = Vocabulary::from_monomers(&["c a", "b a* c*", "d"]);
        assert_eq!(vocabulary.domains(), &["c", "a", "b", "d"]);
    }

    #[test]
    fn test_starred_token_maps_to_base() {
        let vocabulary = Vocabulary::from_monomers(&["a* a"]);
        assert_eq!(vocabulary.domains(), &["a"]);
        assert_eq!(vocabulary.index_of("a"), Some(0));
        assert_eq!(vocabulary.index_of("a*"), None);
    }

    #[test]
    fn test_empty_input() {
        let monomers: [&str; 0] = [];
        let vocabulary = Vocabulary::from_monomers(&monomers);
        assert!(vocabulary.is_empty());
        assert_eq!(vocabulary.len(), 0);
    }

    #[test]
    fn test_insert_is_idempotent() {
        let mut vocabulary = Vocabulary::new();
        assert_eq!(vocabulary.insert("x"), 0);
        assert_eq!(vocabulary.insert("y"), 1);
        assert_eq!(vocabulary.insert("x"), 0);
        assert_eq!(vocabulary.len(), 2);
    }

    #[test]
    fn test_from_iter() {
        let vocabulary: Vocabulary = ["x", "y", "x"].into_iter().collect();
        assert_eq!(vocabulary.domains(), &["x", "y"]);
    }
}
