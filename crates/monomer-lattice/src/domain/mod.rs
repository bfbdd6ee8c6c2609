//! Domain layer - Pure computational logic
//!
//! This module contains pure functions and algorithms without I/O dependencies.

pub mod basis;
pub mod hilbert;
pub mod matrix;
pub mod monomer;
pub mod normaliz_format;
pub mod vector;
pub mod vocabulary;

/// Hash map keyed by domain name
#[cfg(feature = "hashmap-fx")]
pub(crate) type DomainMap<K, V> = rustc_hash::FxHashMap<K, V>;

/// Hash map keyed by domain name
#[cfg(not(feature = "hashmap-fx"))]
pub(crate) type DomainMap<K, V> = std::collections::HashMap<K, V>;

/// Hash set of values built in the domain layer
#[cfg(feature = "hashmap-fx")]
pub(crate) type DomainSet<T> = rustc_hash::FxHashSet<T>;

/// Hash set of values built in the domain layer
#[cfg(not(feature = "hashmap-fx"))]
pub(crate) type DomainSet<T> = std::collections::HashSet<T>;
