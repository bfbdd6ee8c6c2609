//! monomer-lattice - Monomer vectors and Hilbert basis conversion
//!
//! This crate provides functionality to:
//! - Encode monomer definitions (multisets of signed domains) as integer vectors
//! - Write the vector table and a Normaliz equation system for a lattice solver
//! - Compute a degree-bounded Hilbert basis of the equation system
//! - Decode a Hilbert basis back into groups of monomers

pub mod app;
pub mod constants;
pub mod domain;
pub mod infra;

// Re-export commonly used types
pub use constants::*;
pub use domain::basis::{DecodeOptions, DecodedBasis, decode_basis};
pub use domain::monomer::{BlankLines, LineStyle};
pub use domain::vector::{SingletonConfig, Vector};
pub use domain::vocabulary::Vocabulary;
