//! File names, format tokens and defaults
//!
//! Note: the Normaliz tokens are consumed by an external tool and must be
//! written byte-for-byte as defined here.

// =============================================================================
// Default file names
// =============================================================================

/// Monomer definitions, one monomer per line
pub const DEFAULT_MONOMERS_FILE: &str = "monomers.txt";

/// Human-readable vector table written by the encoder
pub const DEFAULT_VECTORS_FILE: &str = "vectors.txt";

/// Equation system written by the encoder for the lattice solver
pub const DEFAULT_EQS_FILE: &str = "eqs.in";

/// Hilbert basis matrix, one basis element per line
pub const DEFAULT_BASIS_FILE: &str = "hilbert_basis.txt";

// =============================================================================
// Monomer line syntax
// =============================================================================

/// Separates an optional leading label from the monomer body
pub const LABEL_SEPARATOR: char = ':';

/// Starts an optional trailing comment
pub const COMMENT_SEPARATOR: char = ',';

/// Trailing marker on a domain token that flips its sign
pub const NEGATION_MARKER: char = '*';

// =============================================================================
// Normaliz input format
// =============================================================================

/// Header token followed by the number of generator vectors
pub const AMB_SPACE_TOKEN: &str = "amb_space";

/// Header token followed by the number of equations (domains)
pub const EQUATIONS_TOKEN: &str = "equations";

/// Terminal line requesting a Hilbert basis computation
pub const HILBERT_BASIS_MARKER: &str = "HilbertBasis";

// =============================================================================
// Solver parameters
// =============================================================================

/// Largest combination degree (sum of coefficients) explored by the solver
pub const DEFAULT_MAX_DEGREE: u32 = 9;
