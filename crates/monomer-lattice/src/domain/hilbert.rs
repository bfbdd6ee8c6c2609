//! Hilbert basis completion
//!
//! Finds minimal non-negative integer combinations `c` of generator vectors
//! `v_0..v_{n-1}` with `sum(c_i * v_i) = 0`, level by level:
//!
//! 1. Level 1 holds the unit combinations `e_i`.
//! 2. A combination whose image is zero is recorded, unless it dominates an
//!    element already recorded, and is not extended.
//! 3. Otherwise it is extended by `e_j` for every `j` not above its highest
//!    non-zero index whose generator points against the image
//!    (`v_j . image < 0`). Extensions dominating a recorded element are
//!    discarded.
//!
//! Candidates of one level are deduplicated, so every multiset of generators
//! is visited at most once per degree.
//! The search stops at `max_degree`, so the result is not guaranteed to be
//! complete for systems whose basis has elements of higher degree.

use crate::domain::DomainSet;
use crate::domain::vector::Vector;

/// Basis elements found by a completion run
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Completion {
    /// Basis elements in discovery order, without repeats
    pub basis: Vec<Vector>,
    /// Candidates were still pending when the degree limit was reached
    pub truncated: bool,
}

/// A combination together with its image under the generators
#[derive(Clone, Debug)]
struct Candidate {
    coefficients: Vector,
    image: Vector,
    highest: usize,
}

/// Level-wise Hilbert basis solver over a fixed set of generators
#[derive(Clone, Debug)]
pub struct HilbertSolver<'a> {
    generators: &'a [Vector],
    max_degree: u32,
}

impl<'a> HilbertSolver<'a> {
    /// Create a solver; every generator must have the same dimension
    pub fn new(generators: &'a [Vector], max_degree: u32) -> Self {
        Self {
            generators,
            max_degree,
        }
    }

    /// Run the completion and return basis elements in discovery order
    pub fn solve(&self) -> Vec<Vector> {
        self.complete().basis
    }

    /// Run the completion, keeping track of whether the degree limit cut it short
    pub fn complete(&self) -> Completion {
        self.solve_with_progress(|_, _, _| {})
    }

    /// Run the completion, reporting `(degree, level_size, basis_size)` after each level
    pub fn solve_with_progress<F>(&self, mut on_level: F) -> Completion
    where
        F: FnMut(u32, usize, usize),
    {
        let n = self.generators.len();
        let mut basis: Vec<Vector> = Vec::new();
        let mut level: Vec<Candidate> = (0..n).map(|i| self.unit(i)).collect();
        let mut degree = 1;

        while !level.is_empty() && degree <= self.max_degree {
            let mut next = Vec::new();
            // Different extension orders reach the same multiset
            let mut seen: DomainSet<Vector> = DomainSet::default();

            for candidate in &level {
                if candidate.image.iter().all(|&x| x == 0) {
                    // Extensions are pruned before later elements of their level exist
                    if !dominates_any(&candidate.coefficients, &basis) {
                        basis.push(candidate.coefficients.clone());
                    }
                    continue;
                }

                for j in 0..=candidate.highest {
                    let generator = &self.generators[j];
                    if dot(generator, &candidate.image) >= 0 {
                        continue;
                    }

                    let mut coefficients = candidate.coefficients.clone();
                    coefficients[j] += 1;
                    if seen.contains(&coefficients) || dominates_any(&coefficients, &basis) {
                        continue;
                    }
                    seen.insert(coefficients.clone());

                    let image = candidate
                        .image
                        .iter()
                        .zip(generator)
                        .map(|(a, b)| a + b)
                        .collect();
                    next.push(Candidate {
                        coefficients,
                        image,
                        highest: candidate.highest,
                    });
                }
            }

            on_level(degree, level.len(), basis.len());
            degree += 1;
            level = next;
        }

        Completion {
            basis,
            truncated: !level.is_empty(),
        }
    }

    fn unit(&self, i: usize) -> Candidate {
        let mut coefficients = vec![0; self.generators.len()];
        coefficients[i] = 1;
        Candidate {
            coefficients,
            image: self.generators[i].clone(),
            highest: i,
        }
    }
}

fn dot(a: &[i64], b: &[i64]) -> i64 {
    a.iter().zip(b).map(|(x, y)| x * y).sum()
}

/// Whether `coefficients` is componentwise >= some basis element
fn dominates_any(coefficients: &[i64], basis: &[Vector]) -> bool {
    basis
        .iter()
        .any(|element| coefficients.iter().zip(element).all(|(c, e)| c >= e))
}

/// Image of a combination under the generators
pub fn combine(generators: &[Vector], coefficients: &[i64]) -> Vector {
    let dimension = generators.first().map_or(0, Vec::len);
    let mut image = vec![0; dimension];
    for (generator, &c) in generators.iter().zip(coefficients) {
        if c == 0 {
            continue;
        }
        for (x, &g) in image.iter_mut().zip(generator) {
            *x += c * g;
        }
    }
    image
}
