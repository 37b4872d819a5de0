//! Slice-level genetic operators.
//!
//! These work on plain `&[T]` symbol sequences and know nothing about
//! fitness. [`Organism`](super::Organism) builds on them and takes care of
//! re-evaluation; callers with their own genome containers can use them
//! directly.
//!
//! # Crossover Operators
//!
//! - [`single_point_crossover`]: cut both parents at one point and swap tails
//! - [`uniform_crossover`]: fair coin per position decides which child gets which parent's symbol
//!
//! # Mutation Operators
//!
//! - [`resample_mutation`]: redraw random positions from the alphabet
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Syswerda (1989), "Uniform Crossover in Genetic Algorithms"

use super::alphabet::Alphabet;
use super::types::Symbol;
use crate::error::{EvolveError, Result};
use rand::Rng;

// ============================================================================
// Crossover operators
// ============================================================================

/// Single-point crossover.
///
/// Draws a cut point `p` uniformly from `[1, n-1]` and returns
/// `(a[..p] ++ b[p..], b[..p] ++ a[p..])`. Sequences shorter than two
/// symbols have no interior cut point and are returned unchanged.
///
/// # Errors
/// [`EvolveError::LengthMismatch`] if the parents differ in length.
///
/// # Complexity
/// O(n) time, O(n) space
pub fn single_point_crossover<T: Clone, R: Rng>(
    a: &[T],
    b: &[T],
    rng: &mut R,
) -> Result<(Vec<T>, Vec<T>)> {
    check_lengths(a, b)?;

    let n = a.len();
    if n < 2 {
        return Ok((a.to_vec(), b.to_vec()));
    }

    let p = rng.random_range(1..n);
    Ok((splice(a, b, p), splice(b, a, p)))
}

/// `head[..p] ++ tail[p..]`
fn splice<T: Clone>(head: &[T], tail: &[T], p: usize) -> Vec<T> {
    let mut child = Vec::with_capacity(head.len());
    child.extend_from_slice(&head[..p]);
    child.extend_from_slice(&tail[p..]);
    child
}

/// Uniform crossover.
///
/// For every position a fair coin decides whether child 1 takes the symbol
/// from `a` (and child 2 from `b`) or the other way round.
///
/// # Errors
/// [`EvolveError::LengthMismatch`] if the parents differ in length.
pub fn uniform_crossover<T: Clone, R: Rng>(
    a: &[T],
    b: &[T],
    rng: &mut R,
) -> Result<(Vec<T>, Vec<T>)> {
    check_lengths(a, b)?;

    let mut child1 = Vec::with_capacity(a.len());
    let mut child2 = Vec::with_capacity(a.len());
    for (ga, gb) in a.iter().zip(b) {
        if rng.random_bool(0.5) {
            child1.push(ga.clone());
            child2.push(gb.clone());
        } else {
            child1.push(gb.clone());
            child2.push(ga.clone());
        }
    }
    Ok((child1, child2))
}

// ============================================================================
// Mutation operators
// ============================================================================

/// Resampling mutation.
///
/// Runs `num_positions` independent trials. Each trial picks a uniformly
/// random position and, with probability `probability`, overwrites it with a
/// uniform draw from `alphabet`. The draw may reproduce the original symbol.
///
/// Empty sequences are left untouched.
pub fn resample_mutation<T: Symbol, R: Rng>(
    genome: &mut [T],
    alphabet: &Alphabet<T>,
    num_positions: usize,
    probability: f64,
    rng: &mut R,
) {
    let n = genome.len();
    if n == 0 {
        return;
    }
    for _ in 0..num_positions {
        let index = rng.random_range(0..n);
        if rng.random::<f64>() < probability {
            genome[index] = alphabet.sample(rng);
        }
    }
}

// ============================================================================
// Helpers
// ============================================================================

fn check_lengths<T>(a: &[T], b: &[T]) -> Result<()> {
    if a.len() != b.len() {
        return Err(EvolveError::LengthMismatch {
            expected: a.len(),
            actual: b.len(),
        });
    }
    Ok(())
}

// ============================================================================
// Tests
// ============================================================================
