//! Core types shared by the engine: symbols, genomes, evaluators and the
//! optimization direction.
//!
//! A [`Genome`] is plain data. Behavior lives in [`Organism`](super::Organism),
//! which pairs a genome with the [`FitnessEvaluator`] that scores it.

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Deref, DerefMut};
use std::sync::Arc;

/// Fitness score produced by a [`FitnessEvaluator`].
pub type Fitness = i64;

/// Evaluator handle shared by every organism of a population.
pub type SharedEvaluator<T> = Arc<dyn FitnessEvaluator<T>>;

/// Marker trait for genome symbols.
///
/// Implemented automatically for every type that is cloneable, comparable,
/// printable and thread-safe: `char`, `u8`, `&'static str`, `String`, ...
pub trait Symbol: Clone + PartialEq + fmt::Debug + fmt::Display + Send + Sync + 'static {}

impl<T> Symbol for T where T: Clone + PartialEq + fmt::Debug + fmt::Display + Send + Sync + 'static {}

/// An ordered, fixed-length sequence of symbols.
///
/// Dereferences to `[T]`, so slice methods (`len`, `iter`, indexing) are
/// available directly. The length never changes through this type; only
/// positions are overwritten.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Genome<T>(Vec<T>);

impl<T> Genome<T> {
    /// Wraps an existing symbol vector.
    pub fn new(symbols: Vec<T>) -> Self {
        Self(symbols)
    }

    /// Returns the symbols as a slice.
    pub fn as_slice(&self) -> &[T] {
        &self.0
    }

    /// Consumes the genome and returns the underlying vector.
    pub fn into_inner(self) -> Vec<T> {
        self.0
    }
}

impl<T> Deref for Genome<T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        &self.0
    }
}

impl<T> DerefMut for Genome<T> {
    fn deref_mut(&mut self) -> &mut [T] {
        &mut self.0
    }
}

impl<T> From<Vec<T>> for Genome<T> {
    fn from(symbols: Vec<T>) -> Self {
        Self(symbols)
    }
}

impl<T> FromIterator<T> for Genome<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<T: fmt::Display> fmt::Display for Genome<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for symbol in &self.0 {
            write!(f, "{symbol}")?;
        }
        Ok(())
    }
}

/// Scores a genome.
///
/// Implementations must be total (defined for every reachable genome) and
/// free of side effects; the engine may call `evaluate` any number of times
/// for the same genome.
///
/// Any `Fn(&[T]) -> i64` closure is an evaluator:
///
/// ```
/// use u_evolve::ga::FitnessEvaluator;
///
/// let ones = |genome: &[u8]| genome.iter().filter(|&&g| g == 1).count() as i64;
/// assert_eq!(ones.evaluate(&[1, 0, 1]), 2);
/// ```
pub trait FitnessEvaluator<T>: Send + Sync {
    /// Returns the fitness of `genome`.
    fn evaluate(&self, genome: &[T]) -> Fitness;
}

impl<T, F> FitnessEvaluator<T> for F
where
    F: Fn(&[T]) -> Fitness + Send + Sync,
{
    fn evaluate(&self, genome: &[T]) -> Fitness {
        self(genome)
    }
}

/// Direction of optimization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Objective {
    /// Higher fitness is better.
    #[default]
    Maximize,
    /// Lower fitness is better.
    Minimize,
}

impl Objective {
    /// Maps the classic `high_fitness_best` flag to an objective.
    pub fn from_high_fitness_best(high_fitness_best: bool) -> Self {
        if high_fitness_best {
            Objective::Maximize
        } else {
            Objective::Minimize
        }
    }

    /// Ordering that places the better fitness first.
    ///
    /// Suitable for `sort_by`: the best organism ends up at index 0.
    pub fn rank(self, a: Fitness, b: Fitness) -> Ordering {
        match self {
            Objective::Maximize => b.cmp(&a),
            Objective::Minimize => a.cmp(&b),
        }
    }

    /// Returns `true` if `a` is strictly better than `b`.
    pub fn is_better(self, a: Fitness, b: Fitness) -> bool {
        self.rank(a, b) == Ordering::Less
    }

    /// Returns `true` if `best` satisfies the termination threshold `limit`.
    pub fn reached(self, best: Fitness, limit: Fitness) -> bool {
        match self {
            Objective::Maximize => best >= limit,
            Objective::Minimize => best <= limit,
        }
    }
}
