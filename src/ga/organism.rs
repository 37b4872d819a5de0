//! Organisms: genomes with a cached fitness.
//!
//! An [`Organism`] captures the alphabet and evaluator it was built with, so
//! every operation that touches the genome can re-evaluate it immediately.
//! No public method ever leaves `fitness` out of sync with `genome`.

use super::alphabet::Alphabet;
use super::operators;
use super::types::{Fitness, Genome, SharedEvaluator, Symbol};
use crate::error::{EvolveError, Result};
use rand::Rng;
use std::fmt;
use std::sync::Arc;

/// A candidate solution: a genome plus its cached fitness.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use u_evolve::ga::{Alphabet, Organism, SharedEvaluator};
/// use u_evolve::ga::random::create_rng;
///
/// let alphabet = Arc::new(Alphabet::binary());
/// let ones: SharedEvaluator<u8> =
///     Arc::new(|g: &[u8]| g.iter().filter(|&&b| b == 1).count() as i64);
///
/// let mut rng = create_rng(42);
/// let mut organism = Organism::new(8, alphabet, ones, &mut rng).unwrap();
/// organism.mutate(2, 0.3, &mut rng);
///
/// let expected = organism.genome().iter().filter(|&&b| b == 1).count() as i64;
/// assert_eq!(organism.fitness(), expected);
/// ```
#[derive(Clone)]
pub struct Organism<T> {
    genome: Genome<T>,
    fitness: Fitness,
    alphabet: Arc<Alphabet<T>>,
    evaluator: SharedEvaluator<T>,
}

impl<T: Symbol> Organism<T> {
    /// Creates an organism with a random genome of `genome_length` symbols,
    /// each drawn uniformly (with replacement) from `alphabet`.
    ///
    /// # Errors
    /// [`EvolveError::InvalidLength`] if `genome_length` is 0.
    pub fn new<R: Rng>(
        genome_length: usize,
        alphabet: Arc<Alphabet<T>>,
        evaluator: SharedEvaluator<T>,
        rng: &mut R,
    ) -> Result<Self> {
        if genome_length == 0 {
            return Err(EvolveError::InvalidLength {
                what: "genome_length",
            });
        }
        let genome = Genome::new(alphabet.sample_many(genome_length, rng));
        Ok(Self::evaluated(genome, alphabet, evaluator))
    }

    /// Creates an organism from a known genome.
    ///
    /// Symbols outside `alphabet` are accepted; the alphabet only drives
    /// future mutation draws.
    ///
    /// # Errors
    /// [`EvolveError::InvalidLength`] if the genome is empty.
    pub fn from_genome(
        genome: impl Into<Genome<T>>,
        alphabet: Arc<Alphabet<T>>,
        evaluator: SharedEvaluator<T>,
    ) -> Result<Self> {
        let genome = genome.into();
        if genome.is_empty() {
            return Err(EvolveError::InvalidLength {
                what: "genome_length",
            });
        }
        Ok(Self::evaluated(genome, alphabet, evaluator))
    }

    fn evaluated(genome: Genome<T>, alphabet: Arc<Alphabet<T>>, evaluator: SharedEvaluator<T>) -> Self {
        let fitness = evaluator.evaluate(&genome);
        Self {
            genome,
            fitness,
            alphabet,
            evaluator,
        }
    }

    /// A sibling organism sharing this one's alphabet and evaluator.
    fn offspring(&self, genome: Vec<T>) -> Self {
        Self::evaluated(
            Genome::new(genome),
            Arc::clone(&self.alphabet),
            Arc::clone(&self.evaluator),
        )
    }

    /// Replaces the genome and re-evaluates it.
    ///
    /// # Errors
    /// [`EvolveError::LengthMismatch`] if the new genome has a different
    /// length; the organism is left untouched.
    pub fn replace_genome(&mut self, genome: impl Into<Genome<T>>) -> Result<()> {
        let genome = genome.into();
        if genome.len() != self.genome.len() {
            return Err(EvolveError::LengthMismatch {
                expected: self.genome.len(),
                actual: genome.len(),
            });
        }
        self.fitness = self.evaluator.evaluate(&genome);
        self.genome = genome;
        Ok(())
    }

    /// Single-point crossover with `other`.
    ///
    /// Returns two fresh children; both parents are left unchanged. Genomes
    /// shorter than two symbols have no cut point, so the parents themselves
    /// are returned.
    ///
    /// # Errors
    /// [`EvolveError::LengthMismatch`] if the genome lengths differ.
    pub fn crossover<R: Rng>(&self, other: &Self, rng: &mut R) -> Result<(Self, Self)> {
        if self.len() < 2 && self.len() == other.len() {
            return Ok((self.clone(), other.clone()));
        }
        let (a, b) = operators::single_point_crossover(&self.genome, &other.genome, rng)?;
        Ok((self.offspring(a), self.offspring(b)))
    }

    /// Uniform crossover with `other`: a fair coin per position decides which
    /// child inherits which parent's symbol.
    ///
    /// # Errors
    /// [`EvolveError::LengthMismatch`] if the genome lengths differ.
    pub fn uniform_crossover<R: Rng>(&self, other: &Self, rng: &mut R) -> Result<(Self, Self)> {
        let (a, b) = operators::uniform_crossover(&self.genome, &other.genome, rng)?;
        Ok((self.offspring(a), self.offspring(b)))
    }

    /// Mutates the genome in place, then re-evaluates it.
    ///
    /// Runs `num_positions` trials; each picks a random position and, with
    /// probability `probability`, redraws it from the alphabet.
    pub fn mutate<R: Rng>(&mut self, num_positions: usize, probability: f64, rng: &mut R) {
        operators::resample_mutation(
            &mut self.genome,
            &self.alphabet,
            num_positions,
            probability,
            rng,
        );
        self.fitness = self.evaluator.evaluate(&self.genome);
    }
}

impl<T> Organism<T> {
    /// The genome.
    pub fn genome(&self) -> &Genome<T> {
        &self.genome
    }

    /// Cached fitness, always equal to `evaluator(genome)`.
    pub fn fitness(&self) -> Fitness {
        self.fitness
    }

    /// Alphabet used for mutation draws.
    pub fn alphabet(&self) -> &Arc<Alphabet<T>> {
        &self.alphabet
    }

    /// Genome length.
    pub fn len(&self) -> usize {
        self.genome.len()
    }

    /// Always `false` for organisms built through the public constructors.
    pub fn is_empty(&self) -> bool {
        self.genome.is_empty()
    }
}

impl<T: fmt::Debug> fmt::Debug for Organism<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Organism")
            .field("genome", &self.genome)
            .field("fitness", &self.fitness)
            .finish_non_exhaustive()
    }
}

impl<T: fmt::Display> fmt::Display for Organism<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.genome)
    }
}
