//! Evolution entry points.
//!
//! [`EvolutionRunner`] orchestrates a complete run:
//! seeding → (ranking → termination check → reproduction)* → final ranking.

use super::alphabet::Alphabet;
use super::config::EvolutionConfig;
use super::history::History;
use super::organism::Organism;
use super::population::Population;
use super::random::rng_from_seed;
use super::types::{Fitness, FitnessEvaluator, Objective, SharedEvaluator, Symbol};
use crate::error::Result;
use rand::Rng;
use std::sync::Arc;

/// Result of an evolution run.
#[derive(Debug, Clone)]
pub struct EvolutionResult<T> {
    /// Final population, ranked best first.
    pub population: Vec<Organism<T>>,

    /// Index of the last generation that ran (0-based).
    pub generations: usize,

    /// Best organism of every generation.
    pub history: History<T>,

    /// Fitness of `population[0]`.
    pub best_fitness: Fitness,

    /// Whether the run ended on the fitness limit rather than the
    /// generation limit.
    pub reached_fitness_limit: bool,
}

impl<T> EvolutionResult<T> {
    /// The best organism of the final population.
    pub fn best(&self) -> &Organism<T> {
        &self.population[0]
    }
}

/// Executes evolution runs.
///
/// # Usage
///
/// ```
/// use std::sync::Arc;
/// use u_evolve::ga::{Alphabet, EvolutionConfig, EvolutionRunner, Objective};
/// use u_evolve::problems::MismatchCount;
///
/// let target = MismatchCount::new("Hi!");
/// let config = EvolutionConfig::default()
///     .with_population_size(200)
///     .with_genome_length(target.target_len())
///     .with_objective(Objective::Minimize)
///     .with_fitness_limit(0)
///     .with_generation_limit(300)
///     .with_seed(42);
///
/// let result = EvolutionRunner::run(&config, Arc::new(Alphabet::text()), Arc::new(target)).unwrap();
/// assert!(result.generations < 300);
/// assert_eq!(result.history.len(), result.generations + 1);
/// ```
pub struct EvolutionRunner;

impl EvolutionRunner {
    /// Runs evolution with a random source derived from `config.seed`.
    ///
    /// # Errors
    /// Configuration errors from [`EvolutionConfig::validate`] and operator
    /// errors propagated from the loop.
    pub fn run<T: Symbol>(
        config: &EvolutionConfig,
        alphabet: Arc<Alphabet<T>>,
        evaluator: SharedEvaluator<T>,
    ) -> Result<EvolutionResult<T>> {
        let mut rng = rng_from_seed(config.seed);
        Self::run_with_rng(config, alphabet, evaluator, &mut rng)
    }

    /// Runs evolution drawing all randomness from `rng`.
    ///
    /// `config.seed` is ignored.
    pub fn run_with_rng<T: Symbol, R: Rng>(
        config: &EvolutionConfig,
        alphabet: Arc<Alphabet<T>>,
        evaluator: SharedEvaluator<T>,
        rng: &mut R,
    ) -> Result<EvolutionResult<T>> {
        let population = Population::seed(config, alphabet, evaluator, rng)?;
        population.evolve(rng)
    }
}

/// One-call evolution with the default selection, crossover and mutation
/// policies and a fresh random seed.
///
/// `elite_fraction` must lie within `[0, 1]`.
///
/// ```
/// use u_evolve::ga::{run_evolution, Alphabet};
/// use u_evolve::problems::Knapsack;
///
/// let knapsack = Knapsack::demo();
/// let result = run_evolution(100, knapsack.len(), knapsack, Alphabet::binary(), true, 190, 300, 0.1)
///     .unwrap();
/// assert!(result.generations <= 299);
/// ```
#[allow(clippy::too_many_arguments)]
pub fn run_evolution<T, E>(
    population_size: usize,
    genome_length: usize,
    fitness_evaluator: E,
    alphabet: Alphabet<T>,
    high_fitness_best: bool,
    fitness_limit: Fitness,
    generation_limit: usize,
    elite_fraction: f64,
) -> Result<EvolutionResult<T>>
where
    T: Symbol,
    E: FitnessEvaluator<T> + 'static,
{
    let config = EvolutionConfig {
        population_size,
        genome_length,
        objective: Objective::from_high_fitness_best(high_fitness_best),
        fitness_limit,
        generation_limit,
        elite_fraction,
        ..EvolutionConfig::default()
    };
    EvolutionRunner::run(&config, Arc::new(alphabet), Arc::new(fitness_evaluator))
}

// ============================================================================
// Tests
// ============================================================================
