//! Evolution configuration.
//!
//! [`EvolutionConfig`] holds all parameters that control the generational
//! loop, plus the crossover and mutation policies applied to offspring.

use super::organism::Organism;
use super::selection::Selection;
use super::types::{Fitness, Objective, Symbol};
use crate::error::{EvolveError, Result};
use rand::Rng;

/// Crossover policy applied to every selected parent pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Crossover {
    /// One random cut point, tails swapped. See [`Organism::crossover`].
    #[default]
    SinglePoint,
    /// Per-position coin flip. See [`Organism::uniform_crossover`].
    Uniform,
}

impl Crossover {
    /// Produces two children from `a` and `b`. Parents are never modified.
    pub fn apply<T: Symbol, R: Rng>(
        &self,
        a: &Organism<T>,
        b: &Organism<T>,
        rng: &mut R,
    ) -> Result<(Organism<T>, Organism<T>)> {
        match self {
            Crossover::SinglePoint => a.crossover(b, rng),
            Crossover::Uniform => a.uniform_crossover(b, rng),
        }
    }
}

/// Resampling mutation policy. See [`Organism::mutate`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Mutation {
    /// Number of independent position trials per organism.
    pub num_positions: usize,
    /// Probability that a trial redraws its position (0.0–1.0).
    pub probability: f64,
}

impl Default for Mutation {
    fn default() -> Self {
        Self {
            num_positions: 2,
            probability: 0.3,
        }
    }
}

impl Mutation {
    /// Mutates `organism` in place and refreshes its fitness.
    pub fn apply<T: Symbol, R: Rng>(&self, organism: &mut Organism<T>, rng: &mut R) {
        organism.mutate(self.num_positions, self.probability, rng);
    }
}

/// Configuration for an evolution run.
///
/// # Defaults
///
/// ```
/// use u_evolve::ga::{EvolutionConfig, Objective};
///
/// let config = EvolutionConfig::default();
/// assert_eq!(config.population_size, 100);
/// assert_eq!(config.generation_limit, 100);
/// assert_eq!(config.objective, Objective::Maximize);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_evolve::ga::{EvolutionConfig, Objective, Selection};
///
/// let config = EvolutionConfig::default()
///     .with_population_size(1000)
///     .with_genome_length(11)
///     .with_objective(Objective::Minimize)
///     .with_fitness_limit(0)
///     .with_generation_limit(500)
///     .with_selection(Selection::Tournament(3))
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EvolutionConfig {
    /// Number of organisms kept in every generation.
    pub population_size: usize,

    /// Number of symbols in every genome.
    pub genome_length: usize,

    /// Whether higher or lower fitness is better.
    pub objective: Objective,

    /// Fitness at which the run stops early.
    ///
    /// Reached when the best fitness is `>=` the limit (maximize) or `<=`
    /// the limit (minimize). Use an unreachable value when the optimum is
    /// unknown.
    pub fitness_limit: Fitness,

    /// Hard upper bound on the number of generations.
    ///
    /// Generation indices run from 0 to `generation_limit - 1`.
    pub generation_limit: usize,

    /// Fraction of the ranked population carried over unchanged (0.0–1.0).
    ///
    /// The elite count is `floor(elite_fraction * population_size)`. At
    /// least one elite keeps the best fitness from ever getting worse.
    pub elite_fraction: f64,

    /// Parent selection strategy.
    pub selection: Selection,

    /// Crossover policy.
    pub crossover: Crossover,

    /// Mutation policy applied to both children of every crossover.
    pub mutation: Mutation,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for EvolutionConfig {
    fn default() -> Self {
        Self {
            population_size: 100,
            genome_length: 8,
            objective: Objective::Maximize,
            fitness_limit: Fitness::MAX,
            generation_limit: 100,
            elite_fraction: 0.1,
            selection: Selection::default(),
            crossover: Crossover::default(),
            mutation: Mutation::default(),
            seed: None,
        }
    }
}

impl EvolutionConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the genome length.
    pub fn with_genome_length(mut self, n: usize) -> Self {
        self.genome_length = n;
        self
    }

    /// Sets the optimization direction.
    pub fn with_objective(mut self, objective: Objective) -> Self {
        self.objective = objective;
        self
    }

    /// Sets the early-stop fitness threshold.
    pub fn with_fitness_limit(mut self, limit: Fitness) -> Self {
        self.fitness_limit = limit;
        self
    }

    /// Sets the maximum number of generations.
    pub fn with_generation_limit(mut self, n: usize) -> Self {
        self.generation_limit = n;
        self
    }

    /// Sets the elite fraction.
    pub fn with_elite_fraction(mut self, fraction: f64) -> Self {
        self.elite_fraction = fraction.clamp(0.0, 1.0);
        self
    }

    /// Sets the selection strategy.
    pub fn with_selection(mut self, selection: Selection) -> Self {
        self.selection = selection;
        self
    }

    /// Sets the crossover policy.
    pub fn with_crossover(mut self, crossover: Crossover) -> Self {
        self.crossover = crossover;
        self
    }

    /// Sets the mutation policy.
    pub fn with_mutation(mut self, num_positions: usize, probability: f64) -> Self {
        self.mutation = Mutation {
            num_positions,
            probability: probability.clamp(0.0, 1.0),
        };
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Number of organisms carried over unchanged each generation.
    pub fn elite_count(&self) -> usize {
        (self.population_size as f64 * self.elite_fraction) as usize
    }

    /// Validates the configuration.
    ///
    /// # Errors
    /// - [`EvolveError::InvalidLength`] for a zero population size or genome length
    /// - [`EvolveError::InvalidConfig`] for any other out-of-range parameter
    pub fn validate(&self) -> Result<()> {
        if self.population_size == 0 {
            return Err(EvolveError::InvalidLength {
                what: "population_size",
            });
        }
        if self.genome_length == 0 {
            return Err(EvolveError::InvalidLength {
                what: "genome_length",
            });
        }
        if self.generation_limit == 0 {
            return Err(invalid("generation_limit must be at least 1"));
        }
        if !(0.0..=1.0).contains(&self.elite_fraction) {
            return Err(invalid("elite_fraction must be within [0, 1]"));
        }
        if self.population_size > 1 && self.elite_count() >= self.population_size {
            return Err(invalid("elite_fraction too high: elites fill entire population"));
        }
        if !(0.0..=1.0).contains(&self.mutation.probability) {
            return Err(invalid("mutation probability must be within [0, 1]"));
        }
        match self.selection {
            Selection::Tournament(0) => {
                return Err(invalid("tournament size must be at least 1"));
            }
            Selection::RankBiased { top, rest } => {
                if top.0 > top.1 || rest.0 > rest.1 {
                    return Err(invalid("selection weight ranges must satisfy lo <= hi"));
                }
            }
            _ => {}
        }
        Ok(())
    }
}

fn invalid(message: &str) -> EvolveError {
    EvolveError::InvalidConfig(message.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ga::random::create_rng;
    use crate::ga::{Alphabet, SharedEvaluator};
    use std::sync::Arc;

    #[test]
    fn test_default_config() {
        let config = EvolutionConfig::default();
        assert_eq!(config.population_size, 100);
        assert_eq!(config.genome_length, 8);
        assert_eq!(config.objective, Objective::Maximize);
        assert_eq!(config.fitness_limit, i64::MAX);
        assert_eq!(config.generation_limit, 100);
        assert!((config.elite_fraction - 0.1).abs() < 1e-10);
        assert_eq!(config.selection, Selection::rank_biased());
        assert_eq!(config.crossover, Crossover::SinglePoint);
        assert_eq!(config.mutation.num_positions, 2);
        assert!((config.mutation.probability - 0.3).abs() < 1e-10);
        assert!(config.seed.is_none());
        assert_eq!(config.elite_count(), 10);
    }

    #[test]
    fn test_builder_pattern() {
        let config = EvolutionConfig::default()
            .with_population_size(500)
            .with_genome_length(14)
            .with_objective(Objective::Minimize)
            .with_fitness_limit(0)
            .with_generation_limit(300)
            .with_elite_fraction(0.2)
            .with_selection(Selection::FitnessProportional)
            .with_crossover(Crossover::Uniform)
            .with_mutation(3, 0.5)
            .with_seed(42);

        assert_eq!(config.population_size, 500);
        assert_eq!(config.genome_length, 14);
        assert_eq!(config.objective, Objective::Minimize);
        assert_eq!(config.fitness_limit, 0);
        assert_eq!(config.generation_limit, 300);
        assert_eq!(config.elite_count(), 100);
        assert_eq!(config.selection, Selection::FitnessProportional);
        assert_eq!(config.crossover, Crossover::Uniform);
        assert_eq!(config.mutation.num_positions, 3);
        assert_eq!(config.seed, Some(42));
    }

    #[test]
    fn test_clamp_rates() {
        let config = EvolutionConfig::default()
            .with_elite_fraction(-0.5)
            .with_mutation(2, 1.5);
        assert!((config.elite_fraction - 0.0).abs() < 1e-10);
        assert!((config.mutation.probability - 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_elite_count_floors() {
        let config = EvolutionConfig::default()
            .with_population_size(15)
            .with_elite_fraction(0.1);
        assert_eq!(config.elite_count(), 1);
        let config = config.with_population_size(9);
        assert_eq!(config.elite_count(), 0);
    }

    #[test]
    fn test_validate_ok() {
        assert!(EvolutionConfig::default().validate().is_ok());
    }

    #[test]
    fn test_validate_zero_lengths() {
        let config = EvolutionConfig::default().with_population_size(0);
        assert_eq!(
            config.validate(),
            Err(EvolveError::InvalidLength {
                what: "population_size"
            })
        );
        let config = EvolutionConfig::default().with_genome_length(0);
        assert_eq!(
            config.validate(),
            Err(EvolveError::InvalidLength {
                what: "genome_length"
            })
        );
    }

    #[test]
    fn test_validate_zero_generations() {
        let config = EvolutionConfig::default().with_generation_limit(0);
        assert!(matches!(config.validate(), Err(EvolveError::InvalidConfig(_))));
    }

    #[test]
    fn test_validate_elite_too_high() {
        let config = EvolutionConfig::default()
            .with_population_size(10)
            .with_elite_fraction(1.0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_raw_field_values() {
        let mut config = EvolutionConfig::default();
        config.elite_fraction = 1.5;
        assert!(config.validate().is_err());

        let mut config = EvolutionConfig::default();
        config.mutation.probability = f64::NAN;
        assert!(config.validate().is_err());

        let config = EvolutionConfig::default().with_selection(Selection::Tournament(0));
        assert!(config.validate().is_err());

        let config = EvolutionConfig::default().with_selection(Selection::RankBiased {
            top: (50, 30),
            rest: (5, 15),
        });
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_single_organism_population_is_valid() {
        let config = EvolutionConfig::default().with_population_size(1);
        assert!(config.validate().is_ok());
        assert_eq!(config.elite_count(), 0);
    }

    #[test]
    fn test_policies_apply() {
        let alphabet = Arc::new(Alphabet::binary());
        let ones: SharedEvaluator<u8> =
            Arc::new(|g: &[u8]| g.iter().filter(|&&b| b == 1).count() as i64);
        let mut rng = create_rng(42);
        let a = Organism::from_genome(vec![0u8; 6], alphabet.clone(), ones.clone()).unwrap();
        let b = Organism::from_genome(vec![1u8; 6], alphabet, ones).unwrap();

        for crossover in [Crossover::SinglePoint, Crossover::Uniform] {
            let (mut c1, c2) = crossover.apply(&a, &b, &mut rng).unwrap();
            assert_eq!(c1.fitness() + c2.fitness(), 6);

            Mutation::default().apply(&mut c1, &mut rng);
            let expected = c1.genome().iter().filter(|&&b| b == 1).count() as i64;
            assert_eq!(c1.fitness(), expected);
        }
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_round_trip() {
        let config = EvolutionConfig::default()
            .with_population_size(250)
            .with_genome_length(11)
            .with_objective(Objective::Minimize)
            .with_fitness_limit(0)
            .with_elite_fraction(0.25)
            .with_selection(Selection::Tournament(4))
            .with_crossover(Crossover::Uniform)
            .with_seed(7);

        let json = serde_json::to_string(&config).unwrap();
        let restored: EvolutionConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, config);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_missing_fields_use_defaults() {
        let restored: EvolutionConfig =
            serde_json::from_str(r#"{"population_size": 50, "seed": 3}"#).unwrap();
        assert_eq!(
            restored,
            EvolutionConfig::default()
                .with_population_size(50)
                .with_seed(3)
        );
    }
}
