//! Population lifecycle and the generational loop.
//!
//! ```text
//! Seeding → Evaluating → CheckTermination ─┬─→ Terminal
//!               ↑                          │
//!               └──────── Reproducing ←────┘
//! ```
//!
//! - **Seeding**: random organisms, resampled while the total fitness is 0
//! - **Evaluating**: rank best-first and record the best into the history
//! - **CheckTermination**: generation limit or fitness limit reached
//! - **Reproducing**: elites carried over, the rest bred by selection,
//!   crossover and mutation

use super::alphabet::Alphabet;
use super::config::EvolutionConfig;
use super::history::History;
use super::organism::Organism;
use super::runner::EvolutionResult;
use super::selection::SelectionPlan;
use super::types::{Fitness, SharedEvaluator, Symbol};
use crate::error::{EvolveError, Result};
use rand::Rng;
use std::sync::Arc;

/// An ordered collection of organisms evolving under one configuration.
///
/// After [`rank`](Self::rank) the organisms are ordered best first;
/// otherwise they keep insertion order. The population always holds exactly
/// `config.population_size` organisms between generations.
#[derive(Debug, Clone)]
pub struct Population<T> {
    organisms: Vec<Organism<T>>,
    config: EvolutionConfig,
    history: History<T>,
}

impl<T: Symbol> Population<T> {
    /// Generates the initial population.
    ///
    /// A batch whose total fitness is exactly 0 carries no usable signal
    /// and is discarded and regenerated until a batch with a nonzero total
    /// appears.
    ///
    /// # Errors
    /// Any error from [`EvolutionConfig::validate`].
    pub fn seed<R: Rng>(
        config: &EvolutionConfig,
        alphabet: Arc<Alphabet<T>>,
        evaluator: SharedEvaluator<T>,
        rng: &mut R,
    ) -> Result<Self> {
        config.validate()?;

        let mut attempt = 1usize;
        let organisms = loop {
            let batch = (0..config.population_size)
                .map(|_| {
                    Organism::new(
                        config.genome_length,
                        Arc::clone(&alphabet),
                        Arc::clone(&evaluator),
                        rng,
                    )
                })
                .collect::<Result<Vec<_>>>()?;

            if total_fitness(&batch) != 0 {
                break batch;
            }
            log::trace!("seed attempt {attempt}: total fitness is 0, reseeding");
            attempt += 1;
        };

        if attempt > 1 {
            log::debug!("initial population seeded after {attempt} attempts");
        }

        Ok(Self {
            organisms,
            config: config.clone(),
            history: History::default(),
        })
    }

    /// Wraps existing organisms, e.g. a population evolved earlier.
    ///
    /// # Errors
    /// - Any error from [`EvolutionConfig::validate`]
    /// - [`EvolveError::LengthMismatch`] if the organism count differs from
    ///   `population_size`, or a genome differs from `genome_length`
    pub fn from_organisms(config: &EvolutionConfig, organisms: Vec<Organism<T>>) -> Result<Self> {
        config.validate()?;
        if organisms.len() != config.population_size {
            return Err(EvolveError::LengthMismatch {
                expected: config.population_size,
                actual: organisms.len(),
            });
        }
        if let Some(odd) = organisms.iter().find(|o| o.len() != config.genome_length) {
            return Err(EvolveError::LengthMismatch {
                expected: config.genome_length,
                actual: odd.len(),
            });
        }
        Ok(Self {
            organisms,
            config: config.clone(),
            history: History::default(),
        })
    }

    /// Sorts the organisms best first. Ties keep their relative order.
    pub fn rank(&mut self) {
        let objective = self.config.objective;
        self.organisms
            .sort_by(|a, b| objective.rank(a.fitness(), b.fitness()));
    }

    /// The best organism under the configured objective.
    pub fn best(&self) -> &Organism<T> {
        let objective = self.config.objective;
        self.organisms
            .iter()
            .min_by(|a, b| objective.rank(a.fitness(), b.fitness()))
            .expect("population must not be empty")
    }

    /// Returns `true` if the run must stop after `generation`.
    ///
    /// That is the case on the last allowed generation, or once the best
    /// organism reaches the fitness limit.
    pub fn is_terminal(&self, generation: usize) -> bool {
        generation + 1 >= self.config.generation_limit
            || self
                .config
                .objective
                .reached(self.best().fitness(), self.config.fitness_limit)
    }

    /// Builds this generation's selection plan from the current ranking.
    pub fn selection_plan<R: Rng>(&self, rng: &mut R) -> SelectionPlan {
        let fitness: Vec<Fitness> = self.organisms.iter().map(Organism::fitness).collect();
        self.config
            .selection
            .prepare(&fitness, self.config.objective, rng)
    }

    /// Draws a parent pair (with replacement) from `plan`.
    pub fn select_pair<R: Rng>(
        &self,
        plan: &SelectionPlan,
        rng: &mut R,
    ) -> (&Organism<T>, &Organism<T>) {
        let (i, j) = plan.select_pair(rng);
        (&self.organisms[i], &self.organisms[j])
    }

    /// Replaces the population with the next generation.
    ///
    /// The top `elite_count` organisms are carried over unchanged. Then
    /// `population_size / 2` breeding rounds each select two parents,
    /// cross them over and mutate both children. If the buffer is still
    /// short (odd size, no elites) extra rounds fill it, and any overshoot
    /// is truncated.
    ///
    /// # Errors
    /// Propagates crossover errors; the population is left unchanged.
    pub fn reproduce<R: Rng>(&mut self, rng: &mut R) -> Result<()> {
        self.rank();

        let size = self.config.population_size;
        let elite_count = self.config.elite_count().min(size);
        let plan = self.selection_plan(rng);

        let mut next_gen: Vec<Organism<T>> = Vec::with_capacity(size + 1);
        next_gen.extend_from_slice(&self.organisms[..elite_count]);

        let rounds = size / 2;
        let mut round = 0;
        while round < rounds || next_gen.len() < size {
            let (p1, p2) = self.select_pair(&plan, rng);
            let (mut c1, mut c2) = self.config.crossover.apply(p1, p2, rng)?;
            self.config.mutation.apply(&mut c1, rng);
            self.config.mutation.apply(&mut c2, rng);
            next_gen.push(c1);
            next_gen.push(c2);
            round += 1;
        }

        next_gen.truncate(size);
        self.organisms = next_gen;
        Ok(())
    }

    /// Runs the generational loop to completion.
    ///
    /// Each generation is ranked and recorded before the termination check,
    /// so the history holds one entry per generation index from 0 to the
    /// last one.
    pub fn evolve<R: Rng>(mut self, rng: &mut R) -> Result<EvolutionResult<T>> {
        let mut generation = 0usize;
        loop {
            self.rank();
            let best = &self.organisms[0];
            log::debug!(
                "generation {generation}: best fitness {} ({best})",
                best.fitness()
            );
            self.history.record(generation, best);

            if self.is_terminal(generation) {
                break;
            }
            self.reproduce(rng)?;
            generation += 1;
        }

        self.rank();
        let best_fitness = self.organisms[0].fitness();
        let reached_fitness_limit = self
            .config
            .objective
            .reached(best_fitness, self.config.fitness_limit);

        if reached_fitness_limit {
            log::info!(
                "fitness limit {} reached at generation {generation} (best {best_fitness})",
                self.config.fitness_limit
            );
        } else {
            log::info!(
                "generation limit {} exhausted (best {best_fitness})",
                self.config.generation_limit
            );
        }

        Ok(EvolutionResult {
            best_fitness,
            population: self.organisms,
            generations: generation,
            history: self.history,
            reached_fitness_limit,
        })
    }

    /// Organisms in current order.
    pub fn organisms(&self) -> &[Organism<T>] {
        &self.organisms
    }

    /// Consumes the population and returns its organisms.
    pub fn into_organisms(self) -> Vec<Organism<T>> {
        self.organisms
    }

    /// Best organism of every ranked generation so far.
    pub fn history(&self) -> &History<T> {
        &self.history
    }

    /// The configuration this population evolves under.
    pub fn config(&self) -> &EvolutionConfig {
        &self.config
    }

    /// Sum of all cached fitness values (saturating).
    pub fn total_fitness(&self) -> Fitness {
        total_fitness(&self.organisms)
    }

    pub fn len(&self) -> usize {
        self.organisms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.organisms.is_empty()
    }
}

fn total_fitness<T>(organisms: &[Organism<T>]) -> Fitness {
    organisms
        .iter()
        .fold(0, |total: Fitness, o| total.saturating_add(o.fitness()))
}
