//! Genetic Algorithm engine.
//!
//! A generic, single-objective evolution engine over fixed-length symbol
//! genomes. The caller supplies an [`Alphabet`] and a [`FitnessEvaluator`];
//! the engine handles population lifecycle, selection, crossover, mutation
//! and the elitist generational loop.
//!
//! # Core Types
//!
//! - [`Genome`]: fixed-length symbol sequence
//! - [`Organism`]: genome + cached fitness + captured alphabet/evaluator
//! - [`Population`]: ranked organisms, the generational loop, [`History`]
//!
//! # Policies
//!
//! - [`Selection`]: rank-biased weighting (default), tournament, roulette
//! - [`Crossover`]: single-point (default) or uniform
//! - [`Mutation`]: resampling of random positions
//!
//! # Entry Points
//!
//! - [`EvolutionRunner`]: runs a configured evolution
//! - [`run_evolution`]: one-call form with default policies
//!
//! # Submodules
//!
//! - [`operators`]: slice-level crossover and mutation primitives
//! - [`random`]: seeded random source construction
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*
//! - De Jong (2006), *Evolutionary Computation: A Unified Approach*

mod alphabet;
mod config;
mod history;
pub mod operators;
mod organism;
mod population;
pub mod random;
mod runner;
mod selection;
mod types;

pub use alphabet::Alphabet;
pub use config::{Crossover, EvolutionConfig, Mutation};
pub use history::{GenerationRecord, History};
pub use organism::Organism;
pub use population::Population;
pub use runner::{run_evolution, EvolutionResult, EvolutionRunner};
pub use selection::{Selection, SelectionPlan};
pub use types::{Fitness, FitnessEvaluator, Genome, Objective, SharedEvaluator, Symbol};
