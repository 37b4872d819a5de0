//! Generic evolutionary search.
//!
//! Given a way to score candidate solutions, `u-evolve` iteratively improves
//! a population of fixed-length genomes toward a target fitness:
//!
//! - **Organisms** cache their fitness and never let it go stale.
//! - **Selection** is rank-biased: the top third of each ranked generation
//!   is favored through randomly drawn weights.
//! - **Crossover** (single-point or uniform) never touches the parents.
//! - **Mutation** resamples random positions from the alphabet.
//! - **Elitism** carries the best fraction of each generation forward, so
//!   the best fitness never gets worse.
//!
//! All randomness flows through an explicit `rand::Rng`, so runs are
//! reproducible from a seed.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use u_evolve::ga::{Alphabet, EvolutionConfig, EvolutionRunner};
//! use u_evolve::problems::Knapsack;
//!
//! let knapsack = Knapsack::demo();
//! let config = EvolutionConfig::default()
//!     .with_population_size(100)
//!     .with_genome_length(knapsack.len())
//!     .with_fitness_limit(190)
//!     .with_generation_limit(300)
//!     .with_seed(42);
//!
//! let result = EvolutionRunner::run(&config, Arc::new(Alphabet::binary()), Arc::new(knapsack)).unwrap();
//! assert!(result.best_fitness <= 190);
//! ```
//!
//! # Architecture
//!
//! - [`ga`]: the engine, independent of any problem domain
//! - [`problems`]: reference evaluators (knapsack, string matching)
//! - [`error`]: the crate-wide error type

pub mod error;
pub mod ga;
pub mod problems;

pub use error::{EvolveError, Result};
