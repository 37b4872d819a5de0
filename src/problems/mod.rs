//! Reference problems.
//!
//! Ready-made [`FitnessEvaluator`](crate::ga::FitnessEvaluator)s used by the
//! tests and benchmarks, and as templates for custom problems:
//!
//! - [`Knapsack`]: 0/1 knapsack on `u8` bit genomes (maximize value)
//! - [`MatchCount`]: matching characters against a target (maximize)
//! - [`MismatchCount`]: differing characters against a target (minimize)

pub mod knapsack;
pub mod string_match;

pub use knapsack::{Item, Knapsack};
pub use string_match::{MatchCount, MismatchCount};
