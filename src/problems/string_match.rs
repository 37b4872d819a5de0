//! Evolving a genome toward a fixed target string.

use crate::ga::{Fitness, FitnessEvaluator};

/// Counts positions that match the target. Maximize; the optimum equals the
/// target length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchCount {
    target: Vec<char>,
}

impl MatchCount {
    pub fn new(target: &str) -> Self {
        Self {
            target: target.chars().collect(),
        }
    }

    /// Genome length needed to spell the target.
    pub fn target_len(&self) -> usize {
        self.target.len()
    }
}

impl FitnessEvaluator<char> for MatchCount {
    fn evaluate(&self, genome: &[char]) -> Fitness {
        genome
            .iter()
            .zip(&self.target)
            .filter(|(g, t)| g == t)
            .count() as Fitness
    }
}

/// Counts positions that differ from the target. Minimize; the optimum is 0.
///
/// Positions beyond the shorter of genome and target count as mismatches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MismatchCount {
    target: Vec<char>,
}

impl MismatchCount {
    pub fn new(target: &str) -> Self {
        Self {
            target: target.chars().collect(),
        }
    }

    pub fn target_len(&self) -> usize {
        self.target.len()
    }
}

impl FitnessEvaluator<char> for MismatchCount {
    fn evaluate(&self, genome: &[char]) -> Fitness {
        let differing = genome
            .iter()
            .zip(&self.target)
            .filter(|(g, t)| g != t)
            .count();
        (differing + genome.len().abs_diff(self.target.len())) as Fitness
    }
}
