//! Per-generation record of the best organism.

use super::organism::Organism;
use super::types::{Fitness, Objective};
use std::collections::BTreeMap;

/// Best organism of one generation, captured right after ranking.
#[derive(Debug, Clone)]
pub struct GenerationRecord<T> {
    /// Fitness of the best organism.
    pub best_fitness: Fitness,
    /// Snapshot of the best organism.
    pub best: Organism<T>,
}

/// Mapping from generation index to that generation's best organism.
#[derive(Debug, Clone)]
pub struct History<T> {
    records: BTreeMap<usize, GenerationRecord<T>>,
}

impl<T> Default for History<T> {
    fn default() -> Self {
        Self {
            records: BTreeMap::new(),
        }
    }
}

impl<T: Clone> History<T> {
    /// Records (or overwrites) the best organism of `generation`.
    pub fn record(&mut self, generation: usize, best: &Organism<T>) {
        self.records.insert(
            generation,
            GenerationRecord {
                best_fitness: best.fitness(),
                best: best.clone(),
            },
        );
    }
}

impl<T> History<T> {
    /// Record of `generation`, if it ran.
    pub fn get(&self, generation: usize) -> Option<&GenerationRecord<T>> {
        self.records.get(&generation)
    }

    /// Most recent record.
    pub fn last(&self) -> Option<(usize, &GenerationRecord<T>)> {
        self.records.iter().next_back().map(|(&g, r)| (g, r))
    }

    /// Number of recorded generations.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records in generation order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &GenerationRecord<T>)> {
        self.records.iter().map(|(&g, r)| (g, r))
    }

    /// Best fitness per generation, in generation order.
    pub fn best_fitness_series(&self) -> Vec<Fitness> {
        self.records.values().map(|r| r.best_fitness).collect()
    }

    /// Returns `true` if the best fitness never got worse from one
    /// generation to the next under `objective`.
    pub fn is_non_worsening(&self, objective: Objective) -> bool {
        self.best_fitness_series()
            .windows(2)
            .all(|w| !objective.is_better(w[0], w[1]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ga::{Alphabet, SharedEvaluator};
    use std::sync::Arc;

    fn organism(bits: Vec<u8>) -> Organism<u8> {
        let ones: SharedEvaluator<u8> =
            Arc::new(|g: &[u8]| g.iter().filter(|&&b| b == 1).count() as i64);
        Organism::from_genome(bits, Arc::new(Alphabet::binary()), ones).unwrap()
    }

    #[test]
    fn test_record_and_lookup() {
        let mut history = History::default();
        history.record(0, &organism(vec![1, 0, 0]));
        history.record(1, &organism(vec![1, 1, 0]));

        assert_eq!(history.len(), 2);
        assert_eq!(history.get(0).unwrap().best_fitness, 1);
        assert_eq!(history.get(1).unwrap().best.genome().as_slice(), &[1, 1, 0]);
        assert!(history.get(2).is_none());

        let (generation, last) = history.last().unwrap();
        assert_eq!(generation, 1);
        assert_eq!(last.best_fitness, 2);
        assert_eq!(history.best_fitness_series(), vec![1, 2]);
    }

    #[test]
    fn test_snapshot_is_independent() {
        let mut history = History::default();
        let mut org = organism(vec![0, 0]);
        history.record(0, &org);
        org.replace_genome(vec![1, 1]).unwrap();
        assert_eq!(history.get(0).unwrap().best_fitness, 0);
        assert_eq!(history.get(0).unwrap().best.genome().as_slice(), &[0, 0]);
    }

    #[test]
    fn test_non_worsening() {
        let mut history = History::default();
        for (g, bits) in [vec![1, 0, 0], vec![1, 0, 0], vec![1, 1, 1]].into_iter().enumerate() {
            history.record(g, &organism(bits));
        }
        assert!(history.is_non_worsening(Objective::Maximize));
        assert!(!history.is_non_worsening(Objective::Minimize));
    }

    #[test]
    fn test_empty_history() {
        let history: History<u8> = History::default();
        assert!(history.is_empty());
        assert!(history.last().is_none());
        assert!(history.is_non_worsening(Objective::Maximize));
    }
}
